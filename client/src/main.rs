// Copyright (c) 2025 sbksba
//
// This software is licensed under the terms of the MIT License.
// See the LICENSE file in the project root for the full license text.
use clap::Parser;
use client::command::{Command, HELP};
use client::render::render;
use client::{HttpTodoApi, TodoView};
use tokio::io::{AsyncBufReadExt, BufReader};

/// Terminal client for the todo server
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Base URL of the todo server
    #[arg(long, env = "TODO_SERVER_URL", default_value = "http://127.0.0.1:3000")]
    server: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Diagnostics go to stderr so they never mix with the rendered view.
    tracing_subscriber::fmt()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    tracing::info!("Using todo server at {}", args.server);

    let view = TodoView::new(HttpTodoApi::new(args.server));
    view.load().await;
    println!("{}", render(&view.snapshot()));
    println!("{HELP}");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match Command::parse(&line) {
            Ok(Command::Add { title, description }) => {
                view.edit_title(title);
                view.edit_description(description);
                view.submit().await;
            }
            Ok(Command::SetCompleted { id, completed }) => view.toggle(id, completed).await,
            Ok(Command::Delete(id)) => view.delete(id).await,
            Ok(Command::List) => view.load().await,
            Ok(Command::Help) => {
                println!("{HELP}");
                continue;
            }
            Ok(Command::Quit) => break,
            Err(e) => {
                eprintln!("{e}");
                continue;
            }
        }
        println!("{}", render(&view.snapshot()));
    }

    Ok(())
}
