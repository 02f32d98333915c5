// Copyright (c) 2025 sbksba
//
// This software is licensed under the terms of the MIT License.
// See the LICENSE file in the project root for the full license text.
use std::net::SocketAddr;

use clap::Parser;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://database/todos.db";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

/// Todo RPC server
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct ServerConfig {
    /// SQLite connection URL
    #[arg(long, env = "DATABASE_URL", default_value = DEFAULT_DATABASE_URL)]
    pub database_url: String,

    /// Address the HTTP server listens on
    #[arg(long = "bind", env = "TODO_BIND_ADDR", default_value = DEFAULT_BIND_ADDR)]
    pub addr: SocketAddr,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_defaults() {
        let config = ServerConfig::try_parse_from([
            "todo-server",
            "--database-url",
            "sqlite::memory:",
            "--bind",
            "127.0.0.1:8080",
        ])
        .unwrap();

        assert_eq!(config.database_url, "sqlite::memory:");
        assert_eq!(config.addr, "127.0.0.1:8080".parse::<SocketAddr>().unwrap());
    }

    #[test]
    fn test_invalid_bind_address_is_rejected() {
        let result = ServerConfig::try_parse_from(["todo-server", "--bind", "not-an-address"]);
        assert!(result.is_err());
    }
}
