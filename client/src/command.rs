// Copyright (c) 2025 sbksba
//
// This software is licensed under the terms of the MIT License.
// See the LICENSE file in the project root for the full license text.

pub const HELP: &str = "\
Commands:
  add <title> [:: <description>]   create a todo
  done <id>                        mark a todo completed
  undo <id>                        mark a todo not completed
  rm <id>                          delete a todo
  list                             reload todos from the server
  help                             show this help
  quit                             exit";

/// One line typed at the prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add {
        title: String,
        description: String,
    },
    SetCompleted {
        id: i64,
        completed: bool,
    },
    Delete(i64),
    List,
    Help,
    Quit,
}

impl Command {
    pub fn parse(line: &str) -> Result<Command, String> {
        let line = line.trim();
        let (word, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let rest = rest.trim();

        match word {
            "add" => {
                let (title, description) = rest.split_once("::").unwrap_or((rest, ""));
                Ok(Command::Add {
                    title: title.trim().to_string(),
                    description: description.trim().to_string(),
                })
            }
            "done" => Ok(Command::SetCompleted {
                id: parse_id(rest)?,
                completed: true,
            }),
            "undo" => Ok(Command::SetCompleted {
                id: parse_id(rest)?,
                completed: false,
            }),
            "rm" => Ok(Command::Delete(parse_id(rest)?)),
            "list" => Ok(Command::List),
            "help" | "" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            other => Err(format!("unknown command: {other}")),
        }
    }
}

fn parse_id(text: &str) -> Result<i64, String> {
    let text = text.trim_start_matches('#');
    text.parse().map_err(|_| format!("invalid todo id: {text:?}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_with_description() {
        assert_eq!(
            Command::parse("add Buy milk :: two litres").unwrap(),
            Command::Add {
                title: "Buy milk".to_string(),
                description: "two litres".to_string(),
            }
        );
    }

    #[test]
    fn test_add_without_title_is_parsed_as_blank() {
        assert_eq!(
            Command::parse("add").unwrap(),
            Command::Add {
                title: String::new(),
                description: String::new(),
            }
        );
    }

    #[test]
    fn test_id_commands() {
        assert_eq!(
            Command::parse("done 3").unwrap(),
            Command::SetCompleted {
                id: 3,
                completed: true
            }
        );
        assert_eq!(
            Command::parse("undo #3").unwrap(),
            Command::SetCompleted {
                id: 3,
                completed: false
            }
        );
        assert_eq!(Command::parse("  rm 12 ").unwrap(), Command::Delete(12));
    }

    #[test]
    fn test_errors() {
        assert!(Command::parse("rm").unwrap_err().contains("invalid todo id"));
        assert!(Command::parse("done abc").is_err());
        assert!(Command::parse("frobnicate").unwrap_err().contains("unknown command"));
    }
}
