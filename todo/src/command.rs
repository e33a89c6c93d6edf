//! Line commands for the terminal front-end.

use crate::types::{Filter, ParseFilterError, TodoAction, TodoId};
use thiserror::Error;

/// Usage text printed by `help`
pub const HELP: &str = "\
Commands:
  add <text>        add a todo
  draft <text>      set the new-todo draft
  submit            add the draft as a todo
  toggle <id>       flip a todo between active and completed
  delete <id>       delete a todo
  edit <id>         start editing a todo
  buffer <text>     replace the edit buffer
  save              commit the edit
  cancel            drop the edit
  filter <kind>     show all | active | completed
  list              redraw the list
  json              print the session state as JSON
  help              show this help
  quit              exit";

/// A parsed input line
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Send an action to the store
    Dispatch(TodoAction),
    /// Redraw the list
    List,
    /// Print the state as JSON
    Json,
    /// Print usage
    Help,
    /// Exit the loop
    Quit,
}

/// Errors from parsing an input line
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    /// Nothing but whitespace
    #[error("empty command")]
    Empty,

    /// Unrecognized verb
    #[error("unknown command `{0}`; type `help` for a list")]
    Unknown(String),

    /// Verb needs an argument
    #[error("`{command}` expects {expected}")]
    MissingArgument {
        /// The verb
        command: &'static str,
        /// What should follow it
        expected: &'static str,
    },

    /// Id argument is not a number
    #[error("invalid todo id `{0}`")]
    InvalidId(String),

    /// Filter argument is not a filter name
    #[error(transparent)]
    InvalidFilter(#[from] ParseFilterError),
}

impl Command {
    /// Parses one input line
    ///
    /// Text arguments keep their inner whitespace; the store decides how to
    /// trim them.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError`] if the verb is unknown or its argument is
    /// missing or malformed.
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let line = line.trim_start();
        let (verb, rest) = line
            .split_once(char::is_whitespace)
            .unwrap_or((line.trim_end(), ""));

        let command = match verb.to_ascii_lowercase().as_str() {
            "" => return Err(CommandError::Empty),
            "add" => Self::Dispatch(TodoAction::AddTodo {
                text: text_arg("add", rest)?,
            }),
            "draft" => Self::Dispatch(TodoAction::SetDraft {
                text: rest.to_string(),
            }),
            "submit" => Self::Dispatch(TodoAction::SubmitDraft),
            "toggle" => Self::Dispatch(TodoAction::ToggleTodo {
                id: id_arg("toggle", rest)?,
            }),
            "delete" | "rm" => Self::Dispatch(TodoAction::DeleteTodo {
                id: id_arg("delete", rest)?,
            }),
            "edit" => Self::Dispatch(TodoAction::BeginEdit {
                id: id_arg("edit", rest)?,
            }),
            "buffer" => Self::Dispatch(TodoAction::UpdateEditBuffer {
                text: rest.to_string(),
            }),
            "save" => Self::Dispatch(TodoAction::CommitEdit),
            "cancel" => Self::Dispatch(TodoAction::CancelEdit),
            "filter" => {
                let kind = rest.trim();
                if kind.is_empty() {
                    return Err(CommandError::MissingArgument {
                        command: "filter",
                        expected: "all, active or completed",
                    });
                }
                Self::Dispatch(TodoAction::SetFilter {
                    filter: kind.parse::<Filter>()?,
                })
            },
            "list" | "ls" => Self::List,
            "json" => Self::Json,
            "help" | "?" => Self::Help,
            "quit" | "exit" => Self::Quit,
            other => return Err(CommandError::Unknown(other.to_string())),
        };

        Ok(command)
    }
}

fn text_arg(command: &'static str, rest: &str) -> Result<String, CommandError> {
    if rest.is_empty() {
        return Err(CommandError::MissingArgument {
            command,
            expected: "some text",
        });
    }
    Ok(rest.to_string())
}

fn id_arg(command: &'static str, rest: &str) -> Result<TodoId, CommandError> {
    let raw = rest.trim();
    if raw.is_empty() {
        return Err(CommandError::MissingArgument {
            command,
            expected: "a todo id",
        });
    }
    raw.parse()
        .map_err(|_| CommandError::InvalidId(raw.to_string()))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)] // Test code
mod tests {
    use super::*;

    #[test]
    fn parses_commands_with_text() {
        assert_eq!(
            Command::parse("add   Buy milk ").unwrap(),
            Command::Dispatch(TodoAction::AddTodo {
                text: "  Buy milk ".to_string(),
            })
        );
        assert_eq!(
            Command::parse("draft").unwrap(),
            Command::Dispatch(TodoAction::SetDraft {
                text: String::new(),
            })
        );
    }

    #[test]
    fn blank_add_is_passed_through() {
        // Whitespace-only text is the store's call, not the parser's
        assert_eq!(
            Command::parse("add    ").unwrap(),
            Command::Dispatch(TodoAction::AddTodo {
                text: "   ".to_string(),
            })
        );
        assert_eq!(
            Command::parse("add").unwrap_err(),
            CommandError::MissingArgument {
                command: "add",
                expected: "some text",
            }
        );
    }

    #[test]
    fn parses_ids() {
        assert_eq!(
            Command::parse("toggle #2").unwrap(),
            Command::Dispatch(TodoAction::ToggleTodo { id: TodoId::new(2) })
        );
        assert_eq!(
            Command::parse("RM 7").unwrap(),
            Command::Dispatch(TodoAction::DeleteTodo { id: TodoId::new(7) })
        );
        assert_eq!(
            Command::parse("edit two").unwrap_err(),
            CommandError::InvalidId("two".to_string())
        );
        assert!(matches!(
            Command::parse("delete").unwrap_err(),
            CommandError::MissingArgument { command: "delete", .. }
        ));
    }

    #[test]
    fn parses_filters() {
        assert_eq!(
            Command::parse("filter Completed").unwrap(),
            Command::Dispatch(TodoAction::SetFilter {
                filter: Filter::Completed,
            })
        );
        let err = Command::parse("filter done").unwrap_err();
        assert!(matches!(err, CommandError::InvalidFilter(_)));
        assert!(err.to_string().contains("unknown filter `done`"));
    }

    #[test]
    fn parses_front_end_verbs() {
        assert_eq!(Command::parse("list").unwrap(), Command::List);
        assert_eq!(Command::parse(" json ").unwrap(), Command::Json);
        assert_eq!(Command::parse("?").unwrap(), Command::Help);
        assert_eq!(Command::parse("exit").unwrap(), Command::Quit);
        assert_eq!(
            Command::parse("save").unwrap(),
            Command::Dispatch(TodoAction::CommitEdit)
        );
    }

    #[test]
    fn rejects_empty_and_unknown() {
        assert_eq!(Command::parse("   ").unwrap_err(), CommandError::Empty);
        assert_eq!(
            Command::parse("frobnicate 3").unwrap_err(),
            CommandError::Unknown("frobnicate".to_string())
        );
    }
}
