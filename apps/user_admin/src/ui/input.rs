use shared::domain::UserId;
use thiserror::Error;

use crate::{backend_bridge::commands::BackendCommand, controller::form::FormField};

pub const HELP_TEXT: &str = "\
commands:
  list                 reload the user list
  add                  open an empty form
  edit <id>            open the form for a listed user
  delete <id>          delete a user
  set <field> <value>  fill a form field (id, firstName, lastName, email, department)
  submit               save the form
  cancel               close the form
  help                 show this text
  quit                 exit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputAction {
    Command(BackendCommand),
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("unknown command '{0}'; type 'help'")]
    Unknown(String),
    #[error("usage: {0}")]
    Usage(&'static str),
    #[error("{0}")]
    Field(String),
}

/// Blank lines yield `Ok(None)`.
pub fn parse_line(line: &str) -> Result<Option<InputAction>, InputError> {
    let line = line.trim();
    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    };

    let action = match verb.to_ascii_lowercase().as_str() {
        "" => return Ok(None),
        "list" | "reload" => InputAction::Command(BackendCommand::LoadUsers),
        "add" | "new" => InputAction::Command(BackendCommand::OpenCreateForm),
        "edit" => InputAction::Command(BackendCommand::OpenEditForm {
            id: UserId::parse(rest).ok_or(InputError::Usage("edit <id>"))?,
        }),
        "delete" | "rm" => InputAction::Command(BackendCommand::DeleteUser {
            id: UserId::parse(rest).ok_or(InputError::Usage("delete <id>"))?,
        }),
        "set" => {
            let (field, value) = match rest.split_once(char::is_whitespace) {
                Some((field, value)) => (field, value.trim()),
                None => (rest, ""),
            };
            if field.is_empty() {
                return Err(InputError::Usage("set <field> <value>"));
            }
            InputAction::Command(BackendCommand::SetField {
                field: field.parse::<FormField>().map_err(InputError::Field)?,
                value: value.to_string(),
            })
        }
        "submit" | "save" => InputAction::Command(BackendCommand::SubmitForm),
        "cancel" | "close" => InputAction::Command(BackendCommand::CloseForm),
        "help" | "?" => InputAction::Help,
        "quit" | "exit" => InputAction::Quit,
        other => return Err(InputError::Unknown(other.to_string())),
    };
    Ok(Some(action))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_row_actions_by_id() {
        assert_eq!(
            parse_line("delete 3"),
            Ok(Some(InputAction::Command(BackendCommand::DeleteUser {
                id: UserId::new("3")
            })))
        );
        assert_eq!(parse_line("edit"), Err(InputError::Usage("edit <id>")));
    }

    #[test]
    fn set_keeps_spaces_inside_the_value() {
        assert_eq!(
            parse_line("set department  Human Resources "),
            Ok(Some(InputAction::Command(BackendCommand::SetField {
                field: FormField::Department,
                value: "Human Resources".into(),
            })))
        );
        assert!(matches!(parse_line("set phone 1"), Err(InputError::Field(_))));
    }

    #[test]
    fn blank_and_unknown_lines() {
        assert_eq!(parse_line("   "), Ok(None));
        assert_eq!(parse_line("QUIT"), Ok(Some(InputAction::Quit)));
        assert_eq!(
            parse_line("frobnicate"),
            Err(InputError::Unknown("frobnicate".into()))
        );
    }
}
