//! REPL command parsing.

use std::str::FromStr;

use profile_core::profile::ProfileField;
use strum::IntoEnumIterator;

/// Top-level REPL commands, used for completion.
pub const COMMANDS: &[&str] = &[
    "set", "clear", "focus", "blur", "submit", "dismiss", "show", "store", "help", "quit",
];

/// A parsed line of REPL input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    Set { field: ProfileField, value: String },
    Focus(ProfileField),
    Blur,
    Submit,
    Dismiss,
    Show,
    Store,
    Help,
    Quit,
}

impl FromStr for ReplCommand {
    type Err = String;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim_start()),
            None => (line, ""),
        };

        match verb {
            "set" => {
                let (field, value) = match rest.split_once(char::is_whitespace) {
                    Some((field, value)) => (field, value),
                    None => (rest, ""),
                };
                Ok(ReplCommand::Set {
                    field: parse_field(field)?,
                    value: unescape(value),
                })
            }
            "clear" => Ok(ReplCommand::Set {
                field: parse_field(rest)?,
                value: String::new(),
            }),
            "focus" => Ok(ReplCommand::Focus(parse_field(rest)?)),
            "blur" => Ok(ReplCommand::Blur),
            "submit" => Ok(ReplCommand::Submit),
            "dismiss" => Ok(ReplCommand::Dismiss),
            "show" => Ok(ReplCommand::Show),
            "store" => Ok(ReplCommand::Store),
            "help" | "?" => Ok(ReplCommand::Help),
            "quit" | "exit" => Ok(ReplCommand::Quit),
            other => Err(format!("Unknown command: {}", other)),
        }
    }
}

fn parse_field(name: &str) -> Result<ProfileField, String> {
    let name = name.trim();
    if name.is_empty() {
        return Err("Missing field name".to_string());
    }
    ProfileField::from_str(name).map_err(|_| {
        let known: Vec<String> = ProfileField::iter().map(|f| f.to_string()).collect();
        format!("Unknown field '{}' (expected one of: {})", name, known.join(", "))
    })
}

/// Turns a literal `\n` into a line break so the address can span lines.
fn unescape(value: &str) -> String {
    value.replace("\\n", "\n")
}

pub fn help_text() -> &'static str {
    "Commands:
  set <field> <value>   edit a field (use \\n for a line break in address)
  clear <field>         empty a field
  focus <field>         mark a field as focused
  blur                  clear focus
  submit                validate and save the profile
  dismiss               hide the current notification
  show                  print the form
  store                 print the saved profile
  help                  show this help
  quit                  exit"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_keeps_inner_spaces() {
        let command: ReplCommand = "set first_name John Smith".parse().unwrap();
        assert_eq!(
            command,
            ReplCommand::Set {
                field: ProfileField::FirstName,
                value: "John Smith".to_string()
            }
        );
    }

    #[test]
    fn test_set_without_value_is_empty() {
        let command: ReplCommand = "set phone".parse().unwrap();
        assert_eq!(
            command,
            ReplCommand::Set {
                field: ProfileField::Phone,
                value: String::new()
            }
        );
    }

    #[test]
    fn test_address_line_breaks() {
        let command: ReplCommand = "set address 1 Main St\\nSpringfield".parse().unwrap();
        assert_eq!(
            command,
            ReplCommand::Set {
                field: ProfileField::Address,
                value: "1 Main St\nSpringfield".to_string()
            }
        );
    }

    #[test]
    fn test_simple_commands() {
        assert_eq!("submit".parse::<ReplCommand>(), Ok(ReplCommand::Submit));
        assert_eq!("  blur ".parse::<ReplCommand>(), Ok(ReplCommand::Blur));
        assert_eq!("exit".parse::<ReplCommand>(), Ok(ReplCommand::Quit));
        assert_eq!(
            "focus email".parse::<ReplCommand>(),
            Ok(ReplCommand::Focus(ProfileField::Email))
        );
    }

    #[test]
    fn test_unknown_inputs() {
        assert!("jump".parse::<ReplCommand>().is_err());
        let err = "focus nickname".parse::<ReplCommand>().unwrap_err();
        assert!(err.contains("first_name"));
        assert!("clear".parse::<ReplCommand>().is_err());
    }
}
