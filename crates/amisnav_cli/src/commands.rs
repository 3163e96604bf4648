//! Session command parsing.
//!
//! # Responsibility
//! - Map one input line to a view command.
//! - Keep parsing free of store/geo logic; dispatch happens in `main`.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// One parsed session command. Each variant selects a view; selection has
/// no side effects beyond which view renders next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Blank input, ignored.
    Empty,
    /// Database view: list all clan records.
    Clans,
    /// Map view for one clan, chosen by exact display name.
    Map { clan_name: String },
    /// Identity view: compose and export an identity card.
    Identity,
    /// Add view: record a new clan.
    Add,
    /// Replace the session list with the seed list.
    Reset,
    Help,
    Quit,
}

/// Command-line parse failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    UnknownCommand(String),
    MissingArgument(&'static str),
}

impl Display for CommandError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownCommand(word) => {
                write!(f, "unknown command `{word}`; try `help`")
            }
            Self::MissingArgument(what) => write!(f, "missing argument: {what}"),
        }
    }
}

impl Error for CommandError {}

/// Parses one input line into a command.
///
/// The `map` argument is the rest of the line verbatim, since clan names
/// may contain spaces and apostrophes.
pub fn parse_command(line: &str) -> Result<Command, CommandError> {
    let trimmed = line.trim();
    let (word, rest) = match trimmed.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (trimmed, ""),
    };

    match word {
        "" => Ok(Command::Empty),
        "clans" | "db" => Ok(Command::Clans),
        "map" => {
            if rest.is_empty() {
                Err(CommandError::MissingArgument("clan name, e.g. `map Pacidal`"))
            } else {
                Ok(Command::Map {
                    clan_name: rest.to_string(),
                })
            }
        }
        "id" | "identity" => Ok(Command::Identity),
        "add" => Ok(Command::Add),
        "reset" => Ok(Command::Reset),
        "help" | "?" => Ok(Command::Help),
        "quit" | "exit" => Ok(Command::Quit),
        other => Err(CommandError::UnknownCommand(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_command, Command, CommandError};

    #[test]
    fn parses_view_commands() {
        assert_eq!(parse_command("clans").unwrap(), Command::Clans);
        assert_eq!(parse_command("  db  ").unwrap(), Command::Clans);
        assert_eq!(parse_command("identity").unwrap(), Command::Identity);
        assert_eq!(parse_command("add").unwrap(), Command::Add);
        assert_eq!(parse_command("reset").unwrap(), Command::Reset);
        assert_eq!(parse_command("exit").unwrap(), Command::Quit);
        assert_eq!(parse_command("").unwrap(), Command::Empty);
    }

    #[test]
    fn map_keeps_full_clan_name() {
        assert_eq!(
            parse_command("map Monari'").unwrap(),
            Command::Map {
                clan_name: "Monari'".to_string()
            }
        );
        assert_eq!(
            parse_command("map Fata'an Marsh").unwrap(),
            Command::Map {
                clan_name: "Fata'an Marsh".to_string()
            }
        );
    }

    #[test]
    fn map_without_name_is_rejected() {
        assert!(matches!(
            parse_command("map"),
            Err(CommandError::MissingArgument(_))
        ));
    }

    #[test]
    fn unknown_word_is_rejected() {
        assert!(matches!(
            parse_command("fly"),
            Err(CommandError::UnknownCommand(word)) if word == "fly"
        ));
    }
}
