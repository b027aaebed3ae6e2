//! Line commands typed at the prompt
//!
//! Every command that changes state is translated into an [`Action`] and
//! dispatched; parsing problems are reported to the user and never reach
//! the store.

use tally_store::{Action, AppState, CounterId};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("Unknown command: {0} (try `help`)")]
    Unknown(String),

    #[error("`{0}` needs a counter (#<n> or an id)")]
    MissingCounter(&'static str),

    #[error("Invalid counter position: {0}")]
    InvalidPosition(String),

    #[error("No counter at position #{0}")]
    NoSuchPosition(usize),

    #[error("Invalid action JSON: {0}")]
    InvalidJson(String),
}

/// Reference to a counter as typed by the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CounterRef {
    /// 1-based position in the current list (`#2`)
    Position(usize),
    Id(CounterId),
}

impl CounterRef {
    fn parse(token: &str) -> Result<Self, CommandError> {
        match token.strip_prefix('#') {
            Some(position) => match position.parse::<usize>() {
                Ok(n) if n > 0 => Ok(Self::Position(n)),
                _ => Err(CommandError::InvalidPosition(token.to_string())),
            },
            None => Ok(Self::Id(CounterId::from(token))),
        }
    }

    /// Resolve to a counter id against the current state
    ///
    /// Ids are passed through as typed, even if no counter carries them.
    pub fn resolve(&self, state: &AppState) -> Result<CounterId, CommandError> {
        match self {
            Self::Position(n) => state
                .counter_at(n - 1)
                .map(|counter| counter.id.clone())
                .ok_or(CommandError::NoSuchPosition(*n)),
            Self::Id(id) => Ok(id.clone()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add,
    Increment(CounterRef),
    Decrement(CounterRef),
    Delete(CounterRef),
    /// A raw action object, e.g. `{"type":"INCREMENT","id":"..."}`
    Raw(Action),
    List,
    Help,
    Quit,
}

pub const HELP: &str = "\
Commands:
  add              add a counter
  inc <counter>    increment a counter
  dec <counter>    decrement a counter
  del <counter>    delete a counter
  list             show all counters
  help             show this help
  quit             exit
  {\"type\": ...}    dispatch a raw action

<counter> is a position like #1 or a full counter id.";

impl Command {
    /// Parse one input line; blank lines yield `None`
    pub fn parse(line: &str) -> Result<Option<Self>, CommandError> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }

        if line.starts_with('{') {
            return serde_json::from_str(line)
                .map(|action| Some(Self::Raw(action)))
                .map_err(|e| CommandError::InvalidJson(e.to_string()));
        }

        let mut parts = line.split_whitespace();
        let name = parts.next().unwrap_or_default();
        let mut counter = |label: &'static str| {
            parts
                .next()
                .ok_or(CommandError::MissingCounter(label))
                .and_then(CounterRef::parse)
        };

        let command = match name {
            "add" => Self::Add,
            "inc" => Self::Increment(counter("inc")?),
            "dec" => Self::Decrement(counter("dec")?),
            "del" => Self::Delete(counter("del")?),
            "list" | "ls" => Self::List,
            "help" | "?" => Self::Help,
            "quit" | "exit" | "q" => Self::Quit,
            other => return Err(CommandError::Unknown(other.to_string())),
        };

        Ok(Some(command))
    }

    /// The action this command dispatches, if it dispatches one
    pub fn to_action(&self, state: &AppState) -> Result<Option<Action>, CommandError> {
        let action = match self {
            Self::Add => Action::add_counter(),
            Self::Increment(counter) => Action::increment(counter.resolve(state)?),
            Self::Decrement(counter) => Action::decrement(counter.resolve(state)?),
            Self::Delete(counter) => Action::del_counter(counter.resolve(state)?),
            Self::Raw(action) => action.clone(),
            Self::List | Self::Help | Self::Quit => return Ok(None),
        };
        Ok(Some(action))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_simple_commands() {
        assert_eq!(Command::parse("add"), Ok(Some(Command::Add)));
        assert_eq!(Command::parse("  list "), Ok(Some(Command::List)));
        assert_eq!(Command::parse("q"), Ok(Some(Command::Quit)));
        assert_eq!(Command::parse(""), Ok(None));
    }

    #[test]
    fn test_parse_counter_refs() {
        assert_eq!(
            Command::parse("inc #2"),
            Ok(Some(Command::Increment(CounterRef::Position(2))))
        );
        assert_eq!(
            Command::parse("del abc-123"),
            Ok(Some(Command::Delete(CounterRef::Id(CounterId::from("abc-123")))))
        );
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            Command::parse("dec"),
            Err(CommandError::MissingCounter("dec"))
        );
        assert_eq!(
            Command::parse("inc #0"),
            Err(CommandError::InvalidPosition("#0".to_string()))
        );
        assert_eq!(
            Command::parse("reset"),
            Err(CommandError::Unknown("reset".to_string()))
        );
        assert!(matches!(
            Command::parse("{not json"),
            Err(CommandError::InvalidJson(_))
        ));
    }

    #[test]
    fn test_parse_raw_action() {
        assert_eq!(
            Command::parse(r#"{"type":"DECREMENT","id":"x"}"#),
            Ok(Some(Command::Raw(Action::decrement("x"))))
        );
        assert_eq!(
            Command::parse(r#"{"type":"SOMETHING_ELSE"}"#),
            Ok(Some(Command::Raw(Action::Unrecognized)))
        );
    }

    #[test]
    fn test_to_action_resolves_positions() {
        let state = AppState::from_counts([0, 0]);
        let second = state.counters[1].id.clone();

        let action = Command::Increment(CounterRef::Position(2))
            .to_action(&state)
            .unwrap();
        assert_eq!(action, Some(Action::increment(second)));

        assert_eq!(
            Command::Delete(CounterRef::Position(3)).to_action(&state),
            Err(CommandError::NoSuchPosition(3))
        );
    }

    #[test]
    fn test_to_action_passes_unknown_ids_through() {
        let state = AppState::default();
        let action = Command::Decrement(CounterRef::Id(CounterId::from("ghost")))
            .to_action(&state)
            .unwrap();
        assert_eq!(action, Some(Action::decrement("ghost")));
    }

    #[test]
    fn test_non_dispatching_commands() {
        let state = AppState::default();
        assert_eq!(Command::List.to_action(&state), Ok(None));
        assert_eq!(Command::Help.to_action(&state), Ok(None));
    }
}
