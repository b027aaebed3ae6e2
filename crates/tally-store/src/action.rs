//! Actions describe an intended state change.
//!
//! On the wire an action is a plain record tagged by `type`, with an `id`
//! field for the variants that target a single counter:
//!
//! ```json
//! { "type": "INCREMENT", "id": "5f0c..." }
//! { "type": "ADD_COUNTER" }
//! ```
//!
//! Tags outside the known set deserialize into [`Action::Unrecognized`],
//! which every reducer treats as the identity.

use serde::{Deserialize, Serialize};

use crate::state::CounterId;

/// Actions understood by the counter reducer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Action {
    #[serde(rename = "INCREMENT")]
    Increment { id: CounterId },
    #[serde(rename = "DECREMENT")]
    Decrement { id: CounterId },
    #[serde(rename = "ADD_COUNTER")]
    AddCounter,
    #[serde(rename = "DEL_COUNTER")]
    DelCounter { id: CounterId },
    /// Dispatched once by the store on construction
    #[serde(rename = "@@INIT")]
    Init,
    #[serde(rename = "@@UNRECOGNIZED", other)]
    Unrecognized,
}

impl Action {
    pub fn increment(id: impl Into<CounterId>) -> Self {
        Self::Increment { id: id.into() }
    }

    pub fn decrement(id: impl Into<CounterId>) -> Self {
        Self::Decrement { id: id.into() }
    }

    pub fn add_counter() -> Self {
        Self::AddCounter
    }

    pub fn del_counter(id: impl Into<CounterId>) -> Self {
        Self::DelCounter { id: id.into() }
    }

    /// The `type` tag of this action
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Increment { .. } => "INCREMENT",
            Self::Decrement { .. } => "DECREMENT",
            Self::AddCounter => "ADD_COUNTER",
            Self::DelCounter { .. } => "DEL_COUNTER",
            Self::Init => "@@INIT",
            Self::Unrecognized => "@@UNRECOGNIZED",
        }
    }

    /// Counter targeted by this action, if any
    pub fn target(&self) -> Option<&CounterId> {
        match self {
            Self::Increment { id } | Self::Decrement { id } | Self::DelCounter { id } => Some(id),
            Self::AddCounter | Self::Init | Self::Unrecognized => None,
        }
    }
}

/// Action types that can produce the bootstrap action a store dispatches
/// into its reducer on construction.
///
/// The init action must be one the reducer does not recognize, so only its
/// defaulting logic runs.
pub trait InitAction {
    fn init() -> Self;
}

impl InitAction for Action {
    fn init() -> Self {
        Self::Init
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_creators() {
        assert_eq!(
            Action::increment("a"),
            Action::Increment {
                id: CounterId::from("a")
            }
        );
        assert_eq!(
            Action::decrement("a"),
            Action::Decrement {
                id: CounterId::from("a")
            }
        );
        assert_eq!(Action::add_counter(), Action::AddCounter);
        assert_eq!(
            Action::del_counter(String::from("b")),
            Action::DelCounter {
                id: CounterId::from("b")
            }
        );
    }

    #[test]
    fn test_creators_accept_any_id() {
        // No validation of the id shape
        assert_eq!(Action::increment("").target(), Some(&CounterId::from("")));
    }

    #[test]
    fn test_wire_format() {
        let json = serde_json::to_value(Action::increment("x")).unwrap();
        assert_eq!(json, serde_json::json!({ "type": "INCREMENT", "id": "x" }));

        let json = serde_json::to_value(Action::add_counter()).unwrap();
        assert_eq!(json, serde_json::json!({ "type": "ADD_COUNTER" }));
    }

    #[test]
    fn test_parse_known_tags() {
        let action: Action = serde_json::from_str(r#"{"type":"DEL_COUNTER","id":"k"}"#).unwrap();
        assert_eq!(action, Action::del_counter("k"));

        let action: Action = serde_json::from_str(r#"{"type":"@@INIT"}"#).unwrap();
        assert_eq!(action, Action::Init);
    }

    #[test]
    fn test_parse_unknown_tag() {
        let action: Action = serde_json::from_str(r#"{"type":"RESET"}"#).unwrap();
        assert_eq!(action, Action::Unrecognized);
        assert_eq!(action.kind(), "@@UNRECOGNIZED");
    }

    #[test]
    fn test_kind_and_target() {
        assert_eq!(Action::decrement("z").kind(), "DECREMENT");
        assert_eq!(Action::add_counter().target(), None);
        assert_eq!(Action::init(), Action::Init);
    }
}
