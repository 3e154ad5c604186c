//! Input shapes read by the message builders
//!
//! These mirror the parts of the ordering bot's event model that messages
//! need. They are owned by the caller and only read here.

use serde::{Deserialize, Serialize};

/// Beverage mode of an event, e.g. `"coffee"` or `"smoothie"`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Mode(String);

impl Mode {
    pub fn new(mode: impl Into<String>) -> Self {
        Self(mode.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_smoothie(&self) -> bool {
        self.0 == "smoothie"
    }
}

impl From<&str> for Mode {
    fn from(mode: &str) -> Self {
        Self::new(mode)
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// One orderable menu item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuOption {
    pub title: String,
    pub short_title: String,
    #[serde(default)]
    pub description: String,
}

/// The menu an event serves
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub mode: Mode,
    #[serde(default)]
    pub items: Vec<MenuOption>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub name: String,
    pub selection: Selection,
}

/// An event attendees can register for
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventOption {
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_deserializes_from_camel_case() {
        let json = r#"{
            "name": "Signal",
            "selection": {
                "mode": "smoothie",
                "items": [{"title": "Berry Blast", "shortTitle": "berry", "description": "Berries"}]
            }
        }"#;
        let event: Event = serde_json::from_str(json).unwrap();
        assert!(event.selection.mode.is_smoothie());
        assert_eq!(event.selection.items[0].short_title, "berry");
    }

    #[test]
    fn test_missing_items_default_to_empty() {
        let selection: Selection = serde_json::from_str(r#"{"mode": "coffee"}"#).unwrap();
        assert!(selection.items.is_empty());
        assert_eq!(selection.mode.as_str(), "coffee");
    }
}
