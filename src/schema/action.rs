//! Declarative actions bound to element triggers.

use std::fmt;

use super::value::{Value, ValueMap};

/// What an action asks the host to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionType {
    Navigate,
    Reload,
    Dismiss,
    Custom,
}

impl ActionType {
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "navigate" => Some(ActionType::Navigate),
            "reload" => Some(ActionType::Reload),
            "dismiss" => Some(ActionType::Dismiss),
            "custom" => Some(ActionType::Custom),
            _ => None,
        }
    }

    pub fn tag(&self) -> &'static str {
        match self {
            ActionType::Navigate => "navigate",
            ActionType::Reload => "reload",
            ActionType::Dismiss => "dismiss",
            ActionType::Custom => "custom",
        }
    }
}

impl fmt::Display for ActionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// An action as decoded from the document.
///
/// The payload shape depends on the type:
/// - `navigate`: `route` (string) and `parameters` (map)
/// - `reload`: optional `viewId` (string)
/// - `dismiss`: optional `animated` (bool)
/// - `custom`: `name` (string) and `data` (map)
#[derive(Debug, Clone, PartialEq)]
pub struct BduiAction {
    pub action_type: ActionType,
    pub payload: Option<ValueMap>,
}

impl BduiAction {
    pub fn new(action_type: ActionType) -> Self {
        Self {
            action_type,
            payload: None,
        }
    }

    pub fn with_payload(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.payload
            .get_or_insert_with(ValueMap::new)
            .insert(key.into(), value.into());
        self
    }

    pub fn payload_value(&self, key: &str) -> Option<&Value> {
        self.payload.as_ref().and_then(|payload| payload.get(key))
    }

    /// Copy of this action with `text` merged into the payload.
    ///
    /// Custom actions also get the text inside `data`, since that is the
    /// part of the payload forwarded to the host.
    pub fn with_text(&self, text: &str) -> Self {
        let mut action = self.clone();
        let payload = action.payload.get_or_insert_with(ValueMap::new);
        payload.insert("text".to_string(), Value::from(text));

        if action.action_type == ActionType::Custom {
            let data = payload
                .entry("data".to_string())
                .or_insert_with(|| Value::Map(ValueMap::new()));
            match data {
                Value::Map(map) => {
                    map.insert("text".to_string(), Value::from(text));
                }
                other => {
                    let mut map = ValueMap::new();
                    map.insert("text".to_string(), Value::from(text));
                    *other = Value::Map(map);
                }
            }
        }
        action
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_text_merges_into_payload() {
        let action = BduiAction::new(ActionType::Reload).with_payload("viewId", "form");
        let merged = action.with_text("abc");
        assert_eq!(merged.payload_value("text").and_then(Value::as_str), Some("abc"));
        assert_eq!(merged.payload_value("viewId").and_then(Value::as_str), Some("form"));
        assert!(merged.payload_value("data").is_none());
        // Original is untouched.
        assert!(action.payload_value("text").is_none());
    }

    #[test]
    fn with_text_fills_custom_data() {
        let action = BduiAction::new(ActionType::Custom).with_payload("name", "nameChanged");
        let merged = action.with_text("Ann");
        let data = merged.payload_value("data").and_then(Value::as_map).unwrap();
        assert_eq!(data["text"].as_str(), Some("Ann"));
    }

    #[test]
    fn with_text_replaces_non_map_data() {
        let action = BduiAction::new(ActionType::Custom)
            .with_payload("name", "x")
            .with_payload("data", "scalar");
        let merged = action.with_text("t");
        let data = merged.payload_value("data").and_then(Value::as_map).unwrap();
        assert_eq!(data.len(), 1);
        assert_eq!(data["text"].as_str(), Some("t"));
    }
}
