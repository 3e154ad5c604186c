//! Positional content variables
//!
//! Content templates reference their placeholders by index (`{{0}}`, `{{1}}`, ...).
//! The order of values is an external contract owned by the remote template,
//! so it is kept exactly as pushed and serialized as `{"0": .., "1": .., ...}`.

use serde::ser::{Serialize, SerializeMap, Serializer};
use tracing::debug;

use crate::domain::MenuOption;
use crate::error::MessageError;

/// A single content variable value
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(untagged)]
pub enum VariableValue {
    Text(String),
    Number(u64),
}

impl From<&str> for VariableValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for VariableValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<u32> for VariableValue {
    fn from(value: u32) -> Self {
        Self::Number(u64::from(value))
    }
}

impl From<u64> for VariableValue {
    fn from(value: u64) -> Self {
        Self::Number(value)
    }
}

/// Ordered list of values, keyed by their zero-based position
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContentVariables {
    values: Vec<VariableValue>,
}

impl ContentVariables {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from an ordered sequence of values
    pub fn from_values<I, V>(values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<VariableValue>,
    {
        Self {
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    /// Append a value at the next index
    pub fn push(&mut self, value: impl Into<VariableValue>) -> &mut Self {
        self.values.push(value.into());
        self
    }

    /// Append `title`, `short_title`, `description` for every option, in option order
    pub fn extend_options(&mut self, options: &[MenuOption]) -> &mut Self {
        debug!(option_count = options.len(), "ContentVariables::extend_options: called");
        for option in options {
            self.push(option.title.as_str())
                .push(option.short_title.as_str())
                .push(option.description.as_str());
        }
        self
    }

    /// Get the value at a position
    pub fn get(&self, index: usize) -> Option<&VariableValue> {
        self.values.get(index)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate `(key, value)` pairs in index order
    pub fn iter(&self) -> impl Iterator<Item = (String, &VariableValue)> {
        self.values.iter().enumerate().map(|(i, v)| (i.to_string(), v))
    }

    /// Serialize to the JSON text expected by the messaging dispatch
    pub fn to_json(&self) -> Result<String, MessageError> {
        let json = serde_json::to_string(self)?;
        debug!(len = json.len(), "ContentVariables::to_json: serialized");
        Ok(json)
    }
}

impl Serialize for ContentVariables {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.values.len()))?;
        for (key, value) in self.iter() {
            map.serialize_entry(&key, value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn option(title: &str) -> MenuOption {
        MenuOption {
            title: title.to_string(),
            short_title: title.to_lowercase(),
            description: format!("A {}", title.to_lowercase()),
        }
    }

    #[test]
    fn test_mixed_values_serialize() {
        let mut vars = ContentVariables::new();
        vars.push(50u32).push("smoothies");
        assert_eq!(vars.to_json().unwrap(), r#"{"0":50,"1":"smoothies"}"#);
    }

    #[test]
    fn test_empty_serializes_to_empty_object() {
        assert_eq!(ContentVariables::new().to_json().unwrap(), "{}");
    }

    #[test]
    fn test_extend_options_flattens_triples() {
        let mut vars = ContentVariables::from_values(["hello"]);
        vars.extend_options(&[option("Latte"), option("Mocha")]);

        assert_eq!(vars.len(), 7);
        assert_eq!(vars.get(1), Some(&VariableValue::from("Latte")));
        assert_eq!(vars.get(2), Some(&VariableValue::from("latte")));
        assert_eq!(vars.get(3), Some(&VariableValue::from("A latte")));
        assert_eq!(vars.get(4), Some(&VariableValue::from("Mocha")));
    }

    #[test]
    fn test_keys_stay_in_numeric_order_past_ten() {
        let vars = ContentVariables::from_values((0..12u32).map(|i| format!("v{i}")));
        let json = vars.to_json().unwrap();
        let pos_9 = json.find(r#""9":"v9""#).unwrap();
        let pos_10 = json.find(r#""10":"v10""#).unwrap();
        assert!(pos_9 < pos_10);
        assert!(json.starts_with(r#"{"0":"v0","1":"v1","2":"v2""#));
    }

    proptest! {
        #[test]
        fn prop_value_at_position_maps_to_index_key(values in proptest::collection::vec(".*", 0..40)) {
            let vars = ContentVariables::from_values(values.clone());
            let parsed: serde_json::Value = serde_json::from_str(&vars.to_json().unwrap()).unwrap();
            let obj = parsed.as_object().unwrap();
            prop_assert_eq!(obj.len(), values.len());
            for (i, value) in values.iter().enumerate() {
                prop_assert_eq!(obj[&i.to_string()].as_str(), Some(value.as_str()));
            }
        }
    }
}
