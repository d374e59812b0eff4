//! Field map and placeholder substitution

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Flat mapping from field name to value, created fresh per generation
/// request and never persisted
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FieldMap(serde_json::Map<String, Value>);

impl FieldMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value under a field name
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.0.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Display string for a field: strings verbatim, numbers via `to_string`,
    /// anything absent or null as the empty string
    pub fn display(&self, key: &str) -> String {
        self.0.get(key).map(value_to_string).unwrap_or_default()
    }

    /// True when the field is absent, null, or an empty string
    pub fn is_blank(&self, key: &str) -> bool {
        self.display(key).is_empty()
    }

    /// Replace every `[[field_name]]` token with the field's display string
    ///
    /// Unknown fields substitute to the empty string; substitution never
    /// raises. Text without placeholders passes through untouched.
    pub fn substitute(&self, template: &str) -> String {
        let mut out = String::with_capacity(template.len());
        let mut rest = template;

        while let Some(start) = rest.find("[[") {
            out.push_str(&rest[..start]);
            let after = &rest[start + 2..];
            match after.find("]]") {
                Some(end) => {
                    out.push_str(&self.display(&after[..end]));
                    rest = &after[end + 2..];
                }
                None => {
                    // unterminated token, keep it literal
                    out.push_str(&rest[start..]);
                    rest = "";
                }
            }
        }

        out.push_str(rest);
        out
    }
}

/// Convert a field value to its display string
fn value_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}
