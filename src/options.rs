// Stripping options: what to remove, what to keep, and what goes in its place.
//
// Options can be built in code with the builder methods or deserialized from
// JSON using the camelCase field names (`removeEmojis`, `removeEmoticons`,
// `preserve`, `replaceWith`). Deserialization is permissive: unknown fields
// are ignored, a field of the wrong type falls back to its default, and
// preserve entries that are not non-empty strings are dropped.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StripOptions {
    /// Remove Unicode emojis (default true)
    #[serde(deserialize_with = "flag_or_true")]
    pub remove_emojis: bool,
    /// Remove ASCII emoticons such as `:)` and `<3` (default false)
    #[serde(deserialize_with = "flag_or_false")]
    pub remove_emoticons: bool,
    /// Literal substrings that survive stripping even when they match
    #[serde(deserialize_with = "lenient_preserve")]
    pub preserve: Vec<String>,
    /// Substituted for each removed match (default empty)
    #[serde(deserialize_with = "string_or_empty")]
    pub replace_with: String,
}

impl Default for StripOptions {
    fn default() -> Self {
        Self {
            remove_emojis: true,
            remove_emoticons: false,
            preserve: Vec::new(),
            replace_with: String::new(),
        }
    }
}

impl StripOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read options from a JSON value. Anything that is not an object yields
    /// the defaults.
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::Object(_) => Self::deserialize(value).unwrap_or_default(),
            _ => Self::default(),
        }
    }

    pub fn with_emojis(mut self, remove: bool) -> Self {
        self.remove_emojis = remove;
        self
    }

    pub fn with_emoticons(mut self, remove: bool) -> Self {
        self.remove_emoticons = remove;
        self
    }

    /// Add entries to the preserve list. Empty strings are skipped.
    pub fn preserve<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.preserve.extend(
            items
                .into_iter()
                .map(Into::into)
                .filter(|item: &String| !item.is_empty()),
        );
        self
    }

    pub fn replace_with(mut self, replacement: impl Into<String>) -> Self {
        self.replace_with = replacement.into();
        self
    }

    /// True when neither category is enabled and stripping is the identity.
    pub fn is_noop(&self) -> bool {
        !self.remove_emojis && !self.remove_emoticons
    }
}

fn flag_or_true<'de, D: Deserializer<'de>>(d: D) -> Result<bool, D::Error> {
    Ok(Value::deserialize(d)?.as_bool().unwrap_or(true))
}

fn flag_or_false<'de, D: Deserializer<'de>>(d: D) -> Result<bool, D::Error> {
    Ok(Value::deserialize(d)?.as_bool().unwrap_or(false))
}

fn string_or_empty<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    match Value::deserialize(d)? {
        Value::String(s) => Ok(s),
        _ => Ok(String::new()),
    }
}

fn lenient_preserve<'de, D: Deserializer<'de>>(d: D) -> Result<Vec<String>, D::Error> {
    let items = match Value::deserialize(d)? {
        Value::Array(items) => items,
        _ => return Ok(Vec::new()),
    };

    Ok(items
        .into_iter()
        .filter_map(|item| match item {
            Value::String(s) if !s.is_empty() => Some(s),
            _ => None,
        })
        .collect())
}
