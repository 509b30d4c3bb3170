//! Loosely-typed WordPress REST record.
//!
//! The REST API returns the same concept in several shapes:
//!
//! | Concept | Shapes seen |
//! |---------|-------------|
//! | title / content / excerpt | `{"rendered": "..."}` or a bare string |
//! | custom field | `acf.<key>`, top-level `<key>`, or `meta.<key>` |
//! | `acf` block | object, or `[]` when a record has no custom fields |
//! | term IDs | `[1, 2]`, `["1", "2"]`, `"1,2"`, or `[{ "id": 1 }]` |
//! | image | URL string, `{ "url": ... }`, `{ "source_url": ... }`, or an attachment ID |
//!
//! Every accessor returns `Option`/empty collections; nothing here panics on
//! a missing or oddly-shaped path.

use serde_json::{Map, Value};

/// One record as returned by `/api/wordpress/{collection}`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawRecord {
    value: Value,
}

impl RawRecord {
    pub fn new(value: Value) -> Self {
        Self { value }
    }

    /// Access the underlying payload
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Record ID; `0` when absent or not numeric
    pub fn id(&self) -> u64 {
        self.value.get("id").and_then(value_u64).unwrap_or(0)
    }

    pub fn slug(&self) -> String {
        self.value
            .get("slug")
            .and_then(value_text)
            .unwrap_or_default()
    }

    /// Raw publish date string (`2024-03-05T10:00:00`)
    pub fn date(&self) -> Option<&str> {
        self.value.get("date").and_then(Value::as_str)
    }

    /// `record[key].rendered`, or `record[key]` when it is a bare string
    pub fn rendered(&self, key: &str) -> Option<&str> {
        match self.value.get(key)? {
            Value::String(s) => Some(s.as_str()),
            Value::Object(map) => map.get("rendered").and_then(Value::as_str),
            _ => None,
        }
    }

    /// The ACF block, if it is an object
    pub fn acf(&self) -> Option<&Map<String, Value>> {
        self.value.get("acf").and_then(Value::as_object)
    }

    /// First present value among `keys`.
    ///
    /// For each key in order, ACF is consulted before the top-level record
    /// and `meta`. `null`, `false`, blank strings, and empty arrays count as
    /// absent (ACF reports an unset field as `false`).
    pub fn field(&self, keys: &[&str]) -> Option<&Value> {
        let meta = self.value.get("meta").and_then(Value::as_object);
        keys.iter().find_map(|key| {
            self.acf()
                .and_then(|acf| acf.get(*key))
                .filter(|v| is_present(v))
                .or_else(|| self.value.get(*key).filter(|v| is_present(v)))
                .or_else(|| meta.and_then(|m| m.get(*key)).filter(|v| is_present(v)))
        })
    }

    /// First non-blank textual value among `keys`
    pub fn text(&self, keys: &[&str]) -> Option<String> {
        keys.iter()
            .find_map(|key| self.field(&[*key]).and_then(value_text))
    }

    /// Like [`RawRecord::text`] but with HTML entities and tags removed
    pub fn clean_text(&self, keys: &[&str]) -> Option<String> {
        self.text(keys)
            .map(|t| crate::text::html::clean_html(&t))
            .filter(|t| !t.is_empty())
    }

    /// Cleaned `title.rendered`
    pub fn title(&self) -> Option<String> {
        self.rendered("title")
            .map(crate::text::html::clean_html)
            .filter(|t| !t.is_empty())
    }

    /// Term ID list from the first present key
    pub fn ids(&self, keys: &[&str]) -> Vec<u64> {
        self.field(keys).map(value_ids).unwrap_or_default()
    }

    /// Image URL from the first present key
    pub fn image(&self, keys: &[&str]) -> Option<String> {
        keys.iter().find_map(|key| self.field(&[*key]).and_then(value_image_url))
    }

    /// `_embedded["wp:featuredmedia"][0].source_url`
    pub fn featured_image(&self) -> Option<String> {
        self.embedded("wp:featuredmedia")?
            .as_array()?
            .first()
            .and_then(value_image_url)
    }

    /// `_embedded.author[0].name`
    pub fn embedded_author(&self) -> Option<String> {
        self.embedded("author")?
            .as_array()?
            .first()?
            .get("name")
            .and_then(value_text)
    }

    /// Names of embedded terms belonging to `taxonomy`.
    ///
    /// `_embedded["wp:term"]` is an array of per-taxonomy arrays.
    pub fn embedded_terms(&self, taxonomy: &str) -> Vec<String> {
        let Some(groups) = self.embedded("wp:term").and_then(Value::as_array) else {
            return Vec::new();
        };
        groups
            .iter()
            .filter_map(Value::as_array)
            .flatten()
            .filter(|term| term.get("taxonomy").and_then(Value::as_str) == Some(taxonomy))
            .filter_map(|term| term.get("name").and_then(value_text))
            .map(|name| crate::text::html::clean_html(&name))
            .collect()
    }

    fn embedded(&self, key: &str) -> Option<&Value> {
        self.value.get("_embedded")?.get(key)
    }
}

impl From<Value> for RawRecord {
    fn from(value: Value) -> Self {
        Self::new(value)
    }
}

fn is_present(value: &Value) -> bool {
    match value {
        Value::Null | Value::Bool(false) => false,
        Value::String(s) => !s.trim().is_empty(),
        Value::Array(items) => !items.is_empty(),
        _ => true,
    }
}

/// Text of a scalar value: trimmed non-blank strings, numbers, or the
/// `rendered` member of an object.
pub fn value_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => {
            let trimmed = s.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        }
        Value::Number(n) => Some(n.to_string()),
        Value::Object(map) => map.get("rendered").and_then(value_text),
        _ => None,
    }
}

/// Unsigned integer from a number or numeric string
pub fn value_u64(value: &Value) -> Option<u64> {
    match value {
        Value::Number(n) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| *f >= 0.0).map(|f| f as u64)),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Whole number from a number or a numeric string, keeping the sign.
///
/// Strings are read by their leading integer (`"4.5"` and `"4 stars"` give
/// `4`); fractional numbers are truncated the same way.
pub fn value_i64(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f.trunc() as i64)),
        Value::String(s) => leading_integer(s),
        _ => None,
    }
}

fn leading_integer(text: &str) -> Option<i64> {
    let text = text.trim();
    let (sign, digits) = match text.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, text.strip_prefix('+').unwrap_or(text)),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    digits[..end].parse::<i64>().ok().map(|n| sign * n)
}

/// Term IDs from an array (numbers, numeric strings, or `{id}` objects)
/// or a comma-separated string
pub fn value_ids(value: &Value) -> Vec<u64> {
    match value {
        Value::Array(items) => items
            .iter()
            .filter_map(|item| match item {
                Value::Object(term) => term.get("id").or(term.get("term_id")).and_then(value_u64),
                other => value_u64(other),
            })
            .collect(),
        Value::String(s) => s
            .split(',')
            .filter_map(|part| part.trim().parse().ok())
            .collect(),
        Value::Number(_) => value_u64(value).into_iter().collect(),
        _ => Vec::new(),
    }
}

/// Image URL from a URL string or an image object.
///
/// Bare attachment IDs cannot be resolved without another request and
/// yield `None`.
pub fn value_image_url(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => {
            let trimmed = s.trim();
            (!trimmed.is_empty() && trimmed.parse::<u64>().is_err()).then(|| trimmed.to_string())
        }
        Value::Object(map) => ["source_url", "url", "guid"]
            .iter()
            .find_map(|key| map.get(*key).and_then(value_image_url)),
        _ => None,
    }
}

/// String list from an array of strings/objects or newline-delimited text.
///
/// Objects contribute their first textual member among `value`, `name`,
/// `title`, `label`, `text` (ACF repeater rows).
pub fn value_lines(value: &Value) -> Vec<String> {
    match value {
        Value::String(text) => crate::text::fields::parse_lines(text),
        Value::Array(items) => items
            .iter()
            .filter_map(|item| match item {
                Value::Object(row) => ["value", "name", "title", "label", "text"]
                    .iter()
                    .find_map(|key| row.get(*key).and_then(value_text)),
                other => value_text(other),
            })
            .collect(),
        _ => Vec::new(),
    }
}
