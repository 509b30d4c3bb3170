//! Parsers for legacy free-text custom fields.
//!
//! Older content stores lists as newline-separated text in a single custom
//! field. Newer content uses ACF repeaters (arrays). The parsers here accept
//! either shape and never fail: unusable input degrades to an empty list.

use crate::content::value_objects::ToolFeature;
use serde_json::Value;

/// Pair separator for `title | description` style lines
const PAIR_SEPARATOR: &str = " | ";

/// Delimiters accepted in a technology stack string
const STACK_DELIMITERS: [char; 3] = [',', ';', '|'];

/// Split on any newline variant, trim, and drop blank lines.
pub fn parse_lines(text: &str) -> Vec<String> {
    text.split(['\n', '\r'])
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Parse `left | right` lines into pairs.
///
/// Only the first separator splits; anything after it belongs to the right
/// side. A line without a separator becomes `(line, "")`.
pub fn parse_pairs(text: &str) -> Vec<(String, String)> {
    parse_lines(text)
        .into_iter()
        .map(|line| match line.split_once(PAIR_SEPARATOR) {
            Some((left, right)) => (left.trim().to_string(), right.trim().to_string()),
            None => (line, String::new()),
        })
        .collect()
}

/// Parse the `icon | title | description` feature format.
///
/// - three or more parts: icon, title, description (extra parts stay in the description)
/// - two parts: title, description with the default icon
/// - no pipe: the whole line is the title
pub fn parse_tool_feature_text(text: &str) -> Vec<ToolFeature> {
    parse_lines(text)
        .iter()
        .map(|line| parse_feature_line(line))
        .collect()
}

fn parse_feature_line(line: &str) -> ToolFeature {
    let parts: Vec<&str> = line.split('|').map(str::trim).collect();
    match parts.as_slice() {
        [icon, title, rest @ ..] if !rest.is_empty() => {
            let icon = if icon.is_empty() {
                ToolFeature::DEFAULT_ICON
            } else {
                *icon
            };
            ToolFeature::new(*title, rest.join(" | ")).with_icon(icon)
        }
        [title, description] => ToolFeature::new(*title, *description),
        _ => ToolFeature::new(line.trim(), ""),
    }
}

/// Parse tool features from whatever shape the field arrived in.
///
/// Strings are parsed directly. Arrays are flattened to one line per element
/// (repeater rows with `icon`/`title`/`description` keys are rebuilt into the
/// pipe format). Other objects and numbers are stringified first. `null` and
/// booleans carry no features.
pub fn parse_tool_features(value: &Value) -> Vec<ToolFeature> {
    match value {
        Value::String(text) => parse_tool_feature_text(text),
        Value::Array(items) => {
            let joined = items
                .iter()
                .filter_map(feature_row_to_line)
                .collect::<Vec<_>>()
                .join("\n");
            parse_tool_feature_text(&joined)
        }
        Value::Object(_) | Value::Number(_) => parse_tool_feature_text(&value.to_string()),
        Value::Null | Value::Bool(_) => Vec::new(),
    }
}

fn feature_row_to_line(item: &Value) -> Option<String> {
    match item {
        Value::String(text) => Some(text.clone()),
        Value::Object(row) if row.contains_key("title") => {
            let field = |key: &str| row.get(key).and_then(Value::as_str).unwrap_or("").trim();
            let icon = match field("icon") {
                "" => ToolFeature::DEFAULT_ICON,
                icon => icon,
            };
            Some(format!(
                "{} | {} | {}",
                icon,
                field("title"),
                field("description")
            ))
        }
        Value::Null => None,
        other => Some(other.to_string()),
    }
}

/// Normalize a technology stack field.
///
/// Arrays are kept as-is (non-string elements are stringified), delimited
/// strings are split on `,` `;` or `|`, anything else is empty.
pub fn parse_technology_stack(value: &Value) -> Vec<String> {
    match value {
        Value::Array(items) => items
            .iter()
            .filter_map(|item| match item {
                Value::String(s) => Some(s.clone()),
                Value::Null => None,
                other => Some(other.to_string()),
            })
            .collect(),
        Value::String(text) => text
            .split(STACK_DELIMITERS)
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .map(str::to_string)
            .collect(),
        _ => Vec::new(),
    }
}
