//! Console output formatter for content listings

use crate::output::formatter::TableRow;
use colored::Colorize;
use gateway_domain::core::string::truncate_chars;
use gateway_domain::{HealthStatus, SubmissionResult};
use serde::Serialize;
use serde_json::Value;

/// Widest a table cell may grow before it is cut
const MAX_CELL_WIDTH: usize = 48;

/// Formats content for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format items as an aligned table with a count line
    pub fn format_table<T: TableRow>(title: &str, items: &[T]) -> String {
        let mut output = String::new();
        output.push_str(&Self::header(title));

        if items.is_empty() {
            output.push_str(&format!("{}\n", "(nothing returned)".dimmed()));
            return output;
        }

        let headers = T::headers();
        let rows: Vec<Vec<String>> = items
            .iter()
            .map(|item| item.cells().iter().map(|c| Self::cell(c)).collect())
            .collect();

        let widths: Vec<usize> = headers
            .iter()
            .enumerate()
            .map(|(i, h)| {
                rows.iter()
                    .map(|row| row.get(i).map_or(0, |c| c.chars().count()))
                    .max()
                    .unwrap_or(0)
                    .max(h.len())
            })
            .collect();

        let header_line = headers
            .iter()
            .zip(&widths)
            .map(|(h, w)| format!("{:<w$}", h, w = *w))
            .collect::<Vec<_>>()
            .join("  ");
        output.push_str(&format!("{}\n", header_line.trim_end().cyan().bold()));

        for row in &rows {
            let line = row
                .iter()
                .zip(&widths)
                .map(|(c, w)| Self::pad(c, *w))
                .collect::<Vec<_>>()
                .join("  ");
            output.push_str(line.trim_end());
            output.push('\n');
        }

        output.push_str(&format!("\n{} {}\n", items.len(), "item(s)".dimmed()));
        output
    }

    /// Format one entity as `key: value` lines
    pub fn format_detail<T: Serialize>(title: &str, item: &T) -> String {
        let mut output = String::new();
        output.push_str(&Self::header(title));

        let value = serde_json::to_value(item).unwrap_or(Value::Null);
        let Value::Object(fields) = value else {
            output.push_str(&Self::scalar(&value));
            output.push('\n');
            return output;
        };

        let key_width = fields.keys().map(|k| k.len()).max().unwrap_or(0) + 1;
        for (key, value) in &fields {
            let label = format!("{:<w$}", format!("{}:", key), w = key_width);
            match value {
                Value::Array(items) if !items.is_empty() => {
                    output.push_str(&format!("{}\n", label.cyan()));
                    for item in items {
                        output.push_str(&format!("  * {}\n", Self::scalar(item)));
                    }
                }
                _ => {
                    output.push_str(&format!("{} {}\n", label.cyan(), Self::scalar(value)));
                }
            }
        }

        output
    }

    /// Format as JSON
    pub fn format_json<T: Serialize + ?Sized>(value: &T) -> String {
        serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
    }

    pub fn format_health(status: &HealthStatus) -> String {
        if status.healthy {
            format!("{} {} (HTTP {})\n", "v".green(), status.message, status.status)
        } else if status.status == 0 {
            format!("{} {}\n", "x".red(), status.message)
        } else {
            format!("{} {} (HTTP {})\n", "x".red(), status.message, status.status)
        }
    }

    pub fn format_submission(result: &SubmissionResult) -> String {
        if result.success {
            format!("{} {}\n", "v".green(), result.message)
        } else {
            format!("{} {}\n", "x".red(), result.message)
        }
    }

    /// Per-collection counts from the overview command
    pub fn format_overview(counts: &[(&str, usize)]) -> String {
        let mut output = Self::header("Content overview");
        let width = counts.iter().map(|(name, _)| name.len()).max().unwrap_or(0);
        for (name, count) in counts {
            let count_text = if *count == 0 {
                count.to_string().yellow().to_string()
            } else {
                count.to_string()
            };
            output.push_str(&format!("  {:<w$}  {}\n", name, count_text, w = width));
        }
        output
    }

    fn header(title: &str) -> String {
        format!("{}\n\n", format!("=== {} ===", title).cyan().bold())
    }

    /// Single-line cell, cut to [`MAX_CELL_WIDTH`]
    fn cell(text: &str) -> String {
        let flat = text.split_whitespace().collect::<Vec<_>>().join(" ");
        let (head, truncated) = truncate_chars(&flat, MAX_CELL_WIDTH - 3);
        if truncated && flat.chars().count() > MAX_CELL_WIDTH {
            format!("{}...", head)
        } else {
            flat
        }
    }

    fn pad(text: &str, width: usize) -> String {
        let len = text.chars().count();
        format!("{}{}", text, " ".repeat(width.saturating_sub(len)))
    }

    fn scalar(value: &Value) -> String {
        match value {
            Value::Null => String::new(),
            Value::String(s) => s.clone(),
            Value::Object(map) if map.values().all(|v| v.is_string()) => map
                .iter()
                .map(|(k, v)| format!("{}: {}", k, v.as_str().unwrap_or_default()))
                .collect::<Vec<_>>()
                .join(" | "),
            other => other.to_string(),
        }
    }
}
