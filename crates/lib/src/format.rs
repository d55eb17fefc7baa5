//! # Result Formatting
//!
//! Turns a result set into the short human-readable answer shown next to
//! the raw rows.

use crate::types::ResultSet;
use serde_json::Value;

/// Shown when a statement returns no rows.
pub const NO_RESULTS_MESSAGE: &str = "No results found for your query.";

/// Summarizes `result_set` for the user who asked the question behind `sql`.
pub fn summarize(sql: &str, result_set: &ResultSet) -> String {
    if result_set.is_empty() || result_set.columns.is_empty() {
        return NO_RESULTS_MESSAGE.to_string();
    }

    if sql.to_uppercase().contains("COUNT") {
        let values = result_set
            .rows
            .iter()
            .map(|row| {
                result_set
                    .values(row)
                    .map(display_value)
                    .collect::<Vec<_>>()
                    .join(", ")
            })
            .collect::<Vec<_>>()
            .join("; ");
        return format!("The result is: {values}");
    }

    format!("Here are the results:\n\n{}", render_table(result_set))
}

/// Renders a value without JSON quoting.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::Null => "NULL".to_string(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Renders the rows as a plain-text table with a header line.
pub fn render_table(result_set: &ResultSet) -> String {
    let cells: Vec<Vec<String>> = result_set
        .rows
        .iter()
        .map(|row| result_set.values(row).map(display_value).collect())
        .collect();

    let widths: Vec<usize> = result_set
        .columns
        .iter()
        .enumerate()
        .map(|(i, name)| {
            cells
                .iter()
                .map(|row| row[i].chars().count())
                .chain(std::iter::once(name.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let format_line = |values: &[String]| {
        values
            .iter()
            .zip(&widths)
            .map(|(v, w)| format!("{v:<w$}"))
            .collect::<Vec<_>>()
            .join(" | ")
            .trim_end()
            .to_string()
    };

    let mut lines = Vec::with_capacity(cells.len() + 2);
    lines.push(format_line(&result_set.columns));
    lines.push(
        widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join("-+-"),
    );
    lines.extend(cells.iter().map(|row| format_line(row)));
    lines.join("\n")
}
