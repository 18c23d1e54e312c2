//! Parsers for the text adb prints.

use crate::error::{GatewayError, GatewayResult};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;

static ROW_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^Row:\s*\d+\s?(.*)$").expect("Failed to compile row regex"));

static COMPONENT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([A-Za-z][A-Za-z0-9_]*(?:\.[A-Za-z0-9_]+)+)/[A-Za-z0-9_.$]+$")
        .expect("Failed to compile component regex")
});

/// One row printed by `content query`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContentRow(HashMap<String, String>);

impl ContentRow {
    /// Column value, `None` if absent or SQL `NULL`.
    pub fn get(&self, column: &str) -> Option<&str> {
        self.0
            .get(column)
            .map(String::as_str)
            .filter(|v| *v != "NULL")
    }
}

/// Parse `content query` output for a known projection.
///
/// Rows look like `Row: 0 _id=1, lookup=abc, display_name=Anna`. Columns
/// are printed in projection order, which is what lets values contain
/// `", "`. A value may also span lines; continuation lines are folded back
/// into the row.
pub fn parse_content_rows(output: &str, columns: &[&str]) -> GatewayResult<Vec<ContentRow>> {
    let trimmed = output.trim();
    if trimmed.is_empty() || trimmed.starts_with("No result found") {
        return Ok(Vec::new());
    }
    if trimmed.starts_with("Error") {
        return Err(GatewayError::Parse(first_line(trimmed)));
    }

    let mut bodies: Vec<String> = Vec::new();
    for line in output.lines() {
        let line = line.trim_end_matches('\r');
        match ROW_RE.captures(line) {
            Some(caps) => bodies.push(caps[1].to_string()),
            None => match bodies.last_mut() {
                Some(body) => {
                    body.push('\n');
                    body.push_str(line);
                }
                None if line.trim().is_empty() => {}
                None => return Err(GatewayError::Parse(first_line(trimmed))),
            },
        }
    }

    bodies
        .iter()
        .map(|body| parse_row_body(body, columns))
        .collect()
}

fn parse_row_body(body: &str, columns: &[&str]) -> GatewayResult<ContentRow> {
    let mut values = HashMap::with_capacity(columns.len());
    let mut rest = body;

    for (i, column) in columns.iter().enumerate() {
        let prefix = format!("{}=", column);
        rest = rest
            .strip_prefix(prefix.as_str())
            .ok_or_else(|| GatewayError::Parse(format!("expected column {} in row: {}", column, body)))?;

        let value = match columns.get(i + 1) {
            Some(next) => {
                let separator = format!(", {}=", next);
                let end = rest.find(&separator).ok_or_else(|| {
                    GatewayError::Parse(format!("expected column {} in row: {}", next, body))
                })?;
                let value = &rest[..end];
                rest = &rest[end + 2..];
                value
            }
            None => std::mem::take(&mut rest),
        };

        values.insert(column.to_string(), value.to_string());
    }

    Ok(ContentRow(values))
}

/// Extract package names from `cmd package query-activities` output.
///
/// Both the `--components` form (one `pkg/.Activity` per line) and the
/// `--brief` form (a priority line followed by the component) are accepted.
/// Packages keep the order the device listed them in, first occurrence wins.
pub fn parse_component_packages(output: &str) -> Vec<String> {
    let mut packages: Vec<String> = Vec::new();

    for line in output.lines() {
        if let Some(caps) = COMPONENT_RE.captures(line.trim()) {
            let package = &caps[1];
            if !packages.iter().any(|p| p == package) {
                packages.push(package.to_string());
            }
        }
    }

    packages
}

fn first_line(text: &str) -> String {
    text.lines().next().unwrap_or_default().to_string()
}
