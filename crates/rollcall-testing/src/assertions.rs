//! Custom assertions for rollcall's JSON output.

use anyhow::{Context, Result};
use serde_json::Value;

fn rows(json: &Value) -> Result<&Vec<Value>> {
    json["content"]["rows"]
        .as_array()
        .context("Expected 'content.rows' array in JSON")
}

/// Assert that JSON output contains the expected number of rows.
pub fn assert_row_count(json: &Value, expected: usize) -> Result<()> {
    let rows = rows(json)?;

    if rows.len() != expected {
        anyhow::bail!("Expected {} rows, got {}", expected, rows.len());
    }

    Ok(())
}

/// Row identifiers in display order.
pub fn row_ids(json: &Value) -> Result<Vec<String>> {
    rows(json)?
        .iter()
        .enumerate()
        .map(|(i, row)| {
            row["id"]
                .as_str()
                .map(str::to_string)
                .with_context(|| format!("Row {} missing id", i))
        })
        .collect()
}

/// Country column in display order.
pub fn row_countries(json: &Value) -> Result<Vec<String>> {
    rows(json)?
        .iter()
        .enumerate()
        .map(|(i, row)| {
            row["country"]
                .as_str()
                .map(str::to_string)
                .with_context(|| format!("Row {} missing country", i))
        })
        .collect()
}

/// Assert every row's country contains `needle`, ignoring case.
pub fn assert_rows_match_country(json: &Value, needle: &str) -> Result<()> {
    let needle = needle.to_lowercase();
    for (i, country) in row_countries(json)?.iter().enumerate() {
        if !country.to_lowercase().contains(&needle) {
            anyhow::bail!("Row {} has country {} which does not match {}", i, country, needle);
        }
    }
    Ok(())
}
