// Enrichment workbook — one sheet per category with the raw enrichment rows.
//
// Columns are `category`, `description`, then every passthrough field seen in
// that category's rows, sorted by name. Numbers stay numeric; arrays (e.g.
// inputGenes) are joined with commas.

use std::collections::BTreeSet;
use std::path::Path;

use anyhow::{Context, Result};
use rust_xlsxwriter::{Format, Workbook, Worksheet};
use serde_json::Value;
use tracing::info;

use super::unique_name;
use crate::enrichment::table::{EnrichmentRecord, EnrichmentTable};

/// Excel's limit on sheet name length.
const MAX_SHEET_NAME_CHARS: usize = 31;

/// Turn a category into a valid, unique worksheet name.
///
/// Excel forbids `[ ] : * ? / \`, leading or trailing apostrophes and names
/// longer than 31 characters. Names already in `taken` get a numeric suffix.
pub fn sheet_name_for(category: &str, taken: &[String]) -> Result<String> {
    let cleaned: String = category
        .chars()
        .map(|c| match c {
            '[' | ']' | ':' | '*' | '?' | '/' | '\\' => '_',
            other => other,
        })
        .collect();
    let cleaned = cleaned.trim_matches('\'');
    let base: String = if cleaned.is_empty() {
        "Sheet".to_string()
    } else {
        cleaned.chars().take(MAX_SHEET_NAME_CHARS).collect()
    };

    unique_name(&base, MAX_SHEET_NAME_CHARS, taken)
}

/// Column headers for a set of records.
pub fn columns<'a>(records: impl IntoIterator<Item = &'a EnrichmentRecord>) -> Vec<String> {
    let extra: BTreeSet<&str> = records
        .into_iter()
        .flat_map(|r| r.fields.keys().map(String::as_str))
        .collect();
    ["category", "description"]
        .into_iter()
        .chain(extra)
        .map(str::to_string)
        .collect()
}

/// Write `table` to `path`, one worksheet per category.
///
/// Returns the number of sheets written. An empty table writes nothing and
/// returns 0.
pub fn write_enrichment_workbook(path: &Path, table: &EnrichmentTable) -> Result<usize> {
    let categories = table.categories();
    if categories.is_empty() {
        return Ok(0);
    }

    let mut workbook = Workbook::new();
    let header = Format::new().set_bold();
    let mut taken: Vec<String> = Vec::new();

    for category in &categories {
        let name = sheet_name_for(category, &taken)?;
        let worksheet = workbook.add_worksheet();
        worksheet
            .set_name(&name)
            .with_context(|| format!("Invalid sheet name '{name}'"))?;
        write_category_sheet(worksheet, table, category, &header)
            .with_context(|| format!("Failed to write sheet '{name}'"))?;
        taken.push(name);
    }

    workbook
        .save(path)
        .with_context(|| format!("Failed to save workbook {}", path.display()))?;

    info!(path = %path.display(), sheets = taken.len(), "Saved enrichment workbook");
    Ok(taken.len())
}

fn write_category_sheet(
    worksheet: &mut Worksheet,
    table: &EnrichmentTable,
    category: &str,
    header: &Format,
) -> Result<()> {
    let columns = columns(table.in_category(category));

    for (col, name) in columns.iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, name, header)?;
    }

    for (i, record) in table.in_category(category).enumerate() {
        let row = (i + 1) as u32;
        for (col, name) in columns.iter().enumerate() {
            let col = col as u16;
            match name.as_str() {
                "category" => {
                    worksheet.write_string(row, col, &record.category)?;
                }
                "description" => {
                    worksheet.write_string(row, col, &record.description)?;
                }
                field => match record.fields.get(field) {
                    Some(Value::Number(n)) => match n.as_f64() {
                        Some(v) => {
                            worksheet.write_number(row, col, v)?;
                        }
                        None => {
                            worksheet.write_string(row, col, n.to_string())?;
                        }
                    },
                    Some(Value::Null) | None => {}
                    Some(value) => {
                        worksheet.write_string(row, col, cell_text(value))?;
                    }
                },
            }
        }
    }
    Ok(())
}

/// Text form of a non-numeric JSON value for a spreadsheet cell.
pub fn cell_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Array(items) => items.iter().map(cell_text).collect::<Vec<_>>().join(","),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
