// EnrichmentRecord and EnrichmentTable.
//
// STRING returns a JSON array of objects. Only `category` and `description`
// matter for keyword summaries; every other field (term, p_value, fdr,
// inputGenes, ...) is carried through untouched so the workbook can show it.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single enrichment result row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrichmentRecord {
    /// Functional grouping label, e.g. "Process", "KEGG", "Component"
    pub category: String,
    /// Human-readable term description, e.g. "protein folding"
    pub description: String,
    /// All remaining fields of the service response, keyed by name
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl EnrichmentRecord {
    /// Build a record with no passthrough fields.
    pub fn new(category: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            description: description.into(),
            fields: Map::new(),
        }
    }
}

/// An ordered collection of enrichment records for one gene list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EnrichmentTable {
    records: Vec<EnrichmentRecord>,
}

impl EnrichmentTable {
    pub fn new(records: Vec<EnrichmentRecord>) -> Self {
        Self { records }
    }

    /// Parse the JSON array body of an enrichment response.
    pub fn from_json(json: &str) -> Result<Self> {
        let records: Vec<EnrichmentRecord> =
            serde_json::from_str(json).context("Failed to parse enrichment JSON")?;
        Ok(Self { records })
    }

    pub fn records(&self) -> &[EnrichmentRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct categories in order of first appearance.
    pub fn categories(&self) -> Vec<String> {
        let mut seen: Vec<String> = Vec::new();
        for record in &self.records {
            if !seen.iter().any(|c| c == &record.category) {
                seen.push(record.category.clone());
            }
        }
        seen
    }

    /// Number of rows per category, in order of first appearance.
    pub fn category_counts(&self) -> Vec<(String, usize)> {
        self.categories()
            .into_iter()
            .map(|category| {
                let count = self.in_category(&category).count();
                (category, count)
            })
            .collect()
    }

    /// Records whose category matches exactly (case-sensitive).
    pub fn in_category<'a>(
        &'a self,
        category: &'a str,
    ) -> impl Iterator<Item = &'a EnrichmentRecord> + 'a {
        self.records.iter().filter(move |r| r.category == category)
    }

    /// Descriptions of all records in `category`.
    pub fn descriptions<'a>(&'a self, category: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.in_category(category).map(|r| r.description.as_str())
    }

    /// Copy of this table with `key` set to `value` on every record.
    ///
    /// Used to mark rows as UP or DOWN before two tables are merged into
    /// one workbook.
    pub fn tagged(&self, key: &str, value: &str) -> Self {
        let records = self
            .records
            .iter()
            .map(|r| {
                let mut r = r.clone();
                r.fields
                    .insert(key.to_string(), Value::String(value.to_string()));
                r
            })
            .collect();
        Self { records }
    }

    /// Append all records of `other` after this table's records.
    pub fn concat(mut self, other: Self) -> Self {
        self.records.extend(other.records);
        self
    }
}

impl FromIterator<EnrichmentRecord> for EnrichmentTable {
    fn from_iter<I: IntoIterator<Item = EnrichmentRecord>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json_keeps_passthrough_fields() {
        let json = r#"[
            {"category": "Process", "term": "GO:0006457", "description": "protein folding",
             "p_value": 0.0001, "inputGenes": ["dnaK", "groL"]}
        ]"#;
        let table = EnrichmentTable::from_json(json).unwrap();
        assert_eq!(table.len(), 1);
        let record = &table.records()[0];
        assert_eq!(record.category, "Process");
        assert_eq!(record.description, "protein folding");
        assert_eq!(record.fields["term"], "GO:0006457");
        assert_eq!(record.fields["inputGenes"][1], "groL");
        assert!(!record.fields.contains_key("category"));
    }

    #[test]
    fn test_from_json_empty_array() {
        let table = EnrichmentTable::from_json("[]").unwrap();
        assert!(table.is_empty());
        assert!(table.categories().is_empty());
    }

    #[test]
    fn test_from_json_rejects_error_object() {
        let result = EnrichmentTable::from_json(r#"{"Error": "not found"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_categories_first_appearance_order() {
        let table = EnrichmentTable::new(vec![
            EnrichmentRecord::new("KEGG", "a"),
            EnrichmentRecord::new("Process", "b"),
            EnrichmentRecord::new("KEGG", "c"),
        ]);
        assert_eq!(table.categories(), vec!["KEGG", "Process"]);
        assert_eq!(
            table.category_counts(),
            vec![("KEGG".to_string(), 2), ("Process".to_string(), 1)]
        );
    }

    #[test]
    fn test_in_category_is_case_sensitive() {
        let table = EnrichmentTable::new(vec![EnrichmentRecord::new("Process", "x")]);
        assert_eq!(table.in_category("process").count(), 0);
        assert_eq!(table.descriptions("Process").collect::<Vec<_>>(), vec!["x"]);
    }

    #[test]
    fn test_tagged_and_concat() {
        let up = EnrichmentTable::new(vec![EnrichmentRecord::new("Process", "x")]);
        let down = EnrichmentTable::new(vec![EnrichmentRecord::new("KEGG", "y")]);
        let merged = up.tagged("direction", "UP").concat(down.tagged("direction", "DOWN"));
        assert_eq!(merged.len(), 2);
        assert_eq!(merged.records()[0].fields["direction"], "UP");
        assert_eq!(merged.records()[1].fields["direction"], "DOWN");
        // The source table is left untouched
        assert!(up.records()[0].fields.is_empty());
    }
}
