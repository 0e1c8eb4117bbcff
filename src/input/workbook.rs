// Multi-sample workbooks.
//
// Each sample contributes two sheets, `<sample>_UP` and `<sample>_DOWN`,
// holding the up- and down-regulated genes in column A under a header row.
// Sample names are recovered by dropping the last `_`-separated part of each
// sheet name, so samples may themselves contain underscores.

use std::collections::BTreeSet;
use std::fmt;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use calamine::{open_workbook_auto, Data, Reader, Sheets};
use tracing::{debug, warn};

/// Regulation direction of a gene set within a sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    /// Uppercase label used in sheet names, file names and the workbook.
    pub fn label(self) -> &'static str {
        match self {
            Direction::Up => "UP",
            Direction::Down => "DOWN",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Sheet holding `sample`'s genes for `direction`.
pub fn sheet_name(sample: &str, direction: Direction) -> String {
    format!("{sample}_{}", direction.label())
}

/// Distinct sample names derived from sheet names, sorted.
///
/// Sheets without an underscore cannot belong to a sample and are skipped.
pub fn sample_names(sheet_names: &[String]) -> Vec<String> {
    let mut samples = BTreeSet::new();
    for name in sheet_names {
        match name.rsplit_once('_') {
            Some((sample, _)) if !sample.is_empty() => {
                samples.insert(sample.to_string());
            }
            _ => warn!(sheet = name.as_str(), "Sheet name has no sample prefix, skipping"),
        }
    }
    samples.into_iter().collect()
}

/// Gene identifiers from column A, below the header row.
pub fn genes_from_rows<'a>(rows: impl Iterator<Item = &'a [Data]>) -> Vec<String> {
    rows.skip(1)
        .filter_map(|row| row.first())
        .filter_map(|cell| match cell {
            Data::Empty => None,
            Data::String(s) => Some(s.trim().to_string()),
            other => Some(other.to_string()),
        })
        .filter(|gene| !gene.is_empty())
        .collect()
}

/// An open multi-sample workbook.
pub struct SampleWorkbook {
    path: PathBuf,
    sheets: Sheets<BufReader<File>>,
}

impl SampleWorkbook {
    pub fn open(path: &Path) -> Result<Self> {
        let sheets = open_workbook_auto(path)
            .with_context(|| format!("Failed to open workbook {}", path.display()))?;
        Ok(Self {
            path: path.to_path_buf(),
            sheets,
        })
    }

    /// Sample names found in the workbook, sorted.
    pub fn samples(&self) -> Vec<String> {
        sample_names(&self.sheets.sheet_names())
    }

    /// Genes listed for `sample` in `direction`.
    pub fn genes(&mut self, sample: &str, direction: Direction) -> Result<Vec<String>> {
        let name = sheet_name(sample, direction);
        let range = self.sheets.worksheet_range(&name).with_context(|| {
            format!("Failed to read sheet '{name}' from {}", self.path.display())
        })?;

        let genes = genes_from_rows(range.rows());
        debug!(sheet = name.as_str(), genes = genes.len(), "Read sample sheet");
        Ok(genes)
    }
}
