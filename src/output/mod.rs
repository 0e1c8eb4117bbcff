// Output writers — directories, network images, workbooks, terminal display.
//
// Every writer takes its destination explicitly; nothing here reads a
// process-wide output location.

pub mod terminal;
pub mod workbook;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use colored::Colorize;
use tracing::{info, warn};

/// What `ensure_output_dir` found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirStatus {
    Created,
    AlreadyExists,
}

/// Create `dir` (and parents) if needed.
///
/// An existing directory is reported and reused, never an error.
pub fn ensure_output_dir(dir: &Path) -> Result<DirStatus> {
    if dir.is_dir() {
        warn!(dir = %dir.display(), "Output directory already exists, reusing it");
        println!(
            "  {} {} already exists, files in it may be overwritten",
            "Note:".yellow(),
            dir.display()
        );
        return Ok(DirStatus::AlreadyExists);
    }

    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create output directory {}", dir.display()))?;
    info!(dir = %dir.display(), "Created output directory");
    println!("  Created directory {}", dir.display());
    Ok(DirStatus::Created)
}

/// Make `name` safe to use inside a file name.
///
/// Keeps ASCII letters, digits, `.`, `-` and `_`; everything else becomes `_`.
pub fn file_component(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c
            } else {
                '_'
            }
        })
        .collect();
    if cleaned.is_empty() {
        "_".to_string()
    } else {
        cleaned
    }
}

/// `base`, or the first free `base_2`, `base_3`, ... if `base` is taken.
///
/// Names are compared ignoring ASCII case and candidates are shortened so
/// they fit in `max_chars` characters.
pub fn unique_name(base: &str, max_chars: usize, taken: &[String]) -> Result<String> {
    let is_taken = |name: &str| taken.iter().any(|t| t.eq_ignore_ascii_case(name));
    if !is_taken(base) {
        return Ok(base.to_string());
    }
    // taken.len() + 1 distinct candidates: at least one is free
    for n in 2..=taken.len() + 2 {
        let suffix = format!("_{n}");
        let keep = max_chars.saturating_sub(suffix.len());
        let candidate: String = base.chars().take(keep).collect::<String>() + &suffix;
        if !is_taken(&candidate) {
            return Ok(candidate);
        }
    }
    anyhow::bail!("No free name left for '{base}'")
}

/// Write the network SVG returned by STRING to `dir/<stem>.svg`.
pub fn write_network_image(dir: &Path, stem: &str, svg: &[u8]) -> Result<PathBuf> {
    let path = dir.join(format!("{}.svg", file_component(stem)));
    std::fs::write(&path, svg)
        .with_context(|| format!("Failed to write network image {}", path.display()))?;
    info!(path = %path.display(), bytes = svg.len(), "Saved interaction network");
    Ok(path)
}

/// Truncate a string to at most `max_chars` characters, appending "..." if truncated.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    let char_count = text.chars().count();
    if char_count <= max_chars {
        text.to_string()
    } else {
        let truncated: String = text.chars().take(max_chars).collect();
        format!("{truncated}...")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_component() {
        assert_eq!(file_component("Process"), "Process");
        assert_eq!(file_component("KEGG/Pathway name"), "KEGG_Pathway_name");
        assert_eq!(file_component("wt_1.2-b"), "wt_1.2-b");
        assert_eq!(file_component(""), "_");
    }

    #[test]
    fn test_unique_name() {
        let taken = vec!["wt_1".to_string()];
        assert_eq!(unique_name("wt_2", usize::MAX, &taken).unwrap(), "wt_2");
        assert_eq!(unique_name("WT_1", usize::MAX, &taken).unwrap(), "WT_1_2");
        let taken = vec!["abcd".to_string(), "ab_2".to_string()];
        assert_eq!(unique_name("abcd", 4, &taken).unwrap(), "ab_3");
    }

    #[test]
    fn test_ensure_output_dir_twice() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("run").join("sample");
        assert_eq!(ensure_output_dir(&dir).unwrap(), DirStatus::Created);
        assert!(dir.is_dir());
        assert_eq!(ensure_output_dir(&dir).unwrap(), DirStatus::AlreadyExists);
    }

    #[test]
    fn test_ensure_output_dir_fails_on_file() {
        let tmp = tempfile::tempdir().unwrap();
        let file = tmp.path().join("taken");
        std::fs::write(&file, b"x").unwrap();
        assert!(ensure_output_dir(&file).is_err());
    }

    #[test]
    fn test_write_network_image() {
        let tmp = tempfile::tempdir().unwrap();
        let path = write_network_image(tmp.path(), "wt_up_network", b"<svg/>").unwrap();
        assert_eq!(path, tmp.path().join("wt_up_network.svg"));
        assert_eq!(std::fs::read(&path).unwrap(), b"<svg/>");
    }

    #[test]
    fn test_truncate_chars_multibyte() {
        assert_eq!(truncate_chars("αβγδ", 2), "αβ...");
        assert_eq!(truncate_chars("short", 10), "short");
    }
}
