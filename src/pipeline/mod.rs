// Pipelines: fetch from STRING, summarize, and write every output artifact.
//
// single — one gene list into one output directory.
// multi  — every sample of a workbook, each into its own subdirectory, with
//          up/down comparisons per shared category.
//
// All destinations are passed in explicitly.

pub mod multi;
pub mod single;

use std::path::{Path, PathBuf};

use crate::input::workbook::Direction;
use crate::output::file_component;

/// Path of a radar chart: `[<prefix>_]<category>[_<DIR>]_radar_chart.svg`.
pub fn radar_chart_path(
    dir: &Path,
    prefix: Option<&str>,
    category: &str,
    direction: Option<Direction>,
) -> PathBuf {
    let mut stem = String::new();
    if let Some(prefix) = prefix {
        stem.push_str(prefix);
        stem.push('_');
    }
    stem.push_str(category);
    if let Some(direction) = direction {
        stem.push('_');
        stem.push_str(direction.label());
    }
    dir.join(format!("{}_radar_chart.svg", file_component(&stem)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_radar_chart_path() {
        let dir = Path::new("out");
        assert_eq!(
            radar_chart_path(dir, None, "Process", None),
            dir.join("Process_radar_chart.svg")
        );
        assert_eq!(
            radar_chart_path(dir, Some("wt"), "KEGG", Some(Direction::Up)),
            dir.join("wt_KEGG_UP_radar_chart.svg")
        );
        assert_eq!(
            radar_chart_path(dir, Some("wt"), "Reactome pathways", None),
            dir.join("wt_Reactome_pathways_radar_chart.svg")
        );
    }
}
