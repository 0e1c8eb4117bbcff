// enrich-radar: STRING network and enrichment keyword summaries
//
// This is the library root. Each module corresponds to one stage of the
// gene list -> STRING -> charts/workbook flow.

pub mod chart;
pub mod config;
pub mod enrichment;
pub mod input;
pub mod keywords;
pub mod output;
pub mod pipeline;
pub mod species;
pub mod string_db;
