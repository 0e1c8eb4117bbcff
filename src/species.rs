// Organisms recognized by the CLI, mapped to NCBI taxonomy ids.
//
// STRING needs the taxonomy id to disambiguate gene symbols. Only the two
// organisms below are supported; anything else is rejected before a single
// request is made.

use std::fmt;

use clap::ValueEnum;

/// Supported organisms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Species {
    /// Escherichia coli K-12 MG1655
    Ecoli,
    /// Homo sapiens
    Human,
}

impl Species {
    /// NCBI taxonomy identifier sent to STRING.
    pub fn taxonomy_id(self) -> u32 {
        match self {
            Species::Ecoli => 511145,
            Species::Human => 9606,
        }
    }

    /// Key used on the command line.
    pub fn key(self) -> &'static str {
        match self {
            Species::Ecoli => "ecoli",
            Species::Human => "human",
        }
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.key(), self.taxonomy_id())
    }
}
