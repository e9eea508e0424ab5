use clap::{Parser as ClapParser, Subcommand};
use std::path::PathBuf;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Search the keyword dictionary with spelling correction and stemming
    Search {
        /// Free-text query
        query: String,

        /// Disable the fuzzy match phase
        #[arg(long = "no-fuzzy")]
        no_fuzzy: bool,

        /// Disable spelling correction of query tokens
        #[arg(long = "no-spell-check")]
        no_spell_check: bool,

        /// Disable stem expansion of query tokens
        #[arg(long = "no-stemming")]
        no_stemming: bool,

        /// Maximum number of results to print
        #[arg(long = "max-results")]
        max_results: Option<usize>,
    },

    /// Validate a label against the naming convention rules
    Validate {
        /// Label string, e.g. RB_tMaxLim_C
        label: String,
    },

    /// Classify a label's AUTOSAR conformance
    Conform {
        /// Label string, e.g. RB_tMaxLim_C
        label: String,
    },
}

#[derive(ClapParser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the keyword dictionary snapshot (JSON array of entries)
    #[arg(short, long)]
    pub dictionary: PathBuf,

    /// Output format
    #[arg(short, long, default_value = "text", value_parser = ["text", "json"])]
    pub format: String,

    #[command(subcommand)]
    pub command: Command,
}
