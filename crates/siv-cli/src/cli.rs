//! Command-line definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "siv",
    about = "Socioeconomic indicator datasets and chart specs",
    version
)]
pub struct Cli {
    /// Directory holding the dataset CSV files (overrides the config file).
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Dataset keys to load, comma separated (defaults to the catalog).
    #[arg(long, global = true, value_delimiter = ',')]
    pub datasets: Vec<String>,

    /// Increase log verbosity (-v info, -vv debug).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Inspect the dataset registry.
    Datasets {
        #[command(subcommand)]
        command: DatasetCommands,
    },

    /// Country-code lookups from the reference dataset.
    Countries {
        /// Single country name to look up.
        #[arg(long)]
        name: Option<String>,
    },

    /// Resolve one chart to its JSON spec.
    Chart {
        /// Chart key, e.g. `gini-comparison`.
        key: String,

        #[arg(long)]
        country: Option<String>,

        #[arg(long)]
        year: Option<i32>,

        #[arg(long)]
        area: Option<String>,

        /// Breakdown dimension: `area` or `quintil`.
        #[arg(long)]
        breakdown: Option<String>,

        /// Held dimension of a trend chart: `area` or `quintil`.
        #[arg(long)]
        held: Option<String>,

        /// Gini comparison window: `2000s` or `2010s`.
        #[arg(long)]
        window: Option<String>,

        /// Active urban education button: `hombres` or `mujeres`.
        #[arg(long)]
        urban: Option<String>,

        /// Active rural education button: `hombres` or `mujeres`.
        #[arg(long)]
        rural: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum DatasetCommands {
    /// List registered datasets and their row counts.
    List,

    /// Check each registered dataset for its required columns.
    Validate,
}
