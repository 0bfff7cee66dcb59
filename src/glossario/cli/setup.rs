use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "glossario", bin_name = "glossario", version)]
#[command(about = "Merge the XHTML chapters of an EPUB glossary into one HTML page", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Configuration file (default: ./glossario.json when present)
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Directory holding the XHTML sources
    #[arg(short, long, global = true, value_name = "DIR")]
    pub source_dir: Option<PathBuf>,

    /// Where to write the merged page
    #[arg(short, long, global = true, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Print per-section rewrite details
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Merge the sources into one page (default)
    #[command(alias = "g")]
    Generate,

    /// Validate the sources without writing anything
    Check,

    /// Print the effective configuration as JSON
    Config,

    /// Write the default configuration file
    Init {
        /// Destination (default: ./glossario.json)
        path: Option<PathBuf>,

        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },
}
