//! CLI command definitions

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Output format for lesson plans
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One line per step
    Text,
    /// JSON document
    Json,
}

impl From<OutputFormat> for lessonsmith_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Text => Self::Text,
            OutputFormat::Json => Self::Json,
        }
    }
}

/// CLI arguments for lessonsmith
#[derive(Parser, Debug)]
#[command(name = "lessonsmith")]
#[command(author, version, about = "Turn slide decks and quizzes into branching online lessons")]
#[command(long_about = r#"
lessonsmith builds a lesson graph from a directory of numbered slides, an
optional quiz cluster specification (JSON) and an optional video list, then
drives an already logged in browser session to create the lesson pages.

Configuration files are loaded from (in priority order):
1. LESSONSMITH_<SECTION>__<KEY>              Environment
2. --config <path>                           Explicit config file
3. ./lessonsmith.toml                        Project-level config
4. ~/.config/lessonsmith/config.toml         Global config

Example:
  lessonsmith plan --path UF1/Module1
  lessonsmith upload-module --path UF1/Module1
  lessonsmith upload-module --path UF1/Module1 --module 132 --start-slide 14
  lessonsmith upload-all --path course/
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Output format of printed plans
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Build and print the plan of a module directory without uploading
    Plan {
        /// Module directory
        #[arg(short, long, value_name = "DIR")]
        path: PathBuf,

        /// First slide ordinal of the run
        #[arg(short, long, value_name = "N")]
        start_slide: Option<u32>,

        /// Fail when the directory has no cluster specification
        #[arg(long)]
        require_clusters: bool,
    },

    /// Create (or resume) one lesson module from a module directory
    UploadModule {
        /// Module directory
        #[arg(short, long, value_name = "DIR")]
        path: PathBuf,

        /// Populate the existing module with this id instead of creating one
        #[arg(short, long, value_name = "ID")]
        module: Option<u64>,

        /// First slide ordinal of the run
        #[arg(short, long, value_name = "N")]
        start_slide: Option<u32>,

        /// Fail when the directory has no cluster specification
        #[arg(long)]
        require_clusters: bool,
    },

    /// Create a section per unit directory and a module per module directory
    UploadAll {
        /// Course root directory
        #[arg(short, long, value_name = "DIR")]
        path: PathBuf,

        /// Fail when a module directory has no cluster specification
        #[arg(long)]
        require_clusters: bool,
    },
}

impl Command {
    pub fn is_upload(&self) -> bool {
        !matches!(self, Command::Plan { .. })
    }
}
