use clap::{Parser, Subcommand};
use processing_errors::{OutputFormat, DEFAULT_CONFIG_FILE};

#[derive(Parser)]
#[command(name = "monitor-errors")]
#[command(
    author,
    version,
    about = "Summarize check-in processing errors by project and error type"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Group processing errors and print a summary
    Summary {
        /// JSON array or JSON Lines file with processing errors ("-" reads stdin)
        #[clap(default_value = "-")]
        input: String,

        /// Configuration file path (defaults to monitor-errors.toml)
        #[clap(short, long, default_value = DEFAULT_CONFIG_FILE)]
        config: String,

        /// Output format (overrides the configuration file)
        #[clap(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Always show project headings, even for a single project
        #[clap(long, default_value_t = false)]
        no_collapse: bool,

        /// Enable verbose output with additional information
        #[clap(short, long, default_value_t = false)]
        verbose: bool,
    },

    /// List known processing error types
    Types {
        /// Enable verbose output with additional information
        #[clap(short, long, default_value_t = false)]
        verbose: bool,
    },

    /// Generate a default configuration file
    Init {
        /// Configuration file path (defaults to monitor-errors.toml)
        #[clap(short, long, default_value = DEFAULT_CONFIG_FILE)]
        config: String,

        /// Overwrite an existing configuration file
        #[clap(long, default_value_t = false)]
        force: bool,

        /// Enable verbose output with additional information
        #[clap(short, long, default_value_t = false)]
        verbose: bool,
    },
}

impl Commands {
    pub fn verbose(&self) -> bool {
        match self {
            Commands::Summary { verbose, .. }
            | Commands::Types { verbose }
            | Commands::Init { verbose, .. } => *verbose,
        }
    }
}
