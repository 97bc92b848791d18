use crate::error::{CliError, Result, ResultExt};
use crate::render;
use crate::ui;
use processing_errors::{
    load_records, read_records, summarize, CheckinProcessingError, ConfigLoader,
    DefaultConfigLoader, OutputFormat, ReportConfig, DEFAULT_CONFIG_FILE,
};
use std::io;
use tracing::{debug, info};

#[derive(Debug, Clone)]
pub struct SummaryArgs {
    pub input: String,
    pub config_path: String,
    pub format: Option<OutputFormat>,
    pub no_collapse: bool,
}

pub fn execute(args: SummaryArgs) -> Result<()> {
    let mut config = load_config(&args.config_path)
        .map_err(|e| CliError::from(e).with_context(format!("Failed to load {}", args.config_path)))?;
    if args.no_collapse {
        config.collapse_single_project = false;
    }
    let format = args.format.unwrap_or(config.format);

    let records = read_input(&args.input)?;
    info!(records = records.len(), input = %args.input, "loaded processing errors");

    let (grouped, summary) = summarize(&records, &config);
    debug!(
        projects = grouped.project_count(),
        buckets = grouped.bucket_count(),
        total = grouped.total_errors(),
        "grouped processing errors"
    );

    let output = match format {
        OutputFormat::Text => render::render_text(&summary),
        OutputFormat::Json => render::render_json(&grouped, &summary)?,
    };
    print!("{output}");
    if format == OutputFormat::Json {
        println!();
    }

    Ok(())
}

// Only the implicit default file may be missing
fn load_config(path: &str) -> processing_errors::Result<ReportConfig> {
    if path == DEFAULT_CONFIG_FILE {
        ReportConfig::load_or_default(path)
    } else {
        DefaultConfigLoader::load_with_validation(path)
    }
}

fn read_input(input: &str) -> Result<Vec<CheckinProcessingError>> {
    if input == "-" {
        if atty::is(atty::Stream::Stdin) {
            ui::warning_message("Reading processing errors from stdin (end with Ctrl-D)");
        }
        return read_records(io::stdin().lock()).with_context(|| "Failed to read stdin");
    }

    Ok(load_records(input)?)
}
