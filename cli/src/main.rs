mod cli;
mod error;
mod error_types;
mod init;
mod logging;
mod render;
mod summary;
mod ui;

use clap::Parser;
use cli::{Cli, Commands};
use colored::Colorize;
use std::process;
use summary::SummaryArgs;

fn main() {
    let cli = Cli::parse();

    logging::init(cli.command.verbose());
    ui::configure_colors();

    let result = match cli.command {
        Commands::Summary {
            input,
            config,
            format,
            no_collapse,
            verbose: _,
        } => summary::execute(SummaryArgs {
            input,
            config_path: config,
            format,
            no_collapse,
        }),
        Commands::Types { verbose: _ } => error_types::execute(),
        Commands::Init {
            config,
            force,
            verbose: _,
        } => init::execute(config, force),
    };

    if let Err(err) = result {
        eprintln!("{} {}", "Error:".bold().red(), err.user_message());
        process::exit(1);
    }
}
