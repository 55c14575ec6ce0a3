//! quizbank CLI - convert question bank exports to quiz-import CSV.

mod cli;
mod commands;
mod logging;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    logging::init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Convert {
            file,
            output,
            delimiter,
            force,
        } => commands::convert::run(file, output, delimiter, force, cli.verbose),

        Commands::Preview {
            file,
            delimiter,
            limit,
            details,
            json,
        } => commands::preview::run(file, delimiter, limit, details, json, cli.verbose),

        Commands::Guide => commands::guide::run(),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
