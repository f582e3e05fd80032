mod cli;
mod commands;
mod output;

use clap::{CommandFactory, Parser};
use cli::{Cli, ColorMode, Commands};
use output::{OutputMode, Reporter};

fn main() {
    let cli = Cli::parse();

    let mode = if cli.json {
        OutputMode::Json
    } else if cli.quiet {
        OutputMode::Quiet
    } else {
        OutputMode::Human
    };

    match cli.color {
        ColorMode::Never => colored::control::set_override(false),
        ColorMode::Always => colored::control::set_override(true),
        ColorMode::Auto => {}
    }

    let mut reporter = Reporter::new(mode);

    let success = match cli.command {
        Commands::Review {
            file,
            key_file,
            model,
        } => commands::review::run_review(
            file.as_deref(),
            key_file.as_deref(),
            model.as_deref(),
            &mut reporter,
        ),
        Commands::Session { key_file, model } => {
            commands::session::run_session(key_file.as_deref(), model.as_deref(), &mut reporter)
        }
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            clap_complete::generate(shell, &mut cmd, "revu", &mut std::io::stdout());
            true
        }
    };

    reporter.finish();

    if !success {
        std::process::exit(1);
    }
}
