//! Floe command-line interface

mod cli;
mod commands;

use clap::Parser;

use crate::cli::{Cli, Commands};
use crate::commands::common::ExitCode;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let result = match &cli.command {
        Commands::Deploy(args) => commands::deploy::execute(args, &cli.global).await,
        Commands::Plan(args) => commands::plan::execute(args, &cli.global).await,
        Commands::Extract(args) => commands::extract::execute(args, &cli.global).await,
    };

    if let Err(e) = result {
        if let Some(ExitCode(code)) = e.downcast_ref::<ExitCode>() {
            std::process::exit(*code);
        }
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
