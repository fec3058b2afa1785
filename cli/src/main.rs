#![deny(missing_docs)]

//! # fs-api CLI
//!
//! Command Line Interface for generating OpenAPI documents from route
//! directories.
//!
//! Supported Commands:
//! - `generate`: Scans a route directory and writes the OpenAPI document,
//!   optionally running `orval` on the result.

use clap::{Parser, Subcommand};
use fsapi_core::AppResult;

use crate::codegen::ShellExecutor;

mod codegen;
mod generate;
mod logging;
mod output;

#[derive(Parser, Debug)]
#[clap(author, version, about = "File-system routes to OpenAPI")]
struct Cli {
    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generates an OpenAPI document from a route directory.
    Generate(generate::GenerateArgs),
}

fn main() -> AppResult<()> {
    logging::init();
    let cli = Cli::parse();

    match &cli.command {
        Commands::Generate(args) => {
            let executor = ShellExecutor;
            generate::execute(args, &executor)?;
        }
    }

    Ok(())
}
