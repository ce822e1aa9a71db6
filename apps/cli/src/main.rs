//! ScriptForge CLI — YouTube script request tooling.
//!
//! Classifies topics into content niches, analyzes videos through the
//! YouTube Data API, builds provider prompts, and exports scripts as
//! formatted documents.

mod commands;

use clap::Parser;
use color_eyre::eyre::Result;

use commands::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    commands::init_tracing(&cli);
    commands::run(cli).await
}
