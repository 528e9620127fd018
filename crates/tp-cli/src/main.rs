//! tauprod batch CLI: split dataset file lists into jobs and submit them.

mod filelist;
mod jobs;
mod samples;
mod submit;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "tp-cli")]
#[command(about = "tauprod - ntuple production batch tools")]
#[command(version)]
struct Cli {
    /// Log verbosity level (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "info")]
    log_level: tracing::Level,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve dataset patterns to file lists, write joblists, and submit
    /// one array job per dataset
    Submit(submit::SubmitArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(cli.log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Submit(args) => submit::run(&args),
    }
}
