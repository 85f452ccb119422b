// src/cli/mod.rs
use clap::{ArgAction, Parser};

pub mod commands;
pub mod handlers;

pub use commands::CliCommand;

#[derive(Parser, Debug)]
#[command(author, version, about = "Generate and check strong passwords", long_about = None)]
pub struct Args {
    /// Print results as JSON
    #[arg(long, global = true, env = "STRONGPASS_JSON")]
    pub json: bool,

    /// Increase log verbosity (repeatable)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

impl Args {
    // Running without a subcommand generates a single password
    pub fn resolved_command(&self) -> CliCommand {
        self.command
            .clone()
            .unwrap_or(CliCommand::Generate { count: 1 })
    }
}
