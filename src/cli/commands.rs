// src/cli/commands.rs
use clap::Subcommand;

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    /// Generate strong passwords
    Generate {
        /// Number of passwords to generate
        #[arg(long, short, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
        count: u32,
    },

    /// Check a password against the strength policy
    Check {
        /// Password to check (prompted for with hidden input when omitted)
        password: Option<String>,
    },
}
