use anyhow::Context;
use clap::Parser;
use std::io::{self, Write};
use std::path::Path;

use strong_password::cli::{handlers, Args, CliCommand};
use strong_password::config::Config;
use strong_password::generators::PasswordGenerator;
use strong_password::logging;

fn main() -> anyhow::Result<()> {
    // Load environment variables
    if Path::new(".env").exists() {
        dotenvy::dotenv().context("Failed to read .env file")?;
    }

    let args = Args::parse();
    let (config, config_errors) = Config::load();

    logging::init(&config, args.verbose).context("Failed to initialise logging")?;
    for error in &config_errors {
        log::warn!("{}, keeping the default", error);
    }
    log::debug!("Command line args: {:?}", args);
    log::debug!("Loaded config: {:?}", config);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match args.resolved_command() {
        CliCommand::Generate { count } => {
            let mut generator = PasswordGenerator::new().with_max_attempts(config.max_attempts);
            handlers::handle_generate(&mut generator, count as usize, args.json, &mut out)?;
        }
        CliCommand::Check { password } => {
            let password = match password {
                Some(password) => password,
                None => handlers::prompt_password()?,
            };

            let report = handlers::handle_check(&password, args.json, &mut out)?;
            if !report.strong {
                out.flush()?;
                std::process::exit(1);
            }
        }
    }

    Ok(())
}
