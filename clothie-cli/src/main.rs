mod commands;
mod config;
mod paths;
mod terminal;
mod view;

use std::fs;
use std::fs::File;

use anyhow::Result;
use clap::Parser;
use simplelog::{Config as LogConfig, LevelFilter, WriteLogger};

use crate::config::{Cli, Command, Config};
use crate::paths::Paths;
use crate::terminal::Terminal;

/// Log to `clothie.log` in the cache directory. Failing to set up logging is
/// not fatal.
fn init_logging() {
    let Some(paths) = Paths::from_project_dirs() else { return };
    if let Err(e) = paths.rotate_logs() {
        eprintln!("warning: cannot rotate logs: {}", e);
    }
    let path = paths.log_file();
    if let Some(dir) = path.parent() {
        let _ = fs::create_dir_all(dir);
    }
    match File::create(&path) {
        Ok(log_file) => {
            let _ = WriteLogger::init(LevelFilter::Debug, LogConfig::default(), log_file);
        }
        Err(e) => eprintln!("warning: cannot create log file {}: {}", path.display(), e),
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = Config::from_cli(&cli)?;
    log::debug!("config: {:?}", config);

    match cli.command {
        Command::Nav => commands::nav(),
        Command::Login { user_id, token } => commands::login(&config, &user_id, &token)?,
        Command::Logout => commands::logout(&config)?,
        Command::Signup => commands::signup(&mut Terminal::new()).await?,
        Command::Account => commands::account(&config, &mut Terminal::new()).await?,
    }
    Ok(())
}

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    init_logging();

    if let Err(e) = run(cli).await {
        log::error!("{:#}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
