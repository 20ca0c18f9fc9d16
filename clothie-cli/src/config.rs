//! Runtime configuration from flags, environment and `.env`.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use anyhow::Result;
use clap::Parser;
use clap::Subcommand;

use crate::paths::Paths;

/// Terminal front-end for the clothie storefront.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Backend base URL, e.g. `http://localhost:5000/api/`
    #[arg(long, env = "CLOTHIE_BACKEND_URL")]
    pub backend_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long, env = "CLOTHIE_TIMEOUT_SECS")]
    pub timeout_secs: Option<u64>,

    /// Connection timeout in seconds
    #[arg(long, env = "CLOTHIE_CONNECT_TIMEOUT_SECS")]
    pub connect_timeout_secs: Option<u64>,

    /// Session file, defaults to the platform data directory
    #[arg(long, env = "CLOTHIE_SESSION_FILE")]
    pub session_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Show the navigation bar
    Nav,
    /// Fill in the signup form
    Signup,
    /// Store a session for a user
    Login {
        #[arg(long)]
        user_id: String,
        #[arg(long, default_value = "")]
        token: String,
    },
    /// Remove the stored session
    Logout,
    /// Open the account page
    Account,
}

/// Resolved settings.
#[derive(Debug, Clone)]
pub struct Config {
    pub backend_url: Option<String>,
    pub timeout: Option<Duration>,
    pub connect_timeout: Option<Duration>,
    pub session_file: PathBuf,
}

impl Config {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let session_file = match &cli.session_file {
            Some(path) => path.clone(),
            None => Paths::from_project_dirs()
                .map(|paths| paths.session_file())
                .context("cannot determine a data directory for the session file")?,
        };

        Ok(Self {
            backend_url: cli.backend_url.clone(),
            timeout: cli.timeout_secs.map(Duration::from_secs),
            connect_timeout: cli.connect_timeout_secs.map(Duration::from_secs),
            session_file,
        })
    }

    /// The backend URL, which only some commands need.
    pub fn require_backend_url(&self) -> Result<&str> {
        self.backend_url
            .as_deref()
            .context("CLOTHIE_BACKEND_URL is not set (or pass --backend-url)")
    }
}
