//! Desk configuration
//!
//! Resolved once from the command line, which clap backs with the
//! `INVENTORY_*` environment variables (after `.env` is loaded).

use std::path::{Path, PathBuf};

use inventory_client::{ClientConfig, SessionStorage};

use crate::cli::Cli;

/// Log file name prefix inside the log directory
pub const LOG_FILE: &str = "inventory-desk.log";

#[derive(Debug, Clone)]
pub struct DeskConfig {
    pub api_url: String,
    pub timeout_secs: u64,
    pub data_dir: PathBuf,
    pub verbose: bool,
}

impl DeskConfig {
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            api_url: cli.api_url.trim().trim_end_matches('/').to_string(),
            timeout_secs: cli.timeout,
            data_dir: cli.data_dir.clone(),
            verbose: cli.verbose,
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Log directory: {data_dir}/logs/
    pub fn log_dir(&self) -> PathBuf {
        self.data_dir.join("logs")
    }

    /// Session file storage in the data directory
    pub fn session_storage(&self) -> SessionStorage {
        SessionStorage::in_dir(&self.data_dir)
    }

    pub fn client_config(&self) -> ClientConfig {
        ClientConfig::new(&self.api_url).with_timeout(self.timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_from_cli() {
        let cli = Cli::try_parse_from([
            "inventory-desk",
            "--api-url",
            "http://pos.local:5000/",
            "--timeout",
            "5",
            "--data-dir",
            "/tmp/desk",
        ])
        .unwrap();
        let config = DeskConfig::from_cli(&cli);

        assert_eq!(config.api_url, "http://pos.local:5000");
        assert_eq!(config.log_dir(), PathBuf::from("/tmp/desk/logs"));
        assert_eq!(
            config.session_storage().path(),
            Path::new("/tmp/desk/session.json")
        );

        let client = config.client_config();
        assert_eq!(client.timeout, 5);
        assert!(client.validate().is_ok());
    }
}
