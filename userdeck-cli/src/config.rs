use std::path::PathBuf;

use clap::Args;

use user_service::client::{DEFAULT_ENDPOINT, DEFAULT_RESULTS};
use user_service::ClientConfig;

/// Options shared by every command
#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Base URL of the random user API
    #[arg(long, global = true, env = "USERDECK_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Number of users to fetch
    #[arg(long, global = true, env = "USERDECK_RESULTS", default_value_t = DEFAULT_RESULTS)]
    pub results: usize,

    /// Log file used while the TUI owns the terminal
    #[arg(long, global = true, env = "USERDECK_LOG_FILE", value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl GlobalArgs {
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig::new(self.endpoint.clone(), self.results)
    }

    /// Explicit log file, or `<cache dir>/userdeck/userdeck.log`
    pub fn log_file(&self) -> PathBuf {
        self.log_file.clone().unwrap_or_else(default_log_file)
    }
}

fn default_log_file() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("userdeck")
        .join("userdeck.log")
}
