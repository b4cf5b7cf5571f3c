use anyhow::{Context, Result};
use std::path::PathBuf;

pub const DEFAULT_API_URL: &str = "http://localhost:14243";
const DEFAULT_AUTH_TOKEN: &str = "helloworld";

/// Immutable run configuration, resolved once per invocation and passed by
/// parameter; core logic never reads the environment itself
#[derive(Debug, Clone)]
pub struct Config {
    pub api_url: String,
    pub auth_token: String,
    pub project_path: PathBuf,
    /// 0 = unlimited
    pub max_messages: usize,
}

impl Config {
    /// Load configuration from the environment.
    ///
    /// A `.env` file is consulted first but never overrides variables that
    /// are already set. Project path priority: explicit flag > PROJECT_PATH
    /// environment variable > current directory.
    pub fn from_env(explicit_project_path: Option<&str>) -> Result<Self> {
        let _ = dotenvy::dotenv();

        let max_messages = match std::env::var("MAX_MESSAGES") {
            Ok(raw) => raw
                .parse::<usize>()
                .with_context(|| format!("MAX_MESSAGES must be a number, got '{raw}'"))?,
            Err(_) => 0,
        };

        Ok(Self {
            api_url: std::env::var("MEM_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string()),
            auth_token: std::env::var("MEM_AUTH_TOKEN")
                .unwrap_or_else(|_| DEFAULT_AUTH_TOKEN.to_string()),
            project_path: mempersist_types::resolve_project_path(explicit_project_path)?,
            max_messages,
        })
    }
}
