//! Application configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub users_file: PathBuf,
    pub posts_file: PathBuf,
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// `CHIRP_DATA_DIR` locates both collection files (default: current
    /// directory); `CHIRP_USERS_FILE` and `CHIRP_POSTS_FILE` override the
    /// individual paths.
    pub fn from_env() -> Self {
        let data_dir = env::var("CHIRP_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("."));

        Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            users_file: env::var("CHIRP_USERS_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|_| data_dir.join("users.json")),
            posts_file: env::var("CHIRP_POSTS_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|_| data_dir.join("posts.json")),
        }
    }
}
