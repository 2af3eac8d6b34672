use dotenvy::dotenv;
use std::{env, path::PathBuf};

pub struct Config {
    pub http_port: u16,
    pub seed_file: Option<PathBuf>,
    pub log_dir: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        let http_port = match env::var("WATCHTIME_HTTP_PORT") {
            Ok(val) => val.parse::<u16>().unwrap_or(8080),
            Err(_) => 8080,
        };

        let seed_file = match env::var("WATCHTIME_SEED_FILE") {
            Ok(val) if !val.trim().is_empty() => Some(PathBuf::from(val)),
            _ => None,
        };

        let log_dir = match env::var("WATCHTIME_LOG_DIR") {
            Ok(val) => val,
            Err(_) => "logs".to_string(),
        };

        Self {
            http_port,
            seed_file,
            log_dir,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            http_port: 8080,
            seed_file: None,
            log_dir: "logs".to_string(),
        }
    }
}
