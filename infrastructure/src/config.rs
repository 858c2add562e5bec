use dotenvy::dotenv;
use std::env;
use std::path::PathBuf;

pub struct Config {
    pub api_base_url: String,
    pub store_path: PathBuf,
    pub dev_auth_enabled: bool,
}

impl Config {
    pub fn load() -> Self {
        dotenv().ok();
        Self {
            api_base_url: env::var("API_BASE_URL")
                .unwrap_or_else(|_| "http://localhost:8000".to_string()),
            store_path: env::var("STORE_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| Self::default_store_path()),
            dev_auth_enabled: env::var("DEV_AUTH_ENABLED")
                .map(|v| v == "true" || v == "1")
                .unwrap_or(false),
        }
    }

    fn default_store_path() -> PathBuf {
        let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
        let mut path = PathBuf::from(home);
        path.push(".config");
        path.push("talent_cli");
        path.push("store.json");
        path
    }
}
