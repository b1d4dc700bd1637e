use std::env;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub quotes_path: String,
    pub favorites_dir: Option<String>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, String> {
        Ok(Self {
            quotes_path: env::var("QUOTES_PATH").map_err(|e| format!("QUOTES_PATH: {e}"))?,
            favorites_dir: env::var("FAVORITES_DIR").ok(),
        })
    }
}
