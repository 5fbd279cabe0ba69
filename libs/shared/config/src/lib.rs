use std::env;
use std::path::PathBuf;
use tracing::warn;

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Directory the store persists its collections into. When unset the
    /// service runs with in-memory storage only.
    pub data_dir: Option<PathBuf>,
    pub port: u16,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let data_dir = match env::var("CLINIC_DATA_DIR") {
            Ok(dir) if !dir.is_empty() => Some(PathBuf::from(dir)),
            _ => {
                warn!("CLINIC_DATA_DIR not set, running with in-memory storage only");
                None
            }
        };

        let port = env::var("CLINIC_PORT")
            .ok()
            .and_then(|raw| raw.parse().ok())
            .unwrap_or(3000);

        Self { data_dir, port }
    }
}
