use std::env;
use std::path::PathBuf;

pub const DEFAULT_API_URL: &str = "https://jsonplaceholder.typicode.com/";

/// Process-wide settings, read once at startup and passed down explicitly
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub api_url: String,
    pub storage_path: PathBuf,
}

impl Config {
    /// Reads `API_URL` and `STORAGE_PATH` from the environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any variable source; empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let api_url = var("API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string());
        let storage_path = var("STORAGE_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(Self::default_storage_path);

        Self {
            api_url,
            storage_path,
        }
    }

    /// Directory holding the running executable, or the working directory
    fn default_storage_path() -> PathBuf {
        env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from("."))
    }
}
