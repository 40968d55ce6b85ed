use std::env;
use std::path::{Path, PathBuf};

/// Versioned path prefix every endpoint lives under.
const API_PREFIX: &str = "/api/v1";
/// Default backend location, matching the API's development port.
const DEFAULT_BASE_URL: &str = "http://localhost:8000";
/// Default directory backing the persisted session keys.
const DEFAULT_SESSION_DIR: &str = "./.ordens-session";

/// Resolved client configuration: where the API lives and where the login
/// session is persisted.
#[derive(Debug, Clone)]
pub struct Config {
    api_base_url: String,
    session_dir: PathBuf,
}

impl Config {
    /// Builds a configuration for an explicit backend location. The versioned
    /// API prefix is appended here, so `base_url` is just scheme + host + port.
    pub fn new(base_url: &str, session_dir: impl Into<PathBuf>) -> Config {
        Config {
            api_base_url: format!("{}{API_PREFIX}", base_url.trim_end_matches('/')),
            session_dir: session_dir.into(),
        }
    }

    /// Resolves the backend location from the environment: an explicit
    /// `ORDENS_BASE_URL` wins, otherwise the local development port is used.
    /// `ORDENS_SESSION_DIR` overrides the session directory the same way.
    pub fn from_env() -> Config {
        let base_url_var = env::var("ORDENS_BASE_URL");
        let base_url = base_url_var.as_ref().map_or(DEFAULT_BASE_URL, |v| v.as_str());
        let session_dir =
            env::var("ORDENS_SESSION_DIR").map_or_else(|_| PathBuf::from(DEFAULT_SESSION_DIR), PathBuf::from);
        Config::new(base_url, session_dir)
    }

    /// Full API base, prefix included (e.g. `http://localhost:8000/api/v1`).
    pub fn api_base_url(&self) -> &str { self.api_base_url.as_str() }
    /// Directory the session store writes its keys into.
    pub fn session_dir(&self) -> &Path { self.session_dir.as_path() }
}

#[cfg(test)]
mod tests {
    use super::Config;

    #[test]
    fn appends_versioned_prefix() {
        let config = Config::new("http://localhost:8000", "/tmp/s");
        assert_eq!(config.api_base_url(), "http://localhost:8000/api/v1");
    }

    #[test]
    fn trims_trailing_slash_before_prefixing() {
        let config = Config::new("https://os.example.com/", "/tmp/s");
        assert_eq!(config.api_base_url(), "https://os.example.com/api/v1");
    }
}
