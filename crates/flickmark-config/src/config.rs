use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub tmdb: TmdbConfig,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TmdbConfig {
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    "https://api.themoviedb.org/3".to_string()
}

impl Default for TmdbConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
        }
    }
}

impl Config {
    /// Load `config.toml`. A missing file is the default configuration;
    /// a present but unparsable file is an error the user should see.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        Ok(config)
    }

    /// TMDB API key; the `TMDB_API_KEY` environment variable overrides the
    /// config file.
    pub fn api_key(&self) -> Option<String> {
        std::env::var("TMDB_API_KEY")
            .ok()
            .filter(|key| !key.is_empty())
            .or_else(|| self.tmdb.api_key.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_yields_default_config() {
        let dir = TempDir::new().unwrap();
        let config = Config::load(&dir.path().join("config.toml")).unwrap();
        assert!(config.tmdb.api_key.is_none());
        assert_eq!(config.tmdb.base_url, "https://api.themoviedb.org/3");
    }

    #[test]
    fn test_loads_api_key_and_base_url_override() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[tmdb]\napi_key = \"abc123\"\nbase_url = \"http://localhost:9000\"\n",
        )
        .unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.tmdb.api_key.as_deref(), Some("abc123"));
        assert_eq!(config.tmdb.base_url, "http://localhost:9000");
    }

    // The only test that touches TMDB_API_KEY; keeping every env assertion
    // in one test avoids races under parallel execution.
    #[test]
    fn test_env_var_overrides_file_api_key() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[tmdb]\napi_key = \"from-file\"\n").unwrap();
        let config = Config::load(&path).unwrap();

        std::env::set_var("TMDB_API_KEY", "from-env");
        assert_eq!(config.api_key().as_deref(), Some("from-env"));

        // An empty override falls back to the file, it is not taken literally.
        std::env::set_var("TMDB_API_KEY", "");
        assert_eq!(config.api_key().as_deref(), Some("from-file"));

        std::env::remove_var("TMDB_API_KEY");
        assert_eq!(config.api_key().as_deref(), Some("from-file"));
    }

    #[test]
    fn test_unparsable_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[tmdb\n").unwrap();
        assert!(Config::load(&path).is_err());
    }
}
