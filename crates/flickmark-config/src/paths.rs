use anyhow::Result;
use std::path::{Path, PathBuf};

/// Base path override for containers, where there is no per-user config dir.
pub fn base_path_override() -> Option<PathBuf> {
    std::env::var("FLICKMARK_BASE_PATH").ok().map(PathBuf::from)
}

pub struct PathManager {
    config_dir: PathBuf,
    data_dir: PathBuf,
    log_dir: PathBuf,
}

impl PathManager {
    pub fn new() -> Result<Self> {
        let base_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?
            .join("flickmark");
        Ok(Self::from_base(base_dir))
    }

    pub fn from_base(base: impl Into<PathBuf>) -> Self {
        let base = base.into();
        Self {
            config_dir: base.clone(),
            data_dir: base.join("data"),
            log_dir: base.join("logs"),
        }
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    /// Where the key -> value store files live (`wishlist`, `language`).
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn log_dir(&self) -> &Path {
        &self.log_dir
    }

    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join("config.toml")
    }

    pub fn ensure_directories(&self) -> Result<()> {
        std::fs::create_dir_all(&self.config_dir)?;
        std::fs::create_dir_all(&self.data_dir)?;
        std::fs::create_dir_all(&self.log_dir)?;
        Ok(())
    }
}

impl Default for PathManager {
    fn default() -> Self {
        if let Some(base) = base_path_override() {
            return Self::from_base(base);
        }
        Self::new().unwrap_or_else(|_| Self::from_base(".flickmark"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_under_base() {
        let paths = PathManager::from_base("/tmp/flickmark-test");
        assert_eq!(paths.config_file(), PathBuf::from("/tmp/flickmark-test/config.toml"));
        assert_eq!(paths.data_dir(), Path::new("/tmp/flickmark-test/data"));
        assert_eq!(paths.log_dir(), Path::new("/tmp/flickmark-test/logs"));
    }
}
