use std::path::PathBuf;

use anyhow::{Context, Result};

/// Default ceiling for uploaded resume size (5 MiB).
pub const DEFAULT_MAX_RESUME_BYTES: u64 = 5 * 1024 * 1024;

/// Engine configuration.
///
/// Scoring weights and keyword taxonomies are deliberately NOT configurable —
/// they are part of the analysis wire contract. Config covers only the
/// operational knobs of file handling.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Declared-size ceiling enforced by `analyze_file` before spooling.
    pub max_resume_bytes: u64,
    /// Override for the temp-file spool directory. `None` = system default.
    pub tmp_dir: Option<PathBuf>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_resume_bytes: DEFAULT_MAX_RESUME_BYTES,
            tmp_dir: None,
        }
    }
}

impl EngineConfig {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let max_resume_bytes = match std::env::var("RESUME_MAX_BYTES") {
            Ok(v) => v
                .parse::<u64>()
                .context("RESUME_MAX_BYTES must be a byte count")?,
            Err(_) => DEFAULT_MAX_RESUME_BYTES,
        };

        Ok(EngineConfig {
            max_resume_bytes,
            tmp_dir: std::env::var("RESUME_TMP_DIR").ok().map(PathBuf::from),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_limit_is_5_mib() {
        let config = EngineConfig::default();
        assert_eq!(config.max_resume_bytes, 5 * 1024 * 1024);
        assert!(config.tmp_dir.is_none());
    }
}
