mod error;

pub use error::{ConfigError, Result};

use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

/// Resolver implementations selectable from the config file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolverConfig {
    /// `<Show>/<Season N>/<file>` directory layout
    Directory,
}

/// Where show and season values come from when matching
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ResolutionConfig {
    #[serde(default)]
    pub show: Option<ResolverConfig>,
    #[serde(default)]
    pub season: Option<ResolverConfig>,
    #[serde(default)]
    pub fallback_show: Option<ResolverConfig>,
    #[serde(default)]
    pub fallback_season: Option<ResolverConfig>,
    #[serde(default)]
    pub fallback_to_pattern_show: bool,
    #[serde(default)]
    pub fallback_to_pattern_season: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MatcherConfig {
    /// TV library roots laid out as `<Show>/<Season N>/`
    #[serde(default)]
    pub sources: Vec<PathBuf>,
    #[serde(default)]
    pub resolution: ResolutionConfig,
}

impl MatcherConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config: Self = serde_yaml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load `path` if it exists, otherwise fall back to defaults
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::from_file(path)
        } else {
            tracing::debug!("No config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for source in &self.sources {
            if !seen.insert(source) {
                return Err(ConfigError::DuplicateSource {
                    path: source.clone(),
                });
            }
            if !source.is_dir() {
                return Err(ConfigError::InvalidSourcePath {
                    path: source.clone(),
                    reason: "not a directory".to_string(),
                });
            }
        }
        Ok(())
    }
}
