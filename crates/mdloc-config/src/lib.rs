use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// Where the config lives when `--config` is not given.
pub const DEFAULT_CONFIG_PATH: &str = "scripts/doc_quality.toml";

/// Knobs for the per-file quality checks.
///
/// Keys missing from an existing file fall back to the values of
/// [`DocConfig::default`]; a freshly created file gets [`DocConfig::starter`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocConfig {
    pub min_length: usize,
    pub required_sections: BTreeSet<String>,
    pub supported_languages: BTreeSet<String>,
    pub code_example_required: bool,
    pub image_required: bool,
}

impl Default for DocConfig {
    fn default() -> Self {
        Self {
            min_length: 100,
            required_sections: BTreeSet::new(),
            supported_languages: BTreeSet::new(),
            code_example_required: true,
            image_required: false,
        }
    }
}

impl DocConfig {
    /// Contents written when no config file exists yet.
    pub fn starter() -> Self {
        Self {
            min_length: 100,
            required_sections: ["Installation", "Usage", "Configuration"]
                .into_iter()
                .map(String::from)
                .collect(),
            supported_languages: ["en", "de", "it", "es"]
                .into_iter()
                .map(String::from)
                .collect(),
            code_example_required: true,
            image_required: true,
        }
    }

    pub fn is_supported(&self, lang: &str) -> bool {
        self.supported_languages.contains(lang)
    }
}

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("config file not found: {}", path.display())]
    NotFound { path: PathBuf },
    #[error("error reading config file: {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("error parsing config file: {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("error creating config file: {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("error serializing config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Read and parse an existing config file.
pub fn load_config(path: &Path) -> Result<DocConfig, ConfigError> {
    let text = std::fs::read_to_string(path).map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            ConfigError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            ConfigError::Read {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;
    parse_config(&text).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

pub fn parse_config(text: &str) -> Result<DocConfig, toml::de::Error> {
    toml::from_str(text)
}

/// Write `cfg` to `path`, creating parent directories as needed.
pub fn write_config(path: &Path, cfg: &DocConfig) -> Result<(), ConfigError> {
    let body = toml::to_string_pretty(cfg)?;
    let write_err = |source| ConfigError::Write {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(write_err)?;
    }
    std::fs::write(path, body).map_err(write_err)
}

/// Load the config at `path`, creating it with starter values when absent.
///
/// The flag is true when the file was created by this call.
pub fn load_or_create(path: &Path) -> Result<(DocConfig, bool), ConfigError> {
    if path.exists() {
        return Ok((load_config(path)?, false));
    }
    let cfg = DocConfig::starter();
    write_config(path, &cfg)?;
    tracing::info!(event = "config_created", path = %path.display());
    Ok((cfg, true))
}
