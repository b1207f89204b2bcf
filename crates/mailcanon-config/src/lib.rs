use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

const APP_DIR: &str = "mailcanon";
const CONFIG_FILENAME: &str = "config.toml";

/// Inputs fed through `validate` then `normalize` by the demo command.
pub const DEFAULT_DEMO_SAMPLES: [&str; 5] = [
    "alice@example.com",
    "bob.smith@example.com",
    "invalid.email",
    "toolonglocalpartxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxx@example.com",
    "   carol@example.com   ",
];

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub demo: DemoConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoConfig {
    pub samples: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputConfig {
    pub json: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            demo: DemoConfig {
                samples: DEFAULT_DEMO_SAMPLES.iter().map(|s| s.to_string()).collect(),
            },
            output: OutputConfig::default(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing home directory")]
    MissingHomeDir,
    #[error("invalid config path: {0}")]
    InvalidConfigPath(PathBuf),
    #[error("config file not found: {0}")]
    MissingConfigFile(PathBuf),
    #[error("invalid demo sample at index {0}: sample cannot be blank")]
    InvalidDemoSample(usize),
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    demo: Option<DemoFile>,
    output: Option<OutputFile>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct DemoFile {
    samples: Option<Vec<String>>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct OutputFile {
    json: Option<bool>,
}

pub fn load(config_path: Option<PathBuf>) -> Result<AppConfig> {
    let explicit = config_path.is_some();
    let path = match resolve_config_path(config_path) {
        Ok(path) => path,
        // No usable default location means running on defaults.
        Err(ConfigError::MissingHomeDir | ConfigError::InvalidConfigPath(_)) if !explicit => {
            return Ok(AppConfig::default())
        }
        Err(err) => return Err(err),
    };
    Ok(load_at_path(&path, explicit)?.unwrap_or_default())
}

pub fn resolve_config_path(custom: Option<PathBuf>) -> Result<PathBuf> {
    match custom {
        Some(path) => non_empty(path),
        None => Ok(config_dir()?.join(APP_DIR).join(CONFIG_FILENAME)),
    }
}

fn config_dir() -> Result<PathBuf> {
    match env::var_os("XDG_CONFIG_HOME") {
        Some(dir) => non_empty(PathBuf::from(dir)),
        None => dirs::home_dir()
            .map(|home| home.join(".config"))
            .ok_or(ConfigError::MissingHomeDir),
    }
}

fn non_empty(path: PathBuf) -> Result<PathBuf> {
    if path.as_os_str().is_empty() {
        return Err(ConfigError::InvalidConfigPath(path));
    }
    Ok(path)
}

fn load_at_path(path: &Path, required: bool) -> Result<Option<AppConfig>> {
    if !path.exists() {
        if required {
            return Err(ConfigError::MissingConfigFile(path.to_path_buf()));
        }
        return Ok(None);
    }

    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let parsed: ConfigFile = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Some(merge_config(parsed)?))
}

fn merge_config(parsed: ConfigFile) -> Result<AppConfig> {
    let mut config = AppConfig::default();

    if let Some(samples) = parsed.demo.and_then(|demo| demo.samples) {
        // Samples are kept as written, surrounding whitespace included.
        if let Some(index) = samples.iter().position(|s| s.trim().is_empty()) {
            return Err(ConfigError::InvalidDemoSample(index));
        }
        config.demo.samples = samples;
    }

    if let Some(json) = parsed.output.and_then(|output| output.json) {
        config.output.json = json;
    }

    Ok(config)
}
