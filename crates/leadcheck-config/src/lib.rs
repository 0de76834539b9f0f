use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use leadcheck_core::rules::DEFAULT_HINT_COUNTRY;
use leadcheck_core::Region;
use serde::Deserialize;
use thiserror::Error;

const APP_DIR: &str = "leadcheck";
const CONFIG_FILENAME: &str = "config.toml";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub default_country: Option<Region>,
    pub hints: HintsConfig,
    pub report: ReportConfig,
}

#[derive(Debug, Clone)]
pub struct HintsConfig {
    pub fallback_country: Region,
}

#[derive(Debug, Clone)]
pub struct ReportConfig {
    pub include_phone: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_country: None,
            hints: HintsConfig {
                fallback_country: DEFAULT_HINT_COUNTRY,
            },
            report: ReportConfig {
                include_phone: true,
            },
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
    #[error("invalid {field} value: {value}")]
    InvalidRegion { field: &'static str, value: String },
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
    default_country: Option<String>,
    hints: Option<HintsFile>,
    report: Option<ReportFile>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct HintsFile {
    fallback_country: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ReportFile {
    include_phone: Option<bool>,
}

pub fn load(config_path: Option<PathBuf>) -> Result<AppConfig> {
    let required = config_path.is_some();
    let path = match resolve_config_path(config_path) {
        Ok(path) => path,
        Err(ConfigError::MissingHomeDir) if !required => return Ok(AppConfig::default()),
        Err(ConfigError::InvalidConfigPath(_)) if !required => return Ok(AppConfig::default()),
        Err(err) => return Err(err),
    };
    match load_at_path(&path, required)? {
        Some(config) => Ok(config),
        None => Ok(AppConfig::default()),
    }
}

pub fn resolve_config_path(custom: Option<PathBuf>) -> Result<PathBuf> {
    match custom {
        Some(path) => {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::InvalidConfigPath(path));
            }
            Ok(path)
        }
        None => {
            let base = if let Some(dir) = env::var_os("XDG_CONFIG_HOME") {
                let path = PathBuf::from(dir);
                if path.as_os_str().is_empty() {
                    return Err(ConfigError::InvalidConfigPath(path));
                }
                path
            } else {
                let home = dirs::home_dir().ok_or(ConfigError::MissingHomeDir)?;
                home.join(".config")
            };
            Ok(base.join(APP_DIR).join(CONFIG_FILENAME))
        }
    }
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

    if let Some(code) = parsed.default_country {
        config.default_country = Some(parse_region("default_country", &code)?);
    }

    if let Some(hints) = parsed.hints {
        if let Some(code) = hints.fallback_country {
            config.hints.fallback_country = parse_region("hints.fallback_country", &code)?;
        }
    }

    if let Some(report) = parsed.report {
        if let Some(include_phone) = report.include_phone {
            config.report.include_phone = include_phone;
        }
    }

    Ok(config)
}

fn parse_region(field: &'static str, code: &str) -> Result<Region> {
    Region::from_code(code).map_err(|_| ConfigError::InvalidRegion {
        field,
        value: code.to_string(),
    })
}
