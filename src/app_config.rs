//! User level defaults, read from `$HOME/.cppgen.toml` or `--config <FILE>`.

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Error;

pub const CONFIG_FILE_NAME: &str = ".cppgen.toml";

pub const DEFAULT_CMAKE_MINIMUM_VERSION: &str = "3.11";
pub const DEFAULT_GENERATOR: &str = "Ninja";

#[derive(Deserialize, Debug, PartialEq, Eq, Default, Clone)]
#[serde(default)]
pub struct AppConfig {
    pub defaults: DefaultsConfig,
    pub cmake: CmakeConfig,
    pub build_script: BuildScriptConfig,
}

#[derive(Deserialize, Debug, PartialEq, Eq, Default, Clone)]
#[serde(default)]
pub struct DefaultsConfig {
    pub language: Option<String>,
}

#[derive(Deserialize, Debug, PartialEq, Eq, Clone)]
#[serde(default)]
pub struct CmakeConfig {
    pub minimum_version: String,
}

impl Default for CmakeConfig {
    fn default() -> Self {
        Self {
            minimum_version: DEFAULT_CMAKE_MINIMUM_VERSION.to_string(),
        }
    }
}

#[derive(Deserialize, Debug, PartialEq, Eq, Clone)]
#[serde(default)]
pub struct BuildScriptConfig {
    pub enabled: bool,
    pub generator: String,
}

impl Default for BuildScriptConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            generator: DEFAULT_GENERATOR.to_string(),
        }
    }
}

impl TryFrom<String> for AppConfig {
    type Error = toml::de::Error;

    fn try_from(contents: String) -> Result<Self, Self::Error> {
        let config: Self = toml::from_str(&contents)?;
        Ok(config)
    }
}

impl AppConfig {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Cannot read config file `{}`", path.display()))?;
        let config = Self::try_from(contents)
            .with_context(|| format!("Cannot parse config file `{}`", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load the explicit config file if one was given, else the one in `$HOME` if present,
    /// else fall back to built-in defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match locate_config_file(explicit)? {
            Some(path) => {
                log::debug!("Using config file {}", path.display());
                Self::from_path(path)
            }
            None => Ok(Self::default()),
        }
    }

    fn validate(&self) -> Result<(), Error> {
        let version = regex::Regex::new(r"^\d+\.\d+(\.\d+)?$").expect("valid regex literal");
        if !version.is_match(&self.cmake.minimum_version) {
            return Err(Error::invalid_input(format!(
                "`{}` is not a valid CMake version for cmake.minimum_version",
                self.cmake.minimum_version
            )));
        }
        if self.build_script.generator.trim().is_empty() {
            return Err(Error::invalid_input(
                "build_script.generator must not be empty",
            ));
        }
        Ok(())
    }
}

pub fn locate_config_file(explicit: Option<&Path>) -> Result<Option<PathBuf>> {
    if let Some(path) = explicit {
        if !path.is_file() {
            bail!("Cannot find the config file {}", path.display());
        }
        return Ok(Some(path.to_path_buf()));
    }
    Ok(home::home_dir()
        .map(|home| home.join(CONFIG_FILE_NAME))
        .filter(|path| path.is_file()))
}
