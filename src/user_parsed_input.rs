//! Input from user but after parse

use std::{
    env,
    path::{Path, PathBuf},
};

use anyhow::Context;

use crate::app_config::AppConfig;
use crate::AppArgs;

// Contains parsed information from user, command line first, config file second.
#[derive(Debug, Clone)]
pub struct UserParsedInput {
    name: Option<String>,
    language: Option<String>,
    default_language: Option<String>,

    destination: PathBuf,

    build_script: bool,
    generator: String,
    cmake_minimum_version: String,

    verbose: bool,
}

impl UserParsedInput {
    /// Merge [`AppArgs`] over [`AppConfig`]
    pub fn try_from_args(args: &AppArgs, config: &AppConfig) -> anyhow::Result<Self> {
        let destination = match &args.destination {
            Some(p) if p.is_absolute() => p.clone(),
            Some(p) => env::current_dir()
                .context("cannot get the current directory")?
                .join(p),
            None => env::current_dir().context("cannot get the current directory")?,
        };

        Ok(Self {
            name: args.name.clone(),
            language: args.language.clone(),
            default_language: config.defaults.language.clone(),
            destination,
            build_script: args.build_script || config.build_script.enabled,
            generator: config.build_script.generator.clone(),
            cmake_minimum_version: config.cmake.minimum_version.clone(),
            verbose: args.verbose,
        })
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    /// Language used when none was given on the command line
    pub fn default_language(&self) -> Option<&str> {
        self.default_language.as_deref()
    }

    pub fn destination(&self) -> &Path {
        self.destination.as_path()
    }

    pub const fn build_script(&self) -> bool {
        self.build_script
    }

    pub fn generator(&self) -> &str {
        &self.generator
    }

    pub fn cmake_minimum_version(&self) -> &str {
        &self.cmake_minimum_version
    }

    pub const fn is_verbose(&self) -> bool {
        self.verbose
    }
}
