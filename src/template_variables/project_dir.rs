use std::{
    fmt::Display,
    fs,
    path::{Path, PathBuf},
};

use log::debug;

use crate::error::{Error, Result};
use crate::project_config::ProjectConfig;

/// Directory of the project to generate: `<destination>/<project name>`.
#[derive(Debug, PartialEq)]
pub struct ProjectDir(PathBuf);

impl AsRef<Path> for ProjectDir {
    fn as_ref(&self) -> &Path {
        self.0.as_ref()
    }
}

impl Display for ProjectDir {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.display().fmt(f)
    }
}

impl From<(&ProjectConfig, &Path)> for ProjectDir {
    fn from((project, base_path): (&ProjectConfig, &Path)) -> Self {
        Self(base_path.join(project.name()))
    }
}

impl ProjectDir {
    /// Create the project root. Never touches an existing entry at that path.
    pub fn create(&self) -> Result<()> {
        fs::create_dir(&self.0).map_err(|e| Error::from_io(&self.0, e))?;
        debug!("created {}", self.0.display());
        Ok(())
    }

    /// Create `relative` beneath the project root
    pub fn create_subdir(&self, relative: &str) -> Result<PathBuf> {
        let path = self.0.join(relative);
        fs::create_dir(&path).map_err(|e| Error::from_io(&path, e))?;
        debug!("created {}", path.display());
        Ok(path)
    }

    pub fn join(&self, relative: impl AsRef<Path>) -> PathBuf {
        self.0.join(relative)
    }
}
