use std::io::{self, ErrorKind};
use std::path::PathBuf;

use thiserror::Error;

/// Everything that can go wrong while turning user input into a project tree.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("\"{}\" folder already exists", .0.display())]
    AlreadyExists(PathBuf),

    #[error("Permission denied while creating `{}`", path.display())]
    PermissionDenied {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Could not create `{}`", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Error rendering template `{template}`")]
    Render {
        template: &'static str,
        #[source]
        source: liquid::Error,
    },

    #[error("Interactive prompt failed")]
    Prompt(#[from] dialoguer::Error),
}

impl Error {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Classify a filesystem failure on `path` by its [`ErrorKind`].
    pub fn from_io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            ErrorKind::AlreadyExists => Self::AlreadyExists(path),
            ErrorKind::PermissionDenied => Self::PermissionDenied { path, source },
            _ => Self::Io { path, source },
        }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
