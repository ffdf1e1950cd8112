use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort the whole run.
#[derive(Debug, Error)]
pub enum FixError {
    #[error("walk error under {root}: {source}")]
    Walk {
        root: PathBuf,
        #[source]
        source: walkdir::Error,
    },
    #[error("io error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("creation time is not available for {path} on this platform or filesystem")]
    CreationTimeUnsupported { path: PathBuf },
    #[error("could not update times for {path}: {source}")]
    SetTimes {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("settings error: {0}")]
    Settings(String),
}

impl FixError {
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Container-level failures. The file is skipped with a warning.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("{format} container: {source}")]
    Container {
        format: &'static str,
        #[source]
        source: exif::Error,
    },
    #[error("read error: {0}")]
    Read(#[from] io::Error),
}

/// EXIF directory or value failures. The file is skipped with a warning.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("exif directory: {0}")]
    Directory(#[from] exif::Error),
    #[error("unparseable capture time `{0}`")]
    DateTime(String),
    #[error("capture time `{0}` does not exist in the local timezone")]
    NonexistentLocalTime(String),
}
