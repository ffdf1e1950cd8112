//! Platform access to a file's birth, modification and access times.
//!
//! Birth time is only trusted on platforms whose std backend reads it from the
//! filesystem. Elsewhere it is reported as missing, and the pipeline turns
//! that into `FixError::CreationTimeUnsupported` for the file that needed it.

use std::fs;
use std::io;
use std::path::Path;
use std::time::SystemTime;

/// Whether lowering the modification time also lowers the reported creation
/// time. True where birth time is derived from the earliest recorded time.
pub const CREATION_FOLLOWS_MODIFIED: bool = cfg!(any(target_os = "macos", target_os = "ios"));

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FileTimes {
    pub birth: Option<SystemTime>,
    pub modified: Option<SystemTime>,
    pub accessed: Option<SystemTime>,
}

impl FileTimes {
    pub fn from_metadata(metadata: &fs::Metadata) -> Self {
        Self {
            birth: birth_time(metadata),
            modified: metadata.modified().ok(),
            accessed: metadata.accessed().ok(),
        }
    }

    pub fn read(path: &Path) -> io::Result<Self> {
        fs::metadata(path).map(|metadata| Self::from_metadata(&metadata))
    }
}

#[cfg(any(
    target_os = "macos",
    target_os = "ios",
    target_os = "linux",
    target_os = "freebsd",
    target_os = "netbsd",
    target_os = "openbsd",
    windows
))]
fn birth_time(metadata: &fs::Metadata) -> Option<SystemTime> {
    metadata.created().ok()
}

#[cfg(not(any(
    target_os = "macos",
    target_os = "ios",
    target_os = "linux",
    target_os = "freebsd",
    target_os = "netbsd",
    target_os = "openbsd",
    windows
)))]
fn birth_time(_metadata: &fs::Metadata) -> Option<SystemTime> {
    None
}
