use crate::error::FixError;
use crate::file_times::FileTimes;
use chrono::{DateTime, FixedOffset, Local};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageFormat {
    Jpeg,
    Png,
    Heic,
    Unknown,
}

impl ImageFormat {
    /// Dispatch on the lowercased extension.
    pub fn from_path(path: &Path) -> Self {
        let Some(ext) = path.extension().and_then(|ext| ext.to_str()) else {
            return Self::Unknown;
        };
        match ext.to_ascii_lowercase().as_str() {
            "jpg" | "jpeg" => Self::Jpeg,
            "png" => Self::Png,
            "heic" => Self::Heic,
            _ => Self::Unknown,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Jpeg => "jpeg",
            Self::Png => "png",
            Self::Heic => "heic",
            Self::Unknown => "unknown",
        }
    }
}

#[derive(Debug, Clone)]
pub struct ImageCandidate {
    pub path: PathBuf,
    pub format: ImageFormat,
    pub size_hint: u64,
    pub times: FileTimes,
}

impl ImageCandidate {
    pub fn new(path: PathBuf, size_hint: u64, times: FileTimes) -> Self {
        let format = ImageFormat::from_path(&path);
        Self {
            path,
            format,
            size_hint,
            times,
        }
    }

    pub fn creation_time(&self) -> Result<DateTime<Local>, FixError> {
        self.times
            .birth
            .map(DateTime::<Local>::from)
            .ok_or_else(|| FixError::CreationTimeUnsupported {
                path: self.path.clone(),
            })
    }
}

/// TIFF-structured EXIF bytes lifted out of a container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawMetadataBlock(Vec<u8>);

impl RawMetadataBlock {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }
}

/// Capture time resolved against the local timezone. Equality compares
/// instants, so two readings in different offsets can be equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureTimestamp {
    Absent,
    Captured(DateTime<FixedOffset>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecisionReason {
    WithinThreshold,
    NoTimestamp,
    Updated,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReconciliationDecision {
    pub should_update: bool,
    pub reason: DecisionReason,
}

impl ReconciliationDecision {
    pub fn keep(reason: DecisionReason) -> Self {
        Self {
            should_update: false,
            reason,
        }
    }

    pub fn update() -> Self {
        Self {
            should_update: true,
            reason: DecisionReason::Updated,
        }
    }
}

/// Audit record emitted for every correction decision, dry run or not.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorrectionRecord {
    pub path: String,
    pub dry_run: bool,
    pub previous_time: DateTime<Local>,
    pub new_time: DateTime<Local>,
    pub lowers_creation_time: bool,
}

impl fmt::Display for CorrectionRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match serde_json::to_string(self) {
            Ok(json) => f.write_str(&json),
            Err(_) => write!(f, "{:?}", self),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    UnknownFormat,
    MetadataAbsent,
    TagAbsent,
    WithinThreshold,
    NoTimestamp,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    Malformed(String),
    HeicUnavailable(String),
    Decode(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Skipped(SkipReason),
    Warned(Warning),
    Corrected(CorrectionRecord),
}

impl Outcome {
    pub fn is_correction(&self) -> bool {
        matches!(self, Self::Corrected(_))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalkSummary {
    pub visited: usize,
    pub corrected: usize,
    pub skipped: usize,
    pub warned: usize,
    pub stopped_early: bool,
}

impl WalkSummary {
    pub fn record(&mut self, outcome: &Outcome) {
        self.visited += 1;
        match outcome {
            Outcome::Skipped(_) => self.skipped += 1,
            Outcome::Warned(_) => self.warned += 1,
            Outcome::Corrected(_) => self.corrected += 1,
        }
    }
}
