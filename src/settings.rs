use crate::error::FixError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSettings {
    pub roots: Vec<PathBuf>,
    /// 0 means unbounded.
    pub max_corrections: usize,
    pub dry_run: bool,
}

impl Default for RunSettings {
    fn default() -> Self {
        Self {
            roots: Vec::new(),
            max_corrections: 0,
            dry_run: true,
        }
    }
}

impl RunSettings {
    pub fn validate(self) -> Result<Self, FixError> {
        if self.roots.is_empty() {
            return Err(FixError::Settings(
                "please provide at least one directory".to_string(),
            ));
        }
        Ok(self)
    }
}
