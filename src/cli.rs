use crate::error::FixError;
use crate::settings::RunSettings;
use clap::{ArgAction, Parser};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "fix-image-time",
    version,
    about = "Set image file times from the EXIF capture time when they disagree by a day or more"
)]
pub struct Cli {
    /// Stop a directory after more than this many corrections (0 = no limit)
    #[arg(long, value_name = "N", default_value_t = 0)]
    pub count: usize,

    /// Only log decisions; pass --dry-run=false to write file times
    #[arg(
        long,
        action = ArgAction::Set,
        default_value_t = true,
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        value_name = "BOOL"
    )]
    pub dry_run: bool,

    /// Directories to walk
    #[arg(required = true, value_name = "DIR")]
    pub dirs: Vec<PathBuf>,
}

impl Cli {
    pub fn into_settings(self) -> Result<RunSettings, FixError> {
        RunSettings {
            roots: self.dirs,
            max_corrections: self.count,
            dry_run: self.dry_run,
        }
        .validate()
    }
}
