mod apply;
mod cli;
mod error;
mod exif_datetime;
mod extract;
mod file_collect;
mod file_times;
mod logging;
mod model;
mod pipeline;
mod reconcile;
mod settings;
#[cfg(test)]
mod test_support;

pub use crate::apply::apply;
pub use crate::error::{DecodeError, ExtractError, FixError};
pub use crate::exif_datetime::decode;
pub use crate::extract::{extract, Extraction, JPEG_READ_SLACK};
pub use crate::file_collect::walk_root;
pub use crate::file_times::{FileTimes, CREATION_FOLLOWS_MODIFIED};
pub use crate::model::{
    CaptureTimestamp, CorrectionRecord, DecisionReason, ImageCandidate, ImageFormat, Outcome,
    RawMetadataBlock, ReconciliationDecision, SkipReason, WalkSummary, Warning,
};
pub use crate::pipeline::{process_candidate, run_root};
pub use crate::reconcile::{decide, CORRECTION_THRESHOLD_HOURS};
pub use crate::settings::RunSettings;

use crate::cli::Cli;
use clap::Parser;
use std::process::ExitCode;

/// Process every root in order, stopping at the first fatal error.
pub fn run_with(settings: &RunSettings) -> Result<Vec<WalkSummary>, FixError> {
    if !settings.dry_run && !CREATION_FOLLOWS_MODIFIED {
        log::warn!(
            "creation time on this platform does not follow modification time; \
             corrections update modified and accessed times only"
        );
    }
    settings
        .roots
        .iter()
        .map(|root| run_root(root, settings))
        .collect()
}

pub fn run() -> ExitCode {
    // Usage errors print to stderr and exit with status 2
    let cli = Cli::parse();
    logging::init();

    let settings = match cli.into_settings() {
        Ok(settings) => settings,
        Err(err) => {
            eprintln!("{}", err);
            return ExitCode::from(2);
        }
    };

    match run_with(&settings) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", err);
            ExitCode::FAILURE
        }
    }
}
