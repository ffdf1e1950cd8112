//! Drives each candidate through extract, decode, reconcile and apply.

use crate::apply::apply;
use crate::error::FixError;
use crate::exif_datetime::decode;
use crate::extract::{extract, Extraction};
use crate::file_collect::walk_root;
use crate::model::{
    CaptureTimestamp, DecisionReason, ImageCandidate, ImageFormat, Outcome, SkipReason, Warning,
    WalkSummary,
};
use crate::reconcile::decide;
use crate::settings::RunSettings;
use chrono::Local;
use std::fs::File;
use std::path::Path;

pub fn process_candidate(candidate: &ImageCandidate, dry_run: bool) -> Result<Outcome, FixError> {
    let path = &candidate.path;
    if candidate.format == ImageFormat::Unknown {
        return Ok(Outcome::Skipped(SkipReason::UnknownFormat));
    }

    let file = File::open(path).map_err(|e| FixError::io(path, e))?;
    // `extract` consumes the handle, so it is closed before we go on
    let block = match (candidate.format, extract(file, candidate.format, candidate.size_hint)) {
        (_, Ok(Extraction::Block(block))) => block,
        (ImageFormat::Heic, Ok(Extraction::Absent)) => {
            return Ok(heic_unavailable(path, "no Exif item".to_string()));
        }
        (ImageFormat::Heic, Err(err)) => return Ok(heic_unavailable(path, err.to_string())),
        (_, Ok(Extraction::Absent)) => {
            log::debug!("no exif data in {}", path.display());
            return Ok(Outcome::Skipped(SkipReason::MetadataAbsent));
        }
        (_, Err(err)) => {
            log::warn!(
                "could not extract exif data path={} err={}",
                path.display(),
                err
            );
            return Ok(Outcome::Warned(Warning::Malformed(err.to_string())));
        }
    };

    let capture = match decode(block) {
        Ok(capture) => capture,
        Err(err) => return Ok(decode_failed(path, err.to_string())),
    };
    if capture == CaptureTimestamp::Absent {
        log::debug!("no capture time tag in {}", path.display());
        return Ok(Outcome::Skipped(SkipReason::TagAbsent));
    }

    let creation = candidate.creation_time()?;
    let decision = decide(capture, creation);
    match decision.reason {
        DecisionReason::NoTimestamp => Ok(Outcome::Skipped(SkipReason::NoTimestamp)),
        DecisionReason::WithinThreshold => Ok(Outcome::Skipped(SkipReason::WithinThreshold)),
        DecisionReason::Updated => {
            let CaptureTimestamp::Captured(instant) = capture else {
                return Ok(Outcome::Skipped(SkipReason::NoTimestamp));
            };
            apply(path, creation, instant.with_timezone(&Local), dry_run).map(Outcome::Corrected)
        }
    }
}

pub fn run_root(root: &Path, settings: &RunSettings) -> Result<WalkSummary, FixError> {
    let summary = walk_root(root, settings.max_corrections, |candidate| {
        process_candidate(candidate, settings.dry_run)
    })?;
    log::info!(
        "finished {} visited={} corrected={} skipped={} warned={} stopped_early={} dry_run={}",
        root.display(),
        summary.visited,
        summary.corrected,
        summary.skipped,
        summary.warned,
        summary.stopped_early,
        settings.dry_run
    );
    Ok(summary)
}

fn heic_unavailable(path: &Path, detail: String) -> Outcome {
    log::warn!(
        "could not extract exif data path={} err={}",
        path.display(),
        detail
    );
    Outcome::Warned(Warning::HeicUnavailable(detail))
}

fn decode_failed(path: &Path, detail: String) -> Outcome {
    log::warn!(
        "could not decode exif data path={} err={}",
        path.display(),
        detail
    );
    Outcome::Warned(Warning::Decode(detail))
}
