use crate::error::FixError;
use crate::file_times::FileTimes;
use crate::model::{ImageCandidate, Outcome, WalkSummary};
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

/// Walk `root` in file-name order, handing every non-directory entry to `visit`.
///
/// With `max_corrections > 0` the walk stops for good, siblings included,
/// once more than that many corrections were made under this root.
/// Any error returned by `visit` ends the walk and is passed up.
pub fn walk_root<F>(
    root: &Path,
    max_corrections: usize,
    mut visit: F,
) -> Result<WalkSummary, FixError>
where
    F: FnMut(&ImageCandidate) -> Result<Outcome, FixError>,
{
    let mut summary = WalkSummary::default();

    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry.map_err(|source| FixError::Walk {
            root: root.to_path_buf(),
            source,
        })?;
        if entry.file_type().is_dir() {
            continue;
        }
        if max_corrections > 0 && summary.corrected > max_corrections {
            summary.stopped_early = true;
            break;
        }

        // Symlinked files are judged by their target's size and times.
        let metadata = fs::metadata(entry.path()).map_err(|e| FixError::io(entry.path(), e))?;
        let candidate = ImageCandidate::new(
            entry.into_path(),
            metadata.len(),
            FileTimes::from_metadata(&metadata),
        );
        let outcome = visit(&candidate)?;
        summary.record(&outcome);
    }

    Ok(summary)
}
