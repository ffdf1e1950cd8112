use crate::error::FixError;
use crate::model::CorrectionRecord;
use chrono::{DateTime, Local};
use filetime::FileTime;
use std::path::Path;
use std::time::SystemTime;

/// Set modified and accessed times to `new_time` unless `dry_run`, then log
/// the decision either way.
///
/// Where birth time is derived from the earliest recorded time, an earlier
/// mtime pulls the creation time back with it. A later capture time cannot
/// move creation time forward.
pub fn apply(
    path: &Path,
    previous_time: DateTime<Local>,
    new_time: DateTime<Local>,
    dry_run: bool,
) -> Result<CorrectionRecord, FixError> {
    if !dry_run {
        let stamp = FileTime::from_system_time(SystemTime::from(new_time));
        filetime::set_file_times(path, stamp, stamp).map_err(|source| FixError::SetTimes {
            path: path.to_path_buf(),
            source,
        })?;
    }

    let record = CorrectionRecord {
        path: path.to_string_lossy().to_string(),
        dry_run,
        previous_time,
        new_time,
        lowers_creation_time: new_time < previous_time,
    };
    log::info!("updated file time {}", record);
    Ok(record)
}
