use crate::error::DecodeError;
use crate::model::{CaptureTimestamp, RawMetadataBlock};
use chrono::{DateTime, FixedOffset, Local, NaiveDateTime, TimeZone};
use exif::{In, Reader, Tag, Value};

const EXIF_DATETIME_FORMAT: &str = "%Y:%m:%d %H:%M:%S";

/// Decode the capture time from a TIFF-structured EXIF block.
/// Priority: DateTimeOriginal > DateTime
pub fn decode(block: RawMetadataBlock) -> Result<CaptureTimestamp, DecodeError> {
    let exif = Reader::new().read_raw(block.into_bytes())?;

    let Some(field) = exif
        .get_field(Tag::DateTimeOriginal, In::PRIMARY)
        .or_else(|| exif.get_field(Tag::DateTime, In::PRIMARY))
    else {
        return Ok(CaptureTimestamp::Absent);
    };

    match &field.value {
        Value::Ascii(values) => {
            let raw = values
                .first()
                .map(|value| String::from_utf8_lossy(value).into_owned())
                .unwrap_or_default();
            parse_capture_time(&raw)
        }
        _ => Err(DecodeError::DateTime(
            field.display_value().to_string(),
        )),
    }
}

/// Parse an EXIF "YYYY:MM:DD HH:MM:SS" value as local wall-clock time.
///
/// Cameras without a clock write all zeros or blanks; those count as absent.
pub fn parse_capture_time(value: &str) -> Result<CaptureTimestamp, DecodeError> {
    let trimmed = value.trim_matches(|c: char| c == '\0' || c.is_whitespace());
    if trimmed.chars().all(|c| matches!(c, '0' | ':' | ' ')) {
        return Ok(CaptureTimestamp::Absent);
    }
    let naive = NaiveDateTime::parse_from_str(trimmed, EXIF_DATETIME_FORMAT)
        .map_err(|_| DecodeError::DateTime(trimmed.to_string()))?;
    resolve_local(naive).map(CaptureTimestamp::Captured)
}

/// Pin a wall-clock reading to the local offset in force at that moment.
/// Inside a DST fold the earlier instant wins; a reading that falls in a
/// DST gap never happened and is rejected.
fn resolve_local(naive: NaiveDateTime) -> Result<DateTime<FixedOffset>, DecodeError> {
    Local
        .from_local_datetime(&naive)
        .earliest()
        .map(|local| local.fixed_offset())
        .ok_or_else(|| DecodeError::NonexistentLocalTime(naive.to_string()))
}
