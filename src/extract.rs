//! Locates the raw EXIF block inside an image container.
//!
//! Every container yields the same block shape: TIFF-structured bytes starting
//! at the byte-order mark, ready for `exif_datetime::decode`.

use crate::error::ExtractError;
use crate::model::{ImageFormat, RawMetadataBlock};
use exif::Reader;
use std::io::{Cursor, Read};

/// Extra bytes read past the size hint for JPEG, covering trailing data the
/// hint does not account for.
pub const JPEG_READ_SLACK: u64 = 64 * 1024;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Extraction {
    Block(RawMetadataBlock),
    Absent,
}

/// Takes ownership of `reader`; it is dropped before this returns on every path.
pub fn extract<R: Read>(
    reader: R,
    format: ImageFormat,
    size_hint: u64,
) -> Result<Extraction, ExtractError> {
    let limit = match format {
        ImageFormat::Jpeg => size_hint.saturating_add(JPEG_READ_SLACK),
        ImageFormat::Png | ImageFormat::Heic => size_hint,
        ImageFormat::Unknown => return Ok(Extraction::Absent),
    };

    // The container parser needs to seek, so buffer the bounded prefix
    let mut data = Vec::new();
    reader.take(limit).read_to_end(&mut data)?;

    match Reader::new().read_from_container(&mut Cursor::new(data)) {
        Ok(exif) => Ok(Extraction::Block(RawMetadataBlock::new(exif.buf().to_vec()))),
        Err(exif::Error::NotFound(_)) => Ok(Extraction::Absent),
        Err(source) => Err(ExtractError::Container {
            format: format.name(),
            source,
        }),
    }
}
