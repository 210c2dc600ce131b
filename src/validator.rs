//! Pre-submission checks on a selected file.
//!
//! The format check only looks at the declared media type; file contents are
//! never sniffed. The type must be a well-formed `type/subtype` naming a PDF
//! or word-processor format. Format is checked before size, so a file failing
//! both reports [`ValidationError::UnsupportedFormat`].

use crate::config::DEFAULT_MAX_UPLOAD_BYTES;
use crate::error::ValidationError;
use crate::models::{SelectedFile, ValidFile};

/// Media type fragments accepted for upload. `pdf` covers `application/pdf`,
/// `word` covers `application/msword`, `document` covers the OOXML and ODF
/// word-processor types.
const ACCEPTED_TYPE_MARKERS: &[&str] = &["pdf", "word", "document"];

/// Validate against the default 10 MiB limit.
pub fn validate(file: SelectedFile) -> Result<ValidFile, ValidationError> {
    validate_with_limit(file, DEFAULT_MAX_UPLOAD_BYTES)
}

/// Validate against an explicit size limit in bytes. A file of exactly
/// `max_bytes` passes.
pub fn validate_with_limit(
    file: SelectedFile,
    max_bytes: u64,
) -> Result<ValidFile, ValidationError> {
    if !is_supported_media_type(&file.media_type) {
        return Err(ValidationError::UnsupportedFormat {
            media_type: file.media_type,
        });
    }

    let size = file.size();
    if size > max_bytes {
        return Err(ValidationError::FileTooLarge {
            size,
            limit: max_bytes,
        });
    }

    Ok(ValidFile::new(file))
}

pub fn is_supported_media_type(media_type: &str) -> bool {
    let Some(essence) = media_type_essence(media_type) else {
        return false;
    };
    let lowered = essence.to_ascii_lowercase();
    ACCEPTED_TYPE_MARKERS
        .iter()
        .any(|marker| lowered.contains(marker))
}

/// The `type/subtype` part of a media type, if it is well formed.
fn media_type_essence(media_type: &str) -> Option<&str> {
    let essence = media_type.split(';').next()?.trim();
    let (kind, subtype) = essence.split_once('/')?;
    (is_token(kind) && is_token(subtype)).then_some(essence)
}

fn is_token(part: &str) -> bool {
    !part.is_empty()
        && part
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b"!#$&-^_.+".contains(&b))
}
