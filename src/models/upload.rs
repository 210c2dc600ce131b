use bytes::Bytes;

use crate::traits::FilePart;

/// Multipart field name the upload endpoint reads the document from
pub const UPLOAD_FIELD: &str = "file";

/// A file as picked by the user, before validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    /// File name, including extension
    pub name: String,
    /// Declared media type (e.g. `application/pdf`)
    pub media_type: String,
    /// File contents
    pub bytes: Bytes,
}

impl SelectedFile {
    pub fn new(name: impl Into<String>, media_type: impl Into<String>, bytes: Bytes) -> Self {
        Self {
            name: name.into(),
            media_type: media_type.into(),
            bytes,
        }
    }

    /// Size in bytes
    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }
}

/// A file that passed [`crate::validator::validate`].
///
/// Only the validator constructs this type, so holding one proves the format
/// and size checks ran. Cloning is cheap: the contents are reference counted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidFile(SelectedFile);

impl ValidFile {
    pub(crate) fn new(file: SelectedFile) -> Self {
        Self(file)
    }

    pub fn name(&self) -> &str {
        &self.0.name
    }

    pub fn media_type(&self) -> &str {
        &self.0.media_type
    }

    pub fn bytes(&self) -> &Bytes {
        &self.0.bytes
    }

    pub fn size(&self) -> u64 {
        self.0.size()
    }

    /// The multipart part the upload endpoint expects
    pub fn to_part(&self) -> FilePart {
        FilePart::new(
            UPLOAD_FIELD,
            self.0.name.clone(),
            self.0.media_type.clone(),
            self.0.bytes.clone(),
        )
    }

    pub fn into_inner(self) -> SelectedFile {
        self.0
    }
}

/// The file waiting to be submitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingUpload {
    pub file: ValidFile,
    pub name: String,
    pub size: u64,
}

impl From<ValidFile> for PendingUpload {
    fn from(file: ValidFile) -> Self {
        Self {
            name: file.name().to_string(),
            size: file.size(),
            file,
        }
    }
}
