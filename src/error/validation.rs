//! Client-side file validation errors.
//!
//! These never reach the network: they are raised before any request is
//! built.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Declared media type is neither PDF nor a word-processor document.
    #[error("unsupported file format '{media_type}'")]
    UnsupportedFormat { media_type: String },

    /// File is larger than the upload limit.
    #[error("file is {size} bytes, limit is {limit} bytes")]
    FileTooLarge { size: u64, limit: u64 },
}

impl ValidationError {
    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            ValidationError::UnsupportedFormat { .. } => {
                "Invalid file format. Please upload a PDF or DOCX file.".to_string()
            }
            ValidationError::FileTooLarge { limit, .. } => {
                format!(
                    "File is too large. Maximum size is {}MB.",
                    limit / (1024 * 1024)
                )
            }
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            ValidationError::UnsupportedFormat { .. } => "E_VAL_FORMAT",
            ValidationError::FileTooLarge { .. } => "E_VAL_SIZE",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_format_message() {
        let err = ValidationError::UnsupportedFormat {
            media_type: "image/png".to_string(),
        };
        assert!(err.user_message().contains("PDF or DOCX"));
        assert_eq!(err.error_code(), "E_VAL_FORMAT");
        assert!(err.to_string().contains("image/png"));
    }

    #[test]
    fn test_file_too_large_message() {
        let err = ValidationError::FileTooLarge {
            size: 11 * 1024 * 1024,
            limit: 10 * 1024 * 1024,
        };
        assert_eq!(err.user_message(), "File is too large. Maximum size is 10MB.");
        assert_eq!(err.error_code(), "E_VAL_SIZE");
    }
}
