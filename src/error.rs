// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Image(ImageError),
}

/// Specific error types for image loading issues.
/// Used to provide user-friendly, localized error messages.
#[derive(Debug, Clone)]
pub enum ImageError {
    /// File extension is not a supported image format
    UnsupportedFormat,

    /// A directory was given but holds no supported image
    EmptySequence,

    /// Frames of one sequence do not share the same resolution
    SizeMismatch {
        expected: (u32, u32),
        found: (u32, u32),
    },

    /// Decoding failed
    DecodingFailed(String),
}

impl ImageError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            ImageError::UnsupportedFormat => "error-load-image-unsupported-format",
            ImageError::EmptySequence => "error-load-image-empty-sequence",
            ImageError::SizeMismatch { .. } => "error-load-image-size-mismatch",
            ImageError::DecodingFailed(_) => "error-load-image-decoding-failed",
        }
    }
}

impl fmt::Display for ImageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageError::UnsupportedFormat => write!(f, "Unsupported image format"),
            ImageError::EmptySequence => write!(f, "No supported image found in directory"),
            ImageError::SizeMismatch { expected, found } => write!(
                f,
                "Frame size {}x{} does not match sequence size {}x{}",
                found.0, found.1, expected.0, expected.1
            ),
            ImageError::DecodingFailed(msg) => write!(f, "Decoding failed: {}", msg),
        }
    }
}

impl Error {
    /// Returns the i18n message key describing this error to the user.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            Error::Io(_) => "error-load-io",
            Error::Config(_) => "config-load-error",
            Error::Image(err) => err.i18n_key(),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Image(e) => write!(f, "Image Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<ImageError> for Error {
    fn from(err: ImageError) -> Self {
        Error::Image(err)
    }
}

impl From<image_rs::ImageError> for Error {
    fn from(err: image_rs::ImageError) -> Self {
        match err {
            image_rs::ImageError::IoError(io) => Error::Io(io.to_string()),
            image_rs::ImageError::Unsupported(_) => Error::Image(ImageError::UnsupportedFormat),
            other => Error::Image(ImageError::DecodingFailed(other.to_string())),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn errors_map_to_i18n_keys() {
        let err: Error = ImageError::EmptySequence.into();
        assert_eq!(err.i18n_key(), "error-load-image-empty-sequence");
        assert_eq!(Error::Io("x".into()).i18n_key(), "error-load-io");
    }

    #[test]
    fn size_mismatch_mentions_both_sizes() {
        let err = ImageError::SizeMismatch {
            expected: (640, 480),
            found: (320, 240),
        };
        let message = err.to_string();
        assert!(message.contains("640x480"));
        assert!(message.contains("320x240"));
    }

    #[test]
    fn image_error_i18n_keys() {
        assert_eq!(
            ImageError::UnsupportedFormat.i18n_key(),
            "error-load-image-unsupported-format"
        );
        assert_eq!(
            ImageError::EmptySequence.i18n_key(),
            "error-load-image-empty-sequence"
        );
    }

    #[test]
    fn decoding_error_converts_into_image_variant() {
        let err: Error = ImageError::DecodingFailed("truncated".into()).into();
        assert!(matches!(err, Error::Image(ImageError::DecodingFailed(msg)) if msg == "truncated"));
    }
}
