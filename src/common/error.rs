//! Unified error types for the Sarabun library.
//!
//! A single error enum covers both export pipelines, presenting a consistent
//! API to users. The two failure families a caller can meaningfully react to
//! are [`Error::Capture`] (raster export) and [`Error::Pack`] (structured
//! export); everything else is plumbing detail underneath them.

use thiserror::Error;

/// Main error type for Sarabun operations.
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Raster capture failed: the region was inaccessible (detached,
    /// zero-size) or the encoder reported an error
    #[error("Capture failed: {0}")]
    Capture(String),

    /// Document serialization failed
    #[error("Pack failed: {0}")]
    Pack(String),

    /// XML generation error
    #[error("XML error: {0}")]
    Xml(String),

    /// ZIP archive error
    #[error("ZIP error: {0}")]
    Zip(String),

    /// An export of the same kind is already running. The message is Thai
    /// because it flows straight into the user-facing notification stream.
    #[error("การส่งออก {0} กำลังดำเนินการอยู่")]
    Busy(&'static str),
}

/// Result type for Sarabun operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::fmt::Error> for Error {
    fn from(err: std::fmt::Error) -> Self {
        Error::Xml(err.to_string())
    }
}

impl From<zip::result::ZipError> for Error {
    fn from(err: zip::result::ZipError) -> Self {
        Error::Zip(err.to_string())
    }
}

impl From<image::ImageError> for Error {
    fn from(err: image::ImageError) -> Self {
        Error::Capture(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::Capture("region detached".to_string());
        assert_eq!(err.to_string(), "Capture failed: region detached");

        let err = Error::Busy("PDF");
        assert_eq!(err.to_string(), "การส่งออก PDF กำลังดำเนินการอยู่");
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: Error = io.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
