/*!
 * Error types for the winupdate-docs application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 */

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

/// Errors that can occur when reading or writing OpenDocument files
#[derive(Error, Debug)]
pub enum DocumentError {
    /// Underlying file system error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Error from the zip container
    #[error("Zip archive error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// Malformed XML in one of the document parts
    #[error("XML syntax error at byte {position}: {message}")]
    Xml {
        /// Byte offset in the part where the problem was found
        position: usize,
        /// What went wrong
        message: String,
    },

    /// A required part is missing from the package
    #[error("Missing document part: {0}")]
    MissingPart(String),

    /// A part is not valid UTF-8
    #[error("Document part {0} is not valid UTF-8")]
    Encoding(String),
}

impl DocumentError {
    pub(crate) fn xml(position: usize, message: impl Into<String>) -> Self {
        Self::Xml {
            position,
            message: message.into(),
        }
    }
}

/// Errors that can occur when loading a phrase dictionary
#[derive(Error, Debug)]
pub enum DictionaryError {
    /// Error reading the dictionary file
    #[error("Failed to read dictionary {path:?}: {source}")]
    Read {
        /// Dictionary location
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// The dictionary is not a JSON object of strings
    #[error("Invalid dictionary JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Errors that can occur when rendering documents to PDF
#[derive(Error, Debug)]
pub enum ConversionError {
    /// The document to convert does not exist
    #[error("File not found: {0:?}")]
    SourceNotFound(PathBuf),

    /// The office suite executable does not exist
    #[error("LibreOffice not found at: {0:?}")]
    OfficeNotFound(PathBuf),

    /// The conversion did not finish in time
    #[error("Conversion timed out after {0:?}")]
    Timeout(Duration),

    /// The office suite exited with a failure status
    #[error("Conversion failed ({status}): {stderr}")]
    Failed {
        /// Exit status description
        status: String,
        /// Captured standard error
        stderr: String,
    },

    /// The office suite reported success but produced no file
    #[error("PDF file was not created: {0:?}")]
    NoOutput(PathBuf),

    /// Error spawning or waiting on the process
    #[error("Process error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors that can occur when drawing or converting image assets
#[derive(Error, Debug)]
pub enum AssetError {
    /// Error from the image codec
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    /// Requested canvas dimensions are unusable
    #[error("Invalid image size: {0}")]
    InvalidSize(String),
}

/// Main application error type that wraps all other errors
///
/// The controller reports failures as `anyhow::Error` with context attached.
/// Library callers that need to branch on the failure kind convert into
/// `AppError`, which recovers the module error underneath the context.
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error from document handling
    #[error("Document error: {0}")]
    Document(#[from] DocumentError),

    /// Error from dictionary loading
    #[error("Dictionary error: {0}")]
    Dictionary(#[from] DictionaryError),

    /// Error from PDF rendering
    #[error("Conversion error: {0}")]
    Conversion(#[from] ConversionError),

    /// Error from image assets
    #[error("Asset error: {0}")]
    Asset(#[from] AssetError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        let error = match error.downcast::<DocumentError>() {
            Ok(e) => return Self::Document(e),
            Err(error) => error,
        };
        let error = match error.downcast::<DictionaryError>() {
            Ok(e) => return Self::Dictionary(e),
            Err(error) => error,
        };
        let error = match error.downcast::<ConversionError>() {
            Ok(e) => return Self::Conversion(e),
            Err(error) => error,
        };
        let error = match error.downcast::<AssetError>() {
            Ok(e) => return Self::Asset(e),
            Err(error) => error,
        };
        match error.downcast::<std::io::Error>() {
            Ok(e) => e.into(),
            Err(error) => Self::Unknown(format!("{:#}", error)),
        }
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
