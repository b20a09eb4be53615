//! Error handling for the imagegen tools.
//! Defines custom error types and results used throughout the crate.

use std::io;
use thiserror::Error;

/// Custom error types for imagegen operations.
///
/// This enum represents all possible errors that can occur while generating
/// image folders or the CI configuration. It implements the standard Error
/// trait through thiserror's derive macro.
#[derive(Error, Debug)]
pub enum Error {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// Represents errors that occur while listing an image root directory
    #[error("Discovery error: {0}.")]
    DiscoveryError(#[from] walkdir::Error),

    /// Represents errors that occur during template processing
    #[error("Template error: {0}.")]
    MinijinjaError(#[from] minijinja::Error),

    /// The version argument is not a strict `MAJOR.MINOR.PATCH` string
    #[error("expected version tag argument like \"13.6.0\", got \"{version}\"")]
    InvalidVersionFormat { version: String },

    /// One of the scanned image roots does not exist or is not a directory
    #[error("Image root '{root}' does not exist or is not a directory.")]
    RootNotFound { root: String },

    /// A discovered folder name cannot be used as a Docker image tag
    #[error("Folder '{root}/{tag}' is not a valid image tag.")]
    InvalidImageTag { root: String, tag: String },
}

/// Convenience type alias for Results with [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{err}");
    std::process::exit(1);
}
