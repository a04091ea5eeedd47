//! Error types for filename normalization and run setup.

use std::path::PathBuf;
use thiserror::Error;

/// Failure to normalize a single ROM filename.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NameError {
    /// No `(...)` group in the filename, so no region can be derived.
    #[error("no region parenthetical in filename {name:?}")]
    MissingRegion { name: String },
    /// Token is not one of the literals I..IX.
    #[error("{0:?} is not a Roman numeral between I and IX")]
    NotARomanNumeral(String),
}

/// Failure detected before any filesystem work starts.
#[derive(Error, Debug)]
pub enum RunError {
    #[error("Directory {} does not exist.", .0.display())]
    MissingDirectory(PathBuf),
}
