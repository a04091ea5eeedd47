pub mod config;
pub mod error;
pub mod logging;

// Filename normalization (pure)
pub mod normalize;
pub mod size;

// Filesystem glue
pub mod catalog;
pub mod links;
pub mod scan;
