/*!
 * Error types for the subfilter library.
 *
 * This module contains custom error types for the configuration surface of
 * the pipeline, using the thiserror crate for ergonomic error definitions.
 * Segment transformation itself never fails — malformed content degrades to
 * passthrough — so errors only arise while assembling registries, profiles
 * and chains.
 */

// Allow dead code - error types are for library consumers
#![allow(dead_code)]

use thiserror::Error;

/// Errors that can occur while building a filter registry
#[derive(Error, Debug)]
pub enum RegistryError {
    /// Two filters were registered under the same name
    #[error("Duplicate filter name in registry: {0}")]
    DuplicateName(String),

    /// One filter instance was registered twice, which would break the
    /// name <-> filter bijection
    #[error("Filter instance registered twice: {name}")]
    DuplicateFilter {
        /// Name the instance was first registered under
        name: String,
    },
}

/// Errors that can occur while loading or saving chain profiles
#[derive(Error, Debug)]
pub enum ProfileError {
    /// Error reading or writing a profile file
    #[error("Profile file error: {0}")]
    Io(#[from] std::io::Error),

    /// Error parsing profile JSON
    #[error("Failed to parse profile: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Main library error type that wraps all other errors
#[derive(Error, Debug)]
pub enum SubfilterError {
    /// Error from registry construction
    #[error("Registry error: {0}")]
    Registry(#[from] RegistryError),

    /// Error from profile handling
    #[error("Profile error: {0}")]
    Profile(#[from] ProfileError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for SubfilterError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}
