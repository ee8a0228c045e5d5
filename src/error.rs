//! Error types for the bootstrap core

use thiserror::Error;

/// Errors surfaced by the bootstrap core
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// One or more required programs could not be resolved on the search path
    #[error("{missing} required program(s) missing")]
    MissingRequirements {
        /// Number of requirements that failed to resolve
        missing: usize,
    },

    /// A process-wide logger is already installed
    #[error("logger already initialized")]
    AlreadyInitialized,
}

/// Result alias for the bootstrap core
pub type Result<T> = std::result::Result<T, Error>;
