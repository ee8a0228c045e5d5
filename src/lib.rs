//! preflight - bootstrap checks for command-line tools
//!
//! Before a tool does its real work it needs two things in place: a
//! diagnostic logger with the right verbosity and presentation, and the
//! external programs it shells out to. This library provides both.
//!
//! - [`logging`]: leveled, optionally colorized diagnostics
//! - [`requirements`]: discoverability checks for required programs

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod error;
pub mod logging;
pub mod requirements;

pub use error::{Error, Result};
pub use logging::{Logger, LoggerConfig, Severity};
pub use requirements::{CheckReport, Requirement, check_requirements, command_exists};
