//! preflight - bootstrap checks for command-line tools
//!
//! Sets up logging, verifies that required programs are on PATH, and exits
//! non-zero before any task logic runs if something is missing.

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

mod cli;

/// Main entry point for the preflight CLI
fn main() {
    if let Err(err) = cli::run() {
        // Missing programs were already logged one per line.
        if !matches!(
            err.downcast_ref::<preflight::Error>(),
            Some(preflight::Error::MissingRequirements { .. })
        ) {
            eprintln!("error: {err:#}");
        }
        std::process::exit(-1);
    }
}
