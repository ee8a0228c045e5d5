//! Requirement checker
//!
//! Verifies that a fixed list of external programs can be found before any
//! real work starts. Every missing program is reported, not just the first,
//! each with a pointer to where it can be obtained.

mod resolve;

use std::fmt;
use std::path::PathBuf;

pub use resolve::{command_exists, command_exists_in, resolve_command, resolve_command_in};

use crate::error::{Error, Result};
use crate::logging::Logger;

/// Programs this tool needs on the search path
pub const REQUIREMENTS: &[Requirement] = &[
    Requirement::new("pandoc", "https://pandoc.org/installing.html"),
    Requirement::new("gs", "https://www.ghostscript.com/releases/"),
];

/// An external program plus where to get it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Requirement {
    /// Executable name as looked up on the search path
    pub name: &'static str,
    /// Documentation or download reference for installing it
    pub reference: &'static str,
}

impl Requirement {
    /// Declare a requirement
    #[must_use]
    pub const fn new(name: &'static str, reference: &'static str) -> Self {
        Self { name, reference }
    }
}

impl fmt::Display for Requirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{}", self.name, self.reference)
    }
}

/// Outcome of one check run
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CheckReport {
    /// Number of requirements examined
    pub checked: usize,
    /// Requirements that did not resolve, in declaration order
    pub missing: Vec<Requirement>,
}

impl CheckReport {
    /// Whether every requirement resolved
    #[must_use]
    pub fn passed(&self) -> bool {
        self.missing.is_empty()
    }

    /// Number of requirements that did not resolve
    #[must_use]
    pub fn missing_count(&self) -> usize {
        self.missing.len()
    }

    /// Convert into a `Result`, failing with [`Error::MissingRequirements`]
    pub fn into_result(self) -> Result<()> {
        if self.passed() {
            Ok(())
        } else {
            Err(Error::MissingRequirements {
                missing: self.missing_count(),
            })
        }
    }
}

/// Check `requirements` in order using `resolve` to locate each program.
///
/// One ERROR diagnostic is emitted per missing entry; found entries are
/// logged at DEBUG with their resolved location. Checking never stops early
/// and duplicates are checked independently.
pub fn check_with<F>(requirements: &[Requirement], logger: &Logger, resolve: F) -> CheckReport
where
    F: Fn(&str) -> Option<PathBuf>,
{
    let mut missing = Vec::new();

    for requirement in requirements {
        match resolve(requirement.name) {
            Some(path) => {
                logger.debug(&format!("Found {}: {}", requirement.name, path.display()));
            },
            None => {
                logger.error(&format!("Missing required program: {requirement}"));
                missing.push(*requirement);
            },
        }
    }

    CheckReport {
        checked: requirements.len(),
        missing,
    }
}

/// Check `requirements` against the process search path.
pub fn check(requirements: &[Requirement], logger: &Logger) -> CheckReport {
    check_with(requirements, logger, resolve_command)
}

/// Check `requirements` against the process search path.
///
/// Returns `true` when every program was found.
pub fn check_requirements(requirements: &[Requirement], logger: &Logger) -> bool {
    check(requirements, logger).passed()
}
