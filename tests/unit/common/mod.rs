//! Shared test fixtures and helpers
//!
//! This module provides an in-memory log sink and throwaway search-path
//! directories holding fake executables.

use std::fs;
use std::io::{self, Write};
use std::path::Path;
use std::sync::{Arc, Mutex};

use env_logger::Target;
use preflight::logging::{Logger, LoggerConfig, Severity};
use tempfile::TempDir;

/// Cloneable in-memory sink; every clone appends to the same buffer
#[derive(Clone, Default)]
pub struct Capture {
    buf: Arc<Mutex<Vec<u8>>>,
}

impl Capture {
    /// Everything written so far
    pub fn contents(&self) -> String {
        String::from_utf8(self.buf.lock().unwrap().clone()).unwrap()
    }

    /// Written lines, without trailing newlines
    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_string).collect()
    }
}

impl Write for Capture {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        self.buf.lock().unwrap().write(data)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// A logger writing into a fresh [`Capture`]
pub fn capture_logger(threshold: Severity, color: bool) -> (Logger, Capture) {
    let capture = Capture::default();
    let logger = Logger::with_target(
        LoggerConfig::new(threshold, color),
        Target::Pipe(Box::new(capture.clone())),
    );
    (logger, capture)
}

/// A directory to use as the only `PATH` entry
pub struct BinDir {
    dir: TempDir,
}

impl BinDir {
    /// Create a directory holding one executable stub per name
    pub fn with_programs(names: &[&str]) -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        let bin = Self { dir };
        for name in names {
            bin.add_program(name);
        }
        bin
    }

    /// Root of the directory
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Add an executable stub
    pub fn add_program(&self, name: &str) {
        let path = self.dir.path().join(name);
        fs::write(&path, "#!/bin/sh\nexit 0\n").unwrap();
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
        }
    }

    /// Add a file without execute permission
    pub fn add_plain_file(&self, name: &str) {
        fs::write(self.dir.path().join(name), "not a program\n").unwrap();
    }
}
