//! Call-site capture for error reporting.

use serde::Serialize;
use std::fmt;
use std::panic::Location;

/// Source location embedded in error values.
///
/// Captured at the error construction site via `#[track_caller]`, so log
/// lines point at the operation that failed rather than the error module.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ErrorLocation {
    pub file: &'static str,
    pub line: u32,
}

impl ErrorLocation {
    /// Capture the caller's location.
    #[track_caller]
    pub fn caller() -> Self {
        let location = Location::caller();
        Self {
            file: location.file(),
            line: location.line(),
        }
    }
}

impl fmt::Display for ErrorLocation {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "[{}:{}]", self.file, self.line)
    }
}
