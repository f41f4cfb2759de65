//! Core trait definition for roster import backends.

use confplan_core::{Result, RosterEntry};
use std::path::Path;

/// Main trait for roster sources.
///
/// Each import backend (XLSX, CSV) implements this trait to produce
/// id-less [`RosterEntry`] values; the caller's
/// [`Roster`](confplan_core::Roster) assigns ids on insert. Backends
/// hand over fully materialized lists only — the schedule engine never
/// observes partial input.
pub trait RosterSource {
    /// Import entries from raw file bytes.
    ///
    /// # Errors
    /// Returns an error if the data cannot be parsed.
    fn load_bytes(&self, data: &[u8]) -> Result<Vec<RosterEntry>>;

    /// Import entries from a file path.
    ///
    /// # Errors
    /// Returns an error if file reading or parsing fails.
    fn load_file<P: AsRef<Path>>(&self, path: P) -> Result<Vec<RosterEntry>> {
        let data = std::fs::read(path.as_ref())?;
        self.load_bytes(&data)
    }
}
