//! CSV roster import and export.
//!
//! Import mirrors the XLSX backend: rows of cell text run through the
//! shared header/empty-row rules. The delimiter is sniffed from the
//! first line (comma, semicolon, tab, pipe or colon). Export writes the
//! localized header row the importer recognizes, so an exported roster
//! round-trips.

use crate::rows::rows_to_entries;
use crate::traits::RosterSource;
use confplan_core::{ConfplanError, Result, RosterEntry};
use std::io::Write;
use std::path::Path;

/// Candidate delimiters, checked against the first line.
const DELIMITERS: [char; 5] = [',', ';', '\t', '|', ':'];

/// Header row written on export; matches the import header hints.
const EXPORT_HEADER: [&str; 2] = ["Név", "Előadás címe"];

/// Backend for importing participant rosters from CSV files.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CsvRosterBackend;

impl CsvRosterBackend {
    /// Create a new CSV backend instance.
    #[inline]
    #[must_use = "creates a backend instance that should be used for importing"]
    pub const fn new() -> Self {
        Self
    }

    /// Pick the delimiter that occurs most often on the first line.
    fn detect_delimiter(content: &str) -> char {
        let first_line = content.lines().next().unwrap_or_default();
        let mut best = ',';
        let mut max_count = 0;
        for &delim in &DELIMITERS {
            let count = first_line.matches(delim).count();
            if count > max_count {
                max_count = count;
                best = delim;
            }
        }
        best
    }
}

impl RosterSource for CsvRosterBackend {
    fn load_bytes(&self, data: &[u8]) -> Result<Vec<RosterEntry>> {
        let content = std::str::from_utf8(data)
            .map_err(|e| ConfplanError::SpreadsheetError(format!("CSV is not UTF-8: {e}")))?;

        let delimiter = Self::detect_delimiter(content);
        log::debug!("parsing CSV with delimiter {delimiter:?}");

        let mut reader = csv::ReaderBuilder::new()
            .delimiter(delimiter as u8)
            .flexible(true)
            .has_headers(false)
            .from_reader(content.as_bytes());

        let rows: Vec<Vec<String>> = reader
            .records()
            .map(|record| {
                record
                    .map(|r| r.iter().map(str::to_string).collect())
                    .map_err(|e| {
                        ConfplanError::SpreadsheetError(format!("failed to read CSV record: {e}"))
                    })
            })
            .collect::<Result<_>>()?;

        Ok(rows_to_entries(&rows))
    }
}

/// Write a roster as CSV with the localized header row.
///
/// # Errors
/// Returns [`ConfplanError::SpreadsheetError`] if serialization fails
/// and [`ConfplanError::IoError`] on write failure.
pub fn write_roster_csv<W: Write>(writer: W, entries: &[RosterEntry]) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer
        .write_record(EXPORT_HEADER)
        .map_err(|e| ConfplanError::SpreadsheetError(format!("CSV write failed: {e}")))?;
    for entry in entries {
        csv_writer
            .write_record([entry.name.as_str(), entry.title.as_str()])
            .map_err(|e| ConfplanError::SpreadsheetError(format!("CSV write failed: {e}")))?;
    }
    csv_writer
        .flush()
        .map_err(ConfplanError::IoError)?;
    Ok(())
}

/// Write a roster CSV to a file path.
///
/// # Errors
/// Returns [`ConfplanError::IoError`] if the file cannot be created, or
/// the errors of [`write_roster_csv`].
pub fn write_roster_csv_file<P: AsRef<Path>>(path: P, entries: &[RosterEntry]) -> Result<()> {
    let file = std::fs::File::create(path.as_ref())?;
    write_roster_csv(file, entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn load(content: &str) -> Vec<RosterEntry> {
        CsvRosterBackend::new().load_bytes(content.as_bytes()).unwrap()
    }

    #[test]
    fn test_comma_separated_roster() {
        let entries = load("A,T1\nB,T2\n");
        assert_eq!(
            entries,
            [RosterEntry::new("A", "T1"), RosterEntry::new("B", "T2")]
        );
    }

    #[test]
    fn test_semicolon_delimiter_detected() {
        let entries = load("A;T1\nB;T2\n");
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].title, "T1");
    }

    #[test]
    fn test_tab_delimiter_detected() {
        let entries = load("A\tT1\nB\tT2\n");
        assert_eq!(entries.len(), 2);
    }

    #[test]
    fn test_header_row_skipped() {
        let entries = load("Név,Előadás címe\nA,T1\n");
        assert_eq!(entries, [RosterEntry::new("A", "T1")]);
    }

    #[test]
    fn test_rows_with_missing_cells_dropped() {
        let entries = load("A,T1\nB\n,T3\nD,T4\n");
        let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["A", "D"]);
    }

    #[test]
    fn test_quoted_fields_with_commas() {
        let entries = load("\"Kovács, Anna\",\"T1, part two\"\n");
        assert_eq!(entries[0].name, "Kovács, Anna");
        assert_eq!(entries[0].title, "T1, part two");
    }

    #[test]
    fn test_empty_input_yields_empty_roster() {
        assert!(load("").is_empty());
    }

    #[test]
    fn test_invalid_utf8_rejected() {
        let result = CsvRosterBackend::new().load_bytes(&[0xff, 0xfe, 0x00]);
        assert!(matches!(result, Err(ConfplanError::SpreadsheetError(_))));
    }

    #[test]
    fn test_export_round_trips_through_import() {
        let entries = vec![
            RosterEntry::new("Kovács Anna", "Gépi tanulás"),
            RosterEntry::new("Nagy Péter", "Rust, szerveroldalon"),
        ];

        let mut buffer = Vec::new();
        write_roster_csv(&mut buffer, &entries).unwrap();

        let reimported = CsvRosterBackend::new().load_bytes(&buffer).unwrap();
        assert_eq!(reimported, entries);
    }

    #[test]
    fn test_export_writes_recognized_header() {
        let mut buffer = Vec::new();
        write_roster_csv(&mut buffer, &[RosterEntry::new("A", "T1")]).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        assert!(text.starts_with("Név,Előadás címe\n"));
    }
}
