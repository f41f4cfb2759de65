//! Shared row handling for tabular roster imports.
//!
//! Both the XLSX and CSV backends reduce their input to rows of cell
//! text and run them through the same rules: an optional header row is
//! detected by case-insensitive substring match against localized header
//! hints and skipped, rows with either of the first two cells empty are
//! dropped, and surviving cell values are trimmed.

use confplan_core::RosterEntry;

/// Substrings that mark a header row, lowercase.
///
/// The source spreadsheets are Hungarian; the hints cover the accented
/// and unaccented spellings of "name" and "talk title".
const HEADER_HINTS: &[&str] = &["név", "nev", "eloada", "előadás", "cím", "cim"];

/// Whether a row looks like a column header rather than data.
pub(crate) fn looks_like_header(cells: &[String]) -> bool {
    cells.iter().any(|cell| {
        let lower = cell.to_lowercase();
        HEADER_HINTS.iter().any(|hint| lower.contains(hint))
    })
}

/// Convert raw rows of cell text into roster entries.
///
/// Applies the header-skip and empty-cell rules described in the module
/// docs. Only the first two columns are read; extra columns are ignored.
pub(crate) fn rows_to_entries(rows: &[Vec<String>]) -> Vec<RosterEntry> {
    let start = usize::from(rows.first().is_some_and(|row| looks_like_header(row)));

    rows[start.min(rows.len())..]
        .iter()
        .filter_map(|row| {
            let name = row.first().map(|s| s.trim()).unwrap_or_default();
            let title = row.get(1).map(|s| s.trim()).unwrap_or_default();
            if name.is_empty() || title.is_empty() {
                None
            } else {
                Some(RosterEntry::new(name, title))
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn test_header_detected_accented() {
        assert!(looks_like_header(&row(&["Név", "Előadás címe"])));
    }

    #[test]
    fn test_header_detected_unaccented_case_insensitive() {
        assert!(looks_like_header(&row(&["NEV", "ELOADAS CIME"])));
    }

    #[test]
    fn test_header_detected_by_single_cell() {
        assert!(looks_like_header(&row(&["something", "cím"])));
    }

    #[test]
    fn test_data_row_not_header() {
        assert!(!looks_like_header(&row(&["Kovács Anna", "Rust backendek"])));
    }

    #[test]
    fn test_header_row_skipped() {
        let rows = vec![
            row(&["Név", "Előadás címe"]),
            row(&["A", "T1"]),
            row(&["B", "T2"]),
        ];
        let entries = rows_to_entries(&rows);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0], RosterEntry::new("A", "T1"));
    }

    #[test]
    fn test_no_header_keeps_first_row() {
        let rows = vec![row(&["A", "T1"]), row(&["B", "T2"])];
        let entries = rows_to_entries(&rows);
        assert_eq!(entries.len(), 2);
    }

    #[test]
    fn test_rows_with_empty_cells_dropped() {
        let rows = vec![
            row(&["A", "T1"]),
            row(&["", "T2"]),
            row(&["C", ""]),
            row(&["  ", "T4"]),
            row(&["E"]),
            row(&["F", "T6"]),
        ];
        let entries = rows_to_entries(&rows);
        let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["A", "F"]);
    }

    #[test]
    fn test_cell_values_trimmed() {
        let rows = vec![row(&["  A  ", "  T1  "])];
        let entries = rows_to_entries(&rows);
        assert_eq!(entries[0], RosterEntry::new("A", "T1"));
    }

    #[test]
    fn test_extra_columns_ignored() {
        let rows = vec![row(&["A", "T1", "extra", "more"])];
        let entries = rows_to_entries(&rows);
        assert_eq!(entries, [RosterEntry::new("A", "T1")]);
    }

    #[test]
    fn test_empty_input() {
        assert!(rows_to_entries(&[]).is_empty());
    }

    #[test]
    fn test_header_only_input() {
        let rows = vec![row(&["Név", "Cím"])];
        assert!(rows_to_entries(&rows).is_empty());
    }
}
