//! XLSX roster import using calamine.
//!
//! Reads the first worksheet of a workbook into rows of cell text and
//! applies the shared header/empty-row rules from [`crate::rows`].
//! calamine is read-only, which is all this backend needs; roster
//! export goes through CSV instead (see [`crate::csv`]).

use crate::rows::rows_to_entries;
use crate::traits::RosterSource;
use calamine::{Data, DataType, Range, Reader, Xlsx};
use confplan_core::{ConfplanError, Result, RosterEntry};
use std::io::Cursor;

/// Backend for importing participant rosters from Excel workbooks.
///
/// Only the first worksheet is read; the first column is the speaker
/// name, the second the talk title, further columns are ignored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct XlsxRosterBackend;

impl XlsxRosterBackend {
    /// Create a new XLSX backend instance.
    #[inline]
    #[must_use = "creates a backend instance that should be used for importing"]
    pub const fn new() -> Self {
        Self
    }

    /// Flatten a worksheet range into rows of cell text.
    fn range_to_rows(range: &Range<Data>) -> Vec<Vec<String>> {
        range
            .rows()
            .map(|row| {
                row.iter()
                    .map(|cell| {
                        if cell.is_empty() {
                            String::new()
                        } else {
                            cell.to_string()
                        }
                    })
                    .collect()
            })
            .collect()
    }
}

impl RosterSource for XlsxRosterBackend {
    fn load_bytes(&self, data: &[u8]) -> Result<Vec<RosterEntry>> {
        let mut workbook: Xlsx<_> = Xlsx::new(Cursor::new(data))
            .map_err(|e| ConfplanError::SpreadsheetError(format!("cannot open workbook: {e}")))?;

        let sheet_name = workbook
            .sheet_names()
            .first()
            .cloned()
            .ok_or_else(|| ConfplanError::SpreadsheetError("workbook has no sheets".to_string()))?;

        let range = workbook.worksheet_range(&sheet_name).map_err(|e| {
            ConfplanError::SpreadsheetError(format!("cannot read sheet {sheet_name:?}: {e}"))
        })?;

        let rows = Self::range_to_rows(&range);
        let entries = rows_to_entries(&rows);
        log::info!(
            "imported {} participants from sheet {sheet_name:?} ({} rows)",
            entries.len(),
            rows.len()
        );
        Ok(entries)
    }
}
