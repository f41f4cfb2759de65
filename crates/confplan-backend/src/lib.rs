//! Roster import and abstract extraction backends for `confplan_rs`
//!
//! This crate provides the collaborators that feed the schedule engine:
//! bulk field extraction from Word abstracts and tabular roster import.
//!
//! # Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────┐
//! │                      RosterSource Trait                   │
//! │  fn load_bytes(&self, data: &[u8]) -> Result<Vec<Entry>>  │
//! └───────────────────────────────────────────────────────────┘
//!               │                           │
//!               ▼                           ▼
//!       ┌───────────────────┐      ┌───────────────────┐
//!       │ XlsxRosterBackend │      │ CsvRosterBackend  │
//!       │ (calamine)        │      │ (csv crate)       │
//!       └───────────────────┘      └───────────────────┘
//!
//!       ┌───────────────────┐
//!       │ DocxTextExtractor │   batch extraction, per-file status,
//!       │ (zip + quick-xml) │   regex field matching
//!       └───────────────────┘
//! ```
//!
//! All backends produce id-less [`RosterEntry`](confplan_core::RosterEntry)
//! values; the caller's [`Roster`](confplan_core::Roster) owns the list
//! and assigns stable ids.

pub mod csv;
pub mod docx;
pub(crate) mod rows;
pub mod traits;
pub mod utils;
pub mod xlsx;

pub use csv::{write_roster_csv, write_roster_csv_file, CsvRosterBackend};
pub use docx::{
    records_to_entries, AbstractRecord, DocxTextExtractor, ExtractionStatus, FAILED_FIELD,
    MISSING_FIELD,
};
pub use traits::RosterSource;
pub use utils::sanitize_filename;
pub use xlsx::XlsxRosterBackend;
