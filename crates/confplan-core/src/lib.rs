//! # Confplan Core - Roster and Schedule Engine
//!
//! Core data model and schedule derivation for the confplan toolkit, a
//! local conference-planning pipeline: abstracts are extracted from Word
//! documents or imported from spreadsheets into a [`Roster`], the roster
//! is ordered manually, and a timed programme is derived from it.
//!
//! ## Quick Start
//!
//! ```
//! use confplan_core::{derive_schedule, schedule_to_text, Roster, RosterEntry, ScheduleConfig};
//!
//! let mut roster = Roster::from_entries([
//!     RosterEntry::new("Kovács Anna", "Gépi tanulás a gyakorlatban"),
//!     RosterEntry::new("Nagy Péter", "Rust a szerveroldalon"),
//! ]);
//!
//! // Put the second talk first.
//! roster.reorder(1, 0)?;
//!
//! let schedule = derive_schedule(roster.participants(), &ScheduleConfig::default())?;
//! println!("{}", schedule_to_text(&schedule));
//! # Ok::<(), confplan_core::ConfplanError>(())
//! ```
//!
//! ## Module Organization
//!
//! - [`participant`] - Participant records and stable ids
//! - [`roster`] - List ownership, reordering, drag gestures
//! - [`schedule`] - Configuration and schedule derivation
//! - [`export`] - Plain-text schedule flattening
//! - [`error`] - Error types and handling
//!
//! ## Guarantees
//!
//! - Derivation is pure and idempotent; the derived sequence has no gaps
//!   and no overlaps (`entry[i].end == entry[i+1].start`).
//! - Reordering is a permutation of the roster; invalid indices fail
//!   loudly and never clamp.
//! - Participants are identified by opaque stable ids, never by
//!   `(name, title)` value matching.

pub mod error;
pub mod export;
pub mod participant;
pub mod roster;
pub mod schedule;

pub use error::{ConfplanError, Result};
pub use export::{format_schedule_line, schedule_to_text};
pub use participant::{Participant, ParticipantId, RosterEntry};
pub use roster::{DragReorder, ReorderMode, Roster};
pub use schedule::{derive_schedule, ScheduleConfig, ScheduleItem, BREAK_NAME, BREAK_TITLE};
