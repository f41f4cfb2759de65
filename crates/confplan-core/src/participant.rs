//! Participant records and stable identifiers.
//!
//! Imported rows arrive as id-less [`RosterEntry`] values; the
//! [`Roster`](crate::Roster) assigns each one an opaque [`ParticipantId`]
//! on insert. Ids are stable for the lifetime of the roster and are the
//! only way schedule rows map back to participants — value matching on
//! `(name, title)` is ambiguous under duplicates and is not used anywhere.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque stable identifier for a participant.
///
/// Issued by the [`Roster`](crate::Roster); survives reordering and is
/// carried through schedule derivation on talk entries.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ParticipantId(u64);

impl ParticipantId {
    /// Wrap a raw id value. Only the roster mints new ids.
    pub(crate) const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Raw numeric value, for display and serialization.
    #[inline]
    #[must_use]
    pub const fn as_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "p{}", self.0)
    }
}

/// A speaker with an associated talk title.
///
/// The display name is non-empty by the time it reaches the schedule
/// engine (import collaborators drop rows with empty cells); the title
/// may be an extraction placeholder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    /// Stable identity, issued by the roster.
    pub id: ParticipantId,
    /// Speaker display name.
    pub name: String,
    /// Talk title; may be a placeholder such as "N/A".
    pub title: String,
}

/// An id-less participant record as produced by the extraction and
/// import collaborators.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterEntry {
    /// Speaker display name.
    pub name: String,
    /// Talk title.
    pub title: String,
}

impl RosterEntry {
    /// Create a new entry.
    #[inline]
    #[must_use]
    pub fn new(name: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            title: title.into(),
        }
    }
}
