//! Roster ownership and reordering.
//!
//! The [`Roster`] is the single owner of the participant list. Import
//! collaborators hand it id-less [`RosterEntry`] values, consumers read
//! through [`Roster::participants`], and all mutation goes through
//! explicit operations (`extend`, `replace`, `reorder`, `remove`).
//! There is no shared mutable reference to the underlying list.
//!
//! Reordering is a single-element move: the element at `from` is removed
//! and reinserted at `to`, and everything in between shifts by one. Out
//! of range indices are a contract violation and fail loudly, never
//! clamped.

use crate::error::{ConfplanError, Result};
use crate::participant::{Participant, ParticipantId, RosterEntry};
use serde::{Deserialize, Serialize};

/// Owner of the ordered participant list.
///
/// Issues monotonically increasing [`ParticipantId`]s; ids are never
/// reused within a roster, including across [`Roster::replace`].
///
/// # Examples
///
/// ```
/// use confplan_core::{Roster, RosterEntry};
///
/// let mut roster = Roster::from_entries([
///     RosterEntry::new("A", "T1"),
///     RosterEntry::new("B", "T2"),
///     RosterEntry::new("C", "T3"),
///     RosterEntry::new("D", "T4"),
/// ]);
///
/// roster.reorder(0, 2)?;
/// let names: Vec<&str> = roster.participants().iter().map(|p| p.name.as_str()).collect();
/// assert_eq!(names, ["B", "C", "A", "D"]);
/// # Ok::<(), confplan_core::ConfplanError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    participants: Vec<Participant>,
    next_id: u64,
}

impl Roster {
    /// Create an empty roster.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            participants: Vec::new(),
            next_id: 0,
        }
    }

    /// Create a roster from imported entries, assigning ids in order.
    #[must_use]
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = RosterEntry>,
    {
        let mut roster = Self::new();
        roster.extend(entries);
        roster
    }

    /// Append imported entries, assigning each a fresh id.
    pub fn extend<I>(&mut self, entries: I)
    where
        I: IntoIterator<Item = RosterEntry>,
    {
        for entry in entries {
            let id = ParticipantId::new(self.next_id);
            self.next_id += 1;
            self.participants.push(Participant {
                id,
                name: entry.name,
                title: entry.title,
            });
        }
        log::debug!("roster now holds {} participants", self.participants.len());
    }

    /// Replace the whole list with freshly imported entries.
    ///
    /// Previously issued ids are retired, not reused.
    pub fn replace<I>(&mut self, entries: I)
    where
        I: IntoIterator<Item = RosterEntry>,
    {
        self.participants.clear();
        self.extend(entries);
    }

    /// Read-only view of the ordered participant list.
    #[inline]
    #[must_use]
    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    /// Number of participants.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.participants.len()
    }

    /// Whether the roster is empty.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }

    /// Current position of a participant, by stable id.
    ///
    /// Returns `None` if the id has been removed or was never issued by
    /// this roster.
    #[must_use]
    pub fn index_of(&self, id: ParticipantId) -> Option<usize> {
        self.participants.iter().position(|p| p.id == id)
    }

    /// Move the participant at `from` so it ends up at position `to`.
    ///
    /// Equal indices are a no-op. All other elements shift by one to
    /// close the gap and make room; this is a move, not a swap.
    ///
    /// # Errors
    /// Returns [`ConfplanError::IndexOutOfRange`] if either index is
    /// outside the roster.
    pub fn reorder(&mut self, from: usize, to: usize) -> Result<()> {
        let len = self.participants.len();
        self.check_index(from)?;
        self.check_index(to)?;
        if from == to {
            return Ok(());
        }
        let participant = self.participants.remove(from);
        self.participants.insert(to, participant);
        log::debug!("moved participant {from} -> {to} (len {len})");
        Ok(())
    }

    /// Remove and return the participant at `index`.
    ///
    /// # Errors
    /// Returns [`ConfplanError::IndexOutOfRange`] for a bad index.
    pub fn remove(&mut self, index: usize) -> Result<Participant> {
        self.check_index(index)?;
        Ok(self.participants.remove(index))
    }

    /// Drop all participants. Issued ids stay retired.
    pub fn clear(&mut self) {
        self.participants.clear();
    }

    fn check_index(&self, index: usize) -> Result<()> {
        let len = self.participants.len();
        if index >= len {
            return Err(ConfplanError::IndexOutOfRange { index, len });
        }
        Ok(())
    }
}

/// Semantics of an interactive drag gesture.
///
/// The original UI re-applied a single-step move on every intermediate
/// drag-over event, so the final order depends on every row the pointer
/// crossed. That behavior is preserved as [`ReorderMode::StepWise`];
/// [`ReorderMode::OneShot`] instead performs one move from the lifted
/// row to the release position. Callers must name the mode explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReorderMode {
    /// Apply a move on every intermediate target event.
    StepWise,
    /// Apply a single move from gesture start to release.
    OneShot,
}

/// Tracks one in-flight drag gesture over the roster.
///
/// # Examples
///
/// ```
/// use confplan_core::{DragReorder, ReorderMode, Roster, RosterEntry};
///
/// let mut roster = Roster::from_entries([
///     RosterEntry::new("A", "T1"),
///     RosterEntry::new("B", "T2"),
///     RosterEntry::new("C", "T3"),
/// ]);
///
/// let mut drag = DragReorder::begin(&roster, 0, ReorderMode::OneShot)?;
/// drag.drag_over(&mut roster, 1)?;
/// drag.drag_over(&mut roster, 2)?;
/// drag.release(&mut roster)?;
///
/// let names: Vec<&str> = roster.participants().iter().map(|p| p.name.as_str()).collect();
/// assert_eq!(names, ["B", "C", "A"]);
/// # Ok::<(), confplan_core::ConfplanError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragReorder {
    mode: ReorderMode,
    origin: usize,
    current: usize,
}

impl DragReorder {
    /// Start a gesture by lifting the row at `index`.
    ///
    /// # Errors
    /// Returns [`ConfplanError::IndexOutOfRange`] if `index` is outside
    /// the roster.
    pub fn begin(roster: &Roster, index: usize, mode: ReorderMode) -> Result<Self> {
        let len = roster.len();
        if index >= len {
            return Err(ConfplanError::IndexOutOfRange { index, len });
        }
        Ok(Self {
            mode,
            origin: index,
            current: index,
        })
    }

    /// The lifted row's current position.
    #[inline]
    #[must_use]
    pub const fn current(&self) -> usize {
        self.current
    }

    /// Record an intermediate target position.
    ///
    /// In [`ReorderMode::StepWise`] the roster is mutated immediately;
    /// in [`ReorderMode::OneShot`] only the tracked target moves and the
    /// roster stays untouched until [`DragReorder::release`].
    ///
    /// # Errors
    /// Returns [`ConfplanError::IndexOutOfRange`] for a target outside
    /// the roster.
    pub fn drag_over(&mut self, roster: &mut Roster, target: usize) -> Result<()> {
        let len = roster.len();
        if target >= len {
            return Err(ConfplanError::IndexOutOfRange { index: target, len });
        }
        match self.mode {
            ReorderMode::StepWise => {
                roster.reorder(self.current, target)?;
                self.current = target;
            }
            ReorderMode::OneShot => {
                self.current = target;
            }
        }
        Ok(())
    }

    /// Finish the gesture and return the final position of the lifted row.
    ///
    /// # Errors
    /// Returns [`ConfplanError::IndexOutOfRange`] if the roster shrank
    /// under a one-shot gesture.
    pub fn release(self, roster: &mut Roster) -> Result<usize> {
        if self.mode == ReorderMode::OneShot {
            roster.reorder(self.origin, self.current)?;
        }
        Ok(self.current)
    }
}
