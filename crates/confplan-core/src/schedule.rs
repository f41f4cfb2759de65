//! Schedule derivation.
//!
//! Turns the ordered participant list plus a [`ScheduleConfig`] into a
//! gap-free sequence of talk and break entries. Derivation is a pure
//! function: it is recomputed in full whenever the roster or the config
//! changes, never patched incrementally, so the adjacency invariant
//! (`entry[i].end == entry[i+1].start`) always holds for the current
//! inputs.
//!
//! Time arithmetic is minute arithmetic on a time of day and wraps
//! naturally past midnight; there are no calendar-date semantics.

use crate::error::{ConfplanError, Result};
use crate::participant::{Participant, ParticipantId};
use chrono::{Duration, NaiveTime};
use serde::{Deserialize, Serialize};

/// Fixed display name for break entries.
pub const BREAK_NAME: &str = "BREAK";

/// Fixed title for break entries.
pub const BREAK_TITLE: &str = "Networking";

/// Timing configuration for schedule derivation.
///
/// Numeric fields are validated, not coerced: a break cadence of zero is
/// rejected by [`ScheduleConfig::validate`] so misconfiguration surfaces
/// immediately instead of producing a schedule with a break after every
/// talk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleConfig {
    /// Start of the first slot.
    pub start_time: NaiveTime,
    /// Length of one talk slot, in minutes.
    pub slot_minutes: u32,
    /// Whether breaks are inserted at all.
    pub break_enabled: bool,
    /// Insert a break after every Nth consecutive talk. Must be >= 1.
    pub break_after: u32,
    /// Length of one break, in minutes.
    pub break_minutes: u32,
}

impl ScheduleConfig {
    /// Check configuration invariants.
    ///
    /// # Errors
    /// Returns [`ConfplanError::InvalidConfig`] if `break_after` is zero.
    /// The cadence is rejected even with breaks disabled, so toggling
    /// them on later cannot surface a stale invalid value.
    pub fn validate(&self) -> Result<()> {
        if self.break_after == 0 {
            return Err(ConfplanError::InvalidConfig(
                "break cadence (break_after) must be >= 1".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        // Defaults mirror the planning tool's initial form values.
        Self {
            start_time: NaiveTime::from_hms_opt(9, 0, 0).expect("09:00 is a valid time"),
            slot_minutes: 20,
            break_enabled: true,
            break_after: 3,
            break_minutes: 15,
        }
    }
}

/// One derived schedule entry: a talk or a break with computed times.
///
/// Talk entries copy the participant's name and title verbatim and carry
/// the stable [`ParticipantId`] so display rows map back to roster
/// positions without value matching. Break entries carry no id and use
/// the fixed [`BREAK_NAME`]/[`BREAK_TITLE`] labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleItem {
    /// Stable participant id for talk entries; `None` for breaks.
    pub participant: Option<ParticipantId>,
    /// Display name.
    pub name: String,
    /// Talk title, or the break label.
    pub title: String,
    /// Slot start (inclusive).
    pub start: NaiveTime,
    /// Slot end (exclusive); equals the next entry's start.
    pub end: NaiveTime,
    /// Whether this entry is a break.
    pub is_break: bool,
}

impl ScheduleItem {
    fn talk(p: &Participant, start: NaiveTime, end: NaiveTime) -> Self {
        Self {
            participant: Some(p.id),
            name: p.name.clone(),
            title: p.title.clone(),
            start,
            end,
            is_break: false,
        }
    }

    fn pause(start: NaiveTime, end: NaiveTime) -> Self {
        Self {
            participant: None,
            name: BREAK_NAME.to_string(),
            title: BREAK_TITLE.to_string(),
            start,
            end,
            is_break: true,
        }
    }
}

/// Add minutes to a time of day, wrapping past midnight.
fn add_minutes(time: NaiveTime, minutes: u32) -> NaiveTime {
    time.overflowing_add_signed(Duration::minutes(i64::from(minutes)))
        .0
}

/// Derive the full schedule for the given participants and configuration.
///
/// Single deterministic pass: a cursor starts at `config.start_time`;
/// before the talk at zero-indexed position `k` where `k > 0` and
/// `k % break_after == 0` a break is emitted (when breaks are enabled),
/// then the talk itself. No break is ever emitted before the first talk,
/// after the last talk, or adjacent to another break.
///
/// An empty participant list yields an empty schedule, with no breaks.
///
/// # Errors
/// Returns [`ConfplanError::InvalidConfig`] if the configuration fails
/// [`ScheduleConfig::validate`].
///
/// # Examples
///
/// ```
/// use chrono::NaiveTime;
/// use confplan_core::{derive_schedule, Roster, RosterEntry, ScheduleConfig};
///
/// let roster = Roster::from_entries([
///     RosterEntry::new("A", "T1"),
///     RosterEntry::new("B", "T2"),
/// ]);
/// let config = ScheduleConfig {
///     start_time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
///     slot_minutes: 30,
///     break_enabled: false,
///     break_after: 1,
///     break_minutes: 0,
/// };
///
/// let schedule = derive_schedule(roster.participants(), &config)?;
/// assert_eq!(schedule.len(), 2);
/// assert_eq!(schedule[0].end, schedule[1].start);
/// # Ok::<(), confplan_core::ConfplanError>(())
/// ```
pub fn derive_schedule(
    participants: &[Participant],
    config: &ScheduleConfig,
) -> Result<Vec<ScheduleItem>> {
    config.validate()?;

    let mut items = Vec::with_capacity(participants.len());
    let mut cursor = config.start_time;

    for (index, participant) in participants.iter().enumerate() {
        if config.break_enabled && index > 0 && index % config.break_after as usize == 0 {
            let break_end = add_minutes(cursor, config.break_minutes);
            items.push(ScheduleItem::pause(cursor, break_end));
            cursor = break_end;
        }

        let talk_end = add_minutes(cursor, config.slot_minutes);
        items.push(ScheduleItem::talk(participant, cursor, talk_end));
        cursor = talk_end;
    }

    log::debug!(
        "derived {} entries for {} participants",
        items.len(),
        participants.len()
    );
    Ok(items)
}
