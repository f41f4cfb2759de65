//! Plain-text schedule export.
//!
//! Flattens a derived schedule into one line per entry:
//!
//! ```text
//! 09:00–09:20: A | T1
//! 09:40–09:50: ☕ BREAK
//! ```
//!
//! Times are rendered as `HH:MM` joined by an en dash; talks append
//! `name | title`, breaks a coffee glyph and the fixed break label.

use crate::schedule::ScheduleItem;
use std::fmt::Write;

/// Render one schedule entry as its export line (without newline).
#[must_use]
pub fn format_schedule_line(item: &ScheduleItem) -> String {
    let start = item.start.format("%H:%M");
    let end = item.end.format("%H:%M");
    if item.is_break {
        format!("{start}–{end}: ☕ {}", item.name)
    } else {
        format!("{start}–{end}: {} | {}", item.name, item.title)
    }
}

/// Flatten a derived schedule into the plain-text export format,
/// one line per entry, in emission order.
///
/// An empty schedule renders as an empty string.
#[must_use]
pub fn schedule_to_text(schedule: &[ScheduleItem]) -> String {
    let mut out = String::new();
    for (i, item) in schedule.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        // format_schedule_line allocates; write! keeps it single-pass
        let _ = write!(out, "{}", format_schedule_line(item));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::participant::RosterEntry;
    use crate::roster::Roster;
    use crate::schedule::{derive_schedule, ScheduleConfig};
    use chrono::NaiveTime;

    fn reference_schedule() -> Vec<ScheduleItem> {
        let roster = Roster::from_entries([
            RosterEntry::new("A", "T1"),
            RosterEntry::new("B", "T2"),
            RosterEntry::new("C", "T3"),
            RosterEntry::new("D", "T4"),
        ]);
        let config = ScheduleConfig {
            start_time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            slot_minutes: 20,
            break_enabled: true,
            break_after: 2,
            break_minutes: 10,
        };
        derive_schedule(roster.participants(), &config).unwrap()
    }

    #[test]
    fn test_reference_scenario_export_lines() {
        let text = schedule_to_text(&reference_schedule());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            [
                "09:00–09:20: A | T1",
                "09:20–09:40: B | T2",
                "09:40–09:50: ☕ BREAK",
                "09:50–10:10: C | T3",
                "10:10–10:30: D | T4",
            ]
        );
    }

    #[test]
    fn test_no_trailing_newline() {
        let text = schedule_to_text(&reference_schedule());
        assert!(!text.ends_with('\n'));
    }

    #[test]
    fn test_empty_schedule_renders_empty() {
        assert_eq!(schedule_to_text(&[]), "");
    }

    #[test]
    fn test_break_line_format() {
        let schedule = reference_schedule();
        let break_item = schedule.iter().find(|i| i.is_break).unwrap();
        assert_eq!(format_schedule_line(break_item), "09:40–09:50: ☕ BREAK");
    }

    #[test]
    fn test_midnight_times_render_zero_padded() {
        let roster = Roster::from_entries([RosterEntry::new("A", "T1")]);
        let config = ScheduleConfig {
            start_time: NaiveTime::from_hms_opt(23, 55, 0).unwrap(),
            slot_minutes: 10,
            break_enabled: false,
            break_after: 1,
            break_minutes: 0,
        };
        let schedule = derive_schedule(roster.participants(), &config).unwrap();
        assert_eq!(format_schedule_line(&schedule[0]), "23:55–00:05: A | T1");
    }
}
