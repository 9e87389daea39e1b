// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Event scripts: one JSON object per line, tagged by `event`.
//!
//! ```text
//! # comments and blank lines are skipped
//! {"event": "select_tower", "tower": "A"}
//! {"event": "select_floor", "floor": 3}
//! {"event": "select_room", "room": 301}
//! {"event": "pick_start", "date": "2024-01-01", "time": "09:00"}
//! {"event": "pick_end", "date": "2024-01-01", "time": "10:00"}
//! {"event": "submit"}
//! ```

use room_booking_domain::DateField;
use serde::{Deserialize, Serialize};
use time::{Date, Time};

time::serde::format_description!(picker_date, Date, "[year]-[month]-[day]");
time::serde::format_description!(picker_time, Time, "[hour]:[minute]");

/// One user interaction with the form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum FormEvent {
    /// Choose a tower in the first dropdown.
    SelectTower {
        /// Tower identifier.
        tower: String,
    },
    /// Choose a floor in the second dropdown.
    SelectFloor {
        /// Floor number.
        floor: i32,
    },
    /// Choose a room in the third dropdown.
    SelectRoom {
        /// Room number.
        room: u32,
    },
    /// Pick the start in the calendar.
    PickStart {
        /// Calendar day, `YYYY-MM-DD`.
        #[serde(with = "picker_date")]
        date: Date,
        /// Wall-clock time, `HH:MM`.
        #[serde(with = "picker_time")]
        time: Time,
    },
    /// Pick the end in the calendar.
    PickEnd {
        /// Calendar day, `YYYY-MM-DD`.
        #[serde(with = "picker_date")]
        date: Date,
        /// Wall-clock time, `HH:MM`.
        #[serde(with = "picker_time")]
        time: Time,
    },
    /// Type text straight into a date field.
    TypeDate {
        /// The date field typed into.
        field: DateField,
        /// The typed text.
        text: String,
    },
    /// Replace the comment.
    Comment {
        /// New comment text.
        text: String,
    },
    /// Press the submit button.
    Submit,
    /// Press the reset button.
    Reset,
    /// Print the current form snapshot.
    Show,
}

impl FormEvent {
    /// Returns the event tag as written in scripts.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::SelectTower { .. } => "select_tower",
            Self::SelectFloor { .. } => "select_floor",
            Self::SelectRoom { .. } => "select_room",
            Self::PickStart { .. } => "pick_start",
            Self::PickEnd { .. } => "pick_end",
            Self::TypeDate { .. } => "type_date",
            Self::Comment { .. } => "comment",
            Self::Submit => "submit",
            Self::Reset => "reset",
            Self::Show => "show",
        }
    }
}

/// Errors that stop a replay.
#[derive(Debug, thiserror::Error)]
pub enum ScriptError {
    /// Reading the script or writing output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// A line is not a valid event.
    #[error("line {line}: {source}")]
    Malformed {
        /// One-based line number.
        line: usize,
        /// The parse failure.
        #[source]
        source: serde_json::Error,
    },
    /// A response could not be serialized.
    #[error("failed to write response: {0}")]
    Output(#[source] serde_json::Error),
}

/// Parses one script line.
///
/// # Arguments
///
/// * `line` - One-based line number, used in errors
/// * `text` - The raw line
///
/// # Returns
///
/// `None` for blank lines and `#` comments.
///
/// # Errors
///
/// Returns `ScriptError::Malformed` if the line is not a known event.
pub fn parse_line(line: usize, text: &str) -> Result<Option<FormEvent>, ScriptError> {
    let trimmed: &str = text.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }
    serde_json::from_str(trimmed)
        .map(Some)
        .map_err(|source| ScriptError::Malformed { line, source })
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use time::macros::{date, time};

    #[test]
    fn test_blank_and_comment_lines_are_skipped() {
        assert_eq!(parse_line(1, "").unwrap(), None);
        assert_eq!(parse_line(2, "   ").unwrap(), None);
        assert_eq!(parse_line(3, "# pick the big room").unwrap(), None);
    }

    #[test]
    fn test_select_events_parse() {
        assert_eq!(
            parse_line(1, r#"{"event": "select_tower", "tower": "A"}"#).unwrap(),
            Some(FormEvent::SelectTower {
                tower: String::from("A")
            })
        );
        assert_eq!(
            parse_line(1, r#"{"event": "select_floor", "floor": 3}"#).unwrap(),
            Some(FormEvent::SelectFloor { floor: 3 })
        );
        assert_eq!(
            parse_line(1, r#"{"event": "select_room", "room": 301}"#).unwrap(),
            Some(FormEvent::SelectRoom { room: 301 })
        );
    }

    #[test]
    fn test_pick_event_parses_date_and_time() {
        let event: Option<FormEvent> = parse_line(
            1,
            r#"{"event": "pick_start", "date": "2024-01-01", "time": "09:00"}"#,
        )
        .unwrap();

        assert_eq!(
            event,
            Some(FormEvent::PickStart {
                date: date!(2024 - 01 - 01),
                time: time!(09:00),
            })
        );
    }

    #[test]
    fn test_type_date_names_the_field() {
        let event: Option<FormEvent> = parse_line(
            1,
            r#"{"event": "type_date", "field": "end", "text": "завтра"}"#,
        )
        .unwrap();

        assert_eq!(
            event,
            Some(FormEvent::TypeDate {
                field: DateField::End,
                text: String::from("завтра"),
            })
        );
    }

    #[test]
    fn test_unit_events_parse() {
        assert_eq!(
            parse_line(1, r#"{"event": "submit"}"#).unwrap(),
            Some(FormEvent::Submit)
        );
        assert_eq!(
            parse_line(1, r#"{"event": "reset"}"#).unwrap(),
            Some(FormEvent::Reset)
        );
        assert_eq!(
            parse_line(1, r#"{"event": "show"}"#).unwrap(),
            Some(FormEvent::Show)
        );
    }

    #[test]
    fn test_unknown_event_reports_line_number() {
        let err: ScriptError = parse_line(7, r#"{"event": "book_everything"}"#).unwrap_err();

        assert!(matches!(err, ScriptError::Malformed { line: 7, .. }));
        assert!(err.to_string().starts_with("line 7: "));
    }

    #[test]
    fn test_bad_time_is_malformed() {
        let err: ScriptError = parse_line(
            4,
            r#"{"event": "pick_end", "date": "2024-01-01", "time": "9 am"}"#,
        )
        .unwrap_err();

        assert!(matches!(err, ScriptError::Malformed { line: 4, .. }));
    }

    #[test]
    fn test_event_name_matches_tag() {
        let event: FormEvent = parse_line(1, r#"{"event": "comment", "text": "hi"}"#)
            .unwrap()
            .unwrap();

        assert_eq!(event.name(), "comment");
    }
}
