// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use room_booking_domain::{DateField, Floor, RoomNumber, SelectOption, Tower};
use time::OffsetDateTime;

/// A command represents one user interaction with the form, as data only.
///
/// Commands are the only way to change the selection state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Pick a tower. Clears floor and room.
    SelectTower(SelectOption<Tower>),
    /// Pick a floor of the selected tower. Clears room.
    SelectFloor(SelectOption<Floor>),
    /// Pick a room on the selected floor.
    SelectRoom(SelectOption<RoomNumber>),
    /// Pick the start instant from the calendar.
    SelectStart(OffsetDateTime),
    /// Pick the end instant from the calendar.
    SelectEnd(OffsetDateTime),
    /// Type raw text into a date field. Always refused.
    EditDateText {
        /// The date field being typed into.
        field: DateField,
        /// The typed text.
        text: String,
    },
    /// Replace the comment.
    SetComment(String),
    /// Validate and, if clean, submit the booking.
    Submit,
    /// Clear the whole form.
    Reset,
}

impl Command {
    /// Returns the command name for logging.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::SelectTower(_) => "SelectTower",
            Self::SelectFloor(_) => "SelectFloor",
            Self::SelectRoom(_) => "SelectRoom",
            Self::SelectStart(_) => "SelectStart",
            Self::SelectEnd(_) => "SelectEnd",
            Self::EditDateText { .. } => "EditDateText",
            Self::SetComment(_) => "SetComment",
            Self::Submit => "Submit",
            Self::Reset => "Reset",
        }
    }
}
