// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::types::{Floor, RoomNumber, SelectOption, Tower};
use time::OffsetDateTime;

/// The values currently entered in the booking form.
///
/// Every required field is an explicit `Option`; `None` means "not chosen".
/// The comment is always present and may be empty.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BookingSelection {
    /// The chosen tower.
    pub tower: Option<SelectOption<Tower>>,
    /// The chosen floor.
    pub floor: Option<SelectOption<Floor>>,
    /// The chosen room.
    pub room: Option<SelectOption<RoomNumber>>,
    /// The picked start instant.
    pub start_time: Option<OffsetDateTime>,
    /// The picked end instant.
    pub end_time: Option<OffsetDateTime>,
    /// Free-form comment.
    pub comment: String,
}

impl BookingSelection {
    /// Creates an empty selection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the chosen tower value, if any.
    #[must_use]
    pub fn tower_value(&self) -> Option<&Tower> {
        self.tower.as_ref().map(|option| &option.value)
    }

    /// Returns the chosen floor value, if any.
    #[must_use]
    pub fn floor_value(&self) -> Option<Floor> {
        self.floor.as_ref().map(|option| option.value)
    }

    /// Returns the chosen room value, if any.
    #[must_use]
    pub fn room_value(&self) -> Option<RoomNumber> {
        self.room.as_ref().map(|option| option.value)
    }

    /// Returns `true` when nothing has been entered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}
