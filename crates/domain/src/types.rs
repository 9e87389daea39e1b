// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Represents a tower identifier.
///
/// A tower is the top-level grouping of rooms (a building or a wing).
/// The value is kept exactly as it appears in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tower {
    /// The tower identifier as shown to the user.
    value: String,
}

impl Tower {
    /// Creates a new `Tower`.
    ///
    /// # Arguments
    ///
    /// * `value` - The tower identifier
    #[must_use]
    pub fn new(value: &str) -> Self {
        Self {
            value: value.to_string(),
        }
    }

    /// Returns the tower identifier.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl std::fmt::Display for Tower {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// Represents a floor number within a tower.
///
/// Floors are compared by numeric value only. Negative values are basements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Floor(i32);

impl Floor {
    /// Creates a new `Floor`.
    #[must_use]
    pub const fn new(number: i32) -> Self {
        Self(number)
    }

    /// Returns the floor number.
    #[must_use]
    pub const fn number(&self) -> i32 {
        self.0
    }
}

impl std::fmt::Display for Floor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Represents a room number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoomNumber(u32);

impl RoomNumber {
    /// Creates a new `RoomNumber`.
    #[must_use]
    pub const fn new(number: u32) -> Self {
        Self(number)
    }

    /// Returns the room number.
    #[must_use]
    pub const fn number(&self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for RoomNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single bookable room as listed in the room catalog.
///
/// Catalog input may carry extra descriptive fields; they are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomRecord {
    /// The tower the room is in.
    pub tower: Tower,
    /// The floor the room is on.
    pub floor: Floor,
    /// The room number.
    pub room_number: RoomNumber,
}

impl RoomRecord {
    /// Creates a new `RoomRecord`.
    ///
    /// # Arguments
    ///
    /// * `tower` - The tower identifier
    /// * `floor` - The floor number
    /// * `room_number` - The room number
    #[must_use]
    pub fn new(tower: &str, floor: i32, room_number: u32) -> Self {
        Self {
            tower: Tower::new(tower),
            floor: Floor::new(floor),
            room_number: RoomNumber::new(room_number),
        }
    }
}

/// A selectable choice in a dropdown: a value and its display label.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SelectOption<T> {
    /// The selected value.
    pub value: T,
    /// The text shown to the user.
    pub label: String,
}

impl<T: std::fmt::Display> SelectOption<T> {
    /// Creates an option whose label is the display form of its value.
    #[must_use]
    pub fn new(value: T) -> Self {
        let label: String = value.to_string();
        Self { value, label }
    }
}

/// The two date-time fields of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateField {
    /// Booking start.
    Start,
    /// Booking end.
    End,
}

impl DateField {
    /// Returns the string representation of this field.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Start => "start_time",
            Self::End => "end_time",
        }
    }
}

impl std::fmt::Display for DateField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The booking request handed to whatever system performs the booking.
///
/// Serializes to `{ tower, floor, roomNumber, startTime, endTime, comment }`
/// with RFC 3339 timestamps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    /// The booked tower.
    pub tower: Tower,
    /// The booked floor.
    pub floor: Floor,
    /// The booked room.
    pub room_number: RoomNumber,
    /// Booking start (UTC).
    #[serde(with = "time::serde::rfc3339")]
    pub start_time: OffsetDateTime,
    /// Booking end (UTC).
    #[serde(with = "time::serde::rfc3339")]
    pub end_time: OffsetDateTime,
    /// Free-form comment, possibly empty.
    pub comment: String,
}
