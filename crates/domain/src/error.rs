// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::types::{DateField, Floor, RoomNumber, Tower};

/// Errors that can occur while loading the catalog or applying a selection.
///
/// Missing or inconsistent form fields are not errors; they are reported
/// through `ValidationErrors` at submit time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The room catalog contains no rooms.
    EmptyCatalog,
    /// A catalog record has a blank tower identifier.
    InvalidTower {
        /// Zero-based index of the offending record.
        index: usize,
    },
    /// The room catalog could not be parsed.
    CatalogParseError(String),
    /// The tower does not appear in the catalog.
    UnknownTower(Tower),
    /// The floor does not exist in the selected tower.
    FloorNotAvailable {
        /// The selected tower.
        tower: Tower,
        /// The requested floor.
        floor: Floor,
    },
    /// The room does not exist on the selected tower and floor.
    RoomNotAvailable {
        /// The selected tower.
        tower: Tower,
        /// The selected floor.
        floor: Floor,
        /// The requested room.
        room: RoomNumber,
    },
    /// A floor was chosen before any tower.
    TowerNotSelected,
    /// A room was chosen before any floor.
    FloorNotSelected,
    /// Date fields accept calendar picks only; typed text is refused.
    ManualDateEntry {
        /// The field that received the text.
        field: DateField,
    },
    /// The timezone is not a known IANA timezone.
    InvalidTimezone(String),
    /// The picked time is not on the picker's minute grid.
    OffGridTime {
        /// The picked minute.
        minute: u8,
        /// The picker interval in minutes.
        interval: u8,
    },
    /// The wall-clock time does not exist in the timezone.
    UnresolvableLocalTime {
        /// The wall-clock time as entered.
        local: String,
        /// The timezone it was entered in.
        timezone: String,
    },
    /// Converting between time representations failed.
    DateConversion(String),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyCatalog => write!(f, "Room catalog is empty"),
            Self::InvalidTower { index } => {
                write!(f, "Room catalog record {index} has a blank tower")
            }
            Self::CatalogParseError(msg) => write!(f, "Failed to parse room catalog: {msg}"),
            Self::UnknownTower(tower) => write!(f, "Tower '{tower}' is not in the catalog"),
            Self::FloorNotAvailable { tower, floor } => {
                write!(f, "Floor {floor} does not exist in tower '{tower}'")
            }
            Self::RoomNotAvailable { tower, floor, room } => {
                write!(
                    f,
                    "Room {room} does not exist on floor {floor} of tower '{tower}'"
                )
            }
            Self::TowerNotSelected => write!(f, "A tower must be selected before a floor"),
            Self::FloorNotSelected => write!(f, "A floor must be selected before a room"),
            Self::ManualDateEntry { field } => {
                write!(f, "Field '{field}' only accepts values picked from the calendar")
            }
            Self::InvalidTimezone(tz) => write!(f, "Invalid timezone: {tz}"),
            Self::OffGridTime { minute, interval } => {
                write!(
                    f,
                    "Minute {minute} is not a multiple of the {interval}-minute picker interval"
                )
            }
            Self::UnresolvableLocalTime { local, timezone } => {
                write!(
                    f,
                    "Local time {local} does not exist in {timezone}"
                )
            }
            Self::DateConversion(msg) => write!(f, "Date conversion failed: {msg}"),
        }
    }
}

impl std::error::Error for DomainError {}
