// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{Command, SelectionState, apply};
use room_booking_domain::{Floor, RoomCatalog, RoomNumber, RoomRecord, SelectOption, Tower};
use time::OffsetDateTime;
use time::macros::datetime;

pub fn create_test_catalog() -> RoomCatalog {
    RoomCatalog::new(vec![
        RoomRecord::new("A", 3, 302),
        RoomRecord::new("A", 3, 301),
        RoomRecord::new("A", 4, 401),
        RoomRecord::new("B", 3, 310),
        RoomRecord::new("B", 7, 701),
    ])
    .unwrap()
}

pub fn tower(value: &str) -> SelectOption<Tower> {
    SelectOption::new(Tower::new(value))
}

pub fn floor(number: i32) -> SelectOption<Floor> {
    SelectOption::new(Floor::new(number))
}

pub fn room(number: u32) -> SelectOption<RoomNumber> {
    SelectOption::new(RoomNumber::new(number))
}

pub const fn start_time() -> OffsetDateTime {
    datetime!(2024-01-01 09:00 UTC)
}

pub const fn end_time() -> OffsetDateTime {
    datetime!(2024-01-01 10:00 UTC)
}

/// Applies each command in turn, panicking on the first refusal.
pub fn apply_all(catalog: &RoomCatalog, commands: Vec<Command>) -> SelectionState {
    commands
        .into_iter()
        .fold(SelectionState::new(), |state, command| {
            apply(catalog, &state, command).unwrap().new_state
        })
}

/// A state with every field filled in for tower A, floor 3, room 301.
pub fn create_complete_state(catalog: &RoomCatalog) -> SelectionState {
    apply_all(
        catalog,
        vec![
            Command::SelectTower(tower("A")),
            Command::SelectFloor(floor(3)),
            Command::SelectRoom(room(301)),
            Command::SelectStart(start_time()),
            Command::SelectEnd(end_time()),
        ],
    )
}
