// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{BookingSelection, Floor, RoomCatalog, RoomNumber, RoomRecord, SelectOption, Tower};
use time::OffsetDateTime;
use time::macros::datetime;

/// Two towers, unsorted floors and rooms, one duplicate record.
pub fn create_test_catalog() -> RoomCatalog {
    RoomCatalog::new(vec![
        RoomRecord::new("B", 5, 502),
        RoomRecord::new("A", 3, 302),
        RoomRecord::new("A", 3, 301),
        RoomRecord::new("A", 1, 101),
        RoomRecord::new("B", 2, 201),
        RoomRecord::new("A", 3, 301),
        RoomRecord::new("B", 5, 501),
    ])
    .unwrap()
}

pub fn create_complete_selection() -> BookingSelection {
    BookingSelection {
        tower: Some(SelectOption::new(Tower::new("A"))),
        floor: Some(SelectOption::new(Floor::new(3))),
        room: Some(SelectOption::new(RoomNumber::new(301))),
        start_time: Some(start_time()),
        end_time: Some(end_time()),
        comment: String::new(),
    }
}

pub const fn start_time() -> OffsetDateTime {
    datetime!(2024-01-01 09:00 UTC)
}

pub const fn end_time() -> OffsetDateTime {
    datetime!(2024-01-01 10:00 UTC)
}
