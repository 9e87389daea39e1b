// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use room_booking_domain::{BookingRequest, RoomCatalog, RoomRecord};
use time::macros::{date, time};
use time::{Date, Time};

use crate::{BookingForm, BookingSink, MemorySink, SinkError};

pub fn create_test_catalog() -> RoomCatalog {
    RoomCatalog::new(vec![
        RoomRecord::new("A", 3, 302),
        RoomRecord::new("A", 3, 301),
        RoomRecord::new("A", 4, 401),
        RoomRecord::new("B", 3, 310),
    ])
    .unwrap()
}

pub fn create_test_form() -> BookingForm<MemorySink> {
    BookingForm::new(create_test_catalog(), "UTC", MemorySink::new()).unwrap()
}

pub fn create_moscow_form() -> BookingForm<MemorySink> {
    BookingForm::new(create_test_catalog(), "Europe/Moscow", MemorySink::new()).unwrap()
}

pub const fn booking_date() -> Date {
    date!(2024 - 01 - 01)
}

pub const fn nine_am() -> Time {
    time!(09:00)
}

pub const fn ten_am() -> Time {
    time!(10:00)
}

/// Fills every required field of the form with A / 3 / 301, 09:00 to 10:00.
pub fn fill_form<S: BookingSink>(form: &mut BookingForm<S>) {
    form.select_tower("A").unwrap();
    form.select_floor(3).unwrap();
    form.select_room(301).unwrap();
    form.pick_start(booking_date(), nine_am()).unwrap();
    form.pick_end(booking_date(), ten_am()).unwrap();
}

/// A sink whose receiving system is always down.
#[derive(Debug, Default)]
pub struct FailingSink;

impl BookingSink for FailingSink {
    fn deliver(&mut self, _request: &BookingRequest) -> Result<(), SinkError> {
        Err(SinkError::Rejected(String::from("backend unavailable")))
    }
}
