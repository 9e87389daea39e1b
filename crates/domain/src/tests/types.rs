// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{BookingRequest, DateField, Floor, RoomNumber, SelectOption, Tower};

use super::helpers::{end_time, start_time};

#[test]
fn test_select_option_label_is_display_value() {
    let option: SelectOption<Floor> = SelectOption::new(Floor::new(-2));

    assert_eq!(option.value, Floor::new(-2));
    assert_eq!(option.label, "-2");
}

#[test]
fn test_floor_ordering_is_numeric() {
    assert!(Floor::new(2) < Floor::new(10));
    assert!(RoomNumber::new(99) < RoomNumber::new(100));
}

#[test]
fn test_date_field_as_str() {
    assert_eq!(DateField::Start.as_str(), "start_time");
    assert_eq!(DateField::End.to_string(), "end_time");
}

#[test]
fn test_booking_request_serializes_to_wire_shape() {
    let request: BookingRequest = BookingRequest {
        tower: Tower::new("A"),
        floor: Floor::new(3),
        room_number: RoomNumber::new(301),
        start_time: start_time(),
        end_time: end_time(),
        comment: String::new(),
    };

    let json: serde_json::Value = serde_json::to_value(&request).unwrap();

    assert_eq!(
        json,
        serde_json::json!({
            "tower": "A",
            "floor": 3,
            "roomNumber": 301,
            "startTime": "2024-01-01T09:00:00Z",
            "endTime": "2024-01-01T10:00:00Z",
            "comment": ""
        })
    );
}
