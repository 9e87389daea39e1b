// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use room_booking_domain::{Floor, RoomNumber, SelectOption, Tower};
use time::macros::datetime;

use super::helpers::{create_moscow_form, create_test_form, fill_form};
use crate::{BookingForm, FormView, MemorySink};

#[test]
fn test_view_of_empty_form_offers_only_towers() {
    let form: BookingForm<MemorySink> = create_test_form();

    let view: FormView = form.view().unwrap();

    assert_eq!(
        view.tower_options,
        vec![
            SelectOption::new(Tower::new("A")),
            SelectOption::new(Tower::new("B")),
        ]
    );
    assert!(view.floor_options.is_empty());
    assert!(view.room_options.is_empty());
    assert!(view.start_time.is_none());
    assert!(view.errors.is_empty());
}

#[test]
fn test_view_options_follow_selection() {
    let mut form: BookingForm<MemorySink> = create_test_form();
    form.select_tower("A").unwrap();
    form.select_floor(3).unwrap();

    let view: FormView = form.view().unwrap();

    assert_eq!(
        view.floor_options,
        vec![
            SelectOption::new(Floor::new(3)),
            SelectOption::new(Floor::new(4)),
        ]
    );
    assert_eq!(
        view.room_options,
        vec![
            SelectOption::new(RoomNumber::new(301)),
            SelectOption::new(RoomNumber::new(302)),
        ]
    );
    assert_eq!(view.floor, Some(SelectOption::new(Floor::new(3))));
    assert!(view.room.is_none());
}

#[test]
fn test_view_formats_times_in_form_timezone() {
    let mut form: BookingForm<MemorySink> = create_moscow_form();
    fill_form(&mut form);

    let view: FormView = form.view().unwrap();

    assert_eq!(view.start_time.as_deref(), Some("1 января 2024 09:00"));
    assert_eq!(view.end_time.as_deref(), Some("1 января 2024 10:00"));
}

#[test]
fn test_view_shows_instant_selected_directly() {
    let mut form: BookingForm<MemorySink> = create_moscow_form();
    form.select_end(datetime!(2024-05-31 21:30 UTC)).unwrap();

    let view: FormView = form.view().unwrap();

    assert_eq!(view.end_time.as_deref(), Some("1 июня 2024 00:30"));
}

#[test]
fn test_view_labels_match_values() {
    let mut form: BookingForm<MemorySink> = create_test_form();
    form.select_tower("B").unwrap();

    let view: FormView = form.view().unwrap();
    let json: serde_json::Value = serde_json::to_value(&view).unwrap();

    assert_eq!(json["tower"]["value"], serde_json::json!("B"));
    assert_eq!(json["tower"]["label"], serde_json::json!("B"));
    assert_eq!(json["floor_options"][0]["value"], serde_json::json!(3));
    assert_eq!(json["floor_options"][0]["label"], serde_json::json!("3"));
}
