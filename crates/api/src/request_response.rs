// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.

use room_booking_domain::{
    BookingRequest, Floor, FormField, RoomNumber, SelectOption, Tower, ValidationErrors,
};

use crate::locale::field_text;

/// An inline error to show under one field.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FieldErrorMessage {
    /// The invalid field.
    pub field: FormField,
    /// The localized message.
    pub message: String,
}

impl FieldErrorMessage {
    /// Builds the localized messages for every raised flag, in form order.
    #[must_use]
    pub fn from_errors(errors: &ValidationErrors) -> Vec<Self> {
        errors
            .fields()
            .into_iter()
            .map(|field| Self {
                field,
                message: String::from(field_text(field).error),
            })
            .collect()
    }
}

/// API response for a submit attempt.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SubmitResponse {
    /// Whether the booking was handed to the sink.
    pub submitted: bool,
    /// The delivered booking, when submitted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request: Option<BookingRequest>,
    /// Field errors, when not submitted.
    pub errors: Vec<FieldErrorMessage>,
}

/// A request to scroll the viewport, issued by the reset action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ScrollRequest {
    /// Target vertical offset in pixels.
    pub top: u32,
    /// Target horizontal offset in pixels.
    pub left: u32,
    /// Whether to animate the scroll.
    pub smooth: bool,
}

impl ScrollRequest {
    /// Smooth scroll back to the top-left corner.
    #[must_use]
    pub const fn to_top() -> Self {
        Self {
            top: 0,
            left: 0,
            smooth: true,
        }
    }
}

/// Everything needed to render the form.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FormView {
    /// Tower dropdown options.
    pub tower_options: Vec<SelectOption<Tower>>,
    /// Floor dropdown options for the selected tower.
    pub floor_options: Vec<SelectOption<Floor>>,
    /// Room dropdown options for the selected floor.
    pub room_options: Vec<SelectOption<RoomNumber>>,
    /// The selected tower.
    pub tower: Option<SelectOption<Tower>>,
    /// The selected floor.
    pub floor: Option<SelectOption<Floor>>,
    /// The selected room.
    pub room: Option<SelectOption<RoomNumber>>,
    /// The start as shown by the picker, in the form's timezone.
    pub start_time: Option<String>,
    /// The end as shown by the picker, in the form's timezone.
    pub end_time: Option<String>,
    /// The comment.
    pub comment: String,
    /// Inline errors currently shown.
    pub errors: Vec<FieldErrorMessage>,
}
