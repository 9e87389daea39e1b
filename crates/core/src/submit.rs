// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use room_booking_domain::{BookingRequest, BookingSelection, ValidationErrors, validate_selection};

/// The outcome of a submit attempt.
///
/// A rejection is an expected result of incomplete input, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// The selection was complete and consistent.
    Accepted(BookingRequest),
    /// The selection failed validation; nothing is submitted.
    Rejected(ValidationErrors),
}

impl SubmissionOutcome {
    /// The flags to show after this attempt; clean on acceptance.
    #[must_use]
    pub const fn errors(&self) -> ValidationErrors {
        match self {
            Self::Accepted(_) => ValidationErrors::new(),
            Self::Rejected(errors) => *errors,
        }
    }
}

/// Validates the selection and assembles the booking request.
///
/// # Arguments
///
/// * `selection` - The selection at the submit instant
///
/// # Returns
///
/// * `SubmissionOutcome::Accepted` with the request when validation is clean
/// * `SubmissionOutcome::Rejected` with the raised flags otherwise
#[must_use]
pub fn submit(selection: &BookingSelection) -> SubmissionOutcome {
    let errors: ValidationErrors = validate_selection(selection);

    match (
        errors.is_clean(),
        selection.tower.as_ref(),
        selection.floor.as_ref(),
        selection.room.as_ref(),
        selection.start_time,
        selection.end_time,
    ) {
        (true, Some(tower), Some(floor), Some(room), Some(start_time), Some(end_time)) => {
            SubmissionOutcome::Accepted(BookingRequest {
                tower: tower.value.clone(),
                floor: floor.value,
                room_number: room.value,
                start_time,
                end_time,
                comment: selection.comment.clone(),
            })
        }
        _ => SubmissionOutcome::Rejected(errors),
    }
}
