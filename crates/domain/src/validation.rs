// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::selection::BookingSelection;
use serde::{Deserialize, Serialize};

/// The required fields of the booking form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormField {
    /// Tower dropdown.
    Tower,
    /// Floor dropdown.
    Floor,
    /// Room dropdown.
    Room,
    /// Start date-time picker.
    StartTime,
    /// End date-time picker.
    EndTime,
}

impl FormField {
    /// All required fields in form order.
    pub const ALL: [Self; 5] = [
        Self::Tower,
        Self::Floor,
        Self::Room,
        Self::StartTime,
        Self::EndTime,
    ];

    /// Returns the string representation of this field.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Tower => "tower",
            Self::Floor => "floor",
            Self::Room => "room",
            Self::StartTime => "start_time",
            Self::EndTime => "end_time",
        }
    }
}

impl std::fmt::Display for FormField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Per-field invalid flags produced by a submit attempt.
///
/// All flags are `false` for a submit-ready selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[allow(clippy::struct_excessive_bools)]
pub struct ValidationErrors {
    /// No tower chosen.
    pub tower: bool,
    /// No floor chosen.
    pub floor: bool,
    /// No room chosen.
    pub room: bool,
    /// Start missing, or after the end.
    pub start_time: bool,
    /// End missing, or before the start.
    pub end_time: bool,
}

impl ValidationErrors {
    /// Creates a set with no flags raised.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            tower: false,
            floor: false,
            room: false,
            start_time: false,
            end_time: false,
        }
    }

    /// Returns `true` when no flag is raised.
    #[must_use]
    pub const fn is_clean(&self) -> bool {
        !(self.tower || self.floor || self.room || self.start_time || self.end_time)
    }

    /// Returns whether the flag for `field` is raised.
    #[must_use]
    pub const fn is_set(&self, field: FormField) -> bool {
        match field {
            FormField::Tower => self.tower,
            FormField::Floor => self.floor,
            FormField::Room => self.room,
            FormField::StartTime => self.start_time,
            FormField::EndTime => self.end_time,
        }
    }

    /// Raises the flag for `field`.
    pub const fn mark(&mut self, field: FormField) {
        *self.flag_mut(field) = true;
    }

    /// Lowers the flag for `field`.
    pub const fn clear(&mut self, field: FormField) {
        *self.flag_mut(field) = false;
    }

    /// Returns the fields whose flag is raised, in form order.
    #[must_use]
    pub fn fields(&self) -> Vec<FormField> {
        FormField::ALL
            .into_iter()
            .filter(|field| self.is_set(*field))
            .collect()
    }

    const fn flag_mut(&mut self, field: FormField) -> &mut bool {
        match field {
            FormField::Tower => &mut self.tower,
            FormField::Floor => &mut self.floor,
            FormField::Room => &mut self.room,
            FormField::StartTime => &mut self.start_time,
            FormField::EndTime => &mut self.end_time,
        }
    }
}

/// Validates a selection at submit time.
///
/// Every check runs unconditionally, so several flags may be raised at once:
/// - Each empty required field raises its own flag
/// - When both times are set and the end precedes the start, both time
///   flags are raised
///
/// An end equal to the start is accepted.
///
/// # Arguments
///
/// * `selection` - The selection as it stands at the submit instant
///
/// # Returns
///
/// The raised flags; clean when the selection is submit-ready.
#[must_use]
pub fn validate_selection(selection: &BookingSelection) -> ValidationErrors {
    let mut errors: ValidationErrors = ValidationErrors::new();

    if selection.tower.is_none() {
        errors.mark(FormField::Tower);
    }
    if selection.floor.is_none() {
        errors.mark(FormField::Floor);
    }
    if selection.room.is_none() {
        errors.mark(FormField::Room);
    }
    if selection.start_time.is_none() {
        errors.mark(FormField::StartTime);
    }
    if selection.end_time.is_none() {
        errors.mark(FormField::EndTime);
    }

    // Rule: a booking cannot end before it starts
    if let (Some(start), Some(end)) = (selection.start_time, selection.end_time)
        && end < start
    {
        errors.mark(FormField::StartTime);
        errors.mark(FormField::EndTime);
    }

    errors
}
