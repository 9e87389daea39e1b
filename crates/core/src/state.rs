// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use room_booking_domain::{
    BookingRequest, BookingSelection, Floor, RoomCatalog, RoomNumber, SelectOption, Tower,
    ValidationErrors, floor_options, room_options, tower_options,
};

/// The complete state of one booking form instance.
///
/// Option lists are derived from the catalog on demand and never stored.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SelectionState {
    /// The values entered so far.
    pub selection: BookingSelection,
    /// The flags raised by the last submit, minus fields corrected since.
    pub errors: ValidationErrors,
}

impl SelectionState {
    /// Creates an empty state with no flags raised.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Tower options; always the full catalog list.
    #[must_use]
    #[allow(clippy::unused_self)]
    pub fn available_towers(&self, catalog: &RoomCatalog) -> Vec<SelectOption<Tower>> {
        tower_options(catalog)
    }

    /// Floor options for the selected tower; empty without a tower.
    #[must_use]
    pub fn available_floors(&self, catalog: &RoomCatalog) -> Vec<SelectOption<Floor>> {
        self.selection
            .tower_value()
            .map(|tower| floor_options(catalog, tower))
            .unwrap_or_default()
    }

    /// Room options for the selected tower and floor; empty unless both are set.
    #[must_use]
    pub fn available_rooms(&self, catalog: &RoomCatalog) -> Vec<SelectOption<RoomNumber>> {
        match (self.selection.tower_value(), self.selection.floor_value()) {
            (Some(tower), Some(floor)) => room_options(catalog, tower, floor),
            _ => Vec::new(),
        }
    }

    /// Returns `true` for the freshly-mounted (or freshly-reset) form.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.selection.is_empty() && self.errors.is_clean()
    }
}

/// A side effect requested by a transition, carried out by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Scroll the viewport back to the top of the form.
    ScrollToTop,
    /// Hand the booking request to the booking collaborator.
    DeliverBooking(BookingRequest),
}

/// The result of a successful state transition.
///
/// Transitions are atomic: they either succeed completely or fail without side effects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionResult {
    /// The new state after the transition.
    pub new_state: SelectionState,
    /// The side effect the host must perform, if any.
    pub effect: Option<Effect>,
}
