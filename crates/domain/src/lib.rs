// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod catalog;
mod error;
mod options;
mod picker;
mod selection;
mod types;
mod validation;

#[cfg(test)]
mod tests;

// Re-export public types
pub use catalog::RoomCatalog;
pub use error::DomainError;
pub use options::{
    floor_options, list_floors, list_rooms, list_towers, room_options, tower_options,
};
pub use picker::{PICKER_INTERVAL_MINUTES, parse_timezone, resolve_wall_clock, to_wall_clock};
pub use selection::BookingSelection;
pub use types::{BookingRequest, DateField, Floor, RoomNumber, RoomRecord, SelectOption, Tower};
pub use validation::{FormField, ValidationErrors, validate_selection};
