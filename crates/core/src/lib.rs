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

mod apply;
mod command;
mod error;
mod state;
mod submit;

#[cfg(test)]
mod tests;

use room_booking_domain::{
    DomainError, Floor, RoomCatalog, RoomNumber, Tower, list_floors, list_rooms, list_towers,
};

// Re-export public types and functions
pub use apply::apply;
pub use command::Command;
pub use error::CoreError;
pub use state::{Effect, SelectionState, TransitionResult};
pub use submit::{SubmissionOutcome, submit};

/// Validates that a tower exists in the catalog.
///
/// This is a read-only validation.
///
/// # Errors
///
/// Returns `DomainError::UnknownTower` if no room is in `tower`.
pub fn validate_tower_exists(catalog: &RoomCatalog, tower: &Tower) -> Result<(), DomainError> {
    if !list_towers(catalog).contains(tower) {
        return Err(DomainError::UnknownTower(tower.clone()));
    }
    Ok(())
}

/// Validates that a floor exists in a tower.
///
/// This function also validates that the tower exists.
///
/// # Arguments
///
/// * `catalog` - The room catalog
/// * `tower` - The tower to check within
/// * `floor` - The floor to validate
///
/// # Errors
///
/// Returns an error if:
/// - The tower is not in the catalog
/// - The floor does not exist in the tower
pub fn validate_floor_exists(
    catalog: &RoomCatalog,
    tower: &Tower,
    floor: Floor,
) -> Result<(), DomainError> {
    // First validate tower exists
    validate_tower_exists(catalog, tower)?;

    if !list_floors(catalog, tower).contains(&floor) {
        return Err(DomainError::FloorNotAvailable {
            tower: tower.clone(),
            floor,
        });
    }
    Ok(())
}

/// Validates that a room exists on a tower's floor.
///
/// This function also validates that the tower and floor exist.
///
/// # Errors
///
/// Returns an error if:
/// - The tower is not in the catalog
/// - The floor does not exist in the tower
/// - The room does not exist on the floor
pub fn validate_room_exists(
    catalog: &RoomCatalog,
    tower: &Tower,
    floor: Floor,
    room: RoomNumber,
) -> Result<(), DomainError> {
    validate_floor_exists(catalog, tower, floor)?;

    if !list_rooms(catalog, tower, floor).contains(&room) {
        return Err(DomainError::RoomNotAvailable {
            tower: tower.clone(),
            floor,
            room,
        });
    }
    Ok(())
}
