// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The static room catalog.
//!
//! ## Invariants
//!
//! - The catalog holds at least one room
//! - Every room has a non-blank tower
//! - The catalog is read-only once constructed

use crate::error::DomainError;
use crate::types::RoomRecord;

/// A validated, read-only collection of rooms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomCatalog {
    rooms: Vec<RoomRecord>,
}

impl RoomCatalog {
    /// Creates a catalog from a list of rooms.
    ///
    /// # Arguments
    ///
    /// * `rooms` - The rooms, in catalog order
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `rooms` is empty
    /// - Any room has a blank tower
    pub fn new(rooms: Vec<RoomRecord>) -> Result<Self, DomainError> {
        if rooms.is_empty() {
            return Err(DomainError::EmptyCatalog);
        }

        if let Some(index) = rooms
            .iter()
            .position(|room| room.tower.value().trim().is_empty())
        {
            return Err(DomainError::InvalidTower { index });
        }

        Ok(Self { rooms })
    }

    /// Parses a catalog from a JSON array of room records.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or the rooms fail
    /// validation (see [`RoomCatalog::new`]).
    pub fn from_json(json: &str) -> Result<Self, DomainError> {
        let rooms: Vec<RoomRecord> = serde_json::from_str(json)
            .map_err(|e| DomainError::CatalogParseError(e.to_string()))?;
        Self::new(rooms)
    }

    /// Returns the rooms in catalog order.
    #[must_use]
    pub fn rooms(&self) -> &[RoomRecord] {
        &self.rooms
    }

    /// Returns the number of rooms.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    /// Always `false`; an empty catalog cannot be constructed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }
}
