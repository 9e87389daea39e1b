// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Option derivation for the cascading tower/floor/room dropdowns.
//!
//! Every function here is a pure function of the catalog and the partial
//! selection. Inputs that match nothing produce an empty list.

use crate::catalog::RoomCatalog;
use crate::types::{Floor, RoomNumber, SelectOption, Tower};
use std::collections::{BTreeSet, HashSet};

/// Lists the distinct towers in first-seen catalog order.
#[must_use]
pub fn list_towers(catalog: &RoomCatalog) -> Vec<Tower> {
    let mut seen: HashSet<&Tower> = HashSet::new();
    catalog
        .rooms()
        .iter()
        .filter(|room| seen.insert(&room.tower))
        .map(|room| room.tower.clone())
        .collect()
}

/// Lists the distinct floors of a tower in ascending order.
///
/// # Arguments
///
/// * `catalog` - The room catalog
/// * `tower` - The tower to list floors for
#[must_use]
pub fn list_floors(catalog: &RoomCatalog, tower: &Tower) -> Vec<Floor> {
    let floors: BTreeSet<Floor> = catalog
        .rooms()
        .iter()
        .filter(|room| &room.tower == tower)
        .map(|room| room.floor)
        .collect();
    floors.into_iter().collect()
}

/// Lists the distinct room numbers on a tower's floor in ascending order.
///
/// Floors are matched by numeric value.
///
/// # Arguments
///
/// * `catalog` - The room catalog
/// * `tower` - The tower
/// * `floor` - The floor within the tower
#[must_use]
pub fn list_rooms(catalog: &RoomCatalog, tower: &Tower, floor: Floor) -> Vec<RoomNumber> {
    let rooms: BTreeSet<RoomNumber> = catalog
        .rooms()
        .iter()
        .filter(|room| &room.tower == tower && room.floor.number() == floor.number())
        .map(|room| room.room_number)
        .collect();
    rooms.into_iter().collect()
}

/// Tower dropdown options.
#[must_use]
pub fn tower_options(catalog: &RoomCatalog) -> Vec<SelectOption<Tower>> {
    list_towers(catalog)
        .into_iter()
        .map(SelectOption::new)
        .collect()
}

/// Floor dropdown options for a tower.
#[must_use]
pub fn floor_options(catalog: &RoomCatalog, tower: &Tower) -> Vec<SelectOption<Floor>> {
    list_floors(catalog, tower)
        .into_iter()
        .map(SelectOption::new)
        .collect()
}

/// Room dropdown options for a tower and floor.
#[must_use]
pub fn room_options(
    catalog: &RoomCatalog,
    tower: &Tower,
    floor: Floor,
) -> Vec<SelectOption<RoomNumber>> {
    list_rooms(catalog, tower, floor)
        .into_iter()
        .map(SelectOption::new)
        .collect()
}
