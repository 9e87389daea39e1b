// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::error::Error;

use crate::tests::helpers::{create_test_catalog, floor};
use crate::{Command, CoreError, SelectionState, apply};
use room_booking_domain::{DomainError, RoomCatalog};

#[test]
fn test_refusal_exposes_the_broken_rule() {
    let catalog: RoomCatalog = create_test_catalog();

    let err: CoreError = apply(
        &catalog,
        &SelectionState::new(),
        Command::SelectFloor(floor(3)),
    )
    .unwrap_err();

    assert_eq!(err.domain_error(), &DomainError::TowerNotSelected);
    assert_eq!(
        err.to_string(),
        "Command refused: A tower must be selected before a floor"
    );
}

#[test]
fn test_refusal_chains_to_domain_error() {
    let err: CoreError = CoreError::from(DomainError::FloorNotSelected);

    let source: &dyn Error = err.source().unwrap();

    assert_eq!(source.to_string(), DomainError::FloorNotSelected.to_string());
}
