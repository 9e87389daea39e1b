// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::Command;
use crate::error::CoreError;
use crate::state::{Effect, SelectionState, TransitionResult};
use crate::submit::{SubmissionOutcome, submit};
use crate::{validate_floor_exists, validate_room_exists, validate_tower_exists};
use room_booking_domain::{DomainError, Floor, FormField, RoomCatalog, SelectOption, Tower};

/// Applies a command to the current state, producing a new state.
///
/// Cascade rules:
/// - Selecting a tower clears the floor and the room
/// - Selecting a floor clears the room
/// - Selecting any field lowers that field's error flag
/// - Selected options are stored with their catalog label; the caller's
///   label is not kept
///
/// # Arguments
///
/// * `catalog` - The room catalog the options are derived from
/// * `state` - The current state (immutable)
/// * `command` - The command to apply
///
/// # Returns
///
/// * `Ok(TransitionResult)` containing the new state and any effect
/// * `Err(CoreError)` if the command is refused; the caller keeps `state`
///
/// # Errors
///
/// Returns an error if:
/// - The tower, floor or room is not among the current options
/// - A floor is picked without a tower, or a room without a floor
/// - Text is typed into a date field
pub fn apply(
    catalog: &RoomCatalog,
    state: &SelectionState,
    command: Command,
) -> Result<TransitionResult, CoreError> {
    match command {
        Command::SelectTower(option) => {
            validate_tower_exists(catalog, &option.value)?;

            let mut new_state: SelectionState = state.clone();
            new_state.selection.tower = Some(SelectOption::new(option.value));
            new_state.selection.floor = None;
            new_state.selection.room = None;
            new_state.errors.clear(FormField::Tower);

            Ok(TransitionResult {
                new_state,
                effect: None,
            })
        }
        Command::SelectFloor(option) => {
            let tower: &Tower = state
                .selection
                .tower_value()
                .ok_or(DomainError::TowerNotSelected)?;
            validate_floor_exists(catalog, tower, option.value)?;

            let mut new_state: SelectionState = state.clone();
            new_state.selection.floor = Some(SelectOption::new(option.value));
            new_state.selection.room = None;
            new_state.errors.clear(FormField::Floor);

            Ok(TransitionResult {
                new_state,
                effect: None,
            })
        }
        Command::SelectRoom(option) => {
            let tower: &Tower = state
                .selection
                .tower_value()
                .ok_or(DomainError::TowerNotSelected)?;
            let floor: Floor = state
                .selection
                .floor_value()
                .ok_or(DomainError::FloorNotSelected)?;
            validate_room_exists(catalog, tower, floor, option.value)?;

            let mut new_state: SelectionState = state.clone();
            new_state.selection.room = Some(SelectOption::new(option.value));
            new_state.errors.clear(FormField::Room);

            Ok(TransitionResult {
                new_state,
                effect: None,
            })
        }
        Command::SelectStart(at) => {
            let mut new_state: SelectionState = state.clone();
            new_state.selection.start_time = Some(at);
            new_state.errors.clear(FormField::StartTime);

            Ok(TransitionResult {
                new_state,
                effect: None,
            })
        }
        Command::SelectEnd(at) => {
            let mut new_state: SelectionState = state.clone();
            new_state.selection.end_time = Some(at);
            new_state.errors.clear(FormField::EndTime);

            Ok(TransitionResult {
                new_state,
                effect: None,
            })
        }
        Command::EditDateText { field, .. } => {
            // Date fields are pick-only
            Err(CoreError::DomainViolation(DomainError::ManualDateEntry { field }))
        }
        Command::SetComment(text) => {
            let mut new_state: SelectionState = state.clone();
            new_state.selection.comment = text;

            Ok(TransitionResult {
                new_state,
                effect: None,
            })
        }
        Command::Submit => {
            let outcome: SubmissionOutcome = submit(&state.selection);

            // Submitting never clears or locks the form
            let mut new_state: SelectionState = state.clone();
            new_state.errors = outcome.errors();

            let effect: Option<Effect> = match outcome {
                SubmissionOutcome::Accepted(request) => Some(Effect::DeliverBooking(request)),
                SubmissionOutcome::Rejected(_) => None,
            };

            Ok(TransitionResult { new_state, effect })
        }
        Command::Reset => Ok(TransitionResult {
            new_state: SelectionState::new(),
            effect: Some(Effect::ScrollToTop),
        }),
    }
}
