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
    clippy::unwrap_used,
    clippy::expect_used
)]

mod error;
mod locale;
mod request_response;
mod sink;

#[cfg(test)]
mod tests;

use room_booking::{Command, Effect, SelectionState, TransitionResult, apply};
use room_booking_domain::{
    DateField, Floor, RoomCatalog, RoomNumber, SelectOption, Tower, parse_timezone,
    resolve_wall_clock, to_wall_clock,
};
use time::{Date, OffsetDateTime, Time};
use tracing::{debug, info, warn};

pub use error::{ApiError, SinkError, translate_core_error, translate_domain_error};
pub use locale::{
    COMMENT_LABEL, FORM_TITLE, FieldText, RESET_CAPTION, SUBMIT_CAPTION, TIME_CAPTION,
    field_text, format_picker_value,
};
pub use request_response::{FieldErrorMessage, FormView, ScrollRequest, SubmitResponse};
pub use sink::{BookingSink, LoggingSink, MemorySink, render_request};

/// One mounted booking form.
///
/// The form owns its selection state exclusively. The catalog is read-only
/// for the lifetime of the form.
#[derive(Debug)]
pub struct BookingForm<S: BookingSink> {
    catalog: RoomCatalog,
    state: SelectionState,
    timezone: String,
    sink: S,
}

impl<S: BookingSink> BookingForm<S> {
    /// Mounts a new, empty form.
    ///
    /// # Arguments
    ///
    /// * `catalog` - The rooms offered by the form
    /// * `timezone` - IANA timezone the date picker works in
    /// * `sink` - Receiver of accepted bookings
    ///
    /// # Errors
    ///
    /// Returns an error if the timezone is unknown.
    pub fn new(catalog: RoomCatalog, timezone: &str, sink: S) -> Result<Self, ApiError> {
        parse_timezone(timezone).map_err(translate_domain_error)?;
        debug!(rooms = catalog.len(), timezone, "Mounted booking form");
        Ok(Self {
            catalog,
            state: SelectionState::new(),
            timezone: timezone.to_string(),
            sink,
        })
    }

    /// Returns the current selection state.
    #[must_use]
    pub const fn state(&self) -> &SelectionState {
        &self.state
    }

    /// Returns the booking sink.
    #[must_use]
    pub const fn sink(&self) -> &S {
        &self.sink
    }

    /// Returns the date picker timezone.
    #[must_use]
    pub fn timezone(&self) -> &str {
        &self.timezone
    }

    /// Selects a tower by its identifier.
    ///
    /// # Errors
    ///
    /// Returns an error if the tower is not in the catalog.
    pub fn select_tower(&mut self, tower: &str) -> Result<(), ApiError> {
        self.dispatch(Command::SelectTower(SelectOption::new(Tower::new(tower))))?;
        Ok(())
    }

    /// Selects a floor of the selected tower.
    ///
    /// # Errors
    ///
    /// Returns an error if no tower is selected or the floor is not in it.
    pub fn select_floor(&mut self, floor: i32) -> Result<(), ApiError> {
        self.dispatch(Command::SelectFloor(SelectOption::new(Floor::new(floor))))?;
        Ok(())
    }

    /// Selects a room on the selected floor.
    ///
    /// # Errors
    ///
    /// Returns an error if no floor is selected or the room is not on it.
    pub fn select_room(&mut self, room: u32) -> Result<(), ApiError> {
        self.dispatch(Command::SelectRoom(SelectOption::new(RoomNumber::new(room))))?;
        Ok(())
    }

    /// Sets the start instant.
    ///
    /// # Errors
    ///
    /// Never fails; the signature matches the other selectors.
    pub fn select_start(&mut self, at: OffsetDateTime) -> Result<(), ApiError> {
        self.dispatch(Command::SelectStart(at))?;
        Ok(())
    }

    /// Sets the end instant.
    ///
    /// # Errors
    ///
    /// Never fails; the signature matches the other selectors.
    pub fn select_end(&mut self, at: OffsetDateTime) -> Result<(), ApiError> {
        self.dispatch(Command::SelectEnd(at))?;
        Ok(())
    }

    /// Sets the start from a calendar pick in the form's timezone.
    ///
    /// # Errors
    ///
    /// Returns an error if the pick is off the picker grid or falls in a
    /// DST gap.
    pub fn pick_start(&mut self, date: Date, time: Time) -> Result<(), ApiError> {
        let at: OffsetDateTime = self.resolve_pick(date, time)?;
        self.select_start(at)
    }

    /// Sets the end from a calendar pick in the form's timezone.
    ///
    /// # Errors
    ///
    /// Returns an error if the pick is off the picker grid or falls in a
    /// DST gap.
    pub fn pick_end(&mut self, date: Date, time: Time) -> Result<(), ApiError> {
        let at: OffsetDateTime = self.resolve_pick(date, time)?;
        self.select_end(at)
    }

    /// Types raw text into a date field.
    ///
    /// # Errors
    ///
    /// Always returns an error; date fields only accept calendar picks.
    pub fn type_date_text(&mut self, field: DateField, text: &str) -> Result<(), ApiError> {
        self.dispatch(Command::EditDateText {
            field,
            text: text.to_string(),
        })?;
        Ok(())
    }

    /// Replaces the comment.
    ///
    /// # Errors
    ///
    /// Never fails; the signature matches the other selectors.
    pub fn set_comment(&mut self, text: &str) -> Result<(), ApiError> {
        self.dispatch(Command::SetComment(text.to_string()))?;
        Ok(())
    }

    /// Validates the form and, if it is clean, hands the booking to the sink.
    ///
    /// An incomplete form is not an error: the response lists the field
    /// errors and nothing is delivered.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Delivery` if the sink fails. The validation flags
    /// are still updated in that case.
    pub fn submit(&mut self) -> Result<SubmitResponse, ApiError> {
        match self.dispatch(Command::Submit)? {
            Some(Effect::DeliverBooking(request)) => {
                self.sink.deliver(&request)?;
                info!(
                    tower = %request.tower,
                    floor = %request.floor,
                    room = %request.room_number,
                    "Booking submitted"
                );
                Ok(SubmitResponse {
                    submitted: true,
                    request: Some(request),
                    errors: Vec::new(),
                })
            }
            _ => {
                let errors: Vec<FieldErrorMessage> =
                    FieldErrorMessage::from_errors(&self.state.errors);
                info!(invalid_fields = errors.len(), "Booking not submitted");
                Ok(SubmitResponse {
                    submitted: false,
                    request: None,
                    errors,
                })
            }
        }
    }

    /// Clears the form and asks the host to scroll back to the top.
    ///
    /// # Errors
    ///
    /// Never fails; the signature matches the other actions.
    pub fn reset(&mut self) -> Result<Option<ScrollRequest>, ApiError> {
        let effect: Option<Effect> = self.dispatch(Command::Reset)?;
        info!("Form reset");
        Ok(matches!(effect, Some(Effect::ScrollToTop)).then(ScrollRequest::to_top))
    }

    /// Builds a snapshot of everything the form renders.
    ///
    /// # Errors
    ///
    /// Returns an error if a picked instant cannot be shown in the form's
    /// timezone.
    pub fn view(&self) -> Result<FormView, ApiError> {
        Ok(FormView {
            tower_options: self.state.available_towers(&self.catalog),
            floor_options: self.state.available_floors(&self.catalog),
            room_options: self.state.available_rooms(&self.catalog),
            tower: self.state.selection.tower.clone(),
            floor: self.state.selection.floor.clone(),
            room: self.state.selection.room.clone(),
            start_time: self.display_time(self.state.selection.start_time)?,
            end_time: self.display_time(self.state.selection.end_time)?,
            comment: self.state.selection.comment.clone(),
            errors: FieldErrorMessage::from_errors(&self.state.errors),
        })
    }

    /// Applies a command and keeps the new state; on refusal the state is kept.
    fn dispatch(&mut self, command: Command) -> Result<Option<Effect>, ApiError> {
        let name: &'static str = command.name();
        match apply(&self.catalog, &self.state, command) {
            Ok(TransitionResult { new_state, effect }) => {
                debug!(command = name, "Applied form command");
                self.state = new_state;
                Ok(effect)
            }
            Err(err) => {
                warn!(command = name, error = %err, "Form command refused");
                Err(translate_core_error(err))
            }
        }
    }

    fn resolve_pick(&self, date: Date, time: Time) -> Result<OffsetDateTime, ApiError> {
        resolve_wall_clock(date, time, &self.timezone).map_err(|err| {
            warn!(%date, %time, error = %err, "Calendar pick refused");
            translate_domain_error(err)
        })
    }

    fn display_time(&self, at: Option<OffsetDateTime>) -> Result<Option<String>, ApiError> {
        at.map(|at| {
            to_wall_clock(at, &self.timezone)
                .map(format_picker_value)
                .map_err(translate_domain_error)
        })
        .transpose()
    }
}
