// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Replays an event script against a mounted form.

use std::io::{BufRead, Write};

use room_booking_api::{ApiError, BookingForm, BookingSink, FormView, ScrollRequest, SubmitResponse};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::script::{FormEvent, ScriptError, parse_line};

/// Something an event asks to print on stdout.
#[derive(Debug, Serialize)]
#[serde(untagged)]
enum Printout {
    Submit(SubmitResponse),
    View(FormView),
}

/// Counters for a finished replay.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReplaySummary {
    /// Events the form accepted.
    pub applied: usize,
    /// Events the form refused.
    pub refused: usize,
    /// Submit attempts that delivered a booking.
    pub submitted: usize,
}

/// Feeds every event of `script` to `form`, writing submit and show
/// responses to `out` as one JSON document per line.
///
/// # Errors
///
/// Returns an error if the script cannot be read, a line is malformed, or
/// output cannot be written. Refused events are logged and skipped.
pub fn replay<S, R, W>(
    form: &mut BookingForm<S>,
    script: R,
    out: &mut W,
) -> Result<ReplaySummary, ScriptError>
where
    S: BookingSink,
    R: BufRead,
    W: Write,
{
    let mut summary: ReplaySummary = ReplaySummary::default();

    for (index, line) in script.lines().enumerate() {
        let line_number: usize = index + 1;
        let Some(event) = parse_line(line_number, &line?)? else {
            continue;
        };
        let name: &'static str = event.name();

        match apply_event(form, event) {
            Ok(printout) => {
                summary.applied += 1;
                if let Some(Printout::Submit(response)) = &printout
                    && response.submitted
                {
                    summary.submitted += 1;
                }
                if let Some(printout) = printout {
                    serde_json::to_writer(&mut *out, &printout).map_err(ScriptError::Output)?;
                    writeln!(out)?;
                }
                debug!(line = line_number, event = name, "Event applied");
            }
            Err(err) => {
                summary.refused += 1;
                warn!(line = line_number, event = name, error = %err, "Event refused");
            }
        }
    }

    Ok(summary)
}

fn apply_event<S: BookingSink>(
    form: &mut BookingForm<S>,
    event: FormEvent,
) -> Result<Option<Printout>, ApiError> {
    match event {
        FormEvent::SelectTower { tower } => form.select_tower(&tower)?,
        FormEvent::SelectFloor { floor } => form.select_floor(floor)?,
        FormEvent::SelectRoom { room } => form.select_room(room)?,
        FormEvent::PickStart { date, time } => form.pick_start(date, time)?,
        FormEvent::PickEnd { date, time } => form.pick_end(date, time)?,
        FormEvent::TypeDate { field, text } => form.type_date_text(field, &text)?,
        FormEvent::Comment { text } => form.set_comment(&text)?,
        FormEvent::Submit => return form.submit().map(|r| Some(Printout::Submit(r))),
        FormEvent::Reset => {
            if let Some(ScrollRequest { top, left, smooth }) = form.reset()? {
                info!(top, left, smooth, "Scroll to top");
            }
        }
        FormEvent::Show => return form.view().map(|v| Some(Printout::View(v))),
    }
    Ok(None)
}
