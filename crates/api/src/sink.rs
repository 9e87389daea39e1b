// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Receivers of accepted booking requests.
//!
//! The booking backend is an external system. A sink is the seam where a
//! real deployment would plug in its transport.

use crate::error::SinkError;
use room_booking_domain::BookingRequest;
use tracing::info;

/// Something that accepts a validated booking request.
pub trait BookingSink {
    /// Hands over one booking request.
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be handed over.
    fn deliver(&mut self, request: &BookingRequest) -> Result<(), SinkError>;
}

/// Writes each booking as pretty-printed JSON to the log.
#[derive(Debug, Default)]
pub struct LoggingSink {
    delivered: usize,
}

impl LoggingSink {
    /// Creates a new logging sink.
    #[must_use]
    pub const fn new() -> Self {
        Self { delivered: 0 }
    }

    /// Number of bookings written so far.
    #[must_use]
    pub const fn delivered(&self) -> usize {
        self.delivered
    }
}

impl BookingSink for LoggingSink {
    fn deliver(&mut self, request: &BookingRequest) -> Result<(), SinkError> {
        let json: String = render_request(request)?;
        self.delivered += 1;
        info!(
            tower = %request.tower,
            floor = %request.floor,
            room = %request.room_number,
            "Booking request\n{json}"
        );
        Ok(())
    }
}

/// Keeps delivered bookings in memory.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MemorySink {
    /// Bookings in delivery order.
    pub requests: Vec<BookingRequest>,
}

impl MemorySink {
    /// Creates an empty memory sink.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            requests: Vec::new(),
        }
    }
}

impl BookingSink for MemorySink {
    fn deliver(&mut self, request: &BookingRequest) -> Result<(), SinkError> {
        self.requests.push(request.clone());
        Ok(())
    }
}

/// Renders a booking request as two-space indented JSON.
///
/// # Errors
///
/// Returns `SinkError::Serialization` if serialization fails.
pub fn render_request(request: &BookingRequest) -> Result<String, SinkError> {
    serde_json::to_string_pretty(request).map_err(|e| SinkError::Serialization(e.to_string()))
}
