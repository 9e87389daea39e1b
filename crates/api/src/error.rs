// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use room_booking::CoreError;
use room_booking_domain::DomainError;

/// Errors reported by a booking sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SinkError {
    /// The request could not be serialized.
    Serialization(String),
    /// The receiving system refused or failed to take the request.
    Rejected(String),
}

impl std::fmt::Display for SinkError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Serialization(msg) => write!(f, "Failed to serialize booking: {msg}"),
            Self::Rejected(msg) => write!(f, "Booking was not accepted: {msg}"),
        }
    }
}

impl std::error::Error for SinkError {}

/// API-level errors.
///
/// These are distinct from domain/core errors and represent the API contract.
/// Validation failures are not errors; they are reported in `SubmitResponse`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// A domain rule was violated.
    DomainRuleViolation {
        /// The rule that was violated.
        rule: String,
        /// A human-readable description of the violation.
        message: String,
    },
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// The booking could not be handed to the receiving system.
    Delivery {
        /// A description of the failure.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainRuleViolation { rule, message } => {
                write!(f, "Domain rule violation ({rule}): {message}")
            }
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::Delivery { message } => write!(f, "Delivery failed: {message}"),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<SinkError> for ApiError {
    fn from(err: SinkError) -> Self {
        Self::Delivery {
            message: err.to_string(),
        }
    }
}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    let message: String = err.to_string();
    match err {
        DomainError::EmptyCatalog
        | DomainError::InvalidTower { .. }
        | DomainError::CatalogParseError(_) => ApiError::InvalidInput {
            field: String::from("catalog"),
            message,
        },
        DomainError::UnknownTower(_) => ApiError::InvalidInput {
            field: String::from("tower"),
            message,
        },
        DomainError::FloorNotAvailable { .. } => ApiError::InvalidInput {
            field: String::from("floor"),
            message,
        },
        DomainError::RoomNotAvailable { .. } => ApiError::InvalidInput {
            field: String::from("room"),
            message,
        },
        DomainError::TowerNotSelected => ApiError::DomainRuleViolation {
            rule: String::from("tower_before_floor"),
            message,
        },
        DomainError::FloorNotSelected => ApiError::DomainRuleViolation {
            rule: String::from("floor_before_room"),
            message,
        },
        DomainError::ManualDateEntry { .. } => ApiError::DomainRuleViolation {
            rule: String::from("pick_only_dates"),
            message,
        },
        DomainError::InvalidTimezone(_) => ApiError::InvalidInput {
            field: String::from("timezone"),
            message,
        },
        DomainError::OffGridTime { .. }
        | DomainError::UnresolvableLocalTime { .. }
        | DomainError::DateConversion(_) => ApiError::InvalidInput {
            field: String::from("date_time"),
            message,
        },
    }
}

/// Translates a core error into an API error.
///
/// This translation is explicit and ensures core errors are not leaked directly.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    match err {
        CoreError::DomainViolation(domain_err) => translate_domain_error(domain_err),
    }
}
