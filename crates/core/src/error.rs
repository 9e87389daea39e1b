// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Refusals raised by `apply`.

use room_booking_domain::DomainError;

/// Why a form command was refused.
///
/// The caller keeps its previous `SelectionState` whenever this is returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// The command broke a catalog or form rule.
    DomainViolation(DomainError),
}

impl CoreError {
    /// Returns the rule the refused command broke.
    #[must_use]
    pub const fn domain_error(&self) -> &DomainError {
        match self {
            Self::DomainViolation(err) => err,
        }
    }
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Command refused: {}", self.domain_error())
    }
}

impl std::error::Error for CoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.domain_error())
    }
}

impl From<DomainError> for CoreError {
    fn from(err: DomainError) -> Self {
        Self::DomainViolation(err)
    }
}
