// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use platemart_domain::DomainError;

/// Why a command could not be applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A submitted field failed plate, price or contact validation.
    InvalidField(DomainError),
    /// An update was requested for a lot that was never stored.
    UnstoredLot {
        /// Display number of the lot, e.g. `А123ВС 77`.
        number: String,
    },
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidField(err) => write!(f, "Rejected input: {err}"),
            Self::UnstoredLot { number } => {
                write!(f, "Lot {number} has no identifier and cannot be updated")
            }
        }
    }
}

impl std::error::Error for CoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidField(err) => Some(err),
            Self::UnstoredLot { .. } => None,
        }
    }
}

impl From<DomainError> for CoreError {
    fn from(err: DomainError) -> Self {
        Self::InvalidField(err)
    }
}
