//!  Touraliz Booking Agent
//!
//!  Copyright (C) 2026  Touraliz Voyage
//!
//!  This program is free software: you can redistribute it and/or modify
//!  it under the terms of the GNU Affero General Public License as published by
//!  the Free Software Foundation, either version 3 of the License, or
//!  (at your option) any later version.
//!
//!  This program is distributed in the hope that it will be useful,
//!  but WITHOUT ANY WARRANTY; without even the implied warranty of
//!  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
//!  GNU Affero General Public License for more details.
//!
//!  You should have received a copy of the GNU Affero General Public License
//!  along with this program.  If not, see <http://www.gnu.org/licenses/>.

//! Error types for the booking client.

use thiserror::Error;

/// Failures of a flight search round-trip against the provider.
#[derive(Debug, Error)]
pub enum BookingError {
    #[error("network error: {0}")]
    Network(#[from] wreq::Error),

    #[error("authentication failed ({status}): {message}")]
    Auth { status: u16, message: String },

    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    #[error("malformed response: {message}")]
    MalformedResponse {
        message: String,
        body: Option<String>,
    },
}

impl BookingError {
    pub fn is_auth(&self) -> bool {
        matches!(self, BookingError::Auth { .. })
    }
}

/// Truncate a response body for inclusion in errors and logs.
pub(crate) fn body_preview(body: &str) -> String {
    body.chars().take(500).collect()
}
