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

//! # Booking Configuration
//!
//! Credentials, endpoint and display settings. Nothing here is baked into
//! the binary: the CLI fills it from flags or environment variables.

use std::fmt;
use std::time::Duration;

/// Amadeus self-service test environment.
pub const DEFAULT_API_BASE: &str = "https://test.api.amadeus.com";

/// 1 EUR = 145 DZD, the rate the agency quotes at the counter.
pub const DEFAULT_EXCHANGE_RATE: f64 = 145.0;
pub const DEFAULT_SECONDARY_CURRENCY: &str = "DZD";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Fixed-rate conversion used by the results view. Never fetched live.
#[derive(Debug, Clone, PartialEq)]
pub struct CurrencyConversion {
    pub rate: f64,
    pub target_currency: String,
}

impl CurrencyConversion {
    pub fn new(rate: f64, target_currency: impl Into<String>) -> Self {
        Self {
            rate,
            target_currency: target_currency.into(),
        }
    }

    /// Converted amount, rounded to the nearest whole unit.
    pub fn convert(&self, amount: f64) -> i64 {
        (amount * self.rate).round() as i64
    }
}

impl Default for CurrencyConversion {
    fn default() -> Self {
        Self::new(DEFAULT_EXCHANGE_RATE, DEFAULT_SECONDARY_CURRENCY)
    }
}

#[derive(Clone)]
pub struct BookingConfig {
    pub base_url: String,
    pub client_id: String,
    pub client_secret: String,
    pub timeout_secs: u64,
    pub conversion: CurrencyConversion,
}

impl BookingConfig {
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_API_BASE.to_string(),
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            conversion: CurrencyConversion::default(),
        }
    }

    /// Point the client at another host (fake servers in tests, production API).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    pub fn with_conversion(mut self, conversion: CurrencyConversion) -> Self {
        self.conversion = conversion;
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn token_url(&self) -> String {
        format!("{}/v1/security/oauth2/token", self.base_url)
    }

    pub fn flight_offers_url(&self) -> String {
        format!("{}/v2/shopping/flight-offers", self.base_url)
    }
}

// Keeps the secret out of `Args: {:?}` style log lines.
impl fmt::Debug for BookingConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BookingConfig")
            .field("base_url", &self.base_url)
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .field("timeout_secs", &self.timeout_secs)
            .field("conversion", &self.conversion)
            .finish()
    }
}
