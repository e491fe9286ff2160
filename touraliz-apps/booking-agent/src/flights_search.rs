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

//! # Amadeus Flight Offers Client
//!
//! Effectful (network) operations: client-credentials token exchange and
//! the flight-offers search. Each search fetches a fresh token; nothing is
//! cached and nothing is retried.

use std::sync::Arc;
use std::time::Instant;

use serde::Deserialize;
use wreq::redirect::Policy;

use crate::config::BookingConfig;
use crate::error::{BookingError, body_preview};
use crate::flights_query_builder::SearchCriteria;
use crate::flights_results_parser::{FlightOffer, parse_offers_response};

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default)]
    expires_in: Option<u64>,
}

#[derive(Clone)]
pub struct AmadeusClient {
    client: Arc<wreq::Client>,
    config: BookingConfig,
}

impl AmadeusClient {
    pub fn new(config: BookingConfig) -> Result<Self, BookingError> {
        let client = wreq::Client::builder()
            .redirect(Policy::default())
            .timeout(config.timeout())
            .connect_timeout(config.timeout())
            .build()?;
        Ok(Self {
            client: Arc::new(client),
            config,
        })
    }

    pub fn config(&self) -> &BookingConfig {
        &self.config
    }
}

impl AmadeusClient {
    /// Exchange the configured client credentials for a bearer token.
    pub async fn get_access_token(&self) -> Result<String, BookingError> {
        let url = self.config.token_url();
        let form = format!(
            "grant_type=client_credentials&client_id={}&client_secret={}",
            urlencoding::encode(&self.config.client_id),
            urlencoding::encode(&self.config.client_secret)
        );

        let start = Instant::now();
        tracing::debug!("[get_access_token] POST {}", url);
        let response = self
            .client
            .post(url)
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(form)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        tracing::debug!(
            "[get_access_token] HTTP Status: {} in {:?}",
            status.as_u16(),
            start.elapsed()
        );

        if !status.is_success() {
            return Err(BookingError::Auth {
                status: status.as_u16(),
                message: body_preview(&body),
            });
        }

        let token: TokenResponse =
            serde_json::from_str(&body).map_err(|e| BookingError::MalformedResponse {
                message: format!("token response: {}", e),
                body: Some(body_preview(&body)),
            })?;

        if token.access_token.is_empty() {
            return Err(BookingError::MalformedResponse {
                message: "token response has an empty access_token".to_string(),
                body: None,
            });
        }

        tracing::debug!(
            "[get_access_token] Token acquired (expires in {:?}s)",
            token.expires_in
        );
        Ok(token.access_token)
    }

    /// Fetch a token, then the offers matching `criteria`, in provider order.
    pub async fn search_flights(
        &self,
        criteria: &SearchCriteria,
    ) -> Result<Vec<FlightOffer>, BookingError> {
        let overall_start = Instant::now();
        let token = self.get_access_token().await?;

        let url = format!(
            "{}?{}",
            self.config.flight_offers_url(),
            criteria.query_string()
        );
        tracing::info!("🔗 Search URL: {}", url);

        let fetch_start = Instant::now();
        let response = self
            .client
            .get(url)
            .header("Authorization", format!("Bearer {}", token))
            .header("Accept", "application/json")
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        tracing::debug!(
            "[search_flights] HTTP Status: {} {} in {:?}, {} KB",
            status.as_u16(),
            status.canonical_reason().unwrap_or("Unknown"),
            fetch_start.elapsed(),
            body.len() / 1024
        );

        if status.as_u16() == 401 || status.as_u16() == 403 {
            return Err(BookingError::Auth {
                status: status.as_u16(),
                message: body_preview(&body),
            });
        }
        if !status.is_success() {
            return Err(BookingError::Api {
                status: status.as_u16(),
                message: body_preview(&body),
            });
        }

        let offers = parse_offers_response(&body)?;
        tracing::info!(
            "Search {} -> {} returned {} offers in {:?}",
            criteria.origin,
            criteria.destination,
            offers.len(),
            overall_start.elapsed()
        );
        Ok(offers)
    }
}
