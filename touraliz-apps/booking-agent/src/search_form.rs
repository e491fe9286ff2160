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

//! # Flight Search Form
//!
//! Holds what the user entered, turns it into [`SearchCriteria`] and submits
//! it. Submit failures are collapsed into one user-facing message; the typed
//! cause stays available for logs.

use chrono::NaiveDate;
use thiserror::Error;

use crate::error::BookingError;
use crate::flights_query_builder::{
    CabinClass, CriteriaError, SearchCriteria, TripType, ValidationPolicy,
};
use crate::flights_results_view::ResultsView;
use crate::flights_search::AmadeusClient;

pub const GENERIC_FETCH_ERROR: &str = "Failed to fetch flights. Please try again.";

#[derive(Debug, Error)]
pub enum SearchFailure {
    /// The form cannot produce a request. Shown to the user as is.
    #[error("{0}")]
    InvalidInput(#[from] CriteriaError),

    /// Anything that went wrong talking to the provider.
    #[error("{}", GENERIC_FETCH_ERROR)]
    FetchFailed(#[source] BookingError),
}

impl SearchFailure {
    pub fn user_message(&self) -> String {
        self.to_string()
    }
}

#[derive(Debug, Clone)]
pub struct SearchForm {
    pub origin: String,
    pub destination: String,
    pub trip_type: TripType,
    pub departure_date: NaiveDate,
    /// Kept while the user flips between trip types; only sent for round trips.
    pub return_date: Option<NaiveDate>,
    pub passengers: u32,
    pub cabin_class: CabinClass,
    pub policy: ValidationPolicy,
}

impl SearchForm {
    pub fn new(departure_date: NaiveDate) -> Self {
        Self {
            origin: String::new(),
            destination: String::new(),
            trip_type: TripType::OneWay,
            departure_date,
            return_date: None,
            passengers: 1,
            cabin_class: CabinClass::Economy,
            policy: ValidationPolicy::Lenient,
        }
    }

    pub fn to_criteria(&self) -> Result<SearchCriteria, CriteriaError> {
        let mut builder = SearchCriteria::builder(
            self.origin.as_str(),
            self.destination.as_str(),
            self.departure_date,
        )
        .trip_type(self.trip_type)
        .passengers(self.passengers)
        .cabin_class(self.cabin_class)
        .policy(self.policy);
        if let Some(rd) = self.return_date {
            builder = builder.return_date(rd);
        }
        builder.build()
    }

    /// Build the criteria, run the search and hand the offers to a fresh
    /// results view. An empty offer list is a successful search.
    pub async fn submit(&self, client: &AmadeusClient) -> Result<ResultsView, SearchFailure> {
        let criteria = self.to_criteria()?;
        tracing::info!(
            "Submitting search: {} -> {} on {} ({}, {} pax, {:?})",
            criteria.origin,
            criteria.destination,
            criteria.departure_date,
            criteria.trip_type,
            criteria.passengers,
            criteria.cabin_class
        );

        match client.search_flights(&criteria).await {
            Ok(offers) => Ok(ResultsView::new(offers, client.config().conversion.clone())),
            Err(e) => {
                tracing::error!("Flight search failed: {}", e);
                Err(SearchFailure::FetchFailed(e))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> SearchForm {
        let mut form = SearchForm::new(NaiveDate::from_ymd_opt(2026, 11, 3).unwrap());
        form.origin = "alg".into();
        form.destination = "cdg".into();
        form.return_date = NaiveDate::from_ymd_opt(2026, 11, 10);
        form
    }

    #[test]
    fn test_return_date_only_sent_for_round_trips() {
        let mut form = form();
        let params = form.to_criteria().unwrap().query_params();
        assert!(params.iter().all(|(k, _)| *k != "returnDate"));

        form.trip_type = TripType::RoundTrip;
        let params = form.to_criteria().unwrap().query_params();
        assert!(params.contains(&("returnDate", "2026-11-10".to_string())));
    }

    #[test]
    fn test_multi_leg_is_an_input_error() {
        let mut form = form();
        form.trip_type = TripType::MultiLeg;
        let failure = SearchFailure::from(form.to_criteria().unwrap_err());
        assert_eq!(
            failure.user_message(),
            "Multi-destination trips are not supported yet"
        );
    }

    #[test]
    fn test_fetch_failures_share_one_message() {
        let auth = SearchFailure::FetchFailed(BookingError::Auth {
            status: 401,
            message: "invalid_client".into(),
        });
        let api = SearchFailure::FetchFailed(BookingError::Api {
            status: 500,
            message: "boom".into(),
        });
        assert_eq!(auth.user_message(), GENERIC_FETCH_ERROR);
        assert_eq!(api.user_message(), GENERIC_FETCH_ERROR);
    }
}
