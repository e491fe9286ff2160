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

// Library for touraliz-booking-agent
// Flight search against the Amadeus self-service API

pub mod config;
pub mod error;
mod flights_query_builder;
mod flights_results_parser;
mod flights_results_view;
mod flights_search;
mod search_form;

pub use config::{BookingConfig, CurrencyConversion};
pub use error::BookingError;

pub use flights_query_builder::{
    CabinClass, CriteriaError, MAX_RESULTS, SearchCriteria, SearchCriteriaBuilder, TripType,
    ValidationPolicy, parse_date,
};

pub use flights_results_parser::{
    FlightEndpoint, FlightOffer, FlightOffersResponse, FlightSegment, Itinerary, Price,
    parse_offers_response,
};

pub use flights_results_view::{
    DisplayState, NO_FLIGHTS_FOUND, NO_FLIGHTS_MATCH_FILTERS, ResultsView, airline_logo_url,
    filter_offers, format_duration, format_price, format_time,
};

pub use flights_search::AmadeusClient;

pub use search_form::{GENERIC_FETCH_ERROR, SearchFailure, SearchForm};
