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

//! # Flights Query Builder
//!
//! Side-effect free search criteria and request-parameter assembly for the
//! Amadeus flight-offers endpoint.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use thiserror::Error;

/// Result cap sent with every search.
pub const MAX_RESULTS: u32 = 10;

const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TripType {
    #[default]
    OneWay,
    RoundTrip,
    /// Offered as a choice but no request can be built for it yet.
    MultiLeg,
}

impl FromStr for TripType {
    type Err = CriteriaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "oneway" | "one-way" | "one" | "ow" => Ok(TripType::OneWay),
            "roundtrip" | "round-trip" | "round" | "rt" => Ok(TripType::RoundTrip),
            "multi" | "multi-leg" | "multileg" => Ok(TripType::MultiLeg),
            _ => Err(CriteriaError::UnknownTripType(s.to_string())),
        }
    }
}

impl fmt::Display for TripType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TripType::OneWay => "one-way",
            TripType::RoundTrip => "round-trip",
            TripType::MultiLeg => "multi-leg",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CabinClass {
    #[default]
    Economy,
    PremiumEconomy,
    Business,
    First,
}

impl CabinClass {
    /// Value of the `travelClass` query parameter.
    pub fn as_api_str(&self) -> &'static str {
        match self {
            CabinClass::Economy => "ECONOMY",
            CabinClass::PremiumEconomy => "PREMIUM_ECONOMY",
            CabinClass::Business => "BUSINESS",
            CabinClass::First => "FIRST",
        }
    }
}

impl FromStr for CabinClass {
    type Err = CriteriaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "economy" | "e" => Ok(CabinClass::Economy),
            "premium_economy" | "premium" | "pe" => Ok(CabinClass::PremiumEconomy),
            "business" | "b" => Ok(CabinClass::Business),
            "first" | "f" => Ok(CabinClass::First),
            _ => Err(CriteriaError::UnknownCabinClass(s.to_string())),
        }
    }
}

/// How much checking happens before a request is issued.
///
/// `Lenient` only refuses criteria no request can be built from; anything
/// else (empty codes, zero passengers, reversed dates) is left to the
/// provider to reject. `Strict` refuses those locally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValidationPolicy {
    #[default]
    Lenient,
    Strict,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CriteriaError {
    #[error("Invalid trip type: {0}. Use: oneway, roundtrip, multi")]
    UnknownTripType(String),
    #[error("Invalid cabin class: {0}. Use: economy, premium_economy, business, first")]
    UnknownCabinClass(String),
    #[error("Invalid date format: {0}. Use YYYY-MM-DD or YYYY/MM/DD")]
    InvalidDate(String),
    #[error("Multi-destination trips are not supported yet")]
    MultiLegUnsupported,
    #[error("A round trip needs a return date")]
    MissingReturnDate,
    #[error("Invalid {field} airport code: {code:?} (expected 3 letters)")]
    InvalidAirportCode { field: &'static str, code: String },
    #[error("At least one passenger is required")]
    NoPassengers,
    #[error("Return date {return_date} is before departure date {departure_date}")]
    ReturnBeforeDeparture {
        departure_date: NaiveDate,
        return_date: NaiveDate,
    },
}

/// Parse a calendar date typed by the user.
pub fn parse_date(s: &str) -> Result<NaiveDate, CriteriaError> {
    NaiveDate::parse_from_str(s, DATE_FORMAT)
        .or_else(|_| NaiveDate::parse_from_str(s, "%Y/%m/%d"))
        .map_err(|_| CriteriaError::InvalidDate(s.to_string()))
}

/// One search submission. Built fresh per search and dropped once the
/// request is sent.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchCriteria {
    pub origin: String,
    pub destination: String,
    pub trip_type: TripType,
    pub departure_date: NaiveDate,
    pub return_date: Option<NaiveDate>,
    pub passengers: u32,
    pub cabin_class: CabinClass,
}

impl SearchCriteria {
    pub fn builder(
        origin: impl Into<String>,
        destination: impl Into<String>,
        departure_date: NaiveDate,
    ) -> SearchCriteriaBuilder {
        SearchCriteriaBuilder {
            origin: origin.into(),
            destination: destination.into(),
            departure_date,
            return_date: None,
            trip_type: TripType::OneWay,
            passengers: 1,
            cabin_class: CabinClass::Economy,
            policy: ValidationPolicy::Lenient,
        }
    }

    /// Query parameters for `GET /v2/shopping/flight-offers`, in the order
    /// they are sent. `returnDate` only appears for round trips.
    pub fn query_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("originLocationCode", self.origin.clone()),
            ("destinationLocationCode", self.destination.clone()),
            (
                "departureDate",
                self.departure_date.format(DATE_FORMAT).to_string(),
            ),
        ];
        if self.trip_type == TripType::RoundTrip {
            if let Some(rd) = self.return_date {
                params.push(("returnDate", rd.format(DATE_FORMAT).to_string()));
            }
        }
        params.push(("adults", self.passengers.to_string()));
        params.push(("travelClass", self.cabin_class.as_api_str().to_string()));
        params.push(("max", MAX_RESULTS.to_string()));
        params
    }

    /// `key=value&...` with both sides percent-encoded.
    pub fn query_string(&self) -> String {
        self.query_params()
            .iter()
            .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

#[derive(Clone, Debug)]
pub struct SearchCriteriaBuilder {
    origin: String,
    destination: String,
    departure_date: NaiveDate,
    return_date: Option<NaiveDate>,
    trip_type: TripType,
    passengers: u32,
    cabin_class: CabinClass,
    policy: ValidationPolicy,
}

impl SearchCriteriaBuilder {
    pub fn return_date(mut self, return_date: NaiveDate) -> Self {
        self.return_date = Some(return_date);
        self
    }

    pub fn trip_type(mut self, trip_type: TripType) -> Self {
        self.trip_type = trip_type;
        self
    }

    pub fn passengers(mut self, passengers: u32) -> Self {
        self.passengers = passengers;
        self
    }

    pub fn cabin_class(mut self, cabin_class: CabinClass) -> Self {
        self.cabin_class = cabin_class;
        self
    }

    pub fn policy(mut self, policy: ValidationPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn build(self) -> Result<SearchCriteria, CriteriaError> {
        let criteria = SearchCriteria {
            origin: self.origin.trim().to_uppercase(),
            destination: self.destination.trim().to_uppercase(),
            trip_type: self.trip_type,
            departure_date: self.departure_date,
            return_date: self.return_date,
            passengers: self.passengers,
            cabin_class: self.cabin_class,
        };
        validate(&criteria, self.policy)?;
        Ok(criteria)
    }
}

fn validate(criteria: &SearchCriteria, policy: ValidationPolicy) -> Result<(), CriteriaError> {
    match criteria.trip_type {
        TripType::MultiLeg => return Err(CriteriaError::MultiLegUnsupported),
        TripType::RoundTrip if criteria.return_date.is_none() => {
            return Err(CriteriaError::MissingReturnDate);
        }
        _ => {}
    }

    if policy == ValidationPolicy::Lenient {
        return Ok(());
    }

    for (field, code) in [
        ("origin", &criteria.origin),
        ("destination", &criteria.destination),
    ] {
        if code.len() != 3 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(CriteriaError::InvalidAirportCode {
                field,
                code: code.clone(),
            });
        }
    }

    if criteria.passengers == 0 {
        return Err(CriteriaError::NoPassengers);
    }

    if criteria.trip_type == TripType::RoundTrip {
        if let Some(return_date) = criteria.return_date {
            if return_date < criteria.departure_date {
                return Err(CriteriaError::ReturnBeforeDeparture {
                    departure_date: criteria.departure_date,
                    return_date,
                });
            }
        }
    }

    Ok(())
}
