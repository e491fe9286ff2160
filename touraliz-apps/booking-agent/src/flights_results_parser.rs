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

//! # Flight Offers Parser
//!
//! Side-effect free decoding of the Amadeus flight-offers JSON payload.
//! Only the fields the results view needs are kept; everything else the
//! provider sends (`meta`, `dictionaries`, fare details) is ignored.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::error::{BookingError, body_preview};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FlightOffersResponse {
    pub data: Vec<FlightOffer>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightOffer {
    pub id: String,
    /// Outbound first, then the optional inbound leg.
    pub itineraries: Vec<Itinerary>,
    pub price: Price,
    #[serde(default)]
    pub validating_airline_codes: Vec<String>,
}

impl FlightOffer {
    pub fn outbound(&self) -> Option<&Itinerary> {
        self.itineraries.first()
    }

    pub fn inbound(&self) -> Option<&Itinerary> {
        self.itineraries.get(1)
    }

    /// First validating airline, used for display and the logo lookup.
    pub fn primary_airline(&self) -> Option<&str> {
        self.validating_airline_codes.first().map(String::as_str)
    }

    /// True when every itinerary is a single segment.
    pub fn is_non_stop(&self) -> bool {
        self.itineraries.iter().all(|it| it.segments.len() == 1)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Itinerary {
    #[serde(default)]
    pub duration: Option<String>,
    pub segments: Vec<FlightSegment>,
}

impl Itinerary {
    pub fn stops(&self) -> usize {
        self.segments.len().saturating_sub(1)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightSegment {
    pub departure: FlightEndpoint,
    pub arrival: FlightEndpoint,
    #[serde(default)]
    pub carrier_code: Option<String>,
    #[serde(default)]
    pub number: Option<String>,
    /// ISO-8601 duration token as sent, e.g. `PT2H10M`.
    #[serde(default)]
    pub duration: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightEndpoint {
    pub iata_code: String,
    #[serde(default)]
    pub terminal: Option<String>,
    /// Airport-local time, no offset.
    pub at: NaiveDateTime,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Price {
    pub currency: String,
    /// Decimal string, e.g. `"512.34"`.
    pub total: String,
}

impl Price {
    /// Parsed total. `NaN` and infinities parse as floats but are not prices.
    pub fn amount(&self) -> Option<f64> {
        self.total
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
    }
}

/// Decode a flight-offers response body.
///
/// An empty `data` array is a valid, empty result. Offers that break the
/// shape the results view relies on (no itinerary, more than two, an empty
/// segment list, a non-numeric price) make the whole response malformed.
pub fn parse_offers_response(body: &str) -> Result<Vec<FlightOffer>, BookingError> {
    let response: FlightOffersResponse =
        serde_json::from_str(body).map_err(|e| BookingError::MalformedResponse {
            message: e.to_string(),
            body: Some(body_preview(body)),
        })?;

    for offer in &response.data {
        check_offer_shape(offer)?;
    }

    Ok(response.data)
}

fn check_offer_shape(offer: &FlightOffer) -> Result<(), BookingError> {
    let malformed = |message: String| BookingError::MalformedResponse {
        message,
        body: None,
    };

    if offer.itineraries.is_empty() || offer.itineraries.len() > 2 {
        return Err(malformed(format!(
            "offer {} has {} itineraries (expected 1 or 2)",
            offer.id,
            offer.itineraries.len()
        )));
    }
    if let Some(idx) = offer.itineraries.iter().position(|it| it.segments.is_empty()) {
        return Err(malformed(format!(
            "offer {} itinerary {} has no segments",
            offer.id, idx
        )));
    }
    if offer.price.amount().is_none() {
        return Err(malformed(format!(
            "offer {} has a non-numeric price {:?}",
            offer.id, offer.price.total
        )));
    }
    Ok(())
}
