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

//! Property-style request parameter tests.
//!
//! Tests that parameter assembly holds for all combinations of inputs:
//! - Every cabin class maps to its `travelClass` value
//! - `returnDate` appears for round trips only, and matches the selection
//! - The result cap and passenger count are always sent
//! - Strict validation rejects exactly what lenient lets through
//!
//! Run with:
//!     cargo test --test t_search_params_properties

use chrono::{Days, NaiveDate};

use touraliz_booking_agent::{
    CabinClass, CriteriaError, SearchCriteria, TripType, ValidationPolicy,
};

fn base_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 11, 3).unwrap()
}

fn lookup(params: &[(&'static str, String)], key: &str) -> Option<String> {
    params
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, v)| v.clone())
}

/// Verify all cabin classes map to their API value.
#[test]
fn test_all_cabins() {
    let base = SearchCriteria::builder("ALG", "CDG", base_date());

    for (cabin, expected) in [
        (CabinClass::Economy, "ECONOMY"),
        (CabinClass::PremiumEconomy, "PREMIUM_ECONOMY"),
        (CabinClass::Business, "BUSINESS"),
        (CabinClass::First, "FIRST"),
    ] {
        let criteria = base.clone().cabin_class(cabin).build().expect("build");
        assert_eq!(
            lookup(&criteria.query_params(), "travelClass").as_deref(),
            Some(expected),
            "{:?}",
            cabin
        );
    }
}

/// One-way never sends a return date, even if one was picked before
/// switching trip type; round-trip always sends the picked one.
#[test]
fn test_return_date_presence_over_date_ranges() {
    for offset in 0..30u64 {
        let return_date = base_date().checked_add_days(Days::new(offset)).unwrap();

        let one_way = SearchCriteria::builder("ALG", "CDG", base_date())
            .trip_type(TripType::OneWay)
            .return_date(return_date)
            .build()
            .expect("one-way");
        assert_eq!(lookup(&one_way.query_params(), "returnDate"), None);

        let round_trip = SearchCriteria::builder("ALG", "CDG", base_date())
            .trip_type(TripType::RoundTrip)
            .return_date(return_date)
            .policy(ValidationPolicy::Strict)
            .build()
            .expect("round-trip");
        assert_eq!(
            lookup(&round_trip.query_params(), "returnDate"),
            Some(return_date.format("%Y-%m-%d").to_string())
        );
    }
}

#[test]
fn test_cap_and_passengers_always_sent() {
    for pax in 1..=9 {
        let criteria = SearchCriteria::builder("ORN", "IST", base_date())
            .passengers(pax)
            .build()
            .unwrap();
        let params = criteria.query_params();
        assert_eq!(lookup(&params, "max").as_deref(), Some("10"));
        assert_eq!(lookup(&params, "adults"), Some(pax.to_string()));
        assert_eq!(lookup(&params, "departureDate").as_deref(), Some("2026-11-03"));
    }
}

/// Inputs the original lenient behaviour accepts but strict refuses.
#[test]
fn test_strict_is_a_subset_of_lenient() {
    let reversed = base_date().checked_sub_days(Days::new(1)).unwrap();
    let cases: Vec<(&str, &str, u32, CriteriaError)> = vec![
        (
            "",
            "CDG",
            1,
            CriteriaError::InvalidAirportCode {
                field: "origin",
                code: String::new(),
            },
        ),
        (
            "ALG",
            "PARIS",
            1,
            CriteriaError::InvalidAirportCode {
                field: "destination",
                code: "PARIS".into(),
            },
        ),
        ("ALG", "CDG", 0, CriteriaError::NoPassengers),
    ];

    for (origin, destination, pax, expected) in cases {
        let builder = SearchCriteria::builder(origin, destination, base_date()).passengers(pax);
        assert!(builder.clone().build().is_ok(), "lenient accepts {:?}", expected);
        assert_eq!(
            builder.policy(ValidationPolicy::Strict).build().unwrap_err(),
            expected
        );
    }

    let builder = SearchCriteria::builder("ALG", "CDG", base_date())
        .trip_type(TripType::RoundTrip)
        .return_date(reversed);
    assert!(builder.clone().build().is_ok());
    assert!(matches!(
        builder.policy(ValidationPolicy::Strict).build(),
        Err(CriteriaError::ReturnBeforeDeparture { .. })
    ));
}
