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

//! Parser and results-view tests against recorded flight-offers payloads.
//!
//! Fixtures live in tests/fixtures-flight-offers/ and keep the full
//! provider shape (meta, dictionaries, traveler pricings) so that unknown
//! fields are exercised too.

use std::path::Path;

use touraliz_booking_agent::{
    CurrencyConversion, DisplayState, NO_FLIGHTS_FOUND, ResultsView, filter_offers,
    parse_offers_response,
};

struct FixtureTestCase {
    /// Filename in tests/fixtures-flight-offers/ (without .json extension)
    name: &'static str,
    offers: usize,
    non_stop_offers: usize,
    round_trip: bool,
    description: &'static str,
}

const FIXTURE_TESTS: &[FixtureTestCase] = &[
    FixtureTestCase {
        name: "alg_cdg_oneway",
        offers: 3,
        non_stop_offers: 2,
        round_trip: false,
        description: "One-way Algiers to Paris, one connection via Tunis",
    },
    FixtureTestCase {
        name: "alg_ist_roundtrip",
        offers: 2,
        non_stop_offers: 1,
        round_trip: true,
        description: "Round trip Algiers to Istanbul, one offer with a stop on the way back",
    },
    FixtureTestCase {
        name: "empty",
        offers: 0,
        non_stop_offers: 0,
        round_trip: false,
        description: "No availability",
    },
];

fn load_fixture(name: &str) -> String {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures-flight-offers")
        .join(format!("{}.json", name));
    std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to load fixture {}: {}", path.display(), e))
}

#[test]
fn test_fixture_offer_counts() {
    for case in FIXTURE_TESTS {
        let offers = parse_offers_response(&load_fixture(case.name))
            .unwrap_or_else(|e| panic!("{} ({}): {}", case.name, case.description, e));
        assert_eq!(offers.len(), case.offers, "{}", case.description);

        let non_stop = DisplayState {
            non_stop_only: true,
            ..Default::default()
        };
        assert_eq!(
            filter_offers(&offers, &non_stop).len(),
            case.non_stop_offers,
            "{}",
            case.description
        );

        for offer in &offers {
            assert_eq!(
                offer.inbound().is_some(),
                case.round_trip,
                "{}: offer {}",
                case.name,
                offer.id
            );
        }
    }
}

#[test]
fn test_oneway_fixture_details() {
    let offers = parse_offers_response(&load_fixture("alg_cdg_oneway")).unwrap();

    let ids: Vec<_> = offers.iter().map(|o| o.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "2", "3"], "provider order is kept");

    let connecting = &offers[1];
    assert_eq!(connecting.primary_airline(), Some("TU"));
    assert!(!connecting.is_non_stop());
    let outbound = connecting.outbound().unwrap();
    assert_eq!(outbound.stops(), 1);
    assert_eq!(outbound.segments[1].departure.iata_code, "TUN");
    assert_eq!(connecting.price.amount(), Some(318.47));
}

#[test]
fn test_roundtrip_fixture_rendering() {
    let offers = parse_offers_response(&load_fixture("alg_ist_roundtrip")).unwrap();
    let mut view = ResultsView::new(offers, CurrencyConversion::new(145.0, "DZD"));
    view.toggle_secondary_currency();

    let text = view.render();
    assert!(text.contains("ALG (12:00) → IST (17:40)"));
    assert!(text.contains("IST (08:30) → ALG (10:20)"));
    assert!(text.contains("duration: 3h40m"));
    assert!(text.contains("455.2 EUR ≈ 66004 DZD"));
    assert!(text.contains("389 EUR ≈ 56405 DZD"));

    view.toggle_non_stop();
    let text = view.render();
    assert!(text.contains("455.2 EUR"));
    assert!(!text.contains("389 EUR"));
}

#[test]
fn test_empty_fixture_renders_no_flights_found() {
    let offers = parse_offers_response(&load_fixture("empty")).unwrap();
    let view = ResultsView::new(offers, CurrencyConversion::default());
    assert!(view.is_empty_state());
    assert_eq!(view.render(), NO_FLIGHTS_FOUND);
}
