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

//! # Flight Results View
//!
//! Filtering and text rendering of a flight-offer list. The offer list is
//! owned by the view and never mutated; the two toggles only change what
//! gets rendered.

use chrono::NaiveDateTime;

use crate::config::CurrencyConversion;
use crate::flights_results_parser::{FlightOffer, Itinerary, Price};

pub const NO_FLIGHTS_FOUND: &str = "No flights found.";
pub const NO_FLIGHTS_MATCH_FILTERS: &str = "No flights match the current filters.";

/// Local toggles of the results view. Reset whenever a new view is built.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DisplayState {
    pub non_stop_only: bool,
    pub show_secondary_currency: bool,
}

impl DisplayState {
    pub fn toggle_non_stop(&mut self) {
        self.non_stop_only = !self.non_stop_only;
    }

    pub fn toggle_secondary_currency(&mut self) {
        self.show_secondary_currency = !self.show_secondary_currency;
    }
}

/// Offers visible under `state`, in provider order.
pub fn filter_offers<'a>(offers: &'a [FlightOffer], state: &DisplayState) -> Vec<&'a FlightOffer> {
    offers
        .iter()
        .filter(|offer| !state.non_stop_only || offer.is_non_stop())
        .collect()
}

pub fn format_time(at: &NaiveDateTime) -> String {
    at.format("%H:%M").to_string()
}

/// `PT2H30M` -> `2h30m`. Display only; the token is not parsed.
pub fn format_duration(token: &str) -> String {
    token.strip_prefix("PT").unwrap_or(token).to_lowercase()
}

/// `500 EUR`, or `500 EUR ≈ 72500 DZD` with the secondary currency shown.
pub fn format_price(price: &Price, state: &DisplayState, conversion: &CurrencyConversion) -> String {
    let Some(amount) = price.amount() else {
        return format!("{} {}", price.total, price.currency);
    };
    if state.show_secondary_currency {
        format!(
            "{} {} ≈ {} {}",
            amount,
            price.currency,
            conversion.convert(amount),
            conversion.target_currency
        )
    } else {
        format!("{} {}", amount, price.currency)
    }
}

pub fn airline_logo_url(code: &str) -> String {
    format!(
        "https://content.airhex.com/content/logos/airlines_{}_200_200_s.png?fallback=default.png",
        code
    )
}

fn dash_bar() -> String {
    let width = term_size::dimensions().map(|(w, _)| w).unwrap_or(100);
    "-".repeat(width.min(100))
}

fn checkbox(on: bool) -> &'static str {
    if on { "[x]" } else { "[ ]" }
}

fn render_itinerary(out: &mut Vec<String>, itinerary: &Itinerary, label: &str) {
    out.push(format!("  {}", label));
    for seg in &itinerary.segments {
        let duration = seg
            .duration
            .as_deref()
            .map(format_duration)
            .unwrap_or_else(|| "?".to_string());
        out.push(format!(
            "     {} ({}) → {} ({})   duration: {}",
            seg.departure.iata_code,
            format_time(&seg.departure.at),
            seg.arrival.iata_code,
            format_time(&seg.arrival.at),
            duration
        ));
    }
}

/// Results screen for one search.
#[derive(Debug, Clone)]
pub struct ResultsView {
    offers: Vec<FlightOffer>,
    state: DisplayState,
    conversion: CurrencyConversion,
}

impl ResultsView {
    pub fn new(offers: Vec<FlightOffer>, conversion: CurrencyConversion) -> Self {
        Self {
            offers,
            state: DisplayState::default(),
            conversion,
        }
    }

    pub fn offers(&self) -> &[FlightOffer] {
        &self.offers
    }

    pub fn state(&self) -> DisplayState {
        self.state
    }

    pub fn toggle_non_stop(&mut self) {
        self.state.toggle_non_stop();
    }

    pub fn toggle_secondary_currency(&mut self) {
        self.state.toggle_secondary_currency();
    }

    /// The provider returned nothing. Distinct from an error and from a
    /// list emptied by the non-stop filter.
    pub fn is_empty_state(&self) -> bool {
        self.offers.is_empty()
    }

    pub fn visible(&self) -> Vec<&FlightOffer> {
        filter_offers(&self.offers, &self.state)
    }

    /// Visible offers as pretty JSON, provider field names preserved.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.visible())
    }

    pub fn render_offer(&self, offer: &FlightOffer) -> String {
        let mut out = Vec::new();
        match offer.primary_airline() {
            Some(code) => out.push(format!("✈️  Airline: {}   {}", code, airline_logo_url(code))),
            None => out.push("✈️  Airline: ??".to_string()),
        }
        if let Some(outbound) = offer.outbound() {
            render_itinerary(&mut out, outbound, "🛫 Outbound");
        }
        if let Some(inbound) = offer.inbound() {
            render_itinerary(&mut out, inbound, "🔁 Return");
        }
        out.push(format!(
            "  💰 {}",
            format_price(&offer.price, &self.state, &self.conversion)
        ));
        out.join("\n")
    }

    pub fn render(&self) -> String {
        if self.is_empty_state() {
            return NO_FLIGHTS_FOUND.to_string();
        }

        let bar = dash_bar();
        let mut out = vec![
            format!(
                "{} Non-stop only   {} Show {}",
                checkbox(self.state.non_stop_only),
                checkbox(self.state.show_secondary_currency),
                self.conversion.target_currency
            ),
            bar.clone(),
        ];

        let visible = self.visible();
        if visible.is_empty() {
            out.push(NO_FLIGHTS_MATCH_FILTERS.to_string());
            return out.join("\n");
        }

        for offer in visible {
            out.push(self.render_offer(offer));
            out.push(bar.clone());
        }
        out.join("\n")
    }
}
