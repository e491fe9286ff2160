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

//! CLI for Amadeus flight search.

use anyhow::{Context, Result};
use clap::Parser;
use touraliz_booking_agent::{
    AmadeusClient, BookingConfig, CabinClass, CurrencyConversion, ResultsView, SearchFailure,
    SearchForm, TripType, ValidationPolicy, config, parse_date,
};
use tracing_subscriber::EnvFilter;

/// CLI arguments
#[derive(Parser)]
#[command(name = "touraliz-flights")]
#[command(author, version, about, long_about = None)]
struct CliArgs {
    /// Origin airport code (e.g., ALG, ORN)
    #[arg(short, long)]
    from: String,

    /// Destination airport code (e.g., CDG, IST)
    #[arg(short, long)]
    to: String,

    /// Departure date (YYYY-MM-DD or YYYY/MM/DD)
    #[arg(short, long)]
    date: String,

    /// Return date for round trips (YYYY-MM-DD or YYYY/MM/DD)
    #[arg(short = 'R', long)]
    return_date: Option<String>,

    /// Trip type: oneway, roundtrip, multi
    #[arg(long, default_value = "oneway")]
    trip: String,

    /// Number of passengers (adults)
    #[arg(short, long, default_value = "1")]
    passengers: u32,

    /// Cabin class: economy, premium_economy, business, first
    #[arg(short, long, default_value = "economy")]
    cabin: String,

    /// Only show offers where every leg is a direct flight
    #[arg(long)]
    non_stop: bool,

    /// Show prices converted to the secondary currency as well
    #[arg(long)]
    convert: bool,

    /// Print the visible offers as JSON instead of the text view
    #[arg(long)]
    json: bool,

    /// Reject bad airport codes, zero passengers and reversed dates locally
    #[arg(long)]
    strict: bool,

    /// Amadeus API client id
    #[arg(long, env = "AMADEUS_CLIENT_ID", hide_env_values = true)]
    client_id: String,

    /// Amadeus API client secret
    #[arg(long, env = "AMADEUS_CLIENT_SECRET", hide_env_values = true)]
    client_secret: String,

    /// Amadeus API base URL
    #[arg(long, env = "AMADEUS_API_BASE", default_value = config::DEFAULT_API_BASE)]
    api_base: String,

    /// Fixed rate from the offer currency to the secondary currency
    #[arg(long, env = "TOURALIZ_EXCHANGE_RATE", default_value_t = config::DEFAULT_EXCHANGE_RATE)]
    exchange_rate: f64,

    /// Secondary currency code
    #[arg(long, env = "TOURALIZ_SECONDARY_CURRENCY", default_value = config::DEFAULT_SECONDARY_CURRENCY)]
    secondary_currency: String,

    /// HTTP timeout in seconds
    #[arg(long, env = "TOURALIZ_TIMEOUT_SECS", default_value_t = config::DEFAULT_TIMEOUT_SECS)]
    timeout_secs: u64,

    /// Verbose output
    #[arg(short, long, default_value = "false")]
    verbose: bool,
}

/// Configure logging based on verbosity level. `RUST_LOG` wins when set.
fn setup_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(tracing_subscriber::fmt::time::ChronoUtc::rfc_3339())
        .with_writer(std::io::stderr)
        .init();
}

fn build_form(args: &CliArgs) -> Result<SearchForm> {
    let departure_date = parse_date(&args.date)?;
    let return_date = args.return_date.as_deref().map(parse_date).transpose()?;

    let mut form = SearchForm::new(departure_date);
    form.origin = args.from.clone();
    form.destination = args.to.clone();
    form.trip_type = args.trip.parse::<TripType>()?;
    form.return_date = return_date;
    form.passengers = args.passengers;
    form.cabin_class = args.cabin.parse::<CabinClass>()?;
    form.policy = if args.strict {
        ValidationPolicy::Strict
    } else {
        ValidationPolicy::Lenient
    };
    Ok(form)
}

fn build_config(args: &CliArgs) -> BookingConfig {
    BookingConfig::new(args.client_id.clone(), args.client_secret.clone())
        .with_base_url(args.api_base.clone())
        .with_timeout(args.timeout_secs)
        .with_conversion(CurrencyConversion::new(
            args.exchange_rate,
            args.secondary_currency.clone(),
        ))
}

/// Render results to stdout
fn render_results(form: &SearchForm, view: &ResultsView) {
    let title_bar = format!(
        "================================================================================================\n  🛫  {} → {} on {} ({})\n================================================================================================",
        form.origin.to_uppercase(),
        form.destination.to_uppercase(),
        form.departure_date,
        form.trip_type
    );
    println!("{}\n", title_bar);
    if !view.is_empty_state() {
        println!(
            "📊 Showing {} of {} offers\n",
            view.visible().len(),
            view.offers().len()
        );
    }
    println!("{}", view.render());
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = CliArgs::parse();
    setup_logging(args.verbose);

    tracing::info!("Starting touraliz-flights CLI");

    let form = build_form(&args)?;
    let config = build_config(&args);
    tracing::debug!("Config: {:?}", config);

    let client = AmadeusClient::new(config).context("Failed to build HTTP client")?;

    let mut view = match form.submit(&client).await {
        Ok(view) => view,
        Err(SearchFailure::InvalidInput(e)) => return Err(e.into()),
        Err(failure @ SearchFailure::FetchFailed(_)) => {
            eprintln!("❌ {}", failure.user_message());
            std::process::exit(1);
        }
    };

    if args.non_stop {
        view.toggle_non_stop();
    }
    if args.convert {
        view.toggle_secondary_currency();
    }

    if args.json {
        println!(
            "{}",
            view.to_json().context("Failed to serialize offers")?
        );
    } else {
        render_results(&form, &view);
    }

    Ok(())
}
