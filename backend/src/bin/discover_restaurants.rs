//! Discover restaurants around a coordinate and print one page as JSON.
#![cfg_attr(not(any(test, doctest)), deny(clippy::unwrap_used))]
#![cfg_attr(not(any(test, doctest)), deny(clippy::expect_used))]

use std::ffi::OsString;
use std::io;
use std::sync::Arc;

use clap::Parser;
use dining_backend::OverpassSettings;
use dining_backend::domain::ports::{DiscoveryRequest, RestaurantDiscovery};
use dining_backend::domain::{
    Coordinates, Cuisine, DietaryTag, RandomSource, Restaurant, RestaurantDiscoveryService,
};
use dining_backend::outbound::overpass::OverpassHttpSource;
use mockable::DefaultClock;
use ortho_config::OrthoConfig;
use pagination::{Cursor, DEFAULT_PAGE_SIZE, Page, PageRequest, paginate};
use serde::Serialize;
use tokio::runtime::Builder;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

const DEFAULT_RADIUS_METERS: f64 = 25_000.0;
/// Largest page printed in one invocation.
const MAX_PAGE_SIZE: usize = 100;

/// `discover-restaurants` command arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "discover-restaurants",
    about = "Query Overpass for food and drink places and print a page of normalised restaurants",
    version
)]
struct CliArgs {
    /// Origin latitude in degrees.
    #[arg(long, allow_negative_numbers = true)]
    lat: f64,
    /// Origin longitude in degrees.
    #[arg(long, allow_negative_numbers = true)]
    lng: f64,
    /// Search radius in metres.
    #[arg(long = "radius-meters", default_value_t = DEFAULT_RADIUS_METERS)]
    radius_meters: f64,
    /// Cuisine label to keep, e.g. `Japanese`. Repeat for several.
    #[arg(long = "cuisine", value_name = "label", value_parser = parse_cuisine)]
    cuisines: Vec<Cuisine>,
    /// Dietary label of which at least one must match, e.g. `Vegan`.
    #[arg(long = "diet", value_name = "label", value_parser = parse_diet)]
    dietary: Vec<DietaryTag>,
    /// Zero-based page index.
    #[arg(long, default_value_t = 0, conflicts_with = "cursor")]
    page: usize,
    /// Items per page, at most 100.
    #[arg(long = "page-size", default_value_t = DEFAULT_PAGE_SIZE, conflicts_with = "cursor")]
    page_size: usize,
    /// Continuation token from a previous page's `nextCursor`.
    #[arg(long, value_parser = parse_cursor)]
    cursor: Option<Cursor>,
    /// Seed for reproducible synthetic ratings, prices and scores.
    #[arg(long)]
    seed: Option<u64>,
}

impl CliArgs {
    fn page_request(&self) -> io::Result<PageRequest> {
        if let Some(cursor) = &self.cursor {
            return Ok(cursor.request());
        }
        if self.page_size > MAX_PAGE_SIZE {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("page size {} exceeds the maximum of {MAX_PAGE_SIZE}", self.page_size),
            ));
        }
        PageRequest::new(self.page, self.page_size)
            .map_err(|error| io::Error::new(io::ErrorKind::InvalidInput, error))
    }

    fn random_source(&self) -> RandomSource {
        self.seed.map_or(RandomSource::Entropy, RandomSource::Seeded)
    }
}

/// Restaurant as printed: the stored record plus its display labels.
#[derive(Debug, Serialize)]
struct RestaurantView<'a> {
    #[serde(flatten)]
    restaurant: &'a Restaurant,
    /// `"<x.x> km"`.
    distance: String,
    /// `"<n> min"`.
    time: String,
}

impl<'a> From<&'a Restaurant> for RestaurantView<'a> {
    fn from(restaurant: &'a Restaurant) -> Self {
        Self {
            restaurant,
            distance: restaurant.distance_label(),
            time: restaurant.time_label(),
        }
    }
}

fn render_page(page: &Page<Restaurant>) -> serde_json::Result<String> {
    let view = Page {
        items: page.items.iter().map(RestaurantView::from).collect(),
        has_more: page.has_more,
        next_cursor: page.next_cursor,
    };
    serde_json::to_string_pretty(&view)
}

fn main() -> io::Result<()> {
    if let Err(error) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .json()
        .try_init()
    {
        warn!(error = %error, "tracing init failed");
    }

    let runtime = Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|error| io::Error::other(format!("create Tokio runtime: {error}")))?;
    runtime.block_on(async_main())
}

async fn async_main() -> io::Result<()> {
    let args = CliArgs::try_parse().map_err(io::Error::other)?;
    let page_request = args.page_request()?;

    let settings =
        OverpassSettings::load_from_iter([OsString::from("discover-restaurants")])
            .map_err(|error| io::Error::other(format!("load Overpass settings: {error}")))?;
    let endpoint = settings.endpoint().map_err(|error| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("invalid Overpass endpoint: {error}"),
        )
    })?;
    let source = OverpassHttpSource::with_identity(
        endpoint,
        settings.request_timeout(),
        settings.identity(),
    )
    .map_err(|error| io::Error::other(format!("build Overpass client: {error}")))?;

    let service = RestaurantDiscoveryService::new(Arc::new(source), Arc::new(DefaultClock))
        .with_config(settings.discovery_config())
        .with_random_source(args.random_source());

    let request = DiscoveryRequest {
        cuisines: args.cuisines,
        dietary: args.dietary,
        ..DiscoveryRequest::new(Coordinates::new(args.lat, args.lng), args.radius_meters)
    };

    let restaurants = service
        .discover(request)
        .await
        .map_err(|error| io::Error::other(format!("discovery failed: {error}")))?;
    if restaurants.is_empty() {
        info!("no restaurants matched; adjust the radius or filters");
    }

    let page = paginate(&restaurants, page_request);
    let rendered = render_page(&page)
        .map_err(|error| io::Error::other(format!("render page: {error}")))?;
    println!("{rendered}");
    Ok(())
}

fn parse_cuisine(raw: &str) -> Result<Cuisine, String> {
    raw.trim().parse().map_err(|error| format!("{error}"))
}

fn parse_diet(raw: &str) -> Result<DietaryTag, String> {
    raw.trim().parse().map_err(|error| format!("{error}"))
}

fn parse_cursor(raw: &str) -> Result<Cursor, String> {
    Cursor::decode(raw.trim()).map_err(|error| format!("invalid cursor: {error}"))
}

#[cfg(test)]
mod tests {
    //! Unit tests for CLI parsing helpers.

    use chrono::{TimeZone, Utc};
    use dining_backend::domain::{Address, PriceTier, ScoreVector};
    use rstest::rstest;

    use super::*;

    fn sakura(distance_km: f64) -> Restaurant {
        let now = Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).single().expect("valid");
        Restaurant {
            id: "osm-node-1".to_owned(),
            name: "Sakura Sushi".to_owned(),
            cuisine: Cuisine::Japanese,
            rating: 4.2,
            reviews: 120,
            price: PriceTier::Moderate,
            image: String::new(),
            distance_km,
            travel_minutes: 9,
            tags: Vec::new(),
            address: Address::Recorded("12 Bank Street".to_owned()),
            phone: None,
            website: None,
            coordinates: Coordinates::new(45.44, -75.69),
            scores: ScoreVector {
                user_score: 84,
                group_score: 84,
                overall_rating: 84,
                freshness: 90,
                hygiene: 90,
                popularity: 24,
                value: 80,
                service: 84,
                ambiance: 84,
                last_updated: now,
            },
        }
    }

    fn parse(args: &[&str]) -> Result<CliArgs, clap::Error> {
        CliArgs::try_parse_from(std::iter::once("discover-restaurants").chain(args.iter().copied()))
    }

    #[rstest]
    fn printed_pages_carry_display_labels() {
        let restaurants = vec![sakura(2.14), sakura(5.05)];
        let page = paginate(&restaurants, PageRequest::new(0, 1).expect("valid request"));

        let rendered = render_page(&page).expect("page renders");
        let json: serde_json::Value = serde_json::from_str(&rendered).expect("valid JSON");

        let first = &json["items"][0];
        assert_eq!(first["distance"], "2.1 km");
        assert_eq!(first["time"], "9 min");
        assert_eq!(first["name"], "Sakura Sushi");
        assert!(first["distanceKm"].is_number());
        assert_eq!(json["hasMore"], true);
        assert!(json["nextCursor"].is_string());
    }

    #[rstest]
    fn defaults_apply_when_only_origin_is_given() {
        let args = parse(&["--lat", "45.4215", "--lng", "-75.6972"]).expect("args parse");
        assert_eq!(args.radius_meters, DEFAULT_RADIUS_METERS);
        assert!(args.cuisines.is_empty());
        assert!(args.dietary.is_empty());
        assert_eq!(
            args.page_request().expect("default page"),
            PageRequest::first()
        );
        assert_eq!(args.random_source(), RandomSource::Entropy);
    }

    #[rstest]
    fn repeated_filters_accumulate() {
        let args = parse(&[
            "--lat", "45.4215", "--lng", "-75.6972", "--cuisine", "Japanese", "--cuisine",
            "Italian", "--diet", "Gluten-Free", "--seed", "9",
        ])
        .expect("args parse");
        assert_eq!(args.cuisines, vec![Cuisine::Japanese, Cuisine::Italian]);
        assert_eq!(args.dietary, vec![DietaryTag::GlutenFree]);
        assert_eq!(args.random_source(), RandomSource::Seeded(9));
    }

    #[rstest]
    #[case("japanese")]
    #[case("Sushi")]
    fn cuisine_labels_are_case_sensitive(#[case] raw: &str) {
        assert!(parse_cuisine(raw).is_err());
    }

    #[rstest]
    fn cursor_overrides_page_arguments() {
        let token = Cursor::from(PageRequest::new(2, 10).expect("valid request")).encode();
        let args = parse(&["--lat", "1", "--lng", "2", "--cursor", token.as_str()]).expect("args parse");
        assert_eq!(
            args.page_request().expect("cursor page"),
            PageRequest::new(2, 10).expect("valid request")
        );
    }

    #[rstest]
    fn cursor_conflicts_with_explicit_page() {
        let token = Cursor::from(PageRequest::first()).encode();
        assert!(parse(&["--lat", "1", "--lng", "2", "--page", "1", "--cursor", token.as_str()]).is_err());
    }

    #[rstest]
    fn malformed_cursor_is_rejected() {
        let error = parse_cursor("%%%").expect_err("cursor should fail");
        assert!(error.starts_with("invalid cursor"));
    }

    #[rstest]
    #[case("0")]
    #[case("101")]
    #[case("500")]
    fn page_sizes_outside_the_cli_limit_are_rejected(#[case] size: &str) {
        let args = parse(&["--lat", "1", "--lng", "2", "--page-size", size]).expect("args parse");
        let error = args.page_request().expect_err("page size should be rejected");
        assert_eq!(error.kind(), io::ErrorKind::InvalidInput);
    }

    #[rstest]
    fn largest_cli_page_is_accepted() {
        let args = parse(&["--lat", "1", "--lng", "2", "--page-size", "100"]).expect("args parse");
        assert_eq!(
            args.page_request().expect("page at the limit"),
            PageRequest::new(0, MAX_PAGE_SIZE).expect("valid request")
        );
    }
}
