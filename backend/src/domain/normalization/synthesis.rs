//! Synthetic fields fabricated when the source data has no value.
//!
//! Every function draws from the caller's random source so a seeded
//! generator reproduces the same restaurants.

use chrono::{DateTime, Utc};
use rand::Rng;
use rand::seq::SliceRandom;

use crate::domain::restaurant::{PriceTier, ScoreVector};

/// Inclusive bounds of synthetic review counts.
pub const REVIEW_RANGE: std::ops::RangeInclusive<u32> = 10..=309;

/// Travel minutes per kilometre before jitter.
const MINUTES_PER_KM: f64 = 3.0;

/// Upper bound (exclusive) of the travel-time jitter in minutes.
const TRAVEL_JITTER_MINUTES: f64 = 5.0;

/// Rating in `[3.0, 5.0]` at one-decimal precision.
pub fn rating<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    ((rng.gen_range(0.0_f64..2.0) + 3.0) * 10.0).round() / 10.0
}

/// Review count within [`REVIEW_RANGE`].
pub fn reviews<R: Rng + ?Sized>(rng: &mut R) -> u32 {
    rng.gen_range(REVIEW_RANGE)
}

/// Uniform pick from the four price tiers.
pub fn price<R: Rng + ?Sized>(rng: &mut R) -> PriceTier {
    PriceTier::ALL
        .choose(rng)
        .copied()
        .unwrap_or(PriceTier::Moderate)
}

/// House number for placeholder addresses.
pub fn house_number<R: Rng + ?Sized>(rng: &mut R) -> u32 {
    rng.gen_range(1..=999)
}

/// Rough travel estimate: three minutes per kilometre plus jitter.
pub fn travel_minutes<R: Rng + ?Sized>(distance_km: f64, rng: &mut R) -> u32 {
    let minutes = distance_km * MINUTES_PER_KM + rng.gen_range(0.0..TRAVEL_JITTER_MINUTES);
    // Float-to-int casts saturate.
    minutes.round() as u32
}

fn centred<R: Rng + ?Sized>(rng: &mut R, spread: f64) -> f64 {
    (rng.gen_range(0.0_f64..1.0) - 0.5) * spread
}

fn clamp_score(value: f64) -> u8 {
    value.round().clamp(0.0, 100.0) as u8
}

/// Score vector anchored on the rating mapped to a 0–100 scale.
///
/// Popularity is the only field that ignores the rating: it grows with the
/// review count and saturates at 100 reviews-per-five.
pub fn scores<R: Rng + ?Sized>(
    rating: f64,
    reviews: u32,
    now: DateTime<Utc>,
    rng: &mut R,
) -> ScoreVector {
    let base = rating * 20.0;
    ScoreVector {
        user_score: clamp_score(base + centred(rng, 10.0)),
        group_score: clamp_score(base + centred(rng, 15.0)),
        overall_rating: clamp_score(base + centred(rng, 8.0)),
        freshness: clamp_score(70.0 + rng.gen_range(0.0_f64..30.0)),
        hygiene: clamp_score(75.0 + rng.gen_range(0.0_f64..25.0)),
        popularity: clamp_score((f64::from(reviews) / 5.0).min(100.0)),
        value: clamp_score(80.0 + centred(rng, 30.0)),
        service: clamp_score(base + centred(rng, 12.0)),
        ambiance: clamp_score(base + centred(rng, 20.0)),
        last_updated: now,
    }
}
