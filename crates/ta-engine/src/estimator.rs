//! The route estimator: table lookup, on-demand synthesis, alternatives.

use ta_core::{AdvisorRng, HourOfDay, LocationId};

use crate::congestion::CongestionBand;
use crate::emissions;
use crate::sample::{DISTANCE_KM_RANGE, RouteSample, round1, round2};
use crate::status::TrafficStatus;
use crate::table::RouteTable;

// ── Estimate ──────────────────────────────────────────────────────────────────

/// A neighboring-hour departure option.
///
/// Shares the primary sample's `base_time_min`; only the congestion draw (and
/// everything derived from it) differs.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AlternativeSample {
    pub hour:             HourOfDay,
    pub travel_time_min:  f64,
    pub congestion_level: f64,
    pub traffic_status:   TrafficStatus,
}

/// The full result of one estimation call.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouteEstimate {
    /// The primary sample — from the table, or freshly synthesized.
    pub primary: RouteSample,

    /// Fuel consumed over the route, litres (exact, unrounded).
    pub fuel_l: f64,

    /// CO2 emitted over the route, kilograms (exact, unrounded).
    pub co2_kg: f64,

    /// Departure options at `hour − 1` and `hour + 1` (mod 24), in that order.
    pub alternatives: [AlternativeSample; 2],

    /// `true` if the primary sample came from the precomputed table.
    pub cached: bool,
}

// ── Estimator ─────────────────────────────────────────────────────────────────

/// Wraps a [`RouteTable`] to answer estimation requests.
///
/// The estimator is read-only after construction: `estimate` takes `&self`
/// and the random source is passed in by the caller, so one estimator can
/// serve any number of concurrent requests, each with its own `AdvisorRng`.
/// Repeated calls for a cached triple return the stored distance and
/// congestion unchanged; only the on-demand path re-samples per call — a
/// design property of the original system, preserved here.
#[derive(Debug, Clone)]
pub struct RouteEstimator {
    table: RouteTable,
}

impl RouteEstimator {
    pub fn new(table: RouteTable) -> Self {
        Self { table }
    }

    /// The underlying precomputed table (for export and inspection).
    #[inline]
    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    /// Estimate the route `(source, destination)` departing at `hour`.
    ///
    /// Looks the triple up in the precomputed table, synthesizing a fresh
    /// sample (new distance and congestion draws) if absent; derives fuel and
    /// CO2; and generates the two neighboring-hour alternatives.
    pub fn estimate(
        &self,
        source:      LocationId,
        destination: LocationId,
        hour:        HourOfDay,
        rng:         &mut AdvisorRng,
    ) -> RouteEstimate {
        let (primary, cached) = match self.table.get(source, destination, hour) {
            Some(sample) => (sample.clone(), true),
            None => {
                let distance_km = rng.gen_range(DISTANCE_KM_RANGE);
                (
                    RouteSample::draw(source, destination, hour, distance_km, rng),
                    false,
                )
            }
        };

        let fuel_l = emissions::fuel_consumption_l(primary.distance_km);
        let co2_kg = emissions::co2_emission_kg(fuel_l);

        let alternatives = [
            alternative(&primary, hour.prev(), rng),
            alternative(&primary, hour.next(), rng),
        ];

        RouteEstimate { primary, fuel_l, co2_kg, alternatives, cached }
    }
}

/// Build one alternative from the primary's base time and a fresh congestion
/// draw for `alt_hour`.
fn alternative(primary: &RouteSample, alt_hour: HourOfDay, rng: &mut AdvisorRng) -> AlternativeSample {
    let congestion = round2(CongestionBand::for_hour(alt_hour).sample(rng));
    AlternativeSample {
        hour:             alt_hour,
        travel_time_min:  round1(primary.base_time_min * (1.0 + congestion * 0.5)),
        congestion_level: congestion,
        traffic_status:   TrafficStatus::from_congestion(congestion),
    }
}
