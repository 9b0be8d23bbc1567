//! One synthesized route estimate for a location pair and hour.

use std::ops::Range;

use ta_core::{AdvisorRng, HourOfDay, LocationId};

use crate::congestion;
use crate::status::TrafficStatus;

/// Range from which a route-pair's distance is drawn, in kilometres.
pub const DISTANCE_KM_RANGE: Range<f64> = 10.0..40.0;

/// A derived traffic record for `(source, destination, hour)`.
///
/// All metric fields are rounded at construction time — distances, times,
/// and speed to one decimal, congestion to two — so a stored sample rereads
/// identically however often it is looked up.  Derivations:
///
/// ```text
/// base_time_min   = distance_km × 2.0
/// travel_time_min = base_time_min × (1 + congestion × 0.5)
/// speed_kmh       = distance_km / (travel_time_min / 60)
/// ```
///
/// Since congestion ≥ 0, `travel_time_min ≥ base_time_min` always, and for a
/// fixed distance the speed decreases monotonically as congestion grows.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouteSample {
    pub source:           LocationId,
    pub destination:      LocationId,
    pub hour:             HourOfDay,
    pub distance_km:      f64,
    pub base_time_min:    f64,
    pub congestion_level: f64,
    pub travel_time_min:  f64,
    pub speed_kmh:        f64,
    pub traffic_status:   TrafficStatus,
}

impl RouteSample {
    /// Build a sample from an explicit distance and congestion level.
    ///
    /// This is the deterministic core of the estimator: no randomness, all
    /// derived fields computed from the (rounded) inputs.  Random paths call
    /// [`draw`] instead.
    ///
    /// [`draw`]: RouteSample::draw
    pub fn from_parts(
        source:       LocationId,
        destination:  LocationId,
        hour:         HourOfDay,
        distance_km:  f64,
        congestion:   f64,
    ) -> Self {
        let distance_km = round1(distance_km);
        let congestion  = round2(congestion);

        let base_time_min   = round1(distance_km * 2.0);
        let travel_time_min = round1(base_time_min * (1.0 + congestion * 0.5));
        let speed_kmh       = round1(distance_km / (travel_time_min / 60.0));

        Self {
            source,
            destination,
            hour,
            distance_km,
            base_time_min,
            congestion_level: congestion,
            travel_time_min,
            speed_kmh,
            traffic_status: TrafficStatus::from_congestion(congestion),
        }
    }

    /// Build a sample with congestion drawn from the band for `hour`.
    pub fn draw(
        source:      LocationId,
        destination: LocationId,
        hour:        HourOfDay,
        distance_km: f64,
        rng:         &mut AdvisorRng,
    ) -> Self {
        let congestion = congestion::congestion_level(hour, rng);
        Self::from_parts(source, destination, hour, distance_km, congestion)
    }

    /// Extra minutes attributable to traffic: `travel_time_min - base_time_min`.
    #[inline]
    pub fn delay_min(&self) -> f64 {
        self.travel_time_min - self.base_time_min
    }

    /// Congestion as a whole percentage, e.g. 0.78 → 78.
    #[inline]
    pub fn congestion_pct(&self) -> u32 {
        (self.congestion_level * 100.0) as u32
    }
}

// ── Rounding helpers ──────────────────────────────────────────────────────────

#[inline]
pub(crate) fn round1(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}

#[inline]
pub(crate) fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}
