//! Plain data row type written by the CSV backend.

use ta_core::LocationRegistry;
use ta_engine::RouteSample;

/// One route-table entry with location IDs resolved back to names.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteSampleRow {
    pub source:           String,
    pub destination:      String,
    pub distance_km:      f64,
    pub hour:             u8,
    pub base_time_min:    f64,
    pub congestion_level: f64,
    pub travel_time_min:  f64,
    pub speed_kmh:        f64,
    pub traffic_status:   &'static str,
}

impl RouteSampleRow {
    /// Flatten a sample, resolving its location IDs against `registry`.
    pub fn from_sample(sample: &RouteSample, registry: &LocationRegistry) -> Self {
        Self {
            source:           registry.name(sample.source).to_string(),
            destination:      registry.name(sample.destination).to_string(),
            distance_km:      sample.distance_km,
            hour:             sample.hour.get(),
            base_time_min:    sample.base_time_min,
            congestion_level: sample.congestion_level,
            travel_time_min:  sample.travel_time_min,
            speed_kmh:        sample.speed_kmh,
            traffic_status:   sample.traffic_status.as_str(),
        }
    }
}
