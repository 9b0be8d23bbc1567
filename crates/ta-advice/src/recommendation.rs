//! The serializable recommendation record.
//!
//! Field names are the wire contract — they match the JSON the original
//! advisory service emitted, so a frontend built against it deserializes
//! this output unchanged.

use serde::Serialize;

/// A complete advisory response.
#[derive(Debug, Clone, Serialize)]
pub struct Recommendation {
    pub primary_recommendation: PrimaryRecommendation,

    /// Departure options one hour earlier and one hour later.
    pub alternative_options: Vec<AlternativeOption>,

    /// Exactly 7 human-readable insight strings.
    pub traffic_insights: Vec<String>,

    pub sustainability_insights: SustainabilityInsights,
}

#[derive(Debug, Clone, Serialize)]
pub struct PrimaryRecommendation {
    /// E.g. `"Downtown to Airport"`.
    pub route_description: String,

    /// Departure on the hour, `"HH:00"`.
    pub recommended_departure: String,

    pub travel_metrics: TravelMetrics,

    pub environmental_impact: EnvironmentalImpact,

    /// `"High"` when congestion < 0.5, otherwise `"Medium"`.
    pub recommendation_strength: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct TravelMetrics {
    pub distance_km: f64,
    pub estimated_travel_time_min: f64,
    /// Lowercase status label (`"low"` … `"severe"`).
    pub traffic_level: &'static str,
    pub speed_kmh: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct EnvironmentalImpact {
    /// Litres, rounded to 2 decimals for display.
    pub fuel_consumption_l: f64,
    /// Kilograms, rounded to 2 decimals for display.
    pub co2_emission_kg: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct AlternativeOption {
    /// Departure on the hour, `"HH:00"`.
    pub departure_time: String,
    pub travel_time_min: f64,
    /// Title-case status label (`"Low"` … `"Severe"`).
    pub traffic_status: &'static str,
    pub congestion_level: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct SustainabilityInsights {
    pub improvement_opportunities: Vec<String>,
}
