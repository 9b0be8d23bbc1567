//! The advisor: owns the registry and estimator, assembles recommendations.

use ta_core::{AdvisorResult, AdvisorRng, HourOfDay, LocationRegistry};
use ta_engine::{RouteEstimate, RouteEstimator, RouteTable};

use crate::recommendation::{
    AlternativeOption, EnvironmentalImpact, PrimaryRecommendation, Recommendation,
    SustainabilityInsights, TravelMetrics,
};
use crate::request::AdvisoryRequest;

/// Orchestrates one advisory request end to end.
///
/// Built once at process startup and read-only afterwards: `recommend` takes
/// `&self`, and the caller supplies the per-request random source.  Request
/// handlers can therefore share one advisor without locking.
#[derive(Debug, Clone)]
pub struct TrafficAdvisor {
    registry:  LocationRegistry,
    estimator: RouteEstimator,
}

impl TrafficAdvisor {
    pub fn new(registry: LocationRegistry, estimator: RouteEstimator) -> Self {
        Self { registry, estimator }
    }

    /// Build an advisor over the demo location set with a table generated
    /// from `seed`.
    pub fn with_seed(seed: u64) -> AdvisorResult<Self> {
        let registry = LocationRegistry::demo();
        let table = RouteTable::generate(&registry, seed)?;
        Ok(Self::new(registry, RouteEstimator::new(table)))
    }

    /// The location set this advisor answers for.
    #[inline]
    pub fn locations(&self) -> &LocationRegistry {
        &self.registry
    }

    /// The underlying estimator (for table export and inspection).
    #[inline]
    pub fn estimator(&self) -> &RouteEstimator {
        &self.estimator
    }

    /// Validate `request`, run the estimator, and assemble the full
    /// recommendation record.
    pub fn recommend(
        &self,
        request: &AdvisoryRequest,
        rng: &mut AdvisorRng,
    ) -> AdvisorResult<Recommendation> {
        let resolved = request.resolve(&self.registry)?;
        let estimate =
            self.estimator
                .estimate(resolved.source, resolved.destination, resolved.hour, rng);
        Ok(self.assemble(&estimate, resolved.hour))
    }

    // ── Assembly ──────────────────────────────────────────────────────────

    fn assemble(&self, estimate: &RouteEstimate, hour: HourOfDay) -> Recommendation {
        let primary = &estimate.primary;
        let source = self.registry.name(primary.source);
        let destination = self.registry.name(primary.destination);

        let fuel = round2(estimate.fuel_l);
        let co2 = round2(estimate.co2_kg);

        let alternative_options = estimate
            .alternatives
            .iter()
            .map(|alt| AlternativeOption {
                departure_time:   alt.hour.to_string(),
                travel_time_min:  alt.travel_time_min,
                traffic_status:   alt.traffic_status.as_str(),
                congestion_level: alt.congestion_level,
            })
            .collect();

        let traffic_insights = vec![
            format!(
                "Current traffic level is {} with {}% congestion",
                primary.traffic_status.as_lower(),
                primary.congestion_pct()
            ),
            format!("Average speed expected: {:.0} km/h on this route", primary.speed_kmh),
            format!("Expected delay due to traffic: {:.1} minutes", primary.delay_min()),
            format!(
                "This route will take {:.0} min vs {:.0} min in ideal conditions",
                primary.travel_time_min, primary.base_time_min
            ),
            "Best time to travel: Early morning (5-7 AM) or late evening (8-10 PM)".to_string(),
            "Peak congestion hours to avoid: 8-10 AM and 5-7 PM".to_string(),
            format!("Distance to cover: {} km", primary.distance_km),
        ];

        let improvement_opportunities = vec![
            format!("Fuel consumption: ~{:.1}L for this journey", estimate.fuel_l),
            format!("CO2 emissions: ~{:.1}kg carbon footprint", estimate.co2_kg),
            "Consider carpooling to reduce emissions by 50%".to_string(),
            format!("Public transport could save up to {:.1}kg CO2", estimate.co2_kg * 0.7),
        ];

        Recommendation {
            primary_recommendation: PrimaryRecommendation {
                route_description: format!("{source} to {destination}"),
                recommended_departure: hour.to_string(),
                travel_metrics: TravelMetrics {
                    distance_km:               primary.distance_km,
                    estimated_travel_time_min: primary.travel_time_min,
                    traffic_level:             primary.traffic_status.as_lower(),
                    speed_kmh:                 primary.speed_kmh,
                },
                environmental_impact: EnvironmentalImpact {
                    fuel_consumption_l: fuel,
                    co2_emission_kg:    co2,
                },
                recommendation_strength: if primary.congestion_level < 0.5 {
                    "High"
                } else {
                    "Medium"
                },
            },
            alternative_options,
            traffic_insights,
            sustainability_insights: SustainabilityInsights { improvement_opportunities },
        }
    }
}

#[inline]
fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}
