//! `ta-advice` — turns raw advisory requests into full recommendations.
//!
//! # Crate layout
//!
//! | Module             | Contents                                              |
//! |--------------------|-------------------------------------------------------|
//! | [`request`]        | `AdvisoryRequest` — user input, validation, resolution|
//! | [`recommendation`] | Serializable response record                          |
//! | [`advisor`]        | `TrafficAdvisor` — registry + estimator orchestration |
//!
//! This is the only crate with always-on serde (the request and response are
//! JSON shapes) and the only one that touches wall-clock time (the
//! current-local-hour default when no departure time is given).

pub mod advisor;
pub mod recommendation;
pub mod request;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use advisor::TrafficAdvisor;
pub use recommendation::{
    AlternativeOption, EnvironmentalImpact, PrimaryRecommendation, Recommendation,
    SustainabilityInsights, TravelMetrics,
};
pub use request::AdvisoryRequest;
