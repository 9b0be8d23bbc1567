//! `ta-engine` — the synthetic traffic/route estimation engine.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                       |
//! |----------------|----------------------------------------------------------------|
//! | [`congestion`] | `CongestionBand` — hour → sampling band                        |
//! | [`status`]     | `TrafficStatus` — congestion → qualitative label               |
//! | [`sample`]     | `RouteSample` — one synthesized estimate for a pair and hour   |
//! | [`emissions`]  | Fuel/CO2 derivation constants and helpers                      |
//! | [`table`]      | `RouteTable` — precomputed samples for common pairs/key hours  |
//! | [`estimator`]  | `RouteEstimator` — lookup-or-synthesize + alternatives         |
//!
//! # Estimation model
//!
//! There is no live data and no search: congestion is drawn uniformly from
//! one of four hour-keyed bands, and everything else is closed-form
//! arithmetic on top of it:
//!
//! ```text
//! base_time_min   = distance_km × 2.0
//! travel_time_min = base_time_min × (1 + congestion × 0.5)
//! speed_kmh       = distance_km / (travel_time_min / 60)
//! ```
//!
//! A small table of samples for common route pairs at key hours is generated
//! once from a seed and is immutable afterwards; any other `(source,
//! destination, hour)` triple is synthesized per call with fresh draws and
//! never cached.  All randomness flows through the caller-supplied
//! [`AdvisorRng`][ta_core::AdvisorRng], so the table — and with a fixed
//! per-request stream, every estimate — is reproducible from the seed.

pub mod congestion;
pub mod emissions;
pub mod estimator;
pub mod sample;
pub mod status;
pub mod table;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use congestion::CongestionBand;
pub use estimator::{AlternativeSample, RouteEstimate, RouteEstimator};
pub use sample::{DISTANCE_KM_RANGE, RouteSample};
pub use status::TrafficStatus;
pub use table::{KEY_HOURS, ROUTE_PAIRS, RouteTable};
