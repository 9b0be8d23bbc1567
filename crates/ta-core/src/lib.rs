//! `ta-core` — foundational types for the `traffic-advisor` engine.
//!
//! This crate is a dependency of every other `ta-*` crate.  It intentionally
//! has no `ta-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module        | Contents                                              |
//! |---------------|-------------------------------------------------------|
//! | [`location`]  | `LocationId`, `LocationRegistry`                      |
//! | [`geo`]       | `GeoPoint`, haversine distance                        |
//! | [`hour`]      | `HourOfDay` — wrapping clock hour with `HH:MM` parse  |
//! | [`rng`]       | `AdvisorRng` — seeded, injectable random source       |
//! | [`error`]     | `AdvisorError`, `AdvisorResult`                       |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod error;
pub mod geo;
pub mod hour;
pub mod location;
pub mod rng;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{AdvisorError, AdvisorResult};
pub use geo::GeoPoint;
pub use hour::HourOfDay;
pub use location::{LocationId, LocationRegistry};
pub use rng::AdvisorRng;
