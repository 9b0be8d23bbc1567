//! Precomputed route-sample table.
//!
//! # Lifecycle
//!
//! Generated once at startup from a seed, then read-only for the process
//! lifetime — there is no insertion or refresh path, which makes the table
//! safe for unlimited concurrent readers.  Triples outside the table are
//! synthesized per call by the estimator and never stored.
//!
//! # Coverage
//!
//! 8 unordered route pairs × 2 directions × 8 key hours = 128 directional
//! entries.  Distance is drawn once per unordered pair and shared by both
//! directions; congestion is drawn independently for every directional entry.

use rustc_hash::FxHashMap;

use ta_core::{AdvisorResult, AdvisorRng, HourOfDay, LocationId, LocationRegistry};

use crate::sample::{DISTANCE_KM_RANGE, RouteSample};

/// The 8 representative hours precomputed at startup: morning rush and its
/// shoulders, midday, evening rush and its shoulders, late evening.
pub const KEY_HOURS: [HourOfDay; 8] = [
    HourOfDay::wrapping(7),
    HourOfDay::wrapping(8),
    HourOfDay::wrapping(9),
    HourOfDay::wrapping(12),
    HourOfDay::wrapping(17),
    HourOfDay::wrapping(18),
    HourOfDay::wrapping(19),
    HourOfDay::wrapping(22),
];

/// The 8 common route pairs held in the table (both directions each).
pub const ROUTE_PAIRS: [(&str, &str); 8] = [
    ("Downtown", "Airport"),
    ("Downtown", "Business District"),
    ("Downtown", "University"),
    ("Downtown", "Hospital"),
    ("Downtown", "Train Station"),
    ("Downtown", "Stadium"),
    ("Airport", "Business District"),
    ("Shopping Mall", "Residential Area A"),
];

/// Immutable map of precomputed samples keyed by `(source, destination, hour)`.
#[derive(Debug, Clone)]
pub struct RouteTable {
    samples: FxHashMap<(LocationId, LocationId, HourOfDay), RouteSample>,
}

impl RouteTable {
    /// Generate the table for [`ROUTE_PAIRS`] × [`KEY_HOURS`].
    ///
    /// Deterministic: the same registry and seed always produce an identical
    /// table.  Fails only if a pair name is missing from `registry` (the
    /// demo registry contains all of them).
    pub fn generate(registry: &LocationRegistry, seed: u64) -> AdvisorResult<Self> {
        let mut rng = AdvisorRng::new(seed);
        let mut samples = FxHashMap::default();

        for &(a, b) in &ROUTE_PAIRS {
            let a = registry.resolve(a)?;
            let b = registry.resolve(b)?;

            // One distance draw per unordered pair, shared by both directions.
            let distance_km = rng.gen_range(DISTANCE_KM_RANGE);

            for (source, destination) in [(a, b), (b, a)] {
                for hour in KEY_HOURS {
                    let sample =
                        RouteSample::draw(source, destination, hour, distance_km, &mut rng);
                    samples.insert((source, destination, hour), sample);
                }
            }
        }

        Ok(Self { samples })
    }

    /// The stored sample for a directional triple, if precomputed.
    #[inline]
    pub fn get(
        &self,
        source:      LocationId,
        destination: LocationId,
        hour:        HourOfDay,
    ) -> Option<&RouteSample> {
        self.samples.get(&(source, destination, hour))
    }

    /// Number of directional entries (128 for the default pair/hour sets).
    #[inline]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Iterate all stored samples in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = &RouteSample> {
        self.samples.values()
    }
}
