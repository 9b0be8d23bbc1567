//! The fixed location set.
//!
//! # Design
//!
//! Locations are an enumerated, immutable set defined at startup — they are
//! never created or destroyed at runtime.  `LocationRegistry` owns the
//! name → coordinate table and hands out `LocationId` indices; everything
//! downstream (route table keys, samples, recommendations) carries the
//! compact ID and resolves back to the name only at the presentation edge.
//!
//! There is deliberately no mutation API: once built, the registry is safe
//! for unlimited concurrent readers.

use std::fmt;

use crate::{AdvisorError, GeoPoint};

/// Index of a location in the registry.  The inner integer is `pub` to allow
/// direct indexing into the registry's arrays via `id.0 as usize`, but
/// callers should prefer the `.index()` helper for clarity.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LocationId(pub u16);

impl LocationId {
    /// Cast to `usize` for direct use as an array index.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for LocationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LocationId({})", self.0)
    }
}

// ── Registry ──────────────────────────────────────────────────────────────────

/// The default demo location set: 25 named points with fixed coordinates.
const DEMO_LOCATIONS: &[(&str, GeoPoint)] = &[
    ("Downtown",               GeoPoint::new(40.7128, -74.0060)),
    ("Airport",                GeoPoint::new(40.6892, -73.8844)),
    ("Business District",      GeoPoint::new(40.7589, -73.9851)),
    ("University",             GeoPoint::new(40.7282, -73.9942)),
    ("Residential Area A",     GeoPoint::new(40.7505, -73.9934)),
    ("Shopping Mall",          GeoPoint::new(40.7505, -73.9956)),
    ("Hospital",               GeoPoint::new(40.7831, -73.9712)),
    ("Stadium",                GeoPoint::new(40.8176, -73.9782)),
    ("Beach",                  GeoPoint::new(40.5897, -73.9497)),
    ("Residential Area B",     GeoPoint::new(40.7648, -73.9808)),
    ("Financial District",     GeoPoint::new(40.7074, -74.0113)),
    ("Tech Hub",               GeoPoint::new(40.7419, -73.9891)),
    ("Industrial Zone",        GeoPoint::new(40.6602, -73.8370)),
    ("Port Area",              GeoPoint::new(40.6643, -74.0431)),
    ("Suburban Mall",          GeoPoint::new(40.7282, -73.7949)),
    ("Medical Center",         GeoPoint::new(40.7899, -73.9441)),
    ("Convention Center",      GeoPoint::new(40.7505, -73.9934)),
    ("Train Station",          GeoPoint::new(40.7520, -73.9775)),
    ("Bus Terminal",           GeoPoint::new(40.7589, -73.9899)),
    ("City Park",              GeoPoint::new(40.7682, -73.9816)),
    ("Entertainment District", GeoPoint::new(40.7580, -73.9855)),
    ("Historic District",      GeoPoint::new(40.7033, -74.0170)),
    ("Waterfront",             GeoPoint::new(40.7407, -74.0041)),
    ("Government Center",      GeoPoint::new(40.7128, -74.0059)),
    ("Art District",           GeoPoint::new(40.7505, -73.9944)),
];

/// Immutable name → coordinate table, built once at startup.
///
/// Lookup by name is a linear scan — the set is 25 entries, and resolution
/// happens once per request, so an index structure would buy nothing.
#[derive(Debug, Clone)]
pub struct LocationRegistry {
    names:  Vec<String>,
    coords: Vec<GeoPoint>,
}

impl LocationRegistry {
    /// Build the registry from the fixed demo location set.
    pub fn demo() -> Self {
        Self::from_entries(DEMO_LOCATIONS.iter().map(|&(n, p)| (n.to_string(), p)))
    }

    /// Build from arbitrary `(name, coordinate)` entries, in order.
    pub fn from_entries(entries: impl IntoIterator<Item = (String, GeoPoint)>) -> Self {
        let (names, coords) = entries.into_iter().unzip();
        Self { names, coords }
    }

    /// Number of locations.
    #[inline]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Resolve a location name to its ID.
    pub fn resolve(&self, name: &str) -> Result<LocationId, AdvisorError> {
        self.names
            .iter()
            .position(|n| n == name)
            .map(|i| LocationId(i as u16))
            .ok_or_else(|| AdvisorError::UnknownLocation(name.to_string()))
    }

    /// The name of `id`.
    ///
    /// # Panics
    /// Panics if `id` did not come from this registry.
    #[inline]
    pub fn name(&self, id: LocationId) -> &str {
        &self.names[id.index()]
    }

    /// The fixed coordinate of `id`.
    #[inline]
    pub fn coords(&self, id: LocationId) -> GeoPoint {
        self.coords[id.index()]
    }

    /// Iterate all `(id, name)` pairs in registry order.
    pub fn iter(&self) -> impl Iterator<Item = (LocationId, &str)> {
        self.names
            .iter()
            .enumerate()
            .map(|(i, n)| (LocationId(i as u16), n.as_str()))
    }
}
