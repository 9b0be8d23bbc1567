//! The incoming advisory request and its validation.
//!
//! The original system let the form UI guarantee valid input; here the
//! library is the outermost surface, so the checks are explicit: both
//! endpoints must be known locations, they must differ, and the optional
//! departure time must parse to an hour 0–23.

use serde::Deserialize;

use ta_core::{AdvisorError, HourOfDay, LocationId, LocationRegistry};

/// A raw advisory request as submitted by a client.
#[derive(Debug, Clone, Deserialize)]
pub struct AdvisoryRequest {
    /// Source location name (must be in the registry).
    pub source: String,

    /// Destination location name (must be in the registry, ≠ source).
    pub destination: String,

    /// Preferred departure time, `"HH:MM"` or `"HH"`.  `None` means
    /// "leave now": the current local hour is used.
    #[serde(default)]
    pub preferred_time: Option<String>,
}

impl AdvisoryRequest {
    /// Convenience constructor for programmatic callers.
    pub fn new(
        source: impl Into<String>,
        destination: impl Into<String>,
        preferred_time: Option<&str>,
    ) -> Self {
        Self {
            source:         source.into(),
            destination:    destination.into(),
            preferred_time: preferred_time.map(str::to_string),
        }
    }

    /// Validate against `registry` and resolve to IDs and a departure hour.
    pub fn resolve(&self, registry: &LocationRegistry) -> Result<ResolvedRequest, AdvisorError> {
        let source = registry.resolve(&self.source)?;
        let destination = registry.resolve(&self.destination)?;
        if source == destination {
            return Err(AdvisorError::SameLocation(self.source.clone()));
        }

        let hour = match &self.preferred_time {
            Some(t) => HourOfDay::parse(t)?,
            None    => current_local_hour(),
        };

        Ok(ResolvedRequest { source, destination, hour })
    }
}

/// A request after validation: typed IDs and a concrete departure hour.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ResolvedRequest {
    pub source:      LocationId,
    pub destination: LocationId,
    pub hour:        HourOfDay,
}

/// The current local hour of day.
fn current_local_hour() -> HourOfDay {
    use chrono::Timelike;
    // Local::now().hour() is always < 24.
    HourOfDay::wrapping(chrono::Local::now().hour() as u8)
}
