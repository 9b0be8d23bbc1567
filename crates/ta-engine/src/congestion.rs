//! Hour-keyed congestion bands.
//!
//! Every hour of the day maps to exactly one of four disjoint bands; the
//! congestion level for that hour is then drawn uniformly within the band's
//! half-open range.  The union of all bands is [0.1, 0.9), so a sampled
//! level never reaches the extremes of the nominal [0, 1) congestion scale.

use ta_core::{AdvisorRng, HourOfDay};

/// The four congestion regimes of a synthetic weekday.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CongestionBand {
    /// Rush hours {7, 8, 17, 18} — uniform(0.7, 0.9).
    Peak,
    /// Hours adjacent to rush {6, 9, 16, 19} — uniform(0.5, 0.7).
    Shoulder,
    /// Midday 10–15 inclusive — uniform(0.3, 0.5).
    Midday,
    /// Everything else (night, early morning, late evening) — uniform(0.1, 0.3).
    OffPeak,
}

impl CongestionBand {
    /// The band `hour` falls in.  Total — every hour maps to exactly one band.
    pub fn for_hour(hour: HourOfDay) -> CongestionBand {
        match hour.get() {
            7 | 8 | 17 | 18 => CongestionBand::Peak,
            6 | 9 | 16 | 19 => CongestionBand::Shoulder,
            10..=15         => CongestionBand::Midday,
            _               => CongestionBand::OffPeak,
        }
    }

    /// The band's half-open sampling range `[low, high)`.
    pub fn bounds(self) -> (f64, f64) {
        match self {
            CongestionBand::Peak     => (0.7, 0.9),
            CongestionBand::Shoulder => (0.5, 0.7),
            CongestionBand::Midday   => (0.3, 0.5),
            CongestionBand::OffPeak  => (0.1, 0.3),
        }
    }

    /// Draw a congestion level uniformly within the band.
    pub fn sample(self, rng: &mut AdvisorRng) -> f64 {
        let (low, high) = self.bounds();
        rng.gen_range(low..high)
    }

    /// Human-readable label, useful for CSV column values and demo tables.
    pub fn as_str(self) -> &'static str {
        match self {
            CongestionBand::Peak     => "peak",
            CongestionBand::Shoulder => "shoulder",
            CongestionBand::Midday   => "midday",
            CongestionBand::OffPeak  => "off-peak",
        }
    }
}

impl std::fmt::Display for CongestionBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sample a congestion level for `hour` — shorthand for
/// `CongestionBand::for_hour(hour).sample(rng)`.
#[inline]
pub fn congestion_level(hour: HourOfDay, rng: &mut AdvisorRng) -> f64 {
    CongestionBand::for_hour(hour).sample(rng)
}
