//! Qualitative traffic status derived from a congestion level.

/// The four advisory labels shown to the user.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TrafficStatus {
    Low,
    Medium,
    High,
    Severe,
}

impl TrafficStatus {
    /// Classify a congestion level with fixed thresholds 0.3 / 0.6 / 0.8.
    ///
    /// Boundary rule: `<` is the exclusive upper bound of the lower band, so
    /// a value exactly at a threshold belongs to the **higher** band
    /// (0.3 → Medium, 0.6 → High, 0.8 → Severe).  Pure and deterministic —
    /// no randomness once the congestion level is fixed.
    pub fn from_congestion(congestion: f64) -> TrafficStatus {
        if congestion < 0.3 {
            TrafficStatus::Low
        } else if congestion < 0.6 {
            TrafficStatus::Medium
        } else if congestion < 0.8 {
            TrafficStatus::High
        } else {
            TrafficStatus::Severe
        }
    }

    /// Title-case label as stored in route samples and CSV output.
    pub fn as_str(self) -> &'static str {
        match self {
            TrafficStatus::Low    => "Low",
            TrafficStatus::Medium => "Medium",
            TrafficStatus::High   => "High",
            TrafficStatus::Severe => "Severe",
        }
    }

    /// Lowercase label as used in the recommendation's travel metrics.
    pub fn as_lower(self) -> &'static str {
        match self {
            TrafficStatus::Low    => "low",
            TrafficStatus::Medium => "medium",
            TrafficStatus::High   => "high",
            TrafficStatus::Severe => "severe",
        }
    }
}

impl std::fmt::Display for TrafficStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
