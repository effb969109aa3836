// Resolution request types
// The resolver input: a wall-clock time plus the restaurant's configured
// windows and optional legacy timing record.

use serde::{Deserialize, Serialize};

use crate::model::{LegacyTimings, Restaurant, TimeWindow};

/// Input to the time-slot resolver.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResolutionRequest {
    /// Current wall-clock time as "HH:MM".
    pub now: String,
    /// Configured windows, evaluated in declaration order.
    #[serde(default)]
    pub windows: Vec<TimeWindow>,
    /// Two-range fallback for restaurants without configured windows.
    #[serde(default)]
    pub legacy_timings: Option<LegacyTimings>,
}

impl ResolutionRequest {
    pub fn at(now: impl Into<String>) -> Self {
        Self {
            now: now.into(),
            windows: Vec::new(),
            legacy_timings: None,
        }
    }

    pub fn with_windows(mut self, windows: Vec<TimeWindow>) -> Self {
        self.windows = windows;
        self
    }

    pub fn with_legacy_timings(mut self, timings: LegacyTimings) -> Self {
        self.legacy_timings = Some(timings);
        self
    }

    /// Build a request from a restaurant record: its windows plus the legacy
    /// timing record, whichever are present.
    pub fn for_restaurant(now: impl Into<String>, restaurant: &Restaurant) -> Self {
        Self {
            now: now.into(),
            windows: restaurant.time_slots.clone(),
            legacy_timings: restaurant.timings.clone(),
        }
    }
}
