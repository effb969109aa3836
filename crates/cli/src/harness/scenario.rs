use anyhow::{bail, Result};
use menucraft_core::model::{LegacyTimings, ResolvedPeriod, TimeWindow, WindowCategory};
use menucraft_core::ResolutionRequest;
use serde::{Deserialize, Serialize};

/// A resolver test scenario: one window configuration, many timed cases.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scenario {
    /// Human-readable scenario name
    pub name: String,

    /// Narrative description of what is being tested
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Configured windows, in declaration order
    #[serde(default)]
    pub windows: Vec<WindowDef>,

    /// Optional legacy morning/evening timing record
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub legacy_timings: Option<LegacyTimings>,

    /// Times to resolve and the period expected for each
    pub cases: Vec<CaseDef>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowDef {
    pub category: WindowCategory,
    #[serde(default)]
    pub start: String,
    #[serde(default)]
    pub end: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaseDef {
    pub at: String,
    pub expect: ResolvedPeriod,
}

impl Scenario {
    /// Validate the scenario structure
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            bail!("Scenario must have a name");
        }
        if self.cases.is_empty() {
            bail!("Scenario '{}' must have at least one case", self.name);
        }
        // Window edges are deliberately NOT validated beyond presence: the
        // resolver's leniency toward malformed times is itself under test.
        for window in &self.windows {
            if !window.category.is_all_day()
                && window.start.trim().is_empty()
                && window.end.trim().is_empty()
            {
                bail!(
                    "Scenario '{}': window '{}' needs start and end times",
                    self.name,
                    window.category
                );
            }
        }
        Ok(())
    }

    /// Build the resolver request for one case time.
    pub fn request_at(&self, at: &str) -> ResolutionRequest {
        let windows = self
            .windows
            .iter()
            .map(|window| {
                TimeWindow::new(window.category, window.start.clone(), window.end.clone())
            })
            .collect();

        let mut request = ResolutionRequest::at(at).with_windows(windows);
        if let Some(timings) = &self.legacy_timings {
            request = request.with_legacy_timings(timings.clone());
        }
        request
    }
}
