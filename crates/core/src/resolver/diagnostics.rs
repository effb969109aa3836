// Diagnostic types for time-slot resolution tracing
// Defines ResolutionResult, ResolutionDiagnostic, and related types

use serde::{Deserialize, Serialize};

use crate::model::{ResolvedPeriod, WindowCategory};

/// Result of a resolution: the period plus how it was reached.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResolutionResult {
    pub period: ResolvedPeriod,
    pub diagnostic: ResolutionDiagnostic,
}

/// Diagnostic information for troubleshooting window configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResolutionDiagnostic {
    /// The "HH:MM" string the resolver evaluated against.
    pub evaluated_at: String,
    pub evaluated_windows: Vec<WindowDiagnostic>,
    #[serde(default)]
    pub legacy: Option<LegacyDiagnostic>,
    pub outcome: ResolutionOutcome,
}

/// Per-window evaluation details.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WindowDiagnostic {
    pub category: WindowCategory,
    pub matched: bool,
    pub reason: String,
}

/// Evaluation of the two-range legacy timing record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LegacyDiagnostic {
    pub morning_matched: bool,
    pub evening_matched: bool,
    pub reason: String,
}

/// How the resolution concluded.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ResolutionOutcome {
    /// An allday window short-circuited everything else.
    AllDayOverride,
    /// A configured window contained the current time.
    WindowMatch,
    /// No window matched; the legacy timing record decided the period.
    LegacyFallback,
    Closed,
}

impl ResolutionDiagnostic {
    pub fn new(evaluated_at: String) -> Self {
        Self {
            evaluated_at,
            evaluated_windows: Vec::new(),
            legacy: None,
            outcome: ResolutionOutcome::Closed,
        }
    }

    pub fn add_window_diagnostic(&mut self, diagnostic: WindowDiagnostic) {
        self.evaluated_windows.push(diagnostic);
    }

    pub fn set_outcome(&mut self, outcome: ResolutionOutcome) {
        self.outcome = outcome;
    }

    pub fn set_legacy(&mut self, legacy: LegacyDiagnostic) {
        self.legacy = Some(legacy);
    }
}

impl WindowDiagnostic {
    pub fn matched(category: WindowCategory, reason: String) -> Self {
        Self {
            category,
            matched: true,
            reason,
        }
    }

    pub fn not_matched(category: WindowCategory, reason: String) -> Self {
        Self {
            category,
            matched: false,
            reason,
        }
    }

    /// An earlier window already matched; declaration order wins ties.
    pub fn skipped(category: WindowCategory) -> Self {
        Self {
            category,
            matched: false,
            reason: "earlier window already matched (window not evaluated)".to_string(),
        }
    }
}

/// Format a stable per-window reason string for diagnostics.
pub fn format_window_reason(start: &str, end: &str, now: &str, matched: bool) -> String {
    if matched {
        format!("{start}-{end} contains {now}")
    } else {
        format!("{start}-{end} does not contain {now}")
    }
}
