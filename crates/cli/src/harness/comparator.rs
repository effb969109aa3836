use menucraft_core::model::ResolvedPeriod;
use menucraft_core::resolver::diagnostics::ResolutionOutcome;
use serde::{Deserialize, Serialize};

/// One resolved case: what the scenario expected and what actually happened.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CaseOutcome {
    pub at: String,
    pub expected: ResolvedPeriod,
    pub actual: ResolvedPeriod,
    pub outcome: ResolutionOutcome,
}

/// A case whose actual period differed from the expected one.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CaseMismatch {
    pub at: String,
    pub expected: ResolvedPeriod,
    pub actual: ResolvedPeriod,
    pub outcome: ResolutionOutcome,
}

/// Collect the cases that missed their expectation, in case order.
pub fn compare_cases(outcomes: &[CaseOutcome]) -> Vec<CaseMismatch> {
    outcomes
        .iter()
        .filter(|outcome| outcome.expected != outcome.actual)
        .map(|outcome| CaseMismatch {
            at: outcome.at.clone(),
            expected: outcome.expected,
            actual: outcome.actual,
            outcome: outcome.outcome,
        })
        .collect()
}
