use anyhow::Result;
use menucraft_core::resolve;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::comparator::{compare_cases, CaseMismatch, CaseOutcome};
use super::parser::parse_scenario;
use super::scenario::Scenario;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TestStatus {
    Pass,
    Fail,
    Error,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ErrorType {
    ParseError,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TestErrorDetail {
    pub error_type: ErrorType,
    pub message: String,
    #[serde(default)]
    pub details: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TestResult {
    pub scenario_name: String,
    pub status: TestStatus,
    pub case_mismatches: Vec<CaseMismatch>,
    #[serde(default)]
    pub error: Option<TestErrorDetail>,
    /// Actual per-case outcomes, kept when the scenario failed so they can be
    /// snapshotted next to the scenario file.
    #[serde(default)]
    pub actual_snapshot: Option<Vec<CaseOutcome>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SuiteResult {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub errors: usize,
    pub results: Vec<TestResult>,
}

/// Execute a single test scenario. The resolver itself cannot fail, so the
/// only error path is scenario parsing, handled by the caller.
pub fn execute_scenario(scenario: &Scenario) -> TestResult {
    let outcomes: Vec<CaseOutcome> = scenario
        .cases
        .iter()
        .map(|case| {
            let result = resolve(&scenario.request_at(&case.at));
            CaseOutcome {
                at: case.at.clone(),
                expected: case.expect,
                actual: result.period,
                outcome: result.diagnostic.outcome,
            }
        })
        .collect();

    let case_mismatches = compare_cases(&outcomes);
    let status = if case_mismatches.is_empty() {
        TestStatus::Pass
    } else {
        TestStatus::Fail
    };

    TestResult {
        scenario_name: scenario.name.clone(),
        status,
        case_mismatches,
        error: None,
        actual_snapshot: (status == TestStatus::Fail).then_some(outcomes),
    }
}

/// Execute every scenario in the list, turning parse failures into error
/// results rather than aborting the suite.
pub fn execute_suite(scenarios: &[PathBuf]) -> Result<SuiteResult> {
    let mut results = Vec::with_capacity(scenarios.len());

    for path in scenarios {
        let result = match parse_scenario(path) {
            Ok(scenario) => execute_scenario(&scenario),
            Err(error) => TestResult {
                scenario_name: path.display().to_string(),
                status: TestStatus::Error,
                case_mismatches: vec![],
                error: Some(TestErrorDetail {
                    error_type: ErrorType::ParseError,
                    message: error.to_string(),
                    details: Some(format!("{:?}", error)),
                }),
                actual_snapshot: None,
            },
        };
        results.push(result);
    }

    let passed = results
        .iter()
        .filter(|r| r.status == TestStatus::Pass)
        .count();
    let failed = results
        .iter()
        .filter(|r| r.status == TestStatus::Fail)
        .count();
    let errors = results
        .iter()
        .filter(|r| r.status == TestStatus::Error)
        .count();

    Ok(SuiteResult {
        total: results.len(),
        passed,
        failed,
        errors,
        results,
    })
}

/// Find every .yaml/.yml scenario under a directory, sorted for stable runs.
pub fn discover_scenarios(suite_path: &Path) -> Result<Vec<PathBuf>> {
    let mut scenarios = Vec::new();

    for entry in WalkDir::new(suite_path).into_iter().filter_map(|e| e.ok()) {
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml") | Some("yml") => scenarios.push(path.to_path_buf()),
            _ => {}
        }
    }

    scenarios.sort();
    Ok(scenarios)
}
