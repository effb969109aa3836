use anyhow::{bail, Result};
use clap::Parser;
use std::path::{Path, PathBuf};

use crate::harness::{
    discover_scenarios, execute_scenario, execute_suite as run_suite, parse_scenario,
    report_result, report_result_json, report_suite_result, report_suite_result_json,
    report_suite_result_junit, save_snapshot, ErrorType, OutputFormat, SuiteResult,
    TestErrorDetail, TestResult, TestStatus,
};

const DEFAULT_SUITE_DIR: &str = "tests/scenarios";

enum ExecutionTarget<'a> {
    Suite(&'a Path),
    Single(&'a Path),
}

/// Execute resolver test scenarios
#[derive(Debug, Parser)]
pub struct TestCommand {
    /// Path to the test scenario YAML file (for single scenario mode)
    #[arg(value_name = "SCENARIO")]
    pub scenario_path: Option<PathBuf>,

    /// Execute all scenarios in directory (suite mode)
    #[arg(long, value_name = "DIR")]
    pub suite: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Disable snapshot on failure
    #[arg(long)]
    pub no_snapshot: bool,

    /// Output format (human, json, junit)
    #[arg(long, value_name = "FORMAT", default_value = "human")]
    pub output: String,
}

impl TestCommand {
    pub fn execute(&self) -> Result<i32> {
        match self.execution_target() {
            ExecutionTarget::Suite(suite_path) => self.execute_suite(suite_path),
            ExecutionTarget::Single(scenario_path) => self.execute_single(scenario_path),
        }
    }

    fn execution_target(&self) -> ExecutionTarget<'_> {
        if let Some(suite_path) = &self.suite {
            ExecutionTarget::Suite(suite_path)
        } else if let Some(scenario_path) = &self.scenario_path {
            ExecutionTarget::Single(scenario_path)
        } else {
            ExecutionTarget::Suite(Path::new(DEFAULT_SUITE_DIR))
        }
    }

    fn execute_single(&self, scenario_path: &Path) -> Result<i32> {
        let output_format = self.output_format()?;

        // Parse scenario
        let scenario = match parse_scenario(scenario_path) {
            Ok(scenario) => scenario,
            Err(error) => {
                let result = build_error_result(scenario_path.display().to_string(), error);
                self.report_single(&result, output_format)?;
                return Ok(2);
            }
        };

        // Execute and report
        let result = execute_scenario(&scenario);
        self.report_single(&result, output_format)?;

        // Save snapshot if needed
        if !self.no_snapshot && result.status == TestStatus::Fail {
            save_snapshot(&result, scenario_path)?;
        }

        Ok(match result.status {
            TestStatus::Pass => 0,
            TestStatus::Fail => 1,
            TestStatus::Error => 2,
        })
    }

    fn execute_suite(&self, suite_path: &Path) -> Result<i32> {
        let output_format = self.output_format()?;

        // Discover scenarios
        let scenarios = discover_scenarios(suite_path)?;

        if scenarios.is_empty() {
            eprintln!("No test scenarios found in: {}", suite_path.display());
            return Ok(2);
        }

        if should_print_discovery_banner(output_format) {
            println!(
                "Discovered {} scenarios in: {}",
                scenarios.len(),
                suite_path.display()
            );
            println!();
        }

        // Execute suite
        let suite_result = run_suite(&scenarios)?;

        // Report results
        self.report_suite(&suite_result, output_format)?;

        if !self.no_snapshot {
            self.save_suite_snapshots(&suite_result, &scenarios)?;
        }

        // Return exit code based on results
        Ok(if suite_result.errors > 0 {
            2
        } else if suite_result.failed > 0 {
            1
        } else {
            0
        })
    }

    fn output_format(&self) -> Result<OutputFormat> {
        match self.output.to_ascii_lowercase().as_str() {
            "human" => Ok(OutputFormat::Human),
            "json" => Ok(OutputFormat::Json),
            "junit" => Ok(OutputFormat::Junit),
            other => bail!("Unsupported output format: {other}. Use human, json, or junit."),
        }
    }

    fn report_single(&self, result: &TestResult, output_format: OutputFormat) -> Result<()> {
        match output_format {
            OutputFormat::Human => report_result(result, self.verbose),
            OutputFormat::Json => report_result_json(result)?,
            OutputFormat::Junit => {
                let suite_result = SuiteResult {
                    total: 1,
                    passed: usize::from(result.status == TestStatus::Pass),
                    failed: usize::from(result.status == TestStatus::Fail),
                    errors: usize::from(result.status == TestStatus::Error),
                    results: vec![result.clone()],
                };
                let mut stdout = std::io::stdout();
                report_suite_result_junit(&suite_result, &mut stdout)?;
            }
        }
        Ok(())
    }

    fn report_suite(&self, suite_result: &SuiteResult, output_format: OutputFormat) -> Result<()> {
        match output_format {
            OutputFormat::Human => report_suite_result(suite_result),
            OutputFormat::Json => report_suite_result_json(suite_result)?,
            OutputFormat::Junit => {
                let mut stdout = std::io::stdout();
                report_suite_result_junit(suite_result, &mut stdout)?;
            }
        }
        Ok(())
    }

    fn save_suite_snapshots(
        &self,
        suite_result: &SuiteResult,
        scenarios: &[PathBuf],
    ) -> Result<()> {
        for (scenario_path, result) in scenarios.iter().zip(suite_result.results.iter()) {
            if result.status == TestStatus::Fail {
                save_snapshot(result, scenario_path)?;
            }
        }

        Ok(())
    }
}

fn should_print_discovery_banner(output_format: OutputFormat) -> bool {
    matches!(output_format, OutputFormat::Human)
}

fn build_error_result(scenario_name: String, error: anyhow::Error) -> TestResult {
    TestResult {
        scenario_name,
        status: TestStatus::Error,
        case_mismatches: vec![],
        error: Some(TestErrorDetail {
            error_type: ErrorType::ParseError,
            message: error.to_string(),
            details: Some(format!("{:?}", error)),
        }),
        actual_snapshot: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    const DINNER_SCENARIO: &str = r#"
name: "dinner-window"
windows:
  - category: dinner
    start: "19:00"
    end: "23:00"
cases:
  - at: "20:00"
    expect: evening
  - at: "12:00"
    expect: closed
"#;

    const FAILING_SCENARIO: &str = r#"
name: "wrong-expectation"
windows:
  - category: dinner
    start: "19:00"
    end: "23:00"
cases:
  - at: "20:00"
    expect: morning
"#;

    fn command(scenario_path: Option<PathBuf>, suite: Option<PathBuf>, output: &str) -> TestCommand {
        TestCommand {
            scenario_path,
            suite,
            verbose: false,
            no_snapshot: true,
            output: output.to_string(),
        }
    }

    #[test]
    fn execution_target_defaults_to_suite_directory() {
        let cmd = command(None, None, "human");
        match cmd.execution_target() {
            ExecutionTarget::Suite(path) => assert_eq!(path, Path::new(DEFAULT_SUITE_DIR)),
            ExecutionTarget::Single(_) => panic!("expected suite target"),
        }
    }

    #[test]
    fn execution_target_prefers_explicit_scenario() {
        let scenario = PathBuf::from("scenario.yaml");
        let cmd = command(Some(scenario.clone()), None, "human");
        match cmd.execution_target() {
            ExecutionTarget::Single(path) => assert_eq!(path, scenario.as_path()),
            ExecutionTarget::Suite(_) => panic!("expected single target"),
        }
    }

    #[test]
    fn discovery_banner_is_only_for_human_output() {
        assert!(should_print_discovery_banner(OutputFormat::Human));
        assert!(!should_print_discovery_banner(OutputFormat::Json));
        assert!(!should_print_discovery_banner(OutputFormat::Junit));
    }

    #[test]
    fn execute_single_passing_scenario_returns_exit_code_0() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("dinner.yaml");
        fs::write(&path, DINNER_SCENARIO).unwrap();

        let cmd = command(Some(path), None, "human");
        assert_eq!(cmd.execute().unwrap(), 0);
    }

    #[test]
    fn execute_single_failing_scenario_returns_exit_code_1() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("failing.yaml");
        fs::write(&path, FAILING_SCENARIO).unwrap();

        let cmd = command(Some(path), None, "human");
        assert_eq!(cmd.execute().unwrap(), 1);
    }

    #[test]
    fn execute_single_missing_scenario_file_returns_exit_code_2() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing.yaml");

        let cmd = command(Some(path), None, "human");
        assert_eq!(cmd.execute().unwrap(), 2);
    }

    #[test]
    fn execute_single_malformed_scenario_file_returns_exit_code_2() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("invalid.yaml");
        fs::write(&path, "name: [\n").unwrap();

        let cmd = command(Some(path), None, "human");
        assert_eq!(cmd.execute().unwrap(), 2);
    }

    #[test]
    fn execute_single_supports_json_and_junit_output() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("dinner.yaml");
        fs::write(&path, DINNER_SCENARIO).unwrap();

        for output in ["json", "junit"] {
            let cmd = command(Some(path.clone()), None, output);
            assert_eq!(cmd.execute().unwrap(), 0, "{output}");
        }
    }

    #[test]
    fn execute_suite_mixes_pass_and_fail_into_exit_code_1() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("dinner.yaml"), DINNER_SCENARIO).unwrap();
        fs::write(dir.path().join("failing.yaml"), FAILING_SCENARIO).unwrap();

        let cmd = command(None, Some(dir.path().to_path_buf()), "human");
        assert_eq!(cmd.execute().unwrap(), 1);
    }

    #[test]
    fn execute_suite_with_empty_directory_returns_exit_code_2() {
        let dir = tempdir().unwrap();
        let cmd = command(None, Some(dir.path().to_path_buf()), "human");
        assert_eq!(cmd.execute().unwrap(), 2);
    }

    #[test]
    fn failing_suite_saves_snapshots_when_enabled() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("failing.yaml"), FAILING_SCENARIO).unwrap();

        let mut cmd = command(None, Some(dir.path().to_path_buf()), "human");
        cmd.no_snapshot = false;
        assert_eq!(cmd.execute().unwrap(), 1);

        let snapshot_dir = dir.path().join(".snapshots");
        assert!(snapshot_dir.exists());
        assert_eq!(fs::read_dir(snapshot_dir).unwrap().count(), 1);
    }

    #[test]
    fn unsupported_output_format_is_an_error() {
        let cmd = command(None, None, "tap");
        assert!(cmd.output_format().is_err());
    }
}
