use anyhow::Result;
use std::io::Write;
use std::path::Path;

use super::executor::{SuiteResult, TestResult, TestStatus};

/// Report test result in human-readable format
pub fn report_result(result: &TestResult, verbose: bool) {
    println!("Test: {}", result.scenario_name);

    match result.status {
        TestStatus::Pass => {
            println!("Status: PASS");
            println!();
            println!("✓ All cases resolved to the expected period");
        }
        TestStatus::Fail => {
            println!("Status: FAIL");
            println!();
            println!("Case Mismatches ({}):", result.case_mismatches.len());
            for (index, mismatch) in result.case_mismatches.iter().enumerate() {
                println!(
                    "  ✗ at {}: expected {}, got {}",
                    mismatch.at, mismatch.expected, mismatch.actual
                );
                if verbose {
                    println!("      outcome: {:?}", mismatch.outcome);
                } else if result.case_mismatches.len() > 5 && index == 4 {
                    println!(
                        "  ... and {} more mismatches (use --verbose to see all)",
                        result.case_mismatches.len() - 5
                    );
                    break;
                }
            }
        }
        TestStatus::Error => {
            println!("Status: ERROR");
            println!();
            if let Some(error) = &result.error {
                println!("Error: {}", error.message);
                if verbose {
                    if let Some(details) = &error.details {
                        println!();
                        println!("Details:");
                        println!("{}", details);
                    }
                }
            }
        }
    }
}

/// Report suite results in human-readable format
pub fn report_suite_result(suite_result: &SuiteResult) {
    println!("Test Suite Results");
    println!("==================");
    println!();
    println!("Total:  {}", suite_result.total);
    println!(
        "Passed: {} ({:.1}%)",
        suite_result.passed,
        percentage(suite_result.passed, suite_result.total)
    );
    println!(
        "Failed: {} ({:.1}%)",
        suite_result.failed,
        percentage(suite_result.failed, suite_result.total)
    );
    println!(
        "Errors: {} ({:.1}%)",
        suite_result.errors,
        percentage(suite_result.errors, suite_result.total)
    );
    println!();

    for result in &suite_result.results {
        let status_symbol = match result.status {
            TestStatus::Pass => "✓",
            TestStatus::Fail => "✗",
            TestStatus::Error => "⚠",
        };
        println!("{} {}", status_symbol, result.scenario_name);
    }
}

fn percentage(part: usize, total: usize) -> f64 {
    if total > 0 {
        (part as f64 / total as f64) * 100.0
    } else {
        0.0
    }
}

/// Save the actual per-case outcomes next to a failed scenario.
pub fn save_snapshot(result: &TestResult, scenario_path: &Path) -> Result<()> {
    if let Some(snapshot) = &result.actual_snapshot {
        let snapshots_dir = scenario_path
            .parent()
            .unwrap_or_else(|| Path::new("."))
            .join(".snapshots");

        std::fs::create_dir_all(&snapshots_dir)?;

        let snapshot_name = sanitize_snapshot_name(&result.scenario_name);
        let snapshot_file = snapshots_dir.join(format!("{}-actual.yaml", snapshot_name));

        let yaml = serde_yaml::to_string(snapshot)?;
        std::fs::write(&snapshot_file, yaml)?;

        println!();
        println!("Snapshot saved to: {}", snapshot_file.display());
    }

    Ok(())
}

/// Output format for test results
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Human,
    Json,
    Junit,
}

pub fn report_result_json(result: &TestResult) -> Result<()> {
    let json = serde_json::to_string_pretty(result)?;
    println!("{}", json);
    Ok(())
}

pub fn report_suite_result_json(suite_result: &SuiteResult) -> Result<()> {
    let json = serde_json::to_string_pretty(suite_result)?;
    println!("{}", json);
    Ok(())
}

pub fn report_suite_result_junit<W: Write>(
    suite_result: &SuiteResult,
    writer: &mut W,
) -> Result<()> {
    writeln!(writer, "<?xml version=\"1.0\" encoding=\"UTF-8\"?>")?;
    writeln!(
        writer,
        "<testsuites tests=\"{}\" failures=\"{}\" errors=\"{}\">",
        suite_result.total, suite_result.failed, suite_result.errors
    )?;

    writeln!(
        writer,
        "  <testsuite name=\"resolver-scenarios\" tests=\"{}\" failures=\"{}\" errors=\"{}\">",
        suite_result.total, suite_result.failed, suite_result.errors
    )?;

    for result in &suite_result.results {
        match result.status {
            TestStatus::Pass => {
                writeln!(
                    writer,
                    "    <testcase name=\"{}\"/>",
                    xml_escape(&result.scenario_name)
                )?;
            }
            TestStatus::Fail => {
                writeln!(
                    writer,
                    "    <testcase name=\"{}\">",
                    xml_escape(&result.scenario_name)
                )?;

                let failure_message = format!("{} case mismatches", result.case_mismatches.len());
                writeln!(
                    writer,
                    "      <failure message=\"{}\" type=\"TestFailure\">",
                    xml_escape(&failure_message)
                )?;
                for mismatch in &result.case_mismatches {
                    writeln!(
                        writer,
                        "{}",
                        xml_escape(&format!(
                            "at {}: expected {}, got {}",
                            mismatch.at, mismatch.expected, mismatch.actual
                        ))
                    )?;
                }
                writeln!(writer, "      </failure>")?;
                writeln!(writer, "    </testcase>")?;
            }
            TestStatus::Error => {
                writeln!(
                    writer,
                    "    <testcase name=\"{}\">",
                    xml_escape(&result.scenario_name)
                )?;

                let error_message = result
                    .error
                    .as_ref()
                    .map(|e| e.message.clone())
                    .unwrap_or_else(|| "Unknown error".to_string());

                writeln!(
                    writer,
                    "      <error message=\"{}\" type=\"ParseError\">",
                    xml_escape(&error_message)
                )?;
                writeln!(writer, "{}", xml_escape(&error_message))?;
                writeln!(writer, "      </error>")?;
                writeln!(writer, "    </testcase>")?;
            }
        }
    }

    writeln!(writer, "  </testsuite>")?;
    writeln!(writer, "</testsuites>")?;

    Ok(())
}

/// Escape XML special characters
fn xml_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

fn sanitize_snapshot_name(name: &str) -> String {
    let mut output = String::new();
    let mut previous_was_dash = false;

    for ch in name.chars() {
        let mapped = if ch.is_ascii_alphanumeric() {
            previous_was_dash = false;
            ch.to_ascii_lowercase()
        } else {
            if !previous_was_dash {
                output.push('-');
                previous_was_dash = true;
            }
            continue;
        };
        output.push(mapped);
    }

    let trimmed = output.trim_matches('-');
    if trimmed.is_empty() {
        "snapshot".to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::harness::comparator::CaseOutcome;
    use menucraft_core::model::ResolvedPeriod;
    use menucraft_core::resolver::diagnostics::ResolutionOutcome;
    use tempfile::TempDir;

    #[test]
    fn save_snapshot_sanitizes_unsafe_scenario_name() {
        let temp = TempDir::new().unwrap();
        let scenario_path = temp.path().join("scenario.yaml");
        std::fs::write(&scenario_path, "name: test").unwrap();

        let result = TestResult {
            scenario_name: "../escape".to_string(),
            status: TestStatus::Fail,
            case_mismatches: vec![],
            error: None,
            actual_snapshot: Some(vec![CaseOutcome {
                at: "12:00".to_string(),
                expected: ResolvedPeriod::Morning,
                actual: ResolvedPeriod::Closed,
                outcome: ResolutionOutcome::Closed,
            }]),
        };

        save_snapshot(&result, &scenario_path).unwrap();

        let expected_path = temp.path().join(".snapshots").join("escape-actual.yaml");
        assert!(expected_path.exists());
        assert!(!temp.path().join("..").join("escape-actual.yaml").exists());
    }

    #[test]
    fn junit_output_escapes_and_nests_results() {
        let suite = SuiteResult {
            total: 1,
            passed: 0,
            failed: 1,
            errors: 0,
            results: vec![TestResult {
                scenario_name: "overlap <first wins>".to_string(),
                status: TestStatus::Fail,
                case_mismatches: vec![],
                error: None,
                actual_snapshot: None,
            }],
        };

        let mut buffer = Vec::new();
        report_suite_result_junit(&suite, &mut buffer).unwrap();
        let xml = String::from_utf8(buffer).unwrap();

        assert!(xml.contains("<testsuites tests=\"1\" failures=\"1\" errors=\"0\">"));
        assert!(xml.contains("overlap &lt;first wins&gt;"));
    }
}
