// Form-level validation
// Required fields, numeric ranges, and pattern checks surfaced as inline
// messages. Window overlap detection is a warning only and never blocks a
// save.

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::model::{Category, MenuItem, Restaurant, TimeWindow};
use crate::resolver::clock::{range_contains, ClockTime};

lazy_static! {
    static ref TIME_RE: Regex = Regex::new(r"^([01]\d|2[0-3]):[0-5]\d$").unwrap();
    static ref EMAIL_RE: Regex = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();
    static ref PHONE_RE: Regex = Regex::new(r"^\+?[\d\s-]{7,15}$").unwrap();
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Blocks the save.
    Error,
    /// Shown inline, save proceeds.
    Warning,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ValidationIssue {
    pub severity: Severity,
    pub field: String,
    pub message: String,
}

impl ValidationIssue {
    fn error(field: &str, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            field: field.to_string(),
            message: message.into(),
        }
    }

    fn warning(field: &str, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            field: field.to_string(),
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ValidationReport {
    pub issues: Vec<ValidationIssue>,
}

impl ValidationReport {
    /// True when nothing blocks the save; warnings are allowed through.
    pub fn is_savable(&self) -> bool {
        self.issues
            .iter()
            .all(|issue| issue.severity != Severity::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &ValidationIssue> {
        self.issues
            .iter()
            .filter(|issue| issue.severity == Severity::Warning)
    }

    fn push(&mut self, issue: ValidationIssue) {
        self.issues.push(issue);
    }
}

pub fn validate_restaurant(restaurant: &Restaurant) -> ValidationReport {
    let mut report = ValidationReport::default();

    if restaurant.name.trim().is_empty() {
        report.push(ValidationIssue::error("name", "restaurant name is required"));
    }
    if let Some(email) = restaurant.email.as_deref() {
        if !EMAIL_RE.is_match(email) {
            report.push(ValidationIssue::error("email", "invalid email address"));
        }
    }
    if let Some(phone) = restaurant.phone.as_deref() {
        if !PHONE_RE.is_match(phone) {
            report.push(ValidationIssue::error("phone", "invalid phone number"));
        }
    }

    report
}

pub fn validate_category(category: &Category) -> ValidationReport {
    let mut report = ValidationReport::default();

    if category.name.trim().is_empty() {
        report.push(ValidationIssue::error("name", "category name is required"));
    }
    if category.available_times.is_empty() {
        report.push(ValidationIssue::warning(
            "available_times",
            "category is not available at any time",
        ));
    }

    report
}

pub fn validate_item(item: &MenuItem) -> ValidationReport {
    let mut report = ValidationReport::default();

    if item.name.trim().is_empty() {
        report.push(ValidationIssue::error("name", "item name is required"));
    }
    if item.price <= 0.0 {
        report.push(ValidationIssue::error("price", "price must be positive"));
    }
    if let Some(level) = item.spice_level {
        if level > 5 {
            report.push(ValidationIssue::error(
                "spice_level",
                "spice level must be between 0 and 5",
            ));
        }
    }
    if item.available_times.is_empty() {
        report.push(ValidationIssue::warning(
            "available_times",
            "item is not available at any time",
        ));
    }

    report
}

/// Validate one window's time strings. Allday windows skip the check since
/// their edges are ignored.
pub fn validate_time_window(window: &TimeWindow) -> ValidationReport {
    let mut report = ValidationReport::default();

    if window.category.is_all_day() {
        return report;
    }

    if !TIME_RE.is_match(&window.start) {
        report.push(ValidationIssue::error(
            "start",
            format!("'{}' is not a valid HH:MM time", window.start),
        ));
    }
    if !TIME_RE.is_match(&window.end) {
        report.push(ValidationIssue::error(
            "end",
            format!("'{}' is not a valid HH:MM time", window.end),
        ));
    }

    report
}

/// Validate the whole window set: each window's times, plus overlap warnings.
/// Overlaps are legal (the resolver breaks ties by declaration order), so the
/// editor only warns about them.
pub fn validate_time_windows(windows: &[TimeWindow]) -> ValidationReport {
    let mut report = ValidationReport::default();

    for window in windows {
        report.issues.extend(validate_time_window(window).issues);
    }

    for (i, a) in windows.iter().enumerate() {
        for b in windows.iter().skip(i + 1) {
            if windows_overlap(a, b) {
                report.push(ValidationIssue::warning(
                    "windows",
                    format!(
                        "{} ({}-{}) overlaps {} ({}-{})",
                        a.category, a.start, a.end, b.category, b.start, b.end
                    ),
                ));
            }
        }
    }

    report
}

fn windows_overlap(a: &TimeWindow, b: &TimeWindow) -> bool {
    if a.category.is_all_day() || b.category.is_all_day() {
        return false;
    }
    let parse = |window: &TimeWindow| {
        Some((
            ClockTime::parse_lenient(&window.start)?,
            ClockTime::parse_lenient(&window.end)?,
        ))
    };
    let (Some((a_start, a_end)), Some((b_start, b_end))) = (parse(a), parse(b)) else {
        return false;
    };

    // Two windows overlap when either contains the other's start, overnight
    // wrapping included.
    range_contains(a_start, a_end, b_start) || range_contains(b_start, b_end, a_start)
}
