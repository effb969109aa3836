use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The coarse bucket the customer-facing menu filters on.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ResolvedPeriod {
    Morning,
    Evening,
    Closed,
}

impl ResolvedPeriod {
    pub fn is_open(&self) -> bool {
        !matches!(self, ResolvedPeriod::Closed)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ResolvedPeriod::Morning => "morning",
            ResolvedPeriod::Evening => "evening",
            ResolvedPeriod::Closed => "closed",
        }
    }
}

impl std::fmt::Display for ResolvedPeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum WindowCategory {
    Breakfast,
    Lunch,
    Snacks,
    Dinner,
    Latenight,
    Earlymorning,
    Brunch,
    Allday,
}

impl WindowCategory {
    pub fn is_all_day(&self) -> bool {
        matches!(self, WindowCategory::Allday)
    }

    /// Bucket a window category into the period the customer UI filters on.
    /// Dinner and late-night windows are evening; everything else is morning.
    pub fn bucket(&self) -> ResolvedPeriod {
        match self {
            WindowCategory::Dinner | WindowCategory::Latenight => ResolvedPeriod::Evening,
            _ => ResolvedPeriod::Morning,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            WindowCategory::Breakfast => "breakfast",
            WindowCategory::Lunch => "lunch",
            WindowCategory::Snacks => "snacks",
            WindowCategory::Dinner => "dinner",
            WindowCategory::Latenight => "latenight",
            WindowCategory::Earlymorning => "earlymorning",
            WindowCategory::Brunch => "brunch",
            WindowCategory::Allday => "allday",
        }
    }
}

impl std::fmt::Display for WindowCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An owner-configured named period controlling category/item visibility.
/// Start/end are "HH:MM" strings; both are ignored when category is allday.
/// Windows are not required to be disjoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TimeWindow {
    pub id: Uuid,
    pub category: WindowCategory,
    pub start: String,
    pub end: String,
}

impl TimeWindow {
    pub fn new(category: WindowCategory, start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            id: Uuid::now_v7(),
            category,
            start: start.into(),
            end: end.into(),
        }
    }

    /// The slot set a restaurant starts with before the owner edits anything.
    pub fn defaults() -> Vec<TimeWindow> {
        vec![
            TimeWindow::new(WindowCategory::Breakfast, "06:00", "11:00"),
            TimeWindow::new(WindowCategory::Lunch, "11:00", "16:00"),
            TimeWindow::new(WindowCategory::Snacks, "16:00", "19:00"),
            TimeWindow::new(WindowCategory::Dinner, "19:00", "23:30"),
        ]
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TimeRange {
    pub start: String,
    pub end: String,
}

/// Two-range morning/evening timing record kept for restaurants that predate
/// configurable windows.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LegacyTimings {
    pub morning: TimeRange,
    pub evening: TimeRange,
}
