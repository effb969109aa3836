// Time-slot resolver - main resolution entry point
// Maps (current time, configured windows, optional legacy timings) to the
// morning/evening/closed period the customer menu filters on.

use crate::model::{LegacyTimings, ResolvedPeriod, TimeWindow};
use crate::resolver::clock::{range_contains, range_contains_linear, ClockTime};
use crate::resolver::context::ResolutionRequest;
use crate::resolver::diagnostics::{
    format_window_reason, LegacyDiagnostic, ResolutionDiagnostic, ResolutionOutcome,
    ResolutionResult, WindowDiagnostic,
};

/// Resolve the current period. Pure: identical inputs give identical results,
/// and malformed time strings never error, they just fail to match.
pub fn resolve(request: &ResolutionRequest) -> ResolutionResult {
    let mut diagnostic = ResolutionDiagnostic::new(request.now.clone());

    // An allday window anywhere in the set means always open, bucketed to
    // morning for the customer filter.
    if let Some(all_day_index) = request
        .windows
        .iter()
        .position(|window| window.category.is_all_day())
    {
        for (index, window) in request.windows.iter().enumerate() {
            if index == all_day_index {
                diagnostic.add_window_diagnostic(WindowDiagnostic::matched(
                    window.category,
                    "all day window (always open)".to_string(),
                ));
            } else {
                diagnostic.add_window_diagnostic(WindowDiagnostic::skipped(window.category));
            }
        }
        diagnostic.set_outcome(ResolutionOutcome::AllDayOverride);
        return ResolutionResult {
            period: ResolvedPeriod::Morning,
            diagnostic,
        };
    }

    let now = ClockTime::parse_lenient(&request.now);

    // First window in declaration order wins ties between overlapping windows.
    for (index, window) in request.windows.iter().enumerate() {
        if window_contains(window, now) {
            diagnostic.add_window_diagnostic(WindowDiagnostic::matched(
                window.category,
                format_window_reason(&window.start, &window.end, &request.now, true),
            ));
            for remaining in request.windows.iter().skip(index + 1) {
                diagnostic.add_window_diagnostic(WindowDiagnostic::skipped(remaining.category));
            }
            diagnostic.set_outcome(ResolutionOutcome::WindowMatch);
            return ResolutionResult {
                period: window.category.bucket(),
                diagnostic,
            };
        }

        diagnostic.add_window_diagnostic(WindowDiagnostic::not_matched(
            window.category,
            window_miss_reason(window, now, &request.now),
        ));
    }

    if let Some(timings) = &request.legacy_timings {
        let (period, legacy) = evaluate_legacy(timings, now, &request.now);
        let outcome = if period.is_open() {
            ResolutionOutcome::LegacyFallback
        } else {
            ResolutionOutcome::Closed
        };
        diagnostic.set_legacy(legacy);
        diagnostic.set_outcome(outcome);
        return ResolutionResult { period, diagnostic };
    }

    diagnostic.set_outcome(ResolutionOutcome::Closed);
    ResolutionResult {
        period: ResolvedPeriod::Closed,
        diagnostic,
    }
}

/// Resolve and discard the diagnostic trail.
pub fn resolve_period(request: &ResolutionRequest) -> ResolvedPeriod {
    resolve(request).period
}

fn window_contains(window: &TimeWindow, now: Option<ClockTime>) -> bool {
    let Some(now) = now else {
        return false;
    };
    let (Some(start), Some(end)) = (
        ClockTime::parse_lenient(&window.start),
        ClockTime::parse_lenient(&window.end),
    ) else {
        return false;
    };
    range_contains(start, end, now)
}

fn window_miss_reason(window: &TimeWindow, now: Option<ClockTime>, raw_now: &str) -> String {
    if now.is_none() {
        return format!("current time '{raw_now}' is unparseable");
    }
    if ClockTime::parse_lenient(&window.start).is_none()
        || ClockTime::parse_lenient(&window.end).is_none()
    {
        return format!("{}-{} has an unparseable edge", window.start, window.end);
    }
    format_window_reason(&window.start, &window.end, raw_now, false)
}

fn evaluate_legacy(
    timings: &LegacyTimings,
    now: Option<ClockTime>,
    raw_now: &str,
) -> (ResolvedPeriod, LegacyDiagnostic) {
    let morning_matched = legacy_range_contains(&timings.morning.start, &timings.morning.end, now);
    // The morning range is tested first; evening is only reported, not used,
    // once morning matched.
    let evening_matched = legacy_range_contains(&timings.evening.start, &timings.evening.end, now);

    let period = if morning_matched {
        ResolvedPeriod::Morning
    } else if evening_matched {
        ResolvedPeriod::Evening
    } else {
        ResolvedPeriod::Closed
    };

    let reason = match period {
        ResolvedPeriod::Morning => format!(
            "morning {}-{} contains {raw_now}",
            timings.morning.start, timings.morning.end
        ),
        ResolvedPeriod::Evening => format!(
            "evening {}-{} contains {raw_now}",
            timings.evening.start, timings.evening.end
        ),
        ResolvedPeriod::Closed => format!("neither timing range contains {raw_now}"),
    };

    (
        period,
        LegacyDiagnostic {
            morning_matched,
            evening_matched,
            reason,
        },
    )
}

fn legacy_range_contains(start: &str, end: &str, now: Option<ClockTime>) -> bool {
    let Some(now) = now else {
        return false;
    };
    let (Some(start), Some(end)) = (
        ClockTime::parse_lenient(start),
        ClockTime::parse_lenient(end),
    ) else {
        return false;
    };
    range_contains_linear(start, end, now)
}
