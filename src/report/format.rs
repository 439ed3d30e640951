// Text formatting helpers shared by the console and summary renderers

use crate::state::TestOutcome;

/// Display form of a test name: drop one leading `test_`/`test ` token and
/// turn underscores into spaces. Identity keys are never humanized.
pub fn humanize(name: &str) -> String {
    let stripped = name
        .strip_prefix("test_")
        .or_else(|| name.strip_prefix("test "))
        .unwrap_or(name);
    stripped.replace('_', " ")
}

/// First line of a failure message, trimmed. Absent messages read
/// "No message"; messages that trim to nothing read "Unknown error".
pub fn clean_message(message: Option<&str>) -> String {
    let Some(message) = message else {
        return "No message".to_string();
    };
    let first_line = message.lines().next().unwrap_or("").trim();
    if first_line.is_empty() {
        "Unknown error".to_string()
    } else {
        first_line.to_string()
    }
}

/// `name@file:line`, degrading to the bare humanized name without a
/// location. Used by the verbose lists and the summary document.
pub fn test_location(outcome: &TestOutcome) -> String {
    let name = humanize(&outcome.name);
    match &outcome.location {
        Some(loc) => format!("{}@{}:{}", name, loc.basename(), loc.line),
        None => name,
    }
}

/// `file:line name`, the compact-mode ordering (location first so lines
/// stay greppable by path).
pub fn test_location_compact(outcome: &TestOutcome) -> String {
    let name = humanize(&outcome.name);
    match &outcome.location {
        Some(loc) => format!("{}:{} {}", loc.basename(), loc.line, name),
        None => name,
    }
}

/// Bare `file:line` for the verbose detail block.
pub fn bare_location(outcome: &TestOutcome) -> String {
    match &outcome.location {
        Some(loc) => format!("{}:{}", loc.basename(), loc.line),
        None => "unknown location".to_string(),
    }
}

/// Human-scaled wall time. `None` (timer never started) renders as "0".
///
/// Remainder seconds in the minutes form are rounded independently of the
/// floored minutes, so values just under a minute boundary can render as
/// e.g. `1m60s`.
pub fn duration(secs: Option<f64>) -> String {
    let Some(t) = secs else {
        return "0".to_string();
    };
    if !t.is_finite() || t < 0.0 {
        return "0".to_string();
    }

    if t < 0.001 {
        "<1ms".to_string()
    } else if t < 1.0 {
        format!("{}ms", (t * 1000.0).round() as u64)
    } else if t < 60.0 {
        format!("{:.1}s", t)
    } else {
        let minutes = (t / 60.0).floor() as u64;
        let seconds = (t % 60.0).round() as u64;
        format!("{}m{}s", minutes, seconds)
    }
}
