//! Human-readable "time remaining" text for upcoming contest cards.

use crate::models::contest::Contest;
use chrono::{DateTime, TimeZone, Utc};
use std::fmt;

/// How often a visible countdown is refreshed
pub const COUNTDOWN_REFRESH_MS: u32 = 60_000;

const MINUTES_IN_DAY: i64 = 1_440;
const MINUTES_IN_ALMOST_TWO_DAYS: i64 = 2_520;
const MINUTES_IN_MONTH: i64 = 43_200;
const MINUTES_IN_TWO_MONTHS: i64 = 86_400;

/// What a countdown shows at one instant
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CountdownLabel {
    Started,
    Remaining(String),
}

impl CountdownLabel {
    /// Label for `start` as seen at `now`
    pub fn at(start: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        if start <= now {
            CountdownLabel::Started
        } else {
            CountdownLabel::Remaining(format!("in {}", describe_distance(start - now)))
        }
    }

    pub fn is_started(&self) -> bool {
        matches!(self, CountdownLabel::Started)
    }
}

impl fmt::Display for CountdownLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CountdownLabel::Started => f.write_str("Started"),
            CountdownLabel::Remaining(text) => f.write_str(text),
        }
    }
}

/// Countdown for a single contest. `tick` is driven by whatever timer the host provides.
#[derive(Debug, Clone, PartialEq)]
pub struct Countdown {
    start: DateTime<Utc>,
    label: CountdownLabel,
}

impl Countdown {
    /// Creates the countdown and computes its first label immediately.
    pub fn new(start: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        Self {
            start,
            label: CountdownLabel::at(start, now),
        }
    }

    /// Recomputes the label; returns true if it changed.
    pub fn tick(&mut self, now: DateTime<Utc>) -> bool {
        let next = CountdownLabel::at(self.start, now);
        let changed = next != self.label;
        self.label = next;
        changed
    }

    pub fn label(&self) -> &CountdownLabel {
        &self.label
    }
}

fn plural(count: i64, one: &str, many: &str) -> String {
    if count == 1 {
        one.to_string()
    } else {
        many.replace("{}", &count.to_string())
    }
}

fn round_div(value: i64, divisor: i64) -> i64 {
    (value + divisor / 2) / divisor
}

/// Approximate distance in words ("about 3 hours", "5 days", ...).
///
/// Beyond a month the count uses fixed 30-day months rather than calendar
/// months, so labels near a month boundary can differ by one from a
/// calendar-aware formatter.
pub fn describe_distance(delta: chrono::Duration) -> String {
    let seconds = delta.num_seconds().abs();
    let minutes = round_div(seconds, 60);

    if minutes < 1 {
        return "less than a minute".to_string();
    }
    if minutes < 45 {
        return plural(minutes, "1 minute", "{} minutes");
    }
    if minutes < 90 {
        return "about 1 hour".to_string();
    }
    if minutes < MINUTES_IN_DAY {
        return plural(round_div(minutes, 60), "about 1 hour", "about {} hours");
    }
    if minutes < MINUTES_IN_ALMOST_TWO_DAYS {
        return "1 day".to_string();
    }
    if minutes < MINUTES_IN_MONTH {
        return plural(round_div(minutes, MINUTES_IN_DAY), "1 day", "{} days");
    }
    if minutes < MINUTES_IN_TWO_MONTHS {
        return plural(round_div(minutes, MINUTES_IN_MONTH), "about 1 month", "about {} months");
    }

    let months = minutes / MINUTES_IN_MONTH;
    if months < 12 {
        return plural(round_div(minutes, MINUTES_IN_MONTH), "1 month", "{} months");
    }
    let years = months / 12;
    match months % 12 {
        0..=2 => plural(years, "about 1 year", "about {} years"),
        3..=8 => plural(years, "over 1 year", "over {} years"),
        _ => plural(years + 1, "almost 1 year", "almost {} years"),
    }
}

/// Start time in the card format, e.g. "Mar 1, 2024 at 2:35 PM".
pub fn format_start_time<Tz>(start: DateTime<Utc>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    start.with_timezone(tz).format("%b %-d, %Y at %-I:%M %p").to_string()
}

/// "Duration: N minutes", or nothing when the contest has no duration.
pub fn format_duration(contest: &Contest) -> Option<String> {
    contest
        .duration_minutes()
        .map(|minutes| format!("Duration: {} minutes", minutes))
}
