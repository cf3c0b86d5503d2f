//! Calendar arithmetic for due dates.
//!
//! Due dates are plain calendar dates. Every comparison happens between
//! [`NaiveDate`] values so that no time-zone conversion can shift a date by
//! a day.

use super::{Stage, Task};
use chrono::{Datelike, Months, NaiveDate};
use mockable::Clock;
use std::fmt;

/// Storage format for due dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses a `YYYY-MM-DD` string into a local calendar date.
///
/// Returns `None` for blank input. Input that is not a valid date is read
/// leniently: the leading hyphen-separated numbers are taken as year, month
/// and day, with the month clamped to `1..=12` and the day clamped to the
/// month's length. Input without a leading year yields `None`.
///
/// # Examples
///
/// ```rust
/// use chrono::NaiveDate;
/// use secboard::board::domain::parse_local_date;
///
/// assert_eq!(parse_local_date("2026-03-09"), NaiveDate::from_ymd_opt(2026, 3, 9));
/// assert_eq!(parse_local_date("   "), None);
/// ```
#[must_use]
pub fn parse_local_date(input: &str) -> Option<NaiveDate> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(trimmed, DATE_FORMAT)
        .ok()
        .or_else(|| lenient_date(trimmed))
}

fn lenient_date(input: &str) -> Option<NaiveDate> {
    let mut parts = input
        .split('-')
        .map(|part| part.trim().parse::<u32>().ok());
    let year = i32::try_from(parts.next().flatten()?).ok()?;
    let month = parts.next().flatten().unwrap_or(1).clamp(1, 12);
    let requested_day = parts.next().flatten().unwrap_or(1).max(1);

    let first_of_month = NaiveDate::from_ymd_opt(year, month, 1)?;
    let last_of_month = first_of_month
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())?;
    NaiveDate::from_ymd_opt(year, month, requested_day.min(last_of_month.day()))
}

/// Returns the clock's current local calendar date.
#[must_use]
pub fn today(clock: &impl Clock) -> NaiveDate {
    clock.local().date_naive()
}

/// Returns `true` when an open task's due date lies strictly before `today`.
///
/// Completed tasks are never overdue, and tasks without a due date cannot be.
#[must_use]
pub fn is_overdue(due: Option<NaiveDate>, stage: Stage, today: NaiveDate) -> bool {
    if stage.is_completed() {
        return false;
    }
    due.is_some_and(|date| date < today)
}

/// Returns the number of calendar days from `today` until `due`.
///
/// Negative for past dates, zero when due today, one when due tomorrow.
#[must_use]
pub fn days_left(due: Option<NaiveDate>, today: NaiveDate) -> Option<i64> {
    due.map(|date| date.signed_duration_since(today).num_days())
}

/// Badge text shown next to a task's due date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DueLabel {
    /// The task is past due.
    Overdue,
    /// The task is due today.
    DueToday,
    /// The task is due tomorrow.
    DueTomorrow,
    /// The task is due in the given number of days.
    DaysLeft(i64),
}

impl DueLabel {
    /// Maps overdue status and days remaining onto a label.
    #[must_use]
    pub const fn from_parts(overdue: bool, days_left: i64) -> Self {
        if overdue {
            return Self::Overdue;
        }
        match days_left {
            0 => Self::DueToday,
            1 => Self::DueTomorrow,
            days => Self::DaysLeft(days),
        }
    }
}

impl fmt::Display for DueLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Overdue => f.write_str("OVERDUE"),
            Self::DueToday => f.write_str("Due today"),
            Self::DueTomorrow => f.write_str("Due tomorrow"),
            Self::DaysLeft(days) => write!(f, "{days}d left"),
        }
    }
}

/// Derived due-date values for a single task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DueStatus {
    /// Whether the task is overdue.
    pub overdue: bool,
    /// Calendar days until the due date, if one is set.
    pub days_left: Option<i64>,
    /// Badge label, if the task has a due date.
    pub label: Option<DueLabel>,
}

impl DueStatus {
    /// Evaluates a task's due date against `today`.
    #[must_use]
    pub fn evaluate(task: &Task, today: NaiveDate) -> Self {
        let overdue = is_overdue(task.due(), task.stage(), today);
        let remaining = days_left(task.due(), today);
        Self {
            overdue,
            days_left: remaining,
            label: remaining.map(|days| DueLabel::from_parts(overdue, days)),
        }
    }
}
