//! Shared fixtures for board unit tests.

use crate::board::domain::{
    Category, PersistedTaskData, Priority, Stage, Task, TaskId,
};
use chrono::{DateTime, Local, NaiveDate, TimeZone, Utc};
use mockable::Clock;

/// Clock frozen at a single local wall-clock time.
///
/// The local date is pinned directly, so "today" is the same on every host
/// regardless of its UTC offset. `utc()` reports the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    now: DateTime<Local>,
}

impl FixedClock {
    pub fn at(now: DateTime<Local>) -> Self {
        Self { now }
    }

    /// Freezes the clock at 12:00 local time on the given date.
    pub fn midday(year: i32, month: u32, day: u32) -> Self {
        let wall_clock = date(year, month, day)
            .and_hms_opt(12, 0, 0)
            .expect("valid midday time");
        let now = Local
            .from_local_datetime(&wall_clock)
            .single()
            .expect("local midday is unambiguous");
        Self::at(now)
    }
}

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        self.now
    }

    fn utc(&self) -> DateTime<Utc> {
        self.now.with_timezone(&Utc)
    }
}

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid calendar date")
}

pub fn timestamp(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0)
        .single()
        .expect("valid timestamp")
}

/// Builds a stored task in `stage`, keeping `completed_at` consistent with it.
pub fn stored_task(title: &str, stage: Stage, due: Option<NaiveDate>) -> Task {
    let created_at = timestamp(2026, 1, 5, 9, 30);
    Task::from_persisted(PersistedTaskData {
        id: TaskId::new(),
        title: title.to_owned(),
        priority: Priority::High,
        category: Category::PenTesting,
        stage,
        due,
        notes: String::new(),
        created_at,
        completed_at: stage
            .is_completed()
            .then(|| timestamp(2026, 1, 9, 17, 45)),
    })
}
