//! Clock display strings.

use chrono::{Datelike, Timelike};

use crate::commands::ClockStrings;

const DAY_NAMES: [&str; 7] = [
    "일요일",
    "월요일",
    "화요일",
    "수요일",
    "목요일",
    "금요일",
    "토요일",
];

/// Formats one clock tick. Generic over the time source so tests can pass a
/// fixed `NaiveDateTime` instead of the wall clock.
pub fn format_clock<T: Datelike + Timelike>(now: &T) -> ClockStrings {
    let day = DAY_NAMES[now.weekday().num_days_from_sunday() as usize];
    ClockStrings {
        hm: format!("{:02}:{:02}", now.hour(), now.minute()),
        s: format!("{:02}", now.second()),
        date: format!(
            "{}년 {:02}월 {:02}일 {}",
            now.year(),
            now.month(),
            now.day(),
            day
        ),
    }
}
