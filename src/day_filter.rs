// src/day_filter.rs

use crate::config::DEFAULT_LOOKBACK_DAYS;
use crate::recording::TimestampToken;
use chrono::{Days, NaiveDate};
use std::fmt;

/// Restricts recordings to a window of calendar days relative to "today".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayFilter {
    /// Only recordings made exactly `n` days before today.
    ExactDay(u32),
    /// Recordings made on or after the day `n` days before today.
    SinceDay(u32),
}

impl DayFilter {
    /// Picks the filter for a requested day count. A count of 0 (the value
    /// used for a missing or invalid argument) falls back to the default
    /// lookback.
    pub fn from_days_back(days_back: u32, exact: bool) -> Self {
        let days = if days_back > 0 {
            days_back
        } else {
            DEFAULT_LOOKBACK_DAYS
        };
        if exact {
            DayFilter::ExactDay(days)
        } else {
            DayFilter::SinceDay(days)
        }
    }

    pub fn days(&self) -> u32 {
        match *self {
            DayFilter::ExactDay(n) | DayFilter::SinceDay(n) => n,
        }
    }

    /// The reference date, `today - n` (clamped to the earliest date chrono knows).
    pub fn target_date(&self, today: NaiveDate) -> NaiveDate {
        today
            .checked_sub_days(Days::new(u64::from(self.days())))
            .unwrap_or(NaiveDate::MIN)
    }

    pub fn matches(&self, token: &TimestampToken, today: NaiveDate) -> bool {
        let target = self.target_date(today);
        match self {
            DayFilter::ExactDay(_) => token.date() == target,
            DayFilter::SinceDay(_) => token.date() >= target,
        }
    }

    /// Keeps the tokens accepted by this filter, preserving order.
    pub fn apply(&self, tokens: Vec<TimestampToken>, today: NaiveDate) -> Vec<TimestampToken> {
        tokens
            .into_iter()
            .filter(|t| self.matches(t, today))
            .collect()
    }
}

impl fmt::Display for DayFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DayFilter::ExactDay(n) => write!(f, "from exactly {} day(s) ago", n),
            DayFilter::SinceDay(n) => write!(f, "in the last {} day(s)", n),
        }
    }
}
