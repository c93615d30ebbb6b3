// ABOUTME: Calendar-day completion streak state machine
// ABOUTME: Increments on consecutive days, resets on gaps, idempotent within a day
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Cognia Health

//! Streak Tracking
//!
//! The streak counts consecutive calendar days on which every daily
//! challenge was completed. The transition fires once per day, when a day's
//! challenge set reaches 100%; repeated completion events on the same day
//! are no-ops. Any gap of two or more days restarts the streak at 1.

use chrono::NaiveDate;

use crate::models::StreakState;

impl StreakState {
    /// Record that all of today's challenges are complete.
    ///
    /// Transition rules, evaluated against the previous completion date:
    /// yesterday extends the streak by one, today is a no-op, anything else
    /// (including no prior completion) restarts the streak at 1. Returns the
    /// streak after the transition.
    pub fn record_completion(&mut self, today: NaiveDate) -> u32 {
        if self.last_completed == Some(today) {
            return self.streak;
        }
        let continued = today
            .pred_opt()
            .is_some_and(|yesterday| self.last_completed == Some(yesterday));
        self.streak = if continued { self.streak + 1 } else { 1 };
        self.last_completed = Some(today);
        self.streak
    }

    /// Whether today's completion event has already been recorded
    #[must_use]
    pub fn completed_on(&self, date: NaiveDate) -> bool {
        self.last_completed == Some(date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn first_completion_starts_at_one() {
        let mut state = StreakState::default();
        assert_eq!(state.record_completion(date(2026, 3, 10)), 1);
        assert_eq!(state.last_completed, Some(date(2026, 3, 10)));
    }

    #[test]
    fn month_boundary_counts_as_consecutive() {
        let mut state = StreakState::default();
        state.record_completion(date(2026, 1, 31));
        assert_eq!(state.record_completion(date(2026, 2, 1)), 2);
    }
}
