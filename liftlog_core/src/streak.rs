//! Consistency streak with a weekly skip budget.
//!
//! Weeks run Sunday through Saturday. Each week tolerates two missed days;
//! the third miss breaks the streak. The streak count itself is the number
//! of active days accumulated over consecutive unbroken weeks, walking back
//! from the current week:
//! - The first week is clipped to the first-ever activity day
//! - The current week is clipped to today
//! - A week with more than two misses ends the walk and is not counted

use crate::{ActivityRecord, Clock, StreakResult, StreakState, SystemClock, WeekSummary};
use chrono::{Datelike, Duration, NaiveDate};
use std::collections::BTreeSet;

/// Misses allowed per calendar week before the streak breaks
pub const WEEKLY_SKIP_BUDGET: u32 = 2;

/// Streak evaluator bound to a source of "today"
#[derive(Clone, Debug, Default)]
pub struct StreakEngine<C: Clock = SystemClock> {
    clock: C,
}

impl<C: Clock> StreakEngine<C> {
    pub fn new(clock: C) -> Self {
        Self { clock }
    }

    /// Evaluate the streak for a history of activity timestamps
    ///
    /// Inputs may carry a time of day; they are reduced to calendar days
    /// and deduplicated before evaluation.
    pub fn calculate_streak<I, D>(&self, dates: I) -> StreakResult
    where
        I: IntoIterator<Item = D>,
        D: Into<ActivityRecord>,
    {
        calculate_streak_on(self.clock.today(), dates)
    }

    /// Weeks visited by the backward walk, newest first
    ///
    /// The last entry is the week that stopped the walk when it was broken
    /// (`counted == false`). Empty when there is no activity on or before today.
    pub fn week_breakdown<I, D>(&self, dates: I) -> Vec<WeekSummary>
    where
        I: IntoIterator<Item = D>,
        D: Into<ActivityRecord>,
    {
        let days = collect_days(dates);
        match days.first() {
            Some(&earliest) => walk_weeks(&days, self.clock.today(), earliest),
            None => Vec::new(),
        }
    }
}

/// Evaluate the streak as of an explicit `today`
pub fn calculate_streak_on<I, D>(today: NaiveDate, dates: I) -> StreakResult
where
    I: IntoIterator<Item = D>,
    D: Into<ActivityRecord>,
{
    let days = collect_days(dates);
    let next_reset_date = next_reset_date(today);

    let Some(&earliest) = days.first() else {
        tracing::debug!("No activity recorded, streak is resting");
        return StreakResult {
            state: StreakState::Resting,
            streak_days: 0,
            skips_remaining: WEEKLY_SKIP_BUDGET,
            next_reset_date,
            broke_today: false,
        };
    };

    // Week-to-date misses count from Sunday, even before the first activity
    let (_, used_skips) = tally(&days, week_start(today), today);
    let skips_remaining = WEEKLY_SKIP_BUDGET.saturating_sub(used_skips);
    let trained_today = days.contains(&today);

    let state = if used_skips > WEEKLY_SKIP_BUDGET {
        StreakState::Broken
    } else if trained_today {
        StreakState::Active
    } else {
        StreakState::Resting
    };

    // A week already broken on an earlier day (4+ misses) does not re-report
    let broke_today =
        state == StreakState::Broken && used_skips == WEEKLY_SKIP_BUDGET + 1 && !trained_today;

    let streak_days = if state == StreakState::Broken {
        0
    } else {
        walk_weeks(&days, today, earliest)
            .iter()
            .filter(|week| week.counted)
            .map(|week| week.active_days)
            .sum()
    };

    tracing::debug!(
        "Streak as of {}: {:?}, {} days, {} skips left (used {})",
        today,
        state,
        streak_days,
        skips_remaining,
        used_skips
    );

    StreakResult {
        state,
        streak_days,
        skips_remaining,
        next_reset_date,
        broke_today,
    }
}

/// Sunday on or before `day`, saturating at the earliest representable date
pub fn week_start(day: NaiveDate) -> NaiveDate {
    let offset = Duration::days(i64::from(day.weekday().num_days_from_sunday()));
    day.checked_sub_signed(offset).unwrap_or(NaiveDate::MIN)
}

/// First Sunday strictly after `today`
///
/// Saturates at the latest representable date in the final week of the
/// calendar.
pub fn next_reset_date(today: NaiveDate) -> NaiveDate {
    week_start(today)
        .checked_add_signed(Duration::days(7))
        .unwrap_or(NaiveDate::MAX)
}

fn collect_days<I, D>(dates: I) -> BTreeSet<NaiveDate>
where
    I: IntoIterator<Item = D>,
    D: Into<ActivityRecord>,
{
    dates.into_iter().map(|d| d.into().day).collect()
}

/// Inclusive day range; empty when `start > end`
fn days_between(start: NaiveDate, end: NaiveDate) -> impl Iterator<Item = NaiveDate> {
    start.iter_days().take_while(move |day| *day <= end)
}

/// (active, missed) day counts over an inclusive range
fn tally(days: &BTreeSet<NaiveDate>, start: NaiveDate, end: NaiveDate) -> (u32, u32) {
    days_between(start, end).fold((0, 0), |(active, missed), day| {
        if days.contains(&day) {
            (active + 1, missed)
        } else {
            (active, missed + 1)
        }
    })
}

fn walk_weeks(
    days: &BTreeSet<NaiveDate>,
    today: NaiveDate,
    earliest: NaiveDate,
) -> Vec<WeekSummary> {
    let sundays = std::iter::successors(Some(week_start(today)), |sunday| {
        sunday.checked_sub_signed(Duration::days(7))
    });

    let mut weeks = Vec::new();
    for sunday in sundays {
        let saturday = sunday
            .checked_add_signed(Duration::days(6))
            .unwrap_or(NaiveDate::MAX);
        let effective_start = sunday.max(earliest);
        let effective_end = saturday.min(today);
        if effective_end < earliest {
            break;
        }

        let (active_days, misses) = tally(days, effective_start, effective_end);
        let counted = misses <= WEEKLY_SKIP_BUDGET;
        weeks.push(WeekSummary {
            week_start: sunday,
            effective_start,
            effective_end,
            active_days,
            misses,
            counted,
        });

        if !counted {
            tracing::debug!("Streak walk stopped at broken week of {}", sunday);
            break;
        }
    }
    weeks
}
