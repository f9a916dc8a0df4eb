//! Core domain types for Liftlog.
//!
//! This module defines the fundamental types used throughout the system:
//! - Activity days fed into the streak engine
//! - Streak results and per-week summaries
//! - Plate loadouts and plate colour tokens

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone};
use serde::{Deserialize, Serialize};

// ============================================================================
// Activity Types
// ============================================================================

/// A calendar day on which at least one working set was logged.
///
/// Time of day is discarded. Zoned timestamps are first converted into the
/// process-local time zone so that a late-evening set lands on the day the
/// user actually trained.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ActivityRecord {
    pub day: NaiveDate,
}

impl From<NaiveDate> for ActivityRecord {
    fn from(day: NaiveDate) -> Self {
        Self { day }
    }
}

impl From<NaiveDateTime> for ActivityRecord {
    fn from(dt: NaiveDateTime) -> Self {
        Self { day: dt.date() }
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for ActivityRecord {
    fn from(dt: DateTime<Tz>) -> Self {
        Self {
            day: dt.with_timezone(&Local).date_naive(),
        }
    }
}

// ============================================================================
// Streak Types
// ============================================================================

/// Where the user stands in the current week
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum StreakState {
    /// Trained today and the week's skip budget holds
    Active,
    /// Not trained today, but the skip budget still holds
    Resting,
    /// More than two misses this week
    Broken,
}

/// Outcome of a streak evaluation
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct StreakResult {
    pub state: StreakState,
    pub streak_days: u32,
    pub skips_remaining: u32,
    /// Next Sunday strictly after today, when the skip budget resets
    pub next_reset_date: NaiveDate,
    /// Set only on the day the third miss of the week happened
    pub broke_today: bool,
}

/// One week visited by the backward streak walk
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct WeekSummary {
    /// Sunday that opens the calendar week
    pub week_start: NaiveDate,
    /// Later of the Sunday and the first-ever activity day
    pub effective_start: NaiveDate,
    /// Earlier of the Saturday and today
    pub effective_end: NaiveDate,
    pub active_days: u32,
    pub misses: u32,
    /// Whether this week's active days were added to the streak
    pub counted: bool,
}

// ============================================================================
// Plate Types
// ============================================================================

/// Plates for one side of the bar and the load they produce
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct PlateLoadout {
    /// Per-side plates, heaviest first
    pub plates: Vec<f64>,
    /// Bar plus every loaded plate
    pub total_weight: f64,
    pub is_exact: bool,
}

impl PlateLoadout {
    /// Bar with nothing on it
    pub fn bar_only(bar_weight: f64, is_exact: bool) -> Self {
        Self {
            plates: Vec::new(),
            total_weight: bar_weight,
            is_exact,
        }
    }

    pub fn is_bar_only(&self) -> bool {
        self.plates.is_empty()
    }

    /// Sum of the plates on a single side
    pub fn per_side_weight(&self) -> f64 {
        self.plates.iter().sum()
    }
}

/// Colour band used to render a plate
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PlateColor {
    Red,
    Blue,
    Yellow,
    Green,
    White,
    Gray,
}

impl PlateColor {
    /// RGB hex token for this band
    pub fn hex(&self) -> &'static str {
        match self {
            PlateColor::Red => "#D32F2F",
            PlateColor::Blue => "#1976D2",
            PlateColor::Yellow => "#FBC02D",
            PlateColor::Green => "#388E3C",
            PlateColor::White => "#FAFAFA",
            PlateColor::Gray => "#757575",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            PlateColor::Red => "red",
            PlateColor::Blue => "blue",
            PlateColor::Yellow => "yellow",
            PlateColor::Green => "green",
            PlateColor::White => "white",
            PlateColor::Gray => "gray",
        }
    }
}
