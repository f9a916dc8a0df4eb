#![forbid(unsafe_code)]

//! Core domain logic for the Liftlog training tracker.
//!
//! This crate provides:
//! - Domain types (activity days, streak results, plate loadouts)
//! - Consistency streak engine with a weekly skip budget
//! - Rep-max estimation (Epley)
//! - Barbell plate loading
//! - Configuration, logging and an injectable clock

pub mod types;
pub mod error;
pub mod clock;
pub mod activity;
pub mod config;
pub mod logging;
pub mod streak;
pub mod rep_max;
pub mod plates;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::Config;
pub use activity::{load_activity_log, parse_activity_log};
pub use streak::{calculate_streak_on, StreakEngine};
pub use rep_max::{estimate_one_rep_max, estimate_ten_rep_max, round_to_plate_increment};
pub use plates::{calculate_plates, color_for_plate_weight, format_loadout};
