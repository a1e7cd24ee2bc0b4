//! Conversion of clock times into conversational English phrases.
//!
//! The phrase granularity is five minutes: actual minutes are rounded to the
//! nearest conversational unit and qualified with "nearly" or "just after"
//! when they fall between units.

use crate::validation;
use log::debug;
use std::fmt;

mod lexicon;

use lexicon::{hour_word, minute_word};

/// Custom error type for time conversion
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConvertError {
    #[error("Time format must be 00:00-23:59!")]
    InvalidTimeFormat,
}

/// A validated wall-clock time of day
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeOfDay {
    hours: u32,
    minutes: u32,
}

impl TimeOfDay {
    /// Create a time of day, or `None` if either field is out of range
    pub fn new(hours: u32, minutes: u32) -> Option<Self> {
        if hours < 24 && minutes < 60 {
            Some(Self { hours, minutes })
        } else {
            None
        }
    }

    /// The current local wall-clock time
    pub fn now() -> Self {
        use chrono::Timelike;
        let now = chrono::Local::now();
        // chrono keeps hour and minute in range
        Self { hours: now.hour(), minutes: now.minute() }
    }

    pub fn hours(&self) -> u32 {
        self.hours
    }

    pub fn minutes(&self) -> u32 {
        self.minutes
    }

    /// Render this time as a conversational phrase
    ///
    /// Exact hours short-circuit to the bare hour word ("noon", "four").
    /// Everything else is assembled as prefix + minute word + conjunction +
    /// hour word, e.g. "nearly half past nine" or "twenty to five".
    pub fn to_phrase(&self) -> String {
        if self.minutes == 0 {
            return hour_word(self.hours, self.minutes).to_string();
        }

        let (prefix, minutes_round) = rounding(self.minutes);
        let phrase = format!(
            "{}{}{}{}",
            prefix,
            minute_word(minutes_round),
            conjunction(self.minutes),
            hour_word(self.hours, self.minutes)
        );
        debug!("Converted {} to \"{}\"", self, phrase);
        phrase
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hours, self.minutes)
    }
}

/// Convert a 24-hour "HH:MM" string into its conversational phrase
///
/// # Arguments
///
/// * `time` - The time string to convert (e.g., "14:40")
///
/// # Returns
///
/// * `Result<String, ConvertError>` - The phrase, or `InvalidTimeFormat` when
///   the string does not match HH:MM with hours 00-23 and minutes 00-59
pub fn convert(time: &str) -> Result<String, ConvertError> {
    let (hours, minutes) =
        validation::parse_time(time).ok_or(ConvertError::InvalidTimeFormat)?;
    let time_of_day = TimeOfDay::new(hours, minutes).ok_or(ConvertError::InvalidTimeFormat)?;
    Ok(time_of_day.to_phrase())
}

/// Pick the rounding prefix and the minutes rounded to a multiple of five
///
/// The order of the arms matters: 57-59 always round up to the next hour,
/// even when the remainder alone would say "just after".
fn rounding(minutes: u32) -> (&'static str, u32) {
    let remainder = minutes % 5;
    if remainder == 0 {
        ("", minutes)
    } else if remainder >= 3 || minutes >= 57 {
        ("nearly ", (minutes / 5 + 1) * 5)
    } else {
        ("just after ", minutes / 5 * 5)
    }
}

/// Pick " past " or " to " from the original, unrounded minutes
///
/// Both arms hold at exactly 30; "past" is checked first and wins.
fn conjunction(minutes: u32) -> &'static str {
    if minutes > 2 && minutes <= 30 {
        " past "
    } else if minutes >= 30 && minutes < 57 {
        " to "
    } else {
        ""
    }
}
