//! Clock-string formatting and playback-speed arithmetic.
//!
//! Hour counts above 99 widen the hour field instead of truncating it,
//! so `format_clock(360_000)` is `"100:00:00"`.

use crate::error::SpeedError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Playback multiplier, always within `[Speed::MIN, Speed::MAX]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Speed(f64);

impl Speed {
    pub const MIN: f64 = 1.0;
    pub const MAX: f64 = 2.0;
    pub const STEP: f64 = 0.05;

    pub const NORMAL: Speed = Speed(1.0);

    pub fn new(value: f64) -> Result<Self, SpeedError> {
        if !value.is_finite() || !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(SpeedError::OutOfRange(value));
        }
        Ok(Self(value))
    }

    pub fn get(self) -> f64 {
        self.0
    }

    /// Every slider stop from 1.00x to 2.00x inclusive.
    pub fn steps() -> impl Iterator<Item = Speed> {
        let count = ((Self::MAX - Self::MIN) / Self::STEP).round() as u32;
        // Snapped to hundredths so 1.15 is 1.15 and not 1.1500000000000001.
        (0..=count).map(|i| {
            let value = Self::MIN + f64::from(i) * Self::STEP;
            Speed((value * 100.0).round() / 100.0)
        })
    }
}

impl Default for Speed {
    fn default() -> Self {
        Self::NORMAL
    }
}

impl fmt::Display for Speed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}x", self.0)
    }
}

impl FromStr for Speed {
    type Err = SpeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let number = trimmed
            .strip_suffix(['x', 'X'])
            .unwrap_or(trimmed)
            .trim();
        let value: f64 = number
            .parse()
            .map_err(|_| SpeedError::Invalid(s.to_string()))?;
        Speed::new(value)
    }
}

impl TryFrom<f64> for Speed {
    type Error = SpeedError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Speed::new(value)
    }
}

impl From<Speed> for f64 {
    fn from(speed: Speed) -> f64 {
        speed.0
    }
}

/// Render a seconds count as `HH:MM:SS`.
pub fn format_clock(total_secs: u64) -> String {
    let hours = total_secs / 3600;
    let mins = (total_secs % 3600) / 60;
    let secs = total_secs % 60;
    format!("{:02}:{:02}:{:02}", hours, mins, secs)
}

/// Parse a clock string produced by [`format_clock`] back into seconds.
pub fn parse_clock(clock: &str) -> Option<u64> {
    let mut parts = clock.split(':');
    let (h, m, s) = (parts.next()?, parts.next()?, parts.next()?);
    if parts.next().is_some() {
        return None;
    }

    let two_digits = |p: &str| p.len() == 2 && p.bytes().all(|b| b.is_ascii_digit());
    if h.len() < 2 || !h.bytes().all(|b| b.is_ascii_digit()) || !two_digits(m) || !two_digits(s)
    {
        return None;
    }

    let hours: u64 = h.parse().ok()?;
    let mins: u64 = m.parse().ok()?;
    let secs: u64 = s.parse().ok()?;
    if mins >= 60 || secs >= 60 {
        return None;
    }
    hours.checked_mul(3600)?.checked_add(mins * 60 + secs)
}

/// Watch time for `base_secs` at `speed`, rounded half away from zero.
pub fn seconds_at_speed(base_secs: u64, speed: Speed) -> u64 {
    (base_secs as f64 / speed.get()).round() as u64
}

pub fn format_at_speed(base_secs: u64, speed: Speed) -> String {
    format_clock(seconds_at_speed(base_secs, speed))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn speed(v: f64) -> Speed {
        Speed::new(v).unwrap()
    }

    #[test]
    fn test_format_clock_zero() {
        assert_eq!(format_clock(0), "00:00:00");
    }

    #[test]
    fn test_format_clock_all_fields() {
        assert_eq!(format_clock(3661), "01:01:01");
        assert_eq!(format_clock(5025), "01:23:45");
    }

    #[test]
    fn test_format_clock_widens_past_99_hours() {
        assert_eq!(format_clock(359_999), "99:59:59");
        assert_eq!(format_clock(360_000), "100:00:00");
    }

    #[test]
    fn test_parse_clock() {
        assert_eq!(parse_clock("01:23:45"), Some(5025));
        assert_eq!(parse_clock("100:00:00"), Some(360_000));
        assert_eq!(parse_clock("1:00:00"), None);
        assert_eq!(parse_clock("00:60:00"), None);
        assert_eq!(parse_clock("00:00"), None);
        assert_eq!(parse_clock("00:00:00:00"), None);
    }

    #[test]
    fn test_double_speed_halves() {
        assert_eq!(format_at_speed(7200, speed(2.0)), "01:00:00");
    }

    #[test]
    fn test_speed_one_is_identity() {
        assert_eq!(format_at_speed(5025, Speed::NORMAL), format_clock(5025));
    }

    #[test]
    fn test_rounds_half_away_from_zero() {
        // 5 / 2 = 2.5
        assert_eq!(seconds_at_speed(5, speed(2.0)), 3);
        // 10 / 1.5 = 6.67
        assert_eq!(seconds_at_speed(10, speed(1.5)), 7);
        assert_eq!(seconds_at_speed(5025, speed(1.5)), 3350);
    }

    #[test]
    fn test_speed_rejects_out_of_range() {
        assert_eq!(Speed::new(0.0), Err(SpeedError::OutOfRange(0.0)));
        assert!(Speed::new(2.01).is_err());
        assert!(Speed::new(f64::NAN).is_err());
        assert!(Speed::new(1.0).is_ok());
        assert!(Speed::new(2.0).is_ok());
    }

    #[test]
    fn test_speed_parse() {
        assert_eq!("1.5".parse::<Speed>().unwrap(), speed(1.5));
        assert_eq!("1.25x".parse::<Speed>().unwrap(), speed(1.25));
        assert!(matches!("fast".parse::<Speed>(), Err(SpeedError::Invalid(_))));
        assert!(matches!("3x".parse::<Speed>(), Err(SpeedError::OutOfRange(_))));
    }

    #[test]
    fn test_speed_label() {
        assert_eq!(speed(1.5).to_string(), "1.50x");
        assert_eq!(Speed::NORMAL.to_string(), "1.00x");
    }

    #[test]
    fn test_steps_cover_slider() {
        let steps: Vec<Speed> = Speed::steps().collect();
        assert_eq!(steps.len(), 21);
        assert_eq!(steps[0], Speed::NORMAL);
        assert_eq!(steps[3].to_string(), "1.15x");
        assert_eq!(steps[20], speed(2.0));
    }

    #[test]
    fn test_steps_are_one_step_apart() {
        let steps: Vec<f64> = Speed::steps().map(Speed::get).collect();
        for pair in steps.windows(2) {
            assert!((pair[1] - pair[0] - Speed::STEP).abs() < 1e-9);
        }
        assert!(steps.iter().all(|&v| Speed::new(v).is_ok()));
    }
}
