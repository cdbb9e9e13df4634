use core::f64::consts::PI;
use core::fmt;
use core::str::FromStr;

use crate::error::TimeParseError;

const NANOS_PER_SEC: u32 = 1_000_000_000;

/// A wall-clock reading.
///
/// Fields are always in range: hour 0–23, minute 0–59, second 0–59,
/// nanosecond 0–999 999 999.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct TimeSample {
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
    pub nanosecond: u32,
}

impl TimeSample {
    /// Builds a sample, wrapping hour/minute/second into their ranges and
    /// clamping the nanosecond (leap-second readings can exceed one second).
    pub fn new(hour: u32, minute: u32, second: u32, nanosecond: u32) -> Self {
        Self {
            hour: hour % 24,
            minute: minute % 60,
            second: second % 60,
            nanosecond: nanosecond.min(NANOS_PER_SEC - 1),
        }
    }

    /// Builds a sample from possibly-missing calendar components; absent fields are 0.
    pub fn from_components(
        hour: Option<u32>,
        minute: Option<u32>,
        second: Option<u32>,
        nanosecond: Option<u32>,
    ) -> Self {
        Self::new(
            hour.unwrap_or(0),
            minute.unwrap_or(0),
            second.unwrap_or(0),
            nanosecond.unwrap_or(0),
        )
    }

    /// Animation phase driving the tail sway and the gaze.
    ///
    /// `t = (second mod 2 + nanosecond / 1e9) · π`, so one full sway cycle takes
    /// two seconds and `t` stays in `[0, 2π)`.
    #[inline]
    pub fn phase(&self) -> f64 {
        let sub = f64::from(self.nanosecond) / f64::from(NANOS_PER_SEC);
        (f64::from(self.second % 2) + sub) * PI
    }
}

impl fmt::Display for TimeSample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}.{:09}",
            self.hour, self.minute, self.second, self.nanosecond
        )
    }
}

impl FromStr for TimeSample {
    type Err = TimeParseError;

    /// Parses `HH:MM`, `HH:MM:SS` or `HH:MM:SS.fraction` (up to 9 fraction digits).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (clock, fraction) = match s.split_once('.') {
            Some((clock, fraction)) => (clock, Some(fraction)),
            None => (s, None),
        };

        let mut fields = [0u32; 3];
        let mut count = 0;
        let mut col = 1;
        for part in clock.split(':') {
            if count == fields.len() {
                return Err(TimeParseError::new("too many `:`-separated fields", col));
            }
            fields[count] = parse_field(part, col)?;
            count += 1;
            col += part.len() + 1;
        }
        if count < 2 {
            return Err(TimeParseError::new("expected at least HH:MM", col));
        }

        let [hour, minute, second] = fields;
        check_range(hour, 23, "hour", 1)?;
        check_range(minute, 59, "minute", 1 + clock.find(':').map_or(0, |i| i + 1))?;
        check_range(second, 59, "second", clock.rfind(':').map_or(1, |i| i + 2))?;

        let nanosecond = match fraction {
            None => 0,
            Some(_) if count < 3 => {
                return Err(TimeParseError::new("fraction requires seconds", clock.len() + 1));
            }
            Some(frac) => parse_fraction(frac, clock.len() + 2)?,
        };

        Ok(Self { hour, minute, second, nanosecond })
    }
}

fn parse_field(part: &str, col: usize) -> Result<u32, TimeParseError> {
    if part.is_empty() || part.len() > 2 || !part.bytes().all(|b| b.is_ascii_digit()) {
        return Err(TimeParseError::new(format!("expected 1-2 digits, found `{part}`"), col));
    }
    part.parse()
        .map_err(|_| TimeParseError::new(format!("invalid number `{part}`"), col))
}

fn check_range(v: u32, max: u32, name: &str, col: usize) -> Result<(), TimeParseError> {
    if v > max {
        return Err(TimeParseError::new(format!("{name} {v} out of range 0-{max}"), col));
    }
    Ok(())
}

fn parse_fraction(frac: &str, col: usize) -> Result<u32, TimeParseError> {
    if frac.is_empty() || frac.len() > 9 || !frac.bytes().all(|b| b.is_ascii_digit()) {
        return Err(TimeParseError::new("expected 1-9 fraction digits", col));
    }
    let mut nanos = 0u32;
    for b in frac.bytes().chain(core::iter::repeat(b'0')).take(9) {
        nanos = nanos * 10 + u32::from(b - b'0');
    }
    Ok(nanos)
}
