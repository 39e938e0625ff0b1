//! UTC datetime utilities without timezone dependencies.
//!
//! Provides a lightweight `DateTimeUtc` used for `date` field validation and
//! for stamping `publishedAt` on recipes.
//!
//! # Examples
//!
//! ```ignore
//! let dt = DateTimeUtc::parse("2024-06-15").unwrap();
//! let dt = DateTimeUtc::parse("2024-06-15T14:30:45.120Z").unwrap();
//! assert_eq!(dt.to_rfc3339(), "2024-06-15T14:30:45Z");
//! ```

use anyhow::{Result, bail};
use std::time::{SystemTime, UNIX_EPOCH};

/// UTC datetime without timezone complexity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateTimeUtc {
    pub year: u16,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
}

impl DateTimeUtc {
    pub const fn new(year: u16, month: u8, day: u8, hour: u8, minute: u8, second: u8) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    #[cfg(test)]
    pub const fn from_ymd(year: u16, month: u8, day: u8) -> Self {
        Self::new(year, month, day, 0, 0, 0)
    }

    /// Current wall-clock time in UTC.
    pub fn now() -> Self {
        let secs = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
        Self::from_unix(secs)
    }

    /// Convert seconds since the Unix epoch to a civil UTC datetime.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn from_unix(secs: u64) -> Self {
        let days = (secs / 86_400) as i64;
        let rem = secs % 86_400;

        // Days-to-civil over 400-year eras (proleptic Gregorian)
        let z = days + 719_468;
        let era = z.div_euclid(146_097);
        let doe = z.rem_euclid(146_097);
        let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
        let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
        let mp = (5 * doy + 2) / 153;
        let day = doy - (153 * mp + 2) / 5 + 1;
        let month = if mp < 10 { mp + 3 } else { mp - 9 };
        let year = yoe + era * 400 + i64::from(month <= 2);

        Self::new(
            year as u16,
            month as u8,
            day as u8,
            (rem / 3600) as u8,
            (rem / 60 % 60) as u8,
            (rem % 60) as u8,
        )
    }

    /// Parse "YYYY-MM-DD", "YYYY-MM-DDTHH:MM:SSZ" or the same with
    /// fractional seconds ("YYYY-MM-DDTHH:MM:SS.mmmZ").
    pub fn parse(s: &str) -> Option<Self> {
        let bytes = s.as_bytes();

        // Minimum: "YYYY-MM-DD" (10 chars)
        if bytes.len() < 10 {
            return None;
        }

        let year = parse_u16(&bytes[0..4])?;
        if bytes[4] != b'-' {
            return None;
        }
        let month = parse_u8(&bytes[5..7])?;
        if bytes[7] != b'-' {
            return None;
        }
        let day = parse_u8(&bytes[8..10])?;

        let (hour, minute, second) = if bytes.len() == 10 {
            (0, 0, 0)
        } else {
            parse_time(&bytes[10..])?
        };

        let dt = Self::new(year, month, day, hour, minute, second);
        dt.validate().ok()?;
        Some(dt)
    }

    #[allow(clippy::trivially_copy_pass_by_ref)]
    pub fn validate(&self) -> Result<()> {
        let Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        } = *self;

        if !(1..=12).contains(&month) {
            bail!("month is invalid: {month}");
        }

        let max_days = Self::days_in_month(year, month);
        if day == 0 || day > max_days {
            bail!("day is invalid: {day}");
        }
        if hour > 23 {
            bail!("hour is invalid: {hour}");
        }
        if minute > 59 {
            bail!("minute is invalid: {minute}");
        }
        if second > 59 {
            bail!("second is invalid: {second}");
        }

        Ok(())
    }

    #[inline]
    #[allow(clippy::manual_is_multiple_of)] // Manual impl for const fn
    const fn is_leap_year(year: u16) -> bool {
        year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
    }

    #[inline]
    const fn days_in_month(year: u16, month: u8) -> u8 {
        match month {
            1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
            4 | 6 | 9 | 11 => 30,
            2 if Self::is_leap_year(year) => 29,
            2 => 28,
            _ => 0,
        }
    }

    /// Format as RFC 3339 (ISO 8601): `YYYY-MM-DDTHH:MM:SSZ`
    pub fn to_rfc3339(self) -> String {
        format!(
            "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}Z",
            self.year, self.month, self.day, self.hour, self.minute, self.second
        )
    }
}

/// Parse the `THH:MM:SS[.fff]Z` tail of a timestamp.
fn parse_time(bytes: &[u8]) -> Option<(u8, u8, u8)> {
    // "THH:MM:SS" + at least "Z"
    if bytes.len() < 10 || bytes[0] != b'T' || bytes[3] != b':' || bytes[6] != b':' {
        return None;
    }
    let hour = parse_u8(&bytes[1..3])?;
    let minute = parse_u8(&bytes[4..6])?;
    let second = parse_u8(&bytes[7..9])?;

    match &bytes[9..] {
        [b'Z'] => {}
        [b'.', fraction @ .., b'Z']
            if !fraction.is_empty() && fraction.iter().all(u8::is_ascii_digit) => {}
        _ => return None,
    }

    Some((hour, minute, second))
}

/// Parse 2-digit ASCII number
#[inline]
fn parse_u8(bytes: &[u8]) -> Option<u8> {
    if bytes.len() != 2 {
        return None;
    }
    let d1 = bytes[0].wrapping_sub(b'0');
    let d2 = bytes[1].wrapping_sub(b'0');
    if d1 > 9 || d2 > 9 {
        return None;
    }
    Some(d1 * 10 + d2)
}

/// Parse 4-digit ASCII number
#[inline]
fn parse_u16(bytes: &[u8]) -> Option<u16> {
    if bytes.len() != 4 {
        return None;
    }
    let mut result = 0u16;
    for &b in bytes {
        let d = b.wrapping_sub(b'0');
        if d > 9 {
            return None;
        }
        result = result * 10 + u16::from(d);
    }
    Some(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date_only() {
        assert_eq!(
            DateTimeUtc::parse("2024-06-15"),
            Some(DateTimeUtc::from_ymd(2024, 6, 15))
        );
    }

    #[test]
    fn test_parse_with_time() {
        assert_eq!(
            DateTimeUtc::parse("2024-06-15T14:30:45Z"),
            Some(DateTimeUtc::new(2024, 6, 15, 14, 30, 45))
        );
    }

    #[test]
    fn test_parse_with_fraction() {
        assert_eq!(
            DateTimeUtc::parse("2024-06-15T14:30:45.123Z"),
            Some(DateTimeUtc::new(2024, 6, 15, 14, 30, 45))
        );
    }

    #[test]
    fn test_parse_invalid() {
        assert_eq!(DateTimeUtc::parse(""), None);
        assert_eq!(DateTimeUtc::parse("2024/06/15"), None);
        assert_eq!(DateTimeUtc::parse("2024-13-01"), None);
        assert_eq!(DateTimeUtc::parse("2023-02-29"), None);
        assert_eq!(DateTimeUtc::parse("2024-06-15T14:30:45"), None);
        assert_eq!(DateTimeUtc::parse("2024-06-15T14:30:45.Z"), None);
        assert_eq!(DateTimeUtc::parse("2024-06-15T25:00:00Z"), None);
    }

    #[test]
    fn test_validate_leap_year() {
        assert!(DateTimeUtc::new(2024, 2, 29, 12, 0, 0).validate().is_ok());
        assert!(DateTimeUtc::new(2000, 2, 29, 12, 0, 0).validate().is_ok());
        assert!(DateTimeUtc::new(1900, 2, 29, 12, 0, 0).validate().is_err());
    }

    #[test]
    fn test_from_unix() {
        assert_eq!(DateTimeUtc::from_unix(0), DateTimeUtc::from_ymd(1970, 1, 1));
        assert_eq!(
            DateTimeUtc::from_unix(1_718_461_845),
            DateTimeUtc::new(2024, 6, 15, 14, 30, 45)
        );
        assert_eq!(
            DateTimeUtc::from_unix(951_782_400),
            DateTimeUtc::from_ymd(2000, 2, 29)
        );
    }

    #[test]
    fn test_rfc3339_roundtrips_through_parse() {
        let dt = DateTimeUtc::new(2024, 12, 31, 23, 59, 59);
        assert_eq!(DateTimeUtc::parse(&dt.to_rfc3339()), Some(dt));
    }
}
