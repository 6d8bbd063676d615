//! Calendar dates for posts, without timezone dependencies.
//!
//! Posts live under `YYYY/MM/DD/` directories; the date is read from those
//! path segments and used for ordering and display only.
//!
//! # Examples
//!
//! ```ignore
//! let date = PostDate::from_path(Path::new("2024/03/07/hello.md")).unwrap();
//! assert_eq!(date.to_iso(), "2024-03-07");
//! assert_eq!(date.to_display(), "March 7, 2024");
//! assert_eq!(date.to_published(), "2024-03-07T00:00:00Z");
//! ```

use anyhow::{Result, bail};
use serde::{Serialize, Serializer};
use std::path::{Component, Path};
use std::time::SystemTime;

const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Published timestamp used when a post path carries no date.
pub const DEFAULT_PUBLISHED: &str = "2025-01-01T00:00:00Z";

/// A calendar date. Field order gives chronological `Ord`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PostDate {
    pub year: u16,
    pub month: u8,
    pub day: u8,
}

impl PostDate {
    pub const fn from_ymd(year: u16, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }

    /// Date from the first three directory segments of a path relative to
    /// the blog root (`2024/03/07/post.md`).
    ///
    /// Returns `None` for shallower paths or segments that are not a valid date.
    pub fn from_path(rel: &Path) -> Option<Self> {
        let mut segments = rel.components().filter_map(|c| match c {
            Component::Normal(s) => s.to_str(),
            _ => None,
        });

        let year = segments.next()?.parse().ok()?;
        let month = segments.next()?.parse().ok()?;
        let day = segments.next()?.parse().ok()?;
        // The file name itself must follow the three date segments.
        segments.next()?;

        let date = Self::from_ymd(year, month, day);
        date.validate().ok()?;
        Some(date)
    }

    /// Today's date in UTC.
    pub fn today() -> Self {
        let secs = SystemTime::now()
            .duration_since(SystemTime::UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
        Self::from_days(i64::try_from(secs / 86_400).unwrap_or(0))
    }

    /// Civil date from days since 1970-01-01.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn from_days(days: i64) -> Self {
        let z = days + 719_468;
        let era = z.div_euclid(146_097);
        let doe = z.rem_euclid(146_097);
        let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
        let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
        let mp = (5 * doy + 2) / 153;
        let day = doy - (153 * mp + 2) / 5 + 1;
        let month = if mp < 10 { mp + 3 } else { mp - 9 };
        let year = yoe + era * 400 + i64::from(month <= 2);
        Self::from_ymd(year as u16, month as u8, day as u8)
    }

    pub fn validate(&self) -> Result<()> {
        let Self { year, month, day } = *self;

        if !(1..=12).contains(&month) {
            bail!("month is invalid: {month}");
        }

        let max_days = Self::days_in_month(year, month);
        if day == 0 || day > max_days {
            bail!("day is invalid: {day}");
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

    /// `YYYY-MM-DD`
    pub fn to_iso(self) -> String {
        format!("{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }

    /// `March 7, 2024`
    pub fn to_display(self) -> String {
        format!(
            "{} {}, {}",
            MONTHS[usize::from(self.month - 1)],
            self.day,
            self.year
        )
    }

    /// `YYYY-MM-DDT00:00:00Z`
    pub fn to_published(self) -> String {
        format!("{}T00:00:00Z", self.to_iso())
    }
}

impl Serialize for PostDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_iso())
    }
}
