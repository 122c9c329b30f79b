// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Proleptic Gregorian calendar arithmetic.
//!
//! Conversions are total: any field values convert without panicking or
//! overflowing, including values no well-formed clock would produce. The
//! bridge does not validate its input; a time source that presents
//! February 29 of a common year gets March 1.

/// Signed seconds since an [`Epoch`].
pub type EpochSeconds = i64;

/// Seconds in one civil day (no leap seconds).
pub const SECONDS_PER_DAY: i64 = 86_400;

const SECONDS_PER_HOUR: i64 = 3_600;
const SECONDS_PER_MINUTE: i64 = 60;

/// Days in a 400-year Gregorian cycle.
const DAYS_PER_ERA: i64 = 146_097;
/// Days from 0000-03-01 to 1970-01-01.
const UNIX_EPOCH_DAY_OFFSET: i64 = 719_468;
/// Seconds from 1970-01-01 to 2000-01-01.
const Y2000_UNIX_SECONDS: i64 = 946_684_800;

/// Reference date that epoch seconds count from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Epoch {
    /// 1970-01-01T00:00:00, the POSIX `time_t` convention.
    #[default]
    Unix,
    /// 2000-01-01T00:00:00, used by runtimes that count from the millennium.
    Y2000,
}

impl Epoch {
    /// Seconds from 1970-01-01 to this epoch.
    pub const fn unix_offset(self) -> i64 {
        match self {
            Epoch::Unix => 0,
            Epoch::Y2000 => Y2000_UNIX_SECONDS,
        }
    }
}

/// Broken-down UTC time as reported by a time source.
///
/// `month` and `day` are 1-based. Fields are not validated on construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CalendarTimestamp {
    /// Full year, e.g. `2023`.
    pub year: i32,
    /// Month of year, `1..=12`.
    pub month: u8,
    /// Day of month, `1..=31`.
    pub day: u8,
    /// Hour of day, `0..=23`.
    pub hour: u8,
    /// Minute of hour, `0..=59`.
    pub minute: u8,
    /// Second of minute, `0..=59`.
    pub second: u8,
}

impl CalendarTimestamp {
    /// Creates a timestamp from its fields.
    pub const fn new(year: i32, month: u8, day: u8, hour: u8, minute: u8, second: u8) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    /// Seconds elapsed from `epoch` to this timestamp.
    pub const fn to_epoch_seconds(&self, epoch: Epoch) -> EpochSeconds {
        let days = days_from_civil(self.year as i64, self.month as i64, self.day as i64);

        days * SECONDS_PER_DAY
            + self.hour as i64 * SECONDS_PER_HOUR
            + self.minute as i64 * SECONDS_PER_MINUTE
            + self.second as i64
            - epoch.unix_offset()
    }

    /// Converts epoch seconds back to a calendar timestamp.
    ///
    /// Returns `None` when the year does not fit an `i32`.
    pub fn from_epoch_seconds(seconds: EpochSeconds, epoch: Epoch) -> Option<Self> {
        let unix = seconds.checked_add(epoch.unix_offset())?;
        let days = unix.div_euclid(SECONDS_PER_DAY);
        let secs_of_day = unix.rem_euclid(SECONDS_PER_DAY);

        let (year, month, day) = civil_from_days(days);

        Some(Self {
            year: i32::try_from(year).ok()?,
            month,
            day,
            hour: (secs_of_day / SECONDS_PER_HOUR) as u8,
            minute: (secs_of_day % SECONDS_PER_HOUR / SECONDS_PER_MINUTE) as u8,
            second: (secs_of_day % SECONDS_PER_MINUTE) as u8,
        })
    }

    /// Day of week, `0` = Monday through `6` = Sunday.
    pub const fn weekday(&self) -> u8 {
        // 1970-01-01 was a Thursday
        let days = days_from_civil(self.year as i64, self.month as i64, self.day as i64);
        (days + 3).rem_euclid(7) as u8
    }

    /// Day of year, `1` = January 1.
    pub const fn year_day(&self) -> u16 {
        let year = self.year as i64;
        let days = days_from_civil(year, self.month as i64, self.day as i64);
        (days - days_from_civil(year, 1, 1) + 1) as u16
    }

    /// Whether every field is inside its calendar range for this year and
    /// month.
    ///
    /// The clock bridge never calls this; well-formedness is the time
    /// source's responsibility.
    pub const fn is_valid(&self) -> bool {
        self.month >= 1
            && self.month <= 12
            && self.day >= 1
            && self.day <= days_in_month(self.year, self.month)
            && self.hour < 24
            && self.minute < 60
            && self.second < 60
    }
}

/// Whether `year` is a Gregorian leap year.
pub const fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in `month` of `year`, or `0` for a month outside `1..=12`.
pub const fn days_in_month(year: i32, month: u8) -> u8 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

/// Days from 1970-01-01 to `year-month-day`.
///
/// Counts years from March so the leap day is the last day of the
/// computational year.
const fn days_from_civil(year: i64, month: i64, day: i64) -> i64 {
    let year = if month <= 2 { year - 1 } else { year };
    let era = year.div_euclid(400);
    let year_of_era = year.rem_euclid(400);
    let month_from_march = (month + 9).rem_euclid(12);
    let day_of_year = (153 * month_from_march + 2) / 5 + day - 1;
    let day_of_era = year_of_era * 365 + year_of_era / 4 - year_of_era / 100 + day_of_year;

    era * DAYS_PER_ERA + day_of_era - UNIX_EPOCH_DAY_OFFSET
}

/// Inverse of [`days_from_civil`].
const fn civil_from_days(days: i64) -> (i64, u8, u8) {
    let days = days + UNIX_EPOCH_DAY_OFFSET;
    let era = days.div_euclid(DAYS_PER_ERA);
    let day_of_era = days.rem_euclid(DAYS_PER_ERA);
    let year_of_era =
        (day_of_era - day_of_era / 1_460 + day_of_era / 36_524 - day_of_era / 146_096) / 365;
    let day_of_year = day_of_era - (365 * year_of_era + year_of_era / 4 - year_of_era / 100);
    let month_from_march = (5 * day_of_year + 2) / 153;
    let day = (day_of_year - (153 * month_from_march + 2) / 5 + 1) as u8;
    let month = if month_from_march < 10 {
        month_from_march + 3
    } else {
        month_from_march - 9
    } as u8;
    let year = year_of_era + era * 400;

    (if month <= 2 { year + 1 } else { year }, month, day)
}
