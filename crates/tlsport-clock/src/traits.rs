// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::calendar::{CalendarTimestamp, EpochSeconds};
use crate::error::ClockError;

/// Source of the current calendar time, typically an RTC or a soft clock.
///
/// Implementations are read from the TLS library's handshake thread. They
/// must not be read from interrupt context unless the read is lock-free.
pub trait TimeSource {
    /// Reads the current time.
    ///
    /// # Errors
    ///
    /// Returns [`ClockError::SourceUnavailable`] if the clock cannot be read.
    fn datetime(&self) -> Result<CalendarTimestamp, ClockError>;

    /// Whether the clock has been set since power-on.
    ///
    /// Sources that cannot tell return `true`; the configured unset sentinel
    /// still applies to them.
    fn is_set(&self) -> bool {
        true
    }

    /// Reads the current time together with the set state it belongs to.
    ///
    /// The default reads [`datetime`](Self::datetime) then
    /// [`is_set`](Self::is_set). Sources that can be set concurrently must
    /// override it so both come from one snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`ClockError::SourceUnavailable`] if the clock cannot be read.
    fn read(&self) -> Result<(CalendarTimestamp, bool), ClockError> {
        let timestamp = self.datetime()?;
        Ok((timestamp, self.is_set()))
    }
}

impl<T: TimeSource + ?Sized> TimeSource for &T {
    fn datetime(&self) -> Result<CalendarTimestamp, ClockError> {
        (**self).datetime()
    }

    fn is_set(&self) -> bool {
        (**self).is_set()
    }

    fn read(&self) -> Result<(CalendarTimestamp, bool), ClockError> {
        (**self).read()
    }
}

/// Object-safe wall clock, the shape of the TLS library's time hook.
pub trait WallClock {
    /// Current time in epoch seconds. Always returns a value.
    fn now(&self) -> EpochSeconds;
}

/// Monotonic uptime counter that drives a soft RTC.
pub trait Monotonic {
    /// Whole seconds since power-on.
    fn uptime_secs(&self) -> u64;
}

impl<T: Monotonic + ?Sized> Monotonic for &T {
    fn uptime_secs(&self) -> u64 {
        (**self).uptime_secs()
    }
}
