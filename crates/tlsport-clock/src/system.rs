// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Host clocks (`std` feature).

use std::time::{Instant, SystemTime, UNIX_EPOCH};

use crate::calendar::{CalendarTimestamp, Epoch};
use crate::error::ClockError;
use crate::traits::{Monotonic, TimeSource};

/// Host wall clock via [`SystemTime`].
///
/// Host clocks are assumed set. Dates before 1970 are reported as
/// unavailable.
pub struct SystemTimeSource {}

impl TimeSource for SystemTimeSource {
    fn datetime(&self) -> Result<CalendarTimestamp, ClockError> {
        let elapsed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_err(|_| ClockError::SourceUnavailable)?;
        let seconds = i64::try_from(elapsed.as_secs()).map_err(|_| ClockError::SourceUnavailable)?;

        CalendarTimestamp::from_epoch_seconds(seconds, Epoch::Unix).ok_or(ClockError::SourceUnavailable)
    }
}

/// Host uptime counter via [`Instant`], measured from construction.
pub struct StdMonotonic {
    started: Instant,
}

impl StdMonotonic {
    /// Starts counting from now.
    pub fn new() -> Self {
        Self {
            started: Instant::now(),
        }
    }
}

impl Default for StdMonotonic {
    fn default() -> Self {
        Self::new()
    }
}

impl Monotonic for StdMonotonic {
    fn uptime_secs(&self) -> u64 {
        self.started.elapsed().as_secs()
    }
}
