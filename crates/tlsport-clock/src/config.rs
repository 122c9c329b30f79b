// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::calendar::{CalendarTimestamp, Epoch, EpochSeconds};

/// Date a soft RTC reports after power-on, before anything sets it.
pub const POWER_ON_DEFAULT: CalendarTimestamp = CalendarTimestamp::new(2000, 1, 1, 0, 0, 0);

/// Configuration for [`TrustedClock`](crate::TrustedClock).
///
/// None of these settings change the value handed to the TLS library. They
/// only decide when a reading is flagged as untrusted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockConfig {
    /// Epoch the TLS library counts from.
    pub epoch: Epoch,
    /// Timestamp the time source reports while unset. Defaults to
    /// [`POWER_ON_DEFAULT`].
    pub unset_sentinel: Option<CalendarTimestamp>,
    /// Readings earlier than this (in `epoch` seconds) are flagged as
    /// untrusted. A firmware build date is a typical floor.
    pub trust_floor: Option<EpochSeconds>,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl ClockConfig {
    /// Unix epoch, [`POWER_ON_DEFAULT`] as the unset sentinel, no trust floor.
    pub const fn new() -> Self {
        Self {
            epoch: Epoch::Unix,
            unset_sentinel: Some(POWER_ON_DEFAULT),
            trust_floor: None,
        }
    }

    /// Sets the epoch.
    pub const fn with_epoch(mut self, epoch: Epoch) -> Self {
        self.epoch = epoch;
        self
    }

    /// Sets or clears the unset sentinel.
    pub const fn with_unset_sentinel(mut self, sentinel: Option<CalendarTimestamp>) -> Self {
        self.unset_sentinel = sentinel;
        self
    }

    /// Sets or clears the trust floor.
    pub const fn with_trust_floor(mut self, floor: Option<EpochSeconds>) -> Self {
        self.trust_floor = floor;
        self
    }
}
