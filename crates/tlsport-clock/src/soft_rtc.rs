// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Software real-time clock.

use core::sync::atomic::{AtomicI64, Ordering};

use crate::calendar::{CalendarTimestamp, Epoch, EpochSeconds};
use crate::config::POWER_ON_DEFAULT;
use crate::error::ClockError;
use crate::traits::{Monotonic, TimeSource};

const POWER_ON_UNIX_SECONDS: i64 = POWER_ON_DEFAULT.to_epoch_seconds(Epoch::Unix);

/// Largest base that survives the one-bit shift in [`pack`].
const MAX_BASE: i64 = i64::MAX >> 1;
const MIN_BASE: i64 = i64::MIN >> 1;

/// Packs the base (Unix seconds at uptime zero) and the set flag into one
/// word, base in the upper 63 bits and the flag in bit 0.
const fn pack(base: i64, set: bool) -> i64 {
    let base = if base > MAX_BASE {
        MAX_BASE
    } else if base < MIN_BASE {
        MIN_BASE
    } else {
        base
    };

    (base << 1) | set as i64
}

const fn unpack(word: i64) -> (i64, bool) {
    (word >> 1, word & 1 == 1)
}

/// Wall clock kept in software on top of a monotonic uptime counter.
///
/// Starts at [`POWER_ON_DEFAULT`] and advances with uptime until [`set`](Self::set)
/// anchors it to a real date, typically from network time sync. Reads are
/// lock-free, and the reading and its set state always come from the same
/// store.
pub struct SoftRtc<M: Monotonic> {
    monotonic: M,
    state: AtomicI64,
}

impl<M: Monotonic> SoftRtc<M> {
    /// Creates an unset clock.
    pub const fn new(monotonic: M) -> Self {
        Self {
            monotonic,
            state: AtomicI64::new(pack(POWER_ON_UNIX_SECONDS, false)),
        }
    }

    /// Anchors the clock so that it reads `now` at the current uptime.
    pub fn set(&self, now: CalendarTimestamp) {
        self.set_epoch_seconds(now.to_epoch_seconds(Epoch::Unix), Epoch::Unix);
    }

    /// Anchors the clock to `seconds` since `epoch`.
    pub fn set_epoch_seconds(&self, seconds: EpochSeconds, epoch: Epoch) {
        let unix = seconds.saturating_add(epoch.unix_offset());
        let base = unix.saturating_sub(self.uptime());

        self.state.store(pack(base, true), Ordering::Release);

        log::info!("soft rtc set to {} (unix)", unix);
    }

    /// Returns the clock to its power-on state.
    pub fn clear(&self) {
        self.state
            .store(pack(POWER_ON_UNIX_SECONDS, false), Ordering::Release);
    }

    fn uptime(&self) -> i64 {
        i64::try_from(self.monotonic.uptime_secs()).unwrap_or(i64::MAX)
    }
}

impl<M: Monotonic> TimeSource for SoftRtc<M> {
    fn datetime(&self) -> Result<CalendarTimestamp, ClockError> {
        self.read().map(|(timestamp, _)| timestamp)
    }

    fn is_set(&self) -> bool {
        unpack(self.state.load(Ordering::Acquire)).1
    }

    fn read(&self) -> Result<(CalendarTimestamp, bool), ClockError> {
        let (base, set) = unpack(self.state.load(Ordering::Acquire));
        let unix = base.saturating_add(self.uptime());

        let timestamp = CalendarTimestamp::from_epoch_seconds(unix, Epoch::Unix)
            .ok_or(ClockError::SourceUnavailable)?;

        Ok((timestamp, set))
    }
}
