// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::sync::atomic::{AtomicUsize, Ordering};

use crate::calendar::CalendarTimestamp;
use crate::error::ClockError;
use crate::traits::TimeSource;

/// Configurable behavior for [`MockTimeSource`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockTimeSourceBehaviour {
    /// Report this timestamp as a set clock.
    Fixed(CalendarTimestamp),
    /// Report this timestamp, but flag the clock as never set.
    Unset(CalendarTimestamp),
    /// Always fail datetime.
    FailAlways,
}

/// Mock time source for testing.
///
/// Reports a fixed timestamp; `Sync`, so it can sit behind a registered hook.
pub struct MockTimeSource {
    behaviour: MockTimeSourceBehaviour,
    datetime_count: AtomicUsize,
}

impl MockTimeSource {
    /// Creates a new mock time source with the specified behavior.
    pub fn new(behaviour: MockTimeSourceBehaviour) -> Self {
        Self {
            behaviour,
            datetime_count: AtomicUsize::new(0),
        }
    }

    /// Changes the mock behavior at runtime, e.g. to rewind the clock.
    pub fn change_behaviour(&mut self, behaviour: MockTimeSourceBehaviour) {
        self.behaviour = behaviour;
    }

    /// Returns the current call count.
    pub fn call_count(&self) -> usize {
        self.datetime_count.load(Ordering::Relaxed)
    }
}

impl TimeSource for MockTimeSource {
    fn datetime(&self) -> Result<CalendarTimestamp, ClockError> {
        self.datetime_count.fetch_add(1, Ordering::Relaxed);

        match self.behaviour {
            MockTimeSourceBehaviour::Fixed(timestamp) => Ok(timestamp),
            MockTimeSourceBehaviour::Unset(timestamp) => Ok(timestamp),
            MockTimeSourceBehaviour::FailAlways => Err(ClockError::SourceUnavailable),
        }
    }

    fn is_set(&self) -> bool {
        !matches!(self.behaviour, MockTimeSourceBehaviour::Unset(_))
    }
}
