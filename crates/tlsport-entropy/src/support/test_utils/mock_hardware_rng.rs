// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::sync::atomic::{AtomicUsize, Ordering};

use crate::error::EntropyError;
use crate::system::SystemRng;
use crate::traits::HardwareRng;

/// Configurable behavior for [`MockHardwareRng`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockHardwareRngBehaviour {
    /// Normal operation (delegates to the system RNG).
    None,
    /// Always fail read_random.
    FailAlways,
    /// Fail read_random on the Nth call (1-indexed: 1 = first call fails).
    FailAtNthRead(usize),
    /// Write at most this many bytes and report that count, like a driver
    /// that gives up early without flagging a fault.
    ShortRead(usize),
}

/// Mock hardware RNG driver for testing.
///
/// Wraps [`SystemRng`] but allows simulating faults via [`MockHardwareRngBehaviour`].
/// `Sync`, so it can sit behind a registered hook.
pub struct MockHardwareRng {
    inner: SystemRng,
    behaviour: MockHardwareRngBehaviour,
    read_count: AtomicUsize,
}

impl MockHardwareRng {
    /// Creates a new mock RNG with the specified behavior.
    pub fn new(behaviour: MockHardwareRngBehaviour) -> Self {
        Self {
            inner: SystemRng {},
            behaviour,
            read_count: AtomicUsize::new(0),
        }
    }

    /// Changes the mock behavior at runtime.
    pub fn change_behaviour(&mut self, behaviour: MockHardwareRngBehaviour) {
        self.behaviour = behaviour;
    }

    /// Resets the call counter.
    pub fn reset_count(&self) {
        self.read_count.store(0, Ordering::Relaxed);
    }

    /// Returns the current call count.
    pub fn call_count(&self) -> usize {
        self.read_count.load(Ordering::Relaxed)
    }
}

impl HardwareRng for MockHardwareRng {
    fn read_random(&self, dest: &mut [u8]) -> Result<usize, EntropyError> {
        let current = self.read_count.fetch_add(1, Ordering::Relaxed);

        match self.behaviour {
            MockHardwareRngBehaviour::None => self.inner.read_random(dest),
            MockHardwareRngBehaviour::FailAlways => Err(EntropyError::EntropyNotAvailable),
            MockHardwareRngBehaviour::FailAtNthRead(n) if current + 1 == n => {
                Err(EntropyError::EntropyNotAvailable)
            }
            MockHardwareRngBehaviour::FailAtNthRead(_) => self.inner.read_random(dest),
            MockHardwareRngBehaviour::ShortRead(limit) => {
                let filled = limit.min(dest.len());
                self.inner.read_random(&mut dest[..filled])
            }
        }
    }
}
