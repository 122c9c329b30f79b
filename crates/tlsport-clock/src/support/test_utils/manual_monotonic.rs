// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::sync::atomic::{AtomicU64, Ordering};

use crate::traits::Monotonic;

/// Uptime counter advanced by hand.
pub struct ManualMonotonic {
    uptime: AtomicU64,
}

impl ManualMonotonic {
    /// Starts at `uptime_secs`.
    pub fn new(uptime_secs: u64) -> Self {
        Self {
            uptime: AtomicU64::new(uptime_secs),
        }
    }

    /// Moves uptime forward by `secs`.
    pub fn advance(&self, secs: u64) {
        self.uptime.fetch_add(secs, Ordering::Relaxed);
    }
}

impl Monotonic for ManualMonotonic {
    fn uptime_secs(&self) -> u64 {
        self.uptime.load(Ordering::Relaxed)
    }
}
