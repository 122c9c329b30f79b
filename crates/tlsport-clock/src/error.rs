// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use thiserror::Error;

use crate::calendar::EpochSeconds;

/// Errors reported by time sources and by [`TrustedClock::try_now`](crate::TrustedClock::try_now).
///
/// None of these reach the TLS library: its time hook has no failure
/// channel. They exist so the bridge and its integrators can tell a
/// trustworthy reading from one that merely converts cleanly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ClockError {
    /// The time source could not be read.
    #[error("SourceUnavailable")]
    SourceUnavailable,

    /// The time source has not been set, reports its unset sentinel, or
    /// reports a time below the configured trust floor.
    ///
    /// `seconds` is the converted reading, which the hook still returns.
    #[error("Untrusted: time source reports {seconds}s, clock is unset or implausible")]
    Untrusted {
        /// Epoch seconds converted from the untrusted reading.
        seconds: EpochSeconds,
    },
}
