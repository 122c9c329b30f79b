// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # tlsport_clock
//!
//! Trusted-time bridge for the time hook of an embedded TLS library.
//!
//! The TLS library compares certificate `notBefore`/`notAfter` against the
//! value this crate produces. The value is read from a [`TimeSource`] as a
//! [`CalendarTimestamp`] and converted to [`EpochSeconds`] with proleptic
//! Gregorian arithmetic.
//!
//! ## Trust
//!
//! The hook signature has no failure channel, so [`WallClock::now`] always
//! returns a value. A device whose clock was never set reports its power-on
//! default date, and certificate checks run against that date. Such a check
//! may reject a valid certificate or, when the default date falls inside an
//! expired certificate's window, accept it. Integrators that need to know
//! whether the clock can be trusted call [`TrustedClock::try_now`], which
//! reports [`ClockError::Untrusted`] for unset or implausible readings, and
//! hold off TLS until it succeeds. Nothing in this crate enforces that.
//!
//! ## Epoch values are points in time
//!
//! The backing clock can be rewound or cleared at any moment. Successive
//! readings are not monotonic and must never be used as a sequence counter.
//!
//! ## Example
//!
//! ```rust
//! use tlsport_clock::{CalendarTimestamp, ClockError, TimeSource, TrustedClock, WallClock};
//!
//! struct NetworkSynced;
//!
//! impl TimeSource for NetworkSynced {
//!     fn datetime(&self) -> Result<CalendarTimestamp, ClockError> {
//!         Ok(CalendarTimestamp::new(2023, 3, 15, 12, 0, 0))
//!     }
//! }
//!
//! let clock = TrustedClock::new(NetworkSynced);
//! assert_eq!(clock.now(), 1_678_881_600);
//! assert_eq!(clock.try_now(), Ok(1_678_881_600));
//! ```

#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

#[cfg(test)]
mod tests;

mod calendar;
mod clock;
mod config;
mod error;
#[cfg(target_has_atomic = "64")]
mod soft_rtc;
mod support;
#[cfg(feature = "std")]
mod system;
mod traits;

pub use calendar::{
    CalendarTimestamp, Epoch, EpochSeconds, SECONDS_PER_DAY, days_in_month, is_leap_year,
};
pub use clock::TrustedClock;
pub use config::{ClockConfig, POWER_ON_DEFAULT};
pub use error::ClockError;
#[cfg(target_has_atomic = "64")]
pub use soft_rtc::SoftRtc;
#[cfg(feature = "std")]
pub use system::{StdMonotonic, SystemTimeSource};
pub use traits::{Monotonic, TimeSource, WallClock};

#[cfg(any(test, feature = "test-utils"))]
pub use support::test_utils;
