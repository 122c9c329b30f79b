// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # tlsport
//!
//! Platform glue between an embedded TLS library and the board it runs on.
//!
//! The TLS library calls two hooks:
//!
//! - a hardware-poll hook when its entropy pool needs seed material, served by
//!   an [`EntropyBridge`](entropy::EntropyBridge) over the board's RNG;
//! - a time hook when it checks certificate validity windows, served by a
//!   [`TrustedClock`](clock::TrustedClock) over the board's RTC.
//!
//! Bridges are installed into a process-wide registry and the hooks dispatch
//! to whatever is registered at call time.
//!
//! ```rust
//! use tlsport::clock::{CalendarTimestamp, ClockError, TimeSource, TrustedClock};
//! use tlsport::entropy::{EntropyBridge, POLL_SUCCESS, SystemRng};
//!
//! struct Rtc;
//!
//! impl TimeSource for Rtc {
//!     fn datetime(&self) -> Result<CalendarTimestamp, ClockError> {
//!         Ok(CalendarTimestamp::new(2023, 3, 15, 12, 0, 0))
//!     }
//! }
//!
//! static ENTROPY: EntropyBridge<SystemRng> = EntropyBridge::new(SystemRng {});
//! static CLOCK: TrustedClock<Rtc> = TrustedClock::new(Rtc);
//!
//! tlsport::register_entropy(&ENTROPY).persist();
//! tlsport::register_clock(&CLOCK).persist();
//!
//! let mut seed = [0u8; 32];
//! let mut olen = 0;
//! assert_eq!(tlsport::hardware_poll(&mut seed, &mut olen), POLL_SUCCESS);
//! assert_eq!(olen, 32);
//! assert_eq!(tlsport::platform_time(), 1_678_881_600);
//! ```
//!
//! ## Features
//!
//! - `std`: registry backed by `std::sync::RwLock` and the host time sources
//!   from `tlsport-clock`. Without it the registry uses a spin lock.
//! - `export-hooks`: exports [`mbedtls_hardware_poll`] and
//!   [`tlsport_platform_time`] under their unmangled names for the C linker.
//! - `test-utils`: re-exports the test doubles of the bridge crates.
//!
//! ## Execution context
//!
//! Every hook may block while the RNG fills a buffer or the RTC is read, and
//! the registry takes a lock. Call them from task context only, never from an
//! interrupt handler.

#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

#[cfg(test)]
mod tests;

mod hooks;
mod registry;
pub mod support;

pub use hooks::{
    ClockGuard, EntropyGuard, hardware_poll, mbedtls_hardware_poll, platform_time,
    register_clock, register_entropy, tlsport_platform_time,
};

pub use tlsport_board as board;
pub use tlsport_clock as clock;
pub use tlsport_entropy as entropy;
