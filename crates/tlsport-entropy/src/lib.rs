// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # tlsport_entropy
//!
//! Hardware entropy bridge for the hardware-poll hook of an embedded TLS
//! library.
//!
//! The TLS library seeds its DRBG by calling the hook repeatedly until it has
//! gathered enough entropy. Every call must either fill the whole output
//! buffer with fresh hardware randomness or fail. A DRBG seeded from a buffer
//! that is half random and half stale shows no symptom, so a partial fill is
//! never reported as success and nothing weaker is ever substituted.
//!
//! ## Core Types
//!
//! - [`EntropyBridge`]: all-or-nothing poll over an injected [`HardwareRng`]
//! - [`SystemRng`]: OS/hardware CSPRNG (via `getrandom`)
//! - [`TlsRng`]: fallible `rand_core` adapter over any [`HardwarePoll`]
//!
//! ## Traits
//!
//! - [`HardwareRng`]: the raw `readRandom` primitive of the RNG driver
//! - [`HardwarePoll`]: object-safe poll interface stored by the hook registry
//!
//! ## Example
//!
//! ```rust
//! use tlsport_entropy::{EntropyBridge, HardwarePoll, SystemRng};
//!
//! let bridge = EntropyBridge::new(SystemRng {});
//!
//! let mut seed = [0u8; 48];
//! let filled = bridge.poll(&mut seed).expect("Failed to poll entropy");
//! assert_eq!(filled, seed.len());
//! ```
//!
//! ## Failure policy
//!
//! Failures propagate immediately with no retry. Retry policy, if any,
//! belongs to the RNG driver or to the TLS library. On failure the output
//! buffer is zeroized before returning.

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

#[cfg(test)]
mod tests;

mod bridge;
mod error;
mod rng;
mod support;
mod system;
mod traits;

pub use bridge::{EntropyBridge, MBEDTLS_ERR_ENTROPY_SOURCE_FAILED, POLL_SUCCESS};
pub use error::EntropyError;
pub use rng::TlsRng;
pub use system::SystemRng;
pub use traits::{HardwarePoll, HardwareRng};

#[cfg(any(test, feature = "test-utils"))]
pub use support::test_utils;
