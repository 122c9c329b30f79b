// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Test utilities for mocking hardware RNG drivers.
//!
//! Provides a failure-injecting mock and a reproducible byte stream.

#[cfg(target_has_atomic = "64")]
mod deterministic_rng;
mod mock_hardware_rng;

#[cfg(target_has_atomic = "64")]
pub use deterministic_rng::DeterministicRng;
pub use mock_hardware_rng::{MockHardwareRng, MockHardwareRngBehaviour};
