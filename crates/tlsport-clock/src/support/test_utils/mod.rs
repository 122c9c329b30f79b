// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Test utilities for mocking time sources and uptime counters.

#[cfg(target_has_atomic = "64")]
mod manual_monotonic;
mod mock_time_source;

#[cfg(target_has_atomic = "64")]
pub use manual_monotonic::ManualMonotonic;
pub use mock_time_source::{MockTimeSource, MockTimeSourceBehaviour};
