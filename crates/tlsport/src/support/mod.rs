// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Test doubles re-exported from the bridge crates

/// Time source and monotonic doubles.
#[cfg(feature = "test-utils")]
pub mod clock {
    pub use tlsport_clock::test_utils::*;
}
/// Hardware RNG doubles.
#[cfg(feature = "test-utils")]
pub mod entropy {
    pub use tlsport_entropy::test_utils::*;
}
