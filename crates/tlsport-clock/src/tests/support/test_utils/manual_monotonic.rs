// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::support::test_utils::ManualMonotonic;
use crate::traits::Monotonic;

#[test]
fn test_manual_monotonic_advance() {
    let monotonic = ManualMonotonic::new(5);
    assert_eq!(monotonic.uptime_secs(), 5);

    monotonic.advance(10);
    assert_eq!(monotonic.uptime_secs(), 15);

    let by_ref = &monotonic;
    assert_eq!(by_ref.uptime_secs(), 15);
}
