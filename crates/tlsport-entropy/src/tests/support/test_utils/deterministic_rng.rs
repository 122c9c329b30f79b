// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::support::test_utils::DeterministicRng;
use crate::traits::HardwareRng;

#[test]
fn test_same_seed_same_stream() {
    let a = DeterministicRng::new(42);
    let b = DeterministicRng::new(42);

    let mut first = [0u8; 37];
    let mut second = [0u8; 37];
    a.read_random(&mut first).expect("Failed to read_random(..)");
    b.read_random(&mut second).expect("Failed to read_random(..)");

    assert_eq!(first, second);
}

#[test]
fn test_different_seeds_differ() {
    let a = DeterministicRng::new(1);
    let b = DeterministicRng::new(2);

    let mut first = [0u8; 32];
    let mut second = [0u8; 32];
    a.read_random(&mut first).expect("Failed to read_random(..)");
    b.read_random(&mut second).expect("Failed to read_random(..)");

    assert_ne!(first, second);
}

#[test]
fn test_stream_advances_between_reads() {
    let rng = DeterministicRng::new(7);

    let mut first = [0u8; 16];
    let mut second = [0u8; 16];
    rng.read_random(&mut first).expect("Failed to read_random(..)");
    rng.read_random(&mut second).expect("Failed to read_random(..)");

    assert_ne!(first, second);
}
