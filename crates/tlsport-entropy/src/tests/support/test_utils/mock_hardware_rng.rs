// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::error::EntropyError;
use crate::support::test_utils::{MockHardwareRng, MockHardwareRngBehaviour};
use crate::traits::HardwareRng;

#[test]
fn test_mock_hardware_rng_behaviour_none() {
    let mock = MockHardwareRng::new(MockHardwareRngBehaviour::None);
    let mut buf = [0u8; 32];

    let result = mock.read_random(&mut buf);

    assert_eq!(result, Ok(32));
}

#[test]
fn test_mock_hardware_rng_behaviour_fail_always() {
    let mock = MockHardwareRng::new(MockHardwareRngBehaviour::FailAlways);
    let mut buf = [0u8; 32];

    let result = mock.read_random(&mut buf);

    assert!(matches!(result, Err(EntropyError::EntropyNotAvailable)));
}

#[test]
fn test_mock_hardware_rng_behaviour_fail_at_nth_third_call() {
    let mock = MockHardwareRng::new(MockHardwareRngBehaviour::FailAtNthRead(3));
    let mut buf = [0u8; 32];

    // First two calls succeed
    assert!(mock.read_random(&mut buf).is_ok());
    assert!(mock.read_random(&mut buf).is_ok());

    // Third call fails
    let result = mock.read_random(&mut buf);
    assert!(matches!(result, Err(EntropyError::EntropyNotAvailable)));

    // Fourth call succeeds
    assert!(mock.read_random(&mut buf).is_ok());
}

#[test]
fn test_mock_hardware_rng_behaviour_short_read() {
    let mock = MockHardwareRng::new(MockHardwareRngBehaviour::ShortRead(5));
    let mut buf = [0u8; 32];

    assert_eq!(mock.read_random(&mut buf), Ok(5));

    // Limit larger than the buffer is clamped
    let mut small = [0u8; 3];
    assert_eq!(mock.read_random(&mut small), Ok(3));
}

#[test]
fn test_mock_hardware_rng_call_count() {
    let mock = MockHardwareRng::new(MockHardwareRngBehaviour::None);
    let mut buf = [0u8; 32];

    assert_eq!(mock.call_count(), 0);

    mock.read_random(&mut buf).unwrap();
    assert_eq!(mock.call_count(), 1);

    mock.read_random(&mut buf).unwrap();
    assert_eq!(mock.call_count(), 2);

    mock.reset_count();
    assert_eq!(mock.call_count(), 0);
}

#[test]
fn test_mock_hardware_rng_change_behaviour() {
    let mut mock = MockHardwareRng::new(MockHardwareRngBehaviour::None);
    let mut bytes = [0u8; 32];

    assert!(mock.read_random(&mut bytes).is_ok());

    mock.change_behaviour(MockHardwareRngBehaviour::FailAlways);
    assert!(mock.read_random(&mut bytes).is_err());

    mock.change_behaviour(MockHardwareRngBehaviour::None);
    assert!(mock.read_random(&mut bytes).is_ok());
}
