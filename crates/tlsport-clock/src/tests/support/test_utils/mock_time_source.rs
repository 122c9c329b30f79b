// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::calendar::CalendarTimestamp;
use crate::error::ClockError;
use crate::support::test_utils::{MockTimeSource, MockTimeSourceBehaviour};
use crate::traits::TimeSource;

const TIMESTAMP: CalendarTimestamp = CalendarTimestamp::new(2023, 3, 15, 12, 0, 0);

#[test]
fn test_mock_time_source_fixed() {
    let mock = MockTimeSource::new(MockTimeSourceBehaviour::Fixed(TIMESTAMP));

    assert_eq!(mock.datetime(), Ok(TIMESTAMP));
    assert!(mock.is_set());
}

#[test]
fn test_mock_time_source_unset() {
    let mock = MockTimeSource::new(MockTimeSourceBehaviour::Unset(TIMESTAMP));

    assert_eq!(mock.datetime(), Ok(TIMESTAMP));
    assert!(!mock.is_set());
}

#[test]
fn test_mock_time_source_fail_always() {
    let mock = MockTimeSource::new(MockTimeSourceBehaviour::FailAlways);

    assert_eq!(mock.datetime(), Err(ClockError::SourceUnavailable));
}

#[test]
fn test_mock_time_source_call_count_and_change_behaviour() {
    let mut mock = MockTimeSource::new(MockTimeSourceBehaviour::FailAlways);

    assert_eq!(mock.call_count(), 0);
    assert!(mock.datetime().is_err());

    mock.change_behaviour(MockTimeSourceBehaviour::Fixed(TIMESTAMP));
    assert!(mock.datetime().is_ok());
    assert_eq!(mock.call_count(), 2);
}
