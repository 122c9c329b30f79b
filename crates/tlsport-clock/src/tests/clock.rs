// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::calendar::{CalendarTimestamp, Epoch};
use crate::clock::TrustedClock;
use crate::config::{ClockConfig, POWER_ON_DEFAULT};
use crate::error::ClockError;
use crate::support::test_utils::{MockTimeSource, MockTimeSourceBehaviour};
use crate::traits::WallClock;

const REFERENCE: CalendarTimestamp = CalendarTimestamp::new(2023, 3, 15, 12, 0, 0);
const REFERENCE_UNIX: i64 = 1_678_881_600;
const POWER_ON_UNIX: i64 = 946_684_800;

fn fixed(timestamp: CalendarTimestamp) -> MockTimeSource {
    MockTimeSource::new(MockTimeSourceBehaviour::Fixed(timestamp))
}

#[test]
fn test_now_returns_reference_value() {
    let clock = TrustedClock::new(fixed(REFERENCE));

    assert_eq!(clock.now(), REFERENCE_UNIX);
    assert_eq!(clock.try_now(), Ok(REFERENCE_UNIX));
}

#[test]
fn test_now_honours_configured_epoch() {
    let config = ClockConfig::default().with_epoch(Epoch::Y2000);
    let clock = TrustedClock::with_config(fixed(REFERENCE), config);

    assert_eq!(clock.now(), REFERENCE_UNIX - POWER_ON_UNIX);
}

#[test]
fn test_now_reads_source_on_every_call() {
    let clock = TrustedClock::new(fixed(REFERENCE));

    clock.now();
    clock.now();
    clock.now();

    assert_eq!(clock.source().call_count(), 3);
}

// An unset clock reporting its power-on default yields a fixed, reproducible
// value. The hook returns it; only try_now flags it.
#[test]
fn test_unset_default_date_is_reproducible() {
    let clock = TrustedClock::new(fixed(POWER_ON_DEFAULT));

    assert_eq!(clock.now(), POWER_ON_UNIX);
    assert_eq!(clock.now(), POWER_ON_UNIX);
    assert_eq!(
        clock.try_now(),
        Err(ClockError::Untrusted {
            seconds: POWER_ON_UNIX
        })
    );
}

#[test]
fn test_unset_flag_is_untrusted_even_off_sentinel() {
    let source = MockTimeSource::new(MockTimeSourceBehaviour::Unset(REFERENCE));
    let clock = TrustedClock::new(source);

    assert_eq!(
        clock.try_now(),
        Err(ClockError::Untrusted {
            seconds: REFERENCE_UNIX
        })
    );
    // Outward value is not corrected
    assert_eq!(clock.now(), REFERENCE_UNIX);
}

#[test]
fn test_sentinel_can_be_disabled() {
    let config = ClockConfig::default().with_unset_sentinel(None);
    let clock = TrustedClock::with_config(fixed(POWER_ON_DEFAULT), config);

    assert_eq!(clock.try_now(), Ok(POWER_ON_UNIX));
}

#[test]
fn test_trust_floor() {
    let config = ClockConfig::default().with_trust_floor(Some(REFERENCE_UNIX));

    let at_floor = TrustedClock::with_config(fixed(REFERENCE), config);
    assert_eq!(at_floor.try_now(), Ok(REFERENCE_UNIX));

    let below = CalendarTimestamp::new(2023, 3, 15, 11, 59, 59);
    let below_floor = TrustedClock::with_config(fixed(below), config);
    assert_eq!(
        below_floor.try_now(),
        Err(ClockError::Untrusted {
            seconds: REFERENCE_UNIX - 1
        })
    );
    assert_eq!(below_floor.now(), REFERENCE_UNIX - 1);
}

#[test]
fn test_source_unavailable_reports_sentinel_value() {
    let clock = TrustedClock::new(MockTimeSource::new(MockTimeSourceBehaviour::FailAlways));

    assert_eq!(clock.try_now(), Err(ClockError::SourceUnavailable));
    assert_eq!(clock.now(), POWER_ON_UNIX);
}

#[test]
fn test_source_unavailable_without_sentinel_reports_epoch() {
    let config = ClockConfig::default()
        .with_epoch(Epoch::Y2000)
        .with_unset_sentinel(None);
    let clock = TrustedClock::with_config(
        MockTimeSource::new(MockTimeSourceBehaviour::FailAlways),
        config,
    );

    assert_eq!(clock.now(), 0);
}

#[test]
fn test_rewound_source_is_passed_through() {
    let mut clock_source = fixed(REFERENCE);
    clock_source.change_behaviour(MockTimeSourceBehaviour::Fixed(CalendarTimestamp::new(
        2021, 1, 1, 0, 0, 0,
    )));
    let rewound = TrustedClock::new(clock_source);
    let later = TrustedClock::new(fixed(REFERENCE));

    // No monotonicity is imposed between readings
    assert!(rewound.now() < later.now());
}

#[test]
fn test_clock_over_borrowed_source() {
    let source = fixed(REFERENCE);
    let clock = TrustedClock::new(&source);

    assert_eq!(clock.now(), REFERENCE_UNIX);
    assert_eq!(source.call_count(), 1);
}
