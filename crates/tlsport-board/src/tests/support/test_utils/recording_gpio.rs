// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::gpio::GpioController;
use crate::pin::{Pin, Port};
use crate::support::test_utils::{GpioCall, RecordingGpio};

#[test]
fn test_records_calls_in_order() {
    let mut gpio = RecordingGpio::new();

    gpio.enable_port_clock(Port::B);
    gpio.never_reset(Pin::new(Port::B, 3));

    let calls: Vec<_> = gpio.calls().collect();
    assert_eq!(
        calls,
        [
            GpioCall::EnableClock(Port::B),
            GpioCall::NeverReset(Pin::new(Port::B, 3)),
        ]
    );
    assert_eq!(gpio.call_count(), 2);
}

#[test]
fn test_overflow_is_counted_but_dropped() {
    let mut gpio = RecordingGpio::default();

    for number in 0..40 {
        gpio.never_reset(Pin::gpio(number));
    }

    assert_eq!(gpio.call_count(), 40);
    assert_eq!(gpio.calls().count(), 32);
    assert_eq!(gpio.calls().last(), Some(GpioCall::NeverReset(Pin::gpio(31))));
}
