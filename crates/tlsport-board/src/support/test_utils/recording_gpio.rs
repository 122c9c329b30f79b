// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::gpio::GpioController;
use crate::pin::{Pin, Port};

const CAPACITY: usize = 32;

/// A call made on [`RecordingGpio`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GpioCall {
    /// `enable_port_clock(port)`.
    EnableClock(Port),
    /// `never_reset(pin)`.
    NeverReset(Pin),
}

/// GPIO controller that records calls in order instead of touching hardware.
///
/// Keeps the first 32 calls; later calls are counted but dropped.
pub struct RecordingGpio {
    calls: [Option<GpioCall>; CAPACITY],
    count: usize,
}

impl RecordingGpio {
    /// Creates an empty recorder.
    pub const fn new() -> Self {
        Self {
            calls: [None; CAPACITY],
            count: 0,
        }
    }

    /// Recorded calls in order.
    pub fn calls(&self) -> impl Iterator<Item = GpioCall> + '_ {
        self.calls.iter().map_while(|call| *call)
    }

    /// Total number of calls, including dropped ones.
    pub fn call_count(&self) -> usize {
        self.count
    }

    fn record(&mut self, call: GpioCall) {
        if let Some(slot) = self.calls.get_mut(self.count) {
            *slot = Some(call);
        }

        self.count += 1;
    }
}

impl Default for RecordingGpio {
    fn default() -> Self {
        Self::new()
    }
}

impl GpioController for RecordingGpio {
    fn enable_port_clock(&mut self, port: Port) {
        self.record(GpioCall::EnableClock(port));
    }

    fn never_reset(&mut self, pin: Pin) {
        self.record(GpioCall::NeverReset(pin));
    }
}
