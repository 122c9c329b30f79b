// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::pin::{Pin, Port};

/// GPIO operations needed during early board bring-up.
pub trait GpioController {
    /// Turns on the peripheral clock of `port`.
    fn enable_port_clock(&mut self, port: Port);

    /// Excludes `pin` from the reset-all-pins pass that runs between user
    /// programs.
    fn never_reset(&mut self, pin: Pin);
}

impl<G: GpioController + ?Sized> GpioController for &mut G {
    fn enable_port_clock(&mut self, port: Port) {
        (**self).enable_port_clock(port);
    }

    fn never_reset(&mut self, pin: Pin) {
        (**self).never_reset(pin);
    }
}

const STM32L433_PORTS: [Port; 4] = [Port::A, Port::B, Port::C, Port::H];

const STM32L433_NEVER_RESET: [Pin; 4] = [
    // 32 kHz oscillator
    Pin::new(Port::C, 14),
    Pin::new(Port::C, 15),
    // SWD
    Pin::new(Port::A, 13),
    Pin::new(Port::A, 14),
];

/// Brings up GPIO on an STM32L433.
///
/// Enables the clocks of every bonded-out port (A, B, C, H) and keeps the
/// LSE crystal pins and the SWD debug pins out of pin resets.
pub fn stm32l433_gpio_init<G: GpioController + ?Sized>(gpio: &mut G) {
    for port in STM32L433_PORTS {
        gpio.enable_port_clock(port);
    }

    for pin in STM32L433_NEVER_RESET {
        gpio.never_reset(pin);
    }

    log::debug!("stm32l433 gpio ready");
}
