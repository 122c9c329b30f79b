// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::fmt;

/// GPIO port a pin belongs to.
///
/// STM32 parts split pins into lettered ports. ESP32 parts number every pin
/// in a single [`Port::Gpio`] bank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Port {
    /// Port A.
    A,
    /// Port B.
    B,
    /// Port C.
    C,
    /// Port D.
    D,
    /// Port E.
    E,
    /// Port F.
    F,
    /// Port G.
    G,
    /// Port H.
    H,
    /// Single flat bank.
    Gpio,
}

impl Port {
    /// Zero-based port index as used by vendor HALs (`A = 0`, `H = 7`).
    ///
    /// The flat [`Port::Gpio`] bank has no lettered index and returns `None`.
    pub const fn index(self) -> Option<u8> {
        match self {
            Port::A => Some(0),
            Port::B => Some(1),
            Port::C => Some(2),
            Port::D => Some(3),
            Port::E => Some(4),
            Port::F => Some(5),
            Port::G => Some(6),
            Port::H => Some(7),
            Port::Gpio => None,
        }
    }

    const fn letter(self) -> Option<char> {
        match self {
            Port::A => Some('A'),
            Port::B => Some('B'),
            Port::C => Some('C'),
            Port::D => Some('D'),
            Port::E => Some('E'),
            Port::F => Some('F'),
            Port::G => Some('G'),
            Port::H => Some('H'),
            Port::Gpio => None,
        }
    }
}

/// A physical pin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pin {
    /// Port the pin belongs to.
    pub port: Port,
    /// Pin number within the port.
    pub number: u8,
}

impl Pin {
    /// Creates a pin on a lettered port.
    pub const fn new(port: Port, number: u8) -> Self {
        Self { port, number }
    }

    /// Creates a pin in the flat GPIO bank.
    pub const fn gpio(number: u8) -> Self {
        Self::new(Port::Gpio, number)
    }
}

impl fmt::Display for Pin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.port.letter() {
            Some(letter) => write!(f, "P{}{}", letter, self.number),
            None => write!(f, "GPIO{}", self.number),
        }
    }
}
