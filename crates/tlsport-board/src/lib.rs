// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # tlsport_board
//!
//! Board descriptions the TLS glue is deployed on.
//!
//! - [`PinRegistry`]: named board items (pins, buses, displays), with several
//!   names allowed to alias one physical pin.
//! - [`GpioController`]: the two GPIO operations early bring-up needs, and
//!   [`stm32l433_gpio_init`] built on them.
//!
//! No pin multiplexing policy lives here. A name resolving to a pin says
//! nothing about whether the pin is free.
//!
//! ```rust
//! use tlsport_board::{BoardItem, LILYGO_TDONGLE_S3, Pin};
//!
//! assert_eq!(LILYGO_TDONGLE_S3.lookup("TX"), Some(BoardItem::Pin(Pin::gpio(43))));
//!
//! let names: Vec<_> = LILYGO_TDONGLE_S3.aliases(Pin::gpio(43)).collect();
//! assert_eq!(names, ["IO43", "TX", "STEMMA_SDA"]);
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

#[cfg(test)]
mod tests;

mod boards;
mod error;
mod gpio;
mod pin;
mod registry;
mod support;

pub use boards::lilygo_tdongle_s3::LILYGO_TDONGLE_S3;
pub use error::BoardError;
pub use gpio::{GpioController, stm32l433_gpio_init};
pub use pin::{Pin, Port};
pub use registry::{BoardItem, PinRegistry};

#[cfg(any(test, feature = "test-utils"))]
pub use support::test_utils;
