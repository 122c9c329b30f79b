// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::pin::Pin;
use crate::registry::{BoardItem, PinRegistry};

const fn gpio(number: u8) -> BoardItem {
    BoardItem::Pin(Pin::gpio(number))
}

const ENTRIES: &[(&str, BoardItem)] = &[
    ("IO0", gpio(0)),
    ("IO1", gpio(1)),
    ("IO2", gpio(2)),
    ("IO3", gpio(3)),
    ("IO4", gpio(4)),
    ("IO5", gpio(5)),
    ("IO12", gpio(12)),
    ("IO14", gpio(14)),
    ("IO16", gpio(16)),
    ("IO17", gpio(17)),
    ("IO18", gpio(18)),
    ("IO21", gpio(21)),
    ("IO38", gpio(38)),
    ("IO39", gpio(39)),
    ("IO40", gpio(40)),
    ("IO43", gpio(43)),
    ("IO44", gpio(44)),
    // Reset button
    ("BUTTON0", gpio(0)),
    ("TX", gpio(43)),
    ("RX", gpio(44)),
    // STEMMA QT shares the UART pins
    ("STEMMA_SDA", gpio(43)),
    ("STEMMA_SCL", gpio(44)),
    (
        "STEMMA_I2C",
        BoardItem::I2cBus {
            sda: Pin::gpio(43),
            scl: Pin::gpio(44),
        },
    ),
    // 0.96" ST7735 LCD
    ("LCD_DC", gpio(2)),
    ("LCD_CS", gpio(4)),
    ("LCD_CLK", gpio(5)),
    ("LCD_DIN", gpio(3)),
    ("LCD_RST", gpio(1)),
    ("LCD_BCKL", gpio(38)),
    ("DISPLAY", BoardItem::Display),
    // APA102 LED
    ("APA102_CLK", gpio(39)),
    ("APA102_DI", gpio(40)),
    // SD card
    ("SD_D0", gpio(14)),
    ("SD_D1", gpio(17)),
    ("SD_D2", gpio(21)),
    ("SD_D3", gpio(18)),
    ("SD_SCK", gpio(12)),
    ("SD_CMD", gpio(16)),
];

/// Pin table of the LILYGO T-Dongle-S3 (ESP32-S3).
pub const LILYGO_TDONGLE_S3: PinRegistry = PinRegistry::new("lilygo_tdongle_s3", ENTRIES);
