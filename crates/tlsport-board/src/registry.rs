// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::error::BoardError;
use crate::pin::Pin;

/// Something a board exposes under a name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardItem {
    /// A single pin.
    Pin(Pin),
    /// An I2C bus on a fixed pin pair.
    I2cBus {
        /// Data line.
        sda: Pin,
        /// Clock line.
        scl: Pin,
    },
    /// The board's built-in display.
    Display,
}

/// Static name table of a board.
///
/// Names are unique; several names may refer to the same pin.
#[derive(Debug, Clone, Copy)]
pub struct PinRegistry {
    board: &'static str,
    entries: &'static [(&'static str, BoardItem)],
}

impl PinRegistry {
    /// Creates a registry over a static table.
    pub const fn new(board: &'static str, entries: &'static [(&'static str, BoardItem)]) -> Self {
        Self { board, entries }
    }

    /// Board name.
    pub const fn board(&self) -> &'static str {
        self.board
    }

    /// Looks up an item by exact name.
    pub fn lookup(&self, name: &str) -> Option<BoardItem> {
        self.entries
            .iter()
            .find(|(entry, _)| *entry == name)
            .map(|&(_, item)| item)
    }

    /// Resolves a name that must refer to a single pin.
    ///
    /// # Errors
    ///
    /// [`BoardError::UnknownName`] if nothing has that name,
    /// [`BoardError::NotAPin`] if it names a bus or a display.
    pub fn pin(&self, name: &str) -> Result<Pin, BoardError> {
        match self.lookup(name).ok_or(BoardError::UnknownName)? {
            BoardItem::Pin(pin) => Ok(pin),
            BoardItem::I2cBus { .. } | BoardItem::Display => Err(BoardError::NotAPin),
        }
    }

    /// Every name that refers directly to `pin`, in table order.
    pub fn aliases(&self, pin: Pin) -> impl Iterator<Item = &'static str> {
        self.entries.iter().filter_map(move |&(name, item)| match item {
            BoardItem::Pin(candidate) if candidate == pin => Some(name),
            _ => None,
        })
    }

    /// All entries in table order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, BoardItem)> {
        self.entries.iter().copied()
    }

    /// Number of named items.
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the board names nothing.
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
