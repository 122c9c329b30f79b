// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use thiserror::Error;

/// Errors resolving board item names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BoardError {
    /// The board has no item with the requested name.
    #[error("UnknownName")]
    UnknownName,

    /// The name exists but refers to a bus or a display, not a single pin.
    #[error("NotAPin")]
    NotAPin,
}
