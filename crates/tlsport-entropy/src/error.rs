// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use thiserror::Error;

/// Errors that can occur when collecting hardware entropy.
///
/// Every variant is fatal to the DRBG seeding in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EntropyError {
    /// Hardware entropy source is not ready or reported a fault.
    #[error("EntropyNotAvailable")]
    EntropyNotAvailable,

    /// Hardware entropy source wrote fewer bytes than requested.
    #[error("ShortRead: requested {requested} bytes, source filled {filled}")]
    ShortRead {
        /// Bytes requested by the caller.
        requested: usize,
        /// Bytes the source claims to have written.
        filled: usize,
    },

    /// Hardware entropy source claims to have written more bytes than the
    /// buffer holds. The driver's bookkeeping is broken, so nothing it wrote
    /// is trusted.
    #[error("Overfill: requested {requested} bytes, source reports {reported}")]
    Overfill {
        /// Bytes requested by the caller.
        requested: usize,
        /// Bytes the source claims to have written.
        reported: usize,
    },
}
