// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::ffi::c_int;

use crate::bridge::status_from;
use crate::error::EntropyError;

/// Raw read primitive of a hardware random number generator driver.
///
/// The driver owns any blocking or timeout policy while the peripheral
/// produces bits. Implementations are expected to either fill `dest`
/// completely or return an error, but callers must not rely on it.
pub trait HardwareRng {
    /// Writes random bytes into `dest`, returning how many bytes were written.
    ///
    /// # Errors
    ///
    /// Returns [`EntropyError::EntropyNotAvailable`] if the peripheral is not
    /// ready or reports a fault condition.
    fn read_random(&self, dest: &mut [u8]) -> Result<usize, EntropyError>;
}

/// Object-safe poll interface for entropy bridges.
///
/// This is the shape the TLS library's hardware-poll hook dispatches to.
pub trait HardwarePoll {
    /// Fills the whole of `output` with fresh randomness.
    ///
    /// Returns `output.len()` on success. On failure no byte of `output` may
    /// be left holding randomness from this call.
    ///
    /// # Errors
    ///
    /// Returns an [`EntropyError`] if the underlying source cannot supply
    /// the full request.
    fn poll(&self, output: &mut [u8]) -> Result<usize, EntropyError>;

    /// Hook-shaped poll: writes the filled length to `olen` and returns
    /// [`POLL_SUCCESS`](crate::POLL_SUCCESS) or
    /// [`MBEDTLS_ERR_ENTROPY_SOURCE_FAILED`](crate::MBEDTLS_ERR_ENTROPY_SOURCE_FAILED).
    ///
    /// `olen` is `0` whenever the status is not `POLL_SUCCESS`.
    fn poll_status(&self, output: &mut [u8], olen: &mut usize) -> c_int {
        status_from(self.poll(output), olen)
    }
}

impl<T: HardwarePoll + ?Sized> HardwarePoll for &T {
    fn poll(&self, output: &mut [u8]) -> Result<usize, EntropyError> {
        (**self).poll(output)
    }
}
