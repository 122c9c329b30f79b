// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! All-or-nothing entropy poll.

use core::ffi::c_int;

use zeroize::Zeroize;

use crate::error::EntropyError;
use crate::traits::{HardwarePoll, HardwareRng};

/// Hook status reported when the output buffer was completely filled.
pub const POLL_SUCCESS: c_int = 0;

/// Hook status reported when the entropy source failed
/// (`MBEDTLS_ERR_ENTROPY_SOURCE_FAILED`).
pub const MBEDTLS_ERR_ENTROPY_SOURCE_FAILED: c_int = -0x003C;

/// Entropy bridge between a hardware RNG driver and the TLS library's
/// hardware-poll hook.
///
/// The bridge owns its RNG handle; pass a test double to make handshake tests
/// reproducible, and the real driver everywhere else.
///
/// # Contract
///
/// - Success means every byte of the output was written by the RNG during
///   this call, and the reported length equals the requested length.
/// - Any driver error or short read fails the whole call. The output is
///   zeroized first, so a failed call never leaves usable randomness behind.
/// - No retry and no fallback source.
pub struct EntropyBridge<R: HardwareRng> {
    rng: R,
}

impl<R: HardwareRng> EntropyBridge<R> {
    /// Creates a bridge that draws from `rng`.
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Returns the underlying RNG handle.
    pub fn rng(&self) -> &R {
        &self.rng
    }

    /// Consumes the bridge, returning the RNG handle.
    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl<R: HardwareRng> HardwarePoll for EntropyBridge<R> {
    fn poll(&self, output: &mut [u8]) -> Result<usize, EntropyError> {
        let requested = output.len();

        if requested == 0 {
            return Ok(0);
        }

        let result = match self.rng.read_random(output) {
            Ok(filled) if filled == requested => Ok(requested),
            Ok(filled) if filled < requested => Err(EntropyError::ShortRead { requested, filled }),
            Ok(reported) => Err(EntropyError::Overfill {
                requested,
                reported,
            }),
            Err(e) => Err(e),
        };

        match result {
            Ok(filled) => {
                log::trace!("entropy poll filled {} bytes", filled);
                Ok(filled)
            }
            Err(e) => {
                output.zeroize();
                log::warn!("entropy poll of {} bytes failed: {}", requested, e);
                Err(e)
            }
        }
    }
}

/// Maps a poll result onto the hook's `(olen, status)` convention.
pub(crate) fn status_from(result: Result<usize, EntropyError>, olen: &mut usize) -> c_int {
    match result {
        Ok(filled) => {
            *olen = filled;
            POLL_SUCCESS
        }
        Err(_) => {
            *olen = 0;
            MBEDTLS_ERR_ENTROPY_SOURCE_FAILED
        }
    }
}
