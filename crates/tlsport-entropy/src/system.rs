// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use getrandom::Error as GetRandomError;

use crate::{HardwareRng, error::EntropyError};

/// System-provided cryptographically secure random number generator.
///
/// Uses the platform CSPRNG via `getrandom`. On bare-metal targets this is
/// the hardware RNG peripheral registered through `getrandom`'s custom
/// backend; on hosts it is the OS source:
/// - Linux/Android: `getrandom()` syscall
/// - macOS/iOS: `getentropy()`
/// - Windows: `ProcessPrng`
/// - WASI: `random_get`
pub struct SystemRng {}

impl SystemRng {
    pub(crate) fn read_random_with(
        fill_fn: &dyn Fn(&mut [u8]) -> Result<(), GetRandomError>,
        dest: &mut [u8],
    ) -> Result<usize, EntropyError> {
        fill_fn(dest).map_err(|_| EntropyError::EntropyNotAvailable)?;

        Ok(dest.len())
    }
}

impl HardwareRng for SystemRng {
    fn read_random(&self, dest: &mut [u8]) -> Result<usize, EntropyError> {
        Self::read_random_with(&getrandom::fill, dest)
    }
}
