// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! `rand_core` adapter for Rust-native TLS stacks.

use rand_core::{TryCryptoRng, TryRngCore};

use crate::error::EntropyError;
use crate::traits::HardwarePoll;

/// Fallible `rand_core` RNG backed by an entropy bridge.
///
/// Implements [`TryRngCore`] rather than `RngCore`, so a hardware fault
/// surfaces as an [`EntropyError`] instead of a panic or a weak value.
pub struct TlsRng<'a, P: HardwarePoll + ?Sized> {
    source: &'a P,
}

impl<'a, P: HardwarePoll + ?Sized> TlsRng<'a, P> {
    /// Wraps `source`.
    pub fn new(source: &'a P) -> Self {
        Self { source }
    }
}

impl<P: HardwarePoll + ?Sized> TryRngCore for TlsRng<'_, P> {
    type Error = EntropyError;

    fn try_next_u32(&mut self) -> Result<u32, Self::Error> {
        let mut buf = [0u8; 4];
        self.source.poll(&mut buf)?;
        Ok(u32::from_le_bytes(buf))
    }

    fn try_next_u64(&mut self) -> Result<u64, Self::Error> {
        let mut buf = [0u8; 8];
        self.source.poll(&mut buf)?;
        Ok(u64::from_le_bytes(buf))
    }

    fn try_fill_bytes(&mut self, dst: &mut [u8]) -> Result<(), Self::Error> {
        self.source.poll(dst)?;
        Ok(())
    }
}

impl<P: HardwarePoll + ?Sized> TryCryptoRng for TlsRng<'_, P> {}
