// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::sync::atomic::{AtomicU64, Ordering};

use crate::error::EntropyError;
use crate::traits::HardwareRng;

const GOLDEN_GAMMA: u64 = 0x9E37_79B9_7F4A_7C15;

/// Reproducible "random" byte stream for handshake-level tests.
///
/// Two instances created with the same seed produce the same bytes for the
/// same sequence of reads. Output is a splitmix64 stream: well spread, not
/// secret. Never route production traffic through it.
pub struct DeterministicRng {
    state: AtomicU64,
}

impl DeterministicRng {
    /// Creates a stream starting at `seed`.
    pub fn new(seed: u64) -> Self {
        Self {
            state: AtomicU64::new(seed),
        }
    }

    fn next_u64(&self) -> u64 {
        let state = self
            .state
            .fetch_add(GOLDEN_GAMMA, Ordering::Relaxed)
            .wrapping_add(GOLDEN_GAMMA);

        let mut z = state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }
}

impl HardwareRng for DeterministicRng {
    fn read_random(&self, dest: &mut [u8]) -> Result<usize, EntropyError> {
        for chunk in dest.chunks_mut(8) {
            let bytes = self.next_u64().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }

        Ok(dest.len())
    }
}
