// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

mod portable;
mod std;

/// Unsized payload so slots are exercised with fat pointers, like the hooks.
pub(crate) trait Tag {
    fn tag(&self) -> u8;
}

pub(crate) struct Probe(pub u8);

impl Tag for Probe {
    fn tag(&self) -> u8 {
        self.0
    }
}
