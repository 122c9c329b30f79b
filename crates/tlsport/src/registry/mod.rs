// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Process-wide hook slots

#[cfg(any(test, feature = "std"))]
pub(crate) mod std;

#[cfg(any(test, not(feature = "std")))]
pub(crate) mod portable;

#[cfg(feature = "std")]
pub(crate) use self::std::Slot;

#[cfg(not(feature = "std"))]
pub(crate) use self::portable::Slot;
