// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Standard library slot implementation

use std::sync::{PoisonError, RwLock};

/// A single registered `&'static T`, replaceable at runtime.
pub(crate) struct Slot<T: ?Sized + 'static> {
    value: RwLock<Option<&'static T>>,
}

impl<T: ?Sized + 'static> Slot<T> {
    pub(crate) const fn new() -> Self {
        Self {
            value: RwLock::new(None),
        }
    }

    /// Installs `value`, returning whatever was registered before.
    pub(crate) fn install(&self, value: &'static T) -> Option<&'static T> {
        // A panic while holding the lock cannot leave a half-written
        // reference behind, so a poisoned lock is still consistent.
        let mut guard = self.value.write().unwrap_or_else(PoisonError::into_inner);
        guard.replace(value)
    }

    pub(crate) fn get(&self) -> Option<&'static T> {
        *self.value.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Clears the slot only if it still holds `value`.
    pub(crate) fn remove_if(&self, value: &'static T) -> bool {
        let mut guard = self.value.write().unwrap_or_else(PoisonError::into_inner);
        let holds_value = guard.is_some_and(|current| core::ptr::addr_eq(current, value));

        if holds_value {
            *guard = None;
        }

        holds_value
    }
}
