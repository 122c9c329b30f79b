// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Portable (no_std) slot implementation
//!
//! Uses a spinlock around the stored reference. Critical sections only copy a
//! reference in or out, so contention is short.

use core::cell::UnsafeCell;
use core::sync::atomic::{AtomicBool, Ordering};

/// A single registered `&'static T`, replaceable at runtime.
pub(crate) struct Slot<T: ?Sized + 'static> {
    locked: AtomicBool,
    value: UnsafeCell<Option<&'static T>>,
}

// Access to `value` is serialized by `locked`, and only `&'static T` is
// handed out, so sharing the slot requires `T: Sync`.
unsafe impl<T: ?Sized + Sync + 'static> Sync for Slot<T> {}

impl<T: ?Sized + 'static> Slot<T> {
    pub(crate) const fn new() -> Self {
        Self {
            locked: AtomicBool::new(false),
            value: UnsafeCell::new(None),
        }
    }

    fn with_locked<R>(&self, f: impl FnOnce(&mut Option<&'static T>) -> R) -> R {
        while self
            .locked
            .compare_exchange_weak(false, true, Ordering::Acquire, Ordering::Relaxed)
            .is_err()
        {
            core::hint::spin_loop();
        }

        // SAFETY: `locked` is held, so no other reference to `value` exists.
        let result = f(unsafe { &mut *self.value.get() });

        self.locked.store(false, Ordering::Release);

        result
    }

    /// Installs `value`, returning whatever was registered before.
    pub(crate) fn install(&self, value: &'static T) -> Option<&'static T> {
        self.with_locked(|slot| slot.replace(value))
    }

    pub(crate) fn get(&self) -> Option<&'static T> {
        self.with_locked(|slot| *slot)
    }

    /// Clears the slot only if it still holds `value`.
    pub(crate) fn remove_if(&self, value: &'static T) -> bool {
        self.with_locked(|slot| {
            let holds_value = slot.is_some_and(|current| core::ptr::addr_eq(current, value));

            if holds_value {
                *slot = None;
            }

            holds_value
        })
    }
}
