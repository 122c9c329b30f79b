// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Hook entry points dispatched by the TLS library.

use core::ffi::{c_int, c_uchar, c_void};

use tlsport_clock::{EpochSeconds, WallClock};
use tlsport_entropy::{HardwarePoll, MBEDTLS_ERR_ENTROPY_SOURCE_FAILED};

use crate::registry::Slot;

static ENTROPY: Slot<dyn HardwarePoll + Sync> = Slot::new();
static CLOCK: Slot<dyn WallClock + Sync> = Slot::new();

/// Keeps an entropy bridge registered. Dropping it unregisters the bridge,
/// unless another bridge has replaced it in the meantime.
#[must_use = "dropping the guard unregisters the entropy bridge"]
pub struct EntropyGuard {
    source: &'static (dyn HardwarePoll + Sync),
}

impl EntropyGuard {
    /// Leaves the bridge registered for the rest of the program.
    pub fn persist(self) {
        core::mem::forget(self);
    }
}

impl Drop for EntropyGuard {
    fn drop(&mut self) {
        if ENTROPY.remove_if(self.source) {
            log::debug!("entropy bridge unregistered");
        }
    }
}

/// Keeps a clock registered. Dropping it unregisters the clock, unless
/// another clock has replaced it in the meantime.
#[must_use = "dropping the guard unregisters the clock"]
pub struct ClockGuard {
    clock: &'static (dyn WallClock + Sync),
}

impl ClockGuard {
    /// Leaves the clock registered for the rest of the program.
    pub fn persist(self) {
        core::mem::forget(self);
    }
}

impl Drop for ClockGuard {
    fn drop(&mut self) {
        if CLOCK.remove_if(self.clock) {
            log::debug!("clock unregistered");
        }
    }
}

/// Registers the entropy bridge served by [`hardware_poll`], replacing any
/// previous one.
pub fn register_entropy<P: HardwarePoll + Sync + 'static>(source: &'static P) -> EntropyGuard {
    let source: &'static (dyn HardwarePoll + Sync) = source;

    if ENTROPY.install(source).is_some() {
        log::warn!("entropy bridge replaced");
    } else {
        log::info!("entropy bridge registered");
    }

    EntropyGuard { source }
}

/// Registers the clock served by [`platform_time`], replacing any previous
/// one.
pub fn register_clock<C: WallClock + Sync + 'static>(clock: &'static C) -> ClockGuard {
    let clock: &'static (dyn WallClock + Sync) = clock;

    if CLOCK.install(clock).is_some() {
        log::warn!("clock replaced");
    } else {
        log::info!("clock registered");
    }

    ClockGuard { clock }
}

/// Fills `output` from the registered entropy bridge.
///
/// Returns `POLL_SUCCESS` with `*olen == output.len()`, or
/// [`MBEDTLS_ERR_ENTROPY_SOURCE_FAILED`] with `*olen == 0` when the bridge
/// fails or nothing is registered.
///
/// Task context only: the RNG may block while it produces bits.
pub fn hardware_poll(output: &mut [u8], olen: &mut usize) -> c_int {
    match ENTROPY.get() {
        Some(source) => source.poll_status(output, olen),
        None => {
            log::error!("hardware poll with no entropy bridge registered");
            *olen = 0;
            MBEDTLS_ERR_ENTROPY_SOURCE_FAILED
        }
    }
}

/// Current time from the registered clock, in that clock's epoch seconds.
///
/// Returns `0` when nothing is registered. The value is a point in time and
/// may go backwards between calls.
///
/// Task context only: reading the RTC may block.
pub fn platform_time() -> EpochSeconds {
    match CLOCK.get() {
        Some(clock) => clock.now(),
        None => {
            log::error!("time requested with no clock registered");
            0
        }
    }
}

/// C entry point for the TLS library's hardware-poll hook.
///
/// `data` is ignored. Fails with [`MBEDTLS_ERR_ENTROPY_SOURCE_FAILED`] if
/// `olen` is null, or if `output` is null and `len` is non-zero.
///
/// Task context only.
///
/// # Safety
///
/// `olen` must be null or valid for writes of one `usize`. When `len` is
/// non-zero, `output` must be null or valid for writes of `len` bytes and not
/// aliased for the duration of the call.
#[cfg_attr(feature = "export-hooks", unsafe(no_mangle))]
pub unsafe extern "C" fn mbedtls_hardware_poll(
    _data: *mut c_void,
    output: *mut c_uchar,
    len: usize,
    olen: *mut usize,
) -> c_int {
    // SAFETY: caller guarantees `olen` is null or valid for writes.
    let Some(olen) = (unsafe { olen.as_mut() }) else {
        log::error!("hardware poll with null olen");
        return MBEDTLS_ERR_ENTROPY_SOURCE_FAILED;
    };

    if len == 0 {
        return hardware_poll(&mut [], olen);
    }

    if output.is_null() {
        log::error!("hardware poll with null output for {len} bytes");
        *olen = 0;
        return MBEDTLS_ERR_ENTROPY_SOURCE_FAILED;
    }

    // SAFETY: `output` is non-null and the caller guarantees `len` writable bytes.
    let output = unsafe { core::slice::from_raw_parts_mut(output, len) };

    hardware_poll(output, olen)
}

/// C entry point for the TLS library's time hook, shaped like `time(3)`.
///
/// Returns [`platform_time`] and also stores it in `*timer` when `timer` is
/// non-null. Install with `mbedtls_platform_set_time`.
///
/// The library's `mbedtls_time_t` must be 64 bits wide: either a 64-bit
/// `time_t`, or `MBEDTLS_PLATFORM_TIME_TYPE_MACRO` set to `int64_t`. With a
/// 32-bit `time_t` the store to `*timer` overruns the caller's slot.
///
/// Task context only.
///
/// # Safety
///
/// `timer` must be null or valid for writes of one `i64`, and the TLS
/// library must be built with a 64-bit `mbedtls_time_t`.
#[cfg_attr(feature = "export-hooks", unsafe(no_mangle))]
pub unsafe extern "C" fn tlsport_platform_time(timer: *mut i64) -> i64 {
    let now = platform_time();

    // SAFETY: caller guarantees `timer` is null or valid for writes.
    if let Some(timer) = unsafe { timer.as_mut() } {
        *timer = now;
    }

    now
}
