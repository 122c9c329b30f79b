// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Test utilities for GPIO bring-up.

mod recording_gpio;

pub use recording_gpio::{GpioCall, RecordingGpio};
