// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::calendar::EpochSeconds;
use crate::config::ClockConfig;
use crate::error::ClockError;
use crate::traits::{TimeSource, WallClock};

/// Clock bridge between a [`TimeSource`] and the TLS library's time hook.
///
/// The bridge owns the conversion arithmetic only. Whether the reading is a
/// trustworthy current date is up to the time source; the bridge flags what
/// it can recognise (unset flag, unset sentinel, trust floor) and otherwise
/// passes the reading through.
pub struct TrustedClock<T: TimeSource> {
    source: T,
    config: ClockConfig,
}

impl<T: TimeSource> TrustedClock<T> {
    /// Creates a clock over `source` with [`ClockConfig::default`].
    pub const fn new(source: T) -> Self {
        Self::with_config(source, ClockConfig::new())
    }

    /// Creates a clock over `source` with an explicit configuration.
    pub const fn with_config(source: T, config: ClockConfig) -> Self {
        Self { source, config }
    }

    /// Returns the time source.
    pub const fn source(&self) -> &T {
        &self.source
    }

    /// Returns the configuration.
    pub const fn config(&self) -> &ClockConfig {
        &self.config
    }

    /// Reads the source and converts it, reporting whether the result can be
    /// trusted for certificate validity checks.
    ///
    /// # Errors
    ///
    /// - [`ClockError::SourceUnavailable`] if the source cannot be read.
    /// - [`ClockError::Untrusted`] if the source is unset, reports the unset
    ///   sentinel, or reports a time below the trust floor.
    pub fn try_now(&self) -> Result<EpochSeconds, ClockError> {
        let (timestamp, is_set) = self.source.read()?;
        let seconds = timestamp.to_epoch_seconds(self.config.epoch);

        if !is_set || self.config.unset_sentinel == Some(timestamp) {
            return Err(ClockError::Untrusted { seconds });
        }

        match self.config.trust_floor {
            Some(floor) if seconds < floor => Err(ClockError::Untrusted { seconds }),
            _ => Ok(seconds),
        }
    }

    /// Value returned when the source cannot be read at all: the sentinel's
    /// conversion, or the epoch itself without a sentinel.
    fn fallback_seconds(&self) -> EpochSeconds {
        self.config
            .unset_sentinel
            .map(|sentinel| sentinel.to_epoch_seconds(self.config.epoch))
            .unwrap_or(0)
    }
}

impl<T: TimeSource> WallClock for TrustedClock<T> {
    /// Hook value for certificate validity checks.
    ///
    /// Untrusted readings are logged and returned unchanged. An unreadable
    /// source is logged and replaced by the unset sentinel's value, the same
    /// value an unset clock would produce.
    fn now(&self) -> EpochSeconds {
        match self.try_now() {
            Ok(seconds) => {
                log::debug!("trusted clock reads {}", seconds);
                seconds
            }
            Err(ClockError::Untrusted { seconds }) => {
                log::warn!(
                    "clock not trustworthy (reads {}), certificate validity checks are unreliable",
                    seconds
                );
                seconds
            }
            Err(ClockError::SourceUnavailable) => {
                let seconds = self.fallback_seconds();
                log::error!("time source unavailable, reporting {}", seconds);
                seconds
            }
        }
    }
}
