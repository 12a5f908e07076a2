#![cfg_attr(not(feature = "std"), no_std)]

//! deltatime-sdk (handwritten)
//!
//! This crate is used by **guest** WASM modules that report elapsed time to their host.
//!
//! ABI model:
//! - Host calls the guest export `update(timestamp: f64)` once per tick.
//! - Guest computes `timestamp - prev_ts`, hands it to the host import `report(value: f64)`,
//!   then remembers `timestamp` for the next tick.
//! - Imports live in module `"env"`. The import is linked as `print` (or `p` with the
//!   `short-names` feature); the export name is chosen by the guest crate.
//!
//! The delta logic lives in [`DeltaTimer`], a plain value that can be tested natively.
//! [`guest::GuestTimer`] is the one-per-module holder the exported `update` symbol uses.

use core::fmt;

/// Raw ABI imports.
///
/// Only present on `wasm32`; native builds (tests, host tooling) never link against the host.
#[cfg(target_arch = "wasm32")]
pub mod sys {
    #[link(wasm_import_module = "env")]
    unsafe extern "C" {
        /// Host sink for the computed delta.
        #[cfg_attr(feature = "short-names", link_name = "p")]
        #[cfg_attr(not(feature = "short-names"), link_name = "print")]
        pub fn report(value: f64);
    }
}

/// Unit conversion applied to a delta before it is reported.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum UnitScale {
    /// Report the delta unscaled.
    #[default]
    Raw,
    /// Treat timestamps as milliseconds and report the delta in seconds.
    MillisToSeconds,
}

impl UnitScale {
    /// Apply the conversion to a delta.
    pub fn apply(self, delta: f64) -> f64 {
        match self {
            UnitScale::Raw => delta,
            UnitScale::MillisToSeconds => delta / 1000.0,
        }
    }

    /// Configuration name of this option.
    pub const fn name(self) -> &'static str {
        match self {
            UnitScale::Raw => "raw",
            UnitScale::MillisToSeconds => "millis_to_seconds",
        }
    }

    /// Parse a configuration name (`"raw"` or `"millis_to_seconds"`).
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "raw" => Some(UnitScale::Raw),
            "millis_to_seconds" => Some(UnitScale::MillisToSeconds),
            _ => None,
        }
    }
}

impl fmt::Display for UnitScale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Destination for reported deltas.
///
/// On the guest this is the host import; in native code any `FnMut(f64)` works.
pub trait Report {
    fn report(&mut self, value: f64);
}

impl<F: FnMut(f64)> Report for F {
    fn report(&mut self, value: f64) {
        self(value)
    }
}

/// Per-instance delta-time state.
///
/// Holds the timestamp of the previous `update` (initially [`DeltaTimer::INITIAL_TIMESTAMP`]).
/// Timestamps are not validated: a NaN or infinite timestamp is reported and stored as-is,
/// so the delta of the following call is NaN (or infinite) too.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DeltaTimer {
    prev_ts: f64,
    scale: UnitScale,
}

impl DeltaTimer {
    /// Value of `prev_ts` before the first `update`.
    ///
    /// The first reported delta is therefore the first timestamp itself.
    pub const INITIAL_TIMESTAMP: f64 = 0.0;

    pub const fn new(scale: UnitScale) -> Self {
        Self {
            prev_ts: Self::INITIAL_TIMESTAMP,
            scale,
        }
    }

    /// A timer that reports deltas unscaled.
    pub const fn raw() -> Self {
        Self::new(UnitScale::Raw)
    }

    pub fn scale(&self) -> UnitScale {
        self.scale
    }

    /// Timestamp passed to the most recent `update`.
    pub fn prev_timestamp(&self) -> f64 {
        self.prev_ts
    }

    /// Report the (scaled) time since the previous call, then store `timestamp`.
    ///
    /// `sink` is called exactly once, before the state write.
    pub fn update<R: Report + ?Sized>(&mut self, timestamp: f64, sink: &mut R) {
        let delta = timestamp - self.prev_ts;
        sink.report(self.scale.apply(delta));
        self.prev_ts = timestamp;
    }
}

impl Default for DeltaTimer {
    fn default() -> Self {
        Self::raw()
    }
}

/// Guest-module glue: the static timer behind the exported `update` symbol.
pub mod guest {
    use core::cell::UnsafeCell;

    use crate::{DeltaTimer, Report, UnitScale};

    /// Forwards reported values to the host import.
    #[cfg(target_arch = "wasm32")]
    #[derive(Copy, Clone, Debug, Default)]
    pub struct HostReport;

    #[cfg(target_arch = "wasm32")]
    impl Report for HostReport {
        fn report(&mut self, value: f64) {
            unsafe { crate::sys::report(value) }
        }
    }

    /// The single [`DeltaTimer`] of a loaded module instance, placeable in a `static`.
    pub struct GuestTimer {
        timer: UnsafeCell<DeltaTimer>,
    }

    // SAFETY: every access goes through an `unsafe fn` whose caller guarantees that no other
    // access is in flight. Wasm hosts call exports sequentially and `report` never re-enters.
    unsafe impl Sync for GuestTimer {}

    impl GuestTimer {
        pub const fn new(scale: UnitScale) -> Self {
            Self {
                timer: UnsafeCell::new(DeltaTimer::new(scale)),
            }
        }

        /// Run [`DeltaTimer::update`] on the held timer.
        ///
        /// # Safety
        /// No other call on this `GuestTimer` may be running, and `sink` must not call back
        /// into it.
        pub unsafe fn update<R: Report + ?Sized>(&self, timestamp: f64, sink: &mut R) {
            let timer = unsafe { &mut *self.timer.get() };
            timer.update(timestamp, sink);
        }

        /// [`GuestTimer::update`] reporting straight to the host import.
        ///
        /// # Safety
        /// Same contract as [`GuestTimer::update`].
        #[cfg(target_arch = "wasm32")]
        pub unsafe fn update_host(&self, timestamp: f64) {
            unsafe { self.update(timestamp, &mut HostReport) }
        }

        /// Snapshot of the held timer.
        ///
        /// # Safety
        /// No `update` may be running concurrently.
        pub unsafe fn get(&self) -> DeltaTimer {
            unsafe { *self.timer.get() }
        }
    }
}

/// Convenience prelude for guest modules.
pub mod prelude {
    #[cfg(target_arch = "wasm32")]
    pub use crate::guest::HostReport;
    pub use crate::guest::GuestTimer;
    pub use crate::{DeltaTimer, Report, UnitScale};
}
