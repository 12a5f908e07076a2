// Only meaningful on wasm32; native workspace builds see an empty crate.
#![cfg(target_arch = "wasm32")]
#![no_std]

// Minimal delta-time guest.
//
// This crate is meant to be compiled to `wasm32-unknown-unknown`.
//
// The host calls `update(timestamp)` once per tick (e.g. every animation frame) and receives
// `timestamp - previous_timestamp` through its `report` import.
//
// Features pick the variant:
// - default:            imports `env.print`, exports `update`, reports the raw delta.
// - `short-names`:      imports `env.p`, exports `u`.
// - `millis-to-seconds`: reports the delta divided by 1000.

use deltatime_sdk::prelude::*;

#[cfg(feature = "millis-to-seconds")]
const SCALE: UnitScale = UnitScale::MillisToSeconds;
#[cfg(not(feature = "millis-to-seconds"))]
const SCALE: UnitScale = UnitScale::Raw;

static TIMER: GuestTimer = GuestTimer::new(SCALE);

#[cfg_attr(feature = "short-names", unsafe(export_name = "u"))]
#[cfg_attr(not(feature = "short-names"), unsafe(no_mangle))]
pub extern "C" fn update(timestamp: f64) {
    // SAFETY: the host runs one export at a time and `report` does not call back into us.
    unsafe { TIMER.update_host(timestamp) }
}

#[cfg(not(feature = "std"))]
#[panic_handler]
fn panic(_info: &core::panic::PanicInfo) -> ! {
    core::arch::wasm32::unreachable()
}
