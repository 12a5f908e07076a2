//! Shared fixtures for integration tests.
//!
//! The WAT modules below are hand-written renditions of what the delta-time guests compile
//! to: one global for the previous timestamp, one import, one export.

#![allow(dead_code)]

use deltatime_core::{GuestSession, HostConfig, SymbolNames, UnitScale};

/// `env.print` / `update`, raw deltas.
pub const LONG_RAW_WAT: &str = r#"
(module
  (import "env" "print" (func $print (param f64)))
  (global $prev_ts (mut f64) (f64.const 0))
  (func (export "update") (param $timestamp f64)
    (call $print (f64.sub (local.get $timestamp) (global.get $prev_ts)))
    (global.set $prev_ts (local.get $timestamp))))
"#;

/// `env.p` / `u`, deltas divided by 1000.
pub const SHORT_SCALED_WAT: &str = r#"
(module
  (import "env" "p" (func $p (param f64)))
  (global $prev_ts (mut f64) (f64.const 0))
  (memory (export "memory") 1)
  (func (export "u") (param $timestamp f64)
    (call $p
      (f64.div
        (f64.sub (local.get $timestamp) (global.get $prev_ts))
        (f64.const 1000)))
    (global.set $prev_ts (local.get $timestamp))))
"#;

/// Calls `print` twice per update.
pub const DOUBLE_REPORT_WAT: &str = r#"
(module
  (import "env" "print" (func $print (param f64)))
  (func (export "update") (param $timestamp f64)
    (call $print (local.get $timestamp))
    (call $print (local.get $timestamp))))
"#;

/// Never calls `print`.
pub const SILENT_WAT: &str = r#"
(module
  (import "env" "print" (func $print (param f64)))
  (func (export "update") (param $timestamp f64)))
"#;

/// Forgets to store the timestamp, so every delta is measured from zero.
pub const STATELESS_WAT: &str = r#"
(module
  (import "env" "print" (func $print (param f64)))
  (func (export "update") (param $timestamp f64)
    (call $print (local.get $timestamp))))
"#;

/// Exports `tick` instead of `update`.
pub const MISSING_UPDATE_WAT: &str = r#"
(module
  (import "env" "print" (func $print (param f64)))
  (func (export "tick") (param $timestamp f64)
    (call $print (local.get $timestamp))))
"#;

/// `update` takes an i32.
pub const WRONG_EXPORT_TYPE_WAT: &str = r#"
(module
  (import "env" "print" (func $print (param f64)))
  (func (export "update") (param $timestamp i32)
    (call $print (f64.convert_i32_s (local.get $timestamp)))))
"#;

/// Imports a second host function.
pub const EXTRA_IMPORT_WAT: &str = r#"
(module
  (import "env" "print" (func $print (param f64)))
  (import "env" "now" (func $now (result f64)))
  (func (export "update") (param $timestamp f64)
    (call $print (call $now))))
"#;

/// `print` declared with an i32 parameter.
pub const WRONG_IMPORT_TYPE_WAT: &str = r#"
(module
  (import "env" "print" (func $print (param i32)))
  (func (export "update") (param $timestamp f64)
    (call $print (i32.trunc_f64_s (local.get $timestamp)))))
"#;

/// Traps on every call.
pub const TRAPPING_WAT: &str = r#"
(module
  (import "env" "print" (func $print (param f64)))
  (func (export "update") (param $timestamp f64)
    unreachable))
"#;

/// Install a test subscriber once; honours `RUST_LOG`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn long_raw() -> GuestSession {
    init_tracing();
    GuestSession::load(HostConfig::default(), LONG_RAW_WAT.as_bytes()).unwrap()
}

pub fn short_scaled() -> GuestSession {
    init_tracing();
    let config = HostConfig::new(SymbolNames::short(), UnitScale::MillisToSeconds);
    GuestSession::load(config, SHORT_SCALED_WAT.as_bytes()).unwrap()
}
