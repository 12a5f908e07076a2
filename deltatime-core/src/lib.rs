//! deltatime-core: a Wasmtime harness that loads and drives a delta-time guest module.
//!
//! A delta-time guest:
//! - imports one host function, `report(f64)` (module `"env"`, named `print` or `p`);
//! - exports one function, `update(f64)` (named `update` or `u`);
//! - on every `update(t)` reports `t - previous_t` (optionally divided by 1000) exactly once.
//!
//! The harness plays the host: it validates the module against that contract, records every
//! reported value, and compares the guest with the reference `deltatime_sdk::DeltaTimer`.
//!
//! ```no_run
//! use deltatime_core::{GuestSession, HostConfig, conformance};
//!
//! # fn main() -> Result<(), deltatime_core::HarnessError> {
//! let config = HostConfig::load("deltatime.toml")?;
//! let mut session = GuestSession::load_file(config, "delta_guest.wasm")?;
//! let report = conformance::verify(&mut session, &[16.0, 33.0, 50.0])?;
//! assert!(report.is_conformant());
//! # Ok(())
//! # }
//! ```
//!
//! The ABI surface is defined in `crate::abi` and mirrored by `deltatime-sdk`.

pub mod abi;
pub mod config;
pub mod conformance;
pub mod error;
pub mod loader;
mod runtime;
pub mod session;
mod state;

pub use abi::SymbolNames;
pub use config::HostConfig;
pub use deltatime_sdk::UnitScale;
pub use error::HarnessError;
pub use session::GuestSession;
