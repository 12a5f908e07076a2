//! Wasmtime-backed runtime glue for deltatime-core.
//!
//! Responsibilities:
//! - Create a Wasmtime `Engine`/`Store`.
//! - Define the `report` host import under the configured module/name.
//! - Instantiate a compiled `wasmtime::Module` and resolve its `update` export.

pub mod imports;
pub mod runtime;

pub use runtime::DeltaRuntime;
