//! Wasmtime-backed runtime container.
//!
//! One `Engine` and `Linker` live for the whole session; the `Store` (and with it the guest
//! instance and its `prev_ts`) is replaced on every reload.

use crate::{
    abi::{self, SymbolNames},
    state::HostState,
};

use tracing::debug;
use wasmtime::{Engine, Linker, Module, Store};

/// Host-side runtime container.
pub struct DeltaRuntime {
    pub engine: Engine,
    pub store: Store<HostState>,
    pub linker: Linker<HostState>,
}

impl DeltaRuntime {
    /// Create a new Wasmtime runtime.
    ///
    /// Guests of this ABI only need MVP features plus whatever current toolchains emit by
    /// default, so the feature set is kept to the common ones.
    pub fn new() -> Result<Self, anyhow::Error> {
        let mut cfg = wasmtime::Config::new();

        cfg.wasm_multi_value(true);
        cfg.wasm_bulk_memory(true);
        cfg.wasm_reference_types(true);
        cfg.wasm_simd(true);

        let engine = Engine::new(&cfg)?;
        let store = Store::new(&engine, HostState::default());
        let linker = Linker::new(&engine);

        Ok(Self {
            engine,
            store,
            linker,
        })
    }

    /// Define the host import under the given names.
    ///
    /// Must be called before `instantiate`.
    pub fn define_imports(&mut self, names: &SymbolNames) -> Result<(), anyhow::Error> {
        super::imports::define_imports(&mut self.linker, names)
    }

    /// Drop the current store (and any instance in it) and start from empty host state.
    pub fn reset_store(&mut self) {
        self.store = Store::new(&self.engine, HostState::default());
    }

    /// Instantiate a module into the current store and resolve its entrypoints.
    pub fn instantiate(
        &mut self,
        module: &Module,
        names: &SymbolNames,
    ) -> Result<abi::GuestEntrypoints, anyhow::Error> {
        let instance = self.linker.instantiate(&mut self.store, module)?;
        let entrypoints = abi::GuestEntrypoints::resolve(&instance, &mut self.store, names)?;
        debug!(update = %names.update, "guest instantiated");
        Ok(entrypoints)
    }
}
