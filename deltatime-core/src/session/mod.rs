//! Driving a loaded guest.
//!
//! A [`GuestSession`] plays the host role: it links the recording `report` import, calls the
//! guest's `update` once per timestamp, and checks that each call reported exactly once.

use std::path::Path;

use tracing::debug;
use wasmtime::Module;

use crate::{
    abi::{self, GuestEntrypoints},
    config::HostConfig,
    error::HarnessError,
    loader,
    runtime::DeltaRuntime,
};

/// One loaded guest module and its live instance.
pub struct GuestSession {
    config: HostConfig,
    module: Module,
    runtime: DeltaRuntime,
    entrypoints: GuestEntrypoints,
}

impl GuestSession {
    /// Load + validate + instantiate a `.wasm` or `.wat` guest.
    pub fn load(config: HostConfig, bytes: &[u8]) -> Result<Self, HarnessError> {
        let mut runtime = DeltaRuntime::new()?;
        let module = loader::compile_module(&runtime.engine, bytes)?;
        abi::validate::module(&module, &config.symbols)?;

        runtime.define_imports(&config.symbols)?;
        let entrypoints = runtime.instantiate(&module, &config.symbols)?;
        debug!(
            report = %config.symbols.report,
            update = %config.symbols.update,
            scale = %config.scale,
            "guest session ready"
        );

        Ok(Self {
            config,
            module,
            runtime,
            entrypoints,
        })
    }

    /// [`GuestSession::load`] from a file on disk.
    pub fn load_file(config: HostConfig, path: impl AsRef<Path>) -> Result<Self, HarnessError> {
        let bytes = std::fs::read(path)?;
        Self::load(config, &bytes)
    }

    pub fn config(&self) -> &HostConfig {
        &self.config
    }

    /// Call the guest's `update` once and return the value it reported.
    pub fn update(&mut self, timestamp: f64) -> Result<f64, HarnessError> {
        let mark = self.runtime.store.data().report_count();
        self.entrypoints
            .update
            .call(&mut self.runtime.store, timestamp)?;

        match self.runtime.store.data().since(mark) {
            [value] => Ok(*value),
            other => Err(HarnessError::ReportCount(other.len())),
        }
    }

    /// `update` for each timestamp in order; the reported values in the same order.
    pub fn drive<I>(&mut self, timestamps: I) -> Result<Vec<f64>, HarnessError>
    where
        I: IntoIterator<Item = f64>,
    {
        timestamps.into_iter().map(|ts| self.update(ts)).collect()
    }

    /// Every value reported since load or the last reload.
    pub fn reports(&self) -> &[f64] {
        self.runtime.store.data().reports()
    }

    /// Replace the instance with a fresh one of the same module.
    ///
    /// The guest's timer starts over from its initial value and recorded reports are cleared.
    pub fn reload(&mut self) -> Result<(), HarnessError> {
        self.runtime.reset_store();
        self.entrypoints = self
            .runtime
            .instantiate(&self.module, &self.config.symbols)?;
        debug!("guest reloaded");
        Ok(())
    }
}
