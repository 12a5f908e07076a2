//! Harness error types.

use crate::{abi::validate::AbiViolation, loader::LoadError};

/// Top-level error type for the harness.
#[derive(Debug, thiserror::Error)]
pub enum HarnessError {
    /// The bytes could not be turned into a module.
    #[error(transparent)]
    Load(#[from] LoadError),

    /// The module compiled but does not speak the delta-time ABI.
    #[error("ABI violation: {0}")]
    Abi(#[from] AbiViolation),

    /// Wasmtime engine, linking, instantiation, or a guest trap.
    #[error("wasmtime error: {0}")]
    Wasmtime(#[from] anyhow::Error),

    /// The guest did not call `report` exactly once during an `update`.
    #[error("expected exactly one report per update, got {0}")]
    ReportCount(usize),

    /// Configuration file could not be parsed.
    #[error("config error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
