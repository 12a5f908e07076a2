//! Harness configuration.
//!
//! Every key is optional; an empty file yields the default (long names, raw deltas).
//!
//! ```toml
//! scale = "millis_to_seconds"
//!
//! [symbols]
//! import_module = "env"
//! report = "p"
//! update = "u"
//! ```

use std::path::Path;

use deltatime_sdk::UnitScale;
use serde::{Deserialize, Serialize};

use crate::{abi::SymbolNames, error::HarnessError};

/// How to link a guest and what it is expected to report.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HostConfig {
    /// Unit conversion the guest applies before reporting.
    pub scale: UnitScale,

    /// Import/export names the guest was built with.
    pub symbols: SymbolNames,
}

impl HostConfig {
    pub fn new(symbols: SymbolNames, scale: UnitScale) -> Self {
        Self { scale, symbols }
    }

    pub fn from_toml_str(text: &str) -> Result<Self, HarnessError> {
        Ok(toml::from_str(text)?)
    }

    /// Read and parse a TOML config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, HarnessError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }
}
