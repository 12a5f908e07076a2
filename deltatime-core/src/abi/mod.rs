//! deltatime ABI module
//!
//! This module defines the ABI contract between:
//! - **Host**: whatever loads the module (a browser page, or this harness)
//! - **Guest**: the WASM module that tracks delta time
//!
//! ## Imports (guest -> host)
//! Imported from module `"env"` (configurable).
//! - `report(value: f64)`: linked as `print`, or `p` in short-name builds.
//!   Called exactly once per `update`, with the (possibly unit-converted) delta.
//!
//! No other imports are allowed.
//!
//! ## Exports (host -> guest) required
//! - `update(timestamp: f64)`: exported as `update`, or `u` in short-name builds.
//!
//! Other exports (`memory`, linker globals) are tolerated and ignored.
//!
//! The names are configuration, not code: see [`SymbolNames`].

use serde::{Deserialize, Serialize};
use wasmtime::{FuncType, Instance, Store, TypedFunc, ValType};

use crate::state::HostState;

/// Default import module name used by the guest.
pub const IMPORT_MODULE: &str = "env";

/// Guest export names (entrypoints).
pub mod guest_exports {
    /// Called once per host tick (required).
    pub const UPDATE: &str = "update";
    /// Short alias of [`UPDATE`].
    pub const UPDATE_SHORT: &str = "u";
}

/// Host import names provided to the guest.
pub mod host_imports {
    /// Delta sink.
    pub const REPORT: &str = "print";
    /// Short alias of [`REPORT`].
    pub const REPORT_SHORT: &str = "p";
}

/// Symbol names a guest uses on either side of the boundary.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SymbolNames {
    pub import_module: String,
    pub report: String,
    pub update: String,
}

impl SymbolNames {
    /// `env.print` / `update`.
    pub fn long() -> Self {
        Self {
            import_module: IMPORT_MODULE.to_owned(),
            report: host_imports::REPORT.to_owned(),
            update: guest_exports::UPDATE.to_owned(),
        }
    }

    /// `env.p` / `u`.
    pub fn short() -> Self {
        Self {
            import_module: IMPORT_MODULE.to_owned(),
            report: host_imports::REPORT_SHORT.to_owned(),
            update: guest_exports::UPDATE_SHORT.to_owned(),
        }
    }
}

impl Default for SymbolNames {
    fn default() -> Self {
        Self::long()
    }
}

/// `(f64) -> ()`, the shape of both the import and the export.
fn is_callback_signature(ty: &FuncType) -> bool {
    let mut params = ty.params();
    params.len() == 1 && matches!(params.next(), Some(ValType::F64)) && ty.results().len() == 0
}

/// Helpers for validating a compiled guest before instantiation.
pub mod validate {
    use super::{SymbolNames, is_callback_signature};
    use wasmtime::{ExternType, Module};

    /// Ways a module can fall outside the ABI.
    #[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
    pub enum AbiViolation {
        #[error("unexpected import `{module}.{name}`")]
        UnexpectedImport { module: String, name: String },
        #[error("import `{module}.{name}` must be a function (f64) -> ()")]
        ImportSignature { module: String, name: String },
        #[error("missing import `{module}.{name}`")]
        MissingImport { module: String, name: String },
        #[error("missing export `{name}`")]
        MissingExport { name: String },
        #[error("export `{name}` must be a function (f64) -> ()")]
        ExportSignature { name: String },
    }

    /// The module imports exactly the report function, with the right signature.
    pub fn imports(module: &Module, names: &SymbolNames) -> Result<(), AbiViolation> {
        let mut found = false;
        for import in module.imports() {
            if import.module() != names.import_module || import.name() != names.report {
                return Err(AbiViolation::UnexpectedImport {
                    module: import.module().to_owned(),
                    name: import.name().to_owned(),
                });
            }
            match import.ty() {
                ExternType::Func(ty) if is_callback_signature(&ty) => found = true,
                _ => {
                    return Err(AbiViolation::ImportSignature {
                        module: names.import_module.clone(),
                        name: names.report.clone(),
                    });
                }
            }
        }
        if !found {
            return Err(AbiViolation::MissingImport {
                module: names.import_module.clone(),
                name: names.report.clone(),
            });
        }
        Ok(())
    }

    /// The module exports the update function, with the right signature.
    pub fn required_exports_present(
        module: &Module,
        names: &SymbolNames,
    ) -> Result<(), AbiViolation> {
        let export = module
            .exports()
            .find(|e| e.name() == names.update)
            .ok_or_else(|| AbiViolation::MissingExport {
                name: names.update.clone(),
            })?;
        match export.ty() {
            ExternType::Func(ty) if is_callback_signature(&ty) => Ok(()),
            _ => Err(AbiViolation::ExportSignature {
                name: names.update.clone(),
            }),
        }
    }

    /// Both checks, imports first.
    pub fn module(module: &Module, names: &SymbolNames) -> Result<(), AbiViolation> {
        imports(module, names)?;
        required_exports_present(module, names)
    }
}

/// The guest's entrypoints as typed functions.
///
/// Resolved once after instantiation and called every tick.
#[derive(Clone)]
pub struct GuestEntrypoints {
    pub update: TypedFunc<f64, ()>,
}

impl GuestEntrypoints {
    /// Resolve entrypoint exports from an instance.
    pub fn resolve(
        instance: &Instance,
        store: &mut Store<HostState>,
        names: &SymbolNames,
    ) -> Result<Self, anyhow::Error> {
        let update = instance.get_typed_func::<f64, ()>(&mut *store, &names.update)?;
        Ok(Self { update })
    }
}
