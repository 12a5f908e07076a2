//! Host import definitions for the Wasmtime runtime.

use crate::{abi::SymbolNames, state::HostState};

use tracing::trace;
use wasmtime::{Caller, Linker};

/// Define the `report` import expected by guests.
///
/// Must be called before instantiating the module. The import only records the value; what a
/// real host would do with it (display it, feed an animation) is not the harness's concern.
pub fn define_imports(
    linker: &mut Linker<HostState>,
    names: &SymbolNames,
) -> Result<(), anyhow::Error> {
    linker.func_wrap(
        &names.import_module,
        &names.report,
        |mut caller: Caller<'_, HostState>, value: f64| {
            trace!(value, "report");
            caller.data_mut().record(value);
        },
    )?;

    Ok(())
}
