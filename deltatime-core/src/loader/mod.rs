//! Loader utilities for deltatime-core.
//!
//! Responsibilities:
//! - Detect whether the provided bytes are a `.wasm` binary or `.wat` text.
//! - If it looks like WAT, convert it to WASM bytes (via the `wat` crate).
//! - Compile a Wasmtime `Module` from the resulting WASM bytes.
//!
//! Notes:
//! - Guests arrive as whatever the toolchain produced; file extensions are not trusted,
//!   so we sniff the bytes themselves.
//! - We accept leading whitespace and a UTF-8 BOM for WAT as best-effort.

use tracing::debug;
use wasmtime::{Engine, Module};

/// Error returned by loader helpers.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The input was empty or otherwise not recognized as WASM/WAT.
    #[error("unrecognized module format (expected wasm or wat)")]
    UnrecognizedFormat,
    /// WAT parsing failed.
    #[error("failed to parse WAT: {0}")]
    WatParseFailed(#[source] wat::Error),
    /// Wasmtime module compilation failed.
    #[error("failed to compile WASM module: {0}")]
    CompileFailed(#[source] anyhow::Error),
}

/// What kind of module the loader inferred from the bytes.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum DetectedFormat {
    Wasm,
    Wat,
}

/// Load: detect -> (optional) wat->wasm -> compile.
pub fn compile_module(engine: &Engine, bytes: &[u8]) -> Result<Module, LoadError> {
    let Detected { format, wasm_bytes } = normalize_to_wasm(bytes)?;
    debug!(?format, len = wasm_bytes.len(), "compiling guest module");
    Module::new(engine, wasm_bytes.as_slice()).map_err(|e| LoadError::CompileFailed(e.into()))
}

/// Detect format and normalize to valid WASM bytes.
pub fn normalize_to_wasm(bytes: &[u8]) -> Result<Detected, LoadError> {
    let format = detect_format(bytes).ok_or(LoadError::UnrecognizedFormat)?;

    match format {
        DetectedFormat::Wasm => Ok(Detected {
            format,
            wasm_bytes: bytes.to_vec(),
        }),
        DetectedFormat::Wat => {
            let wasm_bytes = wat::parse_bytes(bytes)
                .map_err(LoadError::WatParseFailed)?
                .into_owned();
            Ok(Detected { format, wasm_bytes })
        }
    }
}

/// Result of normalizing (detecting + possibly converting) the input.
#[derive(Clone, Debug)]
pub struct Detected {
    pub format: DetectedFormat,
    /// Always valid WASM bytes (for WASM/WAT inputs).
    pub wasm_bytes: Vec<u8>,
}

/// Best-effort detection.
///
/// Rules:
/// - If the first 4 bytes are `\0asm`, treat as WASM.
/// - Else, after stripping UTF-8 BOM / leading whitespace, if the first non-ws byte is `(`,
///   treat as WAT (common WAT starts with `(module ...)`).
pub fn detect_format(bytes: &[u8]) -> Option<DetectedFormat> {
    if bytes.starts_with(b"\0asm") {
        return Some(DetectedFormat::Wasm);
    }

    match bytes.get(skip_bom_and_leading_ws(bytes)) {
        Some(b'(') => Some(DetectedFormat::Wat),
        _ => None,
    }
}

fn skip_bom_and_leading_ws(bytes: &[u8]) -> usize {
    let start = if bytes.starts_with(&[0xEF, 0xBB, 0xBF]) { 3 } else { 0 };

    bytes[start..]
        .iter()
        .position(|b| !matches!(b, b' ' | b'\t' | b'\r' | b'\n'))
        .map_or(bytes.len(), |offset| start + offset)
}
