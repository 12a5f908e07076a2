//! Runs the real `example/delta-guest` build, when one exists.
//!
//! Build it first with
//! `cargo build -p delta_guest --release --target wasm32-unknown-unknown [--features ...]`;
//! without an artifact the test returns early. Whichever feature set it was built with, it
//! must conform under exactly one name set and one scale.

mod common;

use std::path::Path;

use deltatime_core::{GuestSession, HarnessError, HostConfig, SymbolNames, UnitScale, conformance};

const GUEST_ARTIFACT: &str = concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../target/wasm32-unknown-unknown/release/delta_guest.wasm"
);

const FRAMES: [f64; 6] = [1000.0, 1016.7, 1033.4, 1033.4, 2000.0, 2500.5];

fn detect_names(bytes: &[u8]) -> Option<SymbolNames> {
    for symbols in [SymbolNames::long(), SymbolNames::short()] {
        let config = HostConfig::new(symbols.clone(), UnitScale::Raw);
        match GuestSession::load(config, bytes) {
            Ok(_) => return Some(symbols),
            Err(HarnessError::Abi(_)) => continue,
            Err(other) => panic!("guest artifact failed to load: {other}"),
        }
    }
    None
}

#[test]
fn test_built_guest_conforms() {
    common::init_tracing();
    let path = Path::new(GUEST_ARTIFACT);
    if !path.exists() {
        eprintln!("skipping: {} not built", path.display());
        return;
    }
    let bytes = std::fs::read(path).unwrap();

    let symbols = detect_names(&bytes).expect("guest matches neither name set");

    let conformant: Vec<UnitScale> = [UnitScale::Raw, UnitScale::MillisToSeconds]
        .into_iter()
        .filter(|&scale| {
            let config = HostConfig::new(symbols.clone(), scale);
            let mut session = GuestSession::load(config, &bytes).unwrap();
            conformance::verify(&mut session, &FRAMES)
                .unwrap()
                .is_conformant()
        })
        .collect();

    assert_eq!(conformant.len(), 1, "conforming scales: {conformant:?}");
}
