//! Per-store host state.
//!
//! Each `wasmtime::Store` owns one [`HostState`]; the `report` import writes into it and the
//! session reads it back after every `update`. There is no process-wide state: a reload is a
//! new store.

/// Values the guest has handed to `report`, in call order.
#[derive(Debug, Default, Clone)]
pub struct HostState {
    reports: Vec<f64>,
}

impl HostState {
    /// Record one `report` call.
    pub fn record(&mut self, value: f64) {
        self.reports.push(value);
    }

    pub fn reports(&self) -> &[f64] {
        &self.reports
    }

    /// Number of `report` calls so far.
    pub fn report_count(&self) -> usize {
        self.reports.len()
    }

    /// Values recorded after the first `mark` calls.
    pub fn since(&self, mark: usize) -> &[f64] {
        self.reports.get(mark..).unwrap_or(&[])
    }
}
