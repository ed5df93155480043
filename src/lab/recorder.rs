use log::debug;
use serde::{Deserialize, Serialize};
use crate::lab::table::MeasurementTable;
use crate::lab::voltage::generate_voltages;
/// Voltage ramp settings for one trial.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RecordingConfig {
    /// Voltage applied for the first reading (volts).
    pub initial_voltage: f64,
    /// Increment between consecutive readings (volts).
    pub step: f64,
}
impl RecordingConfig {
    pub fn new(initial_voltage: f64, step: f64) -> Self {
        Self {
            initial_voltage,
            step,
        }
    }
}
/// Turn the currents read during a trial into a measurement table, pairing
/// each one with the voltage the ramp had reached at that reading.
pub fn record_currents(currents: &[f64], config: &RecordingConfig) -> MeasurementTable {
    let voltages = generate_voltages(currents.len(), config.initial_voltage, config.step);
    debug!(
        "recorded {} readings (V0 = {}, step = {})",
        currents.len(),
        config.initial_voltage,
        config.step
    );
    MeasurementTable::from_columns(currents, &voltages)
}
