/// Linear voltage ramp: `count` values starting at `initial_voltage`, each one
/// `step` volts above the previous.
///
/// Values are accumulated by repeated addition, so `v[i]` is `v[i - 1] + step`
/// exactly as a bench supply would be stepped by hand.
pub fn generate_voltages(count: usize, initial_voltage: f64, step: f64) -> Vec<f64> {
    let mut voltages = Vec::with_capacity(count);
    let mut voltage = initial_voltage;
    for _ in 0..count {
        voltages.push(voltage);
        voltage += step;
    }
    voltages
}
