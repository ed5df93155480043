use crate::lab::error::{LabError, LabResult};
/// Absolute percent deviation of `experimental` from `accepted`.
pub fn percent_error_value(accepted: f64, experimental: f64) -> LabResult<f64> {
    if accepted == 0.0 {
        return Err(LabError::ZeroAccepted);
    }
    Ok(((accepted - experimental) / accepted * 100.0).abs())
}
/// Percent error formatted with eight fractional digits and a trailing `%`,
/// e.g. `"3.45670000%"`.
pub fn percent_error(accepted: f64, experimental: f64) -> LabResult<String> {
    let percent = percent_error_value(accepted, experimental)?;
    Ok(format!("{percent:.8}%"))
}
