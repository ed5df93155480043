use log::debug;
use ndarray::ArrayView1;
use serde::Serialize;
use crate::lab::error::{LabError, LabResult};
use crate::lab::rounding::round_down;
use crate::lab::table::MeasurementTable;
/// Decimal places kept on the fitted (experimental) resistance.
pub const EXPERIMENTAL_DECIMALS: u32 = 6;
/// Resistance estimates for one trial, in ohms.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ResistancePair {
    /// Slope of the least-squares V(I) line, truncated to six places.
    pub experimental: f64,
    /// V / I of the last reading.
    pub theoretical: f64,
}
/// Degree-1 least-squares fit `y = slope * x + intercept`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearFit {
    pub slope: f64,
    pub intercept: f64,
}
/// Ordinary least squares through `(xs[i], ys[i])` from the closed-form sums.
pub fn fit_line(xs: &[f64], ys: &[f64]) -> LabResult<LinearFit> {
    if xs.len() != ys.len() {
        return Err(LabError::LengthMismatch {
            currents: xs.len(),
            voltages: ys.len(),
        });
    }
    if xs.len() < 2 {
        return Err(LabError::InsufficientData {
            needed: 2,
            got: xs.len(),
        });
    }
    let x = ArrayView1::from(xs);
    let y = ArrayView1::from(ys);
    let n = xs.len() as f64;
    let sum_x = x.sum();
    let sum_y = y.sum();
    let sum_xy = x.dot(&y);
    let sum_xx = x.dot(&x);
    let denominator = n * sum_xx - sum_x * sum_x;
    if denominator == 0.0 {
        return Err(LabError::DegenerateFit);
    }
    let slope = (n * sum_xy - sum_x * sum_y) / denominator;
    let intercept = (sum_y - slope * sum_x) / n;
    Ok(LinearFit { slope, intercept })
}
/// Experimental and theoretical resistance of a measurement table.
///
/// Current is the independent variable. The theoretical value depends only on
/// the last row, so a zero current there is reported as
/// [`LabError::ZeroCurrent`] instead of an infinite resistance.
pub fn estimate_resistance(table: &MeasurementTable) -> LabResult<ResistancePair> {
    let fit = fit_line(&table.currents(), &table.voltages())?;
    let experimental = round_down(fit.slope, EXPERIMENTAL_DECIMALS)?;
    let last = table.last().ok_or(LabError::InsufficientData {
        needed: 2,
        got: 0,
    })?;
    if last.current == 0.0 {
        return Err(LabError::ZeroCurrent);
    }
    let theoretical = last.voltage / last.current;
    debug!(
        "fit over {} rows: slope = {}, intercept = {}, R_exp = {experimental}, R_theo = {theoretical}",
        table.len(),
        fit.slope,
        fit.intercept
    );
    Ok(ResistancePair {
        experimental,
        theoretical,
    })
}
