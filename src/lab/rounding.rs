use crate::lab::error::{LabError, LabResult};
/// Number of decimal places kept by [`round_down`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct DecimalPlaces(u32);
impl DecimalPlaces {
    pub const fn new(places: u32) -> Self {
        Self(places)
    }
    pub fn get(self) -> u32 {
        self.0
    }
}
impl Default for DecimalPlaces {
    fn default() -> Self {
        Self(2)
    }
}
impl TryFrom<u32> for DecimalPlaces {
    type Error = LabError;
    fn try_from(value: u32) -> LabResult<Self> {
        Ok(Self(value))
    }
}
impl TryFrom<i64> for DecimalPlaces {
    type Error = LabError;
    fn try_from(value: i64) -> LabResult<Self> {
        if value < 0 {
            return Err(LabError::NegativeDecimals(value));
        }
        u32::try_from(value)
            .map(Self)
            .map_err(|_| LabError::NonIntegerDecimals(value as f64))
    }
}
impl TryFrom<i32> for DecimalPlaces {
    type Error = LabError;
    fn try_from(value: i32) -> LabResult<Self> {
        Self::try_from(i64::from(value))
    }
}
impl TryFrom<f64> for DecimalPlaces {
    type Error = LabError;
    fn try_from(value: f64) -> LabResult<Self> {
        if !value.is_finite() || value.fract() != 0.0 {
            return Err(LabError::NonIntegerDecimals(value));
        }
        if value < 0.0 {
            return Err(LabError::NegativeDecimals(value as i64));
        }
        if value > f64::from(u32::MAX) {
            return Err(LabError::NonIntegerDecimals(value));
        }
        Ok(Self(value as u32))
    }
}
/// Truncate `number` toward negative infinity at `decimals` places.
///
/// This is `floor(number * 10^decimals) / 10^decimals`, never round-to-nearest:
/// `round_down(2.9999996, 6)` is `2.999999`.
pub fn round_down<D>(number: f64, decimals: D) -> LabResult<f64>
where
    D: TryInto<DecimalPlaces, Error = LabError>,
{
    let places = decimals.try_into()?;
    Ok(truncate(number, places))
}
/// [`round_down`] at the default two places.
pub fn round_down_default(number: f64) -> f64 {
    truncate(number, DecimalPlaces::default())
}
fn truncate(number: f64, places: DecimalPlaces) -> f64 {
    if places.get() == 0 {
        return number.floor();
    }
    // Past f64 precision the scale overflows; the value is already exact there.
    let Ok(exponent) = i32::try_from(places.get()) else {
        return number;
    };
    let factor = 10f64.powi(exponent);
    let scaled = number * factor;
    if !factor.is_finite() || !scaled.is_finite() {
        return number;
    }
    scaled.floor() / factor
}
