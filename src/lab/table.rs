use std::fmt;
use serde::Serialize;
use crate::lab::error::{LabError, LabResult};
/// Label attached to the column grouping of every measurement table.
pub const GROUP_LABEL: &str = "Medidas";
pub const CURRENT_HEADER: &str = "I (A)";
pub const VOLTAGE_HEADER: &str = "V (volts)";
/// One reading: the current through the resistor and the voltage across it.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct MeasurementRow {
    /// 1-based position in the table.
    pub index: usize,
    pub current: f64,
    pub voltage: f64,
}
/// Ordered, immutable set of (current, voltage) readings for one trial.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MeasurementTable {
    label: &'static str,
    rows: Vec<MeasurementRow>,
}
impl MeasurementTable {
    /// Callers guarantee both columns have the same length.
    pub(crate) fn from_columns(currents: &[f64], voltages: &[f64]) -> Self {
        let rows = currents
            .iter()
            .zip(voltages)
            .enumerate()
            .map(|(i, (&current, &voltage))| MeasurementRow {
                index: i + 1,
                current,
                voltage,
            })
            .collect();
        Self {
            label: GROUP_LABEL,
            rows,
        }
    }
    pub fn label(&self) -> &str {
        self.label
    }
    pub fn rows(&self) -> &[MeasurementRow] {
        &self.rows
    }
    pub fn len(&self) -> usize {
        self.rows.len()
    }
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
    pub fn last(&self) -> Option<&MeasurementRow> {
        self.rows.last()
    }
    pub fn currents(&self) -> Vec<f64> {
        self.rows.iter().map(|r| r.current).collect()
    }
    pub fn voltages(&self) -> Vec<f64> {
        self.rows.iter().map(|r| r.voltage).collect()
    }
}
impl fmt::Display for MeasurementTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cells: Vec<[String; 3]> = self
            .rows
            .iter()
            .map(|r| {
                [
                    r.index.to_string(),
                    r.current.to_string(),
                    r.voltage.to_string(),
                ]
            })
            .collect();
        let width = |col: usize, header: &str| {
            cells
                .iter()
                .map(|c| c[col].chars().count())
                .chain(std::iter::once(header.chars().count()))
                .max()
                .unwrap_or(0)
        };
        let w_index = width(0, self.label);
        let w_current = width(1, CURRENT_HEADER);
        let w_voltage = width(2, VOLTAGE_HEADER);
        write!(
            f,
            "{:<w_index$}  {:>w_current$}  {:>w_voltage$}",
            self.label, CURRENT_HEADER, VOLTAGE_HEADER
        )?;
        for [index, current, voltage] in &cells {
            write!(
                f,
                "\n{index:<w_index$}  {current:>w_current$}  {voltage:>w_voltage$}"
            )?;
        }
        Ok(())
    }
}
/// Pair currents with voltages, row by row.
///
/// Both slices must have the same length; otherwise [`LabError::LengthMismatch`]
/// is returned and no table is built.
pub fn build_table(currents: &[f64], voltages: &[f64]) -> LabResult<MeasurementTable> {
    if currents.len() != voltages.len() {
        return Err(LabError::LengthMismatch {
            currents: currents.len(),
            voltages: voltages.len(),
        });
    }
    Ok(MeasurementTable::from_columns(currents, voltages))
}
#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    #[test]
    fn rows_are_indexed_from_one() {
        let table = build_table(&[0.5, 1.0, 1.5], &[1.0, 2.0, 3.0]).unwrap();
        let indices: Vec<usize> = table.rows().iter().map(|r| r.index).collect();
        assert_eq!(indices, vec![1, 2, 3]);
        assert_eq!(table.label(), "Medidas");
        assert_eq!(table.last().map(|r| r.voltage), Some(3.0));
    }
    #[test]
    fn mismatched_lengths_are_rejected() {
        let err = build_table(&[1.0, 2.0], &[1.0]).unwrap_err();
        assert!(matches!(
            err,
            LabError::LengthMismatch {
                currents: 2,
                voltages: 1
            }
        ));
    }
    #[test]
    fn empty_columns_build_empty_table() {
        let table = build_table(&[], &[]).unwrap();
        assert!(table.is_empty());
        assert!(table.last().is_none());
    }
    #[test]
    fn display_lists_headers_and_rows() {
        let table = build_table(&[1.0, 2.5], &[2.0, 5.0]).unwrap();
        let text = table.to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("Medidas"));
        assert!(lines[0].contains("I (A)"));
        assert!(lines[0].contains("V (volts)"));
        assert!(lines[2].starts_with('2'));
        assert!(lines[2].contains("2.5"));
    }
    proptest! {
        #[test]
        fn prop_rows_follow_input_order(
            pairs in prop::collection::vec((-100.0f64..100.0, -100.0f64..100.0), 0..50)
        ) {
            let (currents, voltages): (Vec<f64>, Vec<f64>) = pairs.iter().copied().unzip();
            let table = build_table(&currents, &voltages).unwrap();
            prop_assert_eq!(table.len(), pairs.len());
            for (i, row) in table.rows().iter().enumerate() {
                prop_assert_eq!(row.index, i + 1);
                prop_assert_eq!(row.current, pairs[i].0);
                prop_assert_eq!(row.voltage, pairs[i].1);
            }
        }
    }
}
