use std::fmt;
use log::debug;
use serde::Serialize;
use crate::lab::error::{LabError, LabResult};
use crate::lab::percent_error::percent_error;
use crate::lab::resistance::estimate_resistance;
use crate::lab::table::MeasurementTable;
pub const SUMMARY_HEADERS: [&str; 4] = ["Resistencia", "Experimental", "Teórico", "Error Porcentual"];
/// One line of the experiment summary.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SummaryRow {
    /// `R1`, `R2`, ... in trial order.
    pub label: String,
    pub experimental: f64,
    pub theoretical: f64,
    pub percent_error: String,
}
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ExperimentSummary {
    rows: Vec<SummaryRow>,
}
impl ExperimentSummary {
    pub fn rows(&self) -> &[SummaryRow] {
        &self.rows
    }
    pub fn len(&self) -> usize {
        self.rows.len()
    }
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
impl fmt::Display for ExperimentSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cells: Vec<[String; 4]> = self
            .rows
            .iter()
            .map(|r| {
                [
                    r.label.clone(),
                    r.experimental.to_string(),
                    r.theoretical.to_string(),
                    r.percent_error.clone(),
                ]
            })
            .collect();
        let mut widths = SUMMARY_HEADERS.map(|h| h.chars().count());
        for row in &cells {
            for (w, cell) in widths.iter_mut().zip(row) {
                *w = (*w).max(cell.chars().count());
            }
        }
        let line = |cols: [&str; 4]| {
            cols.iter()
                .zip(widths)
                .enumerate()
                .map(|(i, (c, w))| {
                    let pad = w.saturating_sub(c.chars().count());
                    if i == 0 {
                        format!("{c}{}", " ".repeat(pad))
                    } else {
                        format!("{}{c}", " ".repeat(pad))
                    }
                })
                .collect::<Vec<_>>()
                .join("  ")
        };
        write!(f, "{}", line(SUMMARY_HEADERS))?;
        for [a, b, c, d] in &cells {
            write!(f, "\n{}", line([a.as_str(), b.as_str(), c.as_str(), d.as_str()]))?;
        }
        Ok(())
    }
}
/// Estimate resistance for each trial table and compare the fitted value
/// against the last-reading value.
///
/// Rows keep the input order. The first table that cannot be evaluated aborts
/// the summary with its error, tagged with the trial label.
pub fn summarize_experiment(tables: &[MeasurementTable]) -> LabResult<ExperimentSummary> {
    let rows = tables
        .iter()
        .enumerate()
        .map(|(i, table)| {
            let label = format!("R{}", i + 1);
            summarize_trial(table)
                .map(|(experimental, theoretical, percent_error)| SummaryRow {
                    label: label.clone(),
                    experimental,
                    theoretical,
                    percent_error,
                })
                .map_err(|source| LabError::Trial {
                    label,
                    source: Box::new(source),
                })
        })
        .collect::<LabResult<Vec<_>>>()?;
    debug!("summarized {} trials", rows.len());
    Ok(ExperimentSummary { rows })
}
fn summarize_trial(table: &MeasurementTable) -> LabResult<(f64, f64, String)> {
    let pair = estimate_resistance(table)?;
    let error = percent_error(pair.theoretical, pair.experimental)?;
    Ok((pair.experimental, pair.theoretical, error))
}
#[cfg(test)]
mod tests {
    use super::*;
    use crate::lab::recorder::{record_currents, RecordingConfig};
    use crate::lab::table::build_table;
    fn trial(currents: &[f64]) -> MeasurementTable {
        record_currents(currents, &RecordingConfig::new(2.0, 2.0))
    }
    #[test]
    fn labels_follow_input_order() {
        let tables = vec![
            trial(&[1.0, 2.0, 3.0]),
            trial(&[1.1, 2.0, 2.9]),
            trial(&[0.9, 2.1, 3.2]),
        ];
        let summary = summarize_experiment(&tables).unwrap();
        let labels: Vec<&str> = summary.rows().iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, vec!["R1", "R2", "R3"]);
    }
    #[test]
    fn linear_trial_has_zero_error() {
        let summary = summarize_experiment(&[trial(&[1.0, 2.0, 3.0])]).unwrap();
        let row = &summary.rows()[0];
        assert_eq!(row.experimental, 2.0);
        assert_eq!(row.theoretical, 2.0);
        assert_eq!(row.percent_error, "0.00000000%");
    }
    #[test]
    fn rows_match_individual_estimates() {
        let tables = vec![trial(&[0.9, 2.1, 3.2]), trial(&[1.2, 1.9, 3.1])];
        let summary = summarize_experiment(&tables).unwrap();
        for (row, table) in summary.rows().iter().zip(&tables) {
            let pair = estimate_resistance(table).unwrap();
            assert_eq!(row.experimental, pair.experimental);
            assert_eq!(row.theoretical, pair.theoretical);
            assert_eq!(
                row.percent_error,
                percent_error(pair.theoretical, pair.experimental).unwrap()
            );
        }
    }
    #[test]
    fn no_tables_give_empty_summary() {
        let summary = summarize_experiment(&[]).unwrap();
        assert!(summary.is_empty());
        assert_eq!(summary.to_string().lines().count(), 1);
    }
    #[test]
    fn failing_trial_is_labelled() {
        let bad = build_table(&[1.0, 0.0], &[1.0, 2.0]).unwrap();
        let err = summarize_experiment(&[trial(&[1.0, 2.0]), bad]).unwrap_err();
        match err {
            LabError::Trial { label, source } => {
                assert_eq!(label, "R2");
                assert!(matches!(*source, LabError::ZeroCurrent));
            }
            other => panic!("unexpected error: {other}"),
        }
    }
    #[test]
    fn display_has_headers_and_labels() {
        let summary = summarize_experiment(&[trial(&[1.0, 2.0, 3.0])]).unwrap();
        let text = summary.to_string();
        assert!(text.starts_with("Resistencia"));
        assert!(text.contains("Teórico"));
        assert!(text.lines().nth(1).unwrap().starts_with("R1"));
    }
}
