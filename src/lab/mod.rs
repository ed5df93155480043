// src/lab/mod.rs
pub mod error;
pub mod experiment;
pub mod percent_error;
pub mod plot;
pub mod recorder;
pub mod resistance;
pub mod rounding;
pub mod table;
pub mod voltage;
pub use error::{LabError, LabResult};
pub use experiment::{summarize_experiment, ExperimentSummary, SummaryRow};
pub use percent_error::{percent_error, percent_error_value};
pub use plot::{render_measurements_png, ChartRenderer, HexColor, PlotStyle, PngFileRenderer};
pub use recorder::{record_currents, RecordingConfig};
pub use resistance::{estimate_resistance, fit_line, LinearFit, ResistancePair};
pub use rounding::{round_down, round_down_default, DecimalPlaces};
pub use table::{build_table, MeasurementRow, MeasurementTable};
pub use voltage::generate_voltages;
