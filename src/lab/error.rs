use thiserror::Error;
#[derive(Debug, Error)]
pub enum LabError {
    #[error("decimal places must be an integer, got {0}")]
    NonIntegerDecimals(f64),
    #[error("decimal places has to be 0 or more, got {0}")]
    NegativeDecimals(i64),
    #[error("length mismatch: {currents} currents but {voltages} voltages")]
    LengthMismatch { currents: usize, voltages: usize },
    #[error("not enough measurements for a line fit: need at least {needed}, got {got}")]
    InsufficientData { needed: usize, got: usize },
    #[error("line fit is degenerate: every current has the same value")]
    DegenerateFit,
    #[error("last measurement has zero current; theoretical resistance is undefined")]
    ZeroCurrent,
    #[error("accepted value is zero; percent error is undefined")]
    ZeroAccepted,
    #[error("invalid hex color {0:?}, expected #RRGGBB")]
    InvalidColor(String),
    #[error("failed to render plot: {0}")]
    Plot(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("trial {label}: {source}")]
    Trial {
        label: String,
        #[source]
        source: Box<LabError>,
    },
}
pub type LabResult<T> = Result<T, LabError>;
impl<E: std::error::Error + Send + Sync + 'static> From<plotters::drawing::DrawingAreaErrorKind<E>>
    for LabError
{
    fn from(value: plotters::drawing::DrawingAreaErrorKind<E>) -> Self {
        LabError::Plot(format!("{value:?}"))
    }
}
impl From<image::ImageError> for LabError {
    fn from(value: image::ImageError) -> Self {
        LabError::Plot(value.to_string())
    }
}
