use std::fmt;
use std::fs;
use std::io::Cursor;
use std::ops::Range;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use image::{DynamicImage, ImageBuffer, ImageFormat, Rgb};
use log::info;
use plotters::coord::ranged1d::{DefaultFormatting, KeyPointHint};
use plotters::coord::types::RangedCoordf64;
use plotters::prelude::*;
use serde::Deserialize;
use crate::lab::error::{LabError, LabResult};
use crate::lab::table::{MeasurementTable, CURRENT_HEADER, VOLTAGE_HEADER};
/// `#RRGGBB` line color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub struct HexColor(pub u8, pub u8, pub u8);
impl HexColor {
    pub fn rgb(self) -> RGBColor {
        RGBColor(self.0, self.1, self.2)
    }
}
impl Default for HexColor {
    fn default() -> Self {
        // #3EA6FF
        HexColor(0x3E, 0xA6, 0xFF)
    }
}
impl FromStr for HexColor {
    type Err = LabError;
    fn from_str(s: &str) -> LabResult<Self> {
        let invalid = || LabError::InvalidColor(s.to_string());
        let hex = s.strip_prefix('#').ok_or_else(invalid)?;
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
        Ok(HexColor(channel(0)?, channel(2)?, channel(4)?))
    }
}
impl TryFrom<String> for HexColor {
    type Error = LabError;
    fn try_from(value: String) -> LabResult<Self> {
        value.parse()
    }
}
impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}
/// Fixed chart look: a 7x5 inch figure at 100 dpi on a white grid.
#[derive(Clone, Debug)]
pub struct PlotStyle {
    pub width: u32,
    pub height: u32,
    pub background: RGBColor,
    pub grid: RGBColor,
    pub text: RGBColor,
    pub marker_radius: u32,
}
impl Default for PlotStyle {
    fn default() -> Self {
        Self {
            width: 700,
            height: 500,
            background: WHITE,
            grid: RGBColor(204, 204, 204),
            text: RGBColor(38, 38, 38),
            marker_radius: 3,
        }
    }
}
/// Anything that can present a measurement table as a V(I) chart.
pub trait ChartRenderer {
    fn render(&mut self, title: &str, table: &MeasurementTable, color: HexColor) -> LabResult<()>;
}
/// Writes each chart as `<output_dir>/<title-slug>.png`.
pub struct PngFileRenderer {
    output_dir: PathBuf,
    style: PlotStyle,
}
impl PngFileRenderer {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            style: PlotStyle::default(),
        }
    }
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }
    pub fn path_for(&self, title: &str) -> PathBuf {
        self.output_dir.join(format!("{}.png", slug(title)))
    }
}
impl ChartRenderer for PngFileRenderer {
    fn render(&mut self, title: &str, table: &MeasurementTable, color: HexColor) -> LabResult<()> {
        let png = render_measurements_png(title, table, color, &self.style)?;
        fs::create_dir_all(&self.output_dir)?;
        let path = self.path_for(title);
        fs::write(&path, png)?;
        info!("wrote chart {}", path.display());
        Ok(())
    }
}
/// Draw voltage against current as a line with dot markers, with ticks placed
/// exactly on the measured values.
pub fn render_measurements_png(
    title: &str,
    table: &MeasurementTable,
    color: HexColor,
    style: &PlotStyle,
) -> LabResult<Vec<u8>> {
    if table.is_empty() {
        return Err(LabError::Plot("measurement table has no rows".into()));
    }
    let currents = table.currents();
    let voltages = table.voltages();
    let points: Vec<(f64, f64)> = currents.iter().copied().zip(voltages.iter().copied()).collect();
    let (x_min, x_max) = padded_range(&currents);
    let (y_min, y_max) = padded_range(&voltages);
    let line_color = color.rgb();
    let mut buffer = vec![0u8; (style.width * style.height * 3) as usize];
    {
        let root = BitMapBackend::with_buffer(&mut buffer, (style.width, style.height))
            .into_drawing_area();
        root.fill(&style.background)?;
        let mut chart = ChartBuilder::on(&root)
            .margin(15)
            .caption(title, ("sans-serif", 20).into_font().color(&style.text))
            .set_label_area_size(LabelAreaPosition::Left, 55)
            .set_label_area_size(LabelAreaPosition::Bottom, 45)
            .build_cartesian_2d(
                DataTicks::new(x_min..x_max, &currents),
                DataTicks::new(y_min..y_max, &voltages),
            )?;
        chart
            .configure_mesh()
            .bold_line_style(style.grid)
            .axis_style(style.grid)
            .x_desc(CURRENT_HEADER)
            .y_desc(VOLTAGE_HEADER)
            .x_label_formatter(&|v| format!("{v}"))
            .y_label_formatter(&|v| format!("{v}"))
            .label_style(("sans-serif", 12).into_font().color(&style.text))
            .draw()?;
        chart.draw_series(LineSeries::new(
            points.iter().copied(),
            line_color.stroke_width(2),
        ))?;
        chart.draw_series(
            points
                .iter()
                .map(|&p| Circle::new(p, style.marker_radius, line_color.filled())),
        )?;
        root.present()?;
    }
    encode_png(&buffer, style.width, style.height)
}
/// Linear f64 axis whose ticks and grid lines sit on the measured values only.
struct DataTicks {
    inner: RangedCoordf64,
    ticks: Vec<f64>,
}
impl DataTicks {
    fn new(range: Range<f64>, values: &[f64]) -> Self {
        Self {
            inner: range.into(),
            ticks: tick_values(values),
        }
    }
}
impl Ranged for DataTicks {
    type FormatOption = DefaultFormatting;
    type ValueType = f64;
    fn map(&self, value: &f64, limit: (i32, i32)) -> i32 {
        self.inner.map(value, limit)
    }
    fn key_points<Hint: KeyPointHint>(&self, hint: Hint) -> Vec<f64> {
        if hint.weight().allow_light_points() {
            Vec::new()
        } else {
            self.ticks.clone()
        }
    }
    fn range(&self) -> Range<f64> {
        self.inner.range()
    }
}
fn tick_values(values: &[f64]) -> Vec<f64> {
    let mut ticks: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
    ticks.sort_by(f64::total_cmp);
    ticks.dedup();
    ticks
}
fn padded_range(values: &[f64]) -> (f64, f64) {
    let (min, max) = values
        .iter()
        .copied()
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        });
    if min > max {
        return (-1.0, 1.0);
    }
    let range = max - min;
    let padding = if range < 1e-6 { 0.5 } else { range * 0.05 };
    (min - padding, max + padding)
}
fn slug(title: &str) -> String {
    let mut out = String::with_capacity(title.len());
    for c in title.chars() {
        if c.is_alphanumeric() {
            out.extend(c.to_lowercase());
        } else if !out.is_empty() && !out.ends_with('-') {
            out.push('-');
        }
    }
    let trimmed = out.trim_end_matches('-');
    if trimmed.is_empty() {
        "chart".to_string()
    } else {
        trimmed.to_string()
    }
}
fn encode_png(buffer: &[u8], width: u32, height: u32) -> LabResult<Vec<u8>> {
    let image = ImageBuffer::<Rgb<u8>, _>::from_raw(width, height, buffer.to_vec())
        .ok_or_else(|| LabError::Plot("failed to allocate image buffer".into()))?;
    let mut output = Vec::new();
    let dynamic = DynamicImage::ImageRgb8(image);
    dynamic.write_to(&mut Cursor::new(&mut output), ImageFormat::Png)?;
    Ok(output)
}
