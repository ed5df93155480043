use std::fs;
use std::path::Path;
use anyhow::{bail, Context, Result};
use serde::Deserialize;
use crate::lab::{record_currents, HexColor, MeasurementTable, RecordingConfig};
/// Set of trials to run, read from a JSON file.
#[derive(Clone, Debug, Deserialize)]
pub struct LabConfig {
    pub trials: Vec<TrialConfig>,
}
#[derive(Clone, Debug, Deserialize)]
pub struct TrialConfig {
    /// Chart title; also names the PNG file.
    pub title: String,
    #[serde(flatten)]
    pub recording: RecordingConfig,
    /// Current read at each step of the ramp (amperes).
    pub currents: Vec<f64>,
    /// Line color, `#3EA6FF` when omitted.
    #[serde(default)]
    pub color: Option<HexColor>,
}
impl TrialConfig {
    pub fn table(&self) -> MeasurementTable {
        record_currents(&self.currents, &self.recording)
    }
    pub fn color(&self) -> HexColor {
        self.color.unwrap_or_default()
    }
}
impl LabConfig {
    pub fn from_json(text: &str) -> Result<Self> {
        let config: LabConfig = serde_json::from_str(text).context("invalid trial file")?;
        config.validate()?;
        Ok(config)
    }
    pub fn validate(&self) -> Result<()> {
        for (i, trial) in self.trials.iter().enumerate() {
            if trial.currents.len() < 2 {
                bail!(
                    "trial {} ({:?}) needs at least 2 current readings, got {}",
                    i + 1,
                    trial.title,
                    trial.currents.len()
                );
            }
        }
        Ok(())
    }
    /// Three 5 V-step trials on the same nominal resistor.
    pub fn demo() -> Self {
        let trial = |title: &str, currents: &[f64], color: Option<HexColor>| TrialConfig {
            title: title.to_string(),
            recording: RecordingConfig::new(5.0, 5.0),
            currents: currents.to_vec(),
            color,
        };
        Self {
            trials: vec![
                trial("Ensayo 1", &[0.05, 0.1, 0.16, 0.2, 0.25, 0.31], None),
                trial(
                    "Ensayo 2",
                    &[0.04, 0.11, 0.15, 0.2, 0.26, 0.3],
                    Some(HexColor(0xFF, 0x6F, 0x3E)),
                ),
                trial(
                    "Ensayo 3",
                    &[0.05, 0.09, 0.15, 0.21, 0.25, 0.29],
                    Some(HexColor(0x3E, 0xC2, 0x6F)),
                ),
            ],
        }
    }
}
pub fn load_config(path: &Path) -> Result<LabConfig> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read trial file: {}", path.display()))?;
    LabConfig::from_json(&text).with_context(|| format!("Failed to load {}", path.display()))
}
#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    #[test]
    fn parses_trials_with_optional_color() {
        let config = LabConfig::from_json(
            r##"{ "trials": [
                { "title": "A", "initial_voltage": 2.0, "step": 2.0, "currents": [1.0, 2.0, 3.0] },
                { "title": "B", "initial_voltage": 1.0, "step": 0.5, "currents": [0.1, 0.2], "color": "#112233" }
            ] }"##,
        )
        .unwrap();
        assert_eq!(config.trials.len(), 2);
        assert_eq!(config.trials[0].recording, RecordingConfig::new(2.0, 2.0));
        assert_eq!(config.trials[0].color(), HexColor::default());
        assert_eq!(config.trials[1].color(), HexColor(0x11, 0x22, 0x33));
        assert_eq!(config.trials[0].table().voltages(), vec![2.0, 4.0, 6.0]);
    }
    #[test]
    fn empty_currents_are_rejected() {
        let err = LabConfig::from_json(
            r#"{ "trials": [ { "title": "A", "initial_voltage": 1.0, "step": 1.0, "currents": [] } ] }"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("at least 2 current readings"));
    }
    #[test]
    fn single_current_is_rejected() {
        let err = LabConfig::from_json(
            r#"{ "trials": [ { "title": "A", "initial_voltage": 1.0, "step": 1.0, "currents": [0.5] } ] }"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("got 1"));
    }
    #[test]
    fn bad_color_is_a_parse_error() {
        let result = LabConfig::from_json(
            r#"{ "trials": [ { "title": "A", "initial_voltage": 1.0, "step": 1.0, "currents": [1.0], "color": "blue" } ] }"#,
        );
        assert!(result.is_err());
    }
    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{ "trials": [ {{ "title": "A", "initial_voltage": 1.0, "step": 1.0, "currents": [1.0, 2.0] }} ] }}"#
        )
        .unwrap();
        let config = load_config(file.path()).unwrap();
        assert_eq!(config.trials[0].title, "A");
    }
    #[test]
    fn missing_file_reports_path() {
        let err = load_config(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(err.to_string().contains("here.json"));
    }
    #[test]
    fn demo_trials_are_valid() {
        let demo = LabConfig::demo();
        demo.validate().unwrap();
        assert_eq!(demo.trials.len(), 3);
    }
}
