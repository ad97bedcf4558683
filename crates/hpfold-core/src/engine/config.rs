use crate::core::models::sequence::HydrophobicitySequence;
use crate::core::paths::CandidateList;
use crate::core::render::conformation::OverflowColoring;
use crate::core::render::{ArtifactFormat, FigureSize};
use thiserror::Error;

/// Directory the simulation driver copies its results into, relative to the plot scripts.
pub const RESULTS_DIR: &str = "../Out";
/// Fallback when the results directory is absent: the current directory.
pub const LOCAL_DIR: &str = ".";

pub const ENERGY_INPUT_FILE: &str = "energia.txt";
pub const ENERGY_CHART_STEM: &str = "energia_wykres";
pub const CONFORMATION_INPUT_FILE: &str = "koncowa_konformacja.txt";
pub const CONFORMATION_CHART_STEM: &str = "zwijanie";

pub const DEFAULT_DPI: u32 = 300;
pub const ENERGY_FIGURE: FigureSize = FigureSize::new(10.0, 6.0);
pub const CONFORMATION_FIGURE: FigureSize = FigureSize::new(8.0, 8.0);

const MAX_DPI: u32 = 1200;

#[derive(Debug, Error, PartialEq, Clone)]
pub enum ConfigError {
    #[error("DPI must be between 1 and {max}, got {value}")]
    InvalidDpi { value: u32, max: u32 },
    #[error("Figure size must be positive, got {width_in}x{height_in} in")]
    InvalidFigure { width_in: f64, height_in: f64 },
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),
}

/// Ranked default locations: the results directory, then the current directory.
pub fn default_results_dirs() -> CandidateList {
    CandidateList::new(RESULTS_DIR).with_fallback(LOCAL_DIR)
}

#[derive(Debug, Clone, PartialEq)]
pub struct EnergyConfig {
    pub input: CandidateList,
    pub output_dirs: CandidateList,
    pub chart_stem: String,
    pub formats: Vec<ArtifactFormat>,
    pub figure: FigureSize,
    pub dpi: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConformationConfig {
    pub input: CandidateList,
    pub output_dirs: CandidateList,
    pub chart_stem: String,
    pub figure: FigureSize,
    pub dpi: u32,
    pub sequence: HydrophobicitySequence,
    pub overflow: OverflowColoring,
}

impl Default for EnergyConfig {
    fn default() -> Self {
        let dirs = default_results_dirs();
        Self {
            input: dirs.join(ENERGY_INPUT_FILE),
            output_dirs: dirs,
            chart_stem: ENERGY_CHART_STEM.to_string(),
            formats: vec![ArtifactFormat::Svg, ArtifactFormat::Png],
            figure: ENERGY_FIGURE,
            dpi: DEFAULT_DPI,
        }
    }
}

impl Default for ConformationConfig {
    fn default() -> Self {
        let dirs = default_results_dirs();
        Self {
            input: dirs.join(CONFORMATION_INPUT_FILE),
            output_dirs: dirs,
            chart_stem: CONFORMATION_CHART_STEM.to_string(),
            figure: CONFORMATION_FIGURE,
            dpi: DEFAULT_DPI,
            sequence: HydrophobicitySequence::ubiquitin(),
            overflow: OverflowColoring::default(),
        }
    }
}

fn validate_dpi(dpi: u32) -> Result<u32, ConfigError> {
    if dpi == 0 || dpi > MAX_DPI {
        return Err(ConfigError::InvalidDpi {
            value: dpi,
            max: MAX_DPI,
        });
    }
    Ok(dpi)
}

fn validate_figure(figure: FigureSize) -> Result<FigureSize, ConfigError> {
    let positive = |v: f64| v.is_finite() && v > 0.0;
    if !positive(figure.width_in) || !positive(figure.height_in) {
        return Err(ConfigError::InvalidFigure {
            width_in: figure.width_in,
            height_in: figure.height_in,
        });
    }
    Ok(figure)
}

#[derive(Default)]
pub struct EnergyConfigBuilder {
    results_dirs: Option<CandidateList>,
    input: Option<CandidateList>,
    output_dirs: Option<CandidateList>,
    input_file: Option<String>,
    chart_stem: Option<String>,
    formats: Option<Vec<ArtifactFormat>>,
    figure: Option<FigureSize>,
    dpi: Option<u32>,
}

impl EnergyConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ranked directories searched for the input file and used for the output.
    pub fn results_dirs(mut self, dirs: CandidateList) -> Self {
        self.results_dirs = Some(dirs);
        self
    }
    /// Explicit input file candidates; takes precedence over `results_dirs`.
    pub fn input(mut self, candidates: CandidateList) -> Self {
        self.input = Some(candidates);
        self
    }
    /// Explicit output directory candidates; takes precedence over `results_dirs`.
    pub fn output_dirs(mut self, candidates: CandidateList) -> Self {
        self.output_dirs = Some(candidates);
        self
    }
    pub fn input_file(mut self, name: impl Into<String>) -> Self {
        self.input_file = Some(name.into());
        self
    }
    pub fn chart_stem(mut self, stem: impl Into<String>) -> Self {
        self.chart_stem = Some(stem.into());
        self
    }
    pub fn formats(mut self, formats: Vec<ArtifactFormat>) -> Self {
        self.formats = Some(formats);
        self
    }
    pub fn figure(mut self, figure: FigureSize) -> Self {
        self.figure = Some(figure);
        self
    }
    pub fn dpi(mut self, dpi: u32) -> Self {
        self.dpi = Some(dpi);
        self
    }

    pub fn build(self) -> Result<EnergyConfig, ConfigError> {
        let dirs = self.results_dirs.unwrap_or_else(default_results_dirs);
        let input_file = self
            .input_file
            .unwrap_or_else(|| ENERGY_INPUT_FILE.to_string());
        let formats = self
            .formats
            .unwrap_or_else(|| vec![ArtifactFormat::Svg, ArtifactFormat::Png]);
        if formats.is_empty() {
            return Err(ConfigError::MissingParameter("formats"));
        }

        Ok(EnergyConfig {
            input: self.input.unwrap_or_else(|| dirs.join(&input_file)),
            output_dirs: self.output_dirs.unwrap_or(dirs),
            chart_stem: non_empty(self.chart_stem, ENERGY_CHART_STEM, "chart_stem")?,
            formats,
            figure: validate_figure(self.figure.unwrap_or(ENERGY_FIGURE))?,
            dpi: validate_dpi(self.dpi.unwrap_or(DEFAULT_DPI))?,
        })
    }
}

#[derive(Default)]
pub struct ConformationConfigBuilder {
    results_dirs: Option<CandidateList>,
    input: Option<CandidateList>,
    output_dirs: Option<CandidateList>,
    input_file: Option<String>,
    chart_stem: Option<String>,
    figure: Option<FigureSize>,
    dpi: Option<u32>,
    sequence: Option<HydrophobicitySequence>,
    overflow: Option<OverflowColoring>,
}

impl ConformationConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn results_dirs(mut self, dirs: CandidateList) -> Self {
        self.results_dirs = Some(dirs);
        self
    }
    pub fn input(mut self, candidates: CandidateList) -> Self {
        self.input = Some(candidates);
        self
    }
    pub fn output_dirs(mut self, candidates: CandidateList) -> Self {
        self.output_dirs = Some(candidates);
        self
    }
    pub fn input_file(mut self, name: impl Into<String>) -> Self {
        self.input_file = Some(name.into());
        self
    }
    pub fn chart_stem(mut self, stem: impl Into<String>) -> Self {
        self.chart_stem = Some(stem.into());
        self
    }
    pub fn figure(mut self, figure: FigureSize) -> Self {
        self.figure = Some(figure);
        self
    }
    pub fn dpi(mut self, dpi: u32) -> Self {
        self.dpi = Some(dpi);
        self
    }
    pub fn sequence(mut self, sequence: HydrophobicitySequence) -> Self {
        self.sequence = Some(sequence);
        self
    }
    pub fn overflow(mut self, policy: OverflowColoring) -> Self {
        self.overflow = Some(policy);
        self
    }

    pub fn build(self) -> Result<ConformationConfig, ConfigError> {
        let dirs = self.results_dirs.unwrap_or_else(default_results_dirs);
        let input_file = self
            .input_file
            .unwrap_or_else(|| CONFORMATION_INPUT_FILE.to_string());

        Ok(ConformationConfig {
            input: self.input.unwrap_or_else(|| dirs.join(&input_file)),
            output_dirs: self.output_dirs.unwrap_or(dirs),
            chart_stem: non_empty(self.chart_stem, CONFORMATION_CHART_STEM, "chart_stem")?,
            figure: validate_figure(self.figure.unwrap_or(CONFORMATION_FIGURE))?,
            dpi: validate_dpi(self.dpi.unwrap_or(DEFAULT_DPI))?,
            sequence: self.sequence.unwrap_or_default(),
            overflow: self.overflow.unwrap_or_default(),
        })
    }
}

fn non_empty(
    value: Option<String>,
    default: &str,
    name: &'static str,
) -> Result<String, ConfigError> {
    match value {
        Some(v) if v.trim().is_empty() => Err(ConfigError::MissingParameter(name)),
        Some(v) => Ok(v),
        None => Ok(default.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn energy_defaults_follow_the_results_directory_convention() {
        let config = EnergyConfigBuilder::new().build().unwrap();
        assert_eq!(config, EnergyConfig::default());
        assert_eq!(config.input.primary(), Path::new("../Out/energia.txt"));
        assert_eq!(config.input.iter().nth(1), Some(Path::new("./energia.txt")));
        assert_eq!(config.output_dirs.primary(), Path::new("../Out"));
        assert_eq!(config.formats, vec![ArtifactFormat::Svg, ArtifactFormat::Png]);
        assert_eq!(config.dpi, 300);
    }

    #[test]
    fn conformation_defaults_use_the_ubiquitin_sequence() {
        let config = ConformationConfigBuilder::new().build().unwrap();
        assert_eq!(config, ConformationConfig::default());
        assert_eq!(config.sequence, HydrophobicitySequence::ubiquitin());
        assert_eq!(config.overflow, OverflowColoring::Neutral);
        assert_eq!(
            config.input.primary(),
            Path::new("../Out/koncowa_konformacja.txt")
        );
        assert_eq!(config.chart_stem, "zwijanie");
    }

    #[test]
    fn results_dirs_apply_to_input_and_output() {
        let dirs = CandidateList::new("/data/run1").with_fallback("/data");
        let config = EnergyConfigBuilder::new()
            .results_dirs(dirs.clone())
            .build()
            .unwrap();
        assert_eq!(config.input, dirs.join("energia.txt"));
        assert_eq!(config.output_dirs, dirs);
    }

    #[test]
    fn explicit_input_candidates_take_precedence() {
        let input = CandidateList::new("/tmp/custom.txt");
        let config = ConformationConfigBuilder::new()
            .results_dirs(CandidateList::new("/data"))
            .input(input.clone())
            .build()
            .unwrap();
        assert_eq!(config.input, input);
        assert_eq!(config.output_dirs.primary(), Path::new("/data"));
    }

    #[test]
    fn zero_dpi_is_rejected() {
        let err = EnergyConfigBuilder::new().dpi(0).build().unwrap_err();
        assert_eq!(err, ConfigError::InvalidDpi { value: 0, max: 1200 });
    }

    #[test]
    fn non_positive_figure_is_rejected() {
        let err = ConformationConfigBuilder::new()
            .figure(FigureSize::new(8.0, 0.0))
            .build()
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidFigure { .. }));
    }

    #[test]
    fn empty_format_list_is_rejected() {
        let err = EnergyConfigBuilder::new().formats(vec![]).build().unwrap_err();
        assert_eq!(err, ConfigError::MissingParameter("formats"));
    }

    #[test]
    fn blank_chart_stem_is_rejected() {
        let err = EnergyConfigBuilder::new().chart_stem("  ").build().unwrap_err();
        assert_eq!(err, ConfigError::MissingParameter("chart_stem"));
    }
}
