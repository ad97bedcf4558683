use crate::cli::SettingsArgs;
use crate::error::{CliError, Result};
use hpfold::core::models::sequence::HydrophobicitySequence;
use hpfold::core::paths::CandidateList;
use hpfold::core::render::conformation::OverflowColoring;
use hpfold::core::render::{ArtifactFormat, FigureSize};
use hpfold::engine::config as core_config;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
enum PartialFormat {
    Svg,
    Png,
}

impl From<PartialFormat> for ArtifactFormat {
    fn from(p: PartialFormat) -> Self {
        match p {
            PartialFormat::Svg => ArtifactFormat::Svg,
            PartialFormat::Png => ArtifactFormat::Png,
        }
    }
}

/// Figure size in inches.
#[derive(Deserialize, Debug, Clone, Copy)]
#[serde(deny_unknown_fields)]
struct PartialFigure {
    width: f64,
    height: f64,
}

impl From<PartialFigure> for FigureSize {
    fn from(p: PartialFigure) -> Self {
        FigureSize::new(p.width, p.height)
    }
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
struct PartialEnergyConfig {
    input_file: Option<String>,
    chart_stem: Option<String>,
    formats: Option<Vec<PartialFormat>>,
    figure: Option<PartialFigure>,
    dpi: Option<u32>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
struct PartialConformationConfig {
    input_file: Option<String>,
    chart_stem: Option<String>,
    figure: Option<PartialFigure>,
    dpi: Option<u32>,
    sequence: Option<String>,
    overflow_coloring: Option<OverflowColoring>,
}

/// Contents of the optional TOML configuration file. Every key is optional.
#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct PartialConfig {
    results_dirs: Option<Vec<PathBuf>>,
    dpi: Option<u32>,
    energy: Option<PartialEnergyConfig>,
    conformation: Option<PartialConformationConfig>,
}

/// Fully merged configuration for both pipelines.
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    pub energy: core_config::EnergyConfig,
    pub conformation: core_config::ConformationConfig,
}

impl PartialConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }

    /// Reads the file if one was given; otherwise every value falls back to its default.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    pub fn merge_with_cli(self, args: &SettingsArgs) -> Result<RunConfig> {
        let results_dirs = Self::merge_results_dirs(&args.results_dirs, self.results_dirs)?;
        let shared_dpi = args.dpi.or(self.dpi);
        let energy = self.energy.unwrap_or_default();
        let conformation = self.conformation.unwrap_or_default();

        let mut energy_builder = core_config::EnergyConfigBuilder::new();
        let mut conformation_builder = core_config::ConformationConfigBuilder::new();
        if let Some(dirs) = results_dirs {
            debug!("Using results directories {:?}", dirs);
            energy_builder = energy_builder.results_dirs(dirs.clone());
            conformation_builder = conformation_builder.results_dirs(dirs);
        }

        if let Some(name) = energy.input_file {
            energy_builder = energy_builder.input_file(name);
        }
        if let Some(stem) = energy.chart_stem {
            energy_builder = energy_builder.chart_stem(stem);
        }
        if let Some(formats) = energy.formats {
            energy_builder = energy_builder.formats(formats.into_iter().map(Into::into).collect());
        }
        if let Some(figure) = energy.figure {
            energy_builder = energy_builder.figure(figure.into());
        }
        if let Some(dpi) = args.dpi.or(energy.dpi).or(shared_dpi) {
            energy_builder = energy_builder.dpi(dpi);
        }

        if let Some(name) = conformation.input_file {
            conformation_builder = conformation_builder.input_file(name);
        }
        if let Some(stem) = conformation.chart_stem {
            conformation_builder = conformation_builder.chart_stem(stem);
        }
        if let Some(figure) = conformation.figure {
            conformation_builder = conformation_builder.figure(figure.into());
        }
        if let Some(dpi) = args.dpi.or(conformation.dpi).or(shared_dpi) {
            conformation_builder = conformation_builder.dpi(dpi);
        }
        if let Some(symbols) = conformation.sequence {
            let sequence: HydrophobicitySequence = symbols.parse().map_err(|e| {
                CliError::Config(format!("Invalid `conformation.sequence`: {}", e))
            })?;
            conformation_builder = conformation_builder.sequence(sequence);
        }
        if let Some(policy) = args.overflow_coloring.or(conformation.overflow_coloring) {
            conformation_builder = conformation_builder.overflow(policy);
        }

        Ok(RunConfig {
            energy: energy_builder.build()?,
            conformation: conformation_builder.build()?,
        })
    }

    fn merge_results_dirs(
        cli_dirs: &[PathBuf],
        file_dirs: Option<Vec<PathBuf>>,
    ) -> Result<Option<CandidateList>> {
        if !cli_dirs.is_empty() {
            return Ok(CandidateList::from_ranked(cli_dirs.iter().cloned()));
        }
        match file_dirs {
            Some(dirs) => CandidateList::from_ranked(dirs).map(Some).ok_or_else(|| {
                CliError::Config("`results-dirs` must name at least one directory.".to_string())
            }),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Cli;
    use clap::Parser;
    use hpfold::core::models::sequence::ResidueClass;
    use std::fs;
    use tempfile::TempDir;

    fn write_config_file(dir: &TempDir, content: &str) -> PathBuf {
        let path = dir.path().join("hpfold.toml");
        fs::write(&path, content).unwrap();
        path
    }

    fn settings(args: &[&str]) -> SettingsArgs {
        let argv = std::iter::once("hpfold").chain(args.iter().copied());
        Cli::parse_from(argv).settings
    }

    #[test]
    fn no_file_and_no_flags_gives_the_built_in_defaults() {
        let config = PartialConfig::load(None)
            .unwrap()
            .merge_with_cli(&settings(&[]))
            .unwrap();
        assert_eq!(config.energy, core_config::EnergyConfig::default());
        assert_eq!(config.conformation, core_config::ConformationConfig::default());
    }

    #[test]
    fn file_values_are_applied() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config_file(
            &dir,
            r#"
            results-dirs = ["/runs/latest", "/runs"]
            dpi = 150

            [energy]
            formats = ["png"]
            figure = { width = 5.0, height = 3.0 }

            [conformation]
            sequence = "HPPH"
            overflow-coloring = "repeat-last"
            chart-stem = "fold"
            "#,
        );

        let config = PartialConfig::from_file(&path)
            .unwrap()
            .merge_with_cli(&settings(&[]))
            .unwrap();

        assert_eq!(config.energy.input.primary(), Path::new("/runs/latest/energia.txt"));
        assert_eq!(config.energy.output_dirs.len(), 2);
        assert_eq!(config.energy.formats, vec![ArtifactFormat::Png]);
        assert_eq!(config.energy.figure, FigureSize::new(5.0, 3.0));
        assert_eq!(config.energy.dpi, 150);

        assert_eq!(config.conformation.dpi, 150);
        assert_eq!(config.conformation.chart_stem, "fold");
        assert_eq!(config.conformation.overflow, OverflowColoring::RepeatLast);
        assert_eq!(config.conformation.sequence.len(), 4);
        assert_eq!(config.conformation.sequence.get(1), Some(ResidueClass::Polar));
    }

    #[test]
    fn cli_flags_override_file_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config_file(
            &dir,
            r#"
            results-dirs = ["/runs/latest"]
            dpi = 150

            [conformation]
            dpi = 72
            overflow-coloring = "reject"
            "#,
        );

        let config = PartialConfig::from_file(&path)
            .unwrap()
            .merge_with_cli(&settings(&[
                "--dpi",
                "600",
                "--results-dir",
                "/elsewhere",
                "--overflow-coloring",
                "neutral",
            ]))
            .unwrap();

        assert_eq!(config.energy.dpi, 600);
        assert_eq!(config.conformation.dpi, 600);
        assert_eq!(config.conformation.overflow, OverflowColoring::Neutral);
        assert_eq!(config.conformation.output_dirs.primary(), Path::new("/elsewhere"));
        assert_eq!(config.conformation.output_dirs.len(), 1);
    }

    #[test]
    fn section_dpi_overrides_the_shared_file_dpi() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config_file(&dir, "dpi = 150\n[conformation]\ndpi = 72\n");

        let config = PartialConfig::from_file(&path)
            .unwrap()
            .merge_with_cli(&settings(&[]))
            .unwrap();
        assert_eq!(config.energy.dpi, 150);
        assert_eq!(config.conformation.dpi, 72);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config_file(&dir, "[energy]\nsmoothing = 3\n");

        let err = PartialConfig::from_file(&path).unwrap_err();
        assert!(matches!(err, CliError::FileParsing { .. }));
    }

    #[test]
    fn invalid_sequence_is_a_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config_file(&dir, "[conformation]\nsequence = \"HPX\"\n");

        let err = PartialConfig::from_file(&path)
            .unwrap()
            .merge_with_cli(&settings(&[]))
            .unwrap_err();
        assert!(matches!(err, CliError::Config(msg) if msg.contains("conformation.sequence")));
    }

    #[test]
    fn empty_results_dirs_is_a_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config_file(&dir, "results-dirs = []\n");

        let err = PartialConfig::from_file(&path)
            .unwrap()
            .merge_with_cli(&settings(&[]))
            .unwrap_err();
        assert!(matches!(err, CliError::Config(_)));
    }

    #[test]
    fn out_of_range_dpi_is_reported_through_the_core_validation() {
        let err = PartialConfig::default()
            .merge_with_cli(&settings(&["--dpi", "0"]))
            .unwrap_err();
        assert!(matches!(err, CliError::Config(msg) if msg.contains("DPI")));
    }

    #[test]
    fn missing_config_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = PartialConfig::load(Some(&dir.path().join("absent.toml"))).unwrap_err();
        assert!(matches!(err, CliError::Io(_)));
    }
}
