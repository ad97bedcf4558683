use super::{Outcome, conformation, energy};
use crate::cli::AllArgs;
use crate::config::RunConfig;
use crate::utils::progress::CliProgressHandler;
use hpfold::engine::progress::PipelineKind;
use indicatif::MultiProgress;
use tracing::info;

/// Runs both pipelines. A failure in one never stops the other.
pub fn run(args: &AllArgs, config: &RunConfig) -> Vec<(PipelineKind, Outcome)> {
    let (energy_outcome, conformation_outcome) = if args.sequential {
        info!("Running the energy and conformation pipelines sequentially.");
        (
            energy::run_standalone(&config.energy),
            conformation::run_standalone(&config.conformation),
        )
    } else {
        info!("Running the energy and conformation pipelines concurrently.");
        let multi = MultiProgress::new();
        let energy_progress = CliProgressHandler::attached_to(&multi, PipelineKind::Energy);
        let conformation_progress =
            CliProgressHandler::attached_to(&multi, PipelineKind::Conformation);
        rayon::join(
            || energy::run(&config.energy, energy_progress),
            || conformation::run(&config.conformation, conformation_progress),
        )
    };

    vec![
        (PipelineKind::Energy, energy_outcome),
        (PipelineKind::Conformation, conformation_outcome),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PartialConfig;
    use crate::cli::SettingsArgs;
    use hpfold::engine::error::PipelineError;
    use std::fs;
    use std::path::Path;

    fn config_for(dir: &Path) -> RunConfig {
        let settings = SettingsArgs {
            results_dirs: vec![dir.to_path_buf()],
            dpi: Some(20),
            ..Default::default()
        };
        PartialConfig::default().merge_with_cli(&settings).unwrap()
    }

    fn run_in(dir: &Path, sequential: bool) -> Vec<(PipelineKind, Outcome)> {
        run(&AllArgs { sequential }, &config_for(dir))
    }

    #[test]
    fn both_pipelines_write_their_artifacts() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("energia.txt"), "-1.0\n-2.0\n-2.5\n").unwrap();
        fs::write(dir.path().join("koncowa_konformacja.txt"), "0 0 0\n1 0 0\n1 1 0\n").unwrap();

        for sequential in [false, true] {
            let outcomes = run_in(dir.path(), sequential);
            assert!(outcomes.iter().all(|(_, o)| o.is_ok()));
        }
        for name in ["energia_wykres.svg", "energia_wykres.png", "zwijanie.png"] {
            assert!(dir.path().join(name).is_file(), "{} missing", name);
        }
    }

    #[test]
    fn one_failing_pipeline_does_not_stop_the_other() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("energia.txt"), "-1.0 -2.0\n").unwrap();

        let outcomes = run_in(dir.path(), false);
        assert_eq!(outcomes[0].0, PipelineKind::Energy);
        assert!(outcomes[0].1.is_ok());
        assert_eq!(outcomes[1].0, PipelineKind::Conformation);
        assert!(matches!(
            outcomes[1].1,
            Err(PipelineError::NotFound { .. })
        ));
        assert!(dir.path().join("energia_wykres.png").is_file());
        assert!(!dir.path().join("zwijanie.png").exists());
    }
}
