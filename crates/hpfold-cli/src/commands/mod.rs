pub mod all;
pub mod conformation;
pub mod energy;

use crate::error::{CliError, Result};
use hpfold::engine::error::PipelineError;
use hpfold::engine::progress::PipelineKind;
use hpfold::workflows::{PipelineReport, RunSummary};
use std::fmt::Write as _;
use tracing::{error, info};

pub type Outcome = std::result::Result<PipelineReport, PipelineError>;

/// Prints one status block per pipeline and fails if any of them failed.
pub fn summarize(outcomes: &[(PipelineKind, Outcome)]) -> Result<()> {
    let mut failed = 0;
    for (pipeline, outcome) in outcomes {
        match outcome {
            Ok(report) => {
                info!("[{}] Completed successfully.", pipeline);
                println!("{}", describe_success(report));
            }
            Err(e) => {
                failed += 1;
                match e.path() {
                    Some(path) => error!(path = %path.display(), "[{}] {}: {}", pipeline, e.kind(), e),
                    None => error!("[{}] {}: {}", pipeline, e.kind(), e),
                }
                eprintln!("{}", describe_failure(*pipeline, e));
            }
        }
    }

    if failed > 0 {
        return Err(CliError::PipelinesFailed {
            failed,
            total: outcomes.len(),
        });
    }
    Ok(())
}

fn describe_success(report: &PipelineReport) -> String {
    let mut out = format!("✓ [{}] Wrote", report.pipeline);
    for path in &report.artifacts {
        let _ = write!(out, " {}", path.display());
    }

    match &report.summary {
        RunSummary::Energy(Some(summary)) => {
            let _ = write!(
                out,
                "\n  {} step(s), final energy {:.4}, minimum {:.4} at step {}",
                summary.steps, summary.final_energy, summary.minimum, summary.minimum_step
            );
        }
        RunSummary::Energy(None) => {
            out.push_str("\n  Energy trajectory is empty; the chart has no data.");
        }
        RunSummary::Conformation {
            residues,
            unlabeled,
        } => {
            let _ = write!(out, "\n  {} residue(s)", residues);
            if *unlabeled > 0 {
                let _ = write!(out, ", {} beyond the HP sequence", unlabeled);
            }
        }
    }
    out
}

fn describe_failure(pipeline: PipelineKind, err: &PipelineError) -> String {
    let mut out = format!(
        "✗ [{}] {} while {}: {}",
        pipeline,
        err.kind(),
        err.stage().name().to_lowercase(),
        err
    );
    if let Some(remedy) = err.remedy() {
        let _ = write!(out, "\n  Hint: {}", remedy);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use hpfold::core::models::energy::EnergyTrajectory;
    use std::path::PathBuf;

    fn energy_report() -> PipelineReport {
        PipelineReport {
            pipeline: PipelineKind::Energy,
            input: PathBuf::from("../Out/energia.txt"),
            output_dir: PathBuf::from("../Out"),
            artifacts: vec![
                PathBuf::from("../Out/energia_wykres.svg"),
                PathBuf::from("../Out/energia_wykres.png"),
            ],
            summary: RunSummary::Energy(
                EnergyTrajectory::new(vec![-10.0, -12.5, -12.5, -15.0]).summary(),
            ),
        }
    }

    fn not_found() -> PipelineError {
        PipelineError::NotFound {
            path: PathBuf::from("../Out/koncowa_konformacja.txt"),
        }
    }

    #[test]
    fn success_lists_every_written_artifact() {
        let text = describe_success(&energy_report());
        assert!(text.starts_with("✓ [energy] Wrote ../Out/energia_wykres.svg ../Out/energia_wykres.png"));
        assert!(text.contains("4 step(s), final energy -15.0000"));
    }

    #[test]
    fn conformation_summary_mentions_unlabeled_residues() {
        let report = PipelineReport {
            pipeline: PipelineKind::Conformation,
            input: PathBuf::from("koncowa_konformacja.txt"),
            output_dir: PathBuf::from("."),
            artifacts: vec![PathBuf::from("./zwijanie.png")],
            summary: RunSummary::Conformation {
                residues: 80,
                unlabeled: 5,
            },
        };
        let text = describe_success(&report);
        assert!(text.contains("80 residue(s), 5 beyond the HP sequence"));
    }

    #[test]
    fn failure_names_kind_path_and_remedy() {
        let text = describe_failure(PipelineKind::Conformation, &not_found());
        let mut lines = text.lines();
        let first = lines.next().unwrap();
        assert!(first.starts_with("✗ [conformation] NotFoundError while loading results:"));
        assert!(first.contains("../Out/koncowa_konformacja.txt"));
        assert!(lines.next().unwrap().contains("Hint: Ensure koncowa_konformacja.txt exists"));
    }

    #[test]
    fn failure_names_the_stage_it_happened_in() {
        let err = PipelineError::Write {
            path: PathBuf::from("../Out/zwijanie.png"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only"),
        };
        let text = describe_failure(PipelineKind::Conformation, &err);
        assert!(text.starts_with("✗ [conformation] WriteError while writing artifacts:"));
        assert_eq!(err.path(), Some(std::path::Path::new("../Out/zwijanie.png")));
    }

    #[test]
    fn any_failure_fails_the_whole_run() {
        let outcomes = vec![
            (PipelineKind::Energy, Ok(energy_report())),
            (PipelineKind::Conformation, Err(not_found())),
        ];
        let err = summarize(&outcomes).unwrap_err();
        assert!(matches!(
            err,
            CliError::PipelinesFailed {
                failed: 1,
                total: 2
            }
        ));
    }

    #[test]
    fn all_successes_pass() {
        assert!(summarize(&[(PipelineKind::Energy, Ok(energy_report()))]).is_ok());
    }
}
