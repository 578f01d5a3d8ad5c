use crate::cli::ConvertArgs;
use crate::config::builder::build_convert_config;
use crate::config::defaults::SUMMARY_FILE_NAME;
use crate::config::models::{ConvertConfig, OverwritePolicy};
use crate::error::{CliError, Result};
use crate::utils::progress::CliProgressHandler;
use confviz::core::io::summary::write_summary_to_path;
use confviz::core::io::traits::EnsembleFile;
use confviz::core::io::xyz::XyzEnsemble;
use confviz::core::models::conformer::Conformer;
use confviz::engine::progress::{Progress, ProgressReporter, Stage};
use confviz::workflows::visualize::{self, structure_path};
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

/// What a conversion produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertReport {
    pub parsed: usize,
    pub retained: usize,
    pub written: usize,
    pub skipped: usize,
}

pub fn run(args: ConvertArgs) -> Result<()> {
    info!("Building configuration from file and CLI arguments...");
    let config = build_convert_config(&args)?;

    let progress_handler = CliProgressHandler::new();
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    let report = execute(&config, &reporter)?;

    println!(
        "✓ {} of {} conformers written to {} ({} already present)",
        report.written,
        report.parsed,
        config.output_dir.display(),
        report.skipped
    );
    println!(
        "✓ ChimeraX script with {} conformer(s) written to: {}",
        report.retained,
        config.script_path.display()
    );
    Ok(())
}

/// Runs the whole conversion for an already merged configuration.
///
/// The overwrite policy is checked before the ensemble is read, and the ensemble is parsed
/// and ranked completely before the first file is written, so malformed input or bad
/// thresholds never leave partial output behind.
pub fn execute(config: &ConvertConfig, reporter: &ProgressReporter) -> Result<ConvertReport> {
    check_existing_outputs(config)?;

    info!("Loading conformer ensemble from {:?}", &config.input_path);
    let conformers = reporter
        .stage(Stage::Parsing, || {
            XyzEnsemble::read_from_path(&config.input_path)
        })
        .map_err(|e| CliError::FileParsing {
            path: config.input_path.clone(),
            source: e.into(),
        })?;
    let parsed = conformers.len();
    info!("Parsed {} conformers.", parsed);

    let all_conformers = config.all_structures.then(|| conformers.clone());
    let plan = visualize::run(conformers, &config.core_config, reporter)?;

    reporter.report(Progress::StageStart {
        stage: Stage::Writing,
    });
    let to_write: Vec<&Conformer> = match &all_conformers {
        Some(all) => all.iter().collect(),
        None => plan.conformers.iter().map(|c| c.conformer()).collect(),
    };
    let (written, skipped) = write_structures(&to_write, config, reporter)?;

    info!("Writing ChimeraX script to {:?}", &config.script_path);
    plan.script
        .write_to_path(&config.script_path)
        .map_err(|e| CliError::FileWriting {
            path: config.script_path.clone(),
            source: e.into(),
        })?;

    if config.write_summary {
        let summary_path = config.output_dir.join(SUMMARY_FILE_NAME);
        info!("Writing population summary to {:?}", &summary_path);
        write_summary_to_path(&plan.conformers, &summary_path).map_err(|e| {
            CliError::FileWriting {
                path: summary_path.clone(),
                source: e.into(),
            }
        })?;
    }
    reporter.report(Progress::StageFinish);

    Ok(ConvertReport {
        parsed,
        retained: plan.conformers.len(),
        written,
        skipped,
    })
}

fn check_existing_outputs(config: &ConvertConfig) -> Result<()> {
    let existing = [&config.output_dir, &config.script_path]
        .into_iter()
        .find(|p| p.exists());
    let Some(path) = existing else {
        return Ok(());
    };

    match config.policy {
        OverwritePolicy::Abort => Err(CliError::OutputExists { path: path.clone() }),
        OverwritePolicy::Overwrite => {
            warn!("{:?} already exists and will be overwritten.", path);
            Ok(())
        }
        OverwritePolicy::Skip => {
            info!("{:?} already exists; existing conformer files are kept.", path);
            Ok(())
        }
    }
}

fn write_structures(
    conformers: &[&Conformer],
    config: &ConvertConfig,
    reporter: &ProgressReporter,
) -> Result<(usize, usize)> {
    fs::create_dir_all(&config.output_dir)?;
    reporter.report(Progress::TaskStart {
        total_steps: conformers.len() as u64,
    });

    let mut written = 0;
    let mut skipped = 0;
    for conformer in conformers {
        let path = structure_path(&config.output_dir, conformer.id());
        if config.policy == OverwritePolicy::Skip && path.exists() {
            debug!("Keeping existing file {:?}", &path);
            reporter.report(Progress::Message(format!(
                "Kept existing {}",
                path.display()
            )));
            skipped += 1;
        } else {
            debug!("Writing conformer {} to {:?}", conformer.id(), &path);
            write_structure(conformer, &path)?;
            written += 1;
        }
        reporter.report(Progress::TaskIncrement);
    }

    reporter.report(Progress::TaskFinish);
    Ok((written, skipped))
}

fn write_structure(conformer: &Conformer, path: &Path) -> Result<()> {
    XyzEnsemble::write_conformer_to_path(conformer, path).map_err(|e| CliError::FileWriting {
        path: path.to_path_buf(),
        source: e.into(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use confviz::engine::config::VisualizationConfigBuilder;
    use std::path::PathBuf;
    use tempfile::{TempDir, tempdir};

    const ENSEMBLE: &str = "\
2
 -10.50000000
C 0.000 0.000 0.000
O 1.128 0.000 0.000
2
 -10.50100000
C 0.000 0.000 0.000
O 1.130 0.000 0.000
2
 -10.49000000
C 0.000 0.000 0.000
O 1.140 0.000 0.000
";

    fn setup(ensemble: &str) -> (TempDir, PathBuf) {
        let dir = tempdir().unwrap();
        let input = dir.path().join("crest_conformers.xyz");
        fs::write(&input, ensemble).unwrap();
        (dir, input)
    }

    fn convert_config(dir: &Path, input: &Path, energy_cutoff: f64) -> ConvertConfig {
        ConvertConfig {
            input_path: input.to_path_buf(),
            script_path: dir.join("view.cxc"),
            output_dir: dir.join("conformers"),
            policy: OverwritePolicy::Abort,
            all_structures: false,
            write_summary: true,
            core_config: VisualizationConfigBuilder::new()
                .energy_cutoff(energy_cutoff)
                .population_cutoff(1.0)
                .refatoms("*")
                .max_transparency(100.0)
                .structure_dir(PathBuf::from("./conformers"))
                .build()
                .unwrap(),
        }
    }

    #[test]
    fn execute_writes_retained_conformers_script_and_summary() {
        let (dir, input) = setup(ENSEMBLE);
        let config = convert_config(dir.path(), &input, 6.0);

        let report = execute(&config, &ProgressReporter::new()).unwrap();

        assert_eq!(
            report,
            ConvertReport {
                parsed: 3,
                retained: 2,
                written: 2,
                skipped: 0
            }
        );
        let out = dir.path().join("conformers");
        assert!(out.join("c0.xyz").exists());
        assert!(out.join("c1.xyz").exists());
        assert!(!out.join("c2.xyz").exists());
        assert_eq!(
            fs::read_to_string(out.join("c1.xyz")).unwrap(),
            "2\n -10.50100000\nC 0.000 0.000 0.000\nO 1.130 0.000 0.000\n"
        );

        let script = fs::read_to_string(dir.path().join("view.cxc")).unwrap();
        let lines: Vec<&str> = script.lines().collect();
        assert_eq!(lines[0], "open ./conformers/c1.xyz");
        assert_eq!(lines[1], "transparency #1 0.00 target ab");
        assert_eq!(lines[2], "open ./conformers/c0.xyz");
        assert!(lines[3].starts_with("transparency #2 "));
        assert_eq!(lines[4], "align #2@* toAtoms #1@*");
        assert_eq!(lines.len(), 5);

        let summary = fs::read_to_string(out.join(SUMMARY_FILE_NAME)).unwrap();
        assert_eq!(summary.lines().count(), 3);
    }

    #[test]
    fn execute_with_all_structures_writes_every_parsed_conformer() {
        let (dir, input) = setup(ENSEMBLE);
        let mut config = convert_config(dir.path(), &input, 6.0);
        config.all_structures = true;
        config.write_summary = false;

        let report = execute(&config, &ProgressReporter::new()).unwrap();

        assert_eq!(report.written, 3);
        assert_eq!(report.retained, 2);
        assert!(dir.path().join("conformers/c2.xyz").exists());
        assert!(!dir.path().join("conformers").join(SUMMARY_FILE_NAME).exists());
    }

    #[test]
    fn execute_aborts_when_output_directory_exists() {
        let (dir, input) = setup(ENSEMBLE);
        fs::create_dir(dir.path().join("conformers")).unwrap();
        let config = convert_config(dir.path(), &input, 6.0);

        let result = execute(&config, &ProgressReporter::new());

        assert!(matches!(result, Err(CliError::OutputExists { .. })));
        assert!(!dir.path().join("view.cxc").exists());
    }

    #[test]
    fn execute_overwrite_replaces_existing_files() {
        let (dir, input) = setup(ENSEMBLE);
        let out = dir.path().join("conformers");
        fs::create_dir(&out).unwrap();
        fs::write(out.join("c0.xyz"), "stale").unwrap();
        let mut config = convert_config(dir.path(), &input, 6.0);
        config.policy = OverwritePolicy::Overwrite;

        let report = execute(&config, &ProgressReporter::new()).unwrap();

        assert_eq!(report.written, 2);
        assert!(fs::read_to_string(out.join("c0.xyz")).unwrap().starts_with("2\n"));
    }

    #[test]
    fn execute_skip_keeps_existing_conformer_files() {
        let (dir, input) = setup(ENSEMBLE);
        let out = dir.path().join("conformers");
        fs::create_dir(&out).unwrap();
        fs::write(out.join("c0.xyz"), "edited by hand").unwrap();
        let mut config = convert_config(dir.path(), &input, 6.0);
        config.policy = OverwritePolicy::Skip;

        let report = execute(&config, &ProgressReporter::new()).unwrap();

        assert_eq!(report.written, 1);
        assert_eq!(report.skipped, 1);
        assert_eq!(
            fs::read_to_string(out.join("c0.xyz")).unwrap(),
            "edited by hand"
        );
        assert!(dir.path().join("view.cxc").exists());
    }

    #[test]
    fn execute_with_truncated_ensemble_writes_nothing() {
        let truncated: String = ENSEMBLE.lines().take(10).map(|l| format!("{}\n", l)).collect();
        let (dir, input) = setup(&truncated);
        let config = convert_config(dir.path(), &input, 6.0);

        let result = execute(&config, &ProgressReporter::new());

        assert!(matches!(result, Err(CliError::FileParsing { .. })));
        assert!(!dir.path().join("conformers").exists());
        assert!(!dir.path().join("view.cxc").exists());
    }

    #[test]
    fn execute_with_invalid_cutoff_writes_nothing() {
        let (dir, input) = setup(ENSEMBLE);
        let config = convert_config(dir.path(), &input, 0.0);

        let result = execute(&config, &ProgressReporter::new());

        assert!(matches!(result, Err(CliError::Core(_))));
        assert!(!dir.path().join("conformers").exists());
    }
}
