use crate::core::io::curve::write_curve_to_dir;
use crate::core::io::pdb::{PdbFile, StructureError};
use crate::core::io::traits::StructureFile;
use crate::core::models::curve::ScoreCurve;
use crate::core::models::pair::PairDistance;
use crate::core::potential::distances::extract_raw;
use crate::core::potential::error::PotentialError;
use crate::core::potential::frequency::{FrequencyTable, observed_frequencies, reference_frequencies};
use crate::core::potential::log_odds::build_score_curve;
use crate::engine::config::{InputSource, PotentialParams, TrainingConfig};
use crate::engine::error::EngineError;
use crate::engine::progress::{Progress, ProgressReporter};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument, warn};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// A training structure that could not be used.
#[derive(Debug, Clone, PartialEq)]
pub struct FailedStructure {
    pub path: PathBuf,
    pub reason: String,
}

#[derive(Debug, Clone, Default)]
pub struct TrainingResult {
    pub curves: BTreeMap<String, ScoreCurve>,
    pub written: Vec<PathBuf>,
    /// Base-pair codes with no matching distance in the pooled population.
    pub skipped_codes: Vec<String>,
    pub failed_structures: Vec<FailedStructure>,
    pub structures_used: usize,
    pub total_distances: usize,
}

/// Potentials derived from one pooled distance population.
#[derive(Debug, Clone)]
pub struct Potentials {
    pub reference: FrequencyTable,
    pub curves: BTreeMap<String, ScoreCurve>,
    pub skipped_codes: Vec<String>,
}

struct PooledDistances {
    distances: Vec<PairDistance>,
    used: usize,
    failed: Vec<FailedStructure>,
}

type LoadOutcome<'p> = (&'p PathBuf, Result<Vec<PairDistance>, StructureError>);

/// Trains one score curve per base-pair code and writes them to the output directory.
///
/// Distances from all readable structures are pooled into a single population. A
/// structure that fails to parse is skipped and reported; the run only fails when the
/// pooled population ends up empty.
#[instrument(skip_all, name = "training_workflow")]
pub fn run(
    config: &TrainingConfig,
    reporter: &ProgressReporter,
) -> Result<TrainingResult, EngineError> {
    config.params.validate()?;

    let paths = config.inputs.resolve().map_err(|e| EngineError::Io {
        path: source_root(&config.inputs),
        source: e,
    })?;
    if paths.is_empty() {
        return Err(EngineError::NoInputs(
            source_root(&config.inputs).display().to_string(),
        ));
    }
    info!("Training on {} structure file(s).", paths.len());

    // === Phase 1: Load structures and pool their distances ===
    let pooled = pool_distances(&paths, &config.params, reporter);
    info!(
        distances = pooled.distances.len(),
        structures = pooled.used,
        failed = pooled.failed.len(),
        "Pooled training distances."
    );

    // === Phase 2: Reference distribution and per-code curves ===
    let potentials = build_potentials(&pooled.distances, &config.params, reporter)?;

    // === Phase 3: Persist curves ===
    let written = persist_curves(&potentials.curves, &config.output_dir, reporter)?;

    info!(
        "Training complete. Wrote {} curve(s), skipped {} code(s).",
        written.len(),
        potentials.skipped_codes.len()
    );

    Ok(TrainingResult {
        curves: potentials.curves,
        written,
        skipped_codes: potentials.skipped_codes,
        failed_structures: pooled.failed,
        structures_used: pooled.used,
        total_distances: pooled.distances.len(),
    })
}

/// Computes the reference table and one curve per configured code from raw distances.
///
/// Codes without any matching distance are listed in `skipped_codes` instead of failing.
pub fn build_potentials(
    distances: &[PairDistance],
    params: &PotentialParams,
    reporter: &ProgressReporter,
) -> Result<Potentials, EngineError> {
    reporter.report(Progress::PhaseStart {
        name: "Building potentials",
    });

    let reference = reference_frequencies(distances, params.bins)?;
    debug!("Reference frequencies: {:?}", reference.values());

    reporter.report(Progress::TaskStart {
        total_steps: params.base_pairs.len() as u64,
    });

    #[cfg(not(feature = "parallel"))]
    let iterator = params.base_pairs.iter();

    #[cfg(feature = "parallel")]
    let iterator = params.base_pairs.par_iter();

    let outcomes: Vec<(&String, Result<ScoreCurve, PotentialError>)> = iterator
        .map(|code| {
            let outcome = curve_for_code(code, distances, &reference, params);
            reporter.item_done(code.as_str());
            (code, outcome)
        })
        .collect();

    reporter.report(Progress::TaskFinish);

    let mut curves = BTreeMap::new();
    let mut skipped_codes = Vec::new();
    for (code, outcome) in outcomes {
        match outcome {
            Ok(curve) => {
                curves.insert(code.clone(), curve);
            }
            Err(PotentialError::MissingCode { .. }) => {
                warn!("No distances observed for base pair '{}'; skipping.", code);
                reporter.skipped(code.as_str(), "no matching distances");
                skipped_codes.push(code.clone());
            }
            Err(e) => return Err(e.into()),
        }
    }

    reporter.report(Progress::PhaseFinish);
    Ok(Potentials {
        reference,
        curves,
        skipped_codes,
    })
}

fn curve_for_code(
    code: &str,
    distances: &[PairDistance],
    reference: &FrequencyTable,
    params: &PotentialParams,
) -> Result<ScoreCurve, PotentialError> {
    let observed = observed_frequencies(code, distances, params.bins)?;
    build_score_curve(&observed, reference, params.epsilon, params.score_cap)
}

fn pool_distances(
    paths: &[PathBuf],
    params: &PotentialParams,
    reporter: &ProgressReporter,
) -> PooledDistances {
    reporter.report(Progress::PhaseStart {
        name: "Loading structures",
    });
    reporter.report(Progress::TaskStart {
        total_steps: paths.len() as u64,
    });

    #[cfg(not(feature = "parallel"))]
    let iterator = paths.iter();

    #[cfg(feature = "parallel")]
    let iterator = paths.par_iter();

    let outcomes: Vec<LoadOutcome> = iterator
        .map(|path| {
            let outcome = PdbFile::read_from_path(path, &params.representative_atom)
                .map(|residues| extract_raw(&residues, params.min_separation));
            reporter.item_done(display_name(path));
            (path, outcome)
        })
        .collect();

    reporter.report(Progress::TaskFinish);

    let mut pooled = PooledDistances {
        distances: Vec::new(),
        used: 0,
        failed: Vec::new(),
    };
    for (path, outcome) in outcomes {
        match outcome {
            Ok(distances) => {
                if distances.is_empty() {
                    warn!("Structure {:?} contributed no qualifying distances.", path);
                }
                debug!("{:?}: {} distance(s)", path, distances.len());
                pooled.used += 1;
                pooled.distances.extend(distances);
            }
            Err(e) => {
                warn!("Skipping structure {:?}: {}", path, e);
                reporter.skipped(path.display().to_string(), e.to_string());
                pooled.failed.push(FailedStructure {
                    path: path.clone(),
                    reason: e.to_string(),
                });
            }
        }
    }

    reporter.report(Progress::PhaseFinish);
    pooled
}

fn persist_curves(
    curves: &BTreeMap<String, ScoreCurve>,
    output_dir: &Path,
    reporter: &ProgressReporter,
) -> Result<Vec<PathBuf>, EngineError> {
    reporter.report(Progress::PhaseStart {
        name: "Writing score curves",
    });
    std::fs::create_dir_all(output_dir).map_err(|e| EngineError::Io {
        path: output_dir.to_path_buf(),
        source: e,
    })?;

    let mut written = Vec::with_capacity(curves.len());
    for (code, curve) in curves {
        let path = write_curve_to_dir(code, curve, output_dir)?;
        debug!("Wrote {:?}", path);
        written.push(path);
    }

    reporter.report(Progress::PhaseFinish);
    Ok(written)
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .unwrap_or(path.as_os_str())
        .to_string_lossy()
        .into_owned()
}

fn source_root(inputs: &InputSource) -> PathBuf {
    match inputs {
        InputSource::Directory(dir) => dir.clone(),
        InputSource::Files(files) => files
            .first()
            .and_then(|f| f.parent())
            .map(Path::to_path_buf)
            .unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::io::curve::read_curve;
    use crate::engine::config::TrainingConfigBuilder;
    use crate::workflows::fixtures::{helix_pdb, write_structure};
    use std::fs;
    use tempfile::tempdir;

    const AUGC: [&str; 12] = ["A", "U", "G", "C", "A", "U", "G", "C", "A", "U", "G", "C"];

    #[test]
    fn training_writes_one_curve_per_code() {
        let dir = tempdir().unwrap();
        let input = write_structure(dir.path(), "helix.pdb", &helix_pdb(&AUGC));
        let out = dir.path().join("curves");
        let config = TrainingConfigBuilder::new()
            .input_files(vec![input])
            .output_dir(out.clone())
            .build()
            .unwrap();

        let result = run(&config, &ProgressReporter::new()).unwrap();

        assert_eq!(result.structures_used, 1);
        assert!(result.failed_structures.is_empty());
        assert!(result.skipped_codes.is_empty());
        assert_eq!(result.total_distances, 36);
        assert_eq!(result.curves.len(), 10);
        assert_eq!(result.written.len(), 10);
        for code in PotentialParams::default().base_pairs {
            let path = out.join(format!("{code}_scores.txt"));
            let text = fs::read_to_string(&path).unwrap();
            assert_eq!(text.lines().count(), 20);
            let curve = read_curve(&path, Default::default()).unwrap();
            assert!(curve.scores().iter().all(|&s| s <= 10.0));
        }
    }

    #[test]
    fn codes_without_distances_are_skipped() {
        let dir = tempdir().unwrap();
        let names = ["A", "U", "A", "U", "A", "U", "A", "U"];
        write_structure(dir.path(), "au.pdb", &helix_pdb(&names));
        let config = TrainingConfigBuilder::new()
            .input_dir(dir.path().to_path_buf())
            .output_dir(dir.path().join("out"))
            .build()
            .unwrap();

        let result = run(&config, &ProgressReporter::new()).unwrap();

        assert_eq!(
            result.curves.keys().collect::<Vec<_>>(),
            vec!["AA", "AU", "UU"]
        );
        assert_eq!(
            result.skipped_codes,
            vec!["AC", "AG", "UC", "UG", "CC", "CG", "GG"]
        );
        assert!(!dir.path().join("out/GG_scores.txt").exists());
    }

    #[test]
    fn malformed_structures_are_isolated() {
        let dir = tempdir().unwrap();
        let good = write_structure(dir.path(), "good.pdb", &helix_pdb(&AUGC));
        let bad = write_structure(
            dir.path(),
            "bad.pdb",
            "ATOM      1  C3'   A A   1       x.xxx   0.000   0.000  1.00  0.00           C\n",
        );
        let config = TrainingConfigBuilder::new()
            .input_files(vec![good, bad.clone()])
            .output_dir(dir.path().join("out"))
            .build()
            .unwrap();

        let result = run(&config, &ProgressReporter::new()).unwrap();

        assert_eq!(result.structures_used, 1);
        assert_eq!(result.failed_structures.len(), 1);
        assert_eq!(result.failed_structures[0].path, bad);
        assert_eq!(result.curves.len(), 10);
    }

    #[test]
    fn pooled_structures_share_one_reference() {
        let dir = tempdir().unwrap();
        let a = write_structure(dir.path(), "a.pdb", &helix_pdb(&AUGC));
        let b = write_structure(dir.path(), "b.pdb", &helix_pdb(&AUGC[..8]));
        let config = TrainingConfigBuilder::new()
            .input_files(vec![a, b])
            .output_dir(dir.path().join("out"))
            .build()
            .unwrap();

        let result = run(&config, &ProgressReporter::new()).unwrap();

        assert_eq!(result.structures_used, 2);
        assert_eq!(result.total_distances, 36 + 10);
    }

    #[test]
    fn too_short_structures_leave_an_empty_population() {
        let dir = tempdir().unwrap();
        let input = write_structure(dir.path(), "short.pdb", &helix_pdb(&["A", "U", "G"]));
        let config = TrainingConfigBuilder::new()
            .input_files(vec![input])
            .output_dir(dir.path().join("out"))
            .build()
            .unwrap();

        let err = run(&config, &ProgressReporter::new()).unwrap_err();
        assert!(matches!(
            err,
            EngineError::Potential(PotentialError::EmptyPopulation)
        ));
    }

    #[test]
    fn empty_input_directory_is_an_error() {
        let dir = tempdir().unwrap();
        let config = TrainingConfigBuilder::new()
            .input_dir(dir.path().to_path_buf())
            .output_dir(dir.path().join("out"))
            .build()
            .unwrap();

        assert!(matches!(
            run(&config, &ProgressReporter::new()),
            Err(EngineError::NoInputs(_))
        ));
    }

    #[test]
    fn build_potentials_reports_skipped_codes() {
        let distances = vec![PairDistance::new("AU", 5.5), PairDistance::new("UA", 6.5)];
        let params = PotentialParams {
            base_pairs: vec!["AU".to_string(), "GG".to_string()],
            ..Default::default()
        };
        let skipped = std::sync::Mutex::new(Vec::new());
        let done = std::sync::Mutex::new(Vec::new());
        let reporter = ProgressReporter::with_callback(Box::new(|event| match event {
            Progress::Skipped { item, .. } => skipped.lock().unwrap().push(item),
            Progress::ItemDone { item } => done.lock().unwrap().push(item),
            _ => {}
        }));

        let potentials = build_potentials(&distances, &params, &reporter).unwrap();

        assert_eq!(potentials.curves.len(), 1);
        assert_eq!(potentials.skipped_codes, vec!["GG"]);
        assert_eq!(potentials.reference.get(6), Some(0.5));
        assert_eq!(*skipped.lock().unwrap(), vec!["GG".to_string()]);
        let mut done = done.lock().unwrap().clone();
        done.sort();
        assert_eq!(done, vec!["AU".to_string(), "GG".to_string()]);
    }
}
