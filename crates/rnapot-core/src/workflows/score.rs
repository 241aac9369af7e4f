use crate::core::io::pdb::PdbFile;
use crate::core::io::traits::StructureFile;
use crate::core::models::residue::Residue;
use crate::core::potential::distances::extract_canonical;
use crate::core::potential::interpolation::{InterpolatedScores, interpolate_scores};
use crate::core::potential::registry::ScoreCurveRegistry;
use crate::engine::config::{PotentialParams, ScoringConfig};
use crate::engine::error::EngineError;
use crate::engine::progress::{Progress, ProgressReporter};
use std::path::PathBuf;
use tracing::{info, instrument, warn};

#[derive(Debug, Clone)]
pub struct ScoringResult {
    pub structure_path: PathBuf,
    pub residue_count: usize,
    pub scores: InterpolatedScores,
}

impl ScoringResult {
    pub fn total(&self) -> f64 {
        self.scores.total()
    }
}

/// Scores a query structure against the curves persisted in `config.curves_dir`.
#[instrument(skip_all, name = "scoring_workflow")]
pub fn run(
    config: &ScoringConfig,
    reporter: &ProgressReporter,
) -> Result<ScoringResult, EngineError> {
    config.params.validate()?;

    reporter.report(Progress::PhaseStart {
        name: "Loading score curves",
    });
    let registry = ScoreCurveRegistry::load_dir(&config.curves_dir, config.params.bins)?;
    if registry.is_empty() {
        warn!(
            "No score curves found in {:?}; every pair will be skipped.",
            config.curves_dir
        );
    } else {
        info!("Loaded {} score curve(s).", registry.len());
    }
    reporter.report(Progress::PhaseFinish);

    reporter.report(Progress::PhaseStart { name: "Scoring" });
    let residues = PdbFile::read_from_path(
        &config.structure_path,
        &config.params.representative_atom,
    )
    .map_err(|e| EngineError::Structure {
        path: config.structure_path.clone(),
        source: e,
    })?;
    info!(
        "Read {} residue(s) from {:?}.",
        residues.len(),
        config.structure_path
    );

    let scores = score_residues(&residues, &registry, &config.params);
    for code in &scores.missing_codes {
        warn!("No score curve for base pair '{}'; skipping.", code);
        reporter.skipped(code.as_str(), "no score curve");
    }
    reporter.report(Progress::PhaseFinish);

    let result = ScoringResult {
        structure_path: config.structure_path.clone(),
        residue_count: residues.len(),
        scores,
    };
    info!(
        pairs = result.scores.len(),
        total = result.total(),
        "Scoring complete."
    );
    Ok(result)
}

/// Interpolates every qualifying residue pair of one structure into `registry`.
pub fn score_residues(
    residues: &[Residue],
    registry: &ScoreCurveRegistry,
    params: &PotentialParams,
) -> InterpolatedScores {
    let distances = extract_canonical(residues, params.min_separation, &params.base_pairs);
    interpolate_scores(&distances, registry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::io::curve::write_curve_to_dir;
    use crate::core::models::bins::BinRange;
    use crate::core::models::curve::ScoreCurve;
    use crate::engine::config::{ScoringConfigBuilder, TrainingConfigBuilder};
    use crate::workflows::fixtures::{helix_pdb, write_structure};
    use crate::workflows::train;
    use nalgebra::Point3;
    use tempfile::tempdir;

    const TOLERANCE: f64 = 1e-9;

    fn f64_approx_equal(a: f64, b: f64) -> bool {
        (a - b).abs() < TOLERANCE
    }

    fn line_of(names: &[&str]) -> Vec<Residue> {
        names
            .iter()
            .enumerate()
            .map(|(i, n)| Residue::new(*n, Point3::new(i as f64 * 2.0, 0.0, 0.0)))
            .collect()
    }

    #[test]
    fn score_residues_uses_canonical_codes() {
        let mut registry = ScoreCurveRegistry::new();
        let scores = (1..=20).map(f64::from).collect();
        registry.insert("AU", ScoreCurve::new(BinRange::default(), scores).unwrap());

        // U..A at distance 8.0 is looked up as AU: halfway between midpoints 7.5 and 8.5.
        let residues = line_of(&["U", "G", "G", "G", "A"]);
        let result = score_residues(&residues, &registry, &PotentialParams::default());

        assert_eq!(result.scores("AU"), Some(vec![8.5]));
        assert!(result.missing_codes.is_empty());
    }

    #[test]
    fn unknown_residues_are_reported_not_fatal() {
        let mut registry = ScoreCurveRegistry::new();
        registry.insert("AA", ScoreCurve::new(BinRange::default(), vec![1.0; 20]).unwrap());

        let residues = line_of(&["A", "X", "X", "X", "A", "X"]);
        let result = score_residues(&residues, &registry, &PotentialParams::default());

        assert_eq!(result.scores("AA"), Some(vec![1.0]));
        assert_eq!(result.missing_codes, vec!["XA".to_string(), "XX".to_string()]);
        assert!(!result.by_code.contains_key("XA"));
    }

    #[test]
    fn run_scores_a_structure_against_persisted_curves() {
        let dir = tempdir().unwrap();
        let curves_dir = dir.path().join("curves");
        std::fs::create_dir(&curves_dir).unwrap();
        let mut scores = vec![0.0; 20];
        scores[9] = 5.0;
        let curve = ScoreCurve::new(BinRange::default(), scores).unwrap();
        write_curve_to_dir("AU", &curve, &curves_dir).unwrap();

        let names = ["A", "C", "C", "C", "U", "C"];
        let query = write_structure(dir.path(), "query.pdb", &helix_pdb(&names));
        let config = ScoringConfigBuilder::new()
            .structure_path(query.clone())
            .curves_dir(curves_dir)
            .build()
            .unwrap();

        let result = run(&config, &ProgressReporter::new()).unwrap();

        assert_eq!(result.structure_path, query);
        assert_eq!(result.residue_count, 6);
        assert_eq!(result.scores.by_code.keys().collect::<Vec<_>>(), vec!["AU"]);
        assert_eq!(result.scores.missing_codes, vec!["AC".to_string(), "CC".to_string()]);
        assert!(f64_approx_equal(result.total(), result.scores.per_code_totals()["AU"]));
    }

    #[test]
    fn run_fails_on_unreadable_structure() {
        let dir = tempdir().unwrap();
        let config = ScoringConfigBuilder::new()
            .structure_path(dir.path().join("missing.pdb"))
            .curves_dir(dir.path().to_path_buf())
            .build()
            .unwrap();

        assert!(matches!(
            run(&config, &ProgressReporter::new()),
            Err(EngineError::Structure { .. })
        ));
    }

    #[test]
    fn trained_potential_scores_its_own_training_structure() {
        let dir = tempdir().unwrap();
        let names = ["G", "C", "A", "U", "G", "C", "A", "U", "G", "C", "A", "U"];
        let input = write_structure(dir.path(), "train.pdb", &helix_pdb(&names));
        let curves_dir = dir.path().join("curves");

        let trained = train::run(
            &TrainingConfigBuilder::new()
                .input_files(vec![input.clone()])
                .output_dir(curves_dir.clone())
                .build()
                .unwrap(),
            &ProgressReporter::new(),
        )
        .unwrap();

        let result = run(
            &ScoringConfigBuilder::new()
                .structure_path(input)
                .curves_dir(curves_dir)
                .build()
                .unwrap(),
            &ProgressReporter::new(),
        )
        .unwrap();

        assert!(result.scores.missing_codes.is_empty());
        assert_eq!(result.scores.len(), trained.total_distances);
        for (code, entries) in &result.scores.by_code {
            let curve = &trained.curves[code];
            for entry in entries {
                assert!(entry.score <= 10.0);
                assert!((entry.score - curve.interpolate(entry.distance)).abs() < 1e-5);
            }
        }
    }
}
