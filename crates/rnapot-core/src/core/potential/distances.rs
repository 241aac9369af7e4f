use crate::core::models::pair::{PairDistance, canonical_code};
use crate::core::models::residue::Residue;

/// Distances for every residue pair at least `min_separation` apart in sequence.
///
/// Codes are the raw concatenation of the two residue names in sequence order. This is
/// the training-side extraction; frequency estimation later groups codes by residue set.
pub fn extract_raw(residues: &[Residue], min_separation: usize) -> Vec<PairDistance> {
    extract_with(residues, min_separation, |first, second| {
        format!("{}{}", first.name, second.name)
    })
}

/// Same pairs as [`extract_raw`], with codes reordered to match `base_pairs` where possible.
pub fn extract_canonical<S: AsRef<str>>(
    residues: &[Residue],
    min_separation: usize,
    base_pairs: &[S],
) -> Vec<PairDistance> {
    extract_with(residues, min_separation, |first, second| {
        canonical_code(&first.name, &second.name, base_pairs)
    })
}

fn extract_with<F>(residues: &[Residue], min_separation: usize, code_for: F) -> Vec<PairDistance>
where
    F: Fn(&Residue, &Residue) -> String,
{
    let n = residues.len();
    let min_separation = min_separation.max(1);
    if min_separation >= n {
        return Vec::new();
    }
    let mut distances = Vec::with_capacity(pair_count(n, min_separation));

    for (i, first) in residues.iter().enumerate() {
        for second in residues.iter().skip(i.saturating_add(min_separation)) {
            distances.push(PairDistance {
                code: code_for(first, second),
                distance: first.distance_to(second),
            });
        }
    }
    distances
}

/// Number of pairs `(i, j)` with `j >= i + min_separation` among `n` residues.
pub fn pair_count(n: usize, min_separation: usize) -> usize {
    if n <= min_separation {
        return 0;
    }
    let m = n - min_separation;
    m * (m + 1) / 2
}
