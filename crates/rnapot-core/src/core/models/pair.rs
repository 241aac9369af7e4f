use std::collections::BTreeSet;

/// A distance between two residues, tagged with the pair code of their names.
#[derive(Debug, Clone, PartialEq)]
pub struct PairDistance {
    pub code: String,
    pub distance: f64,
}

impl PairDistance {
    pub fn new(code: impl Into<String>, distance: f64) -> Self {
        Self {
            code: code.into(),
            distance,
        }
    }
}

/// Returns `true` when both codes are built from the same set of residue letters.
///
/// `"AU"` and `"UA"` belong to the same class; `"AA"` only matches itself.
pub fn same_residue_set(a: &str, b: &str) -> bool {
    a.chars().collect::<BTreeSet<_>>() == b.chars().collect::<BTreeSet<_>>()
}

/// Orders two residue names against a list of canonical codes.
///
/// The sequence order is kept when it already spells a known code, otherwise the
/// names are swapped. Unknown combinations therefore come back reversed.
pub fn canonical_code<S: AsRef<str>>(first: &str, second: &str, base_pairs: &[S]) -> String {
    let forward = format!("{first}{second}");
    if base_pairs.iter().any(|bp| bp.as_ref() == forward) {
        forward
    } else {
        format!("{second}{first}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE_PAIRS: [&str; 10] = ["AA", "AU", "AC", "AG", "UU", "UC", "UG", "CC", "CG", "GG"];

    #[test]
    fn same_residue_set_ignores_order() {
        assert!(same_residue_set("AU", "UA"));
        assert!(same_residue_set("GC", "CG"));
    }

    #[test]
    fn same_residue_set_distinguishes_homo_and_hetero_pairs() {
        assert!(same_residue_set("AA", "AA"));
        assert!(!same_residue_set("AA", "AU"));
        assert!(!same_residue_set("AG", "AU"));
    }

    #[test]
    fn canonical_code_keeps_known_forward_order() {
        assert_eq!(canonical_code("A", "U", &BASE_PAIRS), "AU");
        assert_eq!(canonical_code("G", "G", &BASE_PAIRS), "GG");
    }

    #[test]
    fn canonical_code_reverses_unknown_forward_order() {
        assert_eq!(canonical_code("U", "A", &BASE_PAIRS), "AU");
        assert_eq!(canonical_code("G", "C", &BASE_PAIRS), "CG");
    }

    #[test]
    fn canonical_code_reverses_unrecognized_names() {
        assert_eq!(canonical_code("A", "X", &BASE_PAIRS), "XA");
    }
}
