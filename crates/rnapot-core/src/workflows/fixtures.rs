use std::fmt::Write;
use std::fs;
use std::path::{Path, PathBuf};

/// One PDB `ATOM` record for a C3' atom.
pub fn c3_record(serial: usize, name: &str, residue_number: usize, x: f64, y: f64, z: f64) -> String {
    format!(
        "ATOM  {:>5} {:<4}{:1}{:>3} {:1}{:>4}{:1}   {:>8.3}{:>8.3}{:>8.3}{:>6.2}{:>6.2}          {:>2}",
        serial, " C3'", "", name, "A", residue_number, "", x, y, z, 1.0, 0.0, "C"
    )
}

/// A helical C3' trace where residue `i` sits at angle `0.6 i` with 1.5 A rise per step.
pub fn helix_pdb(names: &[&str]) -> String {
    let mut content = String::from("HEADER    SYNTHETIC HELIX\n");
    for (i, name) in names.iter().enumerate() {
        let angle = i as f64 * 0.6;
        let (x, y, z) = (5.0 * angle.cos(), 5.0 * angle.sin(), 1.5 * i as f64);
        writeln!(content, "{}", c3_record(2 * i + 1, name, i + 1, x, y, z)).unwrap();
    }
    content.push_str("END\n");
    content
}

pub fn write_structure(dir: &Path, file_name: &str, content: &str) -> PathBuf {
    let path = dir.join(file_name);
    fs::write(&path, content).unwrap();
    path
}
