use crate::core::models::residue::Residue;
use std::error::Error;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Defines the interface for reading coarse-grained structures from coordinate files.
///
/// A reader keeps one representative atom per residue and returns the residues in file
/// order. Implementors handle the format-specific record layout.
pub trait StructureFile {
    /// The error type for parsing and I/O failures.
    type Error: Error + From<io::Error>;

    /// Reads the residues from a buffered reader.
    ///
    /// # Arguments
    ///
    /// * `reader` - The buffered reader to read from.
    /// * `atom_name` - Name of the atom that represents each residue (e.g. `C3'`).
    ///
    /// # Errors
    ///
    /// Returns an error if a selected record is malformed or reading fails.
    fn read_from(reader: &mut impl BufRead, atom_name: &str) -> Result<Vec<Residue>, Self::Error>;

    /// Reads the residues from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or parsing fails.
    fn read_from_path<P: AsRef<Path>>(path: P, atom_name: &str) -> Result<Vec<Residue>, Self::Error> {
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);
        Self::read_from(&mut reader, atom_name)
    }

    /// Reads the residues from an in-memory string.
    fn read_from_str(content: &str, atom_name: &str) -> Result<Vec<Residue>, Self::Error> {
        let mut reader = content.as_bytes();
        Self::read_from(&mut reader, atom_name)
    }
}
