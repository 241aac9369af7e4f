use crate::core::io::traits::StructureFile;
use crate::core::models::residue::Residue;
use nalgebra::Point3;
use std::io::{self, BufRead};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StructureError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Parse error on line {line}: {kind}")]
    Parse {
        line: usize,
        kind: StructureParseErrorKind,
    },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StructureParseErrorKind {
    #[error("Invalid coordinate in columns {columns} (value: '{value}')")]
    InvalidFloat { columns: &'static str, value: String },
    #[error("Missing residue name field")]
    MissingResidueName,
}

fn slice_and_trim(line: &str, start: usize, end: usize) -> &str {
    line.get(start..end).unwrap_or("").trim()
}

fn parse_coordinate(
    line: &str,
    line_num: usize,
    start: usize,
    end: usize,
    columns: &'static str,
) -> Result<f64, StructureError> {
    let value = slice_and_trim(line, start, end);
    value
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| StructureError::Parse {
            line: line_num,
            kind: StructureParseErrorKind::InvalidFloat {
                columns,
                value: value.to_string(),
            },
        })
}

/// Reader for fixed-column PDB coordinate files.
///
/// Only `ATOM` records whose atom name (columns 13-16) equals the requested atom are
/// used. The residue name is the fourth whitespace-separated token and coordinates come
/// from columns 31-38, 39-46 and 47-54.
pub struct PdbFile;

impl StructureFile for PdbFile {
    type Error = StructureError;

    fn read_from(reader: &mut impl BufRead, atom_name: &str) -> Result<Vec<Residue>, Self::Error> {
        let mut residues = Vec::new();

        for (line_num, line_res) in reader.lines().enumerate() {
            let line = line_res?;
            let line_num = line_num + 1;

            if !line.starts_with("ATOM") || slice_and_trim(&line, 12, 16) != atom_name {
                continue;
            }

            let name = line
                .split_whitespace()
                .nth(3)
                .ok_or(StructureError::Parse {
                    line: line_num,
                    kind: StructureParseErrorKind::MissingResidueName,
                })?;
            let x = parse_coordinate(&line, line_num, 30, 38, "31-38")?;
            let y = parse_coordinate(&line, line_num, 38, 46, "39-46")?;
            let z = parse_coordinate(&line, line_num, 46, 54, "47-54")?;

            residues.push(Residue::new(name, Point3::new(x, y, z)));
        }

        Ok(residues)
    }
}
