use crate::core::models::bins::BinRange;
use crate::core::models::curve::ScoreCurve;
use std::fs::{self, File};
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::warn;

/// File name suffix shared by every persisted score curve.
pub const CURVE_FILE_SUFFIX: &str = "_scores.txt";

#[derive(Debug, Error)]
pub enum CurveError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: io::Error,
    },
    #[error("Invalid score on line {line} of '{path}' (value: '{value}')")]
    Parse {
        path: String,
        line: usize,
        value: String,
    },
    #[error("Score curve '{path}' has {found} values, expected {expected}")]
    Length {
        path: String,
        expected: usize,
        found: usize,
    },
}

pub fn curve_file_name(code: &str) -> String {
    format!("{code}{CURVE_FILE_SUFFIX}")
}

/// Extracts the base-pair code from a curve file name: everything before the first `_`.
pub fn code_from_file_name(file_name: &str) -> Option<&str> {
    if !file_name.ends_with(CURVE_FILE_SUFFIX) {
        return None;
    }
    file_name.split('_').next().filter(|code| !code.is_empty())
}

/// Writes one score per line with six decimal places.
pub fn write_curve(curve: &ScoreCurve, writer: &mut impl Write) -> io::Result<()> {
    for score in curve.scores() {
        writeln!(writer, "{:.6}", score)?;
    }
    Ok(())
}

/// Persists `curve` as `<dir>/<code>_scores.txt` and returns the written path.
pub fn write_curve_to_dir(code: &str, curve: &ScoreCurve, dir: &Path) -> Result<PathBuf, CurveError> {
    let path = dir.join(curve_file_name(code));
    let io_err = |e: io::Error| CurveError::Io {
        path: path.to_string_lossy().to_string(),
        source: e,
    };

    let file = File::create(&path).map_err(io_err)?;
    let mut writer = BufWriter::new(file);
    write_curve(curve, &mut writer).map_err(io_err)?;
    writer.flush().map_err(io_err)?;
    Ok(path)
}

/// Reads the raw values of a curve file. Blank lines are ignored.
pub fn read_curve_values(reader: &mut impl BufRead, path: &str) -> Result<Vec<f64>, CurveError> {
    let mut values = Vec::new();
    for (line_num, line_res) in reader.lines().enumerate() {
        let line = line_res.map_err(|e| CurveError::Io {
            path: path.to_string(),
            source: e,
        })?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let value = trimmed.parse::<f64>().map_err(|_| CurveError::Parse {
            path: path.to_string(),
            line: line_num + 1,
            value: trimmed.to_string(),
        })?;
        values.push(value);
    }
    Ok(values)
}

pub fn read_curve(path: &Path, range: BinRange) -> Result<ScoreCurve, CurveError> {
    let display = path.to_string_lossy().to_string();
    let file = File::open(path).map_err(|e| CurveError::Io {
        path: display.clone(),
        source: e,
    })?;
    let values = read_curve_values(&mut BufReader::new(file), &display)?;
    ScoreCurve::new(range, values).map_err(|e| CurveError::Length {
        path: display,
        expected: e.expected,
        found: e.found,
    })
}

/// Lists `(code, path)` for every curve file in `dir`, sorted by file name.
pub fn discover_curve_files(dir: &Path) -> Result<Vec<(String, PathBuf)>, CurveError> {
    let io_err = |e: io::Error| CurveError::Io {
        path: dir.to_string_lossy().to_string(),
        source: e,
    };

    let mut found = Vec::new();
    for entry in fs::read_dir(dir).map_err(io_err)? {
        let entry = entry.map_err(io_err)?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let Some(file_name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if !file_name.ends_with(CURVE_FILE_SUFFIX) {
            continue;
        }
        let Some(code) = code_from_file_name(file_name) else {
            warn!("Ignoring {:?}: no base-pair code before the '_' separator.", path);
            continue;
        };
        found.push((code.to_string(), path.clone()));
    }
    found.sort_by(|a, b| a.1.cmp(&b.1));
    Ok(found)
}
