//! Waveform file reading (std only).
//!
//! Files are comma separated with a header, two numeric columns
//! `time,strain`. Any malformed row rejects the whole file.

use std::fs::{self, File};
use std::io::Read;
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, StringRecord, Trim};

use crate::error::{bounded, Error, InputError, Result};

use super::series::{RawSample, RawSeries};

/// Read a waveform file, skipping `lines_to_skip` header rows.
///
/// # Errors
///
/// [`InputError::Io`] if the file cannot be opened, and
/// [`InputError::MalformedInput`] for the first row that is not a pair of
/// finite numbers.
pub fn read_series<P: AsRef<Path>>(path: P, lines_to_skip: usize) -> Result<RawSeries> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| Error::Input(InputError::Io(bounded(&e.to_string()))))?;

    let series = parse_series(file, lines_to_skip)?;
    info!("loaded {} samples from {}", series.len(), path.display());
    Ok(series)
}

/// Parse waveform rows from any reader.
///
/// # Errors
///
/// See [`read_series`].
pub fn parse_series<R: Read>(reader: R, lines_to_skip: usize) -> Result<RawSeries> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let mut samples = Vec::new();
    for (index, record) in rdr.records().enumerate() {
        let record = record.map_err(|e| {
            let line = e.position().map(|p| p.line()).unwrap_or(0);
            malformed(line, &e.to_string())
        })?;
        if index < lines_to_skip {
            continue;
        }
        samples.push(parse_row(&record)?);
    }

    Ok(RawSeries::new(samples))
}

fn parse_row(record: &StringRecord) -> Result<RawSample> {
    let line = record.position().map(|p| p.line()).unwrap_or(0);

    if record.len() != 2 {
        return Err(malformed(
            line,
            &format!("expected 2 columns, found {}", record.len()),
        ));
    }

    let time = parse_cell(&record[0], line)?;
    let strain = parse_cell(&record[1], line)?;
    Ok(RawSample::new(time, strain))
}

fn parse_cell(cell: &str, line: u64) -> Result<f64> {
    match cell.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(malformed(line, &format!("'{}' is not a finite number", cell))),
    }
}

fn malformed(line: u64, reason: &str) -> Error {
    Error::Input(InputError::MalformedInput {
        line,
        reason: bounded(reason),
    })
}

/// List the `.csv` waveform files in `dir`, sorted by file name.
///
/// # Errors
///
/// [`InputError::Io`] if the directory cannot be read.
pub fn list_waveform_files<P: AsRef<Path>>(dir: P) -> Result<Vec<PathBuf>> {
    let io_error = |e: std::io::Error| Error::Input(InputError::Io(bounded(&e.to_string())));

    let mut files = Vec::new();
    for entry in fs::read_dir(dir.as_ref()).map_err(io_error)? {
        let path = entry.map_err(io_error)?.path();
        let is_csv = path
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case("csv"))
            .unwrap_or(false);
        if is_csv && path.is_file() {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Display name of a waveform file: its file name without the extension.
pub fn waveform_name(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_with_header() {
        let data = "Time [s],Strain\n0.0,1e-21\n0.5,-2.5e-21\n1.0,0.0\n";
        let series = parse_series(data.as_bytes(), 1).unwrap();

        assert_eq!(series.len(), 3);
        assert_eq!(series.samples()[1], RawSample::new(0.5, -2.5e-21));
    }

    #[test]
    fn test_cells_are_trimmed() {
        let data = "t,s\n 0.0 , 1.0\n1.0,  -1.0 \n";
        let series = parse_series(data.as_bytes(), 1).unwrap();
        assert_eq!(series.samples()[0], RawSample::new(0.0, 1.0));
        assert_eq!(series.samples()[1], RawSample::new(1.0, -1.0));
    }

    #[test]
    fn test_wrong_column_count() {
        let data = "t,s\n0.0,1.0\n1.0,2.0,3.0\n";
        let result = parse_series(data.as_bytes(), 1);

        match result {
            Err(Error::Input(InputError::MalformedInput { line, reason })) => {
                assert_eq!(line, 3);
                assert!(reason.contains("found 3"));
            }
            other => panic!("expected malformed input, got {:?}", other),
        }
    }

    #[test]
    fn test_non_numeric_cell() {
        let data = "t,s\n0.0,abc\n";
        assert!(matches!(
            parse_series(data.as_bytes(), 1),
            Err(Error::Input(InputError::MalformedInput { line: 2, .. }))
        ));
    }

    #[test]
    fn test_header_not_skipped_is_malformed() {
        let data = "Time [s],Strain\n0.0,1.0\n";
        assert!(matches!(
            parse_series(data.as_bytes(), 0),
            Err(Error::Input(InputError::MalformedInput { line: 1, .. }))
        ));
    }

    #[test]
    fn test_nan_rejected() {
        let data = "t,s\n0.0,NaN\n";
        assert!(parse_series(data.as_bytes(), 1).is_err());
    }

    #[test]
    fn test_waveform_name() {
        assert_eq!(waveform_name(Path::new("/data/GW150914.csv")), "GW150914");
    }
}
