//! Table I/O for detections and parking spaces, plus JSON helpers.
//!
//! - `load_detections`: read a detection table from `.csv` or `.json`.
//! - `read_detections_csv`: parse CSV from any reader (header row required).
//! - `write_spaces`: write the space table as `.csv` or `.json`.
//! - `write_json_file`: pretty-print a serializable value to disk.
//!
//! Input columns are fixed: `timestamp,cx,cy,x1,y1,x2,y2`; extra columns are
//! ignored. `timestamp` may be a number or a label (see [`Timestamp`](crate::Timestamp)). A
//! missing column or an unparsable coordinate is `InvalidInput`.
use crate::error::{Result, SpaceError};
use crate::types::{Detection, ParkingSpace};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::Path;

/// One row of the output table.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpaceRow {
    pub space: usize,
    pub cx: f64,
    pub cy: f64,
    pub radius: f64,
}

impl SpaceRow {
    /// Spaces without an assigned index take their row position.
    pub fn from_spaces(spaces: &[ParkingSpace]) -> Vec<SpaceRow> {
        spaces
            .iter()
            .enumerate()
            .map(|(row, s)| SpaceRow {
                space: s.space.unwrap_or(row),
                cx: s.cx,
                cy: s.cy,
                radius: s.radius,
            })
            .collect()
    }
}

impl From<SpaceRow> for ParkingSpace {
    fn from(row: SpaceRow) -> Self {
        ParkingSpace {
            space: Some(row.space),
            cx: row.cx,
            cy: row.cy,
            radius: row.radius,
        }
    }
}

/// Load a detection table, choosing the format from the file extension.
pub fn load_detections(path: &Path) -> Result<Vec<Detection>> {
    match extension(path).as_deref() {
        Some("csv") => {
            let file = File::open(path).map_err(|e| SpaceError::io(path, e))?;
            read_detections_csv(file, path)
        }
        Some("json") => {
            let data = fs::read_to_string(path).map_err(|e| SpaceError::io(path, e))?;
            parse_detections_json(&data, path)
        }
        _ => Err(SpaceError::invalid(format!(
            "unsupported detection table {} (expected .csv or .json)",
            path.display()
        ))),
    }
}

/// Parse CSV detections from `reader`. `origin` only labels errors.
pub fn read_detections_csv<R: Read>(reader: R, origin: &Path) -> Result<Vec<Detection>> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut detections = Vec::new();
    for record in rdr.deserialize::<Detection>() {
        let detection = record.map_err(|source| {
            let shape_error = matches!(
                source.kind(),
                csv::ErrorKind::Deserialize { .. } | csv::ErrorKind::UnequalLengths { .. }
            );
            if shape_error {
                let line = source
                    .position()
                    .map(|p| p.line().to_string())
                    .unwrap_or_else(|| "?".to_string());
                SpaceError::invalid(format!("{} line {line}: {source}", origin.display()))
            } else {
                SpaceError::Csv {
                    path: origin.to_path_buf(),
                    source,
                }
            }
        })?;
        detections.push(detection);
    }
    Ok(detections)
}

/// Parse a JSON array of detection records.
pub fn parse_detections_json(data: &str, origin: &Path) -> Result<Vec<Detection>> {
    serde_json::from_str(data).map_err(|source| {
        if source.is_data() {
            SpaceError::invalid(format!("{}: {source}", origin.display()))
        } else {
            SpaceError::Json {
                path: origin.to_path_buf(),
                source,
            }
        }
    })
}

/// Write the space table, choosing the format from the file extension.
pub fn write_spaces(path: &Path, spaces: &[ParkingSpace]) -> Result<()> {
    match extension(path).as_deref() {
        Some("csv") => {
            ensure_parent_dir(path)?;
            let file = File::create(path).map_err(|e| SpaceError::io(path, e))?;
            write_spaces_csv(file, spaces, path)
        }
        Some("json") => write_json_file(path, &SpaceRow::from_spaces(spaces)),
        _ => Err(SpaceError::invalid(format!(
            "unsupported space table {} (expected .csv or .json)",
            path.display()
        ))),
    }
}

/// Write `space,cx,cy,radius` rows to `writer`.
pub fn write_spaces_csv<W: Write>(writer: W, spaces: &[ParkingSpace], origin: &Path) -> Result<()> {
    let csv_err = |source| SpaceError::Csv {
        path: origin.to_path_buf(),
        source,
    };
    let mut wtr = csv::Writer::from_writer(writer);
    if spaces.is_empty() {
        wtr.write_record(["space", "cx", "cy", "radius"])
            .map_err(csv_err)?;
    }
    for row in SpaceRow::from_spaces(spaces) {
        wtr.serialize(row).map_err(csv_err)?;
    }
    wtr.flush().map_err(|e| SpaceError::io(origin, e))
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value).map_err(|source| SpaceError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    fs::write(path, json).map_err(|e| SpaceError::io(path, e))
}

pub(crate) fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| SpaceError::io(parent, e))?;
        }
    }
    Ok(())
}

fn extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
}
