//! City-list input and CSV result output.
//!
//! The city file is whitespace-separated, one city per line: a name
//! (underscores standing for spaces, possibly spanning several fields)
//! followed by latitude and longitude in degrees. Results go out as two
//! CSV files — the ranked best tour and the per-generation best-distance
//! trace, the latter intended for external plotting.

use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

/// A named city list with index-aligned coordinates.
#[derive(Debug, Clone)]
pub struct CityList {
    pub names: Vec<String>,
    pub coords: Vec<(f64, f64)>,
}

impl CityList {
    /// Number of cities.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Loads a city file from disk.
pub fn load_cities(path: &Path) -> Result<CityList> {
    let text = fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_cities(&text)
}

/// Parses city-file text: blank lines are skipped, the last two fields of
/// each line are latitude and longitude, everything before them is the
/// name.
pub fn parse_cities(text: &str) -> Result<CityList> {
    let mut names = Vec::new();
    let mut coords = Vec::new();

    for (idx, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() < 3 {
            return Err(Error::Parse {
                line: idx + 1,
                message: format!("expected `NAME LAT LON`, got {line:?}"),
            });
        }

        let lat: f64 = parse_coord(fields[fields.len() - 2], idx + 1, "latitude")?;
        let lon: f64 = parse_coord(fields[fields.len() - 1], idx + 1, "longitude")?;
        let name = fields[..fields.len() - 2].join(" ").replace('_', " ");

        names.push(name);
        coords.push((lat, lon));
    }

    Ok(CityList { names, coords })
}

fn parse_coord(field: &str, line: usize, what: &str) -> Result<f64> {
    field.parse().map_err(|_| Error::Parse {
        line,
        message: format!("invalid {what} {field:?}"),
    })
}

/// Writes the best tour as CSV: `Order,City` rows in visiting order, an
/// empty separator row, then the total distance to four decimals.
pub fn write_tour_csv(
    path: &Path,
    order: &[usize],
    names: &[String],
    distance: f64,
) -> Result<()> {
    if order.len() != names.len() {
        return Err(Error::SizeMismatch {
            names: names.len(),
            coords: order.len(),
        });
    }

    let csv_err = |source| Error::Csv {
        path: path.to_path_buf(),
        source,
    };

    let mut writer = csv::WriterBuilder::new()
        .flexible(true)
        .from_path(path)
        .map_err(csv_err)?;

    writer.write_record(["Order", "City"]).map_err(csv_err)?;
    for (pos, &city) in order.iter().enumerate() {
        writer
            .write_record([&(pos + 1).to_string(), &names[city]])
            .map_err(csv_err)?;
    }
    writer.write_record([""]).map_err(csv_err)?;
    writer
        .write_record(["Total Distance (miles)", format!("{distance:.4}").as_str()])
        .map_err(csv_err)?;

    writer.flush().map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Writes the per-generation best-distance trace as CSV.
pub fn write_trace_csv(path: &Path, history: &[f64]) -> Result<()> {
    let csv_err = |source| Error::Csv {
        path: path.to_path_buf(),
        source,
    };

    let mut writer = csv::Writer::from_path(path).map_err(csv_err)?;

    writer
        .write_record(["Generation", "BestDistance"])
        .map_err(csv_err)?;
    for (generation, best) in history.iter().enumerate() {
        writer
            .write_record([&(generation + 1).to_string(), &best.to_string()])
            .map_err(csv_err)?;
    }

    writer.flush().map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })
}
