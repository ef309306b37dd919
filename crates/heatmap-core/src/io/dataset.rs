use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::consts::LAST_HOUR;
use crate::error::{HeatmapError, Result};
use crate::room::{Dataset, Point, RoomSnapshot};

/// Polygon vertices as stored on disk.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Coords {
    /// `[x0, y0, x1, y1, ...]`
    Flat(Vec<f64>),
    /// `[[x0, y0], [x1, y1], ...]`
    Pairs(Vec<[f64; 2]>),
}

impl Coords {
    fn into_points(self, index: usize) -> Result<Vec<Point>> {
        match self {
            Self::Flat(values) => {
                if values.len() % 2 != 0 {
                    return Err(HeatmapError::InvalidRoom {
                        index,
                        reason: format!("odd number of coordinates ({})", values.len()),
                    });
                }
                Ok(values
                    .chunks_exact(2)
                    .map(|xy| Point::new(xy[0], xy[1]))
                    .collect())
            }
            Self::Pairs(pairs) => Ok(pairs.into_iter().map(|[x, y]| Point::new(x, y)).collect()),
        }
    }
}

/// One occupancy record as stored on disk.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RoomRecord {
    pub hour: u32,
    #[serde(alias = "occupancy")]
    pub people: f64,
    pub coords: Coords,
}

/// Parse a JSON array of [`RoomRecord`]s.
pub fn parse_dataset(json: &str) -> Result<Dataset> {
    let records: Vec<RoomRecord> = serde_json::from_str(json)?;
    if records.is_empty() {
        return Err(HeatmapError::EmptyDataset);
    }

    let mut rooms = Vec::with_capacity(records.len());
    for (index, record) in records.into_iter().enumerate() {
        if record.hour > LAST_HOUR as u32 {
            return Err(HeatmapError::InvalidRoom {
                index,
                reason: format!("hour {} out of range", record.hour),
            });
        }
        let polygon = record.coords.into_points(index)?;
        rooms.push(RoomSnapshot::new(record.hour as u8, record.people, polygon));
    }

    let dataset = Dataset::new(rooms)?;
    let missing: Vec<usize> = dataset
        .hour_counts()
        .iter()
        .enumerate()
        .filter(|(_, n)| **n == 0)
        .map(|(h, _)| h)
        .collect();
    if !missing.is_empty() {
        warn!(hours = ?missing, "Dataset has hours without rooms");
    }
    Ok(dataset)
}

/// Read and parse a dataset file.
pub fn load_dataset(path: &Path) -> Result<Dataset> {
    let contents = std::fs::read_to_string(path)?;
    let dataset = parse_dataset(&contents)?;
    info!(path = %path.display(), records = dataset.len(), "Loaded dataset");
    Ok(dataset)
}
