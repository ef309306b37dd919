use serde::{Deserialize, Serialize};

use crate::consts::{HOURS_PER_DAY, LAST_HOUR};
use crate::error::{HeatmapError, Result};

/// A 2-D coordinate. Source-space or display-space depending on context.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// Occupancy of one room at one hour.
///
/// The polygon is authored in source image space and shared by every
/// snapshot of the same room. A room has no explicit id: it is identified by
/// its position in the [`Dataset`].
#[derive(Clone, Debug, PartialEq)]
pub struct RoomSnapshot {
    pub hour: u8,
    pub occupancy: f64,
    pub polygon: Vec<Point>,
}

impl RoomSnapshot {
    pub fn new(hour: u8, occupancy: f64, polygon: Vec<Point>) -> Self {
        Self {
            hour,
            occupancy,
            polygon,
        }
    }

    fn validate(&self, index: usize) -> Result<()> {
        let invalid = |reason: String| HeatmapError::InvalidRoom { index, reason };

        if self.hour > LAST_HOUR {
            return Err(invalid(format!("hour {} out of range", self.hour)));
        }
        if !self.occupancy.is_finite() || self.occupancy < 0.0 {
            return Err(invalid(format!("occupancy {} is not a count", self.occupancy)));
        }
        if self.polygon.len() < 3 {
            return Err(invalid(format!(
                "polygon has {} vertices, need at least 3",
                self.polygon.len()
            )));
        }
        if self
            .polygon
            .iter()
            .any(|p| !p.x.is_finite() || !p.y.is_finite())
        {
            return Err(invalid("polygon has a non-finite vertex".into()));
        }
        Ok(())
    }
}

/// Validated, immutable sequence of room snapshots in load order.
#[derive(Clone, Debug, Default)]
pub struct Dataset {
    rooms: Vec<RoomSnapshot>,
}

impl Dataset {
    /// Validate every record and take ownership of them.
    pub fn new(rooms: Vec<RoomSnapshot>) -> Result<Self> {
        for (index, room) in rooms.iter().enumerate() {
            room.validate(index)?;
        }
        Ok(Self { rooms })
    }

    pub fn rooms(&self) -> &[RoomSnapshot] {
        &self.rooms
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    /// Rooms recorded at `hour`, with their dataset index, in dataset order.
    pub fn rooms_at(&self, hour: u8) -> impl Iterator<Item = (usize, &RoomSnapshot)> {
        self.rooms
            .iter()
            .enumerate()
            .filter(move |(_, room)| room.hour == hour)
    }

    /// Number of rooms recorded for each hour of the day.
    pub fn hour_counts(&self) -> [usize; HOURS_PER_DAY as usize] {
        let mut counts = [0; HOURS_PER_DAY as usize];
        for room in &self.rooms {
            counts[room.hour as usize] += 1;
        }
        counts
    }

    /// Smallest and largest occupancy in the dataset.
    pub fn occupancy_range(&self) -> Option<(f64, f64)> {
        self.rooms.iter().map(|r| r.occupancy).fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
    }
}
