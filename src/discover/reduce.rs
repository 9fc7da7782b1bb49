//! Reduce an accepted cluster to one canonical slot.

use crate::stats::median_by;
use crate::types::{Detection, ParkingSpace};
use serde::Serialize;

/// Median footprint of a cluster's member boxes.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClusterGeometry {
    pub cx: f64,
    pub cy: f64,
    pub median_width: f64,
    pub median_height: f64,
}

impl ClusterGeometry {
    /// `None` for an empty member list.
    pub fn from_members(members: &[&Detection]) -> Option<Self> {
        Some(Self {
            cx: median_by(members, |d| d.cx)?,
            cy: median_by(members, |d| d.cy)?,
            median_width: median_by(members, |d| d.width())?,
            median_height: median_by(members, |d| d.height())?,
        })
    }

    /// Shorter of the two median sides.
    ///
    /// Width and height medians are taken independently, so this is not the
    /// median of each box's shorter side.
    pub fn min_side(&self) -> f64 {
        self.median_width.min(self.median_height)
    }

    pub fn radius(&self, space_size: f64) -> f64 {
        self.min_side() * space_size / 2.0
    }

    pub fn to_space(&self, space_size: f64) -> ParkingSpace {
        ParkingSpace::new(self.cx, self.cy, self.radius(space_size))
    }
}
