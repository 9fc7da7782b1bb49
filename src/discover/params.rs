//! Knobs for the space discovery stage.
//!
//! Defaults match the usual overhead parking-lot footage: detector centers of
//! a parked car wander a few pixels, so `eps = 15` keeps one car's centers in
//! one cluster while neighbouring bays stay apart.

use crate::error::{Result, SpaceError};
use serde::{Deserialize, Serialize};

/// Minimum neighbourhood size for a DBSCAN core point, the point included.
pub const MIN_CLUSTER_SAMPLES: usize = 2;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiscoverParams {
    /// Neighbourhood radius for clustering detection centers (pixels).
    /// Larger values merge more distant detections.
    pub eps: f64,
    /// Fraction of distinct timestamps in which a cluster must be seen.
    pub min_recurrence_fraction: f64,
    /// Fraction of the shorter median box side used as the slot diameter.
    pub space_size: f64,
}

impl Default for DiscoverParams {
    fn default() -> Self {
        Self {
            eps: 15.0,
            min_recurrence_fraction: 0.9,
            space_size: 0.5,
        }
    }
}

impl DiscoverParams {
    pub fn new(eps: f64, min_recurrence_fraction: f64, space_size: f64) -> Self {
        Self {
            eps,
            min_recurrence_fraction,
            space_size,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if !self.eps.is_finite() || self.eps <= 0.0 {
            return Err(SpaceError::invalid(format!(
                "eps must be finite and positive, got {}",
                self.eps
            )));
        }
        if !(0.0..=1.0).contains(&self.min_recurrence_fraction) {
            return Err(SpaceError::invalid(format!(
                "min_recurrence_fraction must lie in [0, 1], got {}",
                self.min_recurrence_fraction
            )));
        }
        if !self.space_size.is_finite() || self.space_size <= 0.0 {
            return Err(SpaceError::invalid(format!(
                "space_size must be finite and positive, got {}",
                self.space_size
            )));
        }
        Ok(())
    }

    /// Number of frames a cluster needs out of `total_frames`.
    pub fn required_frames(&self, total_frames: usize) -> f64 {
        self.min_recurrence_fraction * total_frames as f64
    }
}
