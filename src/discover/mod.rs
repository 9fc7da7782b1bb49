//! Space discovery: detections in, canonical slots out.
//!
//! Overview
//! - Cluster every detection center with DBSCAN (`eps`, `min_samples = 2`).
//!   Noise points never form a space.
//! - Count, per cluster, the distinct timestamps it has a member in, and keep
//!   clusters seen in at least `min_recurrence_fraction` of all timestamps
//!   in the input. Cars that merely drive through a bay show up in a handful
//!   of frames and fall below the threshold.
//! - Reduce each surviving cluster with medians: center from the member
//!   centers, radius from the shorter of the median width and median height
//!   scaled by `space_size / 2`. A single oversized or offset box cannot move
//!   a median by more than one rank.
//!
//! The output is in cluster-id order, which is deterministic for a given
//! input but carries no spatial meaning; see [`crate::order`] for indexing.

pub mod params;
pub mod recurrence;
pub mod reduce;

pub use params::{DiscoverParams, MIN_CLUSTER_SAMPLES};
pub use recurrence::{group_clusters, passes_recurrence, ClusterGroup};
pub use reduce::ClusterGeometry;

use crate::cluster::{Clusterer, Dbscan};
use crate::diagnostics::{ClusterStage, ClusterSummary};
use crate::error::{Result, SpaceError};
use crate::stats::distinct_timestamps;
use crate::types::{Detection, ParkingSpace};
use log::debug;
use nalgebra::Point2;

/// Discovered spaces plus the clustering diagnostics that produced them.
#[derive(Clone, Debug)]
pub struct Discovery {
    pub spaces: Vec<ParkingSpace>,
    pub stage: ClusterStage,
}

/// Runs clustering, recurrence filtering and median reduction.
///
/// Generic over the clustering strategy; [`SpaceDiscoverer::new`] uses
/// [`Dbscan`] with `min_samples = 2`.
#[derive(Clone, Debug)]
pub struct SpaceDiscoverer<C = Dbscan> {
    params: DiscoverParams,
    clusterer: C,
}

impl SpaceDiscoverer<Dbscan> {
    pub fn new(params: DiscoverParams) -> Result<Self> {
        params.validate()?;
        let clusterer = Dbscan::new(params.eps, MIN_CLUSTER_SAMPLES)?;
        Ok(Self { params, clusterer })
    }
}

impl<C: Clusterer> SpaceDiscoverer<C> {
    /// Use a custom clustering strategy. `params.eps` is only validated here;
    /// the clusterer is responsible for its own neighbourhood definition.
    pub fn with_clusterer(params: DiscoverParams, clusterer: C) -> Result<Self> {
        params.validate()?;
        Ok(Self { params, clusterer })
    }

    pub fn discover(&self, detections: &[Detection]) -> Result<Discovery> {
        validate_detections(detections)?;

        let points: Vec<Point2<f64>> = detections.iter().map(Detection::center).collect();
        let clustering = self.clusterer.cluster(&points);
        if clustering.labels.len() != detections.len() {
            return Err(SpaceError::invalid(format!(
                "clusterer returned {} labels for {} detections",
                clustering.labels.len(),
                detections.len()
            )));
        }

        let total_frames = distinct_timestamps(detections.iter().map(|d| &d.timestamp));
        let required = self.params.required_frames(total_frames);

        let mut stage = ClusterStage {
            detections: detections.len(),
            distinct_timestamps: total_frames,
            noise_points: clustering.noise_count(),
            required_frames: required,
            clusters: Vec::with_capacity(clustering.num_clusters),
        };
        let mut spaces = Vec::new();
        for group in group_clusters(detections, &clustering) {
            let accepted = passes_recurrence(group.frames, required);
            stage.clusters.push(ClusterSummary {
                id: group.id,
                members: group.members.len(),
                frames: group.frames,
                accepted,
            });
            if !accepted {
                continue;
            }
            if let Some(geom) = ClusterGeometry::from_members(&group.members) {
                spaces.push(geom.to_space(self.params.space_size));
            }
        }

        debug!(
            "discover: {} detections over {} frames -> {} clusters ({} noise points), {} accepted (need >= {:.2} frames)",
            stage.detections,
            total_frames,
            stage.clusters.len(),
            stage.noise_points,
            spaces.len(),
            required
        );
        Ok(Discovery { spaces, stage })
    }
}

/// Discover parking spaces with the default DBSCAN clustering.
///
/// Returns an empty vector when no cluster recurs often enough; fails with
/// [`SpaceError::InvalidInput`] for an empty or malformed detection set.
pub fn discover(
    detections: &[Detection],
    eps: f64,
    min_recurrence_fraction: f64,
    space_size: f64,
) -> Result<Vec<ParkingSpace>> {
    let params = DiscoverParams::new(eps, min_recurrence_fraction, space_size);
    Ok(SpaceDiscoverer::new(params)?.discover(detections)?.spaces)
}

fn validate_detections(detections: &[Detection]) -> Result<()> {
    if detections.is_empty() {
        return Err(SpaceError::invalid("detection set is empty"));
    }
    detections
        .iter()
        .enumerate()
        .try_for_each(|(row, d)| d.validate(row))
}
