use crate::diagnostics::{ClusterStage, OrderStage, TimingBreakdown};
use crate::types::{LayoutAxis, ParkingSpace};
use serde::Serialize;

/// Result produced by [`SpaceFinder::process`](crate::SpaceFinder::process).
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpaceReport {
    /// Spaces sorted along `axis`, with `space` set to `0..n`.
    pub spaces: Vec<ParkingSpace>,
    pub axis: LayoutAxis,
    pub trace: PipelineTrace,
}

/// End-to-end trace describing the internal execution of the finder.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineTrace {
    pub input: InputDescriptor,
    pub timings: TimingBreakdown,
    pub clustering: ClusterStage,
    pub ordering: OrderStage,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputDescriptor {
    pub detections: usize,
    pub distinct_timestamps: usize,
}
