use serde::Serialize;

/// Per-cluster outcome of the recurrence filter.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClusterSummary {
    pub id: usize,
    pub members: usize,
    /// Distinct timestamps with at least one member.
    pub frames: usize,
    pub accepted: bool,
}

/// Report of the clustering + recurrence filtering stage.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClusterStage {
    pub detections: usize,
    pub distinct_timestamps: usize,
    pub noise_points: usize,
    /// `min_recurrence_fraction * distinct_timestamps`.
    pub required_frames: f64,
    pub clusters: Vec<ClusterSummary>,
}

impl ClusterStage {
    pub fn accepted(&self) -> usize {
        self.clusters.iter().filter(|c| c.accepted).count()
    }

    pub fn rejected(&self) -> usize {
        self.clusters.len() - self.accepted()
    }
}
