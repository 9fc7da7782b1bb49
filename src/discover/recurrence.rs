//! Group detections by cluster and measure how often each cluster recurs.

use crate::cluster::Clustering;
use crate::stats::distinct_timestamps;
use crate::types::Detection;

/// Member detections of one cluster plus the number of frames it appears in.
#[derive(Clone, Debug)]
pub struct ClusterGroup<'a> {
    pub id: usize,
    pub members: Vec<&'a Detection>,
    pub frames: usize,
}

/// Build one group per cluster id, in id order. Noise points are dropped.
pub fn group_clusters<'a>(
    detections: &'a [Detection],
    clustering: &Clustering,
) -> Vec<ClusterGroup<'a>> {
    clustering
        .members()
        .into_iter()
        .enumerate()
        .map(|(id, indices)| {
            let members: Vec<&Detection> = indices.iter().map(|&i| &detections[i]).collect();
            let frames = distinct_timestamps(members.iter().map(|d| &d.timestamp));
            ClusterGroup {
                id,
                members,
                frames,
            }
        })
        .collect()
}

/// A cluster is a real space when it shows up in at least `required` frames.
pub fn passes_recurrence(frames: usize, required: f64) -> bool {
    frames as f64 >= required
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cluster::ClusterLabel;

    #[test]
    fn groups_count_distinct_frames() {
        let detections = vec![
            Detection::from_xyxy(0i64, 0.0, 0.0, 10.0, 10.0),
            Detection::from_xyxy(0i64, 1.0, 0.0, 11.0, 10.0),
            Detection::from_xyxy(1i64, 0.0, 1.0, 10.0, 11.0),
            Detection::from_xyxy(1i64, 90.0, 90.0, 99.0, 99.0),
        ];
        let clustering = Clustering {
            labels: vec![
                ClusterLabel::Cluster(0),
                ClusterLabel::Cluster(0),
                ClusterLabel::Cluster(0),
                ClusterLabel::Noise,
            ],
            num_clusters: 1,
        };
        let groups = group_clusters(&detections, &clustering);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].members.len(), 3);
        // Two detections in frame 0 still count as one frame.
        assert_eq!(groups[0].frames, 2);
    }

    #[test]
    fn threshold_is_inclusive() {
        assert!(passes_recurrence(9, 0.9 * 10.0));
        assert!(!passes_recurrence(8, 0.9 * 10.0));
        assert!(passes_recurrence(3, 0.9 * 3.0));
        assert!(!passes_recurrence(2, 0.9 * 3.0));
    }
}
