//! Density-based clustering of detection centers.
//!
//! The discovery stage only depends on the [`Clusterer`] trait: give it a
//! point set, get back one [`ClusterLabel`] per point. [`Dbscan`] is the
//! default implementation and reproduces classic DBSCAN membership exactly:
//! - a point is *core* when at least `min_samples` points (itself included)
//!   lie within Euclidean distance `eps`;
//! - clusters grow from unlabeled core points in index order;
//! - a non-core point reachable from a core point is a *border* point and
//!   joins the first cluster that reaches it;
//! - everything else is noise.
//!
//! Neighbourhoods are found through [`neighbors::GridIndex`], a uniform hash
//! grid with `eps`-sized cells. The grid only prunes candidates; membership is
//! always decided by the exact distance test.

mod dbscan;
pub mod neighbors;

pub use dbscan::Dbscan;

use nalgebra::Point2;
use serde::Serialize;

/// Cluster assignment of a single point.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ClusterLabel {
    Noise,
    Cluster(usize),
}

impl ClusterLabel {
    pub fn cluster_id(&self) -> Option<usize> {
        match self {
            ClusterLabel::Noise => None,
            ClusterLabel::Cluster(id) => Some(*id),
        }
    }

    pub fn is_noise(&self) -> bool {
        matches!(self, ClusterLabel::Noise)
    }
}

/// Per-point labels produced by a [`Clusterer`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Clustering {
    pub labels: Vec<ClusterLabel>,
    /// Cluster ids are `0..num_clusters`.
    pub num_clusters: usize,
}

impl Clustering {
    pub fn noise_count(&self) -> usize {
        self.labels.iter().filter(|l| l.is_noise()).count()
    }

    /// Indices of the member points of each cluster, in point order.
    pub fn members(&self) -> Vec<Vec<usize>> {
        let mut groups = vec![Vec::new(); self.num_clusters];
        for (idx, label) in self.labels.iter().enumerate() {
            if let Some(id) = label.cluster_id() {
                groups[id].push(idx);
            }
        }
        groups
    }
}

/// Swappable clustering strategy used by the discovery stage.
pub trait Clusterer {
    fn cluster(&self, points: &[Point2<f64>]) -> Clustering;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn members_groups_by_id_and_skips_noise() {
        let clustering = Clustering {
            labels: vec![
                ClusterLabel::Cluster(1),
                ClusterLabel::Noise,
                ClusterLabel::Cluster(0),
                ClusterLabel::Cluster(1),
            ],
            num_clusters: 2,
        };
        assert_eq!(clustering.members(), vec![vec![2], vec![0, 3]]);
        assert_eq!(clustering.noise_count(), 1);
    }
}
