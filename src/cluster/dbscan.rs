use super::neighbors::GridIndex;
use super::{ClusterLabel, Clusterer, Clustering};
use crate::error::{Result, SpaceError};
use log::debug;
use nalgebra::Point2;

/// Classic DBSCAN over 2D points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Dbscan {
    eps: f64,
    min_samples: usize,
}

impl Dbscan {
    /// `eps` must be finite and positive; `min_samples` counts the point itself.
    pub fn new(eps: f64, min_samples: usize) -> Result<Self> {
        if !eps.is_finite() || eps <= 0.0 {
            return Err(SpaceError::invalid(format!(
                "clustering radius eps must be finite and positive, got {eps}"
            )));
        }
        if min_samples == 0 {
            return Err(SpaceError::invalid("min_samples must be at least 1"));
        }
        Ok(Self { eps, min_samples })
    }
}

impl Clusterer for Dbscan {
    fn cluster(&self, points: &[Point2<f64>]) -> Clustering {
        if points.is_empty() {
            return Clustering::default();
        }
        let index = GridIndex::new(points, self.eps);
        let neighborhoods = index.all_neighborhoods();
        let is_core: Vec<bool> = neighborhoods
            .iter()
            .map(|n| n.len() >= self.min_samples)
            .collect();

        let mut labels: Vec<Option<usize>> = vec![None; points.len()];
        let mut next_id = 0usize;
        let mut stack: Vec<usize> = Vec::new();
        for seed in 0..points.len() {
            if labels[seed].is_some() || !is_core[seed] {
                continue;
            }
            stack.push(seed);
            while let Some(p) = stack.pop() {
                if labels[p].is_some() {
                    continue;
                }
                labels[p] = Some(next_id);
                if !is_core[p] {
                    continue;
                }
                for &q in &neighborhoods[p] {
                    if labels[q].is_none() {
                        stack.push(q);
                    }
                }
            }
            next_id += 1;
        }

        let labels: Vec<ClusterLabel> = labels
            .into_iter()
            .map(|l| l.map_or(ClusterLabel::Noise, ClusterLabel::Cluster))
            .collect();
        let clustering = Clustering {
            labels,
            num_clusters: next_id,
        };
        debug!(
            "DBSCAN: {} points -> {} clusters, {} noise (eps={}, min_samples={})",
            points.len(),
            clustering.num_clusters,
            clustering.noise_count(),
            self.eps,
            self.min_samples
        );
        clustering
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pts(coords: &[(f64, f64)]) -> Vec<Point2<f64>> {
        coords.iter().map(|&(x, y)| Point2::new(x, y)).collect()
    }

    #[test]
    fn rejects_bad_parameters() {
        assert!(Dbscan::new(0.0, 2).is_err());
        assert!(Dbscan::new(f64::NAN, 2).is_err());
        assert!(Dbscan::new(15.0, 0).is_err());
    }

    #[test]
    fn two_blobs_and_a_lone_point() {
        let points = pts(&[
            (100.0, 100.0),
            (102.0, 99.0),
            (500.0, 500.0),
            (300.0, 40.0),
            (101.0, 103.0),
            (305.0, 41.0),
        ]);
        let clustering = Dbscan::new(15.0, 2).unwrap().cluster(&points);
        assert_eq!(clustering.num_clusters, 2);
        assert_eq!(
            clustering.labels,
            vec![
                ClusterLabel::Cluster(0),
                ClusterLabel::Cluster(0),
                ClusterLabel::Noise,
                ClusterLabel::Cluster(1),
                ClusterLabel::Cluster(0),
                ClusterLabel::Cluster(1),
            ]
        );
    }

    #[test]
    fn chains_through_core_points() {
        // Consecutive gaps of 10 link the whole chain even though the ends
        // are 40 apart.
        let points = pts(&[(0.0, 0.0), (10.0, 0.0), (20.0, 0.0), (30.0, 0.0), (40.0, 0.0)]);
        let clustering = Dbscan::new(15.0, 2).unwrap().cluster(&points);
        assert_eq!(clustering.num_clusters, 1);
        assert_eq!(clustering.noise_count(), 0);
    }

    #[test]
    fn border_point_joins_but_does_not_expand() {
        // With min_samples = 3 only the point at x=10 is core. Its
        // neighbours join as border points; x=35 is out of reach.
        let points = pts(&[(0.0, 0.0), (10.0, 0.0), (20.0, 0.0), (35.0, 0.0)]);
        let clustering = Dbscan::new(10.0, 3).unwrap().cluster(&points);
        assert_eq!(clustering.num_clusters, 1);
        assert_eq!(clustering.labels[0], ClusterLabel::Cluster(0));
        assert_eq!(clustering.labels[2], ClusterLabel::Cluster(0));
        assert_eq!(clustering.labels[3], ClusterLabel::Noise);
    }

    #[test]
    fn border_point_takes_first_cluster() {
        // x=15 is within reach of both cores but only as a border point;
        // the cluster seeded first claims it.
        let points = pts(&[
            (0.0, 0.0),
            (3.0, 0.0),
            (6.0, 0.0),
            (15.0, 0.0),
            (24.0, 0.0),
            (27.0, 0.0),
            (30.0, 0.0),
        ]);
        let clustering = Dbscan::new(9.0, 4).unwrap().cluster(&points);
        assert_eq!(clustering.num_clusters, 2);
        assert_eq!(clustering.labels[3], ClusterLabel::Cluster(0));
        assert_eq!(clustering.labels[4], ClusterLabel::Cluster(1));
    }

    #[test]
    fn empty_input_has_no_clusters() {
        let clustering = Dbscan::new(15.0, 2).unwrap().cluster(&[]);
        assert_eq!(clustering.num_clusters, 0);
        assert!(clustering.labels.is_empty());
    }
}
