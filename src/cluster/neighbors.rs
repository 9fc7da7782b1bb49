//! Uniform-grid radius queries for 2D points.

use nalgebra::Point2;
use rayon::prelude::*;
use std::collections::HashMap;

type CellKey = (i64, i64);

/// Hash grid with square cells of side `radius`.
///
/// Any point within `radius` of a query lies in the query's cell or one of
/// its eight neighbours, so a radius query inspects at most nine buckets.
pub struct GridIndex<'a> {
    points: &'a [Point2<f64>],
    radius: f64,
    cells: HashMap<CellKey, Vec<usize>>,
}

impl<'a> GridIndex<'a> {
    pub fn new(points: &'a [Point2<f64>], radius: f64) -> Self {
        let mut cells: HashMap<CellKey, Vec<usize>> = HashMap::new();
        for (idx, p) in points.iter().enumerate() {
            cells.entry(cell_of(p, radius)).or_default().push(idx);
        }
        Self {
            points,
            radius,
            cells,
        }
    }

    /// Indices of all points within `radius` of point `idx` (itself included),
    /// sorted ascending.
    pub fn within_radius(&self, idx: usize) -> Vec<usize> {
        let p = &self.points[idx];
        let (cx, cy) = cell_of(p, self.radius);
        let r2 = self.radius * self.radius;
        let mut out = Vec::new();
        for dx in -1..=1 {
            for dy in -1..=1 {
                let Some(bucket) = self.cells.get(&(cx + dx, cy + dy)) else {
                    continue;
                };
                for &j in bucket {
                    if (self.points[j] - *p).norm_squared() <= r2 {
                        out.push(j);
                    }
                }
            }
        }
        out.sort_unstable();
        out
    }

    /// Neighbourhoods of every point, computed in parallel and returned in
    /// point order.
    pub fn all_neighborhoods(&self) -> Vec<Vec<usize>> {
        (0..self.points.len())
            .into_par_iter()
            .map(|idx| self.within_radius(idx))
            .collect()
    }
}

fn cell_of(p: &Point2<f64>, size: f64) -> CellKey {
    ((p.x / size).floor() as i64, (p.y / size).floor() as i64)
}
