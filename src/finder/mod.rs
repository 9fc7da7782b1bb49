//! Finder pipeline orchestrating discovery and ordering.
//!
//! [`SpaceFinder`] exposes a simple API: feed the full detection table of a
//! video and get back the indexed parking spaces with detailed diagnostics.
//!
//! Typical usage:
//! ```no_run
//! use parking_spaces::{Detection, FinderParams, SpaceFinder};
//!
//! # fn example(detections: Vec<Detection>) -> parking_spaces::Result<()> {
//! let finder = SpaceFinder::new(FinderParams::default())?;
//! let report = finder.process(&detections)?;
//! for s in &report.spaces {
//!     println!("space {:?} at ({:.1}, {:.1}) r={:.1}", s.space, s.cx, s.cy, s.radius);
//! }
//! # Ok(())
//! # }
//! ```

pub mod params;

pub use params::{FinderParams, LayoutParams};

use crate::diagnostics::{
    InputDescriptor, OrderStage, PipelineStage, PipelineTrace, SpaceReport, TimingBreakdown,
};
use crate::discover::{Discovery, SpaceDiscoverer};
use crate::error::Result;
use crate::order::{order_along, Spans};
use crate::types::Detection;
use log::debug;
use std::time::Instant;

/// Runs discovery followed by ordering on one detection table.
///
/// Holds no per-run state, so a single finder can process many videos,
/// including from several threads at once.
#[derive(Clone, Debug)]
pub struct SpaceFinder {
    params: FinderParams,
    discoverer: SpaceDiscoverer,
}

impl SpaceFinder {
    /// Create a finder; fails on out-of-range discovery parameters.
    pub fn new(params: FinderParams) -> Result<Self> {
        let discoverer = SpaceDiscoverer::new(params.discover)?;
        Ok(Self { params, discoverer })
    }

    /// Run the full pipeline and capture diagnostics.
    pub fn process(&self, detections: &[Detection]) -> Result<SpaceReport> {
        let total_start = Instant::now();
        let mut timings = TimingBreakdown::default();

        let discover_start = Instant::now();
        let Discovery { spaces, stage } = self.discoverer.discover(detections)?;
        timings.record(PipelineStage::Discover, discover_start);

        let order_start = Instant::now();
        let spans = Spans::of(&spaces);
        let (axis, forced) = match self.params.layout.axis {
            Some(axis) => (axis, true),
            None => (spans.axis(), false),
        };
        let spaces = order_along(spaces, axis)?;
        timings.record(PipelineStage::Order, order_start);
        timings.finish(total_start);

        debug!(
            "SpaceFinder::process spaces={} axis={} (span_x={:.1}, span_y={:.1}, forced={}) total_ms={:.3}",
            spaces.len(),
            axis.label(),
            spans.x,
            spans.y,
            forced,
            timings.total_ms
        );

        Ok(SpaceReport {
            spaces,
            axis,
            trace: PipelineTrace {
                input: InputDescriptor {
                    detections: stage.detections,
                    distinct_timestamps: stage.distinct_timestamps,
                },
                timings,
                clustering: stage,
                ordering: OrderStage {
                    span_x: spans.x,
                    span_y: spans.y,
                    axis,
                    forced,
                },
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::LayoutAxis;

    fn column_of_bays() -> Vec<Detection> {
        let mut detections = Vec::new();
        for t in 0..5 {
            for bay in 0..3 {
                let cy = 400.0 - 100.0 * bay as f64;
                detections.push(Detection::from_xyxy(
                    t as i64,
                    80.0,
                    cy - 20.0,
                    120.0,
                    cy + 20.0,
                ));
            }
        }
        detections
    }

    #[test]
    fn process_orders_column_bottom_to_top() {
        let finder = SpaceFinder::new(FinderParams::default()).unwrap();
        let report = finder.process(&column_of_bays()).unwrap();
        assert_eq!(report.axis, LayoutAxis::Vertical);
        let ys: Vec<f64> = report.spaces.iter().map(|s| s.cy).collect();
        assert_eq!(ys, vec![400.0, 300.0, 200.0]);
        assert!(!report.trace.ordering.forced);
        assert_eq!(report.trace.input.distinct_timestamps, 5);
        let stages: Vec<PipelineStage> =
            report.trace.timings.stages.iter().map(|s| s.stage).collect();
        assert_eq!(stages, vec![PipelineStage::Discover, PipelineStage::Order]);
    }

    #[test]
    fn forced_axis_is_reported() {
        let params = FinderParams {
            layout: LayoutParams {
                axis: Some(LayoutAxis::Horizontal),
            },
            ..Default::default()
        };
        let finder = SpaceFinder::new(params).unwrap();
        let report = finder.process(&column_of_bays()).unwrap();
        assert_eq!(report.axis, LayoutAxis::Horizontal);
        assert!(report.trace.ordering.forced);
        // All centers share cx, so the stable sort keeps cluster order.
        let idx: Vec<Option<usize>> = report.spaces.iter().map(|s| s.space).collect();
        assert_eq!(idx, vec![Some(0), Some(1), Some(2)]);
    }

    #[test]
    fn invalid_params_fail_at_construction() {
        let mut params = FinderParams::default();
        params.discover.eps = -1.0;
        assert!(SpaceFinder::new(params).unwrap_err().is_invalid_input());
    }
}
