#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod diagnostics;
pub mod discover;
pub mod error;
pub mod finder;
pub mod order;
pub mod types;

// Supporting modules: clustering internals, table I/O, tooling helpers.
pub mod cluster;
pub mod config;
pub mod crop;
pub mod io;
pub mod overlay;
pub mod stats;

// --- High-level re-exports -------------------------------------------------

// Main entry points: finder + stage functions.
pub use crate::discover::{discover, DiscoverParams, SpaceDiscoverer};
pub use crate::error::{Result, SpaceError};
pub use crate::finder::{FinderParams, LayoutParams, SpaceFinder};
pub use crate::order::{infer_axis, order, order_along};
pub use crate::types::{Detection, LayoutAxis, ParkingSpace, Timestamp};

// Report returned by the finder.
pub use crate::diagnostics::{PipelineTrace, SpaceReport};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use parking_spaces::prelude::*;
///
/// # fn main() -> parking_spaces::Result<()> {
/// let detections: Vec<Detection> = (0..10)
///     .map(|t| Detection::from_xyxy(t as i64, 80.0, 80.0, 120.0, 120.0))
///     .collect();
///
/// let finder = SpaceFinder::new(FinderParams::default())?;
/// let report = finder.process(&detections)?;
/// println!("found {} spaces ({})", report.spaces.len(), report.axis.label());
/// # Ok(())
/// # }
/// ```
pub mod prelude {
    pub use crate::{Detection, FinderParams, LayoutAxis, ParkingSpace, SpaceFinder, Timestamp};
}

// --- Stage-level API (for tools & advanced users) --------------------------

pub mod stages {
    pub use crate::cluster::{ClusterLabel, Clusterer, Clustering, Dbscan};
    pub use crate::discover::{ClusterGeometry, ClusterGroup, Discovery};
    pub use crate::order::Spans;

    pub use crate::diagnostics::{
        ClusterStage, ClusterSummary, InputDescriptor, OrderStage, PipelineStage, StageTiming,
        TimingBreakdown,
    };
}
