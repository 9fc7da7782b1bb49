//! Diagnostics data model exposed by the finder and the `find_spaces` tool.
//!
//! `SpaceReport` is the main entry point returned by the finder, bundling the
//! ordered spaces and a `PipelineTrace` describing every stage that ran.

pub mod clusters;
pub mod order;
pub mod pipeline;
pub mod timing;

pub use clusters::{ClusterStage, ClusterSummary};
pub use order::OrderStage;
pub use pipeline::{InputDescriptor, PipelineTrace, SpaceReport};
pub use timing::{PipelineStage, StageTiming, TimingBreakdown};
