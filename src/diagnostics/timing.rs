use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Timed steps of [`SpaceFinder::process`](crate::SpaceFinder::process).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PipelineStage {
    Discover,
    Order,
}

impl PipelineStage {
    pub fn name(&self) -> &'static str {
        match self {
            PipelineStage::Discover => "discover",
            PipelineStage::Order => "order",
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StageTiming {
    pub stage: PipelineStage,
    pub elapsed_ms: f64,
}

/// Wall-clock cost of one finder run, stage by stage in execution order.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimingBreakdown {
    pub total_ms: f64,
    pub stages: Vec<StageTiming>,
}

impl TimingBreakdown {
    /// Append `stage`, timed from `start` to now.
    pub fn record(&mut self, stage: PipelineStage, start: Instant) {
        self.stages.push(StageTiming {
            stage,
            elapsed_ms: elapsed_ms(start),
        });
    }

    /// Close the breakdown with the run's total, measured from `start`.
    pub fn finish(&mut self, start: Instant) {
        self.total_ms = elapsed_ms(start);
    }

    pub fn stage_ms(&self, stage: PipelineStage) -> Option<f64> {
        self.stages
            .iter()
            .find(|s| s.stage == stage)
            .map(|s| s.elapsed_ms)
    }
}

/// Milliseconds elapsed since `start`.
pub fn elapsed_ms(start: Instant) -> f64 {
    start.elapsed().as_secs_f64() * 1000.0
}
