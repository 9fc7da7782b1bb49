use crate::types::LayoutAxis;
use serde::Serialize;

/// Report of the ordering stage.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderStage {
    pub span_x: f64,
    pub span_y: f64,
    pub axis: LayoutAxis,
    /// True when the axis came from configuration instead of the spans.
    pub forced: bool,
}
