//! Parameter types configuring the finder stages.
//!
//! Every field has a default, so a JSON config only needs to name the knobs
//! it changes.

use crate::discover::DiscoverParams;
use crate::types::LayoutAxis;
use serde::{Deserialize, Serialize};

/// Finder-wide parameters controlling discovery and ordering.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FinderParams {
    pub discover: DiscoverParams,
    pub layout: LayoutParams,
}

/// Ordering configuration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutParams {
    /// Forces the indexing direction. `None` infers it from the spread of
    /// the space centers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub axis: Option<LayoutAxis>,
}
