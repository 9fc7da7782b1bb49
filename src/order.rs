//! Space ordering along the dominant layout axis.
//!
//! A row of bays running across the frame is indexed left to right; a column
//! running up the frame is indexed bottom to top, i.e. by descending image
//! `y`. The axis follows whichever center spread is larger, and equal spreads
//! (including a single space) count as a row.

use crate::error::{Result, SpaceError};
use crate::types::{LayoutAxis, ParkingSpace};
use log::debug;

/// Extent of the space centers along x and y.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Spans {
    pub x: f64,
    pub y: f64,
}

impl Spans {
    /// `max - min` of the centers per axis; zero for an empty slice.
    pub fn of(spaces: &[ParkingSpace]) -> Self {
        if spaces.is_empty() {
            return Self::default();
        }
        let (mut min_x, mut max_x) = (f64::INFINITY, f64::NEG_INFINITY);
        let (mut min_y, mut max_y) = (f64::INFINITY, f64::NEG_INFINITY);
        for s in spaces {
            min_x = min_x.min(s.cx);
            max_x = max_x.max(s.cx);
            min_y = min_y.min(s.cy);
            max_y = max_y.max(s.cy);
        }
        Self {
            x: max_x - min_x,
            y: max_y - min_y,
        }
    }

    /// Horizontal unless the vertical spread is strictly larger.
    pub fn axis(&self) -> LayoutAxis {
        if self.y > self.x {
            LayoutAxis::Vertical
        } else {
            LayoutAxis::Horizontal
        }
    }
}

/// Decide the layout axis for a set of spaces.
pub fn infer_axis(spaces: &[ParkingSpace]) -> Result<LayoutAxis> {
    validate_centers(spaces)?;
    Ok(Spans::of(spaces).axis())
}

/// Sort spaces along the inferred axis and number them `0..n`.
pub fn order(spaces: Vec<ParkingSpace>) -> Result<Vec<ParkingSpace>> {
    let axis = infer_axis(&spaces)?;
    order_along(spaces, axis)
}

/// Sort spaces along `axis` and number them `0..n`.
///
/// Sorting is stable: spaces with equal keys keep their input order.
pub fn order_along(mut spaces: Vec<ParkingSpace>, axis: LayoutAxis) -> Result<Vec<ParkingSpace>> {
    validate_centers(&spaces)?;
    match axis {
        LayoutAxis::Horizontal => spaces.sort_by(|a, b| a.cx.total_cmp(&b.cx)),
        LayoutAxis::Vertical => spaces.sort_by(|a, b| b.cy.total_cmp(&a.cy)),
    }
    for (idx, space) in spaces.iter_mut().enumerate() {
        space.space = Some(idx);
    }
    debug!("order: {} spaces indexed {}", spaces.len(), axis.label());
    Ok(spaces)
}

fn validate_centers(spaces: &[ParkingSpace]) -> Result<()> {
    match spaces
        .iter()
        .position(|s| !s.cx.is_finite() || !s.cy.is_finite())
    {
        Some(idx) => Err(SpaceError::invalid(format!(
            "space {idx}: center ({}, {}) is not finite",
            spaces[idx].cx, spaces[idx].cy
        ))),
        None => Ok(()),
    }
}
