//! Crop region around a lot boundary, clamped to the frame.
//!
//! Not part of discovery itself: callers use it to restrict the detector to
//! the part of the frame that contains the lot.

use crate::error::{Result, SpaceError};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Frame dimensions in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameSize {
    pub width: u32,
    pub height: u32,
}

/// Anything that can report the dimensions of the source video's frames.
pub trait FrameSource {
    fn frame_size(&self) -> Result<FrameSize>;
}

impl FrameSource for FrameSize {
    fn frame_size(&self) -> Result<FrameSize> {
        Ok(*self)
    }
}

/// Reads frame dimensions from a still extracted from the video.
#[derive(Clone, Debug)]
pub struct ImageFrame {
    path: PathBuf,
}

impl ImageFrame {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl FrameSource for ImageFrame {
    fn frame_size(&self) -> Result<FrameSize> {
        let (width, height) =
            image::image_dimensions(&self.path).map_err(|source| SpaceError::Image {
                path: self.path.clone(),
                source,
            })?;
        Ok(FrameSize { width, height })
    }
}

/// Axis-aligned crop in `xyxy` pixel coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CropRegion {
    pub x1: u32,
    pub y1: u32,
    pub x2: u32,
    pub y2: u32,
}

impl CropRegion {
    pub fn width(&self) -> u32 {
        self.x2 - self.x1
    }

    pub fn height(&self) -> u32 {
        self.y2 - self.y1
    }

    pub fn to_xyxy(&self) -> [u32; 4] {
        [self.x1, self.y1, self.x2, self.y2]
    }
}

/// Bounding box of `vertices` grown by `padding`, clamped to
/// `[0, width] x [0, height]`. `None` when there are no vertices.
pub fn crop_from_vertices(vertices: &[[i32; 2]], padding: u32, frame: FrameSize) -> Option<CropRegion> {
    let first = vertices.first()?;
    let (mut min_x, mut min_y, mut max_x, mut max_y) = (first[0], first[1], first[0], first[1]);
    for v in &vertices[1..] {
        min_x = min_x.min(v[0]);
        min_y = min_y.min(v[1]);
        max_x = max_x.max(v[0]);
        max_y = max_y.max(v[1]);
    }
    let pad = i64::from(padding);
    let clamp = |value: i64, limit: u32| value.clamp(0, i64::from(limit)) as u32;
    Some(CropRegion {
        x1: clamp(i64::from(min_x) - pad, frame.width),
        y1: clamp(i64::from(min_y) - pad, frame.height),
        x2: clamp(i64::from(max_x) + pad, frame.width),
        y2: clamp(i64::from(max_y) + pad, frame.height),
    })
}

/// [`crop_from_vertices`] with dimensions taken from a [`FrameSource`].
///
/// The source is only queried when there are vertices.
pub fn crop_for_source<S: FrameSource>(
    vertices: &[[i32; 2]],
    padding: u32,
    source: &S,
) -> Result<Option<CropRegion>> {
    if vertices.is_empty() {
        return Ok(None);
    }
    let frame = source.frame_size()?;
    Ok(crop_from_vertices(vertices, padding, frame))
}

#[cfg(test)]
mod tests {
    use super::*;

    const HD: FrameSize = FrameSize {
        width: 1280,
        height: 720,
    };

    #[test]
    fn pads_bounding_box() {
        let crop = crop_from_vertices(&[[100, 200], [400, 150], [300, 500]], 50, HD).unwrap();
        assert_eq!(crop.to_xyxy(), [50, 100, 450, 550]);
        assert_eq!(crop.width(), 400);
        assert_eq!(crop.height(), 450);
    }

    #[test]
    fn clamps_to_frame() {
        let crop = crop_from_vertices(&[[10, 20], [1270, 700]], 50, HD).unwrap();
        assert_eq!(crop.to_xyxy(), [0, 0, 1280, 720]);
    }

    #[test]
    fn empty_vertices_give_no_crop() {
        assert_eq!(crop_from_vertices(&[], 50, HD), None);
        let missing = ImageFrame::new("/nonexistent/frame.png");
        assert_eq!(crop_for_source(&[], 50, &missing).unwrap(), None);
    }

    #[test]
    fn unreadable_frame_is_an_image_error() {
        let missing = ImageFrame::new("/nonexistent/frame.png");
        let err = crop_for_source(&[[1, 1]], 0, &missing).unwrap_err();
        assert!(matches!(err, SpaceError::Image { .. }), "{err}");
    }
}
