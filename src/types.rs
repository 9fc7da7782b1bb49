use crate::error::{Result, SpaceError};
use nalgebra::Point2;
use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Frame identifier of a detection. Only equality is ever used.
///
/// Whole numbers become [`Timestamp::Int`], so `7`, `7.0` and `"7"` in a CSV
/// cell name the same frame. Fractional numbers are kept by their shortest
/// decimal text and anything else (`frame_0001`, `00:01:23`) verbatim.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum Timestamp {
    Int(i64),
    Text(String),
}

impl From<i64> for Timestamp {
    fn from(v: i64) -> Self {
        Timestamp::Int(v)
    }
}

impl From<u64> for Timestamp {
    fn from(v: u64) -> Self {
        i64::try_from(v).map_or_else(|_| Timestamp::Text(v.to_string()), Timestamp::Int)
    }
}

impl From<f64> for Timestamp {
    fn from(v: f64) -> Self {
        // 2^63 is exactly representable and is the first value past i64::MAX.
        let in_range = v >= i64::MIN as f64 && v < i64::MAX as f64;
        if v.fract() == 0.0 && in_range {
            Timestamp::Int(v as i64)
        } else {
            Timestamp::Text(v.to_string())
        }
    }
}

impl From<&str> for Timestamp {
    fn from(v: &str) -> Self {
        Timestamp::Text(v.to_owned())
    }
}

impl From<String> for Timestamp {
    fn from(v: String) -> Self {
        Timestamp::Text(v)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Timestamp::Int(v) => write!(f, "{v}"),
            Timestamp::Text(v) => f.write_str(v),
        }
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserializer.deserialize_any(TimestampVisitor)
    }
}

struct TimestampVisitor;

impl<'de> Visitor<'de> for TimestampVisitor {
    type Value = Timestamp;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a frame number, time value or frame label")
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> std::result::Result<Timestamp, E> {
        Ok(Timestamp::Text(v.to_string()))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> std::result::Result<Timestamp, E> {
        Ok(Timestamp::Int(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> std::result::Result<Timestamp, E> {
        Ok(Timestamp::from(v))
    }

    fn visit_i128<E: de::Error>(self, v: i128) -> std::result::Result<Timestamp, E> {
        Ok(i64::try_from(v).map_or_else(|_| Timestamp::Text(v.to_string()), Timestamp::Int))
    }

    fn visit_u128<E: de::Error>(self, v: u128) -> std::result::Result<Timestamp, E> {
        Ok(i64::try_from(v).map_or_else(|_| Timestamp::Text(v.to_string()), Timestamp::Int))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> std::result::Result<Timestamp, E> {
        Ok(Timestamp::from(v))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> std::result::Result<Timestamp, E> {
        Ok(Timestamp::from(v))
    }

    fn visit_string<E: de::Error>(self, v: String) -> std::result::Result<Timestamp, E> {
        Ok(Timestamp::Text(v))
    }
}

/// One observed bounding box in one frame, as produced by the vehicle detector.
///
/// Field names match the detector's table columns.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Detection {
    pub timestamp: Timestamp,
    pub cx: f64,
    pub cy: f64,
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl Detection {
    /// Build a detection from an `xyxy` box, deriving the center.
    pub fn from_xyxy(timestamp: impl Into<Timestamp>, x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self {
            timestamp: timestamp.into(),
            cx: 0.5 * (x1 + x2),
            cy: 0.5 * (y1 + y2),
            x1,
            y1,
            x2,
            y2,
        }
    }

    pub fn center(&self) -> Point2<f64> {
        Point2::new(self.cx, self.cy)
    }

    pub fn width(&self) -> f64 {
        self.x2 - self.x1
    }

    pub fn height(&self) -> f64 {
        self.y2 - self.y1
    }

    /// Check that every coordinate is finite and the box is non-degenerate.
    ///
    /// `row` is only used to make the error message point at the offending
    /// record.
    pub fn validate(&self, row: usize) -> Result<()> {
        let fields = [
            ("cx", self.cx),
            ("cy", self.cy),
            ("x1", self.x1),
            ("y1", self.y1),
            ("x2", self.x2),
            ("y2", self.y2),
        ];
        if let Some((name, value)) = fields.iter().find(|(_, v)| !v.is_finite()) {
            return Err(SpaceError::invalid(format!(
                "detection {row}: field `{name}` is not finite ({value})"
            )));
        }
        if self.x2 <= self.x1 || self.y2 <= self.y1 {
            return Err(SpaceError::invalid(format!(
                "detection {row}: degenerate box x1={} y1={} x2={} y2={}",
                self.x1, self.y1, self.x2, self.y2
            )));
        }
        Ok(())
    }
}

/// One inferred parking slot.
///
/// `space` is `None` until the orderer assigns the slot its position along
/// the layout axis.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ParkingSpace {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub space: Option<usize>,
    pub cx: f64,
    pub cy: f64,
    pub radius: f64,
}

impl ParkingSpace {
    pub fn new(cx: f64, cy: f64, radius: f64) -> Self {
        Self {
            space: None,
            cx,
            cy,
            radius,
        }
    }

    pub fn center(&self) -> Point2<f64> {
        Point2::new(self.cx, self.cy)
    }
}

/// Direction along which parking spaces are indexed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutAxis {
    /// Left to right, ascending `cx`.
    Horizontal,
    /// Bottom to top, descending `cy` (image y grows downward).
    Vertical,
}

impl LayoutAxis {
    pub fn label(&self) -> &'static str {
        match self {
            LayoutAxis::Horizontal => "left-to-right",
            LayoutAxis::Vertical => "bottom-to-top",
        }
    }
}
