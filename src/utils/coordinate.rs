use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Number;

/// One element of the face api detect response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DetectedFace {
    /// Kept as raw json, the id is only logged.
    #[serde(default)]
    pub face_id: Option<serde_json::Value>,
    pub face_rectangle: FaceRectangle,
}

/// Axis-aligned bounding box of a face, in source image pixels.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct FaceRectangle {
    #[serde(deserialize_with = "pixel_from_number")]
    pub top: i32,
    #[serde(deserialize_with = "pixel_from_number")]
    pub left: i32,
    #[serde(deserialize_with = "pixel_from_number")]
    pub width: i32,
    #[serde(deserialize_with = "pixel_from_number")]
    pub height: i32,
}

/// pixel_from_number accepts any json number, rounding fractions half to even.
///
/// Strings, booleans and values outside the `i32` range are rejected.
fn pixel_from_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i32, D::Error> {
    let number = Number::deserialize(deserializer)?;

    if let Some(value) = number.as_i64() {
        return i32::try_from(value)
            .map_err(|_| D::Error::custom(format!("pixel value {value} out of range")))
    }

    let value = number.as_f64().map(f64::round_ties_even).unwrap_or(f64::NAN);
    if value.is_finite() && value >= i32::MIN as f64 && value <= i32::MAX as f64 {
        Ok(value as i32)
    } else {
        Err(D::Error::custom(format!("pixel value {number} out of range")))
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Coordinate2D {
    pub x: i32,
    pub y: i32,
}

impl FaceRectangle {
    /// corners returns the closed outline in top-left, top-right, bottom-right, bottom-left order.
    pub fn corners(&self) -> [Coordinate2D; 4] {
        let right = self.left.saturating_add(self.width);
        let bottom = self.top.saturating_add(self.height);
        [
            Coordinate2D { x: self.left, y: self.top },
            Coordinate2D { x: right, y: self.top },
            Coordinate2D { x: right, y: bottom },
            Coordinate2D { x: self.left, y: bottom },
        ]
    }
}
