//! Geometry carried by drag-over events.
//!
//! Only the vertical axis matters for a column of cards, so a rectangle is
//! reduced to its top edge and height, in screen pixels.

use serde::{Deserialize, Serialize};

/// Vertical extent of the hovered element
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub top: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    /// Bottom edge (`top + height`)
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

/// Geometry of one drag-over event.
///
/// Either part may be missing: the hovered element may not have been measured
/// yet, and the dragged element has no translated rect before it first moves.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DragGeometry {
    #[serde(default, rename = "overRect")]
    pub over_rect: Option<Rect>,
    #[serde(default, rename = "activeTop")]
    pub active_top: Option<f64>,
}

impl DragGeometry {
    pub fn new(over_rect: Rect, active_top: f64) -> Self {
        Self {
            over_rect: Some(over_rect),
            active_top: Some(active_top),
        }
    }

    /// True when the dragged element's translated top edge is past the
    /// hovered element's bottom edge.
    pub fn is_below_over(&self) -> bool {
        match (self.over_rect, self.active_top) {
            (Some(rect), Some(top)) => top > rect.bottom(),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_below_over_strictly_past_bottom() {
        let rect = Rect::new(0.0, 50.0);
        assert!(!DragGeometry::new(rect, 30.0).is_below_over());
        assert!(!DragGeometry::new(rect, 50.0).is_below_over());
        assert!(DragGeometry::new(rect, 80.0).is_below_over());
    }

    #[test]
    fn test_missing_geometry_is_not_below() {
        assert!(!DragGeometry::default().is_below_over());
        let only_rect = DragGeometry {
            over_rect: Some(Rect::new(0.0, 10.0)),
            active_top: None,
        };
        assert!(!only_rect.is_below_over());
    }

    #[test]
    fn test_geometry_deserializes_from_event_shape() {
        let geometry: DragGeometry =
            serde_json::from_str(r#"{"overRect":{"top":10,"height":40},"activeTop":55.5}"#)
                .unwrap();
        assert_eq!(geometry.over_rect, Some(Rect::new(10.0, 40.0)));
        assert!(geometry.is_below_over());
    }
}
