use serde::{Deserialize, Serialize};

/// Presentational geometry of a pointer mark on the presenter surface.
///
/// The angle orients the mark so it appears to point from the center of
/// the surface toward the tapped spot; it carries no meaning beyond
/// that. Marks on the left half are mirrored horizontally so the visual
/// leans the right way.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct AnnotationMark {
    pub x: f64,
    pub y: f64,
    pub angle_degrees: f64,
    pub mirrored: bool,
}

impl AnnotationMark {
    pub fn from_point(x: f64, y: f64) -> Self {
        let angle_degrees = (x - 0.5).atan2(-(y - 0.5)).to_degrees();
        Self {
            x,
            y,
            angle_degrees,
            mirrored: x - 0.5 < 0.0,
        }
    }
}
