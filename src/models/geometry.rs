// src/models/geometry.rs
//
// Grid-space geometry.
//
// The grid lays its cells out from the top-left corner with y growing
// downwards. nannou windows are centred with y growing upwards, so the
// conversion helpers below sit between the two.

use nannou::prelude::*;

// Stored as edges, so frames built from shared edges tile without gaps
// or overlaps.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellFrame {
    min_x: f32,
    min_y: f32,
    max_x: f32,
    max_y: f32,
}

impl CellFrame {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self::from_edges(x, y, x + width, y + height)
    }

    pub fn from_edges(min_x: f32, min_y: f32, max_x: f32, max_y: f32) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    pub fn x(&self) -> f32 {
        self.min_x
    }

    pub fn y(&self) -> f32 {
        self.min_y
    }

    pub fn max_x(&self) -> f32 {
        self.max_x
    }

    pub fn max_y(&self) -> f32 {
        self.max_y
    }

    pub fn width(&self) -> f32 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f32 {
        self.max_y - self.min_y
    }

    pub fn center(&self) -> Point2 {
        pt2(
            self.min_x + self.width() / 2.0,
            self.min_y + self.height() / 2.0,
        )
    }

    // Half-open on the far edges so neighbouring frames never share a point.
    pub fn contains(&self, point: Point2) -> bool {
        point.x >= self.min_x
            && point.x < self.max_x
            && point.y >= self.min_y
            && point.y < self.max_y
    }
}

/// Converts a point from nannou window space (origin at the centre, y up)
/// into grid space (origin top-left, y down) for a window of `size`.
pub fn window_to_grid(point: Point2, size: Vec2) -> Point2 {
    pt2(point.x + size.x / 2.0, size.y / 2.0 - point.y)
}

/// Inverse of [`window_to_grid`].
pub fn grid_to_window(point: Point2, size: Vec2) -> Point2 {
    pt2(point.x - size.x / 2.0, size.y / 2.0 - point.y)
}
