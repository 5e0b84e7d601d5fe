// src/render/grid_renderer.rs
//
// Per-frame driving of a grid whose cells draw with nannou.

use nannou::prelude::*;

use crate::render::AnimatedDot;
use crate::views::DotGrid;

impl DotGrid<AnimatedDot> {
    /// Advances every dot's animation to `time` (seconds, as `app.time`).
    pub fn update(&mut self, time: f32) {
        for cell in self.cells_mut() {
            cell.view_mut().update(time);
        }
    }

    /// Draws the dots. The grid fills a window of its own bounds.
    pub fn draw(&self, draw: &Draw) {
        let (width, height) = self.bounds();
        let window_size = vec2(width, height);

        // resting dots first so moving ones stay on top
        let (moving, resting): (Vec<_>, Vec<_>) = self
            .cells()
            .iter()
            .partition(|cell| cell.view().is_animating() || cell.is_active());
        for cell in resting.into_iter().chain(moving) {
            cell.view().draw(draw, window_size);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Alignment;
    use crate::views::{GridConfig, PointerEvent};

    fn grid() -> DotGrid<AnimatedDot> {
        let config = GridConfig {
            alignment: Alignment::Exact,
            ..GridConfig::default()
        };
        DotGrid::with_bounds(config, 128.0, 128.0)
    }

    #[test]
    fn test_update_runs_touch_animation_to_completion() {
        let mut grid = grid();
        grid.update(10.0);
        grid.handle_pointer(PointerEvent::Moved(pt2(20.0, 20.0)));

        let dot = grid.cell_at(0, 0).unwrap().view();
        assert!(dot.is_animating());

        grid.update(20.0);
        let cell = grid.cell_at(0, 0).unwrap();
        assert!(!cell.view().is_animating());
        assert_eq!(cell.view().presented(), Some(cell.visual()));
    }

    #[test]
    fn test_release_springs_back_to_rest() {
        let mut grid = grid();
        grid.update(0.0);
        grid.handle_pointer(PointerEvent::Moved(pt2(100.0, 100.0)));
        grid.update(1.0);
        grid.handle_pointer(PointerEvent::Ended);

        grid.update(1.01);
        let cell = grid.cell_at(1, 1).unwrap();
        assert_ne!(cell.view().presented(), Some(cell.rest_visual()));

        grid.update(5.0);
        for cell in grid.cells() {
            assert_eq!(cell.view().presented(), Some(cell.rest_visual()));
        }
    }

    #[test]
    fn test_relayout_leaves_fresh_dots_at_rest() {
        let mut grid = grid();
        grid.update(0.0);
        grid.handle_pointer(PointerEvent::Moved(pt2(100.0, 100.0)));
        grid.set_bounds(64.0, 64.0);
        assert_eq!(grid.len(), 1);
        let cell = &grid.cells()[0];
        assert_eq!(cell.view().presented(), Some(cell.rest_visual()));
    }
}
