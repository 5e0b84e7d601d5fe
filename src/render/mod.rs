// src/render/mod.rs
//
// The rendering side of a dot. Cells only talk to a `DotView`; the app
// uses `AnimatedDot`, which tweens over time and draws with nannou.

pub mod dot_renderer;
pub mod grid_renderer;

pub use dot_renderer::AnimatedDot;

use crate::animation::EasingType;
use crate::models::{CellFrame, DotStyle, DotVisual};

pub trait DotView {
    /// Places the dot in `frame` showing `rest`, ready to be drawn.
    fn attach(&mut self, frame: CellFrame, style: &DotStyle, rest: DotVisual);
    /// Removes the dot from display.
    fn detach(&mut self);
    /// Starts animating towards `target`, replacing any animation in flight.
    fn animate(&mut self, target: DotVisual, duration: f32, easing: EasingType);
}
