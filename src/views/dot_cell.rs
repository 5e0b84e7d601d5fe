// src/views/dot_cell.rs
//
// One grid position and the dot that lives in it.
//
// A cell rests with its dot centred in its frame. While the pointer moves
// inside the frame the dot chases it and grows; when the pointer leaves or
// lifts the dot springs back. The cell keeps the values it last asked its
// view to animate to; the view owns whatever is mid-flight on screen.

use log::trace;
use nannou::prelude::*;

use crate::animation::{EasingType, FOLLOW_EASING, RETURN_EASING, RETURN_SLOWDOWN};
use crate::models::{CellFrame, DotStyle, DotVisual, MotionConfig};
use crate::render::DotView;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum CellState {
    #[default]
    Resting,
    Active,
}

#[derive(Debug)]
pub struct DotCell<V: DotView> {
    frame: CellFrame,
    style: DotStyle,
    motion: MotionConfig,
    state: CellState,

    // targets of the latest animation
    position: Point2,
    scale: f32,
    color: Rgba,

    view: V,
}

impl<V: DotView> DotCell<V> {
    pub fn new(frame: CellFrame, style: DotStyle, motion: MotionConfig, mut view: V) -> Self {
        let rest = DotVisual::resting(frame.center(), style.rest_color);
        view.attach(frame, &style, rest);

        Self {
            frame,
            motion,
            state: CellState::Resting,
            position: rest.center,
            scale: rest.scale,
            color: rest.color,
            style,
            view,
        }
    }

    /************************** Pointer handling ****************************** */

    // Cells only hear the pointer through their grid's routing.
    pub(crate) fn pointer_moved(&mut self, point: Point2) {
        if !self.frame.contains(point) {
            self.pointer_ended();
            return;
        }

        self.state = CellState::Active;

        let ratio = self.distance_ratio(point);
        let zoom = ratio * self.motion.zoom + self.motion.zoom;
        let target = DotVisual {
            center: point,
            scale: zoom,
            color: self.style.active_color,
        };
        trace!(
            "cell at ({}, {}) follows pointer to {:?}, zoom {}",
            self.frame.x(),
            self.frame.y(),
            point,
            zoom
        );
        self.animate_to(target, ratio * self.motion.speed, FOLLOW_EASING);
    }

    pub(crate) fn pointer_ended(&mut self) {
        if self.state == CellState::Resting {
            return;
        }

        let rest = self.rest_visual();
        let ratio = self.distance_ratio(rest.center);
        trace!(
            "cell at ({}, {}) returns to rest",
            self.frame.x(),
            self.frame.y()
        );
        self.animate_to(
            rest,
            ratio * self.motion.speed * RETURN_SLOWDOWN,
            RETURN_EASING,
        );
        self.state = CellState::Resting;
    }

    fn animate_to(&mut self, target: DotVisual, duration: f32, easing: EasingType) {
        self.position = target.center;
        self.scale = target.scale;
        self.color = target.color;
        self.view.animate(target, duration, easing);
    }

    // Distance travelled as a fraction of the cell's width.
    fn distance_ratio(&self, to: Point2) -> f32 {
        if self.frame.width() <= 0.0 {
            return 0.0;
        }
        self.position.distance(to) / self.frame.width()
    }

    /************************** Lifecycle ************************************* */

    pub fn detach(&mut self) {
        self.view.detach();
    }

    /************************** Accessors ************************************* */

    pub fn frame(&self) -> CellFrame {
        self.frame
    }

    pub fn state(&self) -> CellState {
        self.state
    }

    pub fn is_active(&self) -> bool {
        self.state == CellState::Active
    }

    pub fn rest_center(&self) -> Point2 {
        self.frame.center()
    }

    pub fn rest_visual(&self) -> DotVisual {
        DotVisual::resting(self.rest_center(), self.style.rest_color)
    }

    pub fn position(&self) -> Point2 {
        self.position
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn color(&self) -> Rgba {
        self.color
    }

    pub fn visual(&self) -> DotVisual {
        DotVisual {
            center: self.position,
            scale: self.scale,
            color: self.color,
        }
    }

    pub fn style(&self) -> &DotStyle {
        &self.style
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }
}
