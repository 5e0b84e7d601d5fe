// src/render/dot_renderer.rs
//
// Time-driven dot for nannou. Animations are started against the last
// clock value seen in `update`, so hosts call `update(app.time)` once per
// frame before handling input.

use nannou::prelude::*;

use crate::animation::{DotTween, EasingType};
use crate::models::{grid_to_window, CellFrame, DotStyle, DotVisual};
use crate::render::DotView;

#[derive(Debug, Default)]
pub struct AnimatedDot {
    style: DotStyle,
    presented: Option<DotVisual>,
    tween: Option<DotTween>,
    clock: f32,
}

impl AnimatedDot {
    pub fn update(&mut self, time: f32) {
        self.clock = time;
        if let Some(tween) = &self.tween {
            self.presented = Some(tween.sample(time));
            if tween.is_complete(time) {
                self.tween = None;
            }
        }
    }

    pub fn is_attached(&self) -> bool {
        self.presented.is_some()
    }

    pub fn is_animating(&self) -> bool {
        self.tween.is_some()
    }

    /// What is on screen right now, in grid space.
    pub fn presented(&self) -> Option<DotVisual> {
        self.presented
    }

    pub fn draw(&self, draw: &Draw, window_size: Vec2) {
        let Some(visual) = self.presented else {
            return;
        };
        let center = grid_to_window(visual.center, window_size);
        let size = self.style.diameter * visual.scale;

        match &self.style.image {
            Some(image) => {
                draw.texture(image.texture())
                    .x_y(center.x, center.y)
                    .w_h(size, size);
            }
            None => {
                draw.ellipse()
                    .x_y(center.x, center.y)
                    .radius(size / 2.0)
                    .color(visual.color);
            }
        }
    }
}

impl DotView for AnimatedDot {
    fn attach(&mut self, _frame: CellFrame, style: &DotStyle, rest: DotVisual) {
        self.style = style.clone();
        self.presented = Some(rest);
        self.tween = None;
    }

    fn detach(&mut self) {
        self.presented = None;
        self.tween = None;
    }

    fn animate(&mut self, target: DotVisual, duration: f32, easing: EasingType) {
        let Some(from) = self.presented else {
            return;
        };
        let tween = DotTween::new(from, target, self.clock, duration, easing);
        if tween.is_complete(self.clock) {
            self.presented = Some(target);
            self.tween = None;
        } else {
            self.tween = Some(tween);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attached_dot() -> AnimatedDot {
        let mut dot = AnimatedDot::default();
        let frame = CellFrame::new(0.0, 0.0, 64.0, 64.0);
        let style = DotStyle::default();
        dot.attach(frame, &style, DotVisual::resting(frame.center(), style.rest_color));
        dot
    }

    #[test]
    fn test_attach_presents_rest() {
        let dot = attached_dot();
        assert!(dot.is_attached());
        assert_eq!(dot.presented().unwrap().center, pt2(32.0, 32.0));
        assert!(!dot.is_animating());
    }

    #[test]
    fn test_animation_advances_with_clock() {
        let mut dot = attached_dot();
        dot.update(1.0);
        let target = DotVisual {
            center: pt2(42.0, 32.0),
            scale: 2.0,
            color: rgba(0.0, 0.0, 0.0, 1.0),
        };
        dot.animate(target, 1.0, EasingType::Linear);
        assert!(dot.is_animating());

        dot.update(1.5);
        let halfway = dot.presented().unwrap();
        assert!((halfway.center.x - 37.0).abs() < 1e-4);
        assert!((halfway.scale - 1.5).abs() < 1e-4);

        dot.update(2.0);
        assert_eq!(dot.presented().unwrap(), target);
        assert!(!dot.is_animating());
    }

    #[test]
    fn test_new_animation_starts_from_presented_state() {
        let mut dot = attached_dot();
        let away = DotVisual::resting(pt2(0.0, 32.0), rgba(0.0, 0.0, 0.0, 1.0));
        dot.animate(away, 1.0, EasingType::Linear);
        dot.update(0.5);
        let interrupted = dot.presented().unwrap();

        let back = DotVisual::resting(pt2(32.0, 32.0), rgba(1.0, 1.0, 1.0, 1.0));
        dot.animate(back, 1.0, EasingType::Linear);
        dot.update(0.5);
        assert_eq!(dot.presented().unwrap(), interrupted);
    }

    #[test]
    fn test_zero_duration_snaps_immediately() {
        let mut dot = attached_dot();
        let target = DotVisual::resting(pt2(1.0, 1.0), rgba(0.0, 0.0, 0.0, 1.0));
        dot.animate(target, 0.0, EasingType::EaseInOut);
        assert_eq!(dot.presented().unwrap(), target);
        assert!(!dot.is_animating());
    }

    #[test]
    fn test_detached_dot_ignores_animation() {
        let mut dot = attached_dot();
        dot.detach();
        dot.animate(
            DotVisual::resting(pt2(1.0, 1.0), rgba(0.0, 0.0, 0.0, 1.0)),
            1.0,
            EasingType::Linear,
        );
        assert!(!dot.is_attached());
        assert!(!dot.is_animating());
    }
}
