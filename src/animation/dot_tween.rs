// src/animation/dot_tween.rs
//
// A single timed transition of a dot's centre, scale and colour.
// Starting a new tween replaces the old one; the new tween begins from
// whatever the old one was showing at that moment.

use crate::animation::EasingType;
use crate::models::DotVisual;
use crate::utilities::lerp_color;

#[derive(Debug, Clone)]
pub struct DotTween {
    from: DotVisual,
    to: DotVisual,
    start_time: f32,
    duration: f32,
    easing: EasingType,
}

impl DotTween {
    pub fn new(
        from: DotVisual,
        to: DotVisual,
        start_time: f32,
        duration: f32,
        easing: EasingType,
    ) -> Self {
        Self {
            from,
            to,
            start_time,
            duration: duration.max(0.0),
            easing,
        }
    }

    pub fn progress(&self, time: f32) -> f32 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        ((time - self.start_time) / self.duration).clamp(0.0, 1.0)
    }

    pub fn sample(&self, time: f32) -> DotVisual {
        let t = self.progress(time);
        if t >= 1.0 {
            return self.to;
        }
        // Springs overshoot, so the eased value is not clamped. Colour is.
        let eased = self.easing.for_duration(self.duration).apply(t);
        DotVisual {
            center: self.from.center.lerp(self.to.center, eased),
            scale: self.from.scale + (self.to.scale - self.from.scale) * eased,
            color: lerp_color(self.from.color, self.to.color, eased.clamp(0.0, 1.0)),
        }
    }

    pub fn is_complete(&self, time: f32) -> bool {
        self.progress(time) >= 1.0
    }

    pub fn target(&self) -> DotVisual {
        self.to
    }

    pub fn duration(&self) -> f32 {
        self.duration
    }

    pub fn easing(&self) -> EasingType {
        self.easing
    }
}
