// src/animation/easing.rs
//
// Timing curves for dot animations. Every curve maps normalised time
// 0.0..=1.0 onto progress, with 0.0 at the start and 1.0 at the end.

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EasingType {
    Linear,
    EaseInOut,
    EaseIn,
    EaseOut,
    /// Damped spring that settles on the target at t = 1.0.
    ///
    /// `initial_velocity` is in total distances per second: 1.0 covers the
    /// whole distance in one second. Use [`EasingType::for_duration`] before
    /// sampling over a real duration.
    Spring {
        damping_ratio: f32,
        initial_velocity: f32,
    },
}

// Envelope decay reached at t = 1.0 (e^-6.9 ~ 0.001).
const SPRING_SETTLE: f32 = 6.9;

impl EasingType {
    /// Rescales per-second quantities to a timeline of `duration` seconds.
    pub fn for_duration(self, duration: f32) -> Self {
        match self {
            EasingType::Spring {
                damping_ratio,
                initial_velocity,
            } => EasingType::Spring {
                damping_ratio,
                initial_velocity: initial_velocity * duration,
            },
            other => other,
        }
    }

    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match *self {
            EasingType::Linear => t,
            EasingType::EaseInOut => ease_in_out(t),
            EasingType::EaseIn => ease_in(t),
            EasingType::EaseOut => ease_out(t),
            EasingType::Spring {
                damping_ratio,
                initial_velocity,
            } => spring(t, damping_ratio, initial_velocity),
        }
    }
}

fn ease_in_out(t: f32) -> f32 {
    if t < 0.5 {
        2.0 * t * t
    } else {
        -1.0 + (4.0 - 2.0 * t) * t
    }
}

fn ease_in(t: f32) -> f32 {
    t * t
}

fn ease_out(t: f32) -> f32 {
    t * (2.0 - t)
}

// Unit step response of a damped harmonic oscillator. The natural
// frequency is picked so the envelope has decayed by t = 1.0.
fn spring(t: f32, damping_ratio: f32, initial_velocity: f32) -> f32 {
    if t >= 1.0 {
        return 1.0;
    }
    let zeta = damping_ratio.clamp(0.05, 0.999);
    let omega = SPRING_SETTLE / zeta;
    let decay = zeta * omega;
    let omega_d = omega * (1.0 - zeta * zeta).sqrt();
    // displacement from target starts at 1.0, moving toward it at initial_velocity
    let b = (decay - initial_velocity) / omega_d;
    let displacement = (-decay * t).exp() * ((omega_d * t).cos() + b * (omega_d * t).sin());
    1.0 - displacement
}

#[cfg(test)]
mod tests {
    use super::*;

    const SPRING: EasingType = EasingType::Spring {
        damping_ratio: 0.8,
        initial_velocity: 0.2,
    };

    #[test]
    fn test_curves_hit_endpoints() {
        for easing in [
            EasingType::Linear,
            EasingType::EaseInOut,
            EasingType::EaseIn,
            EasingType::EaseOut,
            SPRING,
        ] {
            assert!(easing.apply(0.0).abs() < 1e-6, "{:?} at 0", easing);
            assert!((easing.apply(1.0) - 1.0).abs() < 1e-6, "{:?} at 1", easing);
        }
    }

    #[test]
    fn test_ease_in_out_is_symmetric() {
        let easing = EasingType::EaseInOut;
        assert!((easing.apply(0.5) - 0.5).abs() < 1e-6);
        assert!((easing.apply(0.25) + easing.apply(0.75) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_out_of_range_time_is_clamped() {
        assert_eq!(EasingType::Linear.apply(-1.0), 0.0);
        assert_eq!(EasingType::Linear.apply(3.0), 1.0);
    }

    #[test]
    fn test_spring_is_close_before_the_end() {
        let progress = SPRING.apply(0.9);
        assert!((progress - 1.0).abs() < 0.01);
    }

    #[test]
    fn test_spring_velocity_scales_with_duration() {
        let scaled = SPRING.for_duration(2.0);
        assert_eq!(
            scaled,
            EasingType::Spring {
                damping_ratio: 0.8,
                initial_velocity: 0.4
            }
        );
        // a faster start leaves the dot further along early on
        assert!(scaled.apply(0.05) > SPRING.for_duration(0.5).apply(0.05));
        assert_eq!(EasingType::EaseInOut.for_duration(3.0), EasingType::EaseInOut);
    }

    #[test]
    fn test_underdamped_spring_overshoots() {
        let bouncy = EasingType::Spring {
            damping_ratio: 0.3,
            initial_velocity: 0.0,
        };
        let peak = (1..100)
            .map(|i| bouncy.apply(i as f32 / 100.0))
            .fold(0.0f32, f32::max);
        assert!(peak > 1.0);
    }
}
