pub mod dot_tween;
pub mod easing;

pub use dot_tween::DotTween;
pub use easing::EasingType;

/// Curve used when a dot chases the pointer.
pub const FOLLOW_EASING: EasingType = EasingType::EaseInOut;

/// Curve used when a dot springs back to rest.
pub const RETURN_EASING: EasingType = EasingType::Spring {
    damping_ratio: 0.8,
    initial_velocity: 0.2,
};

/// The return animation runs this many times slower than the follow.
pub const RETURN_SLOWDOWN: f32 = 4.0;
