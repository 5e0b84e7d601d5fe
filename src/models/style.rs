// src/models/style.rs
//
// Per-dot look and feel, shared by every cell of a grid.

use nannou::prelude::*;
use std::fmt;
use std::sync::Arc;

pub const DEFAULT_DOT_DIAMETER: f32 = 8.0;
pub const DEFAULT_SPEED: f32 = 0.4;
pub const DEFAULT_ZOOM: f32 = 2.0;

pub fn default_rest_color() -> Rgba {
    rgba(128.0 / 255.0, 128.0 / 255.0, 128.0 / 255.0, 1.0)
}

pub fn default_active_color() -> Rgba {
    rgba(1.0 / 3.0, 1.0 / 3.0, 1.0 / 3.0, 1.0)
}

// Decoded image shown in place of the filled circle. Opaque to the grid.
#[derive(Clone)]
pub struct DotImage(Arc<wgpu::Texture>);

impl DotImage {
    pub fn new(texture: wgpu::Texture) -> Self {
        Self(Arc::new(texture))
    }

    pub fn texture(&self) -> &wgpu::Texture {
        &self.0
    }
}

impl fmt::Debug for DotImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("DotImage").finish()
    }
}

#[derive(Debug, Clone)]
pub struct DotStyle {
    pub diameter: f32,
    pub rest_color: Rgba,
    pub active_color: Rgba,
    pub image: Option<DotImage>,
}

impl Default for DotStyle {
    fn default() -> Self {
        Self {
            diameter: DEFAULT_DOT_DIAMETER,
            rest_color: default_rest_color(),
            active_color: default_active_color(),
            image: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionConfig {
    /// Seconds per container width travelled.
    pub speed: f32,
    /// Base scale applied while a dot follows the pointer.
    pub zoom: f32,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            speed: DEFAULT_SPEED,
            zoom: DEFAULT_ZOOM,
        }
    }
}

// What a dot looks like at one instant: where its centre is, how much it
// is scaled and how it is filled.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DotVisual {
    pub center: Point2,
    pub scale: f32,
    pub color: Rgba,
}

impl DotVisual {
    pub fn resting(center: Point2, color: Rgba) -> Self {
        Self {
            center,
            scale: 1.0,
            color,
        }
    }
}
