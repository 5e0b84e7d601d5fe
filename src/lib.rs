// src/lib.rs
//
// dotgrid: a grid of dots that lean towards the pointer and spring back.

pub mod animation;
pub mod config;
pub mod models;
pub mod render;
pub mod utilities;
pub mod views;

pub use models::{fit_axis, Alignment, AxisFit};
pub use render::{AnimatedDot, DotView};
pub use views::{DotCell, DotGrid, GridConfig, PointerEvent};
