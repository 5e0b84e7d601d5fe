pub mod alignment;
pub mod geometry;
pub mod style;

pub use alignment::{fit_axis, fit_grid, Alignment, AxisFit};
pub use geometry::{grid_to_window, window_to_grid, CellFrame};
pub use style::{DotImage, DotStyle, DotVisual, MotionConfig};
