// src/views/mod.rs

pub mod dot_cell;
pub mod dot_grid;

pub use dot_cell::{CellState, DotCell};
pub use dot_grid::{DotGrid, GridConfig, PointerEvent, DEFAULT_SPACE_BETWEEN_CELLS};
