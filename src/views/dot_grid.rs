// src/views/dot_grid.rs
//
// The DotGrid owns every cell of the widget.
//
// It fits cells into its bounds, rebuilds them whenever the bounds or the
// configuration change, and routes the pointer stream: the cell under the
// pointer follows it, every other cell is told the touch has ended.

use log::{debug, trace};
use nannou::prelude::*;

use crate::models::{fit_grid, Alignment, AxisFit, CellFrame, DotStyle, MotionConfig};
use crate::render::DotView;
use crate::views::DotCell;

pub const DEFAULT_SPACE_BETWEEN_CELLS: f32 = 64.0;

#[derive(Debug, Clone)]
pub struct GridConfig {
    pub space_between_cells: f32,
    pub alignment: Alignment,
    pub style: DotStyle,
    pub motion: MotionConfig,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            space_between_cells: DEFAULT_SPACE_BETWEEN_CELLS,
            alignment: Alignment::default(),
            style: DotStyle::default(),
            motion: MotionConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Began(Point2),
    Moved(Point2),
    Ended,
    Cancelled,
}

#[derive(Debug)]
pub struct DotGrid<V: DotView> {
    config: GridConfig,
    width: f32,
    height: f32,

    // column-major: all cells of width index 0 first
    cells: Vec<DotCell<V>>,
    columns: AxisFit,
    rows: AxisFit,
}

impl<V: DotView + Default> DotGrid<V> {
    pub fn new(config: GridConfig) -> Self {
        Self::with_bounds(config, 0.0, 0.0)
    }

    pub fn with_bounds(config: GridConfig, width: f32, height: f32) -> Self {
        let empty = AxisFit {
            count: 0,
            space: config.space_between_cells,
        };
        let mut grid = Self {
            config,
            width,
            height,
            cells: Vec::new(),
            columns: empty,
            rows: empty,
        };
        grid.relayout();
        grid
    }

    /************************** Layout **************************************** */

    /// Resizes the grid. Rebuilds the cells only if the size changed.
    pub fn set_bounds(&mut self, width: f32, height: f32) {
        if self.width == width && self.height == height {
            return;
        }
        self.width = width;
        self.height = height;
        self.relayout();
    }

    /// Replaces the configuration and rebuilds the cells.
    pub fn set_config(&mut self, config: GridConfig) {
        self.config = config;
        self.relayout();
    }

    /// Discards every cell and builds a fresh set for the current bounds.
    pub fn relayout(&mut self) {
        for cell in self.cells.iter_mut() {
            cell.detach();
        }
        self.cells.clear();

        let (columns, rows) = fit_grid(
            self.width,
            self.height,
            self.config.space_between_cells,
            self.config.alignment,
        );
        self.columns = columns;
        self.rows = rows;

        let alignment = self.config.alignment;
        let x_edges = axis_edges(columns, self.width, alignment);
        let y_edges = axis_edges(rows, self.height, alignment);

        self.cells.reserve(columns.count * rows.count);
        for x in x_edges.windows(2) {
            for y in y_edges.windows(2) {
                let frame = CellFrame::from_edges(x[0], y[0], x[1], y[1]);
                self.cells.push(DotCell::new(
                    frame,
                    self.config.style.clone(),
                    self.config.motion,
                    V::default(),
                ));
            }
        }

        debug!(
            "relayout {}x{} with spacing {} ({:?}): {}x{} cells of {}x{}",
            self.width,
            self.height,
            self.config.space_between_cells,
            self.config.alignment,
            columns.count,
            rows.count,
            columns.space,
            rows.space
        );
    }
}

// Cell boundaries along one axis. Neighbours share the same edge value, and
// the fill policies end exactly on the axis length.
fn axis_edges(fit: AxisFit, length: f32, alignment: Alignment) -> Vec<f32> {
    (0..=fit.count)
        .map(|index| {
            if index == fit.count && index > 0 && alignment != Alignment::Exact {
                length
            } else {
                index as f32 * fit.space
            }
        })
        .collect()
}

impl<V: DotView> DotGrid<V> {
    /************************** Pointer routing ******************************* */

    pub fn handle_pointer(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Began(point) | PointerEvent::Moved(point) => self.pointer_moved(point),
            PointerEvent::Ended | PointerEvent::Cancelled => self.pointer_ended(),
        }
    }

    fn pointer_moved(&mut self, point: Point2) {
        trace!("pointer moved to {:?}", point);
        for cell in self.cells.iter_mut() {
            if cell.frame().contains(point) {
                cell.pointer_moved(point);
            } else {
                cell.pointer_ended();
            }
        }
    }

    fn pointer_ended(&mut self) {
        trace!("pointer ended");
        for cell in self.cells.iter_mut() {
            cell.pointer_ended();
        }
    }

    /************************** Queries *************************************** */

    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    pub fn bounds(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    /// `(cells along the width, cells along the height)`.
    pub fn dimensions(&self) -> (usize, usize) {
        (self.columns.count, self.rows.count)
    }

    /// `(cell width, cell height)`.
    pub fn cell_size(&self) -> (f32, f32) {
        (self.columns.space, self.rows.space)
    }

    pub fn cells(&self) -> &[DotCell<V>] {
        &self.cells
    }

    pub fn cells_mut(&mut self) -> &mut [DotCell<V>] {
        &mut self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Cell `row` along the width and `column` along the height.
    pub fn cell_at(&self, row: usize, column: usize) -> Option<&DotCell<V>> {
        if row >= self.columns.count || column >= self.rows.count {
            return None;
        }
        self.cells.get(row * self.rows.count + column)
    }

    pub fn cell_index_at(&self, point: Point2) -> Option<usize> {
        self.cells
            .iter()
            .position(|cell| cell.frame().contains(point))
    }

    pub fn active_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_active()).count()
    }
}
