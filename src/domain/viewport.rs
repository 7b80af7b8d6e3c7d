use super::Cell;
use crate::error::ViewportError;

/// World units per grid cell
pub const DEFAULT_GRID_SPACING: f64 = 50.0;

/// Per-unit scroll zoom base; a wheel delta `d` zooms by `SCROLL_ZOOM_BASE^d`
pub const SCROLL_ZOOM_BASE: f64 = 1.01;

const DEFAULT_MIN_SCALE: f64 = 0.01;
const DEFAULT_MAX_SCALE: f64 = 100.0;

/// Viewport maps between screen space and world space.
///
/// `screen = pan + world * scale`. Scale is kept strictly positive and finite
/// so the mapping always stays invertible.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    scale: f64,
    pan_x: f64,
    pan_y: f64,
    grid_spacing: f64,
    min_scale: f64,
    max_scale: f64,
}

impl Viewport {
    pub fn new() -> Self {
        Self {
            scale: 1.0,
            pan_x: 0.0,
            pan_y: 0.0,
            grid_spacing: DEFAULT_GRID_SPACING,
            min_scale: DEFAULT_MIN_SCALE,
            max_scale: DEFAULT_MAX_SCALE,
        }
    }

    /// Viewport with a custom cell size in world units
    pub fn with_grid_spacing(grid_spacing: f64) -> Result<Self, ViewportError> {
        if !(grid_spacing.is_finite() && grid_spacing > 0.0) {
            return Err(ViewportError::InvalidGridSpacing(grid_spacing));
        }
        Ok(Self {
            grid_spacing,
            ..Self::new()
        })
    }

    /// Restrict how far zooming may go. The current scale is clamped into range.
    pub fn with_scale_bounds(mut self, min: f64, max: f64) -> Result<Self, ViewportError> {
        if !(min.is_finite() && max.is_finite() && min > 0.0 && min <= max) {
            return Err(ViewportError::InvalidScaleBounds { min, max });
        }
        self.min_scale = min;
        self.max_scale = max;
        self.scale = self.scale.clamp(min, max);
        Ok(self)
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn pan_x(&self) -> f64 {
        self.pan_x
    }

    pub fn pan_y(&self) -> f64 {
        self.pan_y
    }

    pub fn grid_spacing(&self) -> f64 {
        self.grid_spacing
    }

    pub fn scale_bounds(&self) -> (f64, f64) {
        (self.min_scale, self.max_scale)
    }

    pub fn screen_to_world_x(&self, screen_x: f64) -> f64 {
        (screen_x - self.pan_x) / self.scale
    }

    pub fn screen_to_world_y(&self, screen_y: f64) -> f64 {
        (screen_y - self.pan_y) / self.scale
    }

    pub fn world_to_screen_x(&self, world_x: f64) -> f64 {
        self.pan_x + world_x * self.scale
    }

    pub fn world_to_screen_y(&self, world_y: f64) -> f64 {
        self.pan_y + world_y * self.scale
    }

    /// Grid column containing `world_x`. Floors, so -1 lands in cell -1.
    pub fn world_to_grid_x(&self, world_x: f64) -> i64 {
        (world_x / self.grid_spacing).floor() as i64
    }

    /// Grid row containing `world_y`
    pub fn world_to_grid_y(&self, world_y: f64) -> i64 {
        (world_y / self.grid_spacing).floor() as i64
    }

    /// Cell under a screen point
    pub fn screen_to_cell(&self, screen_x: f64, screen_y: f64) -> Cell {
        Cell::new(
            self.world_to_grid_x(self.screen_to_world_x(screen_x)),
            self.world_to_grid_y(self.screen_to_world_y(screen_y)),
        )
    }

    /// Screen position of a cell's top-left corner
    pub fn cell_to_screen(&self, cell: Cell) -> (f64, f64) {
        (
            self.world_to_screen_x(cell.x as f64 * self.grid_spacing),
            self.world_to_screen_y(cell.y as f64 * self.grid_spacing),
        )
    }

    /// On-screen edge length of one cell
    pub fn cell_screen_size(&self) -> f64 {
        self.grid_spacing * self.scale
    }

    /// Inclusive cell range covering a `width` x `height` screen rectangle.
    /// Rounds outwards so partially visible cells are included.
    pub fn visible_cells(&self, width: f64, height: f64) -> (Cell, Cell) {
        let min = Cell::new(
            self.world_to_grid_x(self.screen_to_world_x(0.0)),
            self.world_to_grid_y(self.screen_to_world_y(0.0)),
        );
        let max = Cell::new(
            (self.screen_to_world_x(width) / self.grid_spacing).ceil() as i64,
            (self.screen_to_world_y(height) / self.grid_spacing).ceil() as i64,
        );
        (min, max)
    }

    /// Pan camera (drag)
    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        self.pan_x += dx;
        self.pan_y += dy;
    }

    /// Zoom by `zoom_factor` keeping the world point under
    /// (`screen_x`, `screen_y`) fixed on screen.
    ///
    /// Non-finite or non-positive factors are rejected and leave the viewport
    /// unchanged. The resulting scale is clamped to the scale bounds.
    pub fn zoom_at(
        &mut self,
        screen_x: f64,
        screen_y: f64,
        zoom_factor: f64,
    ) -> Result<(), ViewportError> {
        if !(zoom_factor.is_finite() && zoom_factor > 0.0) {
            tracing::warn!(zoom_factor, "rejected zoom factor");
            return Err(ViewportError::InvalidZoomFactor(zoom_factor));
        }

        let world_x = self.screen_to_world_x(screen_x);
        let world_y = self.screen_to_world_y(screen_y);

        self.scale = (self.scale * zoom_factor).clamp(self.min_scale, self.max_scale);

        self.pan_x += screen_x - self.world_to_screen_x(world_x);
        self.pan_y += screen_y - self.world_to_screen_y(world_y);

        tracing::debug!(scale = self.scale, pan_x = self.pan_x, pan_y = self.pan_y, "zoomed");
        Ok(())
    }

    /// Zoom factor for a scroll wheel delta
    pub fn zoom_factor_for_scroll(delta: f64) -> f64 {
        SCROLL_ZOOM_BASE.powf(delta)
    }

    /// Reset pan and zoom, keeping spacing and bounds
    pub fn reset(&mut self) {
        self.pan_x = 0.0;
        self.pan_y = 0.0;
        self.scale = 1.0_f64.clamp(self.min_scale, self.max_scale);
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new()
    }
}
