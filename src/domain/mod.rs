mod cell;
mod grid;
mod patterns;
mod viewport;

pub use cell::{Cell, NEIGHBOR_OFFSETS};
pub use grid::{LiveSet, SimulationGrid};
pub use patterns::{Pattern, presets};
pub use viewport::{Viewport, DEFAULT_GRID_SPACING, SCROLL_ZOOM_BASE};
