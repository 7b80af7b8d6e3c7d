// Domain layer - Life engine and viewport transforms
pub mod domain;
pub mod error;

// Application layer - Driver state and settings
pub mod application;

// Infrastructure layer - macroquad input and rendering
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{Cell, LiveSet, Pattern, SimulationGrid, Viewport, presets};
pub use application::{GameState, Settings};
pub use error::ViewportError;
