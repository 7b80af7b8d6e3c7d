use rand::Rng;

use super::Settings;
use crate::domain::{Cell, Pattern, SimulationGrid, presets};

/// GameState orchestrates the simulation.
/// This is the application layer: it decides when the domain grid steps.
pub struct GameState {
    pub grid: SimulationGrid,
    pub settings: Settings,
    pub is_running: bool,
    pub generation: u64,
    pub update_timer: f32,
    pub steps_per_second: f32,
    pub last_step_time_ms: f32,    // Step performance metric
    pub last_render_time_ms: f32,  // Render performance metric
    /// Presets available for stamping, in hotkey order
    pub patterns: Vec<Pattern>,
    /// Index into `patterns` of the most recently stamped preset
    pub last_pattern: Option<usize>,
}

impl GameState {
    /// Create a new game state with an empty grid
    pub fn new(settings: Settings) -> Self {
        let steps_per_second = if settings.steps_per_second.is_finite() {
            settings.steps_per_second.clamp(1.0, 60.0)
        } else {
            Settings::default().steps_per_second
        };
        Self {
            grid: SimulationGrid::new(),
            is_running: settings.start_running,
            generation: 0,
            update_timer: 0.0,
            steps_per_second,
            last_step_time_ms: 0.0,
            last_render_time_ms: 0.0,
            patterns: presets::all_patterns(),
            last_pattern: None,
            settings,
        }
    }

    /// Set running state (builder pattern)
    pub fn with_running(mut self, running: bool) -> Self {
        self.is_running = running;
        self
    }

    /// Toggle play/pause state
    pub fn toggle_running(mut self) -> Self {
        self.is_running = !self.is_running;
        tracing::info!(running = self.is_running, "simulation toggled");
        self
    }

    /// Clear grid and reset generation counter
    pub fn clear(mut self) -> Self {
        self.grid.clear();
        self.generation = 0;
        self
    }

    /// Adjust simulation speed
    pub fn adjust_speed(mut self, delta: f32) -> Self {
        self.steps_per_second = (self.steps_per_second + delta).clamp(1.0, 60.0);
        self
    }

    /// Seed a random square around `center` using the configured size and density
    pub fn seed_at<R: Rng + ?Sized>(&mut self, center: Cell, rng: &mut R) {
        self.grid.seed_region(
            center,
            self.settings.seed_size,
            self.settings.seed_density,
            rng,
        );
    }

    /// Paint the brush at `center`
    pub fn brush_at(&mut self, center: Cell) {
        self.grid.create_brush(center);
    }

    /// Stamp preset `index` centred on `center`; returns the placed pattern
    pub fn place_pattern(&mut self, index: usize, center: Cell) -> Option<&Pattern> {
        let pattern = self.patterns.get(index)?;
        pattern.place_on(&mut self.grid, pattern.centered_on(center));
        tracing::info!(pattern = pattern.name, description = pattern.description, ?center, "preset stamped");
        self.last_pattern = Some(index);
        Some(pattern)
    }

    /// Most recently stamped preset
    pub fn last_pattern(&self) -> Option<&Pattern> {
        self.last_pattern.and_then(|i| self.patterns.get(i))
    }

    /// Advance exactly one generation, regardless of the running flag
    pub fn step_once(&mut self) {
        let start = std::time::Instant::now();
        self.grid.step();
        self.last_step_time_ms = start.elapsed().as_secs_f32() * 1000.0;
        self.generation += 1;
    }

    /// Update simulation by one frame.
    /// Steps at most once per frame; leftover time carries into the next interval.
    pub fn tick(mut self, delta_time: f32) -> Self {
        if !self.is_running {
            return self;
        }

        self.update_timer += delta_time;
        let update_interval = 1.0 / self.steps_per_second;

        if self.update_timer >= update_interval {
            self.step_once();
            // a long stall should not trigger a burst of catch-up steps
            self.update_timer = (self.update_timer - update_interval).min(update_interval);
        }

        self
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}
