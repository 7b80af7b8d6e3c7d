use macroquad::prelude::*;

use crate::application::GameState;
use crate::domain::{SimulationGrid, Viewport};

/// Format large numbers with K/M/B suffixes
fn format_number(n: usize) -> String {
    if n >= 1_000_000_000 {
        format!("{:.1}B", n as f64 / 1_000_000_000.0)
    } else if n >= 1_000_000 {
        format!("{:.1}M", n as f64 / 1_000_000.0)
    } else if n >= 1_000 {
        format!("{:.1}K", n as f64 / 1_000.0)
    } else {
        format!("{}", n)
    }
}

/// Draw live cells that intersect the screen, then grid lines on top
pub fn draw_grid(grid: &SimulationGrid, viewport: &Viewport, grid_line_min_scale: f64) {
    let width = f64::from(screen_width());
    let height = f64::from(screen_height());
    let cell_size = viewport.cell_screen_size();

    let alive_color = WHITE;
    let grid_line_color = LIGHTGRAY;

    for &cell in grid.iter() {
        let (x, y) = viewport.cell_to_screen(cell);

        // Skip if outside viewport
        if x + cell_size <= 0.0 || x >= width || y + cell_size <= 0.0 || y >= height {
            continue;
        }
        draw_rectangle(x as f32, y as f32, cell_size as f32, cell_size as f32, alive_color);
    }

    // Lines get too dense to read when zoomed far out
    if viewport.scale() <= grid_line_min_scale {
        return;
    }

    let (min, max) = viewport.visible_cells(width, height);
    let spacing = viewport.grid_spacing();

    for gx in min.x..=max.x {
        let x = viewport.world_to_screen_x(gx as f64 * spacing) as f32;
        draw_line(x, 0.0, x, height as f32, 0.5, grid_line_color);
    }
    for gy in min.y..=max.y {
        let y = viewport.world_to_screen_y(gy as f64 * spacing) as f32;
        draw_line(0.0, y, width as f32, y, 0.5, grid_line_color);
    }
}

/// Helper to draw text labels
fn draw_text_label(text: &str, x: f32, y: f32, size: f32, color: Color) {
    draw_text(text, x, y, size, color);
}

/// Draw the status overlay in the top-left corner
pub fn draw_hud(state: &GameState, viewport: &Viewport) {
    let panel = Color::from_rgba(30, 30, 30, 200);
    draw_rectangle(0.0, 0.0, 260.0, 176.0, panel);

    let status_color = if state.is_running {
        Color::from_rgba(0, 255, 0, 255)
    } else {
        Color::from_rgba(255, 165, 0, 255)
    };

    // Color code the step time
    let step_ms = state.last_step_time_ms;
    let perf_color = if step_ms < 5.0 {
        Color::from_rgba(0, 255, 0, 255)
    } else if step_ms < 33.0 {
        Color::from_rgba(255, 255, 0, 255)
    } else {
        Color::from_rgba(255, 0, 0, 255)
    };

    let labels = [
        (
            if state.is_running { "Running".to_string() } else { "Paused".to_string() },
            16.0,
            18.0,
            status_color,
        ),
        (format!("Generation: {}", state.generation), 14.0, 38.0, WHITE),
        (
            format!("Population: {}", format_number(state.grid.population())),
            14.0,
            56.0,
            WHITE,
        ),
        (format!("Speed: {:.0} gen/s", state.steps_per_second), 14.0, 74.0, GRAY),
        (format!("Zoom: {:.2}x", viewport.scale()), 14.0, 92.0, GRAY),
        (format!("Step: {:.1}ms", step_ms), 13.0, 110.0, perf_color),
        (
            format!("Render: {:.1}ms | FPS: {}", state.last_render_time_ms, get_fps()),
            13.0,
            126.0,
            GRAY,
        ),
        (
            "Enter run  Space seed  Bksp clear".to_string(),
            12.0,
            142.0,
            Color::from_rgba(150, 150, 150, 255),
        ),
    ];

    labels.iter().for_each(|(text, size, y, color)| {
        draw_text_label(text, 8.0, *y, *size, *color);
    });

    if let Some(pattern) = state.last_pattern() {
        let text = format!("{}: {}", pattern.name, pattern.description);
        draw_text_label(&text, 8.0, 168.0, 12.0, Color::from_rgba(0, 255, 150, 255));
    }
}
