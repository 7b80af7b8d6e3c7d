use macroquad::prelude::*;
use sparse_life::{GameState, Settings, Viewport, input, rendering};
use tracing_subscriber::EnvFilter;

fn window_conf() -> Conf {
    Conf {
        window_title: "GOL".to_owned(),
        window_width: 800,
        window_height: 600,
        window_resizable: true,
        ..Default::default()
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}

/// Viewport from settings, falling back to defaults on bad values
fn build_viewport(settings: &Settings) -> Viewport {
    Viewport::with_grid_spacing(settings.grid_spacing)
        .and_then(|vp| vp.with_scale_bounds(settings.min_scale, settings.max_scale))
        .unwrap_or_else(|err| {
            tracing::warn!(%err, "invalid viewport settings, using defaults");
            Viewport::new()
        })
}

#[macroquad::main(window_conf)]
async fn main() {
    // Load .env locally; safe to ignore when not present.
    let _ = dotenvy::dotenv();
    init_tracing();

    let settings = Settings::from_env();
    let mut viewport = build_viewport(&settings);
    let mut state = GameState::new(settings);
    let mut input_state = input::InputState::new();
    let mut rng = ::rand::rng();

    tracing::info!(running = state.is_running, "simulator started");

    loop {
        let mouse_pos = mouse_position();

        // Process input
        input::handle_zoom(&mut viewport, mouse_pos, state.settings.zoom_base);
        input::handle_pan(&mut viewport, &mut input_state, mouse_pos);
        input::handle_mouse_paint(&mut state, &viewport, mouse_pos);
        state = input::process_keyboard_input(state, &mut viewport, mouse_pos, &mut rng);

        // Update game state
        state = state.tick(get_frame_time());

        // Render (with timing)
        let render_start = std::time::Instant::now();
        clear_background(BLACK);
        rendering::draw_grid(&state.grid, &viewport, state.settings.grid_line_min_scale);
        rendering::draw_hud(&state, &viewport);
        state.last_render_time_ms = render_start.elapsed().as_secs_f32() * 1000.0;

        next_frame().await;
    }
}
