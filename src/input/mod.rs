use macroquad::prelude::*;
use ::rand::Rng;

use crate::application::GameState;
use crate::domain::Viewport;

/// Wheel units per notch; with the default 1.01 base one notch zooms ~10%
const SCROLL_NOTCH: f64 = 10.0;

/// Hotkeys for `GameState::patterns`, in order
const PRESET_KEYS: [KeyCode; 10] = [
    KeyCode::Key1,
    KeyCode::Key2,
    KeyCode::Key3,
    KeyCode::Key4,
    KeyCode::Key5,
    KeyCode::Key6,
    KeyCode::Key7,
    KeyCode::Key8,
    KeyCode::Key9,
    KeyCode::Key0,
];

/// Mouse state carried between frames
#[derive(Default)]
pub struct InputState {
    /// Cursor position on the previous frame of a middle-button drag
    drag_anchor: Option<(f32, f32)>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Handle zoom with mouse wheel, anchored at the cursor
pub fn handle_zoom(viewport: &mut Viewport, mouse_pos: (f32, f32), zoom_base: f64) {
    let wheel = mouse_wheel().1;
    if wheel == 0.0 {
        return;
    }

    let delta = f64::from(wheel.signum()) * SCROLL_NOTCH;
    let factor = zoom_base.powf(delta);
    if let Err(err) = viewport.zoom_at(f64::from(mouse_pos.0), f64::from(mouse_pos.1), factor) {
        tracing::debug!(%err, "scroll ignored");
    }
}

/// Handle pan with middle mouse button drag
pub fn handle_pan(viewport: &mut Viewport, input: &mut InputState, mouse_pos: (f32, f32)) {
    if !is_mouse_button_down(MouseButton::Middle) {
        input.drag_anchor = None;
        return;
    }

    if let Some(last) = input.drag_anchor {
        let dx = mouse_pos.0 - last.0;
        let dy = mouse_pos.1 - last.1;
        viewport.pan_by(f64::from(dx), f64::from(dy));
    }
    input.drag_anchor = Some(mouse_pos);
}

/// Left click paints a brush, right click erases the cell under the cursor
pub fn handle_mouse_paint(state: &mut GameState, viewport: &Viewport, mouse_pos: (f32, f32)) {
    let cell = viewport.screen_to_cell(f64::from(mouse_pos.0), f64::from(mouse_pos.1));

    if is_mouse_button_pressed(MouseButton::Left) {
        state.brush_at(cell);
    } else if is_mouse_button_pressed(MouseButton::Right) {
        state.grid.remove_cell(cell);
    }
}

/// Process keyboard input functionally
pub fn process_keyboard_input<R: Rng + ?Sized>(
    state: GameState,
    viewport: &mut Viewport,
    mouse_pos: (f32, f32),
    rng: &mut R,
) -> GameState {
    type KeyAction = (KeyCode, fn(GameState) -> GameState);

    let actions: [KeyAction; 5] = [
        (KeyCode::Enter, GameState::toggle_running),
        (KeyCode::Backspace, GameState::clear),
        (KeyCode::Up, |s| s.adjust_speed(1.0)),
        (KeyCode::Down, |s| s.adjust_speed(-1.0)),
        (KeyCode::N, |mut s| {
            s.step_once();
            s
        }),
    ];

    let mut new_state = actions.iter().fold(state, |s, (key, action)| {
        if is_key_pressed(*key) { action(s) } else { s }
    });

    // Random soup under the cursor
    if is_key_pressed(KeyCode::Space) {
        let center = viewport.screen_to_cell(f64::from(mouse_pos.0), f64::from(mouse_pos.1));
        new_state.seed_at(center, rng);
    }

    // Digit keys stamp presets centred under the cursor
    if let Some(index) = PRESET_KEYS.iter().position(|key| is_key_pressed(*key)) {
        let center = viewport.screen_to_cell(f64::from(mouse_pos.0), f64::from(mouse_pos.1));
        new_state.place_pattern(index, center);
    }

    // Reset view with 'H' (home)
    if is_key_pressed(KeyCode::H) {
        viewport.reset();
    }

    new_state
}
