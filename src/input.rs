use crate::render::{MAX_CELL_PX, MIN_CELL_PX, ZOOM_FACTOR_STEP};
use crate::state::State;
use winit::{
    dpi::PhysicalPosition,
    event::{ElementState, KeyEvent, MouseButton},
    keyboard::{Key, NamedKey},
};

pub fn handle_zoom(state: &mut State, delta: f32) {
    let old_px = state.cell_px;
    let zoom_factor = if delta > 0.0 {
        ZOOM_FACTOR_STEP
    } else {
        1.0 / ZOOM_FACTOR_STEP
    };
    let new_px = (old_px * zoom_factor).clamp(MIN_CELL_PX, MAX_CELL_PX);

    if (new_px - old_px).abs() < f32::EPSILON {
        return;
    }

    if let Some(cursor_pos) = state.cursor_pos {
        let cursor_screen_x = cursor_pos.x as f32;
        let cursor_screen_y = cursor_pos.y as f32;

        // Keep the grid point under the cursor fixed across the zoom
        let world_x = (cursor_screen_x + state.view_offset[0]) / old_px;
        let world_y = (cursor_screen_y + state.view_offset[1]) / old_px;
        state.view_offset[0] = world_x * new_px - cursor_screen_x;
        state.view_offset[1] = world_y * new_px - cursor_screen_y;
    }

    state.cell_px = new_px;
    clamp_offset(state);

    log::info!("Cell size: {:.2}px, Offset: [{:.1}, {:.1}]", state.cell_px, state.view_offset[0], state.view_offset[1]);

    state.write_render_params();
}

pub fn handle_mouse_input(state: &mut State, button: MouseButton, element_state: ElementState) {
    let is_pressed = element_state == ElementState::Pressed;
    match button {
        MouseButton::Right => {
            state.is_right_mouse_pressed = is_pressed;
            if !is_pressed {
                state.last_mouse_pos = None;
            }
        }
        MouseButton::Left if is_pressed => {
            if let Some(pos) = state.cursor_pos {
                state.toggle_cell_at(pos);
            }
        }
        _ => {}
    }
}

pub fn handle_cursor_move(state: &mut State, position: PhysicalPosition<f64>) {
    state.cursor_pos = Some(position);

    if state.is_right_mouse_pressed {
        if let Some(last_pos) = state.last_mouse_pos {
            // Subtracting the screen delta makes the view move with the cursor drag.
            state.view_offset[0] -= (position.x - last_pos.x) as f32;
            state.view_offset[1] -= (position.y - last_pos.y) as f32;
            clamp_offset(state);
            state.write_render_params();
        }
        state.last_mouse_pos = Some(position);
    } else {
        state.last_mouse_pos = None;
    }
}

pub fn handle_cursor_left(state: &mut State) {
    state.cursor_pos = None;
    // Keep is_right_mouse_pressed so a drag survives the cursor briefly leaving
    state.last_mouse_pos = None;
}

pub fn handle_key(state: &mut State, event: &KeyEvent) {
    if event.state != ElementState::Pressed || event.repeat {
        return;
    }
    match &event.logical_key {
        Key::Named(NamedKey::Space) => state.session.toggle_running(),
        Key::Character(c) => match c.as_str() {
            "s" | "S" => state.step_once(),
            "r" | "R" => state.randomize(),
            "c" | "C" => state.clear(),
            "m" | "M" => state.menu_open = !state.menu_open,
            _ => {}
        },
        _ => {}
    }
}

// Clamp view_offset so the visible area never moves outside the grid
fn clamp_offset(state: &mut State) {
    let (width, height) = state.session.grid().dimensions();
    state.view_offset = clamped_offset(
        state.view_offset,
        state.cell_px,
        (width, height),
        (state.size.width, state.size.height),
    );
}

fn clamped_offset(offset: [f32; 2], cell_px: f32, grid: (usize, usize), window: (u32, u32)) -> [f32; 2] {
    // If the grid is smaller than the window along an axis, limit stays 0
    let max_x = (grid.0 as f32 * cell_px - window.0 as f32).max(0.0);
    let max_y = (grid.1 as f32 * cell_px - window.1 as f32).max(0.0);
    [offset[0].clamp(0.0, max_x), offset[1].clamp(0.0, max_y)]
}
