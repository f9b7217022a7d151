use std::time::Duration;

use life_toy::Pattern;

use crate::state::State;

/// Build the egui overlay for this frame and apply whatever the user clicked.
pub fn show(ctx: &egui::Context, state: &mut State) {
    // Use an Area for the menu button, positioned top-left
    egui::Area::new(egui::Id::new("menu_button_area"))
        .anchor(egui::Align2::LEFT_TOP, egui::vec2(5.0, 5.0))
        .show(ctx, |ui| {
            if ui.button("☰").clicked() {
                state.menu_open = !state.menu_open;
            }
        });

    if !state.menu_open {
        return;
    }

    let panel_frame = egui::Frame {
        fill: egui::Color32::from_rgba_unmultiplied(25, 25, 25, 100), // Dark grey, ~40% opaque
        ..egui::Frame::side_top_panel(&ctx.style())
    };

    egui::SidePanel::left("side_panel")
        .frame(panel_frame)
        .resizable(true)
        .default_width(200.0)
        .show(ctx, |ui| {
            ui.heading("Game of Life");
            ui.separator();

            ui.horizontal(|ui| {
                let label = if state.session.is_running() { "Pause" } else { "Play" };
                if ui.button(label).clicked() {
                    state.session.toggle_running();
                }
                if ui.button("Step").clicked() {
                    state.step_once();
                }
            });
            ui.horizontal(|ui| {
                if ui.button("Randomize").clicked() {
                    state.randomize();
                }
                if ui.button("Clear").clicked() {
                    state.clear();
                }
            });

            let mut density = state.session.density();
            if ui
                .add(egui::Slider::new(&mut density, 0.0..=1.0).text("Density"))
                .changed()
            {
                if let Err(e) = state.session.set_density(density) {
                    log::warn!("{e}");
                }
            }

            let mut tick_ms = state.session.tick_interval().as_millis() as u64;
            if ui
                .add(egui::Slider::new(&mut tick_ms, 10..=1000).text("Tick (ms)"))
                .changed()
            {
                state.session.set_tick_interval(Duration::from_millis(tick_ms));
            }
            ui.separator();

            ui.label("Patterns:");
            for pattern in Pattern::ALL {
                if ui.button(pattern.name()).clicked() {
                    state.load_pattern(pattern);
                }
            }
            ui.separator();

            let grid = state.session.grid();
            let (width, height) = grid.dimensions();
            ui.label(format!("Generation: {}", state.session.generation()));
            ui.label(format!("Live Cells: {}", grid.live_count()));
            ui.label(format!("Grid: {}x{}", width, height));
            ui.label(format!("Cell size: {:.1}px", state.cell_px));
            if state.session.is_stable() {
                ui.label("Stable");
            }
            ui.separator();
            ui.small("Space: play/pause  S: step  R: randomize  C: clear");
        });
}
