// Declare the viewer's modules directly in the binary crate root
pub mod input;
pub mod render;
pub mod state;
pub mod ui;

use crate::render::DEFAULT_CELL_PX;
use crate::state::State;
use life_toy::{Session, SimConfig};

use winit::{
    event::{Event, MouseScrollDelta, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
    window::Window,
};
use std::sync::Arc;

async fn run(event_loop: EventLoop<()>, window: Arc<Window>, session: Session) {
    let mut state = State::new(window, session).await;

    event_loop.run(move |event, window_target| {
        window_target.set_control_flow(ControlFlow::Poll);

        match event {
            Event::WindowEvent { window_id, ref event }
                if window_id == state.window.id() =>
            {
                // Pass window-specific events to egui_winit FIRST
                let response = state.egui_winit_state.on_window_event(&state.window, event);

                if response.repaint {
                    state.window.request_redraw();
                }

                // If egui consumed the event, skip further processing for this event
                // unless it was a Resize event, which the viewer needs to handle regardless.
                let consumed_by_egui = response.consumed && !matches!(event, WindowEvent::Resized(_));

                if consumed_by_egui {
                    return;
                }

                match event {
                    WindowEvent::CloseRequested => {
                        window_target.exit();
                    }
                    WindowEvent::Resized(new_size) => {
                        state.resize(*new_size);
                    }
                    WindowEvent::KeyboardInput { event: key_event, .. } => {
                        input::handle_key(&mut state, key_event);
                    }
                    WindowEvent::MouseInput { state: element_state, button, .. } => {
                        input::handle_mouse_input(&mut state, *button, *element_state);
                    }
                    WindowEvent::CursorMoved { position, .. } => {
                        input::handle_cursor_move(&mut state, *position);
                    }
                    WindowEvent::CursorLeft { .. } => {
                        input::handle_cursor_left(&mut state);
                    }
                    WindowEvent::MouseWheel { delta, .. } => {
                        let scroll_amount = match delta {
                            MouseScrollDelta::LineDelta(_, y) => *y,
                            MouseScrollDelta::PixelDelta(pos) => (pos.y / 20.0) as f32,
                        };
                        if scroll_amount != 0.0 {
                            input::handle_zoom(&mut state, scroll_amount);
                        }
                    }
                    WindowEvent::RedrawRequested => {
                        // Advance the simulation clock and draw the grid
                        let output_frame = match state.update_and_render() {
                            Ok(frame) => frame,
                            Err(e) => {
                                // Lost was already handled by reconfiguring; skip this frame either way
                                log::warn!("Skipping frame due to surface {:?}", e);
                                state.window.request_redraw();
                                return;
                            }
                        };

                        let output_view = output_frame.texture.create_view(&wgpu::TextureViewDescriptor::default());

                        // Begin egui frame
                        let raw_input = state.egui_winit_state.take_egui_input(&state.window);
                        state.egui_ctx.begin_frame(raw_input);

                        let ctx = state.egui_ctx.clone();
                        ui::show(&ctx, &mut state);

                        // End egui frame
                        let full_output = state.egui_ctx.end_frame();
                        let paint_jobs = state.egui_ctx.tessellate(full_output.shapes, state.window.scale_factor() as f32);
                        let screen_descriptor = egui_wgpu::ScreenDescriptor {
                            size_in_pixels: [state.config.width, state.config.height],
                            pixels_per_point: state.window.scale_factor() as f32,
                        };

                        // Upload egui data to GPU
                        let mut encoder = state.device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
                            label: Some("egui Encoder"),
                        });
                        for (id, image_delta) in &full_output.textures_delta.set {
                            state.egui_renderer.update_texture(&state.device, &state.queue, *id, image_delta);
                        }
                        let _tdelta = state.egui_renderer.update_buffers(
                            &state.device,
                            &state.queue,
                            &mut encoder,
                            &paint_jobs,
                            &screen_descriptor,
                        );
                        state.egui_winit_state.handle_platform_output(
                            &state.window,
                            full_output.platform_output,
                        );

                        // Render egui
                        {
                            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                                label: Some("egui Render Pass"),
                                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                                    view: &output_view, // Render egui ON TOP of the grid
                                    resolve_target: None,
                                    ops: wgpu::Operations {
                                        load: wgpu::LoadOp::Load,
                                        store: wgpu::StoreOp::Store,
                                    },
                                })],
                                depth_stencil_attachment: None,
                                timestamp_writes: None,
                                occlusion_query_set: None,
                            });

                            state.egui_renderer.render(&mut render_pass, &paint_jobs, &screen_descriptor);
                        }

                        // Free texture delta
                        for id in &full_output.textures_delta.free {
                            state.egui_renderer.free_texture(id);
                        }

                        state.queue.submit(Some(encoder.finish()));
                        output_frame.present(); // Present the final frame with grid + egui overlay
                    }
                    _ => (),
                }
            }
            Event::AboutToWait => {
                state.window.request_redraw();
            }
            _ => ()
        }
    })
    .unwrap();
}

fn main() {
    env_logger::init();

    let config = match SimConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            log::error!("{e}");
            std::process::exit(2);
        }
    };
    let session = match Session::new(&config) {
        Ok(session) => session,
        Err(e) => {
            log::error!("Could not start session: {e}");
            std::process::exit(2);
        }
    };

    let event_loop = EventLoop::new().unwrap();

    let initial_size = winit::dpi::LogicalSize::new(
        config.width as f64 * DEFAULT_CELL_PX as f64,
        config.height as f64 * DEFAULT_CELL_PX as f64,
    );

    let window = Arc::new(winit::window::WindowBuilder::new()
        .with_title("Game of Life")
        .with_inner_size(initial_size)
        .build(&event_loop)
        .unwrap());

    pollster::block_on(run(event_loop, window, session));
}
