use crate::render::{
    create_grid_buffer, create_render_bind_group, create_render_bind_group_layout,
    create_render_pipeline, create_sim_param_buffer, encode_cells, grid_binding_size,
    RenderParams, DEFAULT_CELL_PX,
};
use life_toy::{GridError, Pattern, Session};
use std::sync::Arc;
use std::time::Instant;
use wgpu::util::DeviceExt;
use winit::{dpi::PhysicalPosition, window::Window};

// GUI Imports
use egui::Context as EguiContext;
use egui_wgpu::Renderer as EguiWgpuRenderer;
use egui_winit::State as EguiWinitState;

pub struct State {
    pub surface: wgpu::Surface<'static>,
    pub device: wgpu::Device,
    pub queue: wgpu::Queue,
    pub config: wgpu::SurfaceConfiguration,
    pub size: winit::dpi::PhysicalSize<u32>,
    pub window: Arc<Window>,

    pub session: Session,
    /// Set whenever the grid changes and the GPU copy is stale
    pub grid_dirty: bool,
    pub grid_buffer: wgpu::Buffer,
    pub render_pipeline: wgpu::RenderPipeline,
    pub render_bind_group: wgpu::BindGroup,
    pub render_param_buffer: wgpu::Buffer,

    pub cell_px: f32,
    pub view_offset: [f32; 2], // Current view offset (in screen pixels)
    pub is_right_mouse_pressed: bool,
    pub last_mouse_pos: Option<PhysicalPosition<f64>>,
    pub cursor_pos: Option<PhysicalPosition<f64>>, // For zoom centering and clicks

    // GUI state
    pub egui_ctx: EguiContext,
    pub egui_winit_state: EguiWinitState,
    pub egui_renderer: EguiWgpuRenderer,
    pub menu_open: bool,
}

impl State {
    pub async fn new(window: Arc<Window>, session: Session) -> Self {
        let size = window.inner_size();

        log::info!("Initializing wgpu...");

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(window.clone()).unwrap();

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                force_fallback_adapter: false,
                compatible_surface: Some(&surface),
            })
            .await
            .expect("Failed to find an appropriate adapter");

        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    label: None,
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default(),
                },
                None,
            )
            .await
            .expect("Failed to create device");

        let surface_caps = surface.get_capabilities(&adapter);
        let surface_format = surface_caps.formats[0];

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: surface_caps.present_modes[0],
            alpha_mode: surface_caps.alpha_modes[0],
            view_formats: vec![surface_format],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        // Grid resources; the grid itself is fixed-size for the whole session
        let binding_limit = u64::from(device.limits().max_storage_buffer_binding_size);
        assert!(
            grid_binding_size(session.grid()) <= binding_limit,
            "Grid of {:?} cells exceeds the device's {binding_limit}-byte storage binding",
            session.grid().dimensions()
        );
        let grid_buffer = create_grid_buffer(&device, session.grid());
        let sim_param_buffer = create_sim_param_buffer(&device, session.grid());

        let cell_px = DEFAULT_CELL_PX;
        let view_offset = [0.0, 0.0];
        let render_param_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Render Parameters"),
            contents: bytemuck::bytes_of(&RenderParams {
                view_offset,
                cell_px,
                _padding: 0.0,
            }),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let render_bind_group_layout = create_render_bind_group_layout(&device);
        let render_pipeline = create_render_pipeline(&device, &render_bind_group_layout, config.format);
        let render_bind_group = create_render_bind_group(
            &device,
            &render_bind_group_layout,
            &grid_buffer,
            &sim_param_buffer,
            &render_param_buffer,
        );

        log::info!("Initializing egui...");
        let egui_ctx = EguiContext::default();
        let egui_winit_state = EguiWinitState::new(egui_ctx.clone(), egui_ctx.viewport_id(), &window, None, None);
        let egui_renderer = EguiWgpuRenderer::new(&device, config.format, None, 1);
        log::info!("egui initialized.");

        log::info!("wgpu initialized successfully.");

        Self {
            surface,
            device,
            queue,
            config,
            size,
            window,
            session,
            grid_dirty: false,
            grid_buffer,
            render_pipeline,
            render_bind_group,
            render_param_buffer,
            cell_px,
            view_offset,
            is_right_mouse_pressed: false,
            last_mouse_pos: None,
            cursor_pos: None,
            egui_ctx,
            egui_winit_state,
            egui_renderer,
            menu_open: true,
        }
    }

    pub fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        if new_size.width > 0 && new_size.height > 0 {
            self.size = new_size;
            self.config.width = new_size.width;
            self.config.height = new_size.height;
            self.surface.configure(&self.device, &self.config);
            log::info!("Reconfigured surface to: {}x{}", new_size.width, new_size.height);
        } else {
            log::warn!("Ignoring resize to zero dimensions: {}x{}", new_size.width, new_size.height);
        }
    }

    pub fn write_render_params(&self) {
        self.queue.write_buffer(&self.render_param_buffer, 0, bytemuck::bytes_of(&RenderParams {
            view_offset: self.view_offset,
            cell_px: self.cell_px,
            _padding: 0.0,
        }));
    }

    /// Advance the session clock & render the grid. Returns the surface texture for egui to draw on.
    pub fn update_and_render(&mut self) -> Result<wgpu::SurfaceTexture, wgpu::SurfaceError> {
        if self.session.tick(Instant::now()) > 0 {
            self.grid_dirty = true;
        }
        if self.grid_dirty {
            self.queue.write_buffer(&self.grid_buffer, 0, bytemuck::cast_slice(&encode_cells(self.session.grid())));
            self.grid_dirty = false;
        }

        // --- Get Surface Texture (early exit on error) ---
        let output_frame = match self.surface.get_current_texture() {
            Ok(frame) => frame,
            Err(wgpu::SurfaceError::Lost) => {
                log::warn!("Surface lost, reconfiguring...");
                self.resize(self.size);
                return Err(wgpu::SurfaceError::Lost);
            }
            Err(e) => {
                log::error!("Failed to acquire next swap chain texture: {:?}", e);
                return Err(e);
            }
        };

        // --- Render Pass ---
        let output_view = output_frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut render_encoder = self.device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor { label: Some("Render Encoder") });
        {
            let mut render_pass = render_encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Render Pass"),
                color_attachments: &[
                    Some(wgpu::RenderPassColorAttachment {
                        view: &output_view,
                        resolve_target: None,
                        ops: wgpu::Operations {
                            load: wgpu::LoadOp::Clear(wgpu::Color::BLACK),
                            store: wgpu::StoreOp::Store,
                        },
                    })
                ],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            render_pass.set_pipeline(&self.render_pipeline);
            render_pass.set_bind_group(0, &self.render_bind_group, &[]);
            render_pass.draw(0..3, 0..1); // Draw full-screen triangle
        }
        self.queue.submit(Some(render_encoder.finish()));
        // output_frame.present(); // DON'T present here, egui will do it later

        Ok(output_frame)
    }

    /// Grid cell under a window position, if any.
    pub fn cell_at(&self, screen_pos: PhysicalPosition<f64>) -> Option<(usize, usize)> {
        let (width, height) = self.session.grid().dimensions();
        screen_to_cell(screen_pos, self.view_offset, self.cell_px, width, height)
    }

    /// Toggle the cell under the cursor. Clicks outside the grid are ignored.
    pub fn toggle_cell_at(&mut self, screen_pos: PhysicalPosition<f64>) {
        let Some((x, y)) = self.cell_at(screen_pos) else {
            return;
        };
        match self.session.toggle(x, y) {
            Ok(_) => self.grid_dirty = true,
            Err(e) => log::warn!("Ignoring click: {e}"),
        }
    }

    pub fn step_once(&mut self) {
        self.session.pause();
        self.session.step();
        self.grid_dirty = true;
    }

    pub fn randomize(&mut self) {
        self.apply(|session| session.randomize());
    }

    pub fn clear(&mut self) {
        self.session.clear();
        self.grid_dirty = true;
    }

    pub fn load_pattern(&mut self, pattern: Pattern) {
        self.apply(|session| session.load_pattern(pattern));
    }

    fn apply<F>(&mut self, action: F)
    where
        F: FnOnce(&mut Session) -> Result<(), GridError>,
    {
        match action(&mut self.session) {
            Ok(()) => self.grid_dirty = true,
            Err(e) => log::warn!("Grid update rejected: {e}"),
        }
    }
}

/// Map a window position to a grid cell under the given pan and zoom.
pub fn screen_to_cell(
    screen_pos: PhysicalPosition<f64>,
    view_offset: [f32; 2],
    cell_px: f32,
    width: usize,
    height: usize,
) -> Option<(usize, usize)> {
    let x_world = ((screen_pos.x as f32) + view_offset[0]) / cell_px;
    let y_world = ((screen_pos.y as f32) + view_offset[1]) / cell_px;
    if x_world < 0.0 || y_world < 0.0 {
        return None;
    }
    let (gx, gy) = (x_world.floor() as usize, y_world.floor() as usize);
    (gx < width && gy < height).then_some((gx, gy))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn screen_to_cell_respects_zoom_and_offset() {
        let pos = PhysicalPosition::new(13.0, 25.0);
        assert_eq!(screen_to_cell(pos, [0.0, 0.0], 6.0, 10, 10), Some((2, 4)));
        assert_eq!(screen_to_cell(pos, [6.0, 0.0], 6.0, 10, 10), Some((3, 4)));
        assert_eq!(screen_to_cell(pos, [0.0, 0.0], 12.0, 10, 10), Some((1, 2)));
    }

    #[test]
    fn screen_to_cell_rejects_positions_off_the_grid() {
        assert_eq!(screen_to_cell(PhysicalPosition::new(60.0, 5.0), [0.0, 0.0], 6.0, 10, 10), None);
        assert_eq!(screen_to_cell(PhysicalPosition::new(-1.0, 5.0), [0.0, 0.0], 6.0, 10, 10), None);
        assert_eq!(screen_to_cell(PhysicalPosition::new(5.0, 59.9), [0.0, 0.0], 6.0, 10, 10), Some((0, 9)));
    }
}
