use bytemuck::{Pod, Zeroable};
use std::num::NonZeroU64;
use wgpu::util::DeviceExt;

use life_toy::Grid;

pub const MIN_CELL_PX: f32 = 2.0; // Smallest on-screen cell size in pixels
pub const MAX_CELL_PX: f32 = 48.0;
pub const DEFAULT_CELL_PX: f32 = 6.0;
pub const ZOOM_FACTOR_STEP: f32 = 1.2; // How much each wheel step zooms

/// Grid dimensions, read by the fragment shader to index the cell buffer
#[repr(C)]
#[derive(Clone, Copy, Pod, Zeroable)]
pub struct SimParams {
    pub width: u32,
    pub height: u32,
}

// Uniforms specific to rendering
#[repr(C)]
#[derive(Clone, Copy, Pod, Zeroable)]
pub struct RenderParams {
    pub view_offset: [f32; 2],
    pub cell_px: f32,
    pub _padding: f32, // Ensure 16-byte alignment (vec2<f32> + f32 + f32 = 8 + 4 + 4 = 16)
}

/// One `u32` per cell, 1 for alive, row-major like `Grid::cells`.
pub fn encode_cells(grid: &Grid) -> Vec<u32> {
    grid.cells().iter().map(|&alive| alive as u32).collect()
}

/// Bytes the grid occupies once uploaded as a storage buffer.
pub fn grid_binding_size(grid: &Grid) -> u64 {
    (grid.cells().len() * std::mem::size_of::<u32>()) as u64
}

pub fn create_grid_buffer(device: &wgpu::Device, grid: &Grid) -> wgpu::Buffer {
    device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("Grid Buffer"),
        contents: bytemuck::cast_slice(&encode_cells(grid)),
        usage: wgpu::BufferUsages::STORAGE | wgpu::BufferUsages::COPY_DST,
    })
}

pub fn create_sim_param_buffer(device: &wgpu::Device, grid: &Grid) -> wgpu::Buffer {
    let (width, height) = grid.dimensions();
    device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("Simulation Parameters"),
        contents: bytemuck::bytes_of(&SimParams {
            width: width as u32,
            height: height as u32,
        }),
        usage: wgpu::BufferUsages::UNIFORM,
    })
}

pub fn create_render_bind_group_layout(device: &wgpu::Device) -> wgpu::BindGroupLayout {
    device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("Render Bind Group Layout"),
        entries: &[
            // SimParams Uniform (Binding 0)
            wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: NonZeroU64::new(std::mem::size_of::<SimParams>() as u64),
                },
                count: None,
            },
            // Grid State Buffer (Binding 1)
            wgpu::BindGroupLayoutEntry {
                binding: 1,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Storage { read_only: true },
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            },
            // RenderParams Uniform (Binding 2)
            wgpu::BindGroupLayoutEntry {
                binding: 2,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: NonZeroU64::new(std::mem::size_of::<RenderParams>() as u64),
                },
                count: None,
            },
        ],
    })
}

pub fn create_render_bind_group(
    device: &wgpu::Device,
    layout: &wgpu::BindGroupLayout,
    grid_buffer: &wgpu::Buffer,
    sim_param_buffer: &wgpu::Buffer,
    render_param_buffer: &wgpu::Buffer,
) -> wgpu::BindGroup {
    device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some("Render Bind Group"),
        layout,
        entries: &[
            wgpu::BindGroupEntry { binding: 0, resource: sim_param_buffer.as_entire_binding() },
            wgpu::BindGroupEntry { binding: 1, resource: grid_buffer.as_entire_binding() },
            wgpu::BindGroupEntry { binding: 2, resource: render_param_buffer.as_entire_binding() },
        ],
    })
}

pub fn create_render_pipeline(
    device: &wgpu::Device,
    layout: &wgpu::BindGroupLayout,
    format: wgpu::TextureFormat,
) -> wgpu::RenderPipeline {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("Render Shader"),
        source: wgpu::ShaderSource::Wgsl(include_str!("render.wgsl").into()),
    });
    let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("Render Pipeline Layout"),
        bind_group_layouts: &[layout],
        push_constant_ranges: &[],
    });
    device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some("Render Pipeline"),
        layout: Some(&pipeline_layout),
        vertex: wgpu::VertexState {
            module: &shader,
            entry_point: "vs_main",
            buffers: &[],
        },
        fragment: Some(wgpu::FragmentState {
            module: &shader,
            entry_point: "fs_main",
            targets: &[Some(format.into())],
        }),
        primitive: wgpu::PrimitiveState {
            topology: wgpu::PrimitiveTopology::TriangleList,
            ..Default::default()
        },
        depth_stencil: None,
        multisample: wgpu::MultisampleState::default(),
        multiview: None,
    })
}
