use crate::shaders;
use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec3, Vec4};
use voxedit_common::{GridBounds, GridConfig};
use voxedit_render::Scene;
use wgpu::util::DeviceExt;

const PLACED_COLOR: [f32; 4] = [0.7, 0.7, 1.0, 1.0];
const PREVIEW_COLOR: [f32; 4] = [1.0, 1.0, 0.3, 0.5];
const GRID_COLOR: [f32; 4] = [0.3, 0.3, 0.3, 1.0];
/// The line at z = 0, running along X.
const X_AXIS_COLOR: [f32; 4] = [0.75, 0.25, 0.25, 1.0];
/// The line at x = 0, running along Z.
const Z_AXIS_COLOR: [f32; 4] = [0.25, 0.35, 0.8, 1.0];
const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;

/// Remaps OpenGL clip depth [-w, w] to the [0, w] range wgpu expects.
const GL_TO_WGPU_DEPTH: Mat4 = Mat4::from_cols(
    Vec4::new(1.0, 0.0, 0.0, 0.0),
    Vec4::new(0.0, 1.0, 0.0, 0.0),
    Vec4::new(0.0, 0.0, 0.5, 0.0),
    Vec4::new(0.0, 0.0, 0.5, 1.0),
);

#[repr(C)]
#[derive(Copy, Clone, Pod, Zeroable)]
struct Uniforms {
    view_proj: [[f32; 4]; 4],
    /// xyz is the camera position; w is unused padding.
    camera_pos: [f32; 4],
}

impl Uniforms {
    fn for_scene(scene: &Scene<'_>) -> Self {
        Self {
            view_proj: gpu_view_projection(scene).to_cols_array_2d(),
            camera_pos: scene.camera.position.extend(1.0).to_array(),
        }
    }
}

#[repr(C)]
#[derive(Copy, Clone, Pod, Zeroable)]
struct Vertex {
    position: [f32; 3],
    normal: [f32; 3],
}

#[repr(C)]
#[derive(Copy, Clone, Pod, Zeroable)]
struct InstanceData {
    model_0: [f32; 4],
    model_1: [f32; 4],
    model_2: [f32; 4],
    model_3: [f32; 4],
    color: [f32; 4],
}

impl InstanceData {
    fn cube(position: Vec3, size: f32, color: [f32; 4]) -> Self {
        let cols = Mat4::from_scale_rotation_translation(
            Vec3::splat(size),
            glam::Quat::IDENTITY,
            position,
        )
        .to_cols_array_2d();
        Self {
            model_0: cols[0],
            model_1: cols[1],
            model_2: cols[2],
            model_3: cols[3],
            color,
        }
    }
}

#[repr(C)]
#[derive(Copy, Clone, Pod, Zeroable)]
struct GridVertex {
    position: [f32; 3],
    color: [f32; 4],
}

/// Unit cube centered on the origin.
fn cube_mesh() -> (Vec<Vertex>, Vec<u16>) {
    let p = 0.5_f32;
    #[rustfmt::skip]
    let vertices = vec![
        // +Z face
        Vertex { position: [-p, -p,  p], normal: [0.0, 0.0, 1.0] },
        Vertex { position: [ p, -p,  p], normal: [0.0, 0.0, 1.0] },
        Vertex { position: [ p,  p,  p], normal: [0.0, 0.0, 1.0] },
        Vertex { position: [-p,  p,  p], normal: [0.0, 0.0, 1.0] },
        // -Z face
        Vertex { position: [ p, -p, -p], normal: [0.0, 0.0, -1.0] },
        Vertex { position: [-p, -p, -p], normal: [0.0, 0.0, -1.0] },
        Vertex { position: [-p,  p, -p], normal: [0.0, 0.0, -1.0] },
        Vertex { position: [ p,  p, -p], normal: [0.0, 0.0, -1.0] },
        // +X face
        Vertex { position: [ p, -p,  p], normal: [1.0, 0.0, 0.0] },
        Vertex { position: [ p, -p, -p], normal: [1.0, 0.0, 0.0] },
        Vertex { position: [ p,  p, -p], normal: [1.0, 0.0, 0.0] },
        Vertex { position: [ p,  p,  p], normal: [1.0, 0.0, 0.0] },
        // -X face
        Vertex { position: [-p, -p, -p], normal: [-1.0, 0.0, 0.0] },
        Vertex { position: [-p, -p,  p], normal: [-1.0, 0.0, 0.0] },
        Vertex { position: [-p,  p,  p], normal: [-1.0, 0.0, 0.0] },
        Vertex { position: [-p,  p, -p], normal: [-1.0, 0.0, 0.0] },
        // +Y face
        Vertex { position: [-p,  p,  p], normal: [0.0, 1.0, 0.0] },
        Vertex { position: [ p,  p,  p], normal: [0.0, 1.0, 0.0] },
        Vertex { position: [ p,  p, -p], normal: [0.0, 1.0, 0.0] },
        Vertex { position: [-p,  p, -p], normal: [0.0, 1.0, 0.0] },
        // -Y face
        Vertex { position: [-p, -p, -p], normal: [0.0, -1.0, 0.0] },
        Vertex { position: [ p, -p, -p], normal: [0.0, -1.0, 0.0] },
        Vertex { position: [ p, -p,  p], normal: [0.0, -1.0, 0.0] },
        Vertex { position: [-p, -p,  p], normal: [0.0, -1.0, 0.0] },
    ];
    #[rustfmt::skip]
    let indices: Vec<u16> = vec![
        0,1,2, 2,3,0,       // +Z
        4,5,6, 6,7,4,       // -Z
        8,9,10, 10,11,8,    // +X
        12,13,14, 14,15,12, // -X
        16,17,18, 18,19,16, // +Y
        20,21,22, 22,23,20, // -Y
    ];
    (vertices, indices)
}

/// Line-list vertices for the ground grid covering `bounds` on X and Z.
/// Lines through the origin take the axis colors.
fn grid_mesh(bounds: GridBounds, spacing: f32) -> Vec<GridVertex> {
    let mut verts = Vec::new();
    let (min, max) = (bounds.min, bounds.max);
    let lines = ((max - min) / spacing).floor() as i32;
    let mut line = |from: [f32; 3], to: [f32; 3], color: [f32; 4]| {
        verts.push(GridVertex {
            position: from,
            color,
        });
        verts.push(GridVertex {
            position: to,
            color,
        });
    };

    for i in 0..=lines {
        let offset = min + i as f32 * spacing;
        let on_axis = offset.abs() < spacing * 1e-3;
        line(
            [offset, 0.0, min],
            [offset, 0.0, max],
            if on_axis { Z_AXIS_COLOR } else { GRID_COLOR },
        );
        line(
            [min, 0.0, offset],
            [max, 0.0, offset],
            if on_axis { X_AXIS_COLOR } else { GRID_COLOR },
        );
    }
    verts
}

/// Clip-space transform for the GPU: the camera's GL-style projection with
/// depth remapped for wgpu.
fn gpu_view_projection(scene: &Scene<'_>) -> Mat4 {
    GL_TO_WGPU_DEPTH * scene.camera.view_projection()
}

/// Placed cubes in order, then the preview cube if any.
fn scene_instances(scene: &Scene<'_>) -> (Vec<InstanceData>, bool) {
    let mut instances: Vec<InstanceData> = scene
        .placed
        .iter()
        .map(|p| InstanceData::cube(p.position(), p.size, PLACED_COLOR))
        .collect();
    let has_preview = match scene.preview {
        Some(cell) => {
            instances.push(InstanceData::cube(
                cell.world_position(),
                scene.preview_size,
                PREVIEW_COLOR,
            ));
            true
        }
        None => false,
    };
    (instances, has_preview)
}

/// wgpu-based editor renderer: grid floor, placed cubes, translucent preview.
///
/// Owns every GPU buffer and pipeline it creates; they are released when the
/// renderer is dropped.
pub struct WgpuRenderer {
    cube_pipeline: wgpu::RenderPipeline,
    preview_pipeline: wgpu::RenderPipeline,
    grid_pipeline: wgpu::RenderPipeline,
    uniform_buffer: wgpu::Buffer,
    uniform_bind_group: wgpu::BindGroup,
    cube_vertex_buffer: wgpu::Buffer,
    cube_index_buffer: wgpu::Buffer,
    cube_index_count: u32,
    grid_vertex_buffer: wgpu::Buffer,
    grid_vertex_count: u32,
    instance_buffer: wgpu::Buffer,
    instance_capacity: u32,
    depth_texture: wgpu::TextureView,
}

impl WgpuRenderer {
    pub fn new(
        device: &wgpu::Device,
        surface_format: wgpu::TextureFormat,
        width: u32,
        height: u32,
        grid: &GridConfig,
    ) -> Self {
        let uniform_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("uniform_buffer"),
            contents: bytemuck::bytes_of(&Uniforms {
                view_proj: Mat4::IDENTITY.to_cols_array_2d(),
                camera_pos: [0.0; 4],
            }),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("uniform_bind_group_layout"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });

        let uniform_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("uniform_bind_group"),
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("pipeline_layout"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        let cube_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("cube_shader"),
            source: wgpu::ShaderSource::Wgsl(shaders::CUBE_SHADER.into()),
        });

        let cube_pipeline = Self::create_cube_pipeline(
            device,
            &pipeline_layout,
            &cube_shader,
            surface_format,
            CubePass::Opaque,
        );
        let preview_pipeline = Self::create_cube_pipeline(
            device,
            &pipeline_layout,
            &cube_shader,
            surface_format,
            CubePass::Preview,
        );

        let grid_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("grid_shader"),
            source: wgpu::ShaderSource::Wgsl(shaders::GRID_SHADER.into()),
        });

        let grid_pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("grid_pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &grid_shader,
                entry_point: Some("vs_grid"),
                compilation_options: Default::default(),
                buffers: &[wgpu::VertexBufferLayout {
                    array_stride: std::mem::size_of::<GridVertex>() as u64,
                    step_mode: wgpu::VertexStepMode::Vertex,
                    attributes: &wgpu::vertex_attr_array![
                        0 => Float32x3,
                        1 => Float32x4,
                    ],
                }],
            },
            fragment: Some(wgpu::FragmentState {
                module: &grid_shader,
                entry_point: Some("fs_grid"),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: surface_format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::LineList,
                ..Default::default()
            },
            depth_stencil: Some(wgpu::DepthStencilState {
                format: DEPTH_FORMAT,
                depth_write_enabled: true,
                depth_compare: wgpu::CompareFunction::Less,
                stencil: Default::default(),
                bias: Default::default(),
            }),
            multisample: Default::default(),
            multiview: None,
            cache: None,
        });

        let (cube_verts, cube_indices) = cube_mesh();
        let cube_vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("cube_vertex_buffer"),
            contents: bytemuck::cast_slice(&cube_verts),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let cube_index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("cube_index_buffer"),
            contents: bytemuck::cast_slice(&cube_indices),
            usage: wgpu::BufferUsages::INDEX,
        });
        let cube_index_count = cube_indices.len() as u32;

        let grid_verts = grid_mesh(grid.bounds(), grid.line_spacing);
        let grid_vertex_count = grid_verts.len() as u32;
        let grid_vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("grid_vertex_buffer"),
            contents: bytemuck::cast_slice(&grid_verts),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let instance_capacity = 1024u32;
        let instance_buffer = Self::create_instance_buffer(device, instance_capacity);

        let depth_texture = Self::create_depth_texture(device, width, height);

        tracing::debug!(grid_vertex_count, "wgpu renderer created");

        Self {
            cube_pipeline,
            preview_pipeline,
            grid_pipeline,
            uniform_buffer,
            uniform_bind_group,
            cube_vertex_buffer,
            cube_index_buffer,
            cube_index_count,
            grid_vertex_buffer,
            grid_vertex_count,
            instance_buffer,
            instance_capacity,
            depth_texture,
        }
    }

    pub fn resize(&mut self, device: &wgpu::Device, width: u32, height: u32) {
        self.depth_texture = Self::create_depth_texture(device, width, height);
    }

    /// Render one frame: grid, placed cubes in order, then the preview cube.
    pub fn render(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        view: &wgpu::TextureView,
        scene: &Scene<'_>,
    ) {
        queue.write_buffer(
            &self.uniform_buffer,
            0,
            bytemuck::bytes_of(&Uniforms::for_scene(scene)),
        );

        let (instances, has_preview) = scene_instances(scene);
        let instance_count = instances.len() as u32;
        if instance_count > self.instance_capacity {
            let capacity = instance_count.next_power_of_two();
            tracing::debug!(capacity, "growing instance buffer");
            self.instance_buffer = Self::create_instance_buffer(device, capacity);
            self.instance_capacity = capacity;
        }
        if !instances.is_empty() {
            queue.write_buffer(&self.instance_buffer, 0, bytemuck::cast_slice(&instances));
        }
        let placed_count = if has_preview {
            instance_count - 1
        } else {
            instance_count
        };

        let mut encoder = device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("render_encoder"),
        });

        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("main_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color {
                            r: 0.1,
                            g: 0.1,
                            b: 0.1,
                            a: 1.0,
                        }),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth_texture,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                ..Default::default()
            });

            pass.set_pipeline(&self.grid_pipeline);
            pass.set_bind_group(0, &self.uniform_bind_group, &[]);
            pass.set_vertex_buffer(0, self.grid_vertex_buffer.slice(..));
            pass.draw(0..self.grid_vertex_count, 0..1);

            if instance_count > 0 {
                pass.set_bind_group(0, &self.uniform_bind_group, &[]);
                pass.set_vertex_buffer(0, self.cube_vertex_buffer.slice(..));
                pass.set_vertex_buffer(1, self.instance_buffer.slice(..));
                pass.set_index_buffer(self.cube_index_buffer.slice(..), wgpu::IndexFormat::Uint16);

                if placed_count > 0 {
                    pass.set_pipeline(&self.cube_pipeline);
                    pass.draw_indexed(0..self.cube_index_count, 0, 0..placed_count);
                }
                // Translucent, so drawn last over the opaque geometry.
                if has_preview {
                    pass.set_pipeline(&self.preview_pipeline);
                    pass.draw_indexed(0..self.cube_index_count, 0, placed_count..instance_count);
                }
            }
        }

        queue.submit(std::iter::once(encoder.finish()));
    }

    fn create_cube_pipeline(
        device: &wgpu::Device,
        layout: &wgpu::PipelineLayout,
        shader: &wgpu::ShaderModule,
        surface_format: wgpu::TextureFormat,
        pass: CubePass,
    ) -> wgpu::RenderPipeline {
        let (label, blend, depth_write_enabled) = match pass {
            CubePass::Opaque => ("cube_pipeline", wgpu::BlendState::REPLACE, true),
            CubePass::Preview => ("preview_pipeline", wgpu::BlendState::ALPHA_BLENDING, false),
        };
        device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some(label),
            layout: Some(layout),
            vertex: wgpu::VertexState {
                module: shader,
                entry_point: Some("vs_main"),
                compilation_options: Default::default(),
                buffers: &[
                    wgpu::VertexBufferLayout {
                        array_stride: std::mem::size_of::<Vertex>() as u64,
                        step_mode: wgpu::VertexStepMode::Vertex,
                        attributes: &wgpu::vertex_attr_array![
                            0 => Float32x3,
                            1 => Float32x3,
                        ],
                    },
                    wgpu::VertexBufferLayout {
                        array_stride: std::mem::size_of::<InstanceData>() as u64,
                        step_mode: wgpu::VertexStepMode::Instance,
                        attributes: &wgpu::vertex_attr_array![
                            2 => Float32x4,
                            3 => Float32x4,
                            4 => Float32x4,
                            5 => Float32x4,
                            6 => Float32x4,
                        ],
                    },
                ],
            },
            fragment: Some(wgpu::FragmentState {
                module: shader,
                entry_point: Some("fs_main"),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: surface_format,
                    blend: Some(blend),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                cull_mode: Some(wgpu::Face::Back),
                ..Default::default()
            },
            depth_stencil: Some(wgpu::DepthStencilState {
                format: DEPTH_FORMAT,
                depth_write_enabled,
                depth_compare: wgpu::CompareFunction::Less,
                stencil: Default::default(),
                bias: Default::default(),
            }),
            multisample: Default::default(),
            multiview: None,
            cache: None,
        })
    }

    fn create_instance_buffer(device: &wgpu::Device, capacity: u32) -> wgpu::Buffer {
        device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("instance_buffer"),
            size: (capacity as u64) * std::mem::size_of::<InstanceData>() as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        })
    }

    fn create_depth_texture(
        device: &wgpu::Device,
        width: u32,
        height: u32,
    ) -> wgpu::TextureView {
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("depth_texture"),
            size: wgpu::Extent3d {
                width: width.max(1),
                height: height.max(1),
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: DEPTH_FORMAT,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            view_formats: &[],
        });
        texture.create_view(&Default::default())
    }
}

#[derive(Debug, Clone, Copy)]
enum CubePass {
    Opaque,
    Preview,
}
