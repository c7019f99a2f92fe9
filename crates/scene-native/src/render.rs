//! wgpu renderer: one instanced billboard pipeline for the point-cloud
//! layers and two mesh pipelines (additive glow, alpha occluder) for the
//! static geometry. Layers draw in the scene's configured back-to-front
//! order into a single pass with no depth buffer; additive blending makes
//! overlap order a brightness concern only.

use glam::Mat4;
use wgpu::util::DeviceExt;

use scene_core::{
    shaders, CameraPose, LayerContent, Scene, StaticGeometry,
};

use crate::mesh;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct Uniforms {
    proj: [[f32; 4]; 4],
    view_model: [[f32; 4]; 4],
    tint: [f32; 4],
}

enum LayerDraw {
    Points {
        instances: wgpu::Buffer,
        count: u32,
        point_scale: f32,
    },
    Mesh {
        vertices: wgpu::Buffer,
        indices: wgpu::Buffer,
        index_count: u32,
        color: [f32; 3],
        opacity: f32,
        additive: bool,
    },
}

struct LayerSlot {
    draw: LayerDraw,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
}

pub struct GpuState<'w> {
    pub window: &'w winit::window::Window,
    surface: wgpu::Surface<'w>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    points_pipeline: wgpu::RenderPipeline,
    mesh_additive_pipeline: wgpu::RenderPipeline,
    mesh_alpha_pipeline: wgpu::RenderPipeline,
    quad_vb: wgpu::Buffer,
    layers: Vec<LayerSlot>,
    width: u32,
    height: u32,
}

const ADDITIVE: wgpu::BlendState = wgpu::BlendState {
    color: wgpu::BlendComponent {
        src_factor: wgpu::BlendFactor::One,
        dst_factor: wgpu::BlendFactor::One,
        operation: wgpu::BlendOperation::Add,
    },
    alpha: wgpu::BlendComponent {
        src_factor: wgpu::BlendFactor::One,
        dst_factor: wgpu::BlendFactor::One,
        operation: wgpu::BlendOperation::Add,
    },
};

impl<'w> GpuState<'w> {
    pub async fn new(window: &'w winit::window::Window, scene: &Scene) -> anyhow::Result<Self> {
        let size = window.inner_size();
        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(window)?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No GPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await?;

        let surface_caps = surface.get_capabilities(&adapter);
        let format = surface_caps.formats[0];
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: surface_caps.alpha_modes[0],
            desired_maximum_frame_latency: 2,
            view_formats: vec![],
        };
        surface.configure(&device, &config);

        let points_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("points_shader"),
            source: wgpu::ShaderSource::Wgsl(shaders::POINTS_WGSL.into()),
        });
        let mesh_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("mesh_shader"),
            source: wgpu::ShaderSource::Wgsl(shaders::MESH_WGSL.into()),
        });

        // Quad corners for two triangles, expanded per instance in the shader
        let quad_vertices: [f32; 12] = [
            -0.5, -0.5, 0.5, -0.5, 0.5, 0.5, -0.5, -0.5, 0.5, 0.5, -0.5, 0.5,
        ];
        let quad_vb = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("quad_vb"),
            contents: bytemuck::cast_slice(&quad_vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("layer_bgl"),
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
        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("layer_pl"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        let points_buffers = [
            // slot 0: quad corners
            wgpu::VertexBufferLayout {
                array_stride: (std::mem::size_of::<f32>() * 2) as u64,
                step_mode: wgpu::VertexStepMode::Vertex,
                attributes: &[wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x2,
                    offset: 0,
                    shader_location: 0,
                }],
            },
            // slot 1: per-particle instance data
            wgpu::VertexBufferLayout {
                array_stride: std::mem::size_of::<scene_core::PointInstance>() as u64,
                step_mode: wgpu::VertexStepMode::Instance,
                attributes: &[
                    wgpu::VertexAttribute {
                        format: wgpu::VertexFormat::Float32x3,
                        offset: 0,
                        shader_location: 1,
                    },
                    wgpu::VertexAttribute {
                        format: wgpu::VertexFormat::Float32,
                        offset: 12,
                        shader_location: 2,
                    },
                    wgpu::VertexAttribute {
                        format: wgpu::VertexFormat::Float32x4,
                        offset: 16,
                        shader_location: 3,
                    },
                ],
            },
        ];
        let points_pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("points_pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &points_shader,
                entry_point: Some("vs_points"),
                buffers: &points_buffers,
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            primitive: wgpu::PrimitiveState::default(),
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            fragment: Some(wgpu::FragmentState {
                module: &points_shader,
                entry_point: Some("fs_points"),
                targets: &[Some(wgpu::ColorTargetState {
                    format,
                    blend: Some(ADDITIVE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            cache: None,
            multiview: None,
        });

        let mesh_buffers = [wgpu::VertexBufferLayout {
            array_stride: (std::mem::size_of::<f32>() * 3) as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Float32x3,
                offset: 0,
                shader_location: 0,
            }],
        }];
        let mesh_pipeline = |blend: wgpu::BlendState, label: &str| {
            device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
                label: Some(label),
                layout: Some(&pipeline_layout),
                vertex: wgpu::VertexState {
                    module: &mesh_shader,
                    entry_point: Some("vs_mesh"),
                    buffers: &mesh_buffers,
                    compilation_options: wgpu::PipelineCompilationOptions::default(),
                },
                primitive: wgpu::PrimitiveState::default(),
                depth_stencil: None,
                multisample: wgpu::MultisampleState::default(),
                fragment: Some(wgpu::FragmentState {
                    module: &mesh_shader,
                    entry_point: Some("fs_mesh"),
                    targets: &[Some(wgpu::ColorTargetState {
                        format,
                        blend: Some(blend),
                        write_mask: wgpu::ColorWrites::ALL,
                    })],
                    compilation_options: wgpu::PipelineCompilationOptions::default(),
                }),
                cache: None,
                multiview: None,
            })
        };
        let mesh_additive_pipeline = mesh_pipeline(ADDITIVE, "mesh_additive_pipeline");
        let mesh_alpha_pipeline =
            mesh_pipeline(wgpu::BlendState::PREMULTIPLIED_ALPHA_BLENDING, "mesh_alpha_pipeline");

        // Per-layer GPU resources, in the scene's draw order. Fields are
        // immutable, so instance buffers are uploaded once here and never
        // rewritten.
        let mut layers = Vec::with_capacity(scene.layers().len());
        for layer in scene.layers() {
            let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
                label: Some("layer_uniforms"),
                size: std::mem::size_of::<Uniforms>() as u64,
                usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
                mapped_at_creation: false,
            });
            let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
                label: Some("layer_bg"),
                layout: &bind_group_layout,
                entries: &[wgpu::BindGroupEntry {
                    binding: 0,
                    resource: uniform_buffer.as_entire_binding(),
                }],
            });
            let draw = match &layer.content {
                LayerContent::Points(field) => {
                    let instances = field.instances();
                    LayerDraw::Points {
                        instances: device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                            label: Some(layer.name),
                            contents: bytemuck::cast_slice(&instances),
                            usage: wgpu::BufferUsages::VERTEX,
                        }),
                        count: instances.len() as u32,
                        point_scale: layer.point_scale,
                    }
                }
                LayerContent::Geometry(StaticGeometry {
                    shape,
                    color,
                    opacity,
                    additive,
                }) => {
                    let mesh = mesh::build(*shape);
                    LayerDraw::Mesh {
                        vertices: device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                            label: Some(layer.name),
                            contents: bytemuck::cast_slice(&mesh.vertices),
                            usage: wgpu::BufferUsages::VERTEX,
                        }),
                        indices: device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                            label: Some(layer.name),
                            contents: bytemuck::cast_slice(&mesh.indices),
                            usage: wgpu::BufferUsages::INDEX,
                        }),
                        index_count: mesh.indices.len() as u32,
                        color: color.to_array(),
                        opacity: *opacity,
                        additive: *additive,
                    }
                }
            };
            layers.push(LayerSlot {
                draw,
                uniform_buffer,
                bind_group,
            });
        }

        Ok(Self {
            window,
            surface,
            device,
            queue,
            config,
            points_pipeline,
            mesh_additive_pipeline,
            mesh_alpha_pipeline,
            quad_vb,
            layers,
            width: size.width.max(1),
            height: size.height.max(1),
        })
    }

    pub fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        if new_size.width == 0 || new_size.height == 0 {
            return;
        }
        self.width = new_size.width;
        self.height = new_size.height;
        self.config.width = new_size.width;
        self.config.height = new_size.height;
        self.surface.configure(&self.device, &self.config);
    }

    pub fn render(&mut self, scene: &Scene, pose: &CameraPose) -> Result<(), wgpu::SurfaceError> {
        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let aspect = self.width as f32 / self.height.max(1) as f32;
        let proj = pose.projection_matrix(aspect, 0.1, 1000.0).to_cols_array_2d();
        let view_matrix = pose.view_matrix();
        let root = scene.root.matrix();
        let tint = scene.tint;

        for (layer, slot) in scene.layers().iter().zip(&self.layers) {
            let view_model: Mat4 = view_matrix * root * layer.transform.matrix();
            let tint_vec = match &slot.draw {
                LayerDraw::Points { point_scale, .. } => {
                    [tint.r, tint.g, tint.b, *point_scale]
                }
                LayerDraw::Mesh { color, opacity, .. } => {
                    [color[0] * tint.r, color[1] * tint.g, color[2] * tint.b, *opacity]
                }
            };
            self.queue.write_buffer(
                &slot.uniform_buffer,
                0,
                bytemuck::bytes_of(&Uniforms {
                    proj,
                    view_model: view_model.to_cols_array_2d(),
                    tint: tint_vec,
                }),
            );
        }

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color {
                            r: 0.0,
                            g: 0.0,
                            b: 0.03,
                            a: 1.0,
                        }),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            for slot in &self.layers {
                match &slot.draw {
                    LayerDraw::Points { instances, count, .. } => {
                        if *count == 0 {
                            continue;
                        }
                        rpass.set_pipeline(&self.points_pipeline);
                        rpass.set_bind_group(0, &slot.bind_group, &[]);
                        rpass.set_vertex_buffer(0, self.quad_vb.slice(..));
                        rpass.set_vertex_buffer(1, instances.slice(..));
                        rpass.draw(0..6, 0..*count);
                    }
                    LayerDraw::Mesh {
                        vertices,
                        indices,
                        index_count,
                        additive,
                        ..
                    } => {
                        rpass.set_pipeline(if *additive {
                            &self.mesh_additive_pipeline
                        } else {
                            &self.mesh_alpha_pipeline
                        });
                        rpass.set_bind_group(0, &slot.bind_group, &[]);
                        rpass.set_vertex_buffer(0, vertices.slice(..));
                        rpass.set_index_buffer(indices.slice(..), wgpu::IndexFormat::Uint32);
                        rpass.draw_indexed(0..*index_count, 0, 0..1);
                    }
                }
            }
        }
        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}
