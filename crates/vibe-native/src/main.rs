//! Desktop preview of the hero scene. The mouse wheel stands in for the
//! page scroll, driving the same choreography as the web frontend.

use std::time::Instant;
use wgpu::util::DeviceExt;
use winit::{event::*, event_loop::EventLoop, window::WindowBuilder};

use glam::Mat4;
use vibe_core::artwork;
use vibe_core::constants::{SCREEN_NODE, SKIN_COUNT, SKIN_TEX_HEIGHT, SKIN_TEX_WIDTH};
use vibe_core::mesh;
use vibe_core::{
    Camera, ChoreographyParams, Pose, ScrollChoreographer, SkinBinder, TexturePrefs,
};

const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;

// Virtual scroll tuning: one wheel line moves this much of the full page.
const WHEEL_STEP: f32 = 0.06;
const PIXELS_PER_LINE: f32 = 40.0;

/// Advance the virtual scroll by wheel lines; scrolling down (negative line
/// delta) moves forward through the page.
fn wheel_step(progress: f32, delta_lines: f32, step: f32) -> f32 {
    (progress - delta_lines * step).clamp(0.0, 1.0)
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct Uniforms {
    view_proj: [[f32; 4]; 4],
    model: [[f32; 4]; 4],
}

struct GpuState<'w> {
    window: &'w winit::window::Window,
    surface: wgpu::Surface<'w>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,

    body_pipeline: wgpu::RenderPipeline,
    screen_pipeline: wgpu::RenderPipeline,
    uniform_buffer: wgpu::Buffer,
    uniform_bind_group: wgpu::BindGroup,

    body_vb: wgpu::Buffer,
    body_vertex_count: u32,
    screen_vb: wgpu::Buffer,
    screen_vertex_count: u32,

    skin_bind_groups: Vec<wgpu::BindGroup>,
    active_skin: usize,

    depth_view: wgpu::TextureView,
    width: u32,
    height: u32,
}

impl<'w> GpuState<'w> {
    async fn new(window: &'w winit::window::Window) -> anyhow::Result<Self> {
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
            width: size.width,
            height: size.height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: surface_caps.alpha_modes[0],
            desired_maximum_frame_latency: 2,
            view_formats: vec![],
        };
        surface.configure(&device, &config);

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("scene_shader"),
            source: wgpu::ShaderSource::Wgsl(vibe_core::SCENE_WGSL.into()),
        });

        let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("uniforms"),
            size: std::mem::size_of::<Uniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let uniform_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("uniform_bgl"),
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
            label: Some("uniform_bg"),
            layout: &uniform_bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });

        let skin_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("skin_bgl"),
            entries: &[
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Texture {
                        sample_type: wgpu::TextureSampleType::Float { filterable: true },
                        view_dimension: wgpu::TextureViewDimension::D2,
                        multisampled: false,
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                    count: None,
                },
            ],
        });
        let skin_bind_groups =
            build_skin_textures(&device, &queue, &skin_bgl, &TexturePrefs::default());

        let body = mesh::phone_body_vertices();
        let screen = mesh::screen_plate_vertices();
        let body_vb = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("body_vb"),
            contents: bytemuck::cast_slice(&body),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let screen_vb = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("screen_vb"),
            contents: bytemuck::cast_slice(&screen),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let vertex_layout = wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<mesh::Vertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x3,
                    offset: 0,
                    shader_location: 0,
                },
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x3,
                    offset: 12,
                    shader_location: 1,
                },
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x2,
                    offset: 24,
                    shader_location: 2,
                },
            ],
        };

        let body_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("body_pl"),
            bind_group_layouts: &[&uniform_bgl],
            push_constant_ranges: &[],
        });
        let screen_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("screen_pl"),
            bind_group_layouts: &[&uniform_bgl, &skin_bgl],
            push_constant_ranges: &[],
        });
        let body_pipeline = create_pipeline(
            &device,
            "body_pipeline",
            &body_layout,
            &shader,
            "fs_body",
            format,
            vertex_layout.clone(),
        );
        let screen_pipeline = create_pipeline(
            &device,
            "screen_pipeline",
            &screen_layout,
            &shader,
            "fs_screen",
            format,
            vertex_layout,
        );

        let depth_view = create_depth_view(&device, size.width, size.height);

        Ok(Self {
            window,
            surface,
            device,
            queue,
            config,
            body_pipeline,
            screen_pipeline,
            uniform_buffer,
            uniform_bind_group,
            body_vb,
            body_vertex_count: body.len() as u32,
            screen_vb,
            screen_vertex_count: screen.len() as u32,
            skin_bind_groups,
            active_skin: 0,
            depth_view,
            width: size.width,
            height: size.height,
        })
    }

    fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        if new_size.width == 0 || new_size.height == 0 {
            return;
        }
        self.width = new_size.width;
        self.height = new_size.height;
        self.config.width = new_size.width;
        self.config.height = new_size.height;
        self.surface.configure(&self.device, &self.config);
        self.depth_view = create_depth_view(&self.device, self.width, self.height);
    }

    fn set_active_skin(&mut self, image: usize) {
        if image < self.skin_bind_groups.len() {
            self.active_skin = image;
        } else {
            log::warn!("skin image {} has no texture; keeping current", image);
        }
    }

    fn render(&mut self, pose: &Pose) -> Result<(), wgpu::SurfaceError> {
        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let aspect = self.width as f32 / self.height.max(1) as f32;
        let camera = Camera::hero(aspect);
        let view_proj = camera.projection_matrix() * camera.view_matrix();
        let model = Mat4::from_translation(pose.position)
            * Mat4::from_euler(
                glam::EulerRot::XYZ,
                pose.rotation.x,
                pose.rotation.y,
                pose.rotation.z,
            );
        self.queue.write_buffer(
            &self.uniform_buffer,
            0,
            bytemuck::bytes_of(&Uniforms {
                view_proj: view_proj.to_cols_array_2d(),
                model: model.to_cols_array_2d(),
            }),
        );

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
                            r: 0.01,
                            g: 0.01,
                            b: 0.02,
                            a: 1.0,
                        }),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_pipeline(&self.body_pipeline);
            rpass.set_bind_group(0, &self.uniform_bind_group, &[]);
            rpass.set_vertex_buffer(0, self.body_vb.slice(..));
            rpass.draw(0..self.body_vertex_count, 0..1);

            rpass.set_pipeline(&self.screen_pipeline);
            rpass.set_bind_group(0, &self.uniform_bind_group, &[]);
            rpass.set_bind_group(1, &self.skin_bind_groups[self.active_skin], &[]);
            rpass.set_vertex_buffer(0, self.screen_vb.slice(..));
            rpass.draw(0..self.screen_vertex_count, 0..1);
        }
        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}

fn create_pipeline(
    device: &wgpu::Device,
    label: &str,
    layout: &wgpu::PipelineLayout,
    shader: &wgpu::ShaderModule,
    fs_entry: &str,
    format: wgpu::TextureFormat,
    vertex_layout: wgpu::VertexBufferLayout<'_>,
) -> wgpu::RenderPipeline {
    device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some(label),
        layout: Some(layout),
        vertex: wgpu::VertexState {
            module: shader,
            entry_point: Some("vs_main"),
            buffers: &[vertex_layout],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        },
        primitive: wgpu::PrimitiveState::default(),
        depth_stencil: Some(wgpu::DepthStencilState {
            format: DEPTH_FORMAT,
            depth_write_enabled: true,
            depth_compare: wgpu::CompareFunction::Less,
            stencil: wgpu::StencilState::default(),
            bias: wgpu::DepthBiasState::default(),
        }),
        multisample: wgpu::MultisampleState::default(),
        fragment: Some(wgpu::FragmentState {
            module: shader,
            entry_point: Some(fs_entry),
            targets: &[Some(wgpu::ColorTargetState {
                format,
                blend: None,
                write_mask: wgpu::ColorWrites::ALL,
            })],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        }),
        cache: None,
        multiview: None,
    })
}

fn create_depth_view(device: &wgpu::Device, width: u32, height: u32) -> wgpu::TextureView {
    let tex = device.create_texture(&wgpu::TextureDescriptor {
        label: Some("depth"),
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
    tex.create_view(&wgpu::TextureViewDescriptor::default())
}

fn build_skin_textures(
    device: &wgpu::Device,
    queue: &wgpu::Queue,
    layout: &wgpu::BindGroupLayout,
    prefs: &TexturePrefs,
) -> Vec<wgpu::BindGroup> {
    let format = if prefs.srgb {
        wgpu::TextureFormat::Rgba8UnormSrgb
    } else {
        wgpu::TextureFormat::Rgba8Unorm
    };
    let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
        label: Some("skin_sampler"),
        address_mode_u: wgpu::AddressMode::ClampToEdge,
        address_mode_v: wgpu::AddressMode::ClampToEdge,
        mag_filter: wgpu::FilterMode::Linear,
        min_filter: wgpu::FilterMode::Linear,
        ..Default::default()
    });

    let mut groups = Vec::with_capacity(SKIN_COUNT);
    for skin in 0..SKIN_COUNT {
        let pixels = artwork::skin_pixels(skin, SKIN_TEX_WIDTH, SKIN_TEX_HEIGHT, prefs);
        let tex = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("skin_tex"),
            size: wgpu::Extent3d {
                width: SKIN_TEX_WIDTH,
                height: SKIN_TEX_HEIGHT,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });
        queue.write_texture(
            wgpu::TexelCopyTextureInfo {
                texture: &tex,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            &pixels,
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(4 * SKIN_TEX_WIDTH),
                rows_per_image: Some(SKIN_TEX_HEIGHT),
            },
            wgpu::Extent3d {
                width: SKIN_TEX_WIDTH,
                height: SKIN_TEX_HEIGHT,
                depth_or_array_layers: 1,
            },
        );
        let view = tex.create_view(&wgpu::TextureViewDescriptor::default());
        groups.push(device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("skin_bg"),
            layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: wgpu::BindingResource::TextureView(&view),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::Sampler(&sampler),
                },
            ],
        }));
    }
    groups
}

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .init();

    let event_loop = EventLoop::new().expect("event loop");
    let window = WindowBuilder::new()
        .with_title("NightVibe hero (native preview)")
        .build(&event_loop)
        .expect("window");

    let mut state = pollster::block_on(GpuState::new(&window)).expect("gpu");

    let mut scene = vibe_core::mesh::build_scene_graph();
    let binder = match scene.resolve(SCREEN_NODE) {
        Ok(id) => Some(SkinBinder::attach(&mut scene, id)),
        Err(e) => {
            log::warn!("{}; nodes present: {:?}", e, scene.node_names());
            None
        }
    };
    let mut choreographer = ScrollChoreographer::new(ChoreographyParams::default());
    let mut scroll = 0.0f32;
    let start = Instant::now();
    let mut last = start;

    event_loop
        .run(move |event, elwt| match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::Resized(size) => state.resize(size),
                WindowEvent::CloseRequested => elwt.exit(),
                WindowEvent::MouseWheel { delta, .. } => {
                    let lines = match delta {
                        MouseScrollDelta::LineDelta(_, y) => y,
                        MouseScrollDelta::PixelDelta(p) => p.y as f32 / PIXELS_PER_LINE,
                    };
                    scroll = wheel_step(scroll, lines, WHEEL_STEP);
                }
                _ => {}
            },
            Event::AboutToWait => {
                let now = Instant::now();
                let dt = (now - last).as_secs_f32().max(1e-4);
                last = now;
                let elapsed = start.elapsed().as_secs_f32();

                let skin = choreographer.advance(scroll, elapsed, dt);
                if let Some(b) = &binder {
                    b.bind(&mut scene, skin);
                    if let Some(image) = b.take_upload(&mut scene) {
                        state.set_active_skin(image);
                    }
                }
                match state.render(choreographer.pose()) {
                    Ok(_) => state.window.request_redraw(),
                    Err(wgpu::SurfaceError::Lost) => state.resize(state.window.inner_size()),
                    Err(wgpu::SurfaceError::OutOfMemory) => elwt.exit(),
                    Err(_) => {}
                }
            }
            _ => {}
        })
        .unwrap();
}
