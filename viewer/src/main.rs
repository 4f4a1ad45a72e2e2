use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::Context;
use bytemuck::{Pod, Zeroable};
use life::config::{HEIGHT, TITLE, WIDTH};
use life::display::{self, DisplayMode, Renderer};
use life::Simulation;
use thiserror::Error;
use wgpu::util::DeviceExt;
use wgpu::StoreOp;
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowAttributes, WindowId};

const LIVE_TINT: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
const CYCLIC_TINT: [f32; 4] = [0.0, 1.0, 0.0, 1.0];
const FULLSCREEN_VERTEX_COUNT: u32 = 3;

/// Failures that end the process before the first frame.
#[derive(Debug, Error)]
enum SetupError {
    #[error("display subsystem initialization failed")]
    Display(#[from] winit::error::EventLoopError),
    #[error("window creation failed")]
    Window(#[from] winit::error::OsError),
    #[error("graphics context creation failed: {0:#}")]
    Context(anyhow::Error),
}

#[repr(C)]
#[derive(Copy, Clone, Pod, Zeroable)]
struct Tint {
    color: [f32; 4],
}

impl From<DisplayMode> for Tint {
    fn from(mode: DisplayMode) -> Self {
        let color = match mode {
            DisplayMode::Live => LIVE_TINT,
            DisplayMode::Cyclic => CYCLIC_TINT,
        };
        Tint { color }
    }
}

/// The window plus everything the GPU needs to show one grid per frame.
struct State {
    window: Arc<Window>,
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    size: PhysicalSize<u32>,
    pipeline: wgpu::RenderPipeline,
    bind_group: wgpu::BindGroup,
    cell_texture: wgpu::Texture,
    tint_buffer: wgpu::Buffer,
    open: bool,
}

impl State {
    async fn new(window: Arc<Window>) -> anyhow::Result<Self> {
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::PRIMARY,
            flags: wgpu::InstanceFlags::from_env_or_default(),
            backend_options: wgpu::BackendOptions::default(),
        });

        let surface = instance.create_surface(window.clone()).context("create surface")?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .context("request adapter")?;

        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::default(),
                memory_hints: wgpu::MemoryHints::Performance,
                trace: wgpu::Trace::default(),
            })
            .await
            .context("request device")?;

        let capabilities = surface.get_capabilities(&adapter);
        let surface_format = capabilities
            .formats
            .iter()
            .copied()
            .find(|format| format.is_srgb())
            .or_else(|| capabilities.formats.first().copied())
            .context("surface reports no formats")?;

        let size = window.inner_size();
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: capabilities.alpha_modes[0],
            desired_maximum_frame_latency: 1,
            view_formats: vec![],
        };
        surface.configure(&device, &config);

        let cell_texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("cell_texture"),
            size: cell_extent(),
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::R8Unorm,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });
        let cell_view = cell_texture.create_view(&wgpu::TextureViewDescriptor::default());

        let cell_sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("cell_sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Nearest,
            min_filter: wgpu::FilterMode::Nearest,
            mipmap_filter: wgpu::FilterMode::Nearest,
            ..Default::default()
        });

        let tint_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("tint_buffer"),
            contents: bytemuck::bytes_of(&Tint::from(DisplayMode::Live)),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("cell_bind_group_layout"),
            entries: &[
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Texture {
                        multisampled: false,
                        view_dimension: wgpu::TextureViewDimension::D2,
                        sample_type: wgpu::TextureSampleType::Float { filterable: true },
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 2,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                },
            ],
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("cell_bind_group"),
            layout: &bind_group_layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: wgpu::BindingResource::Sampler(&cell_sampler),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::TextureView(&cell_view),
                },
                wgpu::BindGroupEntry {
                    binding: 2,
                    resource: tint_buffer.as_entire_binding(),
                },
            ],
        });

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shader.wgsl").into()),
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("pipeline_layout"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                compilation_options: wgpu::PipelineCompilationOptions::default(),
                buffers: &[],
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                compilation_options: wgpu::PipelineCompilationOptions::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: surface_format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),
            primitive: wgpu::PrimitiveState::default(),
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
            cache: None,
        });

        Ok(Self {
            window,
            surface,
            device,
            queue,
            config,
            size,
            pipeline,
            bind_group,
            cell_texture,
            tint_buffer,
            open: true,
        })
    }

    fn resize(&mut self, new_size: PhysicalSize<u32>) {
        if new_size.width == 0 || new_size.height == 0 {
            return;
        }
        self.size = new_size;
        self.config.width = new_size.width;
        self.config.height = new_size.height;
        self.surface.configure(&self.device, &self.config);
    }

    fn render(&mut self, cells: &[u8], mode: DisplayMode) -> Result<(), wgpu::SurfaceError> {
        let frame = self.surface.get_current_texture()?;

        self.queue.write_texture(
            wgpu::TexelCopyTextureInfo {
                texture: &self.cell_texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            cells,
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(WIDTH as u32),
                rows_per_image: Some(HEIGHT as u32),
            },
            cell_extent(),
        );
        self.queue.write_buffer(&self.tint_buffer, 0, bytemuck::bytes_of(&Tint::from(mode)));

        let view = frame.texture.create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor { label: Some("encoder") });

        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("render_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color::BLACK),
                        store: StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                occlusion_query_set: None,
                timestamp_writes: None,
            });

            render_pass.set_pipeline(&self.pipeline);
            render_pass.set_bind_group(0, &self.bind_group, &[]);
            render_pass.draw(0..FULLSCREEN_VERTEX_COUNT, 0..1);
        }

        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}

impl Renderer for State {
    type Error = wgpu::SurfaceError;

    fn is_open(&self) -> bool {
        self.open
    }

    fn set_title(&mut self, title: &str) {
        self.window.set_title(title);
    }

    fn set_swap_interval(&mut self, interval: u32) {
        self.config.present_mode = present_mode(interval);
        self.surface.configure(&self.device, &self.config);
    }

    fn present(&mut self, cells: &[u8], mode: DisplayMode) -> Result<(), wgpu::SurfaceError> {
        self.render(cells, mode)
    }
}

/// Vsync for any non-zero interval. `AutoNoVsync` falls back to `Fifo`
/// itself when the surface cannot tear.
fn present_mode(interval: u32) -> wgpu::PresentMode {
    if interval == 0 {
        wgpu::PresentMode::AutoNoVsync
    } else {
        wgpu::PresentMode::Fifo
    }
}

fn cell_extent() -> wgpu::Extent3d {
    wgpu::Extent3d {
        width: WIDTH as u32,
        height: HEIGHT as u32,
        depth_or_array_layers: 1,
    }
}

struct ViewerApp {
    window_attrs: WindowAttributes,
    window_id: Option<WindowId>,
    state: Option<State>,
    simulation: Option<Simulation>,
    setup_error: Option<SetupError>,
    frame_count: u32,
    last_fps_log: Instant,
}

impl ViewerApp {
    fn new() -> Self {
        let attrs = Window::default_attributes()
            .with_title(TITLE)
            .with_inner_size(PhysicalSize::new(WIDTH as u32, HEIGHT as u32))
            .with_resizable(false);
        Self {
            window_attrs: attrs,
            window_id: None,
            state: None,
            simulation: None,
            setup_error: None,
            frame_count: 0,
            last_fps_log: Instant::now(),
        }
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, err: SetupError) {
        self.setup_error = Some(err);
        event_loop.exit();
    }
}

impl ApplicationHandler<()> for ViewerApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.state.is_some() {
            return;
        }
        let window = match event_loop.create_window(self.window_attrs.clone()) {
            Ok(window) => Arc::new(window),
            Err(err) => return self.fail(event_loop, err.into()),
        };
        let window_id = window.id();

        let mut state = match pollster::block_on(State::new(window.clone())) {
            Ok(state) => state,
            Err(err) => return self.fail(event_loop, SetupError::Context(err)),
        };
        display::configure(&mut state);
        window.request_redraw();

        self.window_id = Some(window_id);
        self.state = Some(state);
        self.simulation = Some(Simulation::from_thread_rng(WIDTH, HEIGHT));
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, window_id: WindowId, event: WindowEvent) {
        if Some(window_id) != self.window_id {
            return;
        }
        let (Some(state), Some(simulation)) = (self.state.as_mut(), self.simulation.as_mut()) else {
            return;
        };
        match event {
            WindowEvent::CloseRequested => {
                state.open = false;
                event_loop.exit();
            }
            WindowEvent::Resized(size) => state.resize(size),
            WindowEvent::RedrawRequested => {
                if !state.is_open() {
                    return;
                }
                match display::tick(simulation, state, Instant::now()) {
                    Ok(()) => {
                        self.frame_count += 1;
                        let elapsed = self.last_fps_log.elapsed();
                        if elapsed >= Duration::from_secs(1) {
                            let fps = self.frame_count as f64 / elapsed.as_secs_f64();
                            log::info!("fps: {:.1}", fps);
                            self.frame_count = 0;
                            self.last_fps_log = Instant::now();
                        }
                    }
                    Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => state.resize(state.size),
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("surface out of memory");
                        event_loop.exit();
                    }
                    Err(err) => log::warn!("skipped frame: {err}"),
                }
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if let Some(state) = &self.state {
            state.window.request_redraw();
        }
        event_loop.set_control_flow(ControlFlow::Poll);
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let event_loop = EventLoop::new().map_err(SetupError::from)?;
    let mut app = ViewerApp::new();
    event_loop.run_app(&mut app)?;
    if let Some(err) = app.setup_error.take() {
        return Err(err.into());
    }
    Ok(())
}
