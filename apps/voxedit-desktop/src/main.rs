mod state;

use anyhow::{Context as _, Result};
use clap::Parser;
use egui::Context as EguiContext;
use glam::Vec2;
use state::AppState;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;
use voxedit_common::EditorConfig;
use voxedit_render_wgpu::WgpuRenderer;
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::{DeviceEvent, ElementState, KeyEvent, MouseButton, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::PhysicalKey;
use winit::window::{CursorGrabMode, Window, WindowId};

const INITIAL_SIZE: PhysicalSize<u32> = PhysicalSize::new(1280, 720);

#[derive(Parser)]
#[command(name = "voxedit-desktop", about = "Voxel editor desktop application")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Editor config file (JSON)
    #[arg(long)]
    config: Option<PathBuf>,
}

/// Window and GPU objects, created once the event loop resumes.
struct Gpu {
    window: Arc<Window>,
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    renderer: WgpuRenderer,
    egui_winit: egui_winit::State,
    egui_renderer: egui_wgpu::Renderer,
}

struct GpuApp {
    editor_config: EditorConfig,
    state: AppState,
    gpu: Option<Gpu>,
    egui_ctx: EguiContext,
}

impl GpuApp {
    fn new(editor_config: EditorConfig) -> Result<Self> {
        let state = AppState::new(&editor_config, INITIAL_SIZE.width, INITIAL_SIZE.height)
            .context("brush config")?;
        Ok(Self {
            editor_config,
            state,
            gpu: None,
            egui_ctx: EguiContext::default(),
        })
    }

    fn init_gpu(&self, event_loop: &ActiveEventLoop) -> Result<Gpu> {
        let attrs = Window::default_attributes()
            .with_title("Voxel Editor")
            .with_inner_size(INITIAL_SIZE);
        let window = Arc::new(event_loop.create_window(attrs).context("create window")?);

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });

        let surface = instance
            .create_surface(window.clone())
            .context("create surface")?;

        let adapter = pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::HighPerformance,
            compatible_surface: Some(&surface),
            force_fallback_adapter: false,
        }))
        .context("find adapter")?;

        let (device, queue) = pollster::block_on(adapter.request_device(
            &wgpu::DeviceDescriptor {
                label: Some("voxedit_device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::default(),
                memory_hints: Default::default(),
            },
            None,
        ))
        .context("create device")?;

        let size = window.inner_size();
        let surface_caps = surface.get_capabilities(&adapter);
        let surface_format = surface_caps
            .formats
            .iter()
            .find(|f| f.is_srgb())
            .or(surface_caps.formats.first())
            .copied()
            .context("surface reports no formats")?;

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: wgpu::PresentMode::AutoVsync,
            alpha_mode: surface_caps
                .alpha_modes
                .first()
                .copied()
                .unwrap_or(wgpu::CompositeAlphaMode::Auto),
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let renderer = WgpuRenderer::new(
            &device,
            surface_format,
            config.width,
            config.height,
            &self.editor_config.grid,
        );

        let egui_winit = egui_winit::State::new(
            self.egui_ctx.clone(),
            egui::ViewportId::ROOT,
            &window,
            Some(window.scale_factor() as f32),
            None,
            None,
        );
        let egui_renderer = egui_wgpu::Renderer::new(&device, surface_format, None, 1, false);

        tracing::info!(
            "GPU initialized with {} backend",
            adapter.get_info().backend.to_str()
        );

        Ok(Gpu {
            window,
            surface,
            device,
            queue,
            config,
            renderer,
            egui_winit,
            egui_renderer,
        })
    }

    fn redraw(&mut self) {
        let dt = self.state.tick();
        self.state.update(dt);

        let Some(gpu) = &mut self.gpu else {
            return;
        };

        let output = match gpu.surface.get_current_texture() {
            Ok(t) => t,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                gpu.surface.configure(&gpu.device, &gpu.config);
                return;
            }
            Err(e) => {
                tracing::error!("surface error: {e}");
                return;
            }
        };

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        gpu.renderer
            .render(&gpu.device, &gpu.queue, &view, &self.state.scene());

        let raw_input = gpu.egui_winit.take_egui_input(&gpu.window);
        let full_output = self.egui_ctx.run(raw_input, |ctx| {
            self.state.draw_ui(ctx);
        });
        self.state
            .set_ui_wants_pointer(self.egui_ctx.wants_pointer_input());

        gpu.egui_winit
            .handle_platform_output(&gpu.window, full_output.platform_output);

        let paint_jobs = self
            .egui_ctx
            .tessellate(full_output.shapes, full_output.pixels_per_point);

        let screen_descriptor = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [gpu.config.width, gpu.config.height],
            pixels_per_point: full_output.pixels_per_point,
        };

        for (id, image_delta) in &full_output.textures_delta.set {
            gpu.egui_renderer
                .update_texture(&gpu.device, &gpu.queue, *id, image_delta);
        }
        let mut encoder = gpu
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("egui_encoder"),
            });
        gpu.egui_renderer.update_buffers(
            &gpu.device,
            &gpu.queue,
            &mut encoder,
            &paint_jobs,
            &screen_descriptor,
        );
        {
            let mut pass = encoder
                .begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("egui_pass"),
                    color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                        view: &view,
                        resolve_target: None,
                        ops: wgpu::Operations {
                            load: wgpu::LoadOp::Load,
                            store: wgpu::StoreOp::Store,
                        },
                    })],
                    depth_stencil_attachment: None,
                    ..Default::default()
                })
                .forget_lifetime();
            gpu.egui_renderer
                .render(&mut pass, &paint_jobs, &screen_descriptor);
        }
        gpu.queue.submit(std::iter::once(encoder.finish()));
        for id in &full_output.textures_delta.free {
            gpu.egui_renderer.free_texture(id);
        }

        output.present();

        // Placement happens last, once the UI has claimed or released the pointer.
        self.state.commit_click();

        gpu.window.request_redraw();
    }
}

/// Grab and hide the cursor for mouse look, or release it for the UI.
fn apply_look_lock(window: &Window, locked: bool) {
    let grab = if locked {
        window
            .set_cursor_grab(CursorGrabMode::Locked)
            .or_else(|_| window.set_cursor_grab(CursorGrabMode::Confined))
    } else {
        window.set_cursor_grab(CursorGrabMode::None)
    };
    if let Err(e) = grab {
        tracing::warn!("cursor grab not supported: {e}");
    }
    window.set_cursor_visible(!locked);
}

impl ApplicationHandler for GpuApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.gpu.is_some() {
            return;
        }

        match self.init_gpu(event_loop) {
            Ok(gpu) => {
                let size = gpu.window.inner_size();
                self.state.resize(size.width, size.height);
                apply_look_lock(&gpu.window, self.state.look_locked());
                self.gpu = Some(gpu);
            }
            Err(e) => {
                tracing::error!("failed to initialize graphics: {e:#}");
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        let Some(gpu) = &mut self.gpu else {
            return;
        };

        // While looking around the pointer belongs to the viewport, not egui.
        let pointer_event = matches!(
            event,
            WindowEvent::CursorMoved { .. } | WindowEvent::MouseInput { .. }
        );
        if !(pointer_event && self.state.look_locked()) {
            let response = gpu.egui_winit.on_window_event(&gpu.window, &event);
            if response.consumed {
                return;
            }
        }

        match event {
            WindowEvent::CloseRequested => {
                tracing::info!(placed = self.state.editor.placed_count(), "closing");
                event_loop.exit();
            }
            WindowEvent::Resized(new_size) => {
                gpu.config.width = new_size.width.max(1);
                gpu.config.height = new_size.height.max(1);
                gpu.surface.configure(&gpu.device, &gpu.config);
                gpu.renderer
                    .resize(&gpu.device, gpu.config.width, gpu.config.height);
                self.state.resize(new_size.width, new_size.height);
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(key),
                        state: key_state,
                        repeat,
                        ..
                    },
                ..
            } => {
                let pressed = key_state == ElementState::Pressed;
                if let Some(locked) = self.state.handle_key(key, pressed, repeat) {
                    apply_look_lock(&gpu.window, locked);
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.state
                    .handle_cursor_moved(Vec2::new(position.x as f32, position.y as f32));
            }
            WindowEvent::MouseInput {
                button: MouseButton::Left,
                state: btn_state,
                ..
            } => {
                self.state
                    .handle_primary_button(btn_state == ElementState::Pressed);
            }
            WindowEvent::RedrawRequested => {
                self.redraw();
            }
            _ => {}
        }
    }

    fn device_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _device_id: winit::event::DeviceId,
        event: DeviceEvent,
    ) {
        if let DeviceEvent::MouseMotion { delta } = event {
            self.state
                .handle_mouse_motion(Vec2::new(delta.0 as f32, delta.1 as f32));
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(gpu) = &self.gpu {
            gpu.window.request_redraw();
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .init();

    let config = EditorConfig::load_or_default(cli.config.as_deref())
        .with_context(|| format!("loading config {:?}", cli.config))?;

    tracing::info!("voxedit-desktop starting");

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = GpuApp::new(config)?;
    event_loop.run_app(&mut app)?;

    Ok(())
}
