//! spin-window: minimal winit + wgpu window/event wrapper for the demo.
//!
//! Responsibilities:
//! - Create window + surface + device/queue.
//! - Manage surface configuration and resizing.
//! - Dispatch basic events (redraw, resize, key presses with shift state).
//! - Expose helpers to acquire a frame for drawing and to request redraws.

use std::sync::Arc;

use anyhow::{Context, Result};
use engine_core::{make_surface_config, wgpu};
use winit::dpi::PhysicalSize;
use winit::event::{Event, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::keyboard::KeyCode;
use winit::window::{Window, WindowBuilder};

pub mod events;
use events::SpinWindowEvent;

pub struct SpinWindow {
    // Winit objects
    event_loop: EventLoop<()>,
    // We must leak the window to satisfy wgpu surface lifetime requirements.
    window: &'static Window,
    // Wgpu objects
    _instance: wgpu::Instance,
    surface: wgpu::Surface<'static>,
    _adapter: wgpu::Adapter,
    device: Arc<wgpu::Device>,
    queue: Arc<wgpu::Queue>,
    config: wgpu::SurfaceConfiguration,
    size: PhysicalSize<u32>,
}

pub struct WindowCtx<'a> {
    window: &'a Window,
    device: &'a Arc<wgpu::Device>,
    queue: &'a Arc<wgpu::Queue>,
    surface: &'a wgpu::Surface<'static>,
    config: &'a mut wgpu::SurfaceConfiguration,
    size: PhysicalSize<u32>,
}

impl<'a> WindowCtx<'a> {
    pub fn window(&self) -> &Window {
        self.window
    }
    pub fn device(&self) -> &wgpu::Device {
        self.device
    }
    pub fn queue(&self) -> &wgpu::Queue {
        self.queue
    }
    pub fn surface_config(&self) -> &wgpu::SurfaceConfiguration {
        self.config
    }
    pub fn size(&self) -> PhysicalSize<u32> {
        self.size
    }
    pub fn request_redraw(&self) {
        self.window.request_redraw();
    }
    pub fn acquire_current_frame(&self) -> Result<wgpu::SurfaceTexture> {
        Ok(self.surface.get_current_texture()?)
    }
    /// Re-apply the current surface configuration (after a lost/outdated
    /// surface error).
    pub fn reconfigure_surface(&self) {
        self.surface.configure(self.device, self.config);
    }
}

pub trait EventHandler {
    fn init(&mut self, _ctx: &mut WindowCtx) -> Result<()> {
        Ok(())
    }
    fn on_resize(&mut self, _ctx: &mut WindowCtx, _size: PhysicalSize<u32>) -> Result<()> {
        Ok(())
    }
    fn on_key(&mut self, _ctx: &mut WindowCtx, _code: KeyCode, _shift: bool) -> Result<()> {
        Ok(())
    }
    fn on_redraw(&mut self, _ctx: &mut WindowCtx) -> Result<()> {
        Ok(())
    }
}

impl SpinWindow {
    pub fn new(title: &str) -> Result<Self> {
        // Create event loop and window
        let event_loop = EventLoop::new()?;
        let window = WindowBuilder::new().with_title(title).build(&event_loop)?;
        let window: &'static Window = Box::leak(Box::new(window));

        // Create wgpu instance + surface
        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(window)?;

        // Request adapter/device; no adapter is fatal to the demo.
        let adapter = pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::HighPerformance,
            force_fallback_adapter: false,
            compatible_surface: Some(&surface),
        }))
        .context("no suitable GPU adapter found")?;
        log::info!("using adapter: {:?}", adapter.get_info());

        let (device, queue) =
            pollster::block_on(adapter.request_device(&wgpu::DeviceDescriptor::default(), None))
                .context("failed to acquire device")?;

        // Shader and pipeline validation errors surface here; they are
        // logged and the process carries on without a working draw.
        device.on_uncaptured_error(Box::new(|e| {
            log::error!("uncaptured wgpu error: {e}");
        }));

        // Configure surface
        let size = window.inner_size();
        let config = make_surface_config(&adapter, &surface, size.width, size.height);
        surface.configure(&device, &config);

        Ok(Self {
            event_loop,
            window,
            _instance: instance,
            surface,
            _adapter: adapter,
            device: Arc::new(device),
            queue: Arc::new(queue),
            config,
            size,
        })
    }

    pub fn run(mut self, mut handler: impl EventHandler + 'static) -> Result<()> {
        let mut shift = false;
        let mut needs_init = true;

        Ok(self.event_loop.run(move |event, elwt| {
            // Redraws are driven by input, not by a frame clock.
            elwt.set_control_flow(ControlFlow::Wait);
            match event {
                Event::Resumed => {
                    if needs_init {
                        let mut ctx = WindowCtx {
                            window: self.window,
                            device: &self.device,
                            queue: &self.queue,
                            surface: &self.surface,
                            config: &mut self.config,
                            size: self.size,
                        };
                        if let Err(e) = handler.init(&mut ctx) {
                            log::error!("handler init failed: {e:#}");
                        }
                        needs_init = false;
                        // First frame before any input arrives.
                        self.window.request_redraw();
                    }
                }
                Event::WindowEvent { window_id, event } if window_id == self.window.id() => {
                    if let WindowEvent::ModifiersChanged(mods) = &event {
                        shift = mods.state().shift_key();
                        return;
                    }
                    let Some(translated) = events::translate_window_event(&event, shift) else {
                        return;
                    };
                    if let SpinWindowEvent::CloseRequested = translated {
                        elwt.exit();
                        return;
                    }
                    if let SpinWindowEvent::Resized(new_size) = translated {
                        self.size = new_size;
                        if new_size.width > 0 && new_size.height > 0 {
                            self.config.width = new_size.width;
                            self.config.height = new_size.height;
                            self.surface.configure(&self.device, &self.config);
                        }
                    }
                    let mut ctx = WindowCtx {
                        window: self.window,
                        device: &self.device,
                        queue: &self.queue,
                        surface: &self.surface,
                        config: &mut self.config,
                        size: self.size,
                    };
                    let dispatched = match translated {
                        SpinWindowEvent::Resized(new_size) => handler.on_resize(&mut ctx, new_size),
                        SpinWindowEvent::KeyPressed { code, shift } => {
                            handler.on_key(&mut ctx, code, shift)
                        }
                        SpinWindowEvent::RedrawRequested => handler.on_redraw(&mut ctx),
                        SpinWindowEvent::CloseRequested => Ok(()),
                    };
                    if let Err(e) = dispatched {
                        log::error!("event handler failed: {e:#}");
                    }
                }
                _ => {}
            }
        })?)
    }

    pub fn window(&self) -> &Window {
        self.window
    }
}
