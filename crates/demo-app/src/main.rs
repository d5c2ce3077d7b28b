use anyhow::Result;
use engine_core::{QuadRenderer, TransformState, Viewport, srgba_u8_to_linear, to_wgpu_color};
use rand::rngs::ThreadRng;
use spin_config::SpinConfig;
use spin_window::{EventHandler, SpinWindow, WindowCtx};
use winit::dpi::PhysicalSize;
use winit::keyboard::KeyCode;

mod input;

struct DemoApp {
    config: SpinConfig,
    state: TransformState,
    rng: ThreadRng,
    clear_color: wgpu::Color,
    // Created in init() once the device exists.
    renderer: Option<QuadRenderer>,
}

impl EventHandler for DemoApp {
    fn init(&mut self, ctx: &mut WindowCtx) -> Result<()> {
        self.renderer = Some(QuadRenderer::new(
            ctx.device(),
            ctx.queue(),
            ctx.surface_config().format,
            self.config.quad.side,
        ));
        Ok(())
    }

    fn on_resize(&mut self, ctx: &mut WindowCtx, size: PhysicalSize<u32>) -> Result<()> {
        log::debug!("surface resized to {}x{}", size.width, size.height);
        ctx.request_redraw();
        Ok(())
    }

    fn on_key(&mut self, ctx: &mut WindowCtx, code: KeyCode, shift: bool) -> Result<()> {
        if input::apply_key(&mut self.state, code, shift, &self.config.input, &mut self.rng) {
            ctx.request_redraw();
        }
        Ok(())
    }

    fn on_redraw(&mut self, ctx: &mut WindowCtx) -> Result<()> {
        let Some(renderer) = &self.renderer else {
            return Ok(());
        };

        let frame = match ctx.acquire_current_frame() {
            Ok(frame) => frame,
            Err(e) => {
                // Lost/outdated surface: reconfigure and draw on the next pass.
                log::warn!("surface frame unavailable ({e:#}), reconfiguring");
                ctx.reconfigure_surface();
                ctx.request_redraw();
                return Ok(());
            }
        };
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = ctx
            .device()
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("frame-encoder"),
            });

        let size = ctx.size();
        let viewport = Viewport {
            width: size.width.max(1),
            height: size.height.max(1),
        };
        renderer.render_frame(
            &mut encoder,
            ctx.queue(),
            &view,
            &self.state,
            viewport,
            self.clear_color,
        );

        ctx.queue().submit(std::iter::once(encoder.finish()));
        frame.present();
        Ok(())
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let config = SpinConfig::load();
    let mut rng = rand::thread_rng();
    let mut state = TransformState {
        scale: config.quad.scale,
        rotation_deg: config.quad.rotation_deg,
        translation: config.quad.translation,
        ..Default::default()
    };
    // The demo starts with a random quad color, like every redraw of the
    // Space key.
    state.randomize_color(&mut rng);

    let clear_color = to_wgpu_color(srgba_u8_to_linear(config.window.clear_color));

    let window = SpinWindow::new(&config.window.title).inspect_err(|e| {
        log::error!("startup failed: {e:#}");
    })?;

    window.run(DemoApp {
        config,
        state,
        rng,
        clear_color,
        renderer: None,
    })
}
