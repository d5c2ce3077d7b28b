//! engine-core: matrix math, transform state, and the quad renderer for the
//! 2D affine transform demo.

/// Re-export wgpu for downstream crates while avoiding direct dependency leakage.
pub use wgpu;

mod color;
mod matrix;
mod quad;
mod renderer;
mod transform;

pub use color::{srgba_u8_to_linear, to_wgpu_color};
pub use matrix::Mat3;
pub use quad::{Vertex, quad_vertices};
pub use renderer::{QuadRenderer, QuadUniform};
pub use transform::{TransformState, Viewport};

/// Choose an sRGB surface format when available; otherwise, pick the first format.
pub fn choose_srgb_surface_format(
    adapter: &wgpu::Adapter,
    surface: &wgpu::Surface,
) -> wgpu::TextureFormat {
    let caps = surface.get_capabilities(adapter);
    caps.formats
        .iter()
        .copied()
        .find(|f| f.is_srgb())
        .unwrap_or(caps.formats[0])
}

/// Create a surface configuration for the given size, favoring FIFO present
/// mode and an opaque alpha mode when the adapter offers them.
pub fn make_surface_config(
    adapter: &wgpu::Adapter,
    surface: &wgpu::Surface,
    width: u32,
    height: u32,
) -> wgpu::SurfaceConfiguration {
    let caps = surface.get_capabilities(adapter);
    let format = choose_srgb_surface_format(adapter, surface);
    let present_mode = caps
        .present_modes
        .iter()
        .copied()
        .find(|m| *m == wgpu::PresentMode::Fifo)
        .unwrap_or(caps.present_modes[0]);
    let alpha_mode = caps
        .alpha_modes
        .iter()
        .copied()
        .find(|m| *m == wgpu::CompositeAlphaMode::Opaque)
        .unwrap_or(caps.alpha_modes[0]);
    wgpu::SurfaceConfiguration {
        usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
        format,
        width,
        height,
        present_mode,
        alpha_mode,
        view_formats: vec![],
        desired_maximum_frame_latency: 1,
    }
}
