use palette::{FromColor, LinSrgba, Srgba};

// sRGB → linear conversions for configured colors; the shader works in
// linear space on an sRGB surface.

/// Convert an sRGB u8 RGBA quadruple to linear RGBA floats.
pub fn srgba_u8_to_linear(c: [u8; 4]) -> [f32; 4] {
    let s = Srgba::new(
        c[0] as f32 / 255.0,
        c[1] as f32 / 255.0,
        c[2] as f32 / 255.0,
        c[3] as f32 / 255.0,
    );
    let lin: LinSrgba = LinSrgba::from_color(s);
    [lin.red, lin.green, lin.blue, lin.alpha]
}

/// Linear RGBA floats to the `wgpu::Color` used for clears.
pub fn to_wgpu_color(c: [f32; 4]) -> wgpu::Color {
    wgpu::Color {
        r: c[0] as f64,
        g: c[1] as f64,
        b: c[2] as f64,
        a: c[3] as f64,
    }
}
