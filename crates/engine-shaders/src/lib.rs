//! engine-shaders: WGSL shader sources for the transform demo.

/// Transformed quad pipeline: positions arrive in local pixel coordinates and
/// are carried to clip space by a single 3x3 affine matrix uniform. The
/// fragment stage flat-fills with the uniform color.
///
/// `mat3x3<f32>` follows uniform-buffer layout rules: each column is padded to
/// 16 bytes, so the host writes three vec4 columns (48 bytes) followed by the
/// color (16 bytes).
pub const QUAD_WGSL: &str = r#"
struct QuadUniform {
    transform: mat3x3<f32>,
    color: vec4<f32>,
};

@group(0) @binding(0) var<uniform> quad: QuadUniform;

struct VsOut {
    @builtin(position) pos: vec4<f32>,
};

@vertex
fn vs_main(@location(0) in_pos: vec2<f32>) -> VsOut {
    var out: VsOut;
    // in_pos is in local pixel coordinates (y-down); the matrix carries the
    // full model + projection mapping to clip space.
    let p = quad.transform * vec3<f32>(in_pos, 1.0);
    out.pos = vec4<f32>(p.xy, 0.0, 1.0);
    return out;
}

@fragment
fn fs_main() -> @location(0) vec4<f32> {
    return quad.color;
}
"#;
