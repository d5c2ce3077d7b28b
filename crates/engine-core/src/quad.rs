use bytemuck::{Pod, Zeroable};

/// Position-only vertex; the quad is flat-colored via a uniform.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, Pod, Zeroable)]
pub struct Vertex {
    pub pos: [f32; 2],
}

/// Two triangles spanning `[0, side] x [0, side]` in local pixel space,
/// listed for a plain triangle-list draw (no index buffer).
pub fn quad_vertices(side: f32) -> [Vertex; 6] {
    [
        Vertex { pos: [0.0, 0.0] },
        Vertex { pos: [side, 0.0] },
        Vertex { pos: [side, side] },
        Vertex { pos: [0.0, 0.0] },
        Vertex { pos: [0.0, side] },
        Vertex { pos: [side, side] },
    ]
}
