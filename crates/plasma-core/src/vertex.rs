use glam::{Vec2, Vec4};

/// Vertices per draw: one triangle, no vertex buffer.
pub const FULLSCREEN_VERTEX_COUNT: u32 = 3;

/// What the vertex stage hands to the rasterizer for one invocation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VertexOutput {
    /// Clip-space position (z = 0, w = 1).
    pub position: Vec4,
    /// Interpolated across the triangle and read by the fragment stage.
    pub uv: Vec2,
}

/// Corner of the oversized triangle in [0, 2]² picked by the vertex index.
///
/// 0 → (0, 0), 1 → (2, 0), 2 → (0, 2). The bit tricks are total over `u32`,
/// so out-of-range indices still map somewhere (3 → (2, 2)); a draw of
/// [`FULLSCREEN_VERTEX_COUNT`] vertices never issues them.
pub fn raw_corner(index: u32) -> Vec2 {
    Vec2::new(((index << 1) & 2) as f32, (index & 2) as f32)
}

/// Vertex stage: clip-space position and `uv` for one invocation.
pub fn fullscreen_vertex(index: u32) -> VertexOutput {
    let raw = raw_corner(index);
    VertexOutput {
        position: (raw * 2.0 - 1.0).extend(0.0).extend(1.0),
        uv: (raw - 0.5) * 2.0,
    }
}

/// All three invocations of a single draw, in index order.
pub fn fullscreen_triangle() -> [VertexOutput; 3] {
    [0, 1, 2].map(fullscreen_vertex)
}
