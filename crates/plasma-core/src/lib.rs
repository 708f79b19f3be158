//! CPU reference for the plasma shader pair.
//!
//! The GPU runs two stateless stages: a vertex stage that emits a fullscreen
//! triangle from the vertex index alone, and a fragment stage that turns the
//! interpolated `uv` into a plasma color. This crate evaluates the same math
//! on the CPU so it can be tested and previewed without a device.

pub mod plasma;
pub mod raster;
pub mod vertex;

// ---------------------------------------------------------------------------
// PushConstants — the host binding the shaders declare but do not read yet
// ---------------------------------------------------------------------------

/// Per-draw data a host would push before drawing the fullscreen triangle.
///
/// Must match the commented-out `PushConstants` block in `plasma.wgsl`.
/// The fragment shader currently ignores it: time is fixed at
/// [`plasma::DEFAULT_TIME`] and resolution is never read. The CPU reference
/// uses it as its frame description; `raster::render` only accepts sides up
/// to [`raster::MAX_EXTENT`], well inside the range `f32` stores exactly.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct PushConstants {
    pub resolution: [f32; 2],
    pub time: f32,
    pub _pad: f32, // keep 16-byte size
}

impl PushConstants {
    pub fn new(width: u32, height: u32, time: f32) -> Self {
        Self {
            resolution: [width as f32, height as f32],
            time,
            _pad: 0.0,
        }
    }
}

impl Default for PushConstants {
    fn default() -> Self {
        Self::new(800, 600, plasma::DEFAULT_TIME)
    }
}
