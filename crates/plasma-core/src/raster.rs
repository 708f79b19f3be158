use glam::{vec2, Vec2, Vec3, Vec4};
use thiserror::Error;

use crate::plasma::colorize;
use crate::vertex::{fullscreen_triangle, VertexOutput};
use crate::PushConstants;

/// Largest accepted side, in pixels. Same as wgpu's default
/// `max_texture_dimension_2d`, so anything the reference renders also fits
/// in a default render target.
pub const MAX_EXTENT: u32 = 8192;

#[derive(Debug, Error, PartialEq)]
pub enum RasterError {
    #[error("invalid resolution {width}x{height}: both sides must be whole numbers in 1..={}", MAX_EXTENT)]
    InvalidResolution { width: f32, height: f32 },
}

/// RGBA pixels, row-major, row 0 at the top of the image.
#[derive(Debug, Clone)]
pub struct Frame {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Vec4>,
}

impl Frame {
    /// Offset of pixel `(x, y)` in `pixels`.
    pub fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    pub fn pixel(&self, x: u32, y: u32) -> Vec4 {
        self.pixels[self.index(x, y)]
    }

    /// Pixels as 8-bit UNORM, the way a `*Unorm` color attachment stores them.
    pub fn to_rgba8(&self) -> Vec<u8> {
        self.pixels.iter().flat_map(|&c| to_rgba8(c)).collect()
    }
}

/// Center of pixel `(x, y)` in y-up NDC. Row 0 maps to the top edge, as with
/// the flipped viewport the original host set up.
pub fn pixel_center_ndc(x: u32, y: u32, width: u32, height: u32) -> Vec2 {
    vec2(
        (x as f32 + 0.5) / width as f32 * 2.0 - 1.0,
        1.0 - (y as f32 + 0.5) / height as f32 * 2.0,
    )
}

/// Barycentric weights of `p` with respect to the clip-space xy of `tri`.
/// `None` when `p` is outside or the triangle has no area.
pub fn barycentric(tri: &[VertexOutput; 3], p: Vec2) -> Option<Vec3> {
    let [a, b, c] = tri.map(|v| v.position.truncate().truncate());
    let area = (b - a).perp_dot(c - a);
    if area == 0.0 {
        return None;
    }
    let w0 = (b - p).perp_dot(c - p) / area;
    let w1 = (c - p).perp_dot(a - p) / area;
    let w2 = 1.0 - w0 - w1;
    if w0 < 0.0 || w1 < 0.0 || w2 < 0.0 {
        return None;
    }
    Some(Vec3::new(w0, w1, w2))
}

/// Linearly interpolated `uv` at `p`. The positions all have w = 1, so
/// perspective-correct and affine interpolation agree.
pub fn interpolate_uv(tri: &[VertexOutput; 3], p: Vec2) -> Option<Vec2> {
    let w = barycentric(tri, p)?;
    Some(tri[0].uv * w.x + tri[1].uv * w.y + tri[2].uv * w.z)
}

fn pixel_extent(value: f32) -> Option<u32> {
    (value.is_finite() && value >= 1.0 && value.fract() == 0.0 && value <= MAX_EXTENT as f32)
        .then_some(value as u32)
}

/// Draw the fullscreen triangle once at `pc.resolution` on the CPU: run the
/// vertex stage for each index, interpolate `uv` at every pixel center and
/// shade it with `pc.time`.
pub fn render(pc: &PushConstants) -> Result<Frame, RasterError> {
    let [w, h] = pc.resolution;
    let invalid = || RasterError::InvalidResolution { width: w, height: h };
    let width = pixel_extent(w).ok_or_else(invalid)?;
    let height = pixel_extent(h).ok_or_else(invalid)?;
    let len = (width as usize)
        .checked_mul(height as usize)
        .ok_or_else(invalid)?;

    let tri = fullscreen_triangle();
    log::debug!("rasterizing {width}×{height} at time {}", pc.time);

    let mut pixels = vec![Vec4::ZERO; len];
    let mut uncovered = 0usize;
    for y in 0..height {
        for x in 0..width {
            let p = pixel_center_ndc(x, y, width, height);
            match interpolate_uv(&tri, p) {
                Some(uv) => pixels[y as usize * width as usize + x as usize] = colorize(uv, pc.time),
                None => uncovered += 1,
            }
        }
    }
    if uncovered > 0 {
        log::warn!("{uncovered} pixels fell outside the fullscreen triangle");
    }

    Ok(Frame {
        width,
        height,
        pixels,
    })
}

/// Float color → UNORM8: clamp to [0, 1] and round; NaN stores as 0.
pub fn to_rgba8(color: Vec4) -> [u8; 4] {
    color.to_array().map(|c| {
        if c.is_nan() {
            0
        } else {
            (c.clamp(0.0, 1.0) * 255.0).round() as u8
        }
    })
}
