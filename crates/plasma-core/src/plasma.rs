use glam::{vec2, vec4, Vec2, Vec4};
use std::f32::consts::PI;

/// Time the fragment shader runs at. There is no host binding for it yet,
/// so the GPU output is a still image.
pub const DEFAULT_TIME: f32 = 1.0;

/// The plasma field sampled at `v`.
pub fn plasma(v: Vec2, time: f32) -> Vec4 {
    let c = (v.x * 10.0).sin() + ((time + v.y).sin() * 20.0).cos();
    vec4(
        (c * 0.2 + time.cos()).sin(),
        c * 0.15,
        (c * 0.1 + time / 0.4).cos() * 0.25,
        1.0,
    )
}

/// Fragment stage: polar-ish remap of `uv`, then the plasma field scaled by
/// the inverse of the radial term.
///
/// Not guarded: `uv.y == 0` divides by zero inside the `atan` argument and
/// `uv == (0, 0)` divides by zero in the radial term. Whatever IEEE-754 gives
/// back ends up in the pixel.
pub fn colorize(uv: Vec2, time: f32) -> Vec4 {
    let mut m = vec2((uv.x / uv.y).atan() / PI, 0.2 / uv.length());
    let d = m.y;
    m.x += 0.3f32.sin() * 0.1;
    m.y += 0.25;
    plasma(m * PI, time) / d
}
