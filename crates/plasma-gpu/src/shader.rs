/// Fullscreen plasma shader — both stages in one WGSL module.
///
/// The vertex stage builds a clip-space triangle from `vertex_index` alone
/// (no vertex buffer). The fragment stage shades the interpolated `uv` with
/// the plasma field. Neither stage declares bindings, so a host can use an
/// empty pipeline layout. Math mirrors `plasma_core::{vertex, plasma}`.
pub const PLASMA_WGSL: &str = include_str!("../shaders/plasma.wgsl");

pub const VS_ENTRY: &str = "vs_main";
pub const FS_ENTRY: &str = "fs_main";

/// Vertices to draw per frame (one instance).
pub const VERTEX_COUNT: u32 = plasma_core::vertex::FULLSCREEN_VERTEX_COUNT;

/// Descriptor a host passes to `Device::create_shader_module`.
pub fn shader_module_descriptor() -> wgpu::ShaderModuleDescriptor<'static> {
    log::trace!("plasma shader module requested ({} bytes of WGSL)", PLASMA_WGSL.len());
    wgpu::ShaderModuleDescriptor {
        label: Some("plasma"),
        source: wgpu::ShaderSource::Wgsl(PLASMA_WGSL.into()),
    }
}
