pub mod shader;


pub use shader::{shader_module_descriptor, FS_ENTRY, PLASMA_WGSL, VERTEX_COUNT, VS_ENTRY};
