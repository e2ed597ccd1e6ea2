// ============================================
// Render Module - Хост сцены на wgpu
// ============================================

mod camera;
mod depth;
mod gpu_chunk;
mod manager;
mod renderer;
mod uniforms;

pub use camera::{Camera, CameraController};
pub use gpu_chunk::GpuChunk;
pub use manager::GpuChunkManager;
pub use renderer::{RenderError, Renderer};
