// ============================================
// Terrain Module - Чанковый воксельный мир
// ============================================
// Детерминированная карта высот, воксельные чанки,
// face-culling меш и стриминг вокруг камеры.

pub mod constants;
pub mod generation;
pub mod mesh;
pub mod streaming;
pub mod voxel;

// Re-exports
pub use constants::{CHUNK_SIZE, RENDER_DISTANCE, WORLD_HEIGHT};
pub use generation::HeightField;
pub use mesh::{build_chunk_mesh, MeshData, TerrainVertex};
pub use streaming::{ChunkKey, ChunkStreamer, RenderHost};
pub use voxel::{BlockId, Chunk};
