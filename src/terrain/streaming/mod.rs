// ============================================
// Streaming Module - Резидентные чанки
// ============================================

mod key;
mod streamer;

pub use key::ChunkKey;
pub use streamer::{ChunkStreamer, RenderHost};
