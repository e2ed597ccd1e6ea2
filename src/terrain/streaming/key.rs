// ============================================
// Chunk Key - Идентификатор чанка
// ============================================

use crate::terrain::constants::CHUNK_SIZE;

/// Ключ чанка: (chunk_x, chunk_z)
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct ChunkKey {
    pub x: i32,
    pub z: i32,
}

impl ChunkKey {
    pub fn new(x: i32, z: i32) -> Self {
        Self { x, z }
    }

    /// Ключ чанка, содержащего мировую позицию (x, z)
    #[inline]
    pub fn from_world(x: f32, z: f32) -> Self {
        Self {
            x: (x / CHUNK_SIZE as f32).floor() as i32,
            z: (z / CHUNK_SIZE as f32).floor() as i32,
        }
    }
}
