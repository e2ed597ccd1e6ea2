// ============================================
// GPU Chunk Manager - Управление GPU буферами
// ============================================

use std::collections::HashMap;
use std::sync::Arc;

use crate::terrain::{ChunkKey, MeshData, RenderHost};

use super::gpu_chunk::GpuChunk;

/// Менеджер GPU буферов чанков. Геометрически пустые чанки
/// учитываются без буферов: нулевые буферы wgpu не создаёт.
pub struct GpuChunkManager {
    chunks: HashMap<ChunkKey, Option<GpuChunk>>,
    device: Arc<wgpu::Device>,
}

impl GpuChunkManager {
    pub fn new(device: Arc<wgpu::Device>) -> Self {
        Self {
            chunks: HashMap::with_capacity(256),
            device,
        }
    }

    /// Итератор по непустым GPU чанкам для рендеринга
    pub fn iter(&self) -> impl Iterator<Item = &GpuChunk> {
        self.chunks.values().flatten()
    }

    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }
}

impl RenderHost for GpuChunkManager {
    type Handle = ChunkKey;

    fn attach(&mut self, key: ChunkKey, mesh: &MeshData) -> ChunkKey {
        let gpu_chunk = if mesh.is_empty() {
            None
        } else {
            Some(GpuChunk::new(&self.device, key, mesh))
        };
        self.chunks.insert(key, gpu_chunk);
        key
    }

    fn detach(&mut self, key: ChunkKey, handle: ChunkKey) {
        debug_assert_eq!(key, handle, "mesh handle does not match chunk key");
        // Двойная выгрузка - рассинхрон таблицы резидентности,
        // а не штатная ситуация
        if self.chunks.remove(&key).is_none() {
            log::error!("detach of unknown chunk {:?}", key);
            debug_assert!(false, "detach of unknown chunk {:?}", key);
        }
    }
}
