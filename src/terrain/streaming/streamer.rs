// ============================================
// Chunk Streamer - Загрузка/выгрузка чанков
// ============================================
// Каждый тик: желаемое множество ключей в квадрате радиуса R
// вокруг камеры сверяется с таблицей резидентных чанков.
// Недостающие генерируются и отдаются хосту, лишние
// выгружаются. Критерий выгрузки - расстояние Чебышёва,
// не время доступа. Вся работа синхронна внутри тика.

use std::collections::{HashMap, HashSet};

use crate::terrain::generation::HeightField;
use crate::terrain::mesh::MeshData;
use crate::terrain::voxel::Chunk;

use super::key::ChunkKey;

/// Приёмник мешей (сцена/GPU). Хост не владеет временем жизни
/// меша: когда стример снимает чанк, хэндл становится невалидным.
pub trait RenderHost {
    type Handle;

    /// Вставить меш чанка в сцену
    fn attach(&mut self, key: ChunkKey, mesh: &MeshData) -> Self::Handle;

    /// Убрать меш из сцены и освободить его буферы
    fn detach(&mut self, key: ChunkKey, handle: Self::Handle);
}

/// Резидентный чанк: воксели + хэндл меша у хоста
struct ResidentChunk<H> {
    chunk: Chunk,
    handle: H,
}

/// Стример чанков вокруг камеры
pub struct ChunkStreamer<H: RenderHost> {
    field: HeightField,
    radius: i32,
    resident: HashMap<ChunkKey, ResidentChunk<H::Handle>>,
}

impl<H: RenderHost> ChunkStreamer<H> {
    pub fn new(field: HeightField, radius: i32) -> Self {
        Self {
            field,
            radius,
            resident: HashMap::new(),
        }
    }

    /// Тиковая точка входа: мировая позиция камеры -> координата
    /// чанка -> сверка резидентного множества.
    pub fn update(&mut self, host: &mut H, x: f32, z: f32) {
        let center = ChunkKey::from_world(x, z);
        self.ensure_chunks(host, center.x, center.z);
    }

    /// Приводит резидентное множество к квадрату радиуса R вокруг
    /// (cx, cz). Повторный вызов с той же координатой ничего не
    /// генерирует и ничего не выгружает.
    pub fn ensure_chunks(&mut self, host: &mut H, cx: i32, cz: i32) {
        let r = self.radius;
        let side = (2 * r + 1) as usize;
        let mut desired = HashSet::with_capacity(side * side);
        for dz in -r..=r {
            for dx in -r..=r {
                desired.insert(ChunkKey::new(cx + dx, cz + dz));
            }
        }

        // Догружаем недостающие. Пустой меш тоже остаётся
        // резидентным, иначе чанк генерировался бы каждый тик.
        let mut loaded = 0usize;
        for &key in &desired {
            if self.resident.contains_key(&key) {
                continue;
            }
            let chunk = Chunk::new(key.x, key.z, &self.field);
            let mesh = chunk.build_mesh();
            let handle = host.attach(key, &mesh);
            self.resident.insert(key, ResidentChunk { chunk, handle });
            loaded += 1;
        }

        // Выгружаем вышедшие за радиус
        let evicted: Vec<ChunkKey> = self
            .resident
            .keys()
            .filter(|key| !desired.contains(key))
            .copied()
            .collect();
        for key in &evicted {
            if let Some(entry) = self.resident.remove(key) {
                host.detach(*key, entry.handle);
            }
        }

        if loaded > 0 || !evicted.is_empty() {
            log::debug!(
                "chunks around ({}, {}): +{} -{} resident {}",
                cx,
                cz,
                loaded,
                evicted.len(),
                self.resident.len()
            );
        }
    }

    pub fn resident_count(&self) -> usize {
        self.resident.len()
    }

    pub fn is_resident(&self, key: ChunkKey) -> bool {
        self.resident.contains_key(&key)
    }

    /// Воксели резидентного чанка (для raycast/высоты под камерой)
    pub fn chunk(&self, key: ChunkKey) -> Option<&Chunk> {
        self.resident.get(&key).map(|entry| &entry.chunk)
    }

    /// Хэндл меша резидентного чанка
    pub fn handle(&self, key: ChunkKey) -> Option<&H::Handle> {
        self.resident.get(&key).map(|entry| &entry.handle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Хост-протокол: пишет все attach/detach, выдаёт
    /// монотонные хэндлы
    #[derive(Default)]
    struct RecordingHost {
        attached: Vec<ChunkKey>,
        detached: Vec<ChunkKey>,
        next_handle: u64,
    }

    impl RenderHost for RecordingHost {
        type Handle = u64;

        fn attach(&mut self, key: ChunkKey, _mesh: &MeshData) -> u64 {
            self.attached.push(key);
            self.next_handle += 1;
            self.next_handle
        }

        fn detach(&mut self, key: ChunkKey, _handle: u64) {
            self.detached.push(key);
        }
    }

    fn streamer(radius: i32) -> ChunkStreamer<RecordingHost> {
        ChunkStreamer::new(HeightField::new(1337), radius)
    }

    #[test]
    fn test_initial_load_fills_square() {
        let mut s = streamer(1);
        let mut host = RecordingHost::default();

        s.ensure_chunks(&mut host, 0, 0);

        assert_eq!(s.resident_count(), 9);
        assert_eq!(host.attached.len(), 9);
        assert!(host.detached.is_empty());
        for dz in -1..=1 {
            for dx in -1..=1 {
                assert!(s.is_resident(ChunkKey::new(dx, dz)));
            }
        }
    }

    #[test]
    fn test_repeated_call_is_idempotent() {
        let mut s = streamer(2);
        let mut host = RecordingHost::default();

        s.ensure_chunks(&mut host, 3, -4);
        let attached = host.attached.len();
        assert_eq!(attached, 25);

        s.ensure_chunks(&mut host, 3, -4);
        assert_eq!(host.attached.len(), attached);
        assert!(host.detached.is_empty());
        assert_eq!(s.resident_count(), 25);
    }

    #[test]
    fn test_far_move_swaps_whole_window() {
        let mut s = streamer(1);
        let mut host = RecordingHost::default();

        s.ensure_chunks(&mut host, 0, 0);
        s.ensure_chunks(&mut host, 5, 0);

        // Старое окно целиком дальше радиуса от (5, 0)
        assert_eq!(host.detached.len(), 9);
        for dz in -1..=1 {
            for dx in -1..=1 {
                assert!(host.detached.contains(&ChunkKey::new(dx, dz)));
                assert!(s.is_resident(ChunkKey::new(5 + dx, dz)));
            }
        }
        assert_eq!(s.resident_count(), 9);
        assert_eq!(host.attached.len(), 18);
    }

    #[test]
    fn test_overlapping_move_keeps_shared_chunks() {
        let mut s = streamer(1);
        let mut host = RecordingHost::default();

        s.ensure_chunks(&mut host, 0, 0);
        let kept_key = ChunkKey::new(1, 0);
        let kept_handle = *s.handle(kept_key).unwrap();

        s.ensure_chunks(&mut host, 1, 0);

        // Выгружен только столбец x = -1
        assert_eq!(host.detached.len(), 3);
        for dz in -1..=1 {
            assert!(host.detached.contains(&ChunkKey::new(-1, dz)));
        }
        // Общие ключи не пересобирались: хэндл тот же
        assert_eq!(*s.handle(kept_key).unwrap(), kept_handle);
        assert_eq!(
            host.attached.iter().filter(|k| **k == kept_key).count(),
            1
        );
        assert_eq!(s.resident_count(), 9);
    }

    #[test]
    fn test_update_floors_world_position() {
        let mut s = streamer(0);
        let mut host = RecordingHost::default();

        s.update(&mut host, -0.5, 17.0);
        assert_eq!(s.resident_count(), 1);
        assert!(s.is_resident(ChunkKey::new(-1, 1)));
    }

    #[test]
    fn test_reload_after_eviction_regenerates_identically() {
        use crate::terrain::constants::{CHUNK_SIZE, WORLD_HEIGHT};

        let mut s = streamer(1);
        let mut host = RecordingHost::default();

        s.ensure_chunks(&mut host, 0, 0);
        let snapshot: Vec<_> = {
            let chunk = s.chunk(ChunkKey::new(0, 0)).unwrap();
            (0..WORLD_HEIGHT)
                .flat_map(|y| {
                    (0..CHUNK_SIZE).flat_map(move |lz| {
                        (0..CHUNK_SIZE).map(move |lx| (lx, y, lz))
                    })
                })
                .map(|(lx, y, lz)| chunk.get(lx, y, lz))
                .collect()
        };

        // Уходим далеко (чанк выгружается) и возвращаемся
        s.ensure_chunks(&mut host, 50, 50);
        assert!(!s.is_resident(ChunkKey::new(0, 0)));
        s.ensure_chunks(&mut host, 0, 0);

        let chunk = s.chunk(ChunkKey::new(0, 0)).unwrap();
        let mut i = 0;
        for y in 0..WORLD_HEIGHT {
            for lz in 0..CHUNK_SIZE {
                for lx in 0..CHUNK_SIZE {
                    assert_eq!(chunk.get(lx, y, lz), snapshot[i]);
                    i += 1;
                }
            }
        }
    }

    #[test]
    fn test_chunk_accessor_returns_resident_voxels() {
        let mut s = streamer(0);
        let mut host = RecordingHost::default();

        s.ensure_chunks(&mut host, 2, 2);
        let chunk = s.chunk(ChunkKey::new(2, 2)).unwrap();
        assert_eq!(chunk.chunk_x, 2);
        assert_eq!(chunk.chunk_z, 2);
        assert!(s.chunk(ChunkKey::new(9, 9)).is_none());
    }
}
