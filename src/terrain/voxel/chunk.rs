// ============================================
// Voxel Chunk - Воксельный чанк
// ============================================
// Один чанк = колонка 16x96x16 блоков. Содержимое - чистая
// функция от (chunk_x, chunk_z, seed): чанк, выгруженный и
// сгенерированный заново, совпадает с прежним поблочно.

use crate::terrain::constants::{
    CHUNK_SIZE, CHUNK_VOLUME, DIAMOND_CHANCE, DIAMOND_MAX_Y, DIRT_DEPTH, WORLD_HEIGHT,
};
use crate::terrain::generation::HeightField;

use super::block::BlockId;

/// Воксельный чанк
pub struct Chunk {
    blocks: Vec<BlockId>,
    pub chunk_x: i32,
    pub chunk_z: i32,
}

impl Chunk {
    /// Создаёт чанк и сразу генерирует содержимое.
    /// "Пустого" промежуточного состояния снаружи не видно.
    pub fn new(chunk_x: i32, chunk_z: i32, field: &HeightField) -> Self {
        let mut blocks = vec![BlockId::Air; CHUNK_VOLUME];

        let base_x = chunk_x * CHUNK_SIZE;
        let base_z = chunk_z * CHUNK_SIZE;

        for lz in 0..CHUNK_SIZE {
            for lx in 0..CHUNK_SIZE {
                let world_x = base_x + lx;
                let world_z = base_z + lz;
                let h = field.height_at(world_x, world_z);

                // Выше h остаётся Air из заполнения по умолчанию
                for y in 0..=h {
                    let block = if y == h {
                        BlockId::Grass
                    } else if y >= h - DIRT_DEPTH {
                        BlockId::Dirt
                    } else if y < DIAMOND_MAX_Y
                        && field.rand3(world_x, y, world_z) < DIAMOND_CHANCE
                    {
                        BlockId::Diamond
                    } else {
                        BlockId::Stone
                    };
                    blocks[Self::index(lx, y, lz)] = block;
                }
            }
        }

        Self { blocks, chunk_x, chunk_z }
    }

    #[inline]
    fn index(lx: i32, y: i32, lz: i32) -> usize {
        (lx + CHUNK_SIZE * (lz + CHUNK_SIZE * y)) as usize
    }

    #[inline]
    fn in_bounds(lx: i32, y: i32, lz: i32) -> bool {
        lx >= 0 && lx < CHUNK_SIZE && lz >= 0 && lz < CHUNK_SIZE && y >= 0 && y < WORLD_HEIGHT
    }

    /// Блок по локальным координатам. За границами - Air:
    /// мешер опрашивает соседей на один блок за краем чанка.
    #[inline]
    pub fn get(&self, lx: i32, y: i32, lz: i32) -> BlockId {
        if !Self::in_bounds(lx, y, lz) {
            return BlockId::Air;
        }
        self.blocks[Self::index(lx, y, lz)]
    }

    /// Записать блок. За границами - тихий no-op.
    #[inline]
    pub fn set(&mut self, lx: i32, y: i32, lz: i32, id: BlockId) {
        if !Self::in_bounds(lx, y, lz) {
            return;
        }
        self.blocks[Self::index(lx, y, lz)] = id;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field() -> HeightField {
        HeightField::new(1337)
    }

    #[test]
    fn test_generation_deterministic() {
        let f = field();
        for (cx, cz) in [(0, 0), (-3, 7), (100, -100)] {
            let a = Chunk::new(cx, cz, &f);
            let b = Chunk::new(cx, cz, &f);
            for y in 0..WORLD_HEIGHT {
                for lz in 0..CHUNK_SIZE {
                    for lx in 0..CHUNK_SIZE {
                        assert_eq!(a.get(lx, y, lz), b.get(lx, y, lz));
                    }
                }
            }
        }
    }

    #[test]
    fn test_get_out_of_bounds_returns_air() {
        let chunk = Chunk::new(0, 0, &field());
        assert_eq!(chunk.get(-1, 10, 0), BlockId::Air);
        assert_eq!(chunk.get(CHUNK_SIZE, 10, 0), BlockId::Air);
        assert_eq!(chunk.get(0, 10, -1), BlockId::Air);
        assert_eq!(chunk.get(0, 10, CHUNK_SIZE), BlockId::Air);
        assert_eq!(chunk.get(0, -1, 0), BlockId::Air);
        assert_eq!(chunk.get(0, WORLD_HEIGHT, 0), BlockId::Air);
        assert_eq!(chunk.get(i32::MIN, i32::MAX, i32::MIN), BlockId::Air);
    }

    #[test]
    fn test_set_out_of_bounds_is_noop() {
        let mut chunk = Chunk::new(0, 0, &field());
        let before = chunk.get(0, 0, 0);
        chunk.set(-1, 0, 0, BlockId::Diamond);
        chunk.set(0, WORLD_HEIGHT, 0, BlockId::Diamond);
        chunk.set(CHUNK_SIZE, 0, CHUNK_SIZE, BlockId::Diamond);
        assert_eq!(chunk.get(0, 0, 0), before);
    }

    #[test]
    fn test_column_layering() {
        let f = field();
        // Отрицательные координаты тоже обязаны генерироваться
        for (cx, cz) in [(0, 0), (-2, -5), (13, -1)] {
            let chunk = Chunk::new(cx, cz, &f);
            for lz in 0..CHUNK_SIZE {
                for lx in 0..CHUNK_SIZE {
                    let h = f.height_at(cx * CHUNK_SIZE + lx, cz * CHUNK_SIZE + lz);
                    for y in 0..WORLD_HEIGHT {
                        let block = chunk.get(lx, y, lz);
                        if y > h {
                            assert_eq!(block, BlockId::Air);
                        } else if y == h {
                            assert_eq!(block, BlockId::Grass);
                        } else if y >= h - DIRT_DEPTH {
                            assert_eq!(block, BlockId::Dirt);
                        } else if block == BlockId::Diamond {
                            assert!(y < DIAMOND_MAX_Y, "diamond above y={}", y);
                        } else {
                            assert_eq!(block, BlockId::Stone);
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn test_diamond_rarity() {
        let f = field();
        let mut eligible = 0u64;
        let mut diamonds = 0u64;

        for cx in -4..4 {
            for cz in -4..4 {
                let chunk = Chunk::new(cx, cz, &f);
                for lz in 0..CHUNK_SIZE {
                    for lx in 0..CHUNK_SIZE {
                        let h = f.height_at(cx * CHUNK_SIZE + lx, cz * CHUNK_SIZE + lz);
                        let stone_top = (h - DIRT_DEPTH).min(DIAMOND_MAX_Y);
                        for y in 0..stone_top {
                            eligible += 1;
                            if chunk.get(lx, y, lz) == BlockId::Diamond {
                                diamonds += 1;
                            }
                        }
                    }
                }
            }
        }

        assert!(eligible > 100_000, "too few samples: {}", eligible);
        let rate = diamonds as f64 / eligible as f64;
        assert!(
            (0.003..0.009).contains(&rate),
            "diamond rate {} out of expected window",
            rate
        );
    }
}
