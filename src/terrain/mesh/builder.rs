// ============================================
// Mesh Builder - Построение меша чанка
// ============================================
// Грань выводится только если соседний блок - Air. Соседи
// опрашиваются через Chunk::get, поэтому блоки за краем
// чанка считаются пустыми: на стыках чанков грани могут
// дублироваться. Известное ограничение, соседние чанки
// здесь намеренно не опрашиваются.

use crate::terrain::constants::{CHUNK_SIZE, WORLD_HEIGHT};
use crate::terrain::voxel::{BlockId, Chunk};

use super::vertex::TerrainVertex;

/// Осветление верхней грани
const TOP_SHADE: f32 = 1.1;
/// Затемнение нижней грани
const BOTTOM_SHADE: f32 = 0.9;

/// Готовые буферы меша одного чанка. Пересобираются целиком,
/// на месте не правятся.
#[derive(Debug, Default)]
pub struct MeshData {
    pub vertices: Vec<TerrainVertex>,
    pub indices: Vec<u32>,
}

impl MeshData {
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

#[derive(Clone, Copy)]
enum FaceDir {
    PosX,
    NegX,
    PosY,
    NegY,
    PosZ,
    NegZ,
}

impl FaceDir {
    const ALL: [FaceDir; 6] = [
        FaceDir::PosX,
        FaceDir::NegX,
        FaceDir::PosY,
        FaceDir::NegY,
        FaceDir::PosZ,
        FaceDir::NegZ,
    ];

    /// Смещение к соседнему блоку
    #[inline]
    fn offset(self) -> (i32, i32, i32) {
        match self {
            FaceDir::PosX => (1, 0, 0),
            FaceDir::NegX => (-1, 0, 0),
            FaceDir::PosY => (0, 1, 0),
            FaceDir::NegY => (0, -1, 0),
            FaceDir::PosZ => (0, 0, 1),
            FaceDir::NegZ => (0, 0, -1),
        }
    }

    #[inline]
    fn normal(self) -> [f32; 3] {
        match self {
            FaceDir::PosX => [1.0, 0.0, 0.0],
            FaceDir::NegX => [-1.0, 0.0, 0.0],
            FaceDir::PosY => [0.0, 1.0, 0.0],
            FaceDir::NegY => [0.0, -1.0, 0.0],
            FaceDir::PosZ => [0.0, 0.0, 1.0],
            FaceDir::NegZ => [0.0, 0.0, -1.0],
        }
    }

    /// Дешёвая имитация направленного света, не ambient occlusion
    #[inline]
    fn shade(self) -> f32 {
        match self {
            FaceDir::PosY => TOP_SHADE,
            FaceDir::NegY => BOTTOM_SHADE,
            _ => 1.0,
        }
    }
}

/// Строит меш открытых граней чанка в мировых координатах.
/// Для полностью пустого чанка возвращает пустые буферы.
pub fn build_chunk_mesh(chunk: &Chunk) -> MeshData {
    let mut mesh = MeshData::default();

    let base_x = chunk.chunk_x * CHUNK_SIZE;
    let base_z = chunk.chunk_z * CHUNK_SIZE;

    for y in 0..WORLD_HEIGHT {
        for lz in 0..CHUNK_SIZE {
            for lx in 0..CHUNK_SIZE {
                let block = chunk.get(lx, y, lz);
                if block == BlockId::Air {
                    continue;
                }

                for dir in FaceDir::ALL {
                    let (dx, dy, dz) = dir.offset();
                    if chunk.get(lx + dx, y + dy, lz + dz) != BlockId::Air {
                        continue;
                    }

                    let base = block.base_color();
                    let shade = dir.shade();
                    let color = [base[0] * shade, base[1] * shade, base[2] * shade];
                    add_face(
                        &mut mesh,
                        (base_x + lx) as f32,
                        y as f32,
                        (base_z + lz) as f32,
                        dir,
                        color,
                    );
                }
            }
        }
    }

    mesh
}

impl Chunk {
    /// Меш открытых граней этого чанка
    pub fn build_mesh(&self) -> MeshData {
        build_chunk_mesh(self)
    }
}

/// Добавляет одну грань (4 вершины, 2 треугольника CCW)
#[inline]
fn add_face(mesh: &mut MeshData, x: f32, y: f32, z: f32, dir: FaceDir, color: [f32; 3]) {
    let normal = dir.normal();
    let base = mesh.vertices.len() as u32;
    let v = |position| TerrainVertex { position, normal, color };

    match dir {
        FaceDir::PosX => {
            let x1 = x + 1.0;
            mesh.vertices.push(v([x1, y, z + 1.0]));
            mesh.vertices.push(v([x1, y, z]));
            mesh.vertices.push(v([x1, y + 1.0, z]));
            mesh.vertices.push(v([x1, y + 1.0, z + 1.0]));
        }
        FaceDir::NegX => {
            mesh.vertices.push(v([x, y, z]));
            mesh.vertices.push(v([x, y, z + 1.0]));
            mesh.vertices.push(v([x, y + 1.0, z + 1.0]));
            mesh.vertices.push(v([x, y + 1.0, z]));
        }
        FaceDir::PosY => {
            let y1 = y + 1.0;
            mesh.vertices.push(v([x, y1, z]));
            mesh.vertices.push(v([x, y1, z + 1.0]));
            mesh.vertices.push(v([x + 1.0, y1, z + 1.0]));
            mesh.vertices.push(v([x + 1.0, y1, z]));
        }
        FaceDir::NegY => {
            mesh.vertices.push(v([x, y, z + 1.0]));
            mesh.vertices.push(v([x, y, z]));
            mesh.vertices.push(v([x + 1.0, y, z]));
            mesh.vertices.push(v([x + 1.0, y, z + 1.0]));
        }
        FaceDir::PosZ => {
            let z1 = z + 1.0;
            mesh.vertices.push(v([x, y, z1]));
            mesh.vertices.push(v([x + 1.0, y, z1]));
            mesh.vertices.push(v([x + 1.0, y + 1.0, z1]));
            mesh.vertices.push(v([x, y + 1.0, z1]));
        }
        FaceDir::NegZ => {
            mesh.vertices.push(v([x + 1.0, y, z]));
            mesh.vertices.push(v([x, y, z]));
            mesh.vertices.push(v([x, y + 1.0, z]));
            mesh.vertices.push(v([x + 1.0, y + 1.0, z]));
        }
    }

    mesh.indices
        .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
}
