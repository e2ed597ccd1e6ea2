// ============================================
// Block - Типы блоков
// ============================================

/// Тип блока. Air - признак пустоты, в том числе для
/// запросов за границами чанка.
#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum BlockId {
    #[default]
    Air = 0,
    Grass = 1,
    Dirt = 2,
    Stone = 3,
    Diamond = 4,
}

impl BlockId {
    /// Блок твёрдый?
    #[inline]
    pub fn is_solid(self) -> bool {
        self != BlockId::Air
    }

    /// Базовый цвет блока (linear RGB)
    #[inline]
    pub fn base_color(self) -> [f32; 3] {
        match self {
            BlockId::Air => [0.0, 0.0, 0.0],
            BlockId::Grass => [0.32, 0.62, 0.24],
            BlockId::Dirt => [0.45, 0.32, 0.20],
            BlockId::Stone => [0.52, 0.52, 0.55],
            BlockId::Diamond => [0.36, 0.78, 0.86],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_air_is_not_solid() {
        assert!(!BlockId::Air.is_solid());
        assert!(BlockId::Grass.is_solid());
        assert!(BlockId::Dirt.is_solid());
        assert!(BlockId::Stone.is_solid());
        assert!(BlockId::Diamond.is_solid());
    }
}
