// ============================================
// Height Field - Детерминированная карта высот
// ============================================
// Высота и псевдослучайные сэмплы считаются заново при
// каждом вызове: выгруженный чанк после повторной загрузки
// обязан совпасть с прежним до бита.

use super::noise::{fbm2d, hash2d, hash3d};
use crate::terrain::constants::{AMPLITUDE, BASE_HEIGHT, HEIGHT_OCTAVES, NOISE_SCALE, WORLD_HEIGHT};

/// Карта высот с явным seed, без скрытого состояния
#[derive(Debug, Clone, Copy)]
pub struct HeightField {
    seed: u32,
}

impl HeightField {
    pub fn new(seed: u32) -> Self {
        Self { seed }
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    /// Высота поверхности в мировых координатах (x, z)
    #[inline]
    pub fn height_at(&self, x: i32, z: i32) -> i32 {
        let n = fbm2d(
            self.seed,
            x as f32 * NOISE_SCALE,
            z as f32 * NOISE_SCALE,
            HEIGHT_OCTAVES,
        );
        // fbm2d отдаёт 0..1, переводим в -1..1
        let n = n * 2.0 - 1.0;
        let h = BASE_HEIGHT + n * AMPLITUDE;
        (h as i32).clamp(1, WORLD_HEIGHT - 1)
    }

    /// Детерминированный сэмпл 0.0..1.0 по паре координат
    #[inline]
    pub fn rand2(&self, x: i32, z: i32) -> f32 {
        hash2d(self.seed, x, z)
    }

    /// Детерминированный сэмпл 0.0..1.0 по тройке координат.
    /// Используется для редких включений (руда), не для рельефа.
    #[inline]
    pub fn rand3(&self, x: i32, y: i32, z: i32) -> f32 {
        hash3d(self.seed, x, y, z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_height_deterministic() {
        let a = HeightField::new(1337);
        let b = HeightField::new(1337);
        for i in -200..200 {
            assert_eq!(a.height_at(i * 3, -i * 7), b.height_at(i * 3, -i * 7));
        }
    }

    #[test]
    fn test_height_in_valid_range() {
        let field = HeightField::new(99);
        for x in -100..100 {
            for z in -20..20 {
                let h = field.height_at(x * 17, z * 13);
                assert!(h >= 1 && h <= WORLD_HEIGHT - 1, "height {} out of range", h);
            }
        }
    }

    #[test]
    fn test_height_independent_of_call_order() {
        let field = HeightField::new(7);
        let first = field.height_at(123, -456);
        // Промежуточные вызовы не должны влиять на результат
        field.height_at(0, 0);
        field.rand2(5, 5);
        field.rand3(1, 2, 3);
        assert_eq!(first, field.height_at(123, -456));
    }

    #[test]
    fn test_rand_samples_in_unit_interval() {
        let field = HeightField::new(4242);
        for i in -300..300 {
            let r2 = field.rand2(i, i * 11);
            let r3 = field.rand3(i, i % 24, i * 11);
            assert!((0.0..=1.0).contains(&r2));
            assert!((0.0..1.0).contains(&r3));
        }
    }
}
