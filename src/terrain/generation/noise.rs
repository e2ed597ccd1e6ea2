// ============================================
// Noise Functions - Шумовые функции для генерации
// ============================================
// Все функции чистые: результат зависит только от
// аргументов и seed, без глобального состояния.

/// Hash2D возвращает значение в диапазоне 0.0..1.0
#[inline(always)]
pub fn hash2d(seed: u32, x: i32, z: i32) -> f32 {
    let n = x.wrapping_mul(374761393)
        .wrapping_add(z.wrapping_mul(668265263))
        .wrapping_add((seed as i32).wrapping_mul(1911520717));
    let n = (n ^ (n >> 13)).wrapping_mul(1274126177);
    ((n as u32) as f32) / (u32::MAX as f32)
}

/// Hash3D, строго меньше 1.0 (старшие 24 бита мантиссы)
#[inline(always)]
pub fn hash3d(seed: u32, x: i32, y: i32, z: i32) -> f32 {
    let n = x.wrapping_mul(374761393)
        .wrapping_add(y.wrapping_mul(668265263))
        .wrapping_add(z.wrapping_mul(1274126177))
        .wrapping_add((seed as i32).wrapping_mul(1911520717));
    let n = (n ^ (n >> 13)).wrapping_mul(1911520717);
    let n = n ^ (n >> 16);
    (((n as u32) >> 8) as f32) / 16_777_216.0
}

#[inline(always)]
fn smoothstep(t: f32) -> f32 {
    t * t * (3.0 - 2.0 * t)
}

/// 2D Value Noise - быстрее Simplex, достаточно для рельефа
#[inline]
pub fn noise2d(seed: u32, x: f32, z: f32) -> f32 {
    let xi = x.floor() as i32;
    let zi = z.floor() as i32;
    let xf = smoothstep(x - x.floor());
    let zf = smoothstep(z - z.floor());

    let n00 = hash2d(seed, xi, zi);
    let n10 = hash2d(seed, xi + 1, zi);
    let n01 = hash2d(seed, xi, zi + 1);
    let n11 = hash2d(seed, xi + 1, zi + 1);

    let nx0 = n00 + xf * (n10 - n00);
    let nx1 = n01 + xf * (n11 - n01);

    nx0 + zf * (nx1 - nx0)
}

/// FBM 2D - несколько октав шума, нормализовано в 0.0..1.0
#[inline]
pub fn fbm2d(seed: u32, x: f32, z: f32, octaves: u32) -> f32 {
    let mut value = 0.0;
    let mut amplitude = 1.0;
    let mut frequency = 1.0;
    let mut max_value = 0.0;

    for _ in 0..octaves {
        value += amplitude * noise2d(seed, x * frequency, z * frequency);
        max_value += amplitude;
        amplitude *= 0.5;
        frequency *= 2.0;
    }

    value / max_value
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_deterministic() {
        assert_eq!(hash2d(7, -13, 42), hash2d(7, -13, 42));
        assert_eq!(hash3d(7, -13, 5, 42), hash3d(7, -13, 5, 42));
    }

    #[test]
    fn test_hash_seed_changes_result() {
        // Один и тот же вход с разными seed даёт разные значения
        assert_ne!(hash2d(1, 100, 200), hash2d(2, 100, 200));
        assert_ne!(hash3d(1, 100, 10, 200), hash3d(2, 100, 10, 200));
    }

    #[test]
    fn test_hash_range() {
        for i in -500..500 {
            let h2 = hash2d(42, i, i * 31);
            let h3 = hash3d(42, i, i * 7, i * 31);
            assert!((0.0..=1.0).contains(&h2));
            assert!((0.0..1.0).contains(&h3));
        }
    }

    #[test]
    fn test_noise2d_range_and_determinism() {
        for i in 0..200 {
            let x = i as f32 * 0.37 - 40.0;
            let z = i as f32 * 0.53 + 11.0;
            let n = noise2d(5, x, z);
            assert!((0.0..=1.0).contains(&n));
            assert_eq!(n, noise2d(5, x, z));
        }
    }

    #[test]
    fn test_fbm2d_range() {
        for i in 0..200 {
            let x = i as f32 * 1.7;
            let n = fbm2d(9, x, -x * 0.3, 3);
            assert!((0.0..=1.0).contains(&n));
        }
    }
}
