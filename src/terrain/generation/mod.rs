// ============================================
// Generation Module - Процедурная генерация
// ============================================

mod height;
mod noise;

pub use height::HeightField;
pub use noise::{fbm2d, hash2d, hash3d, noise2d};
