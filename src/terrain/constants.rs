// ============================================
// Terrain Constants - Параметры мира
// ============================================
// Менять нельзя: от этих значений зависит побитовая
// воспроизводимость сгенерированного мира.

/// Размер чанка по горизонтали (блоков)
pub const CHUNK_SIZE: i32 = 16;

/// Высота мира (блоков)
pub const WORLD_HEIGHT: i32 = 96;

/// Объём чанка в блоках
pub const CHUNK_VOLUME: usize = (CHUNK_SIZE * WORLD_HEIGHT * CHUNK_SIZE) as usize;

/// Базовая высота поверхности
pub const BASE_HEIGHT: f32 = 40.0;

/// Амплитуда рельефа
pub const AMPLITUDE: f32 = 22.0;

/// Масштаб шума (мировых единиц на период первой октавы)
pub const NOISE_SCALE: f32 = 0.01;

/// Число октав шума высоты (веса 1, 0.5, 0.25 на частотах x1, x2, x4)
pub const HEIGHT_OCTAVES: u32 = 3;

/// Толщина слоя земли под травой
pub const DIRT_DEPTH: i32 = 3;

/// Алмазы встречаются только ниже этой высоты
pub const DIAMOND_MAX_Y: i32 = 24;

/// Вероятность замены камня на алмаз
pub const DIAMOND_CHANCE: f32 = 0.006;

/// Радиус загрузки чанков вокруг камеры (метрика Чебышёва)
pub const RENDER_DISTANCE: i32 = 4;
