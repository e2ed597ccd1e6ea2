// ============================================
// Terra - Чанковый воксельный террейн
// ============================================
// Детерминированная генерация по seed, face-culling меши,
// стриминг чанков вокруг камеры. Рендер-хост на wgpu живёт
// в render/, сам движок ни одного GPU типа не трогает.

pub mod core;
pub mod render;
pub mod terrain;
