// ============================================
// Engine Config - Настройки из JSON
// ============================================
// Файл необязателен: без него работаем на значениях
// по умолчанию.

use std::io::ErrorKind;
use std::path::Path;

use serde::Deserialize;

use crate::terrain::constants::RENDER_DISTANCE;

/// Настройки движка
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Seed генерации мира
    pub seed: u32,
    /// Радиус загрузки чанков (метрика Чебышёва)
    pub render_distance: i32,
    pub window_width: u32,
    pub window_height: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            seed: 1337,
            render_distance: RENDER_DISTANCE,
            window_width: 1280,
            window_height: 720,
        }
    }
}

/// Ошибки загрузки конфига
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "io error: {}", e),
            ConfigError::Parse(e) => write!(f, "parse error: {}", e),
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl EngineConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        serde_json::from_str(&text).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Загрузить конфиг или вернуть значения по умолчанию
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        match Self::load(path.as_ref()) {
            Ok(config) => config,
            Err(ConfigError::Io(e)) if e.kind() == ErrorKind::NotFound => {
                log::info!("no config at {:?}, using defaults", path.as_ref());
                Self::default()
            }
            Err(e) => {
                log::warn!("failed to load config {:?}: {}", path.as_ref(), e);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let config: EngineConfig = serde_json::from_str(
            r#"{"seed": 42, "render_distance": 6, "window_width": 800, "window_height": 600}"#,
        )
        .unwrap();
        assert_eq!(config.seed, 42);
        assert_eq!(config.render_distance, 6);
        assert_eq!(config.window_width, 800);
        assert_eq!(config.window_height, 600);
    }

    #[test]
    fn test_missing_fields_fall_back_to_defaults() {
        let config: EngineConfig = serde_json::from_str(r#"{"seed": 7}"#).unwrap();
        assert_eq!(config.seed, 7);
        assert_eq!(config.render_distance, RENDER_DISTANCE);
        assert_eq!(config.window_width, 1280);
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        match EngineConfig::load("definitely_not_here.json") {
            Err(ConfigError::Io(e)) => assert_eq!(e.kind(), ErrorKind::NotFound),
            other => panic!("unexpected result: {:?}", other.map(|_| ())),
        }
    }
}
