use serde::Serialize;

use crate::router::RouterMode;

#[derive(Debug, Clone, Serialize)]
pub struct AppConfig {
    pub app_title: String,
    pub environment: String,
    pub mount_id: String,
    pub router_mode: RouterMode,
    pub enable_logging: bool,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            app_title: "Model Gallery".to_string(),
            environment: "development".to_string(),
            mount_id: "app".to_string(),
            router_mode: RouterMode::Hash,
            enable_logging: true,
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        Self::from_lookup(|key| match key {
            "APP_TITLE" => option_env!("APP_TITLE"),
            "ENVIRONMENT" => option_env!("ENVIRONMENT"),
            "MOUNT_ID" => option_env!("MOUNT_ID"),
            "ROUTER_MODE" => option_env!("ROUTER_MODE"),
            "ENABLE_LOGGING" => option_env!("ENABLE_LOGGING"),
            "LOG_LEVEL" => option_env!("LOG_LEVEL"),
            _ => None,
        })
    }

    /// Construir desde una función de búsqueda; valores ausentes o inválidos usan el default
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<&'static str>,
    {
        let defaults = Self::default();
        Self {
            app_title: lookup("APP_TITLE")
                .map(str::to_string)
                .unwrap_or(defaults.app_title),
            environment: lookup("ENVIRONMENT")
                .map(str::to_string)
                .unwrap_or(defaults.environment),
            mount_id: lookup("MOUNT_ID")
                .map(|id| id.trim_start_matches('#').to_string())
                .filter(|id| !id.is_empty())
                .unwrap_or(defaults.mount_id),
            router_mode: lookup("ROUTER_MODE")
                .and_then(|mode| mode.parse().ok())
                .unwrap_or(defaults.router_mode),
            enable_logging: lookup("ENABLE_LOGGING")
                .and_then(|flag| flag.parse().ok())
                .unwrap_or(defaults.enable_logging),
            log_level: lookup("LOG_LEVEL")
                .map(str::to_string)
                .unwrap_or(defaults.log_level),
        }
    }

    /// Nivel de log para wasm-logger (`info` si no se reconoce)
    pub fn log_level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::from_lookup(|_| None);
        assert_eq!(config.mount_id, "app");
        assert_eq!(config.router_mode, RouterMode::Hash);
        assert!(config.enable_logging);
        assert_eq!(config.log_level(), log::Level::Info);
        assert_eq!(config.environment, "development");
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::from_lookup(|key| match key {
            "MOUNT_ID" => Some("#root"),
            "ROUTER_MODE" => Some("history"),
            "ENABLE_LOGGING" => Some("false"),
            "LOG_LEVEL" => Some("debug"),
            "ENVIRONMENT" => Some("production"),
            _ => None,
        });
        assert_eq!(config.mount_id, "root");
        assert_eq!(config.router_mode, RouterMode::History);
        assert!(!config.enable_logging);
        assert_eq!(config.log_level(), log::Level::Debug);
        assert_eq!(config.environment, "production");
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let config = AppConfig::from_lookup(|key| match key {
            "MOUNT_ID" => Some(""),
            "ROUTER_MODE" => Some("memory"),
            "ENABLE_LOGGING" => Some("yes"),
            "LOG_LEVEL" => Some("loud"),
            _ => None,
        });
        assert_eq!(config.mount_id, "app");
        assert_eq!(config.router_mode, RouterMode::Hash);
        assert!(config.enable_logging);
        assert_eq!(config.log_level(), log::Level::Info);
    }

    #[test]
    fn test_serializes_router_mode_lowercase() {
        let json = serde_json::to_string(&AppConfig::default()).unwrap();
        assert!(json.contains("\"router_mode\":\"hash\""));
    }
}
