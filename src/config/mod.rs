use anyhow::{Context, Result};
use std::env;
use std::path::Path;
use std::time::Duration;

pub mod settings;

pub use settings::Settings;

use crate::check::{CheckKind, Thresholds};

/// Главная конфигурация приложения
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    /// Базовые настройки
    pub settings: Settings,
}

impl AppConfig {
    /// Загружает настройки из YAML файла; без файла берутся значения по умолчанию
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Не удалось прочитать файл: {}", path.display()))?;

        Self::from_yaml(&content)
            .with_context(|| format!("Не удалось загрузить конфигурацию {}", path.display()))
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        let settings: Settings =
            serde_yml::from_str(content).context("Не удалось распарсить YAML")?;

        Ok(Self { settings })
    }

    /// Получает timeout из переменной окружения или из настроек
    pub fn get_timeout(&self) -> Duration {
        let secs = env::var("SNMP_TIMEOUT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(self.settings.connection.timeout);
        Duration::from_secs(secs)
    }

    pub fn get_retries(&self) -> u32 {
        self.settings.connection.retries
    }

    pub fn get_port(&self) -> u16 {
        self.settings.connection.port
    }

    /// Получает community для SNMPv2c
    pub fn get_community(&self) -> Vec<u8> {
        env::var("SNMP_COMMUNITY")
            .unwrap_or_else(|_| self.settings.auth.v2c.community.clone())
            .into_bytes()
    }

    /// Пороги по умолчанию для режима. Для health пороги не используются
    pub fn thresholds_for(&self, kind: CheckKind) -> Thresholds {
        let thresholds = &self.settings.thresholds;
        match kind {
            CheckKind::Fans => thresholds.fans,
            CheckKind::Power => thresholds.power,
            CheckKind::Temperature | CheckKind::Health => thresholds.temperature,
        }
    }

    pub fn debug_config(&self) {
        tracing::debug!(
            timeout = ?self.get_timeout(),
            retries = self.get_retries(),
            port = self.get_port(),
            thresholds = ?self.settings.thresholds,
            "Конфигурация SNMP"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_plugin_conventions() {
        let config = AppConfig::default();
        assert_eq!(config.settings.auth.v2c.community, "public");
        assert_eq!(
            config.thresholds_for(CheckKind::Fans),
            Thresholds {
                warning: 1,
                critical: 2
            }
        );
        assert_eq!(
            config.thresholds_for(CheckKind::Power),
            Thresholds {
                warning: 0,
                critical: 1
            }
        );
        assert_eq!(
            config.thresholds_for(CheckKind::Temperature),
            Thresholds {
                warning: 50,
                critical: 60
            }
        );
    }

    #[test]
    fn partial_yaml_keeps_other_defaults() {
        let config = AppConfig::from_yaml(
            "connection:\n  retries: 4\nthresholds:\n  temperature:\n    warning: 55\n    critical: 70\n",
        )
        .unwrap();

        assert_eq!(config.get_retries(), 4);
        assert_eq!(config.get_port(), 161);
        assert_eq!(config.thresholds_for(CheckKind::Temperature).critical, 70);
        assert_eq!(config.thresholds_for(CheckKind::Fans).warning, 1);
    }

    #[test]
    fn invalid_yaml_is_an_error() {
        assert!(AppConfig::from_yaml("connection: [1, 2").is_err());
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(AppConfig::load(Some(Path::new("/nonexistent/check_dell_os10.yaml"))).is_err());
    }
}
