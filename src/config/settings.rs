use serde::{Deserialize, Serialize};

use crate::check::Thresholds;

/// Базовые настройки приложения
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Настройки подключения
    pub connection: ConnectionSettings,
    /// Настройки аутентификации
    pub auth: AuthSettings,
    /// Пороги по режимам проверки
    pub thresholds: ThresholdSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ConnectionSettings {
    /// Таймаут одного SNMP запроса (секунды)
    pub timeout: u64,
    /// Количество повторов при ошибках
    pub retries: u32,
    /// UDP порт агента
    pub port: u16,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthSettings {
    /// Настройки SNMPv2c
    pub v2c: SnmpV2cSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SnmpV2cSettings {
    /// Community string
    pub community: String,
}

/// fans/power: допустимое число отказов; temperature: °C
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ThresholdSettings {
    pub fans: Thresholds,
    pub power: Thresholds,
    pub temperature: Thresholds,
}

impl Default for ConnectionSettings {
    fn default() -> Self {
        Self {
            timeout: 3,
            retries: 1,
            port: 161,
        }
    }
}

impl Default for SnmpV2cSettings {
    fn default() -> Self {
        Self {
            community: "public".to_string(),
        }
    }
}

impl Default for ThresholdSettings {
    fn default() -> Self {
        Self {
            fans: Thresholds {
                warning: 1,
                critical: 2,
            },
            power: Thresholds {
                warning: 0,
                critical: 1,
            },
            temperature: Thresholds {
                warning: 50,
                critical: 60,
            },
        }
    }
}
