use std::fmt;

use serde::Serialize;

use super::Severity;

pub const UNABLE_TO_RETRIEVE: &str = "Unable to retrieve metrics";

/// Perfdata: `label=value<uom>;warn;crit`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Metric {
    pub key: String,
    pub value: i64,
    pub uom: String,
    pub warn: i64,
    pub crit: i64,
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}={}{};{};{}",
            self.key, self.value, self.uom, self.warn, self.crit
        )
    }
}

/// Итог одной проверки
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Verdict {
    pub severity: Severity,
    pub findings: Vec<String>,
    pub metrics: Vec<Metric>,
}

impl Verdict {
    /// Устройство не отдало данные целиком
    pub fn unable_to_retrieve() -> Self {
        Self {
            severity: Severity::Unknown,
            findings: vec![UNABLE_TO_RETRIEVE.to_string()],
            metrics: Vec::new(),
        }
    }
}
