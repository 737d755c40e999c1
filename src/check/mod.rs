use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::collector::{Os10Collector, ReadingSource};
use crate::mib;

pub mod health;
pub mod oper_status;
pub mod severity;
pub mod status;
pub mod temperature;
pub mod verdict;

pub use health::{HealthReadings, evaluate_health};
pub use oper_status::evaluate_oper_status;
pub use severity::Severity;
pub use temperature::evaluate_temperatures;
pub use verdict::{Metric, Verdict};

/// Режим проверки (`-m/--mode`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckKind {
    Fans,
    Power,
    #[value(name = "temp")]
    #[serde(rename = "temp")]
    Temperature,
    Health,
}

/// Пара порогов warning/critical. Для fans/power это количество отказов,
/// для temp градусы. Порядок порогов не проверяется.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Thresholds {
    pub warning: i64,
    pub critical: i64,
}

/// Опрашивает устройство для выбранного режима и вычисляет результат
pub async fn run_check<S: ReadingSource>(
    source: &mut S,
    kind: CheckKind,
    thresholds: Thresholds,
) -> Verdict {
    let verdict = match kind {
        CheckKind::Fans => {
            let readings =
                Os10Collector::collect_oper_status(source, mib::FAN_TRAY_OPER_STATUS).await;
            evaluate_oper_status(readings.as_deref(), "fan", thresholds)
        }
        CheckKind::Power => {
            let readings =
                Os10Collector::collect_oper_status(source, mib::POWER_SUPPLY_OPER_STATUS).await;
            evaluate_oper_status(readings.as_deref(), "PSU", thresholds)
        }
        CheckKind::Temperature => {
            let readings = Os10Collector::collect_temperatures(source).await;
            evaluate_temperatures(readings.as_deref(), thresholds)
        }
        CheckKind::Health => {
            let readings = Os10Collector::collect_health(source).await;
            evaluate_health(&readings)
        }
    };

    tracing::debug!(
        check = ?kind,
        severity = %verdict.severity,
        findings = verdict.findings.len(),
        "Проверка завершена"
    );
    verdict
}
