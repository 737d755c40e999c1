use serde::Serialize;

use crate::check::{CheckKind, Metric, Severity, Verdict};

/// JSON структура результата проверки
#[derive(Debug, Clone, Serialize)]
pub struct VerdictJson<'a> {
    pub check: CheckKind,
    pub severity: Severity,
    pub exit_code: u8,
    pub timestamp: String,
    pub findings: &'a [String],
    pub metrics: &'a [Metric],
}

/// JSON форматтер для результатов проверки
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn format_verdict(kind: CheckKind, verdict: &Verdict) -> VerdictJson<'_> {
        VerdictJson {
            check: kind,
            severity: verdict.severity,
            exit_code: verdict.severity.exit_code(),
            timestamp: chrono::Utc::now().to_rfc3339(),
            findings: &verdict.findings,
            metrics: &verdict.metrics,
        }
    }

    /// Сериализует результат в JSON строку
    pub fn to_json_string(kind: CheckKind, verdict: &Verdict) -> anyhow::Result<String> {
        let json_result = Self::format_verdict(kind, verdict);
        serde_json::to_string_pretty(&json_result)
            .map_err(|e| anyhow::anyhow!("Ошибка сериализации в JSON: {}", e))
    }
}
