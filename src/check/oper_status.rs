use super::status::OperStatus;
use super::{Severity, Thresholds, Verdict};

/// Оценка таблицы OperStatus (вентиляторы, блоки питания).
///
/// `thresholds` здесь это количество отказавших компонентов, а не проценты.
/// Порядок сравнения сохранён как в эксплуатации: сначала WARNING при
/// `failed < warning`, затем CRITICAL при `failed < critical` перекрывает его.
/// При `failed >= warning` и `failed >= critical` уровень остаётся OK.
pub fn evaluate_oper_status(
    readings: Option<&[i64]>,
    label: &str,
    thresholds: Thresholds,
) -> Verdict {
    let Some(readings) = readings else {
        return Verdict::unable_to_retrieve();
    };

    let mut findings = Vec::with_capacity(readings.len() + 1);
    let mut reported_unknown = false;
    let mut failed: i64 = 0;

    for (index, &code) in readings.iter().enumerate() {
        let status = OperStatus::classify(code);
        match status {
            OperStatus::Unknown => reported_unknown = true,
            OperStatus::Up => {}
            _ => failed += 1,
        }
        findings.push(format!("{} #{} reported as {}", label, index + 1, status));
    }

    if reported_unknown {
        return Verdict {
            severity: Severity::Unknown,
            findings,
            metrics: Vec::new(),
        };
    }

    let mut severity = Severity::Ok;
    if failed == 0 {
        findings.insert(0, format!("All {}(s) OK", label));
    } else {
        findings.insert(0, format!("Failed or error found for {}", label));
        if failed < thresholds.warning {
            severity = Severity::Warning;
        }
        if failed < thresholds.critical {
            severity = Severity::Critical;
        }
    }

    Verdict {
        severity,
        findings,
        metrics: Vec::new(),
    }
}
