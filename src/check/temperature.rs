use super::{Metric, Severity, Thresholds, Verdict};

/// Оценка датчиков температуры (°C).
///
/// Порог превышается строго (`>`). Перфдата пишется только для строк,
/// которые не подняли уровень проверки.
pub fn evaluate_temperatures(readings: Option<&[i64]>, thresholds: Thresholds) -> Verdict {
    let readings = match readings {
        Some(readings) if !readings.is_empty() => readings,
        _ => return Verdict::unable_to_retrieve(),
    };
    let Thresholds { warning, critical } = thresholds;

    let mut severity = Severity::Ok;
    let mut findings = Vec::with_capacity(readings.len() + 1);
    let mut metrics = Vec::new();

    for (index, &value) in readings.iter().enumerate() {
        if value > critical && !severity.is_at_least(Severity::Critical) {
            severity = Severity::Critical;
            findings.push(format!(
                "Temperature sensor at {}°C exceeds critical threshold ({}°C)",
                value, critical
            ));
        } else if value > warning && !severity.is_at_least(Severity::Warning) {
            severity = Severity::Warning;
            findings.push(format!(
                "Temperature sensor at {}°C exceeds warning threshold ({}°C)",
                value, warning
            ));
        } else {
            findings.push(format!("Temperature sensor at {}°C", value));
            metrics.push(Metric {
                key: format!("temp{}", index + 1),
                value,
                uom: "°C".to_string(),
                warn: warning,
                crit: critical,
            });
        }
    }

    if severity == Severity::Ok {
        let total: i128 = readings.iter().map(|&v| i128::from(v)).sum();
        let mean = total as f64 / readings.len() as f64;
        findings.insert(
            0,
            format!("All temperature sensors OK with an average of {:?}°C", mean),
        );
    }

    Verdict {
        severity,
        findings,
        metrics,
    }
}
