use crate::mib;

use super::{Severity, Verdict};

/// sysName, sysObjectID, sysDescr
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub name: String,
    pub object_id: String,
    pub descr: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chassis {
    pub type_code: i64,
    pub hw_rev: String,
    pub part_number: String,
    pub service_tag: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub descr: String,
    pub hw_rev: String,
    pub part_number: String,
    pub status: i64,
    pub service_tag: String,
}

/// Результаты трёх последовательных запросов. `None` означает неполный ответ;
/// после первого `None` остальные группы не запрашиваются.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HealthReadings {
    pub identity: Option<Identity>,
    pub chassis: Option<Chassis>,
    pub card: Option<Card>,
}

/// Сводка по устройству. Уровень определяется только статусом карты:
/// diagMode и offline дают WARNING, прочие не-ready статусы CRITICAL.
pub fn evaluate_health(readings: &HealthReadings) -> Verdict {
    let Some(identity) = &readings.identity else {
        return Verdict::unable_to_retrieve();
    };
    let Some(chassis) = &readings.chassis else {
        return Verdict::unable_to_retrieve();
    };
    let Some(card) = &readings.card else {
        return Verdict::unable_to_retrieve();
    };

    let findings = vec![
        format!(
            "{} ( {} )\n{}",
            identity.name, identity.object_id, identity.descr
        ),
        format!(
            "Chassis: {} (rev. {}) - p/n: {} - ServiceTag: {}",
            mib::describe(chassis.type_code, mib::chassis_type_name),
            chassis.hw_rev,
            chassis.part_number,
            chassis.service_tag
        ),
        format!(
            "Card: {} (rev. {}) - p/n: {} - ServiceTag: {} - Status: {}",
            card.descr,
            card.hw_rev,
            card.part_number,
            card.service_tag,
            mib::describe(card.status, mib::card_status_name)
        ),
    ];

    let mut severity = Severity::Ok;
    if card.status != mib::CARD_READY {
        let degraded = card.status == mib::CARD_DIAG_MODE || card.status == mib::CARD_OFFLINE;
        severity = if degraded && severity == Severity::Ok {
            Severity::Warning
        } else {
            Severity::Critical
        };
    }

    Verdict {
        severity,
        findings,
        metrics: Vec::new(),
    }
}
