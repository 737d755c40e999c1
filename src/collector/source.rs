use crate::snmp::{Reading, SnmpClient};

/// Источник показаний устройства.
///
/// `None` означает, что значение получить не удалось (устройство недоступно
/// или OID не поддерживается); это отличается от нулевого показания.
#[allow(async_fn_in_trait)]
pub trait ReadingSource {
    async fn fetch_scalar(&mut self, oid: &str) -> Option<Reading>;

    /// Значения поддерева в порядке OID. Пустое поддерево тоже `None`
    async fn fetch_vector(&mut self, oid: &str) -> Option<Vec<Reading>>;
}

impl ReadingSource for SnmpClient {
    async fn fetch_scalar(&mut self, oid: &str) -> Option<Reading> {
        match self.get(oid).await {
            Ok(Some(reading)) => {
                tracing::debug!(oid, %reading, "SNMP GET");
                Some(reading)
            }
            Ok(None) => {
                tracing::warn!(oid, "OID не поддерживается устройством");
                None
            }
            Err(e) => {
                tracing::warn!(oid, error = %e, "SNMP GET не удался");
                None
            }
        }
    }

    async fn fetch_vector(&mut self, oid: &str) -> Option<Vec<Reading>> {
        match self.walk(oid).await {
            Ok(rows) if rows.is_empty() => {
                tracing::warn!(oid, "SNMP WALK не вернул ни одной строки");
                None
            }
            Ok(rows) => {
                tracing::debug!(oid, rows = rows.len(), "SNMP WALK");
                Some(rows.into_iter().map(|(_, reading)| reading).collect())
            }
            Err(e) => {
                tracing::warn!(oid, error = %e, "SNMP WALK не удался");
                None
            }
        }
    }
}
