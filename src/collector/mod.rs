use crate::check::HealthReadings;
use crate::check::health::{Card, Chassis, Identity};
use crate::mib;
use crate::snmp::Reading;

#[cfg(test)]
pub mod mock;
pub mod source;

pub use source::ReadingSource;

/// Сбор показаний OS10 для каждого режима проверки.
///
/// Неполный набор значений считается отсутствующим целиком.
pub struct Os10Collector;

impl Os10Collector {
    /// Коды OperStatus из таблицы (вентиляторы, блоки питания)
    pub async fn collect_oper_status<S: ReadingSource>(
        source: &mut S,
        table_oid: &str,
    ) -> Option<Vec<i64>> {
        let rows = source.fetch_vector(table_oid).await?;
        let codes = Self::integers(&rows);
        if codes.is_none() {
            tracing::warn!(oid = table_oid, "Нечисловой OperStatus в таблице");
        }
        codes
    }

    /// Температура шасси, затем карты
    pub async fn collect_temperatures<S: ReadingSource>(source: &mut S) -> Option<Vec<i64>> {
        let values = Self::collect_scalars(source, &[mib::CHASSIS_TEMP, mib::CARD_TEMP]).await?;
        let temps = Self::integers(&values);
        if temps.is_none() {
            tracing::warn!("Нечисловое значение температуры");
        }
        temps
    }

    /// Идентификация, шасси и карта по очереди; останавливается на первой неполной группе
    pub async fn collect_health<S: ReadingSource>(source: &mut S) -> HealthReadings {
        let mut readings = HealthReadings {
            identity: Self::collect_identity(source).await,
            ..Default::default()
        };
        if readings.identity.is_none() {
            return readings;
        }

        readings.chassis = Self::collect_chassis(source).await;
        if readings.chassis.is_none() {
            return readings;
        }

        readings.card = Self::collect_card(source).await;
        readings
    }

    async fn collect_identity<S: ReadingSource>(source: &mut S) -> Option<Identity> {
        let values =
            Self::collect_scalars(source, &[mib::SYS_NAME, mib::SYS_OBJECT_ID, mib::SYS_DESCR])
                .await?;

        match values.as_slice() {
            [name, object_id, descr] => Some(Identity {
                name: name.to_string(),
                object_id: object_id.to_string(),
                descr: descr.to_string(),
            }),
            _ => None,
        }
    }

    async fn collect_chassis<S: ReadingSource>(source: &mut S) -> Option<Chassis> {
        let values = Self::collect_scalars(
            source,
            &[
                mib::CHASSIS_TYPE,
                mib::CHASSIS_HW_REV,
                mib::CHASSIS_PART_NUMBER,
                mib::CHASSIS_SERVICE_TAG,
            ],
        )
        .await?;

        match values.as_slice() {
            [type_code, hw_rev, part_number, service_tag] => Some(Chassis {
                type_code: type_code.as_integer()?,
                hw_rev: hw_rev.to_string(),
                part_number: part_number.to_string(),
                service_tag: service_tag.to_string(),
            }),
            _ => None,
        }
    }

    async fn collect_card<S: ReadingSource>(source: &mut S) -> Option<Card> {
        let values = Self::collect_scalars(
            source,
            &[
                mib::CARD_DESCR,
                mib::CARD_HW_REV,
                mib::CARD_PART_NUMBER,
                mib::CARD_STATUS,
                mib::CARD_SERVICE_TAG,
            ],
        )
        .await?;

        match values.as_slice() {
            [descr, hw_rev, part_number, status, service_tag] => Some(Card {
                descr: descr.to_string(),
                hw_rev: hw_rev.to_string(),
                part_number: part_number.to_string(),
                status: status.as_integer()?,
                service_tag: service_tag.to_string(),
            }),
            _ => None,
        }
    }

    /// Все OID или ничего
    async fn collect_scalars<S: ReadingSource>(
        source: &mut S,
        oids: &[&str],
    ) -> Option<Vec<Reading>> {
        let mut values = Vec::with_capacity(oids.len());
        for oid in oids {
            values.push(source.fetch_scalar(oid).await?);
        }
        Some(values)
    }

    fn integers(values: &[Reading]) -> Option<Vec<i64>> {
        values.iter().map(Reading::as_integer).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::mock::MockSource;
    use super::*;

    fn identity(source: MockSource) -> MockSource {
        source
            .with_scalar(mib::SYS_NAME, "leaf01")
            .with_scalar(mib::SYS_OBJECT_ID, "1.3.6.1.4.1.674.11000.5000.100.2.1.7")
            .with_scalar(mib::SYS_DESCR, "OS10 Enterprise")
    }

    fn chassis(source: MockSource) -> MockSource {
        source
            .with_scalar(mib::CHASSIS_TYPE, 26_i64)
            .with_scalar(mib::CHASSIS_HW_REV, "A00")
            .with_scalar(mib::CHASSIS_PART_NUMBER, "0WJJ4N")
            .with_scalar(mib::CHASSIS_SERVICE_TAG, "ABC1234")
    }

    fn card(source: MockSource) -> MockSource {
        source
            .with_scalar(mib::CARD_DESCR, "S5248F-ON")
            .with_scalar(mib::CARD_HW_REV, "A00")
            .with_scalar(mib::CARD_PART_NUMBER, "0WJJ4N")
            .with_scalar(mib::CARD_STATUS, "1")
            .with_scalar(mib::CARD_SERVICE_TAG, "ABC1234")
    }

    #[tokio::test]
    async fn oper_status_codes_in_walk_order() {
        let mut source = MockSource::default().with_vector(mib::FAN_TRAY_OPER_STATUS, [1_i64, 2, 4]);
        let codes = Os10Collector::collect_oper_status(&mut source, mib::FAN_TRAY_OPER_STATUS).await;
        assert_eq!(codes, Some(vec![1_i64, 2, 4]));
    }

    #[tokio::test]
    async fn non_numeric_status_is_partial_data() {
        let mut source = MockSource::default().with_vector(
            mib::FAN_TRAY_OPER_STATUS,
            [Reading::Integer(1), Reading::from("n/a")],
        );
        let codes = Os10Collector::collect_oper_status(&mut source, mib::FAN_TRAY_OPER_STATUS).await;
        assert_eq!(codes, None);
    }

    #[tokio::test]
    async fn missing_card_temperature_drops_both() {
        let mut source = MockSource::default().with_scalar(mib::CHASSIS_TEMP, 41_i64);
        assert_eq!(Os10Collector::collect_temperatures(&mut source).await, None);
    }

    #[tokio::test]
    async fn zero_degrees_is_a_reading() {
        let mut source = MockSource::default()
            .with_scalar(mib::CHASSIS_TEMP, 0_i64)
            .with_scalar(mib::CARD_TEMP, 0_i64);
        assert_eq!(
            Os10Collector::collect_temperatures(&mut source).await,
            Some(vec![0, 0])
        );
    }

    #[tokio::test]
    async fn health_collects_all_groups() {
        let mut source = card(chassis(identity(MockSource::default())));
        let readings = Os10Collector::collect_health(&mut source).await;

        assert_eq!(readings.identity.unwrap().name, "leaf01");
        assert_eq!(readings.chassis.unwrap().type_code, 26);
        assert_eq!(readings.card.unwrap().status, 1);
    }

    #[tokio::test]
    async fn health_stops_at_first_incomplete_group() {
        let mut source = card(identity(MockSource::default()));
        let readings = Os10Collector::collect_health(&mut source).await;

        assert!(readings.identity.is_some());
        assert!(readings.chassis.is_none());
        assert!(readings.card.is_none());
        assert!(!source.requests.iter().any(|oid| oid == mib::CARD_DESCR));
    }
}
