use anyhow::{Context, Result};
use snmp2::{AsyncSession, Oid, Value};

use super::reading::Reading;

pub struct SnmpClientV2c {
    pub(crate) session: AsyncSession,
}

impl SnmpClientV2c {
    pub async fn new(target: &str, community: &[u8]) -> Result<Self> {
        let session = AsyncSession::new_v2c(target, community, 2)
            .await
            .context("Не удалось создать SNMP сессию")?;

        Ok(Self { session })
    }

    /// GET одного OID. `None`, если агент ответил noSuchObject/noSuchInstance
    pub async fn get(&mut self, oid: &Oid<'_>) -> Result<Option<Reading>> {
        let resp = self
            .session
            .get(oid)
            .await
            .context("SNMP GET запрос не удался")?;

        let (_, value) = resp
            .varbinds
            .into_iter()
            .next()
            .ok_or_else(|| anyhow::anyhow!("SNMP ответ пустой"))?;

        Ok(Reading::from_value(&value))
    }

    pub async fn walk(&mut self, start_oid: &Oid<'_>) -> Result<Vec<(Oid<'static>, Reading)>> {
        self.walk_bulk(start_oid, 10).await
    }

    pub async fn walk_bulk(
        &mut self,
        start_oid: &Oid<'_>,
        max_repetitions: u32,
    ) -> Result<Vec<(Oid<'static>, Reading)>> {
        let mut results: Vec<(Oid<'static>, Reading)> = Vec::new();
        let mut current_oid = start_oid.to_owned();

        loop {
            let resp = self
                .session
                .getbulk(&[&current_oid], 0, max_repetitions)
                .await
                .context("SNMP GETBULK запрос не удался")?;

            let mut found_any = false;

            for (oid, value) in resp.varbinds {
                // Вышли за пределы поддерева или дошли до конца MIB
                if !oid.starts_with(start_oid) || matches!(value, Value::EndOfMibView) {
                    return Ok(results);
                }

                results.push((oid.to_owned(), row_reading(&oid, &value)?));
                current_oid = oid.to_owned();
                found_any = true;
            }

            if !found_any {
                break;
            }
        }

        Ok(results)
    }
}

/// Значение строки таблицы. Строку без значения не пропускаем: иначе
/// таблица укоротится и индексы следующих строк сдвинутся
fn row_reading(oid: &Oid<'_>, value: &Value<'_>) -> Result<Reading> {
    Reading::from_value(value)
        .ok_or_else(|| anyhow::anyhow!("Нет значения в строке таблицы {}", oid))
}
