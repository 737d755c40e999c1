use std::time::Duration;

use anyhow::Result;
use tokio::time::timeout;

pub mod oid;
pub mod reading;
pub mod v2c;

pub use oid::parse_oid;
pub use reading::Reading;
pub use v2c::SnmpClientV2c;

/// SNMPv2c клиент с таймаутом и повторами на каждый запрос
pub struct SnmpClient {
    inner: SnmpClientV2c,
    timeout: Duration,
    retries: u32,
}

impl SnmpClient {
    pub fn new(inner: SnmpClientV2c, timeout: Duration, retries: u32) -> Self {
        Self {
            inner,
            timeout,
            retries,
        }
    }

    /// GET с повторами. `Ok(None)` означает, что агент не знает такого OID
    pub async fn get(&mut self, oid_str: &str) -> Result<Option<Reading>> {
        let oid = parse_oid(oid_str)?;
        let mut attempt = 0;

        loop {
            attempt += 1;
            match timeout(self.timeout, self.inner.get(&oid)).await {
                Ok(Ok(reading)) => return Ok(reading),
                Ok(Err(e)) if attempt > self.retries => return Err(e),
                Err(_) if attempt > self.retries => {
                    anyhow::bail!("Таймаут SNMP GET {} после {} попыток", oid_str, attempt)
                }
                Ok(Err(e)) => tracing::debug!(oid = oid_str, attempt, error = %e, "SNMP GET повтор"),
                Err(_) => tracing::debug!(oid = oid_str, attempt, "SNMP GET таймаут, повтор"),
            }
        }
    }

    /// WALK поддерева с повторами; значения в порядке OID
    pub async fn walk(&mut self, root_oid: &str) -> Result<Vec<(String, Reading)>> {
        let oid = parse_oid(root_oid)?;
        let mut attempt = 0;

        loop {
            attempt += 1;
            match timeout(self.timeout, self.inner.walk(&oid)).await {
                Ok(Ok(rows)) => {
                    return Ok(rows
                        .into_iter()
                        .map(|(oid, reading)| (oid.to_string(), reading))
                        .collect());
                }
                Ok(Err(e)) if attempt > self.retries => return Err(e),
                Err(_) if attempt > self.retries => {
                    anyhow::bail!("Таймаут SNMP WALK {} после {} попыток", root_oid, attempt)
                }
                Ok(Err(e)) => {
                    tracing::debug!(oid = root_oid, attempt, error = %e, "SNMP WALK повтор")
                }
                Err(_) => tracing::debug!(oid = root_oid, attempt, "SNMP WALK таймаут, повтор"),
            }
        }
    }
}

pub async fn create_v2c_client(
    target: &str,
    community: &[u8],
    timeout: Duration,
    retries: u32,
) -> Result<SnmpClient> {
    let client = SnmpClientV2c::new(target, community).await?;
    Ok(SnmpClient::new(client, timeout, retries))
}
