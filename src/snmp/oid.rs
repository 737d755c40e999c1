use anyhow::{Context, Result};
use snmp2::Oid;

/// Точечная запись OID, ведущая точка допускается: `.1.3.6.1.2.1.1.5.0`
pub fn parse_oid(s: &str) -> Result<Oid<'static>> {
    let trimmed = s.trim();
    let body = trimmed.strip_prefix('.').unwrap_or(trimmed);
    if body.is_empty() {
        anyhow::bail!("Пустой OID");
    }

    let arcs = body
        .split('.')
        .map(|arc| arc.parse::<u64>())
        .collect::<Result<Vec<u64>, _>>()
        .with_context(|| format!("Невалидный OID: {}", s))?;

    Oid::from(&arcs).map_err(|e| anyhow::anyhow!("Не удалось создать Oid из '{}': {:?}", s, e))
}
