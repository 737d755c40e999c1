use std::collections::HashMap;

use super::ReadingSource;
use crate::snmp::Reading;

/// Источник показаний в памяти; запоминает запрошенные OID
#[derive(Debug, Default)]
pub struct MockSource {
    scalars: HashMap<String, Reading>,
    vectors: HashMap<String, Vec<Reading>>,
    pub requests: Vec<String>,
}

impl MockSource {
    pub fn with_scalar(mut self, oid: &str, value: impl Into<Reading>) -> Self {
        self.scalars.insert(oid.to_string(), value.into());
        self
    }

    pub fn with_vector<R: Into<Reading>>(
        mut self,
        oid: &str,
        values: impl IntoIterator<Item = R>,
    ) -> Self {
        let values = values.into_iter().map(Into::into).collect();
        self.vectors.insert(oid.to_string(), values);
        self
    }
}

impl ReadingSource for MockSource {
    async fn fetch_scalar(&mut self, oid: &str) -> Option<Reading> {
        self.requests.push(oid.to_string());
        self.scalars.get(oid).cloned()
    }

    async fn fetch_vector(&mut self, oid: &str) -> Option<Vec<Reading>> {
        self.requests.push(oid.to_string());
        self.vectors.get(oid).filter(|rows| !rows.is_empty()).cloned()
    }
}
