use std::fmt;
use std::net::Ipv4Addr;

use serde::Serialize;
use snmp2::Value;

/// Одно значение, полученное с устройства
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Reading {
    Integer(i64),
    Text(String),
}

impl Reading {
    /// Конвертирует значение SNMP в собственный тип.
    /// Исключения (noSuchObject, noSuchInstance, endOfMibView) и NULL дают `None`.
    pub fn from_value(value: &Value<'_>) -> Option<Self> {
        match value {
            Value::Integer(v) => Some(Self::Integer(*v)),
            Value::Counter32(v) | Value::Unsigned32(v) | Value::Timeticks(v) => {
                Some(Self::Integer(i64::from(*v)))
            }
            Value::Counter64(v) => i64::try_from(*v).ok().map(Self::Integer),
            Value::OctetString(bytes) => {
                Some(Self::Text(String::from_utf8_lossy(bytes).into_owned()))
            }
            Value::ObjectIdentifier(oid) => Some(Self::Text(oid.to_string())),
            Value::IpAddress(octets) => Some(Self::Text(Ipv4Addr::from(*octets).to_string())),
            _ => None,
        }
    }

    /// Целое значение. Агенты иногда отдают числа строкой, их тоже принимаем
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(v) => Some(*v),
            Self::Text(s) => s.trim().parse().ok(),
        }
    }
}

impl fmt::Display for Reading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(v) => write!(f, "{}", v),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for Reading {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<&str> for Reading {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_values_are_kept() {
        assert_eq!(
            Reading::from_value(&Value::Integer(4)),
            Some(Reading::Integer(4))
        );
        assert_eq!(
            Reading::from_value(&Value::Unsigned32(42)),
            Some(Reading::Integer(42))
        );
    }

    #[test]
    fn octet_strings_become_text() {
        let reading = Reading::from_value(&Value::OctetString(b"S4148F-ON")).unwrap();
        assert_eq!(reading, Reading::Text("S4148F-ON".to_string()));
        assert_eq!(reading.to_string(), "S4148F-ON");
    }

    #[test]
    fn exceptions_are_absent() {
        assert_eq!(Reading::from_value(&Value::NoSuchObject), None);
        assert_eq!(Reading::from_value(&Value::NoSuchInstance), None);
        assert_eq!(Reading::from_value(&Value::EndOfMibView), None);
        assert_eq!(Reading::from_value(&Value::Null), None);
    }

    #[test]
    fn numeric_text_parses_as_integer() {
        assert_eq!(Reading::from(" 37 ").as_integer(), Some(37));
        assert_eq!(Reading::from("ready").as_integer(), None);
        assert_eq!(Reading::Integer(0).as_integer(), Some(0));
    }
}
