use std::fmt;

/// Os10CmnOperStatus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperStatus {
    Up,
    Down,
    Testing,
    Unknown,
    Dormant,
    NotPresent,
    LowerLayerDown,
    Failed,
    /// Код, которого нет в MIB (например, после обновления прошивки)
    Unrecognized(i64),
}

impl OperStatus {
    pub fn classify(code: i64) -> Self {
        match code {
            1 => Self::Up,
            2 => Self::Down,
            3 => Self::Testing,
            4 => Self::Unknown,
            5 => Self::Dormant,
            6 => Self::NotPresent,
            7 => Self::LowerLayerDown,
            8 => Self::Failed,
            other => Self::Unrecognized(other),
        }
    }
}

impl fmt::Display for OperStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Testing => "testing",
            Self::Unknown => "unknown",
            Self::Dormant => "dormant",
            Self::NotPresent => "notPresent",
            Self::LowerLayerDown => "lowerLayerDown",
            Self::Failed => "failed",
            Self::Unrecognized(code) => return write!(f, "unrecognized ({})", code),
        };
        f.write_str(name)
    }
}
