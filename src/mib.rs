//! OID и справочники из DELLEMC-OS10-CHASSIS-MIB и SNMPv2-MIB

pub const SYS_NAME: &str = "1.3.6.1.2.1.1.5.0";
pub const SYS_OBJECT_ID: &str = "1.3.6.1.2.1.1.2.0";
pub const SYS_DESCR: &str = "1.3.6.1.2.1.1.1.0";

pub const CHASSIS_TYPE: &str = "1.3.6.1.4.1.674.11000.5000.100.4.1.1.3.1.2.1";
pub const CHASSIS_HW_REV: &str = "1.3.6.1.4.1.674.11000.5000.100.4.1.1.3.1.6.1";
pub const CHASSIS_PART_NUMBER: &str = "1.3.6.1.4.1.674.11000.5000.100.4.1.1.3.1.4.1";
pub const CHASSIS_SERVICE_TAG: &str = "1.3.6.1.4.1.674.11000.5000.100.4.1.1.3.1.7.1";
pub const CHASSIS_TEMP: &str = "1.3.6.1.4.1.674.11000.5000.100.4.1.1.3.1.11.1";

pub const CARD_DESCR: &str = "1.3.6.1.4.1.674.11000.5000.100.4.1.1.4.1.3.1.1";
pub const CARD_HW_REV: &str = "1.3.6.1.4.1.674.11000.5000.100.4.1.1.4.1.8.1.1";
pub const CARD_PART_NUMBER: &str = "1.3.6.1.4.1.674.11000.5000.100.4.1.1.4.1.6.1.1";
pub const CARD_STATUS: &str = "1.3.6.1.4.1.674.11000.5000.100.4.1.1.4.1.4.1.1";
pub const CARD_SERVICE_TAG: &str = "1.3.6.1.4.1.674.11000.5000.100.4.1.1.4.1.9.1.1";
pub const CARD_TEMP: &str = "1.3.6.1.4.1.674.11000.5000.100.4.1.1.4.1.5.1.1";

/// os10FanTrayOperStatus
pub const FAN_TRAY_OPER_STATUS: &str = "1.3.6.1.4.1.674.11000.5000.100.4.1.2.2.1.4";
/// os10PowerSupplyOperStatus
pub const POWER_SUPPLY_OPER_STATUS: &str = "1.3.6.1.4.1.674.11000.5000.100.4.1.2.1.1.4";

/// Os10CardOperStatus: 1 означает ready
pub const CARD_READY: i64 = 1;
pub const CARD_DIAG_MODE: i64 = 4;
pub const CARD_OFFLINE: i64 = 6;

/// Os10ChassisDefType
pub fn chassis_type_name(code: i64) -> Option<&'static str> {
    let name = match code {
        1 => "s6000on",
        2 => "s4048on",
        3 => "s4048Ton",
        4 => "s3048on",
        5 => "s6010on",
        6 => "s4148Fon",
        7 => "s4128Fon",
        8 => "s4148Ton",
        9 => "s4128Ton",
        10 => "s4148FEon",
        11 => "s4148Uon",
        12 => "s4200on",
        13 => "mx5108Non",
        14 => "mx9116Non",
        15 => "s5148Fon",
        16 => "z9100on",
        17 => "s4248FBon",
        18 => "s4248FBLon",
        19 => "s4112Fon",
        20 => "s4112Ton",
        21 => "z9264Fon",
        22 => "z9224Fon",
        23 => "s5212Fon",
        24 => "s5224Fon",
        25 => "s5232Fon",
        26 => "s5248Fon",
        27 => "s5296Fon",
        28 => "z9332Fon",
        29 => "n3248TEon",
        9999 => "unknown",
        _ => return None,
    };
    Some(name)
}

/// Os10CardOperStatus
pub fn card_status_name(code: i64) -> Option<&'static str> {
    let name = match code {
        1 => "ready",
        2 => "cardMisMatch",
        3 => "cardProblem",
        4 => "diagMode",
        5 => "cardAbsent",
        6 => "offline",
        _ => return None,
    };
    Some(name)
}

/// Имя из справочника или `unrecognized (N)` для незадокументированных кодов
pub fn describe(code: i64, lookup: fn(i64) -> Option<&'static str>) -> String {
    match lookup(code) {
        Some(name) => name.to_string(),
        None => format!("unrecognized ({})", code),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_chassis_types() {
        assert_eq!(chassis_type_name(6), Some("s4148Fon"));
        assert_eq!(chassis_type_name(29), Some("n3248TEon"));
        assert_eq!(chassis_type_name(9999), Some("unknown"));
        assert_eq!(chassis_type_name(30), None);
    }

    #[test]
    fn unmapped_codes_are_labelled() {
        assert_eq!(describe(4, card_status_name), "diagMode");
        assert_eq!(describe(42, card_status_name), "unrecognized (42)");
    }
}
