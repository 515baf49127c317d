//! Single-value guards applied before any command text is built.

use crate::error::ValidationError;

/// VLAN ids reserved by 802.1Q or by common switch firmware.
const RESERVED_VLAN_IDS: [u32; 3] = [0, 1, 4095];

/// True when `id` is usable on a trunk: inside [2, 4094] and not reserved.
pub fn valid_vlan_id(id: u32) -> bool {
    (2..=4094).contains(&id) && !RESERVED_VLAN_IDS.contains(&id)
}

/// Guard form of [`valid_vlan_id`].
pub fn ensure_vlan_id(id: u32) -> Result<u32, ValidationError> {
    if valid_vlan_id(id) {
        Ok(id)
    } else {
        Err(ValidationError::VlanIdOutOfRange(id))
    }
}

/// Parse a textual VLAN id; non-numeric text is invalid, then the numeric
/// range check applies.
pub fn parse_vlan_id(raw: &str) -> Result<u32, ValidationError> {
    let id: u32 = raw
        .trim()
        .parse()
        .map_err(|_| ValidationError::VlanIdNotNumeric(raw.to_string()))?;
    ensure_vlan_id(id)
}

/// True when `mac` is six colon-separated two-digit hex octets.
pub fn valid_mac(mac: &str) -> bool {
    let octets: Vec<&str> = mac.split(':').collect();
    octets.len() == 6
        && octets
            .iter()
            .all(|o| o.len() == 2 && o.chars().all(|c| c.is_ascii_hexdigit()))
}

/// Guard form of [`valid_mac`].
pub fn ensure_mac(mac: &str) -> Result<&str, ValidationError> {
    if valid_mac(mac) {
        Ok(mac)
    } else {
        Err(ValidationError::MalformedMac(mac.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vlan_id_boundaries() {
        assert!(!valid_vlan_id(0));
        assert!(!valid_vlan_id(1));
        assert!(valid_vlan_id(2));
        assert!(valid_vlan_id(4094));
        assert!(!valid_vlan_id(4095));
        assert!(!valid_vlan_id(5000));
    }

    #[test]
    fn non_numeric_vlan_id_is_rejected() {
        assert_eq!(
            parse_vlan_id("mgmt"),
            Err(ValidationError::VlanIdNotNumeric("mgmt".to_string()))
        );
        assert_eq!(parse_vlan_id(" 42 "), Ok(42));
        assert_eq!(
            parse_vlan_id("4095"),
            Err(ValidationError::VlanIdOutOfRange(4095))
        );
    }

    #[test]
    fn mac_syntax() {
        assert!(valid_mac("aa:bb:cc:dd:ee:ff"));
        assert!(valid_mac("00:1A:2B:3C:4D:5E"));
        assert!(!valid_mac("aa-bb-cc-dd-ee-ff"));
        assert!(!valid_mac("aa:bb:cc:dd:ee"));
        assert!(!valid_mac("aa:bb:cc:dd:ee:f"));
        assert!(!valid_mac("gg:bb:cc:dd:ee:ff"));
    }
}
