//! The `idXXYYYYYY` token of OGN position reports.
//!
//! `XX` packs the flags, the aircraft category and the address type,
//! `YYYYYY` is the 24 bit device address:
//!
//! ```text
//! bit   31  30  29..26    25..24    23..0
//!       S   P   category  addr type address
//! ```

use std::str::FromStr;

use crate::{AircraftType, DecodeError};

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
#[repr(u8)]
pub enum AddressType {
    #[default]
    Unknown = 0,
    Icao = 1,
    Flarm = 2,
    OgnTracker = 3,
}

impl From<u8> for AddressType {
    fn from(value: u8) -> Self {
        match value & 0b11 {
            1 => AddressType::Icao,
            2 => AddressType::Flarm,
            3 => AddressType::OgnTracker,
            _ => AddressType::Unknown,
        }
    }
}

const STEALTH_BIT: u32 = 1 << 31;
const NO_TRACKING_BIT: u32 = 1 << 30;
const CATEGORY_SHIFT: u32 = 26;
const ADDRESS_TYPE_SHIFT: u32 = 24;
const ADDRESS_MASK: u32 = 0x00FF_FFFF;

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct AircraftId {
    pub stealth_mode: bool,
    pub no_tracking: bool,
    pub aircraft_type: AircraftType,
    pub address_type: AddressType,
    pub address: u32,
}

impl From<u32> for AircraftId {
    fn from(raw: u32) -> Self {
        AircraftId {
            stealth_mode: raw & STEALTH_BIT != 0,
            no_tracking: raw & NO_TRACKING_BIT != 0,
            aircraft_type: AircraftType::from_category((raw >> CATEGORY_SHIFT) as u8),
            address_type: AddressType::from((raw >> ADDRESS_TYPE_SHIFT) as u8),
            address: raw & ADDRESS_MASK,
        }
    }
}

impl FromStr for AircraftId {
    type Err = DecodeError;

    /// Parses the hex digits following the `id` prefix, e.g. `0ADDE626`.
    fn from_str(s: &str) -> Result<Self, <Self as FromStr>::Err> {
        // from_str_radix would also accept a leading sign
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(DecodeError::InvalidAircraftId(s.to_owned()));
        }

        let raw = u32::from_str_radix(s, 16)
            .map_err(|_| DecodeError::InvalidAircraftId(s.to_owned()))?;

        Ok(AircraftId::from(raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flarm_tow_plane() {
        let id: AircraftId = "0ADDE626".parse().unwrap();
        assert_eq!(
            id,
            AircraftId {
                stealth_mode: false,
                no_tracking: false,
                aircraft_type: AircraftType::TowPlane,
                address_type: AddressType::Flarm,
                address: 0xDDE626,
            }
        );
    }

    #[test]
    fn icao_jet() {
        let id: AircraftId = "254D21C2".parse().unwrap();
        assert_eq!(id.aircraft_type, AircraftType::Jet);
        assert_eq!(id.address_type, AddressType::Icao);
        assert_eq!(id.address, 0x4D21C2);
        assert!(!id.stealth_mode);
    }

    #[test]
    fn flags() {
        let id: AircraftId = "C6123456".parse().unwrap();
        assert!(id.stealth_mode);
        assert!(id.no_tracking);
        assert_eq!(id.aircraft_type, AircraftType::Glider);
        assert_eq!(id.address_type, AddressType::Flarm);
    }

    #[test]
    fn short_token() {
        let id: AircraftId = "1".parse().unwrap();
        assert_eq!(id.address, 1);
        assert_eq!(id.address_type, AddressType::Unknown);
    }

    #[test]
    fn invalid() {
        for s in ["", "+0ADDE626", "0ADDE62G", "10ADDE6260"] {
            assert_eq!(
                s.parse::<AircraftId>(),
                Err(DecodeError::InvalidAircraftId(s.to_owned()))
            );
        }
    }

    #[test]
    fn address_type_from_u8() {
        assert_eq!(AddressType::from(0), AddressType::Unknown);
        assert_eq!(AddressType::from(3), AddressType::OgnTracker);
        assert_eq!(AddressType::from(6), AddressType::Flarm);
    }
}
