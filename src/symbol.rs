use lazy_static::lazy_static;

use std::collections::HashMap;
use std::str::FromStr;

use crate::DecodeError;

/// The map symbol of an OGN station, derived from its APRS symbol.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub enum Symbol {
    #[default]
    Unknown,
    Glider,
    Helicopter,
    Parachute,
    Aircraft,
    Jet,
    Balloon,
    StaticObject,
    Uav,
    WeatherStation,
}

/// Aircraft type, modeled after the FLARM/NMEA aircraft type list.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub enum AircraftType {
    #[default]
    Unknown,
    /// Fixed wing aircraft
    Aircraft,
    Airship,
    Balloon,
    /// Helicopter, gyrocopter or rotorcraft
    Copter,
    Drone,
    /// Glider, including powered gliders and touring motor gliders
    Glider,
    HangGlider,
    Jet,
    Paraglider,
    Skydiver,
    StaticObstacle,
    TowPlane,
}

// see http://wiki.glidernet.org/wiki:ogn-flavoured-aprs
//
// Order matters: the first entry of an aircraft type is the symbol used when
// encoding a position report for it.
//
//                                CODE    SYMBOL                  AIRCRAFT TYPE
const SYMBOL_TABLE: [(&str, Symbol, Option<AircraftType>); 9] = [
    ("/z", Symbol::Unknown, Some(AircraftType::Unknown)),
    ("/'", Symbol::Glider, Some(AircraftType::Glider)),
    ("/X", Symbol::Helicopter, Some(AircraftType::Copter)),
    // parachute, hang glider, paraglider
    ("/g", Symbol::Parachute, Some(AircraftType::Paraglider)),
    // drop plane, powered aircraft
    ("\\^", Symbol::Aircraft, Some(AircraftType::Aircraft)),
    ("/^", Symbol::Jet, Some(AircraftType::Jet)),
    // balloon, airship
    ("/O", Symbol::Balloon, Some(AircraftType::Balloon)),
    ("\\n", Symbol::StaticObject, Some(AircraftType::StaticObstacle)),
    ("/_", Symbol::WeatherStation, None),
];

/// Symbol code used for aircraft types without an entry in the symbol table.
const FALLBACK_AIRCRAFT_SYMBOL: &str = "\\^";

// Indexed by the 4 bit aircraft category of an OGN aircraft id
const AIRCRAFT_CATEGORIES: [AircraftType; 16] = [
    AircraftType::Unknown,        // 0x0 reserved
    AircraftType::Glider,         // 0x1 glider, motor glider, TMG
    AircraftType::TowPlane,       // 0x2 tow plane, tug plane
    AircraftType::Copter,         // 0x3 helicopter, gyrocopter, rotorcraft
    AircraftType::Skydiver,       // 0x4 skydiver, parachute
    AircraftType::Aircraft,       // 0x5 drop plane for skydivers
    AircraftType::HangGlider,     // 0x6 hang glider (hard)
    AircraftType::Paraglider,     // 0x7 paraglider (soft)
    AircraftType::Aircraft,       // 0x8 reciprocating engine(s)
    AircraftType::Jet,            // 0x9 jet or turboprop engine(s)
    AircraftType::Unknown,        // 0xA unknown
    AircraftType::Balloon,        // 0xB hot, gas, weather, static
    AircraftType::Airship,        // 0xC airship, blimp, zeppelin
    AircraftType::Drone,          // 0xD UAV, RPAS, drone
    AircraftType::Unknown,        // 0xE reserved
    AircraftType::StaticObstacle, // 0xF static obstacle
];

lazy_static! {
    static ref SYMBOL_MAP: HashMap<&'static str, Symbol> = SYMBOL_TABLE
        .iter()
        .map(|&(code, symbol, _)| (code, symbol))
        .collect();
    static ref AIRCRAFT_TYPE_MAP: HashMap<&'static str, AircraftType> = SYMBOL_TABLE
        .iter()
        .filter_map(|&(code, _, aircraft_type)| Some((code, aircraft_type?)))
        .collect();
}

impl FromStr for Symbol {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, <Self as FromStr>::Err> {
        match SYMBOL_MAP.get(s) {
            Some(symbol) => Ok(*symbol),
            None => Err(DecodeError::InvalidSymbol(s.to_owned())),
        }
    }
}

impl AircraftType {
    /// Looks up the aircraft type an APRS symbol code (table + code character) stands for.
    pub fn from_symbol_code(code: &str) -> Option<Self> {
        AIRCRAFT_TYPE_MAP.get(code).copied()
    }

    /// Maps the 4 bit aircraft category of an OGN aircraft id. Only the low
    /// 4 bits of `category` are considered.
    pub fn from_category(category: u8) -> Self {
        AIRCRAFT_CATEGORIES[usize::from(category & 0xF)]
    }

    /// The two character APRS symbol code (table + code character) for this
    /// aircraft type.
    ///
    /// Some aircraft types share a symbol, others have none; the first matching
    /// table entry wins and types without an entry use the powered aircraft symbol.
    pub fn symbol_code(&self) -> &'static str {
        SYMBOL_TABLE
            .iter()
            .find(|(_, _, aircraft_type)| *aircraft_type == Some(*self))
            .map(|(code, _, _)| *code)
            .unwrap_or(FALLBACK_AIRCRAFT_SYMBOL)
    }
}
