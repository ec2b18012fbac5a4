use std::convert::TryFrom;

use crate::{parse_aprsis_message, AddressType, AircraftType, Symbol, Timestamp};

#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum MessageType {
    #[default]
    Unknown,
    TrafficReport,
    Comment,
    Status,
    Weather,
}

/// A single decoded line of the OGN APRS-IS feed.
///
/// All text fields borrow from the line the message was parsed from and are
/// empty when the line did not carry them. Positions that could not be
/// decoded are NaN.
#[derive(Debug, Clone, PartialEq)]
pub struct OgnMessage<'a> {
    /// The line as passed in, including any line terminator
    pub sentence: &'a str,
    pub message_type: MessageType,

    pub source_id: &'a str,
    /// Verbatim `hhmmss` of the report, see [`OgnMessage::timestamp_hms`]
    pub timestamp: &'a str,
    /// Decimal degrees, negative south of the equator
    pub latitude: f64,
    /// Decimal degrees, negative west of Greenwich
    pub longitude: f64,
    /// Meters above mean sea level
    pub altitude: f64,
    pub symbol: Symbol,
    /// Degrees
    pub course: i32,
    /// Knots
    pub speed: i32,
    /// Meters per second
    pub vertical_speed: f64,

    pub aircraft_id: &'a str,
    pub rotation_rate: &'a str,
    pub signal_strength: &'a str,
    pub error_count: &'a str,
    pub frequency_offset: &'a str,
    pub squawk: &'a str,
    pub flight_level: &'a str,
    pub flight_number: &'a str,
    pub gps_info: &'a str,

    /// 24 bit device address in hex, from the aircraft id
    pub address: &'a str,
    pub aircraft_type: AircraftType,
    pub address_type: AddressType,
    pub stealth_mode: bool,
    pub no_tracking_flag: bool,

    /// Degrees
    pub wind_direction: u32,
    /// Knots
    pub wind_speed: u32,
    /// Knots
    pub wind_gust_speed: u32,
    /// Degrees Fahrenheit
    pub temperature: u32,
    /// Percent
    pub humidity: u32,
    /// Hectopascal
    pub pressure: f64,
}

impl<'a> OgnMessage<'a> {
    pub fn new(sentence: &'a str) -> Self {
        OgnMessage {
            sentence,
            message_type: MessageType::Unknown,
            source_id: "",
            timestamp: "",
            latitude: f64::NAN,
            longitude: f64::NAN,
            altitude: f64::NAN,
            symbol: Symbol::Unknown,
            course: 0,
            speed: 0,
            vertical_speed: 0.0,
            aircraft_id: "",
            rotation_rate: "",
            signal_strength: "",
            error_count: "",
            frequency_offset: "",
            squawk: "",
            flight_level: "",
            flight_number: "",
            gps_info: "",
            address: "",
            aircraft_type: AircraftType::Unknown,
            address_type: AddressType::Unknown,
            stealth_mode: false,
            no_tracking_flag: false,
            wind_direction: 0,
            wind_speed: 0,
            wind_gust_speed: 0,
            temperature: 0,
            humidity: 0,
            pressure: 0.0,
        }
    }

    /// Creates a message from `sentence` and decodes it.
    pub fn parse(sentence: &'a str) -> Self {
        let mut message = OgnMessage::new(sentence);
        parse_aprsis_message(&mut message);
        message
    }

    /// Puts the message back into its undecoded state for a new `sentence`.
    pub fn reset(&mut self, sentence: &'a str) {
        *self = OgnMessage::new(sentence);
    }

    pub fn has_position(&self) -> bool {
        !self.latitude.is_nan() && !self.longitude.is_nan()
    }

    /// Interprets the verbatim report time.
    pub fn timestamp_hms(&self) -> Option<Timestamp> {
        Timestamp::try_from(self.timestamp).ok()
    }
}
