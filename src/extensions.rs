//! OGN extension tokens following the APRS position, e.g.
//! `id0ADDE626 -019fpm +0.0rot 5.5dB 3e -4.3kHz`.

use crate::number::{parse_i32, parse_u32};
use crate::utils::tail;
use crate::OgnMessage;

const METERS_PER_SECOND_PER_FPM: f64 = 0.00508;

#[derive(Debug, Copy, Clone)]
enum Pattern {
    Prefix(&'static str),
    Suffix(&'static str),
    /// `A?:`, e.g. `A3:AXY547M`
    FlightNumber,
}

impl Pattern {
    fn matches(&self, token: &str) -> bool {
        match self {
            Pattern::Prefix(prefix) => token.starts_with(*prefix),
            Pattern::Suffix(suffix) => token.ends_with(*suffix),
            Pattern::FlightNumber => {
                token.starts_with('A') && token.as_bytes().get(2) == Some(&b':')
            }
        }
    }
}

#[derive(Debug, Copy, Clone)]
enum Field {
    AircraftId,
    Temperature,
    Humidity,
    Pressure,
    VerticalSpeed,
    RotationRate,
    SignalStrength,
    ErrorCount,
    FrequencyOffset,
    FlightLevel,
    FlightNumber,
    Squawk,
    GpsInfo,
}

// A token is only considered for the first pattern it matches, e.g. `id…fpm`
// is always an aircraft id.
const RULES: [(Pattern, Field); 13] = [
    (Pattern::Prefix("id"), Field::AircraftId),
    (Pattern::Prefix("t"), Field::Temperature),
    (Pattern::Prefix("h"), Field::Humidity),
    (Pattern::Prefix("b"), Field::Pressure),
    (Pattern::Suffix("fpm"), Field::VerticalSpeed),
    (Pattern::Suffix("rot"), Field::RotationRate),
    (Pattern::Suffix("dB"), Field::SignalStrength),
    (Pattern::Suffix("e"), Field::ErrorCount),
    (Pattern::Suffix("kHz"), Field::FrequencyOffset),
    (Pattern::Prefix("FL"), Field::FlightLevel),
    (Pattern::FlightNumber, Field::FlightNumber),
    (Pattern::Prefix("Sq"), Field::Squawk),
    (Pattern::Prefix("gps:"), Field::GpsInfo),
];

impl Field {
    fn apply<'a>(&self, message: &mut OgnMessage<'a>, token: &'a str) {
        match self {
            Field::AircraftId => message.aircraft_id = tail(token, 2),
            Field::Temperature => {
                if let Ok(temperature) = parse_u32(tail(token, 1)) {
                    message.temperature = temperature;
                }
            }
            Field::Humidity => {
                if let Ok(humidity) = parse_u32(tail(token, 1)) {
                    message.humidity = humidity;
                }
            }
            Field::Pressure => {
                if let Ok(tenths) = parse_u32(tail(token, 1)) {
                    message.pressure = f64::from(tenths) / 10.0;
                }
            }
            Field::VerticalSpeed => {
                let fpm = token.split('f').next().unwrap_or(token);
                let fpm = fpm.strip_prefix('+').unwrap_or(fpm);
                if let Ok(fpm) = parse_i32(fpm) {
                    message.vertical_speed = f64::from(fpm) * METERS_PER_SECOND_PER_FPM;
                }
            }
            Field::RotationRate => message.rotation_rate = token,
            Field::SignalStrength => message.signal_strength = token,
            Field::ErrorCount => message.error_count = token,
            Field::FrequencyOffset => message.frequency_offset = token,
            Field::FlightLevel => message.flight_level = token,
            Field::FlightNumber => {
                if let Some((_, flight_number)) = token.split_once(':') {
                    message.flight_number = flight_number;
                }
            }
            Field::Squawk => message.squawk = tail(token, 2),
            Field::GpsInfo => message.gps_info = tail(token, 4),
        }
    }
}

/// Decodes the space separated extension tokens into `message`. Unknown
/// tokens are ignored.
pub(crate) fn parse_extensions<'a>(message: &mut OgnMessage<'a>, extensions: &'a str) {
    for token in extensions.split(' ').filter(|token| !token.is_empty()) {
        if let Some((_, field)) = RULES.iter().find(|(pattern, _)| pattern.matches(token)) {
            field.apply(message, token);
        }
    }
}
