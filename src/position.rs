//! OGN position reports, e.g.
//!
//! ```text
//! /074548h5111.32N/00102.04W'086/007/A=000607 id0ADDE626 -019fpm +0.0rot
//! ```
//!
//! The part up to the first space is an uncompressed APRS position with a
//! fixed layout, followed by space separated OGN extension tokens.

use crate::extensions::parse_extensions;
use crate::lonlat::{decode_latitude, decode_longitude};
use crate::number::parse_i32;
use crate::utils::substr;
use crate::weather::parse_weather;
use crate::{AircraftId, MessageType, OgnMessage, Symbol};

// Byte offsets into the APRS part of the body
/// `hhmmss`, followed by the `h` marker
const TIMESTAMP: usize = 1;
const TIMESTAMP_LEN: usize = 6;
/// `DDMM.mm`
const LATITUDE: usize = 8;
const LATITUDE_LEN: usize = 7;
/// `N` or `S`
const LATITUDE_DIRECTION: usize = 15;
const SYMBOL_TABLE: usize = 16;
/// `DDDMM.mm`
const LONGITUDE: usize = 17;
const LONGITUDE_LEN: usize = 8;
/// `E` or `W`
const LONGITUDE_DIRECTION: usize = 25;
const SYMBOL_CODE: usize = 26;
/// `ccc/sss` course and speed data extension
const COURSE: usize = 27;
const COURSE_SPEED_SEPARATOR: usize = 30;
const SPEED: usize = 31;

const MIN_POSITION_LEN: usize = 30;
const MIN_COURSE_SPEED_LEN: usize = 34;

const ALTITUDE_MARKER: &str = "/A=";
const ALTITUDE_LEN: usize = 6;

/// `!Wxy!` carries an additional digit of latitude and longitude minutes
const PRECISION_MARKER: &str = "!W";

const METERS_PER_FOOT: f64 = 0.3048;

/// Decodes a report whose `body` starts with `/`. `header` is everything
/// before the first colon of the line.
pub(crate) fn parse_report<'a>(message: &mut OgnMessage<'a>, header: &'a str, body: &'a str) {
    let (position, extensions) = match body.split_once(' ') {
        Some((position, extensions)) => (position, extensions),
        None => (body, ""),
    };

    let Some((source_id, _)) = header.split_once('>') else {
        message.message_type = MessageType::Unknown;
        return;
    };

    if !position.starts_with('/') || position.len() < MIN_POSITION_LEN {
        message.message_type = MessageType::Unknown;
        return;
    }

    message.message_type = MessageType::TrafficReport;
    message.source_id = source_id;
    message.timestamp = substr(position, TIMESTAMP, TIMESTAMP_LEN);

    let bytes = position.as_bytes();
    let (lat_enhancement, lon_enhancement) = precision_enhancement(body);
    message.latitude = decode_latitude(
        substr(position, LATITUDE, LATITUDE_LEN),
        char::from(bytes[LATITUDE_DIRECTION]),
        lat_enhancement,
    );
    message.longitude = decode_longitude(
        substr(position, LONGITUDE, LONGITUDE_LEN),
        char::from(bytes[LONGITUDE_DIRECTION]),
        lon_enhancement,
    );

    let symbol_code = [bytes[SYMBOL_TABLE], bytes[SYMBOL_CODE]];
    message.symbol = std::str::from_utf8(&symbol_code)
        .ok()
        .and_then(|code| code.parse::<Symbol>().ok())
        .unwrap_or_default();

    if message.symbol == Symbol::WeatherStation {
        message.message_type = MessageType::Weather;
        parse_weather(message, position);
    } else {
        parse_course_speed_altitude(message, position);
    }

    parse_extensions(message, extensions);

    if !message.aircraft_id.is_empty() {
        decode_aircraft_id(message);
    }
}

fn precision_enhancement(body: &str) -> (Option<char>, Option<char>) {
    match body.find(PRECISION_MARKER) {
        // "!Wxy" and at least one more byte
        Some(index) if body.len() > index + 4 => {
            let bytes = body.as_bytes();
            (
                Some(char::from(bytes[index + 2])),
                Some(char::from(bytes[index + 3])),
            )
        }
        _ => (None, None),
    }
}

fn parse_course_speed_altitude(message: &mut OgnMessage, position: &str) {
    if position.len() >= MIN_COURSE_SPEED_LEN
        && position.as_bytes()[COURSE_SPEED_SEPARATOR] == b'/'
    {
        if let Ok(course) = parse_i32(substr(position, COURSE, 3)) {
            message.course = course;
        }
        if let Ok(speed) = parse_i32(substr(position, SPEED, 3)) {
            message.speed = speed;
        }
    }

    if let Some(index) = position.find(ALTITUDE_MARKER) {
        let feet = substr(position, index + ALTITUDE_MARKER.len(), ALTITUDE_LEN);
        if let Ok(feet) = parse_i32(feet) {
            message.altitude = f64::from(feet) * METERS_PER_FOOT;
        }
    }
}

fn decode_aircraft_id(message: &mut OgnMessage) {
    let Ok(id) = message.aircraft_id.parse::<AircraftId>() else {
        return;
    };

    message.stealth_mode = id.stealth_mode;
    message.no_tracking_flag = id.no_tracking;
    message.aircraft_type = id.aircraft_type;
    message.address_type = id.address_type;

    // the address as sent, skipping the flag and type digits
    if message.aircraft_id.len() >= 8 {
        message.address = substr(message.aircraft_id, 2, 6);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AircraftType;

    #[test]
    fn precision_enhancement_needs_trailing_byte() {
        assert_eq!(
            precision_enhancement("/x !W91! id"),
            (Some('9'), Some('1'))
        );
        assert_eq!(precision_enhancement("/x !W91!"), (Some('9'), Some('1')));
        assert_eq!(precision_enhancement("/x !W91"), (None, None));
        assert_eq!(precision_enhancement("/x"), (None, None));
    }

    #[test]
    fn precision_enhancement_anywhere_in_body() {
        assert_eq!(
            precision_enhancement("/x id0ADDE626 !W27! -019fpm"),
            (Some('2'), Some('7'))
        );
    }

    #[test]
    fn unknown_symbol() {
        let message = OgnMessage::parse(
            "FLRDDE626>APRS,qAS,EGHL:/074548h5111.32N#00102.04W#086/007/A=000607",
        );
        assert_eq!(message.message_type, MessageType::TrafficReport);
        assert_eq!(message.symbol, Symbol::Unknown);
        assert_eq!(message.course, 86);
    }

    #[test]
    fn short_aircraft_id_has_no_address() {
        let message = OgnMessage::parse(
            "FLRDDE626>APRS,qAS,EGHL:/074548h5111.32N/00102.04W'086/007/A=000607 id0ADDE6",
        );
        assert_eq!(message.aircraft_id, "0ADDE6");
        assert_eq!(message.address, "");
        // the digits are taken as the low bits of the id
        assert_eq!(message.aircraft_type, AircraftType::Unknown);
    }

    #[test]
    fn stealth_and_no_tracking() {
        let message = OgnMessage::parse(
            "FLRDDE626>APRS,qAS,EGHL:/074548h5111.32N/00102.04W'086/007/A=000607 idC6DDE626",
        );
        assert!(message.stealth_mode);
        assert!(message.no_tracking_flag);
        assert_eq!(message.aircraft_type, AircraftType::Glider);
        assert_eq!(message.address, "DDE626");
    }

    #[test]
    fn negative_altitude() {
        let message = OgnMessage::parse(
            "FLRDDE626>APRS,qAS,EGHL:/074548h5111.32N/00102.04W'086/007/A=-00010",
        );
        assert_relative_eq!(message.altitude, -3.048, epsilon = 1e-9);
    }
}
