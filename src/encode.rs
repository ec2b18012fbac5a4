//! Lines sent to an OGN APRS-IS server.

use std::io::Write;

use crate::callsign::passcode;
use crate::lonlat::{encode_latitude, encode_longitude};
use crate::{AircraftType, EncodeError, Timestamp};

const FEET_PER_METER: f64 = 3.28084;

/// Writes the range filter `filter r/<lat>/<lon>/<radius> t/o`.
pub fn encode_filter<W: Write>(
    buf: &mut W,
    latitude: f64,
    longitude: f64,
    radius_km: u32,
) -> Result<(), EncodeError> {
    write!(
        buf,
        "filter r/{:.4}/{:.4}/{} t/o",
        latitude, longitude, radius_km
    )?;

    Ok(())
}

/// Writes the login line, including the range filter and the line terminator.
pub fn encode_login<W: Write>(
    buf: &mut W,
    call: &str,
    latitude: f64,
    longitude: f64,
    radius_km: u32,
    app_name: &str,
    app_version: &str,
) -> Result<(), EncodeError> {
    write!(
        buf,
        "user {} pass {} vers {} {} ",
        call,
        passcode(call),
        app_name,
        app_version
    )?;
    encode_filter(buf, latitude, longitude, radius_km)?;
    writeln!(buf)?;

    Ok(())
}

/// Formats the login line for an OGN APRS-IS server, e.g.
///
/// ```
/// assert_eq!(
///     ogn_aprs::format_login_string("ENR12345", -48.0, 7.85123456, 99, "Enroute", "1.99"),
///     "user ENR12345 pass 379 vers Enroute 1.99 filter r/-48.0000/7.8512/99 t/o\n"
/// );
/// ```
pub fn format_login_string(
    call: &str,
    latitude: f64,
    longitude: f64,
    radius_km: u32,
    app_name: &str,
    app_version: &str,
) -> String {
    format!(
        "user {} pass {} vers {} {} filter r/{:.4}/{:.4}/{} t/o\n",
        call,
        passcode(call),
        app_name,
        app_version,
        latitude,
        longitude,
        radius_km
    )
}

/// Formats a server command that replaces the filter of an established session.
pub fn format_filter_command(latitude: f64, longitude: f64, radius_km: u32) -> String {
    format!(
        "# filter r/{:.4}/{:.4}/{} t/o\n",
        latitude, longitude, radius_km
    )
}

/// A position report of our own station, e.g. to show it on OGN maps.
#[derive(Debug, Clone, PartialEq)]
pub struct PositionReport<'a> {
    pub call: &'a str,
    /// Decimal degrees
    pub latitude: f64,
    /// Decimal degrees
    pub longitude: f64,
    /// Meters above mean sea level
    pub altitude: f64,
    /// Degrees
    pub course: f64,
    /// Knots
    pub speed: f64,
    pub aircraft_type: AircraftType,
}

impl<'a> PositionReport<'a> {
    /// Writes the report line for the given time of day. Course, speed and
    /// altitude are truncated to whole numbers.
    pub fn encode<W: Write>(&self, buf: &mut W, timestamp: Timestamp) -> Result<(), EncodeError> {
        // validate first so nothing is written for an invalid position
        if !(-90.0..=90.0).contains(&self.latitude) {
            return Err(EncodeError::InvalidLatitude(self.latitude));
        }
        if !(-180.0..=180.0).contains(&self.longitude) {
            return Err(EncodeError::InvalidLongitude(self.longitude));
        }

        let symbol = self.aircraft_type.symbol_code().as_bytes();
        let altitude_feet = (self.altitude * FEET_PER_METER) as i32;

        write!(buf, "{}>APRS,TCPIP*: /{}h", self.call, timestamp)?;
        encode_latitude(buf, self.latitude)?;
        buf.write_all(&symbol[..1])?;
        encode_longitude(buf, self.longitude)?;
        buf.write_all(&symbol[1..])?;
        writeln!(
            buf,
            "{:03}/{:03}/A={:06}",
            self.course as i32, self.speed as i32, altitude_feet
        )?;

        Ok(())
    }
}

/// Formats a position report at the current UTC time.
pub fn format_position_report(
    call: &str,
    latitude: f64,
    longitude: f64,
    altitude: f64,
    course: f64,
    speed: f64,
    aircraft_type: AircraftType,
) -> Result<String, EncodeError> {
    let report = PositionReport {
        call,
        latitude,
        longitude,
        altitude,
        course,
        speed,
        aircraft_type,
    };

    format_position_report_at(&report, Timestamp::now())
}

pub fn format_position_report_at(
    report: &PositionReport,
    timestamp: Timestamp,
) -> Result<String, EncodeError> {
    let mut buf = vec![];
    report.encode(&mut buf, timestamp)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(aircraft_type: AircraftType) -> PositionReport<'static> {
        PositionReport {
            call: "ENR12345",
            latitude: 51.1886666667,
            longitude: -1.034,
            altitude: 185.0136,
            course: 86.0,
            speed: 7.0,
            aircraft_type,
        }
    }

    #[test]
    fn login_string() {
        assert_eq!(
            format_login_string("ENR12345", -48.0, 7.85123456, 99, "Enroute", "1.99"),
            "user ENR12345 pass 379 vers Enroute 1.99 filter r/-48.0000/7.8512/99 t/o\n"
        );
    }

    #[test]
    fn encode_login_matches_format() {
        let mut buf = vec![];
        encode_login(&mut buf, "ENR12345", -48.0, 7.85123456, 99, "Enroute", "1.99").unwrap();
        assert_eq!(
            buf,
            format_login_string("ENR12345", -48.0, 7.85123456, 99, "Enroute", "1.99").as_bytes()
        );
    }

    #[test]
    fn filter() {
        let mut buf = vec![];
        encode_filter(&mut buf, 48.0, -7.85126, 50).unwrap();
        assert_eq!(buf, b"filter r/48.0000/-7.8513/50 t/o");
    }

    #[test]
    fn filter_command() {
        assert_eq!(
            format_filter_command(-48.0, 7.85123456, 99),
            "# filter r/-48.0000/7.8512/99 t/o\n"
        );
    }

    #[test]
    fn position_report_unknown_aircraft() {
        let line = format_position_report_at(
            &report(AircraftType::Unknown),
            Timestamp::new(7, 45, 48),
        )
        .unwrap();
        assert_eq!(
            line,
            "ENR12345>APRS,TCPIP*: /074548h5111.32N/00102.04Wz086/007/A=000607\n"
        );
    }

    #[test]
    fn position_report_symbols() {
        let timestamp = Timestamp::new(7, 45, 48);
        let line = |aircraft_type| {
            format_position_report_at(&report(aircraft_type), timestamp).unwrap()
        };

        assert!(line(AircraftType::Glider).contains("5111.32N/00102.04W'086"));
        assert!(line(AircraftType::Jet).contains("5111.32N/00102.04W^086"));
        assert!(line(AircraftType::StaticObstacle).contains("5111.32N\\00102.04Wn086"));
        assert!(line(AircraftType::TowPlane).contains("5111.32N\\00102.04W^086"));
    }

    #[test]
    fn position_report_now() {
        let line = format_position_report(
            "ENR12345",
            51.1886666667,
            -1.034,
            185.0136,
            86.0,
            7.0,
            AircraftType::Glider,
        )
        .unwrap();

        assert!(line.starts_with("ENR12345>APRS,TCPIP*: /"));
        assert!(line.ends_with("h5111.32N/00102.04W'086/007/A=000607\n"));
        assert_eq!(line.len(), 66);
    }

    #[test]
    fn position_report_truncates() {
        let mut truncated = report(AircraftType::Glider);
        truncated.course = 359.9;
        truncated.speed = 12.7;
        truncated.altitude = f64::NAN;

        let line = format_position_report_at(&truncated, Timestamp::new(12, 0, 0)).unwrap();
        assert!(line.ends_with("'359/012/A=000000\n"), "{line}");
    }

    #[test]
    fn position_report_invalid_position() {
        let mut invalid = report(AircraftType::Glider);
        invalid.latitude = f64::NAN;
        assert!(matches!(
            format_position_report_at(&invalid, Timestamp::new(0, 0, 0)),
            Err(EncodeError::InvalidLatitude(_))
        ));

        let mut invalid = report(AircraftType::Glider);
        invalid.longitude = 200.0;
        let mut buf = vec![];
        assert!(matches!(
            invalid.encode(&mut buf, Timestamp::new(0, 0, 0)),
            Err(EncodeError::InvalidLongitude(_))
        ));
        assert!(buf.is_empty());
    }
}
