//! NMEA style `DDMM.mm` coordinates, as used in uncompressed APRS positions.

use std::io::Write;

use crate::number::parse_f64;
use crate::utils::{substr, tail};
use crate::{DecodeError, EncodeError};

const LATITUDE_DEGREE_DIGITS: usize = 2;
const LONGITUDE_DEGREE_DIGITS: usize = 3;

// "5111.32" and "00102.04"
const MIN_LATITUDE_LEN: usize = 7;
const MIN_LONGITUDE_LEN: usize = 8;

/// Decodes a `DDMM.mm` latitude into signed decimal degrees.
///
/// `enhancement` is the latitude digit of an optional `!Wxy` precision
/// enhancement, adding thousandths of a minute. Any malformed input yields NaN.
pub fn decode_latitude(text: &str, direction: char, enhancement: Option<char>) -> f64 {
    parse_latitude(text, direction, enhancement).unwrap_or(f64::NAN)
}

/// Decodes a `DDDMM.mm` longitude into signed decimal degrees.
///
/// Works like [`decode_latitude`], with western longitudes being negative.
pub fn decode_longitude(text: &str, direction: char, enhancement: Option<char>) -> f64 {
    parse_longitude(text, direction, enhancement).unwrap_or(f64::NAN)
}

pub fn parse_latitude(
    text: &str,
    direction: char,
    enhancement: Option<char>,
) -> Result<f64, DecodeError> {
    let value = decode(text, LATITUDE_DEGREE_DIGITS, MIN_LATITUDE_LEN, enhancement)
        .ok_or_else(|| DecodeError::InvalidLatitude(text.to_owned()))?;

    Ok(if direction == 'S' { -value } else { value })
}

pub fn parse_longitude(
    text: &str,
    direction: char,
    enhancement: Option<char>,
) -> Result<f64, DecodeError> {
    let value = decode(text, LONGITUDE_DEGREE_DIGITS, MIN_LONGITUDE_LEN, enhancement)
        .ok_or_else(|| DecodeError::InvalidLongitude(text.to_owned()))?;

    Ok(if direction == 'W' { -value } else { value })
}

fn decode(
    text: &str,
    degree_digits: usize,
    min_len: usize,
    enhancement: Option<char>,
) -> Option<f64> {
    if text.len() < min_len {
        return None;
    }

    let degrees = parse_f64(substr(text, 0, degree_digits)).ok()?;
    let minutes = parse_f64(tail(text, degree_digits)).ok()?;

    let mut value = degrees + minutes / 60.0;
    if let Some(digit) = enhancement.and_then(|c| c.to_digit(10)) {
        value += f64::from(digit) * 0.001 / 60.0;
    }

    Some(value)
}

/// Splits an absolute coordinate into degrees and hundredths of a minute.
fn degrees_hundredths(value: f64) -> (u32, u32) {
    let mut deg = value as u32;
    let mut hundredths = ((value - f64::from(deg)) * 6000.0).round() as u32;

    if hundredths >= 6000 {
        // overflow from the rounding, propagate it up
        hundredths -= 6000;
        deg += 1;
    }

    (deg, hundredths)
}

fn encode<W: Write>(
    buf: &mut W,
    value: f64,
    degree_digits: usize,
    positive: char,
    negative: char,
) -> Result<(), EncodeError> {
    let dir = if value >= 0.0 { positive } else { negative };
    let (deg, hundredths) = degrees_hundredths(value.abs());

    write!(
        buf,
        "{:0width$}{:02}.{:02}{}",
        deg,
        hundredths / 100,
        hundredths % 100,
        dir,
        width = degree_digits
    )?;

    Ok(())
}

/// Writes `latitude` as `DDMM.mmN` or `DDMM.mmS`.
pub fn encode_latitude<W: Write>(buf: &mut W, latitude: f64) -> Result<(), EncodeError> {
    if !(-90.0..=90.0).contains(&latitude) {
        return Err(EncodeError::InvalidLatitude(latitude));
    }

    encode(buf, latitude, LATITUDE_DEGREE_DIGITS, 'N', 'S')
}

/// Writes `longitude` as `DDDMM.mmE` or `DDDMM.mmW`.
pub fn encode_longitude<W: Write>(buf: &mut W, longitude: f64) -> Result<(), EncodeError> {
    if !(-180.0..=180.0).contains(&longitude) {
        return Err(EncodeError::InvalidLongitude(longitude));
    }

    encode(buf, longitude, LONGITUDE_DEGREE_DIGITS, 'E', 'W')
}

pub fn format_latitude(latitude: f64) -> Result<String, EncodeError> {
    let mut buf = vec![];
    encode_latitude(&mut buf, latitude)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

pub fn format_longitude(longitude: f64) -> Result<String, EncodeError> {
    let mut buf = vec![];
    encode_longitude(&mut buf, longitude)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}
