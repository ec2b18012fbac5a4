//! Weather data of a position report with the weather station symbol `/_`:
//!
//! ```text
//! /222245h4803.92N/00800.93E_292/005g010t030h01b65526
//!                           ^ wind direction / wind speed, then optional
//!                             gust, temperature, humidity and pressure
//! ```

use crate::number::parse_u32;
use crate::utils::{find_from, substr, tail};
use crate::OgnMessage;

/// Offset of the `_` symbol code that separates the position from the weather data
const SEPARATOR: usize = 26;

const WIND_DIRECTION_LEN: usize = 3;
const WIND_SPEED_LEN: usize = 3;
const GUST_LEN: usize = 3;
const TEMPERATURE_LEN: usize = 3;
const HUMIDITY_LEN: usize = 2;

/// Returns the `len` bytes following the first `marker` at or after the separator.
fn marked_value(position: &str, marker: char, len: usize) -> Option<&str> {
    find_from(position, marker, SEPARATOR).map(|index| substr(position, index + 1, len))
}

pub(crate) fn parse_weather(message: &mut OgnMessage, position: &str) {
    if let Ok(direction) = parse_u32(substr(position, SEPARATOR + 1, WIND_DIRECTION_LEN)) {
        message.wind_direction = direction;
    }

    let value = |marker, len| marked_value(position, marker, len).map(parse_u32);

    if let Some(Ok(speed)) = value('/', WIND_SPEED_LEN) {
        message.wind_speed = speed;
    }
    if let Some(Ok(gust)) = value('g', GUST_LEN) {
        message.wind_gust_speed = gust;
    }
    if let Some(Ok(temperature)) = value('t', TEMPERATURE_LEN) {
        message.temperature = temperature;
    }
    if let Some(Ok(humidity)) = value('h', HUMIDITY_LEN) {
        message.humidity = humidity;
    }

    // tenths of hectopascal, up to the end of the position
    if let Some(index) = find_from(position, 'b', SEPARATOR) {
        if let Ok(tenths) = parse_u32(tail(position, index + 1)) {
            message.pressure = f64::from(tenths) / 10.0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(position: &str) -> OgnMessage {
        let mut message = OgnMessage::new(position);
        parse_weather(&mut message, position);
        message
    }

    #[test]
    fn full_weather_report() {
        let message = parse("/222245h4803.92N/00800.93E_292/005g010t030h01b65526");

        assert_eq!(message.wind_direction, 292);
        assert_eq!(message.wind_speed, 5);
        assert_eq!(message.wind_gust_speed, 10);
        assert_eq!(message.temperature, 30);
        assert_eq!(message.humidity, 1);
        assert_relative_eq!(message.pressure, 6552.6, epsilon = 1e-9);
    }

    #[test]
    fn wind_only() {
        let message = parse("/222245h4803.92N/00800.93E_180/012");

        assert_eq!(message.wind_direction, 180);
        assert_eq!(message.wind_speed, 12);
        assert_eq!(message.wind_gust_speed, 0);
        assert_eq!(message.temperature, 0);
        assert_eq!(message.humidity, 0);
        assert_relative_eq!(message.pressure, 0.0);
    }

    #[test]
    fn missing_values_keep_defaults() {
        let message = parse("/222245h4803.92N/00800.93E_.../...g...t...h..b.....");

        assert_eq!(message.wind_direction, 0);
        assert_eq!(message.wind_speed, 0);
        assert_eq!(message.wind_gust_speed, 0);
        assert_eq!(message.temperature, 0);
        assert_eq!(message.humidity, 0);
        assert_relative_eq!(message.pressure, 0.0);
    }

    #[test]
    fn negative_temperature_is_not_decoded() {
        let message = parse("/222245h4803.92N/00800.93E_292/005g010t-05h50");

        assert_eq!(message.temperature, 0);
        assert_eq!(message.humidity, 50);
    }

    #[test]
    fn markers_before_separator_are_ignored() {
        // the `h` of the timestamp and the `/` of the symbol table
        let message = parse("/222245h4803.92N/00800.93E_292");

        assert_eq!(message.wind_direction, 292);
        assert_eq!(message.wind_speed, 0);
        assert_eq!(message.humidity, 0);
    }
}
