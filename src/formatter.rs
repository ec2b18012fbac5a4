//! Re-rendering of decoded messages for downstream tools.

use chrono::{DateTime, Utc};

use crate::{MessageType, OgnMessage};

const FEET_PER_METER: f64 = 3.28084;
const FPM_PER_METER_PER_SECOND: f64 = 196.85;

pub trait OutputFormatter {
    /// Returns the line for `message`, or `None` if the format cannot
    /// represent it.
    fn format(&self, message: &OgnMessage) -> Option<String>;
}

/// Passes the raw APRS-IS line through.
#[derive(Debug, Default, Clone, Copy)]
pub struct OgnFormatter;

impl OutputFormatter for OgnFormatter {
    fn format(&self, message: &OgnMessage) -> Option<String> {
        Some(message.sentence.trim_end_matches(['\r', '\n']).to_owned())
    }
}

/// SBS-1 BaseStation `MSG,8` lines as produced by dump1090, understood by
/// tar1090, Virtual Radar Server and friends.
///
/// Only traffic reports with a position are formatted.
#[derive(Debug, Default, Clone, Copy)]
pub struct Sbs1Formatter;

impl Sbs1Formatter {
    /// Formats `message` with `now` as the generated and logged time.
    pub fn format_at(&self, message: &OgnMessage, now: DateTime<Utc>) -> Option<String> {
        if message.message_type != MessageType::TrafficReport || !message.has_position() {
            return None;
        }

        let hex_ident = format!("{:0>6}", message.address.to_uppercase());
        let callsign = if message.flight_number.is_empty() {
            hex_ident.as_str()
        } else {
            message.flight_number
        };
        let altitude = if message.altitude.is_nan() {
            String::new()
        } else {
            ((message.altitude * FEET_PER_METER) as i32).to_string()
        };
        let vertical_rate = (message.vertical_speed * FPM_PER_METER_PER_SECOND) as i32;

        let date = now.format("%Y/%m/%d");
        let time = now.format("%H:%M:%S%.3f");

        Some(format!(
            "MSG,8,111,11111,{hex_ident},111111,{date},{time},{date},{time},{callsign},{altitude},{},{},{:.6},{:.6},{vertical_rate},,,,,",
            message.speed, message.course, message.latitude, message.longitude,
        ))
    }
}

impl OutputFormatter for Sbs1Formatter {
    fn format(&self, message: &OgnMessage) -> Option<String> {
        self.format_at(message, Utc::now())
    }
}
