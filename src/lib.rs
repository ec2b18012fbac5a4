//! [OGN flavoured APRS](http://wiki.glidernet.org/wiki:ogn-flavoured-aprs)
//! decoding and encoding.
//!
//! ```rust
//! use ogn_aprs::{AddressType, MessageType};
//!
//! let message = ogn_aprs::parse(
//!     r"FLRDDE626>APRS,qAS,EGHL:/074548h5111.32N/00102.04W'086/007/A=000607 id0ADDE626 -019fpm +0.0rot 5.5dB 3e -4.3kHz",
//! );
//!
//! assert_eq!(message.message_type, MessageType::TrafficReport);
//! assert_eq!(message.source_id, "FLRDDE626");
//! assert_eq!(message.address_type, AddressType::Flarm);
//! assert_eq!(message.address, "DDE626");
//! ```

#[cfg(test)]
#[macro_use]
extern crate approx;

mod aircraft_id;
mod callsign;
mod encode;
mod error;
mod extensions;
mod formatter;
mod lonlat;
mod message;
mod number;
mod packet;
mod position;
mod symbol;
mod timestamp;
mod utils;
mod weather;

pub use aircraft_id::{AddressType, AircraftId};
pub use callsign::passcode;
pub use encode::{
    encode_filter, encode_login, format_filter_command, format_login_string,
    format_position_report, format_position_report_at, PositionReport,
};
pub use error::{DecodeError, EncodeError};
pub use formatter::{OgnFormatter, OutputFormatter, Sbs1Formatter};
pub use lonlat::{
    decode_latitude, decode_longitude, encode_latitude, encode_longitude, format_latitude,
    format_longitude, parse_latitude, parse_longitude,
};
pub use message::{MessageType, OgnMessage};
pub use packet::parse_aprsis_message;
pub use symbol::{AircraftType, Symbol};
pub use timestamp::Timestamp;

/// Decodes a single line of the OGN APRS-IS feed.
pub fn parse(line: &str) -> OgnMessage {
    OgnMessage::parse(line)
}
