use crate::position::parse_report;
use crate::{MessageType, OgnMessage};

// "FLRDDE626>APRS,qAS,EGHL" is the shortest reasonable header, but a few
// characters are enough to reject the obviously broken lines.
const MIN_HEADER_LEN: usize = 5;
const MIN_BODY_LEN: usize = 5;

/// Classifies and decodes `message.sentence` into `message`.
///
/// The message is expected to be freshly created or [reset](OgnMessage::reset).
/// Lines that cannot be decoded leave the message type at
/// [`MessageType::Unknown`], sub-fields that cannot be decoded keep their
/// defaults. This function never fails.
pub fn parse_aprsis_message(message: &mut OgnMessage) {
    let line = message.sentence.trim_end_matches(['\r', '\n']);

    // comments may contain colons, so they are detected first
    if line.starts_with('#') {
        message.message_type = MessageType::Comment;
        return;
    }

    let Some(header_delimiter) = line.find(':') else {
        message.message_type = MessageType::Unknown;
        return;
    };
    let (header, rest) = line.split_at(header_delimiter);
    let body = &rest[1..];

    if header.len() < MIN_HEADER_LEN || body.len() < MIN_BODY_LEN {
        message.message_type = MessageType::Unknown;
        return;
    }

    match body.as_bytes()[0] {
        b'/' => parse_report(message, header, body),
        // receiver status, the content is not decoded
        b'>' => message.message_type = MessageType::Status,
        _ => message.message_type = MessageType::Unknown,
    }
}
