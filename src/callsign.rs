/// Computes the APRS-IS login passcode of a callsign.
///
/// OGN servers use the sum of the first six bytes of the callsign, as given,
/// modulo 10000. This is not the hash used by the wider APRS-IS network.
pub fn passcode(call: &str) -> u32 {
    let sum: u32 = call.bytes().take(6).map(u32::from).sum();

    sum % 10000
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn passcode_uses_first_six_bytes() {
        assert_eq!(passcode("ENR12345"), 379);
        assert_eq!(passcode("ENR123"), 379);
    }

    #[test]
    fn short_callsign() {
        assert_eq!(passcode("A"), 65);
        assert_eq!(passcode(""), 0);
    }
}
