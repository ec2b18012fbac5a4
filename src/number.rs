// functions for parsing numbers out of protocol fields
//
// Only the leading numeric run of the input is considered, trailing text is
// ignored: "030h01" parses as 30. `str::parse` is locale independent, so a
// `.` is always the decimal separator.

use std::str::FromStr;

use crate::DecodeError;

fn leading_integer(s: &str, signed: bool) -> Option<&str> {
    let b = s.as_bytes();
    let sign = usize::from(signed && b.first() == Some(&b'-'));
    let digits = b[sign..].iter().take_while(|c| c.is_ascii_digit()).count();

    if digits == 0 {
        return None;
    }

    Some(&s[..sign + digits])
}

fn leading_decimal(s: &str) -> Option<&str> {
    let b = s.as_bytes();
    let int_digits = b.iter().take_while(|c| c.is_ascii_digit()).count();

    let mut end = int_digits;
    let mut frac_digits = 0;
    if b.get(end) == Some(&b'.') {
        frac_digits = b[end + 1..]
            .iter()
            .take_while(|c| c.is_ascii_digit())
            .count();
        if frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }

    if int_digits == 0 && frac_digits == 0 {
        return None;
    }

    Some(&s[..end])
}

fn parse_run<T: FromStr>(s: &str, run: Option<&str>) -> Result<T, DecodeError> {
    run.and_then(|run| run.parse().ok())
        .ok_or_else(|| DecodeError::InvalidNumber(s.to_owned()))
}

pub(crate) fn parse_u32(s: &str) -> Result<u32, DecodeError> {
    parse_run(s, leading_integer(s, false))
}

pub(crate) fn parse_i32(s: &str) -> Result<i32, DecodeError> {
    parse_run(s, leading_integer(s, true))
}

/// Parses an unsigned decimal number such as `11.32` or `05`.
pub(crate) fn parse_f64(s: &str) -> Result<f64, DecodeError> {
    parse_run(s, leading_decimal(s))
}
