//! [`JsonDuration`]: a signed-nanosecond duration that round-trips through
//! JSON the way Go's `time.Duration` does — as a quoted string like
//! `"1h30m"`, not a bare number of nanoseconds, and able to represent
//! negative spans (unlike [`std::time::Duration`]).

use std::fmt;

use super::{Decodable, Decoder};
use crate::{error::DecodeError, token::TokenKind};

/// A duration measured in nanoseconds, positive or negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Hash)]
pub struct JsonDuration(pub i64);

impl JsonDuration {
    #[must_use]
    pub fn from_nanos(n: i64) -> Self {
        Self(n)
    }

    #[must_use]
    pub fn as_nanos(self) -> i64 {
        self.0
    }
}

const NANOS_PER_UNIT: &[(&str, i64)] = &[
    ("ns", 1),
    ("us", 1_000),
    ("\u{b5}s", 1_000), // µs, micro sign
    ("ms", 1_000_000),
    ("s", 1_000_000_000),
    ("m", 60 * 1_000_000_000),
    ("h", 3600 * 1_000_000_000),
];

/// Parse a Go-style duration string (`"1h30m"`, `"-500ms"`, `"0"`) into
/// nanoseconds.
fn parse_duration(s: &str) -> Result<i64, String> {
    if s == "0" {
        return Ok(0);
    }

    let (neg, mut rest) = match s.strip_prefix('-') {
        Some(r) => (true, r),
        None => (false, s.strip_prefix('+').unwrap_or(s)),
    };

    if rest.is_empty() {
        return Err("empty duration".to_string());
    }

    let mut total: i64 = 0;
    while !rest.is_empty() {
        let digits_len = rest
            .find(|c: char| !(c.is_ascii_digit() || c == '.'))
            .ok_or_else(|| format!("missing unit in duration {s:?}"))?;
        if digits_len == 0 {
            return Err(format!("missing value before unit in duration {s:?}"));
        }
        let (number, after_number) = rest.split_at(digits_len);
        let value: f64 = number
            .parse()
            .map_err(|_| format!("invalid number {number:?} in duration {s:?}"))?;

        let (unit, unit_len) = NANOS_PER_UNIT
            .iter()
            .filter(|(name, _)| after_number.starts_with(name))
            .max_by_key(|(name, _)| name.len())
            .map(|(name, scale)| (*scale, name.len()))
            .ok_or_else(|| format!("unknown unit in duration {s:?}"))?;

        #[allow(clippy::cast_possible_truncation)]
        let contribution = (value * unit as f64) as i64;
        total = total
            .checked_add(contribution)
            .ok_or_else(|| format!("duration {s:?} overflows i64 nanoseconds"))?;
        rest = &after_number[unit_len..];
    }

    Ok(if neg { -total } else { total })
}

/// Format nanoseconds the way Go's `time.Duration::String` does: the
/// smallest unit that keeps the output compact, largest-first.
fn format_duration(nanos: i64) -> String {
    if nanos == 0 {
        return "0s".to_string();
    }

    let neg = nanos < 0;
    let mut n = nanos.unsigned_abs();
    let mut out = String::new();

    if n < 1_000_000_000 {
        let (unit, scale) = if n < 1_000 {
            ("ns", 1)
        } else if n < 1_000_000 {
            ("\u{b5}s", 1_000)
        } else {
            ("ms", 1_000_000)
        };
        let whole = n / scale;
        let frac = n % scale;
        if frac == 0 {
            out.push_str(&whole.to_string());
        } else {
            out.push_str(&format!("{whole}.{frac}").trim_end_matches('0').to_string());
        }
        out.push_str(unit);
        return finish(neg, out);
    }

    let hours = n / 3_600_000_000_000;
    n %= 3_600_000_000_000;
    let minutes = n / 60_000_000_000;
    n %= 60_000_000_000;
    let secs = n / 1_000_000_000;
    let frac_nanos = n % 1_000_000_000;

    if hours > 0 {
        out.push_str(&format!("{hours}h"));
    }
    if hours > 0 || minutes > 0 {
        out.push_str(&format!("{minutes}m"));
    }
    if frac_nanos == 0 {
        out.push_str(&format!("{secs}s"));
    } else {
        let frac_str = format!("{frac_nanos:09}");
        let frac_str = frac_str.trim_end_matches('0');
        out.push_str(&format!("{secs}.{frac_str}s"));
    }

    finish(neg, out)
}

fn finish(neg: bool, body: String) -> String {
    if neg {
        format!("-{body}")
    } else {
        body
    }
}

impl fmt::Display for JsonDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_duration(self.0))
    }
}

impl Decodable for JsonDuration {
    fn build_decoder() -> Decoder<Self> {
        Decoder::new(|dest, tokens| {
            let token = tokens.next()?;
            match token.kind {
                TokenKind::Literal => {
                    let text = core::str::from_utf8(token.literal).map_err(|e| {
                        DecodeError::LiteralParseError {
                            token: String::from_utf8_lossy(token.literal).into_owned(),
                            target_type: Self::type_name(),
                            cause: e.to_string(),
                        }
                    })?;
                    let nanos: i64 =
                        text.parse()
                            .map_err(|e: core::num::ParseIntError| DecodeError::LiteralParseError {
                                token: text.to_string(),
                                target_type: Self::type_name(),
                                cause: e.to_string(),
                            })?;
                    dest.0 = nanos;
                    Ok(())
                }
                TokenKind::QuotedLiteral => {
                    let s = token
                        .unquote_str()
                        .map_err(|e| DecodeError::LiteralParseError {
                            token: String::from_utf8_lossy(token.literal).into_owned(),
                            target_type: Self::type_name(),
                            cause: e.to_string(),
                        })?;
                    let nanos = parse_duration(s).map_err(|cause| DecodeError::LiteralParseError {
                        token: s.to_string(),
                        target_type: Self::type_name(),
                        cause,
                    })?;
                    dest.0 = nanos;
                    Ok(())
                }
                actual => Err(crate::error::unexpected(
                    "literal, quoted_literal",
                    actual,
                    Self::type_name(),
                )),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_compound_duration() {
        assert_eq!(parse_duration("1h30m").unwrap(), 90 * 60 * 1_000_000_000);
    }

    #[test]
    fn parses_negative_duration() {
        assert_eq!(parse_duration("-500ms").unwrap(), -500_000_000);
    }

    #[test]
    fn parses_zero() {
        assert_eq!(parse_duration("0").unwrap(), 0);
    }

    #[test]
    fn rejects_missing_unit() {
        assert!(parse_duration("150").is_err());
    }

    #[test]
    fn formats_round_trip_for_compound_values() {
        let nanos = 90 * 60 * 1_000_000_000;
        let formatted = format_duration(nanos);
        assert_eq!(parse_duration(&formatted).unwrap(), nanos);
    }

    #[test]
    fn decodes_from_quoted_string() {
        let mut d = JsonDuration::build_decoder();
        let mut dest = JsonDuration::default();
        let mut tokens = crate::tokenizer::Tokenizer::new(br#""1h30m""#);
        d.decode(&mut dest, &mut tokens).unwrap();
        assert_eq!(dest.as_nanos(), 90 * 60 * 1_000_000_000);
    }

    #[test]
    fn decodes_bare_literal_as_nanoseconds() {
        let mut d = JsonDuration::build_decoder();
        let mut dest = JsonDuration::default();
        let mut tokens = crate::tokenizer::Tokenizer::new(b"42");
        d.decode(&mut dest, &mut tokens).unwrap();
        assert_eq!(dest.as_nanos(), 42);
    }
}
