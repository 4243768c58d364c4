//! The percent-encoding profile used by the platform.
//!
//! This is RFC 3986 encoding with two platform-specific substitutions: a space becomes `~` and
//! a `+` becomes `%7E`, which is the escape for `~`.  Signatures computed by the platform depend
//! on both substitutions.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Everything outside the RFC 3986 unreserved set `A-Z a-z 0-9 - _ . ~`.
const UNRESERVED_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Percent-encode a parameter key or value.
///
/// ```
/// use wyx_sign::encode;
///
/// assert_eq!(encode("a b+c/d"), "a~b%7Ec%2Fd");
/// ```
pub fn encode(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut buf = [0u8; 4];
    for c in input.chars() {
        match c {
            ' ' => out.push('~'),
            '+' => out.push_str("%7E"),
            _ => {
                let c = c.encode_utf8(&mut buf);
                out.extend(utf8_percent_encode(c, UNRESERVED_ENCODE_SET))
            }
        }
    }
    out
}
