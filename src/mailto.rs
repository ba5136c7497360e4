//! `mailto` URI construction.
//!
//! Only the punctuation in [`is_reserved_uni_char`] is percent-encoded;
//! everything else, including non-ASCII characters, is copied as-is. There
//! is no support for header fields or query parameters.

use crate::chars::is_reserved_uni_char;
use crate::constants::MAILTO_SCHEME;

const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

/// Percent-encodes the reserved punctuation in `s`.
///
/// # Examples
///
/// ```
/// use addr_spec::mailto::encode;
///
/// assert_eq!(encode("a+b@b.com"), "a%2Bb@b.com");
/// assert_eq!(encode("a@b.com"), "a@b.com");
/// ```
#[must_use]
pub fn encode(s: &str) -> String {
    let mut encoded = String::with_capacity(s.len());

    for c in s.chars() {
        // Reserved characters are all single-byte ASCII.
        match u8::try_from(c) {
            Ok(byte) if is_reserved_uni_char(c) => {
                encoded.push('%');
                encoded.push(char::from(HEX_DIGITS[usize::from(byte >> 4)]));
                encoded.push(char::from(HEX_DIGITS[usize::from(byte & 0x0F)]));
            }
            _ => encoded.push(c),
        }
    }

    encoded
}

/// Builds `mailto:<encoded email>`.
///
/// # Examples
///
/// ```
/// use addr_spec::mailto::mailto_uri;
///
/// assert_eq!(mailto_uri("john.doe@example.com"), "mailto:john.doe@example.com");
/// ```
#[must_use]
pub fn mailto_uri(email: &str) -> String {
    format!("{MAILTO_SCHEME}:{}", encode(email))
}
