//! Character classes of the addr-spec grammar.
//!
//! # Grammar Reference
//!
//! ```abnf
//! atext          = ALPHA / DIGIT / "!" / "#" / "$" / "%" / "&" / "'" / "*"
//!                  / "+" / "-" / "/" / "=" / "?" / "^" / "_" / "`" / "{"
//!                  / "|" / "}" / "~" / UTF8-non-ascii
//! dot-atom-text  = 1*atext *("." 1*atext)
//! qtext          = %d33 / %d35-91 / %d93-126
//! quoted-pair    = "\" VCHAR
//! dtext          = %d33-90 / %d94-126 / UTF8-non-ascii
//! ```
//!
//! All predicates work on decoded `char`s, so a multi-byte character is
//! tested once.

use crate::constants::{BACKSLASH, DOT};

/// Returns true for any character outside ASCII.
#[must_use]
pub const fn is_utf8_non_ascii_char(c: char) -> bool {
    c > '\x7F'
}

/// Returns true for printable ASCII excluding space (VCHAR).
#[must_use]
pub const fn is_visible_char(c: char) -> bool {
    matches!(c, '\x21'..='\x7E')
}

/// Returns true for space and horizontal tab (WSP).
#[must_use]
pub const fn is_whitespace_char(c: char) -> bool {
    matches!(c, ' ' | '\t')
}

/// Returns true for characters allowed unescaped inside a quoted string.
#[must_use]
pub const fn is_quoted_text_char(c: char) -> bool {
    matches!(c, '\x21' | '\x23'..='\x5B' | '\x5D'..='\x7E')
}

/// Returns true for characters allowed inside a bracketed domain literal.
#[must_use]
pub const fn is_domain_literal_char(c: char) -> bool {
    matches!(c, '\x21'..='\x5A' | '\x5E'..='\x7E') || is_utf8_non_ascii_char(c)
}

/// Returns true for characters allowed in an unquoted atom.
#[must_use]
pub const fn is_atom_char(c: char) -> bool {
    let special = matches!(
        c,
        '(' | ')' | '<' | '>' | '[' | ']' | ':' | ';' | '@' | '\\' | ',' | '.' | '"'
    );
    (is_visible_char(c) && !special) || is_utf8_non_ascii_char(c)
}

/// Returns true for the punctuation that is percent-encoded in a `mailto` URI.
#[must_use]
pub const fn is_reserved_uni_char(c: char) -> bool {
    matches!(
        c,
        '!' | '#'
            | '$'
            | '%'
            | '&'
            | '\''
            | '('
            | ')'
            | '*'
            | '+'
            | ','
            | '/'
            | ':'
            | ';'
            | '='
            | '?'
            | '['
            | ']'
    )
}

/// Returns true if `s` is a non-empty run of atom characters.
#[must_use]
pub fn is_atom_text(s: &str) -> bool {
    !s.is_empty() && s.chars().all(is_atom_char)
}

/// Returns true if `s` is one or more atoms joined by single dots.
///
/// Leading, trailing, and doubled dots produce an empty atom and fail.
#[must_use]
pub fn is_dot_atom_text(s: &str) -> bool {
    s.split(DOT).all(is_atom_text)
}

/// Returns true if `s` is valid content for a quoted string (without the
/// surrounding quotes).
///
/// A backslash must be followed by a visible character; the pair is taken
/// as one quoted-pair. Every other character must be whitespace or qtext.
#[must_use]
pub fn is_quoted_content(s: &str) -> bool {
    let mut chars = s.chars();

    while let Some(c) = chars.next() {
        if c == BACKSLASH {
            match chars.next() {
                Some(escaped) if is_visible_char(escaped) => {}
                _ => return false,
            }
        } else if !(is_whitespace_char(c) || is_quoted_text_char(c)) {
            return false;
        }
    }

    true
}

/// Returns true if `s` is a DNS-style label: ASCII letters, digits, and
/// interior hyphens, starting and ending with a letter or digit.
#[must_use]
pub fn is_domain_label(s: &str) -> bool {
    let bytes = s.as_bytes();
    match (bytes.first(), bytes.last()) {
        (Some(first), Some(last)) => {
            first.is_ascii_alphanumeric()
                && last.is_ascii_alphanumeric()
                && bytes.iter().all(|b| b.is_ascii_alphanumeric() || *b == b'-')
        }
        _ => false,
    }
}
