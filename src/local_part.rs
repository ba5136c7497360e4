//! Local-part validation.
//!
//! # Grammar Reference
//!
//! ```abnf
//! local-part    = dot-atom-text / quoted-string
//! quoted-string = DQUOTE *([WSP] (qtext / quoted-pair)) [WSP] DQUOTE
//! ```
//!
//! Maximum local-part length: 64 UTF-16 code units, counted with any
//! surrounding quotes. ASCII characters take one unit, other characters one
//! or two.

use crate::chars::{is_dot_atom_text, is_quoted_content};
use crate::constants::{DOUBLE_QUOTE, LOCAL_PART_MAX_LENGTH};
use crate::error::EmailError;

/// Validates a local part as either a quoted string or a dot-atom.
///
/// Checks run in a fixed order: emptiness, length, then content.
///
/// # Errors
///
/// - [`EmailError::LocalPartEmpty`] if the part is empty or is `""`
/// - [`EmailError::LocalPartTooLong`] if it exceeds [`LOCAL_PART_MAX_LENGTH`]
/// - [`EmailError::InvalidCharacter`] if the content breaks the grammar
///
/// # Examples
///
/// ```
/// use addr_spec::{parse_local_part, EmailError};
///
/// assert!(parse_local_part("john.doe").is_ok());
/// assert!(parse_local_part("\"john..doe\"").is_ok());
/// assert_eq!(parse_local_part("john..doe"), Err(EmailError::InvalidCharacter));
/// ```
pub fn parse_local_part(part: &str) -> Result<(), EmailError> {
    if part.is_empty() {
        return Err(EmailError::LocalPartEmpty);
    }

    if part.encode_utf16().count() > LOCAL_PART_MAX_LENGTH {
        return Err(EmailError::LocalPartTooLong);
    }

    if part.starts_with(DOUBLE_QUOTE) && part.ends_with(DOUBLE_QUOTE) {
        // A lone `"` counts as both opening and closing quote.
        if part.len() <= 2 {
            return Err(EmailError::LocalPartEmpty);
        }
        parse_quoted_local_part(&part[1..part.len() - 1])
    } else {
        parse_unquoted_local_part(part)
    }
}

fn parse_quoted_local_part(inner: &str) -> Result<(), EmailError> {
    if is_quoted_content(inner) {
        Ok(())
    } else {
        Err(EmailError::InvalidCharacter)
    }
}

fn parse_unquoted_local_part(part: &str) -> Result<(), EmailError> {
    if is_dot_atom_text(part) {
        Ok(())
    } else {
        Err(EmailError::InvalidCharacter)
    }
}
