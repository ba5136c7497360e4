//! Domain validation.
//!
//! # Grammar Reference
//!
//! ```abnf
//! domain         = label *( "." label ) / domain-literal
//! label          = ( ALPHA / DIGIT ) [ *( ALPHA / DIGIT / "-" ) ( ALPHA / DIGIT ) ]
//! domain-literal = "[" *dtext "]"
//! ```
//!
//! Maximum domain length: 255 UTF-16 code units. Maximum label length: 63
//! characters; labels are ASCII.
//!
//! Domain literals are checked for their alphabet only. An `IPv6:` prefix
//! or dotted quad is accepted as text; its numeric structure is not checked.

use crate::chars::{is_domain_label, is_domain_literal_char};
use crate::constants::{
    DOMAIN_MAX_LENGTH, DOT, LEFT_BRACKET, RIGHT_BRACKET, SUB_DOMAIN_MAX_LENGTH,
};
use crate::error::EmailError;
use crate::options::EmailOptions;

/// Validates a domain as a dotted label sequence or a bracketed literal.
///
/// # Errors
///
/// - [`EmailError::DomainEmpty`] if the domain is empty
/// - [`EmailError::DomainTooLong`] if it exceeds [`DOMAIN_MAX_LENGTH`]
/// - [`EmailError::UnsupportedDomainLiteral`] for `[...]` when literals are
///   disabled
/// - the errors of [`parse_literal_domain`] and [`parse_text_domain`]
///
/// # Examples
///
/// ```
/// use addr_spec::{parse_domain, EmailError, EmailOptions};
///
/// let options = EmailOptions::new().with_minimum_sub_domains(2);
/// assert!(parse_domain("a.b", &options).is_ok());
/// assert_eq!(parse_domain("localhost", &options), Err(EmailError::DomainTooFew));
/// ```
pub fn parse_domain(part: &str, options: &EmailOptions) -> Result<(), EmailError> {
    if part.is_empty() {
        return Err(EmailError::DomainEmpty);
    }

    if part.encode_utf16().count() > DOMAIN_MAX_LENGTH {
        return Err(EmailError::DomainTooLong);
    }

    if let Some(inner) = literal_inner(part) {
        if !options.allow_domain_literal {
            return Err(EmailError::UnsupportedDomainLiteral);
        }
        return parse_literal_domain(inner);
    }

    parse_text_domain(part, options)
}

/// Validates a dotted domain label by label.
///
/// Labels are checked in order; the first bad label decides the error. The
/// label count is compared to `options.minimum_sub_domains` only after every
/// label passed.
///
/// # Errors
///
/// - [`EmailError::SubdomainEmpty`] for an empty label
/// - [`EmailError::SubdomainTooLong`] for a label over [`SUB_DOMAIN_MAX_LENGTH`]
/// - [`EmailError::InvalidCharacter`] for a label that is not DNS-shaped
/// - [`EmailError::DomainTooFew`] if there are too few labels
pub fn parse_text_domain(part: &str, options: &EmailOptions) -> Result<(), EmailError> {
    let mut count = 0;

    for label in part.split(DOT) {
        if label.is_empty() {
            return Err(EmailError::SubdomainEmpty);
        }

        if label.len() > SUB_DOMAIN_MAX_LENGTH {
            return Err(EmailError::SubdomainTooLong);
        }

        if !is_domain_label(label) {
            return Err(EmailError::InvalidCharacter);
        }

        count += 1;
    }

    if count < options.minimum_sub_domains {
        return Err(EmailError::DomainTooFew);
    }

    Ok(())
}

/// Validates the inside of a domain literal (without brackets).
///
/// # Errors
///
/// Returns [`EmailError::InvalidCharacter`] if any character is outside dtext.
pub fn parse_literal_domain(inner: &str) -> Result<(), EmailError> {
    if inner.chars().all(is_domain_literal_char) {
        Ok(())
    } else {
        Err(EmailError::InvalidCharacter)
    }
}

/// Returns the text between the brackets of a `[...]` domain.
pub(crate) fn literal_inner(part: &str) -> Option<&str> {
    part.strip_prefix(LEFT_BRACKET)?.strip_suffix(RIGHT_BRACKET)
}
