//! Splitting an address into display name, local part, and domain.
//!
//! Splitting never validates content; it only locates separators.

use crate::constants::{AT_SIGN, DISPLAY_END, DISPLAY_SEPARATOR};
use crate::error::EmailError;

/// Splits `Name <local@domain>` into `("Name", "local@domain")`.
///
/// The last `" <"` (a space followed by `<`) starts the address. Text
/// before it, trimmed, is the display name. Without that separator the whole
/// input is the address and the display name is empty, so `<a@b.c>` is
/// returned untouched.
///
/// # Errors
///
/// Returns [`EmailError::MissingEndBracket`] if the separator is present but the
/// trimmed text after it does not end with `>`.
///
/// # Examples
///
/// ```
/// use addr_spec::split_display_email;
///
/// assert_eq!(
///     split_display_email("John Doe <john@example.com>"),
///     Ok(("John Doe", "john@example.com"))
/// );
/// assert_eq!(split_display_email("john@example.com"), Ok(("", "john@example.com")));
/// ```
pub fn split_display_email(text: &str) -> Result<(&str, &str), EmailError> {
    let Some((display, rest)) = text.rsplit_once(DISPLAY_SEPARATOR) else {
        return Ok(("", text));
    };

    let display = trim_text(display);
    let rest = trim_text(rest);
    let email = rest
        .strip_suffix(DISPLAY_END)
        .ok_or(EmailError::MissingEndBracket)?;

    Ok((display, email))
}

/// Trims Unicode whitespace and the byte order mark from both ends.
fn trim_text(s: &str) -> &str {
    s.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
}

/// Splits an address at its last `@` into `(local, domain)`.
///
/// Domains never contain `@`, so any earlier `@` (for instance inside a
/// quoted local part) stays with the local part.
///
/// # Errors
///
/// Returns [`EmailError::MissingSeparator`] if there is no `@`.
pub fn split_at(address: &str) -> Result<(&str, &str), EmailError> {
    let idx = address.rfind(AT_SIGN).ok_or(EmailError::MissingSeparator)?;
    Ok((&address[..idx], &address[idx + AT_SIGN.len_utf8()..]))
}

/// Splits an address into `(local, domain, display_name)`.
///
/// # Errors
///
/// Returns the errors of [`split_display_email`] and [`split_at`].
pub fn split_parts(address: &str) -> Result<(&str, &str, &str), EmailError> {
    let (display, email) = split_display_email(address)?;
    let (local, domain) = split_at(email)?;
    Ok((local, domain, display))
}
