//! Parsed email address type and top-level validation entry points.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::constants::DISPLAY_START;
use crate::domain::{literal_inner, parse_domain};
use crate::error::EmailError;
use crate::local_part::parse_local_part;
use crate::mailto::mailto_uri;
use crate::options::EmailOptions;
use crate::split::{split_at, split_display_email};

/// A validated email address.
///
/// # Structure
///
/// ```text
/// [display-name " <"] local-part "@" domain [">"]
/// ```
///
/// # Examples
///
/// ```
/// use addr_spec::ParsedEmail;
///
/// let parsed = ParsedEmail::parse("John Doe <john.doe@example.com>").unwrap();
/// assert_eq!(parsed.display_name(), "John Doe");
/// assert_eq!(parsed.local_part(), "john.doe");
/// assert_eq!(parsed.domain(), "example.com");
/// assert_eq!(parsed.email(), "john.doe@example.com");
/// assert_eq!(parsed.uri(), "mailto:john.doe@example.com");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ParsedEmail {
    original: String,
    email: String,
    local_part: String,
    domain: String,
    display_name: String,
    uri: String,
}

impl ParsedEmail {
    /// Parses an address with the default [`EmailOptions`].
    ///
    /// # Errors
    ///
    /// Returns the first [`EmailError`] found; see [`parse`].
    pub fn parse(input: &str) -> Result<Self, EmailError> {
        parse(input, &EmailOptions::default())
    }

    /// Parses an address with the given options.
    ///
    /// # Errors
    ///
    /// Returns the first [`EmailError`] found; see [`parse`].
    pub fn parse_with(input: &str, options: &EmailOptions) -> Result<Self, EmailError> {
        parse(input, options)
    }

    /// Returns the input exactly as given.
    #[must_use]
    pub fn original(&self) -> &str {
        &self.original
    }

    /// Returns `local@domain`, without display name or brackets.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Returns the local part, including quotes if it was quoted.
    #[must_use]
    pub fn local_part(&self) -> &str {
        &self.local_part
    }

    /// Returns the domain, including brackets if it is a literal.
    #[must_use]
    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// Returns the display name, or an empty string if there is none.
    #[must_use]
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Returns the `mailto:` URI for the address.
    #[must_use]
    pub fn uri(&self) -> &str {
        &self.uri
    }

    /// Returns true if a display name was given.
    #[must_use]
    pub fn has_display_name(&self) -> bool {
        !self.display_name.is_empty()
    }

    /// Returns true if the domain is a bracketed literal.
    #[must_use]
    pub fn is_domain_literal(&self) -> bool {
        literal_inner(&self.domain).is_some()
    }

    fn parse_inner(address: &str, options: &EmailOptions) -> Result<Self, EmailError> {
        let (display, email) = split_display_email(address)?;
        let (local, domain) = split_at(email)?;

        let has_display = !display.is_empty();
        let starts_with_bracket = local.starts_with(DISPLAY_START);

        if has_display && !options.allow_display_text {
            return Err(EmailError::UnsupportedDisplayName);
        }

        if !has_display && starts_with_bracket {
            return Err(if options.allow_display_text {
                EmailError::MissingDisplayName
            } else {
                EmailError::InvalidCharacter
            });
        }

        parse_local_part(local)?;
        parse_domain(domain, options)?;

        Ok(Self {
            original: address.to_string(),
            email: email.to_string(),
            local_part: local.to_string(),
            domain: domain.to_string(),
            display_name: display.to_string(),
            uri: mailto_uri(email),
        })
    }
}

/// Parses and validates an address.
///
/// The address is split into display name, local part, and domain. The
/// display-name policy is applied, then the local part and the domain are
/// validated in that order. The first failure is returned.
///
/// # Errors
///
/// - [`EmailError::MissingEndBracket`] or [`EmailError::MissingSeparator`]
///   if the address cannot be split
/// - [`EmailError::UnsupportedDisplayName`] if a display name is given but
///   `options.allow_display_text` is false
/// - [`EmailError::MissingDisplayName`] or [`EmailError::InvalidCharacter`]
///   if the local part opens with `<` and no display name was given
/// - any error of [`parse_local_part`] or [`parse_domain`]
///
/// # Examples
///
/// ```
/// use addr_spec::{parse, EmailError, EmailOptions};
///
/// let options = EmailOptions::new().with_allow_display_text(false);
/// assert_eq!(
///     parse("John Doe <john.doe@example.com>", &options),
///     Err(EmailError::UnsupportedDisplayName)
/// );
/// ```
pub fn parse(address: &str, options: &EmailOptions) -> Result<ParsedEmail, EmailError> {
    let result = ParsedEmail::parse_inner(address, options);

    #[cfg(feature = "tracing")]
    match &result {
        Ok(parsed) => tracing::trace!(address, email = parsed.email(), "address accepted"),
        Err(kind) => tracing::trace!(address, kind = kind.name(), "address rejected"),
    }

    result
}

/// Returns true if [`parse`] accepts the address.
///
/// # Examples
///
/// ```
/// use addr_spec::{is_valid, EmailOptions};
///
/// assert!(is_valid("\" \"@example.org", &EmailOptions::default()));
/// assert!(!is_valid("abc.example.com", &EmailOptions::default()));
/// ```
#[must_use]
pub fn is_valid(address: &str, options: &EmailOptions) -> bool {
    parse(address, options).is_ok()
}

/// Returns true if [`parse_local_part`] accepts the local part.
#[must_use]
pub fn is_valid_local_part(part: &str) -> bool {
    parse_local_part(part).is_ok()
}

/// Returns true if [`parse_domain`] accepts the domain.
#[must_use]
pub fn is_valid_domain(part: &str, options: &EmailOptions) -> bool {
    parse_domain(part, options).is_ok()
}

impl fmt::Display for ParsedEmail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.display_name.is_empty() {
            write!(f, "{}", self.email)
        } else {
            write!(f, "{} <{}>", self.display_name, self.email)
        }
    }
}

impl FromStr for ParsedEmail {
    type Err = EmailError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for ParsedEmail {
    type Error = EmailError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl AsRef<str> for ParsedEmail {
    fn as_ref(&self) -> &str {
        &self.email
    }
}

impl PartialOrd for ParsedEmail {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ParsedEmail {
    fn cmp(&self, other: &Self) -> Ordering {
        self.original.cmp(&other.original)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for ParsedEmail {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.original)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for ParsedEmail {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
