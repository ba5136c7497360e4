//! Error type for email address validation.

use std::fmt;

use crate::constants::{
    AT_SIGN, DISPLAY_END, DISPLAY_START, DOMAIN_MAX_LENGTH, DOT, LOCAL_PART_MAX_LENGTH,
    SUB_DOMAIN_MAX_LENGTH,
};

/// Reasons an address, local part, or domain was rejected.
///
/// The set of kinds is closed. Variants carry no data: callers that need to
/// show a message use the [`Display`](fmt::Display) impl, everything else
/// matches on the kind.
///
/// `DomainInvalidSeparator`, `UnbalancedQuotes`, `InvalidComment` and
/// `InvalidIpAddress` are reserved: no validator in this crate returns them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EmailError {
    /// A character outside the grammar's alphabet for that component
    InvalidCharacter,
    /// No `@` between local part and domain
    MissingSeparator,
    /// Local part is empty (or an empty quoted string)
    LocalPartEmpty,
    /// Local part exceeds [`LOCAL_PART_MAX_LENGTH`]
    LocalPartTooLong,
    /// Domain is empty
    DomainEmpty,
    /// Domain exceeds [`DOMAIN_MAX_LENGTH`]
    DomainTooLong,
    /// A domain label is empty (leading, trailing, or doubled dot)
    SubdomainEmpty,
    /// A domain label exceeds [`SUB_DOMAIN_MAX_LENGTH`]
    SubdomainTooLong,
    /// Fewer domain labels than `EmailOptions::minimum_sub_domains`
    DomainTooFew,
    /// Misplaced domain separator (reserved)
    DomainInvalidSeparator,
    /// Unbalanced quotes around the local part (reserved)
    UnbalancedQuotes,
    /// Malformed comment (reserved)
    InvalidComment,
    /// Malformed IP address literal (reserved)
    InvalidIpAddress,
    /// A bracketed domain literal was given but literals are disabled
    UnsupportedDomainLiteral,
    /// A display name was given but display text is disabled
    UnsupportedDisplayName,
    /// Address opens with `<` without any display text before it
    MissingDisplayName,
    /// `<` was found but the address does not end with `>`
    MissingEndBracket,
}

impl EmailError {
    /// Every failure kind, in declaration order.
    pub const ALL: [Self; 17] = [
        Self::InvalidCharacter,
        Self::MissingSeparator,
        Self::LocalPartEmpty,
        Self::LocalPartTooLong,
        Self::DomainEmpty,
        Self::DomainTooLong,
        Self::SubdomainEmpty,
        Self::SubdomainTooLong,
        Self::DomainTooFew,
        Self::DomainInvalidSeparator,
        Self::UnbalancedQuotes,
        Self::InvalidComment,
        Self::InvalidIpAddress,
        Self::UnsupportedDomainLiteral,
        Self::UnsupportedDisplayName,
        Self::MissingDisplayName,
        Self::MissingEndBracket,
    ];

    /// Returns the kind's name, e.g. `"LocalPartTooLong"`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::InvalidCharacter => "InvalidCharacter",
            Self::MissingSeparator => "MissingSeparator",
            Self::LocalPartEmpty => "LocalPartEmpty",
            Self::LocalPartTooLong => "LocalPartTooLong",
            Self::DomainEmpty => "DomainEmpty",
            Self::DomainTooLong => "DomainTooLong",
            Self::SubdomainEmpty => "SubdomainEmpty",
            Self::SubdomainTooLong => "SubdomainTooLong",
            Self::DomainTooFew => "DomainTooFew",
            Self::DomainInvalidSeparator => "DomainInvalidSeparator",
            Self::UnbalancedQuotes => "UnbalancedQuotes",
            Self::InvalidComment => "InvalidComment",
            Self::InvalidIpAddress => "InvalidIPAddress",
            Self::UnsupportedDomainLiteral => "UnsupportedDomainLiteral",
            Self::UnsupportedDisplayName => "UnsupportedDisplayName",
            Self::MissingDisplayName => "MissingDisplayName",
            Self::MissingEndBracket => "MissingEndBracket",
        }
    }

    /// Returns true for kinds that no validator currently produces.
    #[must_use]
    pub const fn is_reserved(self) -> bool {
        matches!(
            self,
            Self::DomainInvalidSeparator
                | Self::UnbalancedQuotes
                | Self::InvalidComment
                | Self::InvalidIpAddress
        )
    }
}

impl fmt::Display for EmailError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCharacter => write!(f, "invalid character"),
            Self::MissingSeparator => write!(f, "missing separator character '{AT_SIGN}'"),
            Self::LocalPartEmpty => write!(f, "local part is empty"),
            Self::LocalPartTooLong => write!(
                f,
                "local part is too long; length limit is {LOCAL_PART_MAX_LENGTH}"
            ),
            Self::DomainEmpty => write!(f, "domain is empty"),
            Self::DomainTooLong => {
                write!(f, "domain is too long; length limit is {DOMAIN_MAX_LENGTH}")
            }
            Self::SubdomainEmpty => write!(f, "a subdomain is empty"),
            Self::SubdomainTooLong => write!(
                f,
                "a subdomain is too long; length limit is {SUB_DOMAIN_MAX_LENGTH}"
            ),
            Self::DomainTooFew => write!(f, "too few parts in the domain"),
            Self::DomainInvalidSeparator => {
                write!(f, "invalid placement of the domain separator '{DOT}'")
            }
            Self::UnbalancedQuotes => write!(f, "quotes around the local part are unbalanced"),
            Self::InvalidComment => write!(f, "a comment was badly formed"),
            Self::InvalidIpAddress => write!(f, "invalid IP address specified for domain"),
            Self::UnsupportedDomainLiteral => write!(f, "domain literals are not supported"),
            Self::UnsupportedDisplayName => write!(f, "display names are not supported"),
            Self::MissingDisplayName => write!(
                f,
                "display name was not supplied, but email starts with '{DISPLAY_START}'"
            ),
            Self::MissingEndBracket => write!(f, "terminating '{DISPLAY_END}' is missing"),
        }
    }
}

impl std::error::Error for EmailError {}

#[cfg(feature = "serde")]
impl serde::Serialize for EmailError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.name())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for EmailError {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown error kind '{s}'")))
    }
}
