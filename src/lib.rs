//! Validator and parser for email addresses.
//!
//! This crate checks addresses against a configurable subset of the
//! RFC 5322 `addr-spec` grammar and splits them into their components.
//!
//! # Overview
//!
//! Accepted addresses have the structure:
//!
//! ```text
//! [display-name " <"] local-part "@" domain [">"]
//! ```
//!
//! The local part is a dot-atom (non-ASCII atoms allowed) or a quoted
//! string. The domain is a sequence of DNS-style labels or a bracketed
//! literal such as `[127.0.0.1]`.
//!
//! # Quick Start
//!
//! ```rust
//! use addr_spec::{parse, EmailOptions};
//!
//! let parsed = parse("John Doe <john.doe@example.com>", &EmailOptions::default()).unwrap();
//!
//! assert_eq!(parsed.display_name(), "John Doe");
//! assert_eq!(parsed.email(), "john.doe@example.com");
//! assert_eq!(parsed.uri(), "mailto:john.doe@example.com");
//! ```
//!
//! # Policy
//!
//! [`EmailOptions`] controls what is accepted:
//!
//! ```rust
//! use addr_spec::{is_valid, EmailError, EmailOptions, ParsedEmail};
//!
//! let options = EmailOptions::new()
//!     .with_minimum_sub_domains(2)
//!     .with_allow_domain_literal(false)
//!     .with_allow_display_text(false);
//!
//! assert!(!is_valid("john.doe@localhost", &options));
//! assert_eq!(
//!     ParsedEmail::parse_with("john.doe@localhost", &options),
//!     Err(EmailError::DomainTooFew)
//! );
//! ```
//!
//! # Length Constraints
//!
//! | Component | Max Length |
//! |-----------|------------|
//! | Local part (with quotes) | 64 UTF-16 code units |
//! | Domain | 255 UTF-16 code units |
//! | Domain label | 63 ASCII characters |
//!
//! Lengths are counted the way `str::encode_utf16` counts them, so `日` is one
//! unit and `😀` is two.
//!
//! # Errors
//!
//! Every failure is one [`EmailError`] kind. Validation stops at the first
//! violated rule, in a fixed order: splitting, display-name policy, local
//! part, then domain. Within each component, emptiness is checked before
//! length and length before content.

#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod chars;
mod constants;
mod domain;
mod email;
mod error;
#[cfg(kani)]
mod kani_proofs;
mod local_part;
pub mod mailto;
mod options;
pub mod prelude;
mod split;

pub use constants::{
    AT_SIGN, DISPLAY_END, DISPLAY_SEPARATOR, DISPLAY_START, DOMAIN_MAX_LENGTH, DOT,
    LOCAL_PART_MAX_LENGTH, MAILTO_SCHEME, SUB_DOMAIN_MAX_LENGTH,
};
pub use domain::{parse_domain, parse_literal_domain, parse_text_domain};
pub use email::{ParsedEmail, is_valid, is_valid_domain, is_valid_local_part, parse};
pub use error::EmailError;
pub use local_part::parse_local_part;
pub use options::EmailOptions;
pub use split::{split_at, split_display_email, split_parts};
