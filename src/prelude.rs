//! Convenient re-exports for glob imports.
//!
//! ```rust
//! use addr_spec::prelude::*;
//!
//! let parsed = parse("a@example.com", &EmailOptions::default()).unwrap();
//! assert_eq!(parsed.domain(), "example.com");
//! ```
//!
//! The character predicates in [`crate::chars`] and the lower-level
//! splitting functions are left out; import them by path.

pub use crate::{
    // Core types
    EmailOptions, ParsedEmail,
    // Entry points
    is_valid, is_valid_domain, is_valid_local_part, parse,
    // Errors
    EmailError,
    // Constants
    DOMAIN_MAX_LENGTH, LOCAL_PART_MAX_LENGTH, MAILTO_SCHEME, SUB_DOMAIN_MAX_LENGTH,
};
