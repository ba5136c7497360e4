//! Kani proof harnesses for the character classes and validators.
//!
//! # Usage
//!
//! Kani is not a Cargo dependency. Install and run with:
//!
//! ```bash
//! cargo install --locked kani-verifier
//! cargo kani setup
//! cargo kani --features kani
//! ```
//!
//! This module is only compiled when using Kani (`#[cfg(kani)]`).

use crate::chars::{
    is_atom_char, is_domain_literal_char, is_quoted_text_char, is_reserved_uni_char,
    is_utf8_non_ascii_char, is_visible_char, is_whitespace_char,
};
use crate::{EmailError, EmailOptions, parse_domain, parse_local_part};

/// Valid characters for domain labels: alphanumeric and hyphen
const DOMAIN_CHARS: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789-";

/// Letters and digits, allowed at both ends of a label
const DOMAIN_BOUNDARY_CHARS: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

fn arbitrary_from(alphabet: &[u8]) -> u8 {
    let idx: usize = kani::any();
    alphabet[idx % alphabet.len()]
}

#[kani::proof]
fn quoted_text_is_visible() {
    let c: char = kani::any();
    if is_quoted_text_char(c) {
        assert!(is_visible_char(c));
        assert!(c != '"' && c != '\\');
    }
}

#[kani::proof]
fn whitespace_is_not_visible() {
    let c: char = kani::any();
    if is_whitespace_char(c) {
        assert!(!is_visible_char(c));
    }
}

#[kani::proof]
fn atom_chars_exclude_separators() {
    let c: char = kani::any();
    if is_atom_char(c) {
        assert!(c != '.' && c != '@' && c != '"' && c != '<' && c != '>');
        assert!(is_visible_char(c) || is_utf8_non_ascii_char(c));
    }
}

#[kani::proof]
fn domain_literal_chars_exclude_brackets() {
    let c: char = kani::any();
    if is_domain_literal_char(c) {
        assert!(c != '[' && c != ']' && c != '\\');
    }
}

#[kani::proof]
fn reserved_chars_are_single_byte() {
    let c: char = kani::any();
    if is_reserved_uni_char(c) {
        assert!(c.is_ascii());
        assert!(is_visible_char(c));
    }
}

#[kani::proof]
#[kani::unwind(5)]
fn short_labels_parse() {
    let len: usize = kani::any();
    kani::assume(len >= 1 && len <= 3);

    let mut label = [0u8; 3];
    label[0] = arbitrary_from(DOMAIN_BOUNDARY_CHARS);
    for byte in label.iter_mut().take(len - 1).skip(1) {
        *byte = arbitrary_from(DOMAIN_CHARS);
    }
    label[len - 1] = arbitrary_from(DOMAIN_BOUNDARY_CHARS);

    let Ok(domain) = std::str::from_utf8(&label[..len]) else {
        unreachable!("label alphabet is ASCII");
    };
    assert!(parse_domain(domain, &EmailOptions::default()).is_ok());
}

#[kani::proof]
fn single_quote_is_empty_local_part() {
    assert_eq!(parse_local_part("\""), Err(EmailError::LocalPartEmpty));
    assert_eq!(parse_local_part("\"\""), Err(EmailError::LocalPartEmpty));
}
