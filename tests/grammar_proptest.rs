//! Property-based tests validating the parser against the addr-spec grammar.
//!
//! These tests generate random valid inputs according to grammar constraints
//! and verify the parser accepts them, ensuring parser-grammar conformance.

use proptest::prelude::*;

use addr_spec::chars::is_reserved_uni_char;
use addr_spec::mailto::encode;
use addr_spec::{
    EmailError, EmailOptions, ParsedEmail, is_valid, parse, parse_domain, parse_local_part,
    DOMAIN_MAX_LENGTH, LOCAL_PART_MAX_LENGTH, SUB_DOMAIN_MAX_LENGTH,
};

/// Strategies for generating valid grammar-conformant inputs.
mod strategies {
    use super::*;

    /// atext characters (ASCII subset)
    const ATEXT: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789!#$%&'*+-/=?^_`{|}~";

    /// qtext characters plus space, all allowed unescaped inside quotes
    /// (`<` left out so a quoted local part never looks like `Name <addr>`)
    const QTEXT: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789 !#$%&'()*+,-./:;=>?@[]^_`{|}~";

    /// Characters that need a backslash inside quotes
    const ESCAPED: &[u8] = b"\"\\";

    /// Valid alphanumeric characters for DNS labels
    const ALPHANUMERIC: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

    /// Valid characters for DNS labels (alphanumeric + hyphen)
    const DNS_LABEL_CHARS: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789-";

    /// Characters allowed in a domain literal (dtext subset)
    const DTEXT: &[u8] = b"0123456789abcdefABCDEF:.IPv";

    fn text_from(alphabet: &'static [u8], len: std::ops::RangeInclusive<usize>) -> impl Strategy<Value = String> {
        prop::collection::vec(prop::sample::select(alphabet.to_vec()), len)
            .prop_map(|bytes| bytes.into_iter().map(char::from).collect())
    }

    /// Generate an ASCII atom (1-12 chars)
    pub fn atom() -> impl Strategy<Value = String> {
        text_from(ATEXT, 1..=12)
    }

    /// Generate a non-ASCII atom such as `josé` or `用户`
    pub fn unicode_atom() -> impl Strategy<Value = String> {
        prop::collection::vec(prop::sample::select(vec!['é', 'ü', 'ß', 'ø', '用', '户', 'д', 'ω', 'a', 'z']), 1..=6)
            .prop_map(|chars| chars.into_iter().collect())
    }

    /// Generate a dot-atom local part within the length limit
    pub fn dot_atom() -> impl Strategy<Value = String> {
        prop::collection::vec(prop_oneof![4 => atom(), 1 => unicode_atom()], 1..=4)
            .prop_map(|atoms| atoms.join("."))
            .prop_filter("local part too long", |s| s.encode_utf16().count() <= LOCAL_PART_MAX_LENGTH)
    }

    /// Generate a quoted-string local part, with quoted-pairs
    pub fn quoted_string() -> impl Strategy<Value = String> {
        let piece = prop_oneof![
            4 => text_from(QTEXT, 1..=6),
            1 => prop::sample::select(ESCAPED.to_vec()).prop_map(|c| format!("\\{}", char::from(c))),
        ];
        prop::collection::vec(piece, 1..=6)
            .prop_map(|pieces| format!("\"{}\"", pieces.concat()))
            .prop_filter("local part too long", |s| s.len() <= LOCAL_PART_MAX_LENGTH)
    }

    /// Generate any valid local part
    pub fn local_part() -> impl Strategy<Value = String> {
        prop_oneof![3 => dot_atom(), 1 => quoted_string()]
    }

    /// Generate a valid DNS label (1-20 chars for reasonable generation, alphanumeric + hyphen)
    /// Note: RFC 1035 allows up to 63 chars, but we use shorter labels to keep domains short.
    pub fn dns_label() -> impl Strategy<Value = String> {
        (1..=20usize).prop_flat_map(|len| {
            if len == 1 {
                prop::sample::select(ALPHANUMERIC.to_vec())
                    .prop_map(|c| char::from(c).to_string())
                    .boxed()
            } else {
                let first = prop::sample::select(ALPHANUMERIC.to_vec());
                let middle_len = len.saturating_sub(2);
                let middle = prop::collection::vec(
                    prop::sample::select(DNS_LABEL_CHARS.to_vec()),
                    middle_len..=middle_len,
                );
                let last = prop::sample::select(ALPHANUMERIC.to_vec());

                (first, middle, last)
                    .prop_map(|(f, m, l)| {
                        let mut s = String::with_capacity(2 + m.len());
                        s.push(char::from(f));
                        s.extend(m.into_iter().map(char::from));
                        s.push(char::from(l));
                        s
                    })
                    .boxed()
            }
        })
    }

    /// Generate a valid domain name (1-4 labels)
    pub fn domain() -> impl Strategy<Value = String> {
        prop::collection::vec(dns_label(), 1..=4).prop_map(|labels| labels.join("."))
    }

    /// Generate a bracketed domain literal
    pub fn domain_literal() -> impl Strategy<Value = String> {
        let ipv4 = (0u8..=255, 0u8..=255, 0u8..=255, 0u8..=255)
            .prop_map(|(a, b, c, d)| format!("[{a}.{b}.{c}.{d}]"));
        let ipv6 = prop::collection::vec(0u16..=0xffff, 8).prop_map(|groups| {
            let text: Vec<String> = groups.iter().map(|g| format!("{g:x}")).collect();
            format!("[IPv6:{}]", text.join(":"))
        });
        let free = text_from(DTEXT, 0..=20).prop_map(|s| format!("[{s}]"));

        prop_oneof![2 => ipv4, 2 => ipv6, 1 => free]
    }

    /// Generate a display name that contains no `<`
    pub fn display_name() -> impl Strategy<Value = String> {
        "[A-Za-z][A-Za-z .'-]{0,20}[A-Za-z]"
    }

    /// Generate a complete bare address
    pub fn address() -> impl Strategy<Value = String> {
        (local_part(), prop_oneof![4 => domain(), 1 => domain_literal()])
            .prop_map(|(local, domain)| format!("{local}@{domain}"))
    }
}

mod local_part_tests {
    use super::strategies::*;
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(500))]

        #[test]
        fn valid_dot_atoms_parse(part in dot_atom()) {
            let result = parse_local_part(&part);
            prop_assert!(result.is_ok(), "Failed to parse dot-atom: {}", part);
        }

        #[test]
        fn valid_quoted_strings_parse(part in quoted_string()) {
            let result = parse_local_part(&part);
            prop_assert!(result.is_ok(), "Failed to parse quoted string: {}", part);
        }

        #[test]
        fn doubled_dot_is_rejected(a in atom(), b in atom()) {
            let part = format!("{a}..{b}");
            prop_assert_eq!(parse_local_part(&part), Err(EmailError::InvalidCharacter));
        }

        #[test]
        fn unicode_length_counts_code_units(atoms in prop::collection::vec(unicode_atom(), 1..=24)) {
            let part = atoms.join(".");
            let result = parse_local_part(&part);
            if part.encode_utf16().count() <= LOCAL_PART_MAX_LENGTH {
                prop_assert!(result.is_ok(), "Failed to parse unicode local part: {}", part);
            } else {
                prop_assert_eq!(result, Err(EmailError::LocalPartTooLong));
            }
        }

        #[test]
        fn overlong_local_part_is_rejected(extra in 1usize..=32) {
            let part = "a".repeat(LOCAL_PART_MAX_LENGTH + extra);
            prop_assert_eq!(parse_local_part(&part), Err(EmailError::LocalPartTooLong));
        }
    }
}

mod domain_tests {
    use super::strategies::*;
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(500))]

        #[test]
        fn valid_domains_parse(d in domain()) {
            let result = parse_domain(&d, &EmailOptions::default());
            prop_assert!(result.is_ok(), "Failed to parse domain: {}", d);
        }

        #[test]
        fn valid_literals_parse(d in domain_literal()) {
            let result = parse_domain(&d, &EmailOptions::default());
            prop_assert!(result.is_ok(), "Failed to parse literal: {}", d);
        }

        #[test]
        fn literals_rejected_when_disabled(d in domain_literal()) {
            let options = EmailOptions::new().with_allow_domain_literal(false);
            prop_assert_eq!(parse_domain(&d, &options), Err(EmailError::UnsupportedDomainLiteral));
        }

        #[test]
        fn minimum_labels_enforced(labels in prop::collection::vec(dns_label(), 1..=6), minimum in 0usize..=6) {
            let d = labels.join(".");
            let options = EmailOptions::new().with_minimum_sub_domains(minimum);
            let result = parse_domain(&d, &options);
            if labels.len() < minimum {
                prop_assert_eq!(result, Err(EmailError::DomainTooFew));
            } else {
                prop_assert!(result.is_ok());
            }
        }

        #[test]
        fn overlong_label_is_rejected(extra in 1usize..=16, tail in dns_label()) {
            let d = format!("{}.{tail}", "a".repeat(SUB_DOMAIN_MAX_LENGTH + extra));
            prop_assert_eq!(parse_domain(&d, &EmailOptions::default()), Err(EmailError::SubdomainTooLong));
        }

        #[test]
        fn overlong_domain_is_rejected(extra in 1usize..=64) {
            let d = "a".repeat(DOMAIN_MAX_LENGTH + extra);
            prop_assert_eq!(parse_domain(&d, &EmailOptions::default()), Err(EmailError::DomainTooLong));
        }
    }
}

mod address_tests {
    use super::strategies::*;
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(500))]

        #[test]
        fn valid_addresses_parse(addr in address()) {
            let result = ParsedEmail::parse(&addr);
            prop_assert!(result.is_ok(), "Failed to parse address: {}", addr);
        }

        #[test]
        fn email_is_local_at_domain(addr in address()) {
            let parsed = ParsedEmail::parse(&addr).unwrap();
            prop_assert_eq!(
                parsed.email(),
                format!("{}@{}", parsed.local_part(), parsed.domain())
            );
            prop_assert_eq!(parsed.email(), addr.as_str());
        }

        #[test]
        fn uri_is_encoded_email(addr in address()) {
            let parsed = ParsedEmail::parse(&addr).unwrap();
            prop_assert_eq!(parsed.uri(), format!("mailto:{}", encode(parsed.email())));
        }

        #[test]
        fn display_form_parses(name in display_name(), addr in address()) {
            let input = format!("{name} <{addr}>");
            let parsed = ParsedEmail::parse(&input).unwrap();
            prop_assert_eq!(parsed.display_name(), name.trim());
            prop_assert_eq!(parsed.email(), addr.as_str());
            prop_assert_eq!(parsed.original(), input.as_str());
        }

        #[test]
        fn display_form_rejected_when_disabled(name in display_name(), addr in address()) {
            let input = format!("{name} <{addr}>");
            let options = EmailOptions::new().with_allow_display_text(false);
            prop_assert_eq!(parse(&input, &options), Err(EmailError::UnsupportedDisplayName));
        }

        #[test]
        fn is_valid_is_deterministic(input in ".{0,40}") {
            let options = EmailOptions::default();
            let first = is_valid(&input, &options);
            prop_assert_eq!(first, is_valid(&input, &options));
            prop_assert_eq!(first, parse(&input, &options).is_ok());
        }

        #[test]
        fn reserved_kinds_never_reported(input in ".{0,40}") {
            if let Err(kind) = parse(&input, &EmailOptions::default()) {
                prop_assert!(!kind.is_reserved());
            }
        }
    }
}

mod encode_tests {
    use super::*;

    proptest! {
        #[test]
        fn encoded_output_has_no_reserved_except_percent(input in ".{0,40}") {
            let encoded = encode(&input);
            // `%` itself is reserved, so every `%` in the output starts an escape.
            let without_escapes: String = encoded.split('%').collect();
            prop_assert!(!without_escapes.chars().any(is_reserved_uni_char));
        }

        #[test]
        fn unreserved_input_is_unchanged(input in "[a-zA-Z0-9.@_~-]{0,40}") {
            prop_assert_eq!(encode(&input), input);
        }
    }
}
