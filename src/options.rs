//! Validation policy.

/// Policy applied when validating an address.
///
/// Options are passed by reference to every operation and never stored.
///
/// # Examples
///
/// ```
/// use addr_spec::EmailOptions;
///
/// let strict = EmailOptions::new()
///     .with_minimum_sub_domains(2)
///     .with_allow_domain_literal(false)
///     .with_allow_display_text(false);
///
/// assert_eq!(strict.minimum_sub_domains, 2);
/// assert!(!strict.allow_domain_literal);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EmailOptions {
    /// Minimum number of dot-separated labels in a non-literal domain.
    ///
    /// Default: 0
    pub minimum_sub_domains: usize,

    /// Whether bracketed domain literals such as `[127.0.0.1]` are accepted.
    ///
    /// Default: true
    pub allow_domain_literal: bool,

    /// Whether the `Name <local@domain>` form is accepted.
    ///
    /// Default: true
    pub allow_display_text: bool,
}

impl Default for EmailOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl EmailOptions {
    /// Creates options with the defaults.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            minimum_sub_domains: 0,
            allow_domain_literal: true,
            allow_display_text: true,
        }
    }

    /// Sets the minimum number of domain labels.
    #[must_use]
    pub const fn with_minimum_sub_domains(mut self, minimum: usize) -> Self {
        self.minimum_sub_domains = minimum;
        self
    }

    /// Enables or disables bracketed domain literals.
    #[must_use]
    pub const fn with_allow_domain_literal(mut self, allow: bool) -> Self {
        self.allow_domain_literal = allow;
        self
    }

    /// Enables or disables the display-name form.
    #[must_use]
    pub const fn with_allow_display_text(mut self, allow: bool) -> Self {
        self.allow_display_text = allow;
        self
    }
}
