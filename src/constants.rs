//! Constants for email address validation.

/// Maximum local-part length in UTF-16 code units (RFC 5321 section 4.5.3.1.1).
pub const LOCAL_PART_MAX_LENGTH: usize = 64;

/// Maximum domain length in UTF-16 code units.
pub const DOMAIN_MAX_LENGTH: usize = 255;

/// Maximum length of a single dot-separated domain label. Labels are ASCII,
/// so this is also a byte count.
pub const SUB_DOMAIN_MAX_LENGTH: usize = 63;

/// The URI scheme used for the `uri` field of a parsed address.
pub const MAILTO_SCHEME: &str = "mailto";

/// Separator between local part and domain.
pub const AT_SIGN: char = '@';

/// Separator between atoms and between domain labels.
pub const DOT: char = '.';

/// Separates the display name from the address in a `Name <addr>` mailbox.
pub const DISPLAY_SEPARATOR: &str = " <";

/// Opens the address portion of a `Name <addr>` mailbox.
pub const DISPLAY_START: char = '<';

/// Closes the address portion of a `Name <addr>` mailbox.
pub const DISPLAY_END: char = '>';

pub(crate) const DOUBLE_QUOTE: char = '"';
pub(crate) const BACKSLASH: char = '\\';
pub(crate) const LEFT_BRACKET: char = '[';
pub(crate) const RIGHT_BRACKET: char = ']';
