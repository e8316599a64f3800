//! # Type tags
//!
//! Every encoded value starts with a one-byte tag identifying the kind of its
//! payload. The tags form a closed set; a decoder must reject any byte outside
//! it. [`Tag`] is that set, together with the lowercase names used in
//! diagnostics.

/// Raw bytestring tag byte.
pub const TAG_RAW: u8 = 0;
/// Unsigned number tag byte.
pub const TAG_NUMBER: u8 = 1;
/// UTF-8 text tag byte.
pub const TAG_TEXT: u8 = 2;
/// Length-prefixed list tag byte.
pub const TAG_LIST: u8 = 3;
/// Structured-text (JSON) tag byte.
pub const TAG_STRUCTURED: u8 = 4;

#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
/// The kind of a tagged value, in tag-byte order.
///
/// # Example
///
/// ```
/// use tagwire::tag::Tag;
///
/// assert_eq!(Tag::Text.byte(), 2);
/// assert_eq!(Tag::from_byte(2), Some(Tag::Text));
/// assert_eq!(Tag::from_byte(255), None);
/// ```
pub enum Tag {
    /// Raw bytes, passed through verbatim.
    Raw = 0,
    /// Fixed-width little-endian unsigned number.
    Number = 1,
    /// UTF-8 text.
    Text = 2,
    /// Heterogeneous list of length-prefixed tagged values.
    List = 3,
    /// JSON payload, opaque beyond its text serialization.
    Structured = 4,
}

use Tag::*;

/// Name table, in tag-byte order.
const NAMES: [(Tag, &str); 5] = [
    (Raw, "raw"),
    (Number, "number"),
    (Text, "text"),
    (List, "list"),
    (Structured, "structured"),
];

impl Tag {
    /// The wire byte for this tag.
    pub fn byte(self) -> u8 { self as u8 }

    /// Looks up the tag for a wire byte, `None` for bytes outside the set.
    pub fn from_byte(byte: u8) -> Option<Tag> {
        match byte {
            TAG_RAW => Some(Raw),
            TAG_NUMBER => Some(Number),
            TAG_TEXT => Some(Text),
            TAG_LIST => Some(List),
            TAG_STRUCTURED => Some(Structured),
            _ => None,
        }
    }

    /// The lowercase name of this tag, as used in diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            Raw => "raw",
            Number => "number",
            Text => "text",
            List => "list",
            Structured => "structured",
        }
    }

    /// Looks up a tag by name, case-insensitively.
    ///
    /// Returns `None` for unrecognized names.
    ///
    /// # Example
    ///
    /// ```
    /// use tagwire::tag::Tag;
    ///
    /// assert_eq!(Tag::from_name("list"), Some(Tag::List));
    /// assert_eq!(Tag::from_name("LIST"), Some(Tag::List));
    /// assert_eq!(Tag::from_name("blob"), None);
    /// ```
    pub fn from_name(name: &str) -> Option<Tag> {
        NAMES
            .iter()
            .find(|(_, n)| name.eq_ignore_ascii_case(n))
            .map(|(t, _)| *t)
    }
}

impl std::fmt::Display for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
