//! # tagwire
//!
//! `tagwire` is the byte-conversion layer of a messaging protocol: a
//! self-describing tagged-value codec plus the text/integer primitives the
//! protocol builds messages out of.
//!
//! # Usage
//!
//! Values enter the codec as the [`Value`] sum type and come back out either
//! as an owned [`Value`] or as a borrowed [`Decoded`](encoding::Decoded) view
//! into the input buffer.
//!
//! ```
//! use tagwire::prelude::*;
//!
//! let value = Value::List(vec![
//!     Value::from(Bytes::from(vec![0xaa, 0xbb])),
//!     Value::from("hello"),
//!     Value::from(1984u64),
//! ]);
//!
//! // encode
//! let encoded = encode_full(&value).unwrap();
//!
//! // and then immediately decode, because this is a silly example
//! let decoded = decode_value(&encoded).unwrap();
//!
//! assert_eq!(decoded, value);
//! ```
//!
//! The conversion primitives live in [`transcode`] (UTF-8, Base64, hex),
//! [`util`] (integer packing, concatenation), and [`verify`] (constant-time
//! multi-candidate verification).
//!
//! # An overview of the value kinds
//!
//! ## Raw bytes
//!
//! A [`Bytes`](bytes::Bytes) buffer carried verbatim.
//!
//! ```
//! use tagwire::prelude::*;
//!
//! let raw = Value::from_static(b"already bytes");
//! ```
//!
//! ## Numbers
//!
//! Unsigned 64-bit integers, packed little-endian at a fixed 8-byte width.
//!
//! ```
//! use tagwire::prelude::*;
//!
//! let n = Value::from(42u64);
//! let small = Value::from(7u8);
//! ```
//!
//! ## Text
//!
//! UTF-8 strings. Decoding is lenient: invalid sequences become replacement
//! characters rather than errors.
//!
//! ```
//! use tagwire::prelude::*;
//!
//! let greeting = Value::from("hello world");
//! ```
//!
//! ## Lists
//!
//! Heterogeneous, recursive sequences of values.
//!
//! ```
//! use tagwire::prelude::*;
//!
//! let mixed = Value::List(vec![Value::from(1u64), Value::from("two")]);
//! let nested: Value = vec![vec![1u64, 2], vec![3]].into();
//! ```
//!
//! ## Structured
//!
//! Arbitrary JSON, opaque to the codec beyond its text serialization. Key
//! order on the wire is whatever the serializer emits; callers must not rely
//! on it.
//!
//! ```
//! use tagwire::prelude::*;
//!
//! let json: serde_json::Value = serde_json::from_str(r#"{"seq": 1}"#).unwrap();
//! let obj = Value::Structured(json);
//! ```
//!
//! # Specification
//!
//! This section describes the binary format.
//!
//! ## Tags
//!
//! The first byte of every encoded value is its *tag*; the rest is the
//! *payload*. There is no version byte, no checksum, and no magic number; a
//! decoder is assumed to know it is reading a tagged value.
//!
//! | Tag | Kind       | Payload                                 |
//! | --- | ---        | ---                                     |
//! | `0` | raw        | the bytes, verbatim                     |
//! | `1` | number     | 8-byte little-endian unsigned integer   |
//! | `2` | text       | UTF-8 bytes                             |
//! | `3` | list       | length-prefixed elements, see below     |
//! | `4` | structured | UTF-8 JSON text                         |
//!
//! Any other tag byte is a decode error.
//!
//! ## Lists
//!
//! A list payload is a concatenation of its elements in order, each element
//! preceded by an 8-byte little-endian count of the bytes in that element's
//! *full tagged encoding*:
//!
//! | 8 bytes         | n bytes                    | ... |
//! | ---             | ---                        | --- |
//! | element length n | the element, tag included | ... |
//!
//! Elements may be of any kind, including further lists. The scan must land
//! exactly on the payload end: a length prefix with fewer than 8 bytes left,
//! or an element reaching past the payload, is a decode error rather than a
//! silent truncation.

#![warn(
    deprecated_in_future,
    unsafe_code,
    unused_labels,
    keyword_idents,
    missing_copy_implementations,
    missing_debug_implementations,
    macro_use_extern_crate,
    unreachable_pub,
    trivial_casts,
    trivial_numeric_casts,
    unused_extern_crates,
    unused_import_braces
)]

pub mod encoding;
pub mod errors;
pub mod prelude;
pub mod tag;
pub mod transcode;
pub mod util;
pub mod verify;

use bytes::Bytes;
use failure::*;
use tag::Tag;

#[derive(Clone, Debug, PartialEq)]
/// [`Value`] and its variants: everything the tagged codec can carry.
///
/// # Example
///
/// ```
/// use tagwire::prelude::*;
///
/// let n = Value::Number(12);
///
/// let val = match n {
///     Value::Number(n) => n,
///     _ => panic!(),
/// };
///
/// assert_eq!(val, 12);
/// ```
pub enum Value {
    /// Raw bytes, tag 0.
    ///
    /// ```
    /// use tagwire::prelude::*;
    ///
    /// let raw = Value::Raw(Bytes::from_static(b"hello world"));
    /// ```
    Raw(Bytes),
    /// An unsigned number, tag 1.
    ///
    /// ```
    /// use tagwire::prelude::*;
    ///
    /// let num = Value::Number(1984);
    /// ```
    Number(u64),
    /// UTF-8 text, tag 2.
    ///
    /// ```
    /// use tagwire::prelude::*;
    ///
    /// let text = Value::Text("hello world".to_string());
    /// ```
    Text(String),
    /// A heterogeneous list, tag 3.
    ///
    /// ```
    /// use tagwire::prelude::*;
    ///
    /// let list = Value::List(vec![Value::Number(1), Value::from("two")]);
    /// ```
    List(Vec<Value>),
    /// Arbitrary JSON, tag 4.
    ///
    /// ```
    /// use tagwire::prelude::*;
    ///
    /// let obj = Value::Structured(serde_json::Value::Null);
    /// ```
    Structured(serde_json::Value),
}

use Value::*;

impl Value {
    /// The wire tag for this value. Total: every value has a tag, with
    /// [`Tag::Structured`] as the catch-all kind.
    ///
    /// # Example
    ///
    /// ```
    /// use tagwire::prelude::*;
    ///
    /// assert_eq!(Value::from("hi").tag(), Tag::Text);
    /// assert_eq!(Value::from("hi").tag().byte(), 2);
    /// ```
    pub fn tag(&self) -> Tag {
        match self {
            Raw(_) => Tag::Raw,
            Number(_) => Tag::Number,
            Text(_) => Tag::Text,
            List(_) => Tag::List,
            Structured(_) => Tag::Structured,
        }
    }

    /// Converts a bytestring literal to a raw [`Value`].
    ///
    /// # Example
    ///
    /// ```
    /// use tagwire::prelude::*;
    ///
    /// let ks_foo = Value::from_static(b"this is an example");
    /// ```
    pub fn from_static(bytes: &'static [u8]) -> Value { Raw(Bytes::from_static(bytes)) }

    /// Tries to view this value as raw bytes.
    /// This will return an [`Error`] if the value is not a [`Value::Raw`].
    ///
    /// # Example
    ///
    /// ```
    /// use tagwire::prelude::*;
    ///
    /// let foo = Value::from_static(b"an example");
    ///
    /// let foo_bytes = foo.to_raw().unwrap();
    /// ```
    pub fn to_raw(&self) -> Result<&Bytes, Error> {
        match self {
            Raw(bs) => Ok(bs),
            _ => bail!("This value is not `Raw`"),
        }
    }

    /// Tries to convert this value to a number.
    /// This will return an [`Error`] if the value is not a [`Value::Number`].
    pub fn to_number(&self) -> Result<u64, Error> {
        match self {
            Number(n) => Ok(*n),
            _ => bail!("This value is not a `Number`"),
        }
    }

    /// Tries to view this value as text.
    /// This will return an [`Error`] if the value is not a [`Value::Text`].
    pub fn to_text(&self) -> Result<&str, Error> {
        match self {
            Text(s) => Ok(s),
            _ => bail!("This value is not `Text`"),
        }
    }

    /// Tries to view this value as a list of values.
    /// This will return an [`Error`] if the value is not a [`Value::List`].
    ///
    /// # Example
    ///
    /// ```
    /// use tagwire::prelude::*;
    ///
    /// let ks = Value::from(vec![1u64, 2, 3]);
    ///
    /// let elements = ks.to_list().unwrap();
    ///
    /// assert_eq!(elements.len(), 3);
    /// ```
    pub fn to_list(&self) -> Result<&Vec<Value>, Error> {
        match self {
            List(vs) => Ok(vs),
            _ => bail!("This value is not a `List`"),
        }
    }

    /// Consumes the value, converting it into a vector of values.
    /// This will return an [`Error`] if the value is not a [`Value::List`].
    pub fn into_list(self) -> Result<Vec<Value>, Error> {
        match self {
            List(vs) => Ok(vs),
            _ => bail!("This value is not a `List`"),
        }
    }

    /// Tries to view this value as JSON.
    /// This will return an [`Error`] if the value is not a [`Value::Structured`].
    pub fn to_structured(&self) -> Result<&serde_json::Value, Error> {
        match self {
            Structured(json) => Ok(json),
            _ => bail!("This value is not `Structured`"),
        }
    }

    /// Consumes the value, converting it into JSON.
    /// This will return an [`Error`] if the value is not a [`Value::Structured`].
    pub fn into_structured(self) -> Result<serde_json::Value, Error> {
        match self {
            Structured(json) => Ok(json),
            _ => bail!("This value is not `Structured`"),
        }
    }
}

fn fmt_bytes(bytes: &Bytes) -> String {
    match std::str::from_utf8(bytes) {
        Ok(s) => format!("\"{}\"", s),
        Err(_) => format!("b\"{}\"", transcode::hex_encode(bytes)),
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Raw(bs) => write!(f, "{}", fmt_bytes(bs)),
            Number(n) => write!(f, "{}", n),
            Text(s) => write!(f, "\"{}\"", s),
            List(vs) => {
                write!(f, "[")?;
                for (i, v) in vs.iter().enumerate() {
                    if i != 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", v)?;
                }
                write!(f, "]")
            }
            Structured(json) => write!(f, "{}", json),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Value { Text(s.to_string()) }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(v: Vec<T>) -> Value { List(v.into_iter().map(T::into).collect()) }
}

// Bytes -> Value, From
from_fn!(Value, Bytes, Raw);
// Bytes <- Value, TryFrom
try_from_ctor!(Value, Bytes, Raw);

// u64 -> Value, From
from_fn!(Value, u64, Number);
// u64 <- Value, TryFrom
try_from_ctor!(Value, u64, Number);

// String -> Value, From
from_fn!(Value, String, Text);
// String <- Value, TryFrom
try_from_ctor!(Value, String, Text);

// serde_json::Value -> Value, From
from_fn!(Value, serde_json::Value, Structured);
// serde_json::Value <- Value, TryFrom
try_from_ctor!(Value, serde_json::Value, Structured);

try_from_ctor!(Value, Vec<Value>, List);

// Small unsigned integers widen into `Number`.
from_as!(Value, u8, u64);
from_as!(Value, u16, u64);
from_as!(Value, u32, u64);
from_as!(Value, usize, u64);

#[cfg(test)]
mod tests {
    use super::*;
    use std::convert::TryFrom;

    #[test]
    fn trivial_tests() {
        let v: Value = 5u64.into();
        assert_eq!(v, Number(5));
    }

    #[test]
    fn accessors() {
        assert_eq!(Value::from(5u64).to_number().unwrap(), 5);
        assert!(Value::from(5u64).to_text().is_err());

        assert_eq!(Value::from("word").to_text().unwrap(), "word");
        assert!(Value::from("word").to_raw().is_err());

        assert_eq!(
            Value::from_static(b"word").to_raw().unwrap(),
            &Bytes::from_static(b"word")
        );
    }

    #[test]
    fn from_vec() {
        let v: Vec<u64> = vec![0, 1, 2, 3, 4];
        let val = Value::from(v.clone());
        let elements = val.into_list().unwrap();
        assert_eq!(elements.len(), 5);
        assert_eq!(elements[3], Number(3));
    }

    #[test]
    fn try_from_ctors() {
        assert_eq!(u64::try_from(Number(9)).unwrap(), 9);
        assert_eq!(String::try_from(Value::from("s")).unwrap(), "s");
        assert!(u64::try_from(Value::from("s")).is_err());
    }

    #[test]
    fn tags() {
        assert_eq!(Value::from_static(b"").tag(), Tag::Raw);
        assert_eq!(Number(0).tag(), Tag::Number);
        assert_eq!(Value::from("").tag(), Tag::Text);
        assert_eq!(List(vec![]).tag(), Tag::List);
        assert_eq!(Structured(serde_json::Value::Null).tag(), Tag::Structured);
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", Number(7)), "7");
        assert_eq!(format!("{}", Value::from("hi")), "\"hi\"");
        assert_eq!(format!("{}", Value::from_static(&[0xaa, 0xbb])), "b\"aabb\"");
        assert_eq!(
            format!("{}", List(vec![Number(1), Number(2)])),
            "[1, 2]"
        );
    }
}
