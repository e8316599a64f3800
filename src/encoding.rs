//! # Tagged-value encoder and decoder
//!
//! Encode and decode functions for the tagged wire format.
//!
//! # Example
//!
//! ```
//! use tagwire::prelude::*;
//!
//! // a heterogeneous list
//! let value = Value::List(vec![
//!     Value::from(Bytes::from(vec![0xaa])),
//!     Value::from("hello"),
//!     Value::from(42u64),
//! ]);
//!
//! // encode it
//! let enc = encode_full(&value).unwrap();
//!
//! // and decode it right back
//! assert_eq!(decode_value(&enc).unwrap(), value);
//! ```

use crate::{
    errors::CodecError,
    tag::Tag,
    transcode,
    util::{bytes_to_int, Endian},
    Value::{self, *},
};
use bytes::Bytes;
use std::borrow::Cow;

/// Width in bytes of a number payload.
pub const NUMBER_WIDTH: usize = 8;
/// Width in bytes of a list element's length prefix.
pub const LEN_PREFIX_WIDTH: usize = 8;

/// Encodes a [`Value`] into the tagged wire format, appending to `out`.
///
/// The output is one tag byte followed by the tag-specific payload. List
/// elements are encoded recursively, each preceded by an 8-byte little-endian
/// length of its own tagged encoding.
///
/// The only failure path is [`CodecError::UnsupportedType`], raised when the
/// structured-text serializer refuses a value.
///
/// # Example
///
/// ```
/// use tagwire::prelude::*;
///
/// let out = &mut Vec::new();
/// encode(&Value::from("hi"), out).unwrap();
///
/// assert_eq!(*out, vec![0x02, 0x68, 0x69]);
/// ```
pub fn encode(value: &Value, out: &mut Vec<u8>) -> Result<(), CodecError> {
    out.push(value.tag().byte());
    match value {
        Raw(bs) => out.extend_from_slice(bs),
        Number(n) => out.extend_from_slice(&u64::to_le_bytes(*n)),
        Text(s) => out.extend_from_slice(s.as_bytes()),
        List(vs) => {
            for v in vs {
                let element = encode_full(v)?;
                out.extend_from_slice(&u64::to_le_bytes(element.len() as u64));
                out.extend_from_slice(&element);
            }
        }
        Structured(json) => {
            let text = serde_json::to_vec(json)
                .map_err(|e| CodecError::UnsupportedType(e.to_string()))?;
            out.extend_from_slice(&text);
        }
    }
    Ok(())
}

/// Encodes a [`Value`] into a fresh vec. See [`encode`].
pub fn encode_full(value: &Value) -> Result<Vec<u8>, CodecError> {
    let mut out = Vec::new();
    encode(value, &mut out)?;
    Ok(out)
}

#[derive(Clone, Debug, PartialEq)]
/// One decoded value, borrowing from the input buffer where it can.
///
/// `Raw` and `List` are views into the original buffer; list elements are
/// the raw tagged sub-encodings, left for the caller to [`decode`] further.
/// Use [`Decoded::into_value`] when the result must outlive the buffer — that
/// is the point where copies happen.
pub enum Decoded<'a> {
    /// The payload, verbatim.
    Raw(&'a [u8]),
    /// A little-endian unsigned number.
    Number(u64),
    /// UTF-8 text; borrowed when the payload was valid UTF-8.
    Text(Cow<'a, str>),
    /// Tagged sub-encodings of the list's elements, in order.
    List(Vec<&'a [u8]>),
    /// The parsed JSON payload.
    Structured(serde_json::Value),
}

impl<'a> Decoded<'a> {
    /// The tag this value was decoded under.
    pub fn tag(&self) -> Tag {
        match self {
            Decoded::Raw(_) => Tag::Raw,
            Decoded::Number(_) => Tag::Number,
            Decoded::Text(_) => Tag::Text,
            Decoded::List(_) => Tag::List,
            Decoded::Structured(_) => Tag::Structured,
        }
    }

    /// Resolves this view into an owned [`Value`], recursively decoding list
    /// elements. This copies; prefer working with the borrowed form when the
    /// input buffer is still around.
    pub fn into_value(self) -> Result<Value, CodecError> {
        match self {
            Decoded::Raw(bs) => Ok(Raw(Bytes::from(bs))),
            Decoded::Number(n) => Ok(Number(n)),
            Decoded::Text(s) => Ok(Text(s.into_owned())),
            Decoded::List(elements) => {
                let mut out = Vec::with_capacity(elements.len());
                for element in elements {
                    out.push(decode(element)?.into_value()?);
                }
                Ok(List(out))
            }
            Decoded::Structured(json) => Ok(Structured(json)),
        }
    }
}

/// Decodes one tagged value from `input`, borrowing from it where possible.
///
/// The whole of `input` past the tag byte is the payload; there is no
/// trailing-data notion at this level. Failures:
///
/// * empty input — [`CodecError::MalformedInput`]
/// * tag byte outside the defined set — [`CodecError::UnknownTag`]
/// * list payload shorter than its own length prefixes declare —
///   [`CodecError::TruncatedLength`] / [`CodecError::TruncatedElement`]
/// * number payload wider than 8 bytes — [`CodecError::IntegerOverflow`]
/// * structured payload that is not JSON — [`CodecError::MalformedStructuredText`]
///
/// # Example
///
/// ```
/// use tagwire::prelude::*;
///
/// let decoded = decode(&[0x00, 0xaa, 0xbb]).unwrap();
///
/// assert_eq!(decoded, Decoded::Raw(&[0xaa, 0xbb]));
/// ```
pub fn decode(input: &[u8]) -> Result<Decoded, CodecError> {
    let (tag_byte, payload) = match input.split_first() {
        Some((tag_byte, payload)) => (*tag_byte, payload),
        None => return Err(CodecError::MalformedInput),
    };
    match Tag::from_byte(tag_byte) {
        Some(Tag::Raw) => Ok(Decoded::Raw(payload)),
        Some(Tag::Number) => Ok(Decoded::Number(bytes_to_int(payload, Endian::Little)?)),
        Some(Tag::Text) => Ok(Decoded::Text(transcode::utf8_decode(payload))),
        Some(Tag::List) => Ok(Decoded::List(split_elements(payload)?)),
        Some(Tag::Structured) => {
            let text = transcode::utf8_decode(payload);
            serde_json::from_str(&text)
                .map(Decoded::Structured)
                .map_err(|e| CodecError::MalformedStructuredText(e.to_string()))
        }
        None => Err(CodecError::UnknownTag(tag_byte)),
    }
}

/// Decodes a buffer all the way into an owned [`Value`].
///
/// Equivalent to `decode(input)?.into_value()`.
pub fn decode_value(input: &[u8]) -> Result<Value, CodecError> { decode(input)?.into_value() }

/// Walks a list payload, yielding each element's tagged sub-encoding.
///
/// Each element is preceded by an 8-byte little-endian length of its full
/// tagged encoding. The scan must land exactly on the payload end; a prefix
/// or element that overruns it is an error, never a silent truncation.
fn split_elements(payload: &[u8]) -> Result<Vec<&[u8]>, CodecError> {
    let mut elements = Vec::new();
    let mut offset = 0;
    while offset < payload.len() {
        if payload.len() - offset < LEN_PREFIX_WIDTH {
            return Err(CodecError::TruncatedLength { offset });
        }
        let mut prefix = [0; LEN_PREFIX_WIDTH];
        prefix.copy_from_slice(&payload[offset..offset + LEN_PREFIX_WIDTH]);
        let declared = u64::from_le_bytes(prefix);
        offset += LEN_PREFIX_WIDTH;

        let remaining = payload.len() - offset;
        if declared > remaining as u64 {
            return Err(CodecError::TruncatedElement {
                declared,
                remaining,
            });
        }
        elements.push(&payload[offset..offset + declared as usize]);
        offset += declared as usize;
    }
    Ok(elements)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(bytes: &[u8]) -> Value { Raw(Bytes::from(bytes)) }

    #[test]
    fn raw_layout() {
        let enc = encode_full(&raw(&[0xaa, 0xbb])).unwrap();
        assert_eq!(enc, vec![0x00, 0xaa, 0xbb]);
        assert_eq!(decode(&enc).unwrap(), Decoded::Raw(&[0xaa, 0xbb]));
    }

    #[test]
    fn text_layout() {
        let enc = encode_full(&Value::from("hi")).unwrap();
        assert_eq!(enc, vec![0x02, 0x68, 0x69]);
        assert_eq!(decode_value(&enc).unwrap(), Value::from("hi"));
    }

    #[test]
    fn number_packs_the_value() {
        let enc = encode_full(&Number(7)).unwrap();
        assert_eq!(enc, vec![0x01, 7, 0, 0, 0, 0, 0, 0, 0]);
        assert_eq!(decode_value(&enc).unwrap(), Number(7));
    }

    #[test]
    fn list_layout() {
        // two raw elements: [0xaa] and [0xbb, 0xcc]
        let enc = encode_full(&List(vec![raw(&[0xaa]), raw(&[0xbb, 0xcc])])).unwrap();

        let mut expected = vec![0x03];
        expected.extend_from_slice(&u64::to_le_bytes(2)); // first element is 2 bytes tagged
        expected.extend_from_slice(&[0x00, 0xaa]);
        expected.extend_from_slice(&u64::to_le_bytes(3)); // second is 3 bytes tagged
        expected.extend_from_slice(&[0x00, 0xbb, 0xcc]);
        assert_eq!(enc, expected);

        // the borrowed view yields the tagged sub-encodings
        match decode(&enc).unwrap() {
            Decoded::List(elements) => {
                assert_eq!(elements, vec![&[0x00, 0xaa][..], &[0x00, 0xbb, 0xcc][..]]);
            }
            other => panic!("expected a list, got {:?}", other),
        }
    }

    #[test]
    fn nested_lists() {
        let value = List(vec![
            List(vec![Number(1), Value::from("deep")]),
            raw(&[0xff]),
        ]);
        let enc = encode_full(&value).unwrap();
        assert_eq!(decode_value(&enc).unwrap(), value);
    }

    #[test]
    fn empty_list() {
        let enc = encode_full(&List(vec![])).unwrap();
        assert_eq!(enc, vec![0x03]);
        assert_eq!(decode_value(&enc).unwrap(), List(vec![]));
    }

    #[test]
    fn structured_round_trip() {
        let json: serde_json::Value =
            serde_json::from_str(r#"{"kind": "ping", "seq": 3, "tags": [1, 2]}"#).unwrap();
        let enc = encode_full(&Structured(json.clone())).unwrap();
        assert_eq!(enc[0], 0x04);
        assert_eq!(decode_value(&enc).unwrap(), Structured(json));
    }

    #[test]
    fn empty_input() {
        assert_eq!(decode(&[]), Err(CodecError::MalformedInput));
    }

    #[test]
    fn unknown_tags() {
        assert_eq!(decode(&[255]), Err(CodecError::UnknownTag(255)));
        assert_eq!(decode(&[5]), Err(CodecError::UnknownTag(5)));
    }

    #[test]
    fn truncated_length_prefix() {
        // list payload of 3 bytes cannot hold an 8-byte prefix
        assert_eq!(
            decode(&[0x03, 0x01, 0x02, 0x03]),
            Err(CodecError::TruncatedLength { offset: 0 })
        );
    }

    #[test]
    fn truncated_element() {
        // prefix declares 100 bytes, only 10 follow
        let mut input = vec![0x03];
        input.extend_from_slice(&u64::to_le_bytes(100));
        input.extend_from_slice(&[0; 10]);
        assert_eq!(
            decode(&input),
            Err(CodecError::TruncatedElement {
                declared: 100,
                remaining: 10,
            })
        );
    }

    #[test]
    fn truncated_second_prefix() {
        // one good element, then 3 stray bytes where a prefix should be
        let mut input = vec![0x03];
        input.extend_from_slice(&u64::to_le_bytes(2));
        input.extend_from_slice(&[0x00, 0xaa]);
        input.extend_from_slice(&[0x01, 0x02, 0x03]);
        assert_eq!(
            decode(&input),
            Err(CodecError::TruncatedLength { offset: 10 })
        );
    }

    #[test]
    fn oversized_number_payload() {
        let mut input = vec![0x01];
        input.extend_from_slice(&[0; 9]);
        assert!(decode(&input).is_err());
    }

    #[test]
    fn short_number_payload_unpacks() {
        // decode accepts any width up to 8
        assert_eq!(decode(&[0x01, 7]).unwrap(), Decoded::Number(7));
        assert_eq!(decode(&[0x01]).unwrap(), Decoded::Number(0));
    }

    #[test]
    fn malformed_structured_payload() {
        match decode(b"\x04{not json") {
            Err(CodecError::MalformedStructuredText(_)) => {}
            other => panic!("expected MalformedStructuredText, got {:?}", other),
        }
    }

    #[test]
    fn lenient_text_decode() {
        match decode(&[0x02, 0x68, 0xff]).unwrap() {
            Decoded::Text(s) => assert_eq!(s, "h\u{fffd}"),
            other => panic!("expected text, got {:?}", other),
        }
    }
}
