//! Text-form conversions: UTF-8, Base64, and hex.
//!
//! These are the byte/text primitives the protocol layer builds messages out
//! of. UTF-8 decoding is deliberately lenient (invalid sequences become
//! replacement characters); Base64 and hex decoding are strict.

use crate::errors::CodecError;
use base64::{engine::general_purpose::STANDARD, Engine};
use bytes::Bytes;
use std::borrow::Cow;

/// Encodes a string as its UTF-8 bytes.
pub fn utf8_encode(s: &str) -> Bytes { Bytes::from(s) }

/// Decodes bytes as UTF-8 text.
///
/// Invalid sequences are replaced with U+FFFD rather than rejected, so this
/// never fails. Valid UTF-8 borrows from the input.
///
/// # Example
///
/// ```
/// use tagwire::transcode::utf8_decode;
///
/// assert_eq!(utf8_decode(b"hi"), "hi");
/// assert_eq!(utf8_decode(&[0x68, 0xff]), "h\u{fffd}");
/// ```
pub fn utf8_decode(bytes: &[u8]) -> Cow<str> { String::from_utf8_lossy(bytes) }

/// Encodes bytes as standard padded Base64.
pub fn base64_encode(bytes: &[u8]) -> String { STANDARD.encode(bytes) }

/// Decodes standard padded Base64.
///
/// Fails with [`CodecError::MalformedBase64`] on any input the standard
/// alphabet does not accept.
pub fn base64_decode(s: &str) -> Result<Vec<u8>, CodecError> {
    STANDARD
        .decode(s)
        .map_err(|e| CodecError::MalformedBase64(e.to_string()))
}

/// Encodes bytes as lowercase hex, two digits per byte, no separators.
pub fn hex_encode(bytes: &[u8]) -> String { hex::encode(bytes) }

/// Decodes a hex string into bytes.
///
/// Fails with [`CodecError::MalformedHex`] on invalid digits or odd-length
/// input; a trailing half-pair is never silently dropped.
///
/// # Example
///
/// ```
/// use tagwire::transcode::{hex_decode, hex_encode};
///
/// assert_eq!(hex_decode("aabb").unwrap(), vec![0xaa, 0xbb]);
/// assert_eq!(hex_encode(&[0xaa, 0xbb]), "aabb");
/// assert!(hex_decode("aab").is_err());
/// ```
pub fn hex_decode(s: &str) -> Result<Vec<u8>, CodecError> {
    hex::decode(s).map_err(|e| CodecError::MalformedHex(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn utf8_is_lenient() {
        assert_eq!(utf8_decode(&utf8_encode("héllo")), "héllo");
        // lone continuation byte
        assert_eq!(utf8_decode(&[0x80]), "\u{fffd}");
    }

    #[test]
    fn base64_round_trip() {
        let bytes = b"any carnal pleasure";
        assert_eq!(base64_decode(&base64_encode(bytes)).unwrap(), bytes);
        assert_eq!(base64_encode(b"M"), "TQ==");
    }

    #[test]
    fn base64_rejects_garbage() {
        match base64_decode("not!base64") {
            Err(CodecError::MalformedBase64(_)) => {}
            other => panic!("expected MalformedBase64, got {:?}", other),
        }
    }

    #[test]
    fn hex_forms() {
        assert_eq!(hex_encode(&[0x00, 0x0f, 0xff]), "000fff");
        assert_eq!(hex_decode("000fff").unwrap(), vec![0x00, 0x0f, 0xff]);
        // uppercase digits are accepted on the way in
        assert_eq!(hex_decode("AABB").unwrap(), vec![0xaa, 0xbb]);
    }

    #[test]
    fn hex_rejects_odd_length_and_bad_digits() {
        match hex_decode("abc") {
            Err(CodecError::MalformedHex(_)) => {}
            other => panic!("expected MalformedHex, got {:?}", other),
        }
        match hex_decode("zz") {
            Err(CodecError::MalformedHex(_)) => {}
            other => panic!("expected MalformedHex, got {:?}", other),
        }
    }
}
