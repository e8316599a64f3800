use std::{error::Error, fmt};

#[derive(Debug, Clone, PartialEq, Eq)]
/// An error raised by the codec or one of its byte primitives.
///
/// All failures are local and synchronous; nothing is retried internally and
/// no partial results are returned.
pub enum CodecError {
    /// Encode was handed a value the structured-text serializer refused.
    UnsupportedType(String),
    /// Decode was handed an empty buffer.
    MalformedInput,
    /// Decode read a tag byte outside the defined set.
    UnknownTag(u8),
    /// A list payload ended where an 8-byte length prefix was due.
    TruncatedLength {
        /// Offset into the list payload where the prefix should start.
        offset: usize,
    },
    /// A list element's declared length exceeds the remaining payload.
    TruncatedElement {
        /// The length the prefix declared.
        declared: u64,
        /// The bytes actually remaining after the prefix.
        remaining: usize,
    },
    /// A structured payload failed to parse as JSON.
    MalformedStructuredText(String),
    /// Base64 input that does not decode.
    MalformedBase64(String),
    /// Hex input with invalid digits or an odd length.
    MalformedHex(String),
    /// An integer wider than the space allotted to it.
    IntegerOverflow {
        /// Bytes the integer occupies.
        needed: usize,
        /// Bytes available to hold it.
        width: usize,
    },
}

use CodecError::*;

impl Error for CodecError {}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            UnsupportedType(msg) => {
                write!(f, "value has no tag mapping: {}", msg)
            }
            MalformedInput => write!(f, "cannot decode an empty buffer"),
            UnknownTag(byte) => write!(f, "unknown tag byte: {}", byte),
            TruncatedLength { offset } => {
                write!(
                    f,
                    "list payload truncated: no room for a length prefix at offset {}",
                    offset
                )
            }
            TruncatedElement {
                declared,
                remaining,
            } => {
                write!(
                    f,
                    "list element declares {} bytes but only {} remain",
                    declared, remaining
                )
            }
            MalformedStructuredText(msg) => {
                write!(f, "structured payload is not valid JSON: {}", msg)
            }
            MalformedBase64(msg) => write!(f, "malformed base64: {}", msg),
            MalformedHex(msg) => write!(f, "malformed hex: {}", msg),
            IntegerOverflow { needed, width } => {
                write!(
                    f,
                    "integer needs {} bytes but only {} are available",
                    needed, width
                )
            }
        }
    }
}
