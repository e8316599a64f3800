use crate::errors::CodecError;

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
/// Byte order for integer packing.
pub enum Endian {
    /// Least significant byte first.
    Little,
    /// Most significant byte first.
    Big,
}

use Endian::*;

/// The number of bytes needed to hold `num`, at least 1.
fn byte_width(num: u64) -> usize {
    let len = 8 - u64::leading_zeros(num) as usize / 8;
    if len == 0 {
        1
    } else {
        len
    }
}

/// Converts a `u64` to the smallest possible vec of digits in little-endian order.
///
/// # Example
///
/// ```
/// use tagwire::util::u64_to_digits;
///
/// let some_vec = u64_to_digits(4);
///
/// // first byte should be 4
/// assert_eq!(some_vec[0], 4);
/// // there should only be one element
/// assert_eq!(some_vec.len(), 1);
/// ```
pub fn u64_to_digits(num: u64) -> Vec<u8> {
    let mut out = u64::to_le_bytes(num).to_vec();
    out.truncate(byte_width(num));
    out
}

/// Packs `num` into `len` bytes in the given byte order, or into the smallest
/// possible width when `len` is `None`.
///
/// Fails with [`CodecError::IntegerOverflow`] when an explicit `len` is
/// narrower than the value; high bytes are never dropped silently.
///
/// # Example
///
/// ```
/// use tagwire::util::{int_to_bytes, Endian};
///
/// assert_eq!(int_to_bytes(258, Some(4), Endian::Little).unwrap(), vec![2, 1, 0, 0]);
/// assert_eq!(int_to_bytes(258, Some(2), Endian::Big).unwrap(), vec![1, 2]);
/// assert_eq!(int_to_bytes(258, None, Endian::Little).unwrap(), vec![2, 1]);
///
/// // 258 does not fit in one byte
/// assert!(int_to_bytes(258, Some(1), Endian::Little).is_err());
/// ```
pub fn int_to_bytes(num: u64, len: Option<usize>, endian: Endian) -> Result<Vec<u8>, CodecError> {
    let needed = byte_width(num);
    let len = len.unwrap_or(needed);
    if needed > len {
        return Err(CodecError::IntegerOverflow { needed, width: len });
    }
    let mut out = vec![0; len];
    match endian {
        Little => out[..needed].copy_from_slice(&u64::to_le_bytes(num)[..needed]),
        Big => out[len - needed..].copy_from_slice(&u64::to_be_bytes(num)[8 - needed..]),
    }
    Ok(out)
}

/// Unpacks an unsigned integer from `bytes` in the given byte order.
///
/// An empty slice unpacks to 0. Fails with [`CodecError::IntegerOverflow`]
/// for inputs wider than 8 bytes.
///
/// # Example
///
/// ```
/// use tagwire::util::{bytes_to_int, Endian};
///
/// assert_eq!(bytes_to_int(&[2, 1], Endian::Little).unwrap(), 258);
/// assert_eq!(bytes_to_int(&[1, 2], Endian::Big).unwrap(), 258);
/// ```
pub fn bytes_to_int(bytes: &[u8], endian: Endian) -> Result<u64, CodecError> {
    if bytes.len() > 8 {
        return Err(CodecError::IntegerOverflow {
            needed: bytes.len(),
            width: 8,
        });
    }
    let mut buf = [0; 8];
    match endian {
        Little => {
            buf[..bytes.len()].copy_from_slice(bytes);
            Ok(u64::from_le_bytes(buf))
        }
        Big => {
            buf[8 - bytes.len()..].copy_from_slice(bytes);
            Ok(u64::from_be_bytes(buf))
        }
    }
}

/// Concatenates byte slices into a single freshly allocated vec.
pub fn concat(parts: &[&[u8]]) -> Vec<u8> {
    let mut out = Vec::with_capacity(parts.iter().map(|p| p.len()).sum());
    for part in parts {
        out.extend_from_slice(part);
    }
    out
}

#[macro_export]
/// Helper macro to make implementing `From` easier.
macro_rules! from_fn {
    ($to:ty, $from:ty, $fn:expr) => {
        impl From<$from> for $to {
            fn from(f: $from) -> $to { $fn(f) }
        }
    };
}

#[macro_export]
/// Helper macro to make implementing `From` easier.
macro_rules! from_as {
    ($to:tt, $from:ty, $as:ty) => {
        impl From<$from> for $to {
            fn from(f: $from) -> $to { $to::from(f as $as) }
        }
    };
}

#[macro_export]
/// Helper macro implementing `TryFrom` out of an enum constructor.
macro_rules! try_from_ctor {
    ($from:ident, $to:ty, $ctor:ident) => {
        impl std::convert::TryFrom<$from> for $to {
            type Error = $from;

            fn try_from(from: $from) -> Result<Self, $from> {
                match from {
                    $from::$ctor(v) => Ok(v),
                    other => Err(other),
                }
            }
        }
    };
}
