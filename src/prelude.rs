pub use crate::{
    encoding::{decode, decode_value, encode, encode_full, Decoded},
    errors::CodecError,
    tag::Tag,
    transcode,
    util::{bytes_to_int, concat, int_to_bytes, Endian},
    verify::verify_all,
    Value,
};
pub use bytes::Bytes;
pub use std::convert::TryFrom;
