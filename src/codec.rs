// TPDU codec core - separates wire-format plumbing from the message models
//
// This module provides the shared machinery for the 3GPP TS 23.040 octet
// format. Each message type and primitive implements the Marshal/Unmarshal
// traits rather than having all parsing logic in a monolithic frame parser.
// Decoding runs over a `Cursor` so the position doubles as the bytes-read
// count, which stays meaningful even when a decode fails partway.

use bytes::{Buf, BufMut, Bytes, BytesMut};
use std::io::Cursor;
use thiserror::Error;

/// Maximum user-data size of a single TPDU in octets
pub const MAX_UD_OCTETS: usize = 140;

/// Maximum user-data size of a single TPDU in septets (GSM 7-bit alphabet)
pub const MAX_UD_SEPTETS: usize = 160;

/// Transfer direction of a TPDU.
///
/// The two low bits of the first octet (MTI) only identify a message type
/// together with the direction of travel: `0b00` is SMS-DELIVER coming from
/// the service centre but SMS-DELIVER-REPORT going to it. Decoders therefore
/// need to be told which side of the air interface produced the bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Mobile-originated: mobile station to service centre
    Mo,
    /// Mobile-terminated: service centre to mobile station
    Mt,
}

/// Codec errors with the field tag and offset context needed to locate
/// malformed octets in a modem trace
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CodecError {
    #[error("field '{0}': input ran out before the field completed")]
    Underflow(&'static str),

    #[error("field '{0}': declared length exceeds the available space")]
    Overrun(&'static str),

    #[error("field '{field}' at offset {offset}: value outside its domain")]
    Invalid { field: &'static str, offset: usize },

    #[error("field '{field}' at offset {offset}: reserved bits must be zero")]
    NonZero { field: &'static str, offset: usize },

    #[error("bcd octet {0:#04x} holds a non-decimal nibble")]
    InvalidOctet(u8),

    #[error("ucs2 input must have an even number of octets")]
    InvalidLength,

    #[error("dangling high surrogate {0:#06x} at end of input")]
    DanglingSurrogate(u16),

    #[error("{0:?} has no encoding in the selected alphabet")]
    Unencodable(char),
}

impl CodecError {
    /// Shorthand for an `Invalid` at the octet just consumed from `buf`
    pub(crate) fn invalid_at(field: &'static str, buf: &Cursor<&[u8]>) -> Self {
        CodecError::Invalid {
            field,
            offset: (buf.position() as usize).saturating_sub(1),
        }
    }
}

/// Trait for values that marshal into TS 23.040 octets
pub trait Marshal {
    /// Append the wire form of this value to the buffer
    fn marshal(&self, buf: &mut BytesMut) -> Result<(), CodecError>;

    /// Marshal into a fresh buffer and freeze it
    fn to_bytes(&self) -> Result<Bytes, CodecError> {
        let mut buf = BytesMut::new();
        self.marshal(&mut buf)?;
        Ok(buf.freeze())
    }
}

/// Trait for values that unmarshal from TS 23.040 octets
///
/// Implementations consume strictly left to right; the cursor position on
/// return (success or failure) is the number of octets read.
pub trait Unmarshal: Sized {
    fn unmarshal(buf: &mut Cursor<&[u8]>) -> Result<Self, CodecError>;
}

/// Current read offset of the cursor
pub fn offset(buf: &Cursor<&[u8]>) -> usize {
    buf.position() as usize
}

/// Get a single octet, tagging an underflow with the field name
pub fn get_u8(buf: &mut Cursor<&[u8]>, field: &'static str) -> Result<u8, CodecError> {
    buf.has_remaining()
        .then(|| buf.get_u8())
        .ok_or(CodecError::Underflow(field))
}

/// Peek at the next octet without advancing
pub fn peek_u8(buf: &mut Cursor<&[u8]>, field: &'static str) -> Result<u8, CodecError> {
    buf.has_remaining()
        .then(|| {
            let pos = buf.position();
            let val = buf.get_u8();
            buf.set_position(pos);
            val
        })
        .ok_or(CodecError::Underflow(field))
}

/// Copy exactly `n` octets out of the buffer
pub fn take(buf: &mut Cursor<&[u8]>, n: usize, field: &'static str) -> Result<Vec<u8>, CodecError> {
    if buf.remaining() < n {
        return Err(CodecError::Underflow(field));
    }
    let mut out = vec![0u8; n];
    buf.copy_to_slice(&mut out);
    Ok(out)
}

/// Append a length-prefixed octet run (single-octet length)
pub fn put_counted(buf: &mut BytesMut, data: &[u8], field: &'static str) -> Result<(), CodecError> {
    if data.len() > u8::MAX as usize {
        return Err(CodecError::Overrun(field));
    }
    buf.put_u8(data.len() as u8);
    buf.put_slice(data);
    Ok(())
}
