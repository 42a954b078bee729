// ABOUTME: UCS-2 (UTF-16BE) user-data codec with surrogate-pair validation
// ABOUTME: Decodes to code points, retaining the decoded prefix when input ends mid-pair

use crate::codec::CodecError;
use thiserror::Error;

/// Errors raised while decoding a UCS-2 octet stream
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Ucs2Error {
    /// UCS-2 characters are two octets each, so the input length must be even
    #[error("input must have an even number of octets")]
    InvalidLength,

    /// A high surrogate at the end of input with no low surrogate after it.
    /// Everything decoded up to that point is retained in `decoded`.
    #[error("dangling high surrogate {surrogate:#06x} at end of input")]
    DanglingSurrogate { surrogate: u16, decoded: Vec<char> },
}

impl From<Ucs2Error> for CodecError {
    fn from(e: Ucs2Error) -> CodecError {
        match e {
            Ucs2Error::InvalidLength => CodecError::InvalidLength,
            Ucs2Error::DanglingSurrogate { surrogate, .. } => {
                CodecError::DanglingSurrogate(surrogate)
            }
        }
    }
}

const HIGH_SURROGATE: std::ops::RangeInclusive<u16> = 0xD800..=0xDBFF;
const LOW_SURROGATE: std::ops::RangeInclusive<u16> = 0xDC00..=0xDFFF;

/// Decode a big-endian UCS-2 octet stream into code points.
///
/// Surrogate pairs combine into supplementary-plane code points. A malformed
/// pair decodes to U+FFFD; a high surrogate with nothing after it fails with
/// [`Ucs2Error::DanglingSurrogate`], which still carries the decoded prefix.
pub fn decode(src: &[u8]) -> Result<Vec<char>, Ucs2Error> {
    if src.len() % 2 != 0 {
        return Err(Ucs2Error::InvalidLength);
    }
    let mut out = Vec::with_capacity(src.len() / 2);
    let mut units = src
        .chunks_exact(2)
        .map(|p| u16::from_be_bytes([p[0], p[1]]));
    while let Some(unit) = units.next() {
        if HIGH_SURROGATE.contains(&unit) {
            let Some(low) = units.next() else {
                return Err(Ucs2Error::DanglingSurrogate { surrogate: unit, decoded: out });
            };
            if LOW_SURROGATE.contains(&low) {
                let cp = 0x10000
                    + (((unit as u32 - 0xD800) << 10) | (low as u32 - 0xDC00));
                // both halves are in range, so the code point is valid
                out.push(char::from_u32(cp).unwrap_or(char::REPLACEMENT_CHARACTER));
            } else {
                out.push(char::REPLACEMENT_CHARACTER);
            }
        } else if LOW_SURROGATE.contains(&unit) {
            out.push(char::REPLACEMENT_CHARACTER);
        } else {
            out.push(char::from_u32(unit as u32).unwrap_or(char::REPLACEMENT_CHARACTER));
        }
    }
    Ok(out)
}

/// Encode code points as a big-endian UCS-2 octet stream.
///
/// Supplementary-plane code points expand to surrogate pairs.
pub fn encode(src: &[char]) -> Vec<u8> {
    let mut out = Vec::with_capacity(src.len() * 2);
    let mut pair = [0u16; 2];
    for c in src {
        for unit in c.encode_utf16(&mut pair) {
            out.extend_from_slice(&unit.to_be_bytes());
        }
    }
    out
}

/// Encode a string as a big-endian UCS-2 octet stream
pub fn encode_str(src: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(src.len() * 2);
    for unit in src.encode_utf16() {
        out.extend_from_slice(&unit.to_be_bytes());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_empty() {
        assert_eq!(decode(&[]).unwrap(), Vec::<char>::new());
    }

    #[test]
    fn decode_odd_length() {
        assert_eq!(decode(&[1, 2, 3]), Err(Ucs2Error::InvalidLength));
    }

    #[test]
    fn decode_mixed_bmp() {
        let src = [
            0x4F, 0x60, 0x59, 0x7D, 0xFF, 0x01, 0x00, 0x48, 0x00, 0x6F, 0x00, 0x77, 0x00, 0x64,
            0x00, 0x79,
        ];
        let expected: Vec<char> = "你好！Howdy".chars().collect();
        assert_eq!(decode(&src).unwrap(), expected);
    }

    #[test]
    fn decode_surrogate_pair() {
        // U+1F601 grinning face
        assert_eq!(decode(&[0xD8, 0x3D, 0xDE, 0x01]).unwrap(), vec!['\u{1F601}']);
    }

    #[test]
    fn decode_dangling_surrogate_keeps_prefix() {
        let src = [
            0x00, 0x48, 0x00, 0x6F, 0x00, 0x77, 0x00, 0x64, 0x00, 0x79, 0xD8, 0x3D,
        ];
        let err = decode(&src).unwrap_err();
        assert_eq!(
            err,
            Ucs2Error::DanglingSurrogate {
                surrogate: 0xD83D,
                decoded: "Howdy".chars().collect(),
            }
        );
        assert_eq!(CodecError::from(err), CodecError::DanglingSurrogate(0xD83D));
    }

    #[test]
    fn decode_lone_low_surrogate_is_replacement() {
        assert_eq!(decode(&[0xDC, 0x00]).unwrap(), vec!['\u{FFFD}']);
    }

    #[test]
    fn encode_surrogate_pair() {
        assert_eq!(encode(&['\u{1F601}']), vec![0xD8, 0x3D, 0xDE, 0x01]);
    }

    #[test]
    fn encode_decode_round_trip() {
        let text: Vec<char> = "你好！Howdy 😁".chars().collect();
        let bytes = encode(&text);
        assert_eq!(decode(&bytes).unwrap(), text);
        assert_eq!(encode_str("Howdy"), encode(&"Howdy".chars().collect::<Vec<_>>()));
    }
}
