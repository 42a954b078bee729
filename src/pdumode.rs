// ABOUTME: PDU-mode framing: the SMSC address prefix a modem expects before the TPDU
// ABOUTME: Uniquely here the length octet counts the octets that follow, not the digits

use crate::bcd;
use crate::codec::{self, CodecError, Marshal, Unmarshal};
use crate::tpdu::{Address, NumberingPlan, TypeOfNumber};
use bytes::{BufMut, BytesMut};
use std::io::Cursor;

/// The service centre address prefixed to a PDU-mode frame.
///
/// Same wire layout as a TPDU [`Address`] except for the length octet, which
/// counts the octets that follow it (type octet plus packed digits). A zero
/// length means "use the SIM's default service centre" and carries no type
/// octet at all.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct SmscAddress(pub Address);

impl SmscAddress {
    pub fn international(digits: &str) -> Self {
        SmscAddress(Address::international(digits))
    }

    /// Defer to the service centre already configured on the SIM
    pub fn sim_default() -> Self {
        SmscAddress::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.addr.is_empty()
    }
}

impl Marshal for SmscAddress {
    fn marshal(&self, buf: &mut BytesMut) -> Result<(), CodecError> {
        if self.is_empty() {
            buf.put_u8(0);
            return Ok(());
        }
        let digits = bcd::encode_digits(&self.0.addr)?;
        buf.put_u8(digits.len() as u8 + 1);
        buf.put_u8(self.0.type_octet());
        buf.put_slice(&digits);
        Ok(())
    }
}

impl Unmarshal for SmscAddress {
    fn unmarshal(buf: &mut Cursor<&[u8]>) -> Result<Self, CodecError> {
        let len = codec::get_u8(buf, "smsc-len")? as usize;
        if len == 0 {
            return Ok(SmscAddress::sim_default());
        }
        let toa = codec::get_u8(buf, "smsc-toa")?;
        if toa & 0x80 == 0 {
            return Err(CodecError::invalid_at("smsc-toa", buf));
        }
        let ton = TypeOfNumber::try_from((toa >> 4) & 0x07)
            .map_err(|_| CodecError::invalid_at("smsc-ton", buf))?;
        let npi = NumberingPlan::try_from(toa & 0x0F)
            .map_err(|_| CodecError::invalid_at("smsc-npi", buf))?;
        let octets = codec::take(buf, len - 1, "smsc-addr")?;
        let mut digit_count = octets.len() * 2;
        if let Some(last) = octets.last() {
            if last >> 4 == bcd::PAD {
                digit_count -= 1;
            }
        }
        let addr = bcd::decode_digits(&octets, digit_count)?;
        Ok(SmscAddress(Address { ton, npi, addr }))
    }
}

/// Prefix the marshalled SMSC address to an already-marshalled TPDU
pub fn encode(smsc: &SmscAddress, tpdu: &[u8]) -> Result<Vec<u8>, CodecError> {
    let mut buf = BytesMut::with_capacity(tpdu.len() + 12);
    smsc.marshal(&mut buf)?;
    buf.put_slice(tpdu);
    Ok(buf.to_vec())
}

/// Split a PDU-mode frame into its SMSC address and the untouched TPDU octets
pub fn decode(src: &[u8]) -> Result<(SmscAddress, &[u8]), CodecError> {
    let mut cursor = Cursor::new(src);
    let smsc = SmscAddress::unmarshal(&mut cursor)?;
    Ok((smsc, &src[codec::offset(&cursor)..]))
}

/// Encode a frame into the uppercase hex string handed to the modem
pub fn encode_to_str(smsc: &SmscAddress, tpdu: &[u8]) -> Result<String, CodecError> {
    Ok(hex::encode_upper(encode(smsc, tpdu)?))
}

/// Decode the hex string a modem produced into the SMSC address and TPDU
/// octets
pub fn decode_str(frame: &str) -> Result<(SmscAddress, Vec<u8>), CodecError> {
    let octets = hex::decode(frame.trim()).map_err(|e| match e {
        hex::FromHexError::InvalidHexCharacter { index, .. } => {
            CodecError::Invalid { field: "hex", offset: index / 2 }
        }
        _ => CodecError::InvalidLength,
    })?;
    let (smsc, tpdu) = decode(&octets)?;
    Ok((smsc, tpdu.to_vec()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_counts_octets_not_digits() {
        let smsc = SmscAddress::international("31624000000");
        let bytes = smsc.to_bytes().unwrap();
        // 6 packed-digit octets + 1 type octet
        assert_eq!(
            bytes.as_ref(),
            &[0x07, 0x91, 0x13, 0x26, 0x04, 0x00, 0x00, 0xF0]
        );
        let mut cursor = Cursor::new(bytes.as_ref());
        assert_eq!(SmscAddress::unmarshal(&mut cursor).unwrap(), smsc);
    }

    #[test]
    fn even_digit_count_round_trips() {
        let smsc = SmscAddress::international("4670825135");
        let bytes = smsc.to_bytes().unwrap();
        assert_eq!(bytes[0], 6);
        let mut cursor = Cursor::new(bytes.as_ref());
        assert_eq!(SmscAddress::unmarshal(&mut cursor).unwrap(), smsc);
    }

    #[test]
    fn empty_smsc_is_one_zero_octet() {
        let bytes = SmscAddress::sim_default().to_bytes().unwrap();
        assert_eq!(bytes.as_ref(), &[0x00]);
        let (smsc, rest) = decode(&[0x00, 0xAA, 0xBB]).unwrap();
        assert!(smsc.is_empty());
        assert_eq!(rest, &[0xAA, 0xBB]);
    }

    #[test]
    fn decode_leaves_tpdu_untouched() {
        let frame: &[u8] = &[
            0x07, 0x91, 0x13, 0x26, 0x04, 0x00, 0x00, 0xF0, 0x04, 0x0B, 0x91,
        ];
        let (smsc, tpdu) = decode(frame).unwrap();
        assert_eq!(smsc, SmscAddress::international("31624000000"));
        assert_eq!(tpdu, &[0x04, 0x0B, 0x91]);
    }

    #[test]
    fn hex_frame_round_trips_uppercase() {
        let smsc = SmscAddress::international("31624000000");
        let tpdu = [0x01, 0x00, 0x02, 0xAB];
        let frame = encode_to_str(&smsc, &tpdu).unwrap();
        assert_eq!(frame, "07911326040000F0010002AB");
        let (decoded, rest) = decode_str(&frame).unwrap();
        assert_eq!(decoded, smsc);
        assert_eq!(rest, tpdu);
    }

    #[test]
    fn bad_hex_reports_octet_offset() {
        assert_eq!(
            decode_str("07911G"),
            Err(CodecError::Invalid { field: "hex", offset: 2 })
        );
        assert_eq!(decode_str("079"), Err(CodecError::InvalidLength));
    }

    #[test]
    fn truncated_smsc_underflows() {
        assert_eq!(
            decode(&[0x07, 0x91, 0x13]),
            Err(CodecError::Underflow("smsc-addr"))
        );
    }
}
