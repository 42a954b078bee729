// ABOUTME: TS 23.040 9.1.2.5 address fields with TON/NPI validation
// ABOUTME: E.164 digits pack as BCD semi-octets, alphanumeric identities as GSM 7-bit septets

use crate::bcd;
use crate::codec::{self, CodecError, Marshal, Unmarshal};
use crate::gsm7;
use bytes::{BufMut, BytesMut};
use num_enum::TryFromPrimitive;
use std::fmt;
use std::io::Cursor;

/// Type of Number (TON) field, bits 6-4 of the type-of-address octet.
///
/// Value `0b111` is reserved for extension and rejected on decode.
#[derive(TryFromPrimitive)]
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TypeOfNumber {
    /// Unknown type - use when the numbering format is not known
    Unknown = 0b000,

    /// International number (ITU-T E.164), country code first
    International = 0b001,

    /// National number without country code
    National = 0b010,

    /// Network-specific number for operator-defined addressing
    NetworkSpecific = 0b011,

    /// Subscriber number, meaningful only within the serving network
    SubscriberNumber = 0b100,

    /// Alphanumeric identity, packed with the GSM 7-bit default alphabet
    Alphanumeric = 0b101,

    /// Abbreviated short-dial number
    Abbreviated = 0b110,
}

/// Numbering Plan Identification (NPI) field, bits 3-0 of the
/// type-of-address octet
#[derive(TryFromPrimitive)]
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum NumberingPlan {
    Unknown = 0b0000,
    /// ISDN/telephone numbering plan (ITU-T E.164/E.163)
    Isdn = 0b0001,
    /// Data numbering plan (ITU-T X.121)
    Data = 0b0011,
    /// Telex numbering plan
    Telex = 0b0100,
    National = 0b1000,
    Private = 0b1001,
}

impl Default for TypeOfNumber {
    fn default() -> Self {
        TypeOfNumber::Unknown
    }
}

impl Default for NumberingPlan {
    fn default() -> Self {
        NumberingPlan::Unknown
    }
}

/// An originating, destination or recipient address.
///
/// Equality is value equality over (TON, NPI, digits) so addresses can key
/// the reassembly map directly.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Address {
    pub ton: TypeOfNumber,
    pub npi: NumberingPlan,
    /// Decimal digits, or free text for an alphanumeric TON
    pub addr: String,
}

impl Address {
    pub fn new(ton: TypeOfNumber, npi: NumberingPlan, addr: &str) -> Self {
        Address { ton, npi, addr: addr.to_owned() }
    }

    /// An international E.164 number, ISDN plan
    pub fn international(digits: &str) -> Self {
        Address::new(TypeOfNumber::International, NumberingPlan::Isdn, digits)
    }

    /// An alphanumeric sender identity
    pub fn alphanumeric(text: &str) -> Self {
        Address::new(TypeOfNumber::Alphanumeric, NumberingPlan::Unknown, text)
    }

    /// The type-of-address octet: bit 7 set, TON in 6-4, NPI in 3-0
    pub fn type_octet(&self) -> u8 {
        0x80 | ((self.ton as u8) << 4) | self.npi as u8
    }

    /// Address-value octets: BCD semi-octets, or packed septets when
    /// alphanumeric
    fn value_octets(&self) -> Result<Vec<u8>, CodecError> {
        if self.ton == TypeOfNumber::Alphanumeric {
            let septets = gsm7::encode(&self.addr, gsm7::Lang::Default.charset())?;
            Ok(gsm7::pack(&septets, 0))
        } else {
            bcd::encode_digits(&self.addr)
        }
    }

    /// The length octet: digit count, or septet count when alphanumeric
    fn length_value(&self) -> Result<usize, CodecError> {
        if self.ton == TypeOfNumber::Alphanumeric {
            gsm7::encoded_len(&self.addr, gsm7::Lang::Default.charset())
        } else {
            Ok(self.addr.chars().count())
        }
    }
}

impl Marshal for Address {
    fn marshal(&self, buf: &mut BytesMut) -> Result<(), CodecError> {
        let len = self.length_value()?;
        if len > u8::MAX as usize {
            return Err(CodecError::Overrun("addr"));
        }
        buf.put_u8(len as u8);
        buf.put_u8(self.type_octet());
        buf.put_slice(&self.value_octets()?);
        Ok(())
    }
}

impl Unmarshal for Address {
    fn unmarshal(buf: &mut Cursor<&[u8]>) -> Result<Self, CodecError> {
        let len = codec::get_u8(buf, "addr-len")? as usize;
        let toa = codec::get_u8(buf, "toa")?;
        if toa & 0x80 == 0 {
            return Err(CodecError::invalid_at("toa", buf));
        }
        let ton = TypeOfNumber::try_from((toa >> 4) & 0x07)
            .map_err(|_| CodecError::invalid_at("ton", buf))?;
        let npi = NumberingPlan::try_from(toa & 0x0F)
            .map_err(|_| CodecError::invalid_at("npi", buf))?;
        let addr = if ton == TypeOfNumber::Alphanumeric {
            let octets = codec::take(buf, (len * 7).div_ceil(8), "addr")?;
            let septets = gsm7::unpack(&octets, len, 0);
            gsm7::decode(&septets, gsm7::Lang::Default.charset())
        } else {
            let octets = codec::take(buf, len.div_ceil(2), "addr")?;
            bcd::decode_digits(&octets, len)?
        };
        Ok(Address { ton, npi, addr })
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.ton == TypeOfNumber::International {
            write!(f, "+{}", self.addr)
        } else {
            write!(f, "{}", self.addr)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::offset;

    #[test]
    fn international_number_wire_form() {
        let addr = Address::international("46708251358");
        let bytes = addr.to_bytes().unwrap();
        assert_eq!(
            bytes.as_ref(),
            &[0x0B, 0x91, 0x64, 0x07, 0x28, 0x15, 0x53, 0xF8]
        );
        let mut cursor = Cursor::new(bytes.as_ref());
        let decoded = Address::unmarshal(&mut cursor).unwrap();
        assert_eq!(decoded, addr);
        assert_eq!(offset(&cursor), bytes.len());
    }

    #[test]
    fn alphanumeric_sender_round_trips() {
        let addr = Address::alphanumeric("Design@Home");
        let bytes = addr.to_bytes().unwrap();
        // length counts septets of the packed form
        assert_eq!(bytes[0], 11);
        assert_eq!(bytes[1], 0xD0);
        let mut cursor = Cursor::new(bytes.as_ref());
        assert_eq!(Address::unmarshal(&mut cursor).unwrap(), addr);
    }

    #[test]
    fn empty_address() {
        let addr = Address::default();
        let bytes = addr.to_bytes().unwrap();
        assert_eq!(bytes.as_ref(), &[0x00, 0x80]);
        let mut cursor = Cursor::new(bytes.as_ref());
        assert_eq!(Address::unmarshal(&mut cursor).unwrap(), addr);
    }

    #[test]
    fn reserved_ton_rejected() {
        let data: &[u8] = &[0x02, 0xF1, 0x21];
        let mut cursor = Cursor::new(data);
        assert_eq!(
            Address::unmarshal(&mut cursor),
            Err(CodecError::Invalid { field: "ton", offset: 1 })
        );
    }

    #[test]
    fn unassigned_npi_rejected() {
        let data: &[u8] = &[0x02, 0x9F, 0x21];
        let mut cursor = Cursor::new(data);
        assert_eq!(
            Address::unmarshal(&mut cursor),
            Err(CodecError::Invalid { field: "npi", offset: 1 })
        );
    }

    #[test]
    fn cleared_high_bit_rejected() {
        let data: &[u8] = &[0x02, 0x11, 0x21];
        let mut cursor = Cursor::new(data);
        assert_eq!(
            Address::unmarshal(&mut cursor),
            Err(CodecError::Invalid { field: "toa", offset: 1 })
        );
    }

    #[test]
    fn digit_truncation_underflows() {
        let data: &[u8] = &[0x06, 0x91, 0x21];
        let mut cursor = Cursor::new(data);
        assert_eq!(
            Address::unmarshal(&mut cursor),
            Err(CodecError::Underflow("addr"))
        );
    }

    #[test]
    fn display_forms() {
        assert_eq!(Address::international("31641600986").to_string(), "+31641600986");
        assert_eq!(Address::alphanumeric("INFOSMS").to_string(), "INFOSMS");
    }
}
