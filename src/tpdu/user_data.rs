// ABOUTME: User data header (TS 23.040 9.2.3.24) and the UDL-counted user data block
// ABOUTME: Information elements are {id, length, data} TLVs; concatenation lives in IE 0x00/0x08

use crate::codec::{self, CodecError, MAX_UD_OCTETS, MAX_UD_SEPTETS, Marshal, Unmarshal};
use crate::gsm7;
use crate::tpdu::dcs::{Alphabet, Dcs};
use bytes::{BufMut, BytesMut};
use std::io::Cursor;

/// Information element identifiers defined by TS 23.040 9.2.3.24
pub mod ie {
    /// Concatenated short message, 8-bit reference: {ref, total, seq}
    pub const CONCAT_8: u8 = 0x00;
    /// Application port addressing, 8-bit: {dest, source}
    pub const APP_PORT_8: u8 = 0x04;
    /// Application port addressing, 16-bit: {dest, source} big-endian
    pub const APP_PORT_16: u8 = 0x05;
    /// Concatenated short message, 16-bit reference: {ref_hi, ref_lo, total, seq}
    pub const CONCAT_16: u8 = 0x08;
    /// National language single shift table selection: {language id}
    pub const NAT_LANG_SINGLE_SHIFT: u8 = 0x24;
    /// National language locking shift table selection: {language id}
    pub const NAT_LANG_LOCKING_SHIFT: u8 = 0x25;
}

/// One information element within a user data header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InformationElement {
    pub id: u8,
    pub data: Vec<u8>,
}

/// Concatenation parameters carried by IE 0x00 or 0x08
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Concat {
    /// Reference shared by every segment of one message
    pub reference: u16,
    /// Total number of segments
    pub total: u8,
    /// This segment's 1-based index
    pub sequence: u8,
}

/// Application port pair carried by IE 0x04 or 0x05
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApplicationPort {
    pub destination: u16,
    pub source: u16,
}

/// A length-prefixed sequence of information elements at the start of the
/// user data, present when the UDHI flag is set
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UserDataHeader {
    pub elements: Vec<InformationElement>,
}

impl UserDataHeader {
    /// A header holding a single 8-bit concatenation IE
    pub fn concat8(reference: u8, total: u8, sequence: u8) -> Self {
        UserDataHeader {
            elements: vec![InformationElement {
                id: ie::CONCAT_8,
                data: vec![reference, total, sequence],
            }],
        }
    }

    /// A header holding a single 16-bit concatenation IE
    pub fn concat16(reference: u16, total: u8, sequence: u8) -> Self {
        let [hi, lo] = reference.to_be_bytes();
        UserDataHeader {
            elements: vec![InformationElement {
                id: ie::CONCAT_16,
                data: vec![hi, lo, total, sequence],
            }],
        }
    }

    /// Wire size in octets, including the header-length octet itself
    pub fn octet_len(&self) -> usize {
        1 + self
            .elements
            .iter()
            .map(|e| 2 + e.data.len())
            .sum::<usize>()
    }

    /// Septets this header displaces from a GSM 7-bit body, fill included
    pub fn septet_len(&self) -> usize {
        (self.octet_len() * 8).div_ceil(7)
    }

    /// Concatenation parameters, if either concat IE is present
    pub fn concat(&self) -> Option<Concat> {
        for element in &self.elements {
            match (element.id, element.data.as_slice()) {
                (ie::CONCAT_8, &[reference, total, sequence]) => {
                    return Some(Concat { reference: reference as u16, total, sequence });
                }
                (ie::CONCAT_16, &[hi, lo, total, sequence]) => {
                    return Some(Concat {
                        reference: u16::from_be_bytes([hi, lo]),
                        total,
                        sequence,
                    });
                }
                _ => {}
            }
        }
        None
    }

    /// The national language the body was encoded with, if a shift-table IE
    /// selects one. A locking shift takes precedence over a single shift.
    pub fn language(&self) -> Option<gsm7::Lang> {
        let mut single = None;
        for element in &self.elements {
            if let (ie::NAT_LANG_LOCKING_SHIFT, &[id]) = (element.id, element.data.as_slice()) {
                return gsm7::Lang::from_national_language_id(id);
            }
            if let (ie::NAT_LANG_SINGLE_SHIFT, &[id]) = (element.id, element.data.as_slice()) {
                single = gsm7::Lang::from_national_language_id(id);
            }
        }
        single
    }

    /// Application ports, if either port IE is present
    pub fn application_port(&self) -> Option<ApplicationPort> {
        for element in &self.elements {
            match (element.id, element.data.as_slice()) {
                (ie::APP_PORT_8, &[destination, source]) => {
                    return Some(ApplicationPort {
                        destination: destination as u16,
                        source: source as u16,
                    });
                }
                (ie::APP_PORT_16, &[dh, dl, sh, sl]) => {
                    return Some(ApplicationPort {
                        destination: u16::from_be_bytes([dh, dl]),
                        source: u16::from_be_bytes([sh, sl]),
                    });
                }
                _ => {}
            }
        }
        None
    }
}

impl Marshal for UserDataHeader {
    fn marshal(&self, buf: &mut BytesMut) -> Result<(), CodecError> {
        let udhl = self.octet_len() - 1;
        if udhl > u8::MAX as usize {
            return Err(CodecError::Overrun("udh"));
        }
        buf.put_u8(udhl as u8);
        for element in &self.elements {
            if element.data.len() > u8::MAX as usize {
                return Err(CodecError::Overrun("ie"));
            }
            buf.put_u8(element.id);
            buf.put_u8(element.data.len() as u8);
            buf.put_slice(&element.data);
        }
        Ok(())
    }
}

impl Unmarshal for UserDataHeader {
    fn unmarshal(buf: &mut Cursor<&[u8]>) -> Result<Self, CodecError> {
        let udhl = codec::get_u8(buf, "udhl")? as usize;
        let block = codec::take(buf, udhl, "udh")?;
        let mut elements = Vec::new();
        let mut at = 0;
        while at < block.len() {
            if at + 2 > block.len() {
                return Err(CodecError::Overrun("ie"));
            }
            let id = block[at];
            let len = block[at + 1] as usize;
            at += 2;
            if at + len > block.len() {
                return Err(CodecError::Overrun("ie"));
            }
            let data = block[at..at + len].to_vec();
            at += len;
            if !matches!(
                id,
                ie::CONCAT_8
                    | ie::CONCAT_16
                    | ie::APP_PORT_8
                    | ie::APP_PORT_16
                    | ie::NAT_LANG_SINGLE_SHIFT
                    | ie::NAT_LANG_LOCKING_SHIFT
            ) {
                tracing::debug!(id, len, "unrecognised information element");
            }
            elements.push(InformationElement { id, data });
        }
        Ok(UserDataHeader { elements })
    }
}

/// Marshal the UDL octet, optional header and body.
///
/// For the GSM 7-bit alphabet `ud` holds unpacked septets and UDL counts
/// septets (header converted to its septet equivalent); for every other
/// alphabet `ud` holds raw octets and UDL counts octets.
pub(crate) fn marshal_user_data(
    buf: &mut BytesMut,
    udh: Option<&UserDataHeader>,
    ud: &[u8],
    dcs: Dcs,
) -> Result<(), CodecError> {
    let alphabet = dcs.alphabet()?;
    let header_octets = udh.map(|h| h.octet_len()).unwrap_or(0);
    if alphabet == Alphabet::Gsm7 {
        let header_septets = udh.map(|h| h.septet_len()).unwrap_or(0);
        let udl = header_septets + ud.len();
        if udl > MAX_UD_SEPTETS {
            return Err(CodecError::Overrun("ud"));
        }
        buf.put_u8(udl as u8);
        if let Some(header) = udh {
            header.marshal(buf)?;
        }
        buf.put_slice(&gsm7::pack(ud, gsm7::fill_bits(header_octets)));
    } else {
        let udl = header_octets + ud.len();
        if udl > MAX_UD_OCTETS {
            return Err(CodecError::Overrun("ud"));
        }
        buf.put_u8(udl as u8);
        if let Some(header) = udh {
            header.marshal(buf)?;
        }
        buf.put_slice(ud);
    }
    Ok(())
}

/// Unmarshal the UDL octet, optional header and body. Returns the header (if
/// the UDHI flag was set) and the body, unpacked to septets for GSM 7-bit.
pub(crate) fn unmarshal_user_data(
    buf: &mut Cursor<&[u8]>,
    udhi: bool,
    dcs: Dcs,
) -> Result<(Option<UserDataHeader>, Vec<u8>), CodecError> {
    let udl = codec::get_u8(buf, "udl")? as usize;
    let alphabet = dcs.alphabet()?;
    let udh = if udhi {
        Some(UserDataHeader::unmarshal(buf)?)
    } else {
        None
    };
    let header_octets = udh.as_ref().map(|h| h.octet_len()).unwrap_or(0);
    if alphabet == Alphabet::Gsm7 {
        let header_septets = udh.as_ref().map(|h| h.septet_len()).unwrap_or(0);
        if udl > MAX_UD_SEPTETS || udl < header_septets {
            return Err(CodecError::invalid_at("udl", buf));
        }
        let body_septets = udl - header_septets;
        let fill = gsm7::fill_bits(header_octets);
        let body_octets = (body_septets * 7 + fill).div_ceil(8);
        let packed = codec::take(buf, body_octets, "ud")?;
        Ok((udh, gsm7::unpack(&packed, body_septets, fill)))
    } else {
        if udl > MAX_UD_OCTETS || udl < header_octets {
            return Err(CodecError::invalid_at("udl", buf));
        }
        let body = codec::take(buf, udl - header_octets, "ud")?;
        Ok((udh, body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn concat8_wire_form() {
        let udh = UserDataHeader::concat8(0x42, 2, 1);
        let bytes = udh.to_bytes().unwrap();
        assert_eq!(bytes.as_ref(), &[0x05, 0x00, 0x03, 0x42, 0x02, 0x01]);
        assert_eq!(udh.octet_len(), 6);
        assert_eq!(udh.septet_len(), 7);
        let mut cursor = Cursor::new(bytes.as_ref());
        let decoded = UserDataHeader::unmarshal(&mut cursor).unwrap();
        assert_eq!(decoded, udh);
        assert_eq!(
            decoded.concat(),
            Some(Concat { reference: 0x42, total: 2, sequence: 1 })
        );
    }

    #[test]
    fn concat16_wire_form() {
        let udh = UserDataHeader::concat16(0x1234, 3, 2);
        let bytes = udh.to_bytes().unwrap();
        assert_eq!(
            bytes.as_ref(),
            &[0x06, 0x08, 0x04, 0x12, 0x34, 0x03, 0x02]
        );
        assert_eq!(
            udh.concat(),
            Some(Concat { reference: 0x1234, total: 3, sequence: 2 })
        );
    }

    #[test]
    fn application_ports() {
        let udh = UserDataHeader {
            elements: vec![InformationElement {
                id: ie::APP_PORT_16,
                data: vec![0x0B, 0x84, 0x23, 0xF0],
            }],
        };
        assert_eq!(
            udh.application_port(),
            Some(ApplicationPort { destination: 0x0B84, source: 0x23F0 })
        );
        assert_eq!(udh.concat(), None);
    }

    #[test]
    fn unknown_elements_survive_round_trip() {
        let udh = UserDataHeader {
            elements: vec![
                InformationElement { id: 0x20, data: vec![0xAA] },
                InformationElement { id: ie::CONCAT_8, data: vec![1, 2, 1] },
            ],
        };
        let bytes = udh.to_bytes().unwrap();
        let mut cursor = Cursor::new(bytes.as_ref());
        assert_eq!(UserDataHeader::unmarshal(&mut cursor).unwrap(), udh);
    }

    #[test]
    fn truncated_element_overruns() {
        // udhl says 4 octets but the IE claims 3 data octets
        let data: &[u8] = &[0x04, 0x00, 0x03, 0x42, 0x02];
        let mut cursor = Cursor::new(data);
        assert_eq!(
            UserDataHeader::unmarshal(&mut cursor),
            Err(CodecError::Overrun("ie"))
        );
    }

    #[test]
    fn udhl_past_buffer_underflows() {
        let data: &[u8] = &[0x05, 0x00];
        let mut cursor = Cursor::new(data);
        assert_eq!(
            UserDataHeader::unmarshal(&mut cursor),
            Err(CodecError::Underflow("udh"))
        );
    }

    #[test]
    fn gsm7_user_data_with_header_round_trips() {
        let udh = UserDataHeader::concat8(0x10, 2, 2);
        let septets = gsm7::encode("hello", gsm7::Lang::Default.charset()).unwrap();
        let mut buf = BytesMut::new();
        marshal_user_data(&mut buf, Some(&udh), &septets, Dcs(0)).unwrap();
        // UDL: 7 header septets + 5 body septets
        assert_eq!(buf[0], 12);
        let frozen = buf.freeze();
        let mut cursor = Cursor::new(frozen.as_ref());
        let (decoded_udh, decoded_ud) = unmarshal_user_data(&mut cursor, true, Dcs(0)).unwrap();
        assert_eq!(decoded_udh, Some(udh));
        assert_eq!(decoded_ud, septets);
    }

    #[test]
    fn eight_bit_user_data_counts_octets() {
        let payload = vec![0xDE, 0xAD, 0xBE, 0xEF];
        let mut buf = BytesMut::new();
        marshal_user_data(&mut buf, None, &payload, Dcs(0x04)).unwrap();
        assert_eq!(buf[0], 4);
        let frozen = buf.freeze();
        let mut cursor = Cursor::new(frozen.as_ref());
        let (udh, ud) = unmarshal_user_data(&mut cursor, false, Dcs(0x04)).unwrap();
        assert_eq!(udh, None);
        assert_eq!(ud, payload);
    }

    #[test]
    fn oversize_body_overruns_at_marshal() {
        let septets = vec![0x41u8; 161];
        let mut buf = BytesMut::new();
        assert_eq!(
            marshal_user_data(&mut buf, None, &septets, Dcs(0)),
            Err(CodecError::Overrun("ud"))
        );
        let octets = vec![0u8; 141];
        let mut buf = BytesMut::new();
        assert_eq!(
            marshal_user_data(&mut buf, None, &octets, Dcs(0x04)),
            Err(CodecError::Overrun("ud"))
        );
    }

    #[test]
    fn udl_smaller_than_header_is_invalid() {
        // UDL 3 with a 6-octet (7-septet) header
        let data: &[u8] = &[0x03, 0x05, 0x00, 0x03, 0x42, 0x02, 0x01];
        let mut cursor = Cursor::new(data);
        assert!(matches!(
            unmarshal_user_data(&mut cursor, true, Dcs(0)),
            Err(CodecError::Invalid { field: "udl", .. })
        ));
    }
}
