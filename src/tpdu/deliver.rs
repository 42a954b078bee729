// ABOUTME: SMS-DELIVER (TS 23.040 9.2.2.1) and SMS-DELIVER-REPORT (9.2.2.1a)
// ABOUTME: DELIVER travels mobile-terminated; its report answers mobile-originated

use crate::codec::{self, CodecError, Marshal, Unmarshal};
use crate::tpdu::dcs::Dcs;
use crate::tpdu::user_data::{UserDataHeader, marshal_user_data, unmarshal_user_data};
use crate::tpdu::{Address, MTI_DELIVER, Timestamp, pi};
use bytes::{BufMut, BytesMut};
use std::io::Cursor;

/// A short message delivered from the service centre to the mobile
#[derive(Debug, Clone, PartialEq)]
pub struct Deliver {
    /// More messages to send. Note the wire inversion: the bit is 0 when
    /// more messages are waiting at the service centre.
    pub mms: bool,
    /// Loop prevention
    pub lp: bool,
    /// Status report indication
    pub sri: bool,
    /// Reply path
    pub rp: bool,
    /// Originating address
    pub oa: Address,
    pub pid: u8,
    pub dcs: Dcs,
    /// Service centre timestamp
    pub scts: Timestamp,
    pub udh: Option<UserDataHeader>,
    /// User data body: unpacked septets for GSM 7-bit, octets otherwise
    pub ud: Vec<u8>,
}

impl Deliver {
    pub fn new(oa: Address, scts: Timestamp) -> Self {
        Deliver {
            mms: false,
            lp: false,
            sri: false,
            rp: false,
            oa,
            pid: 0,
            dcs: Dcs::default(),
            scts,
            udh: None,
            ud: Vec::new(),
        }
    }

    /// Concatenation parameters from the header, if any
    pub fn concat(&self) -> Option<crate::tpdu::Concat> {
        self.udh.as_ref().and_then(|h| h.concat())
    }

    fn first_octet(&self) -> u8 {
        let mut octet = MTI_DELIVER;
        if !self.mms {
            octet |= 0x04;
        }
        if self.lp {
            octet |= 0x08;
        }
        if self.sri {
            octet |= 0x20;
        }
        if self.udh.is_some() {
            octet |= 0x40;
        }
        if self.rp {
            octet |= 0x80;
        }
        octet
    }
}

impl Marshal for Deliver {
    fn marshal(&self, buf: &mut BytesMut) -> Result<(), CodecError> {
        buf.put_u8(self.first_octet());
        self.oa.marshal(buf)?;
        buf.put_u8(self.pid);
        buf.put_u8(self.dcs.0);
        self.scts.marshal(buf)?;
        marshal_user_data(buf, self.udh.as_ref(), &self.ud, self.dcs)
    }
}

impl Unmarshal for Deliver {
    fn unmarshal(buf: &mut Cursor<&[u8]>) -> Result<Self, CodecError> {
        let first = codec::get_u8(buf, "fo")?;
        let udhi = first & 0x40 != 0;
        let oa = Address::unmarshal(buf)?;
        let pid = codec::get_u8(buf, "pid")?;
        let dcs = Dcs(codec::get_u8(buf, "dcs")?);
        let scts = Timestamp::unmarshal(buf)?;
        let (udh, ud) = unmarshal_user_data(buf, udhi, dcs)?;
        Ok(Deliver {
            mms: first & 0x04 == 0,
            lp: first & 0x08 != 0,
            sri: first & 0x20 != 0,
            rp: first & 0x80 != 0,
            oa,
            pid,
            dcs,
            scts,
            udh,
            ud,
        })
    }
}

/// The mobile's acknowledgement of a DELIVER: RP-ACK, or RP-ERROR when a
/// failure cause is present
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DeliverReport {
    /// Failure cause; `Some` makes this the RP-ERROR form. All defined
    /// causes have bit 7 set.
    pub fcs: Option<u8>,
    pub pid: Option<u8>,
    pub dcs: Option<Dcs>,
    pub udh: Option<UserDataHeader>,
    pub ud: Vec<u8>,
}

impl DeliverReport {
    /// A negative acknowledgement carrying a failure cause
    pub fn error(fcs: u8) -> Self {
        DeliverReport { fcs: Some(fcs), ..DeliverReport::default() }
    }

    fn has_ud(&self) -> bool {
        !self.ud.is_empty() || self.udh.is_some()
    }
}

impl Marshal for DeliverReport {
    fn marshal(&self, buf: &mut BytesMut) -> Result<(), CodecError> {
        let mut first = MTI_DELIVER;
        if self.udh.is_some() {
            first |= 0x40;
        }
        buf.put_u8(first);
        if let Some(fcs) = self.fcs {
            buf.put_u8(fcs);
        }
        buf.put_u8(pi::octet(self.pid.is_some(), self.dcs.is_some(), self.has_ud()));
        if let Some(pid) = self.pid {
            buf.put_u8(pid);
        }
        if let Some(dcs) = self.dcs {
            buf.put_u8(dcs.0);
        }
        if self.has_ud() {
            marshal_user_data(buf, self.udh.as_ref(), &self.ud, self.dcs.unwrap_or_default())?;
        }
        Ok(())
    }
}

impl Unmarshal for DeliverReport {
    fn unmarshal(buf: &mut Cursor<&[u8]>) -> Result<Self, CodecError> {
        let first = codec::get_u8(buf, "fo")?;
        let udhi = first & 0x40 != 0;
        let mut next = codec::get_u8(buf, "fcs")?;
        let fcs = if next & 0x80 != 0 {
            let cause = next;
            next = codec::get_u8(buf, "pi")?;
            Some(cause)
        } else {
            None
        };
        let (has_pid, has_dcs, has_ud) = pi::split(next);
        let pid = has_pid.then(|| codec::get_u8(buf, "pid")).transpose()?;
        let dcs = has_dcs
            .then(|| codec::get_u8(buf, "dcs"))
            .transpose()?
            .map(Dcs);
        let (udh, ud) = if has_ud {
            unmarshal_user_data(buf, udhi, dcs.unwrap_or_default())?
        } else {
            (None, Vec::new())
        };
        Ok(DeliverReport { fcs, pid, dcs, udh, ud })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gsm7;
    use chrono::{FixedOffset, TimeZone};

    // the often-cited "How are you?" delivery
    const HOW_ARE_YOU: &[u8] = &[
        0x04, 0x0B, 0x91, 0x13, 0x46, 0x61, 0x00, 0x89, 0xF6, 0x00, 0x00, 0x20, 0x80, 0x62, 0x91,
        0x73, 0x14, 0x80, 0x0C, 0xC8, 0xF7, 0x1D, 0x14, 0x96, 0x97, 0x41, 0xF9, 0x77, 0xFD, 0x07,
    ];

    #[test]
    fn unmarshal_reference_vector() {
        let mut cursor = Cursor::new(HOW_ARE_YOU);
        let deliver = Deliver::unmarshal(&mut cursor).unwrap();
        assert_eq!(codec::offset(&cursor), HOW_ARE_YOU.len());
        // first-octet bit 2 set means nothing further is waiting
        assert!(!deliver.mms);
        assert!(!deliver.sri);
        assert_eq!(deliver.oa, Address::international("31641600986"));
        assert_eq!(deliver.pid, 0);
        assert_eq!(deliver.dcs, Dcs(0));
        assert_eq!(
            gsm7::decode(&deliver.ud, gsm7::Lang::Default.charset()),
            "How are you?"
        );
        let zone = FixedOffset::east_opt(2 * 3600).unwrap();
        assert_eq!(
            deliver.scts,
            Timestamp(zone.with_ymd_and_hms(2002, 8, 26, 19, 37, 41).unwrap())
        );
    }

    #[test]
    fn marshal_reproduces_reference_vector() {
        let mut cursor = Cursor::new(HOW_ARE_YOU);
        let deliver = Deliver::unmarshal(&mut cursor).unwrap();
        assert_eq!(deliver.to_bytes().unwrap().as_ref(), HOW_ARE_YOU);
    }

    #[test]
    fn ucs2_deliver_round_trips() {
        let zone = FixedOffset::east_opt(0).unwrap();
        let mut deliver = Deliver::new(
            Address::international("31641600986"),
            Timestamp(zone.with_ymd_and_hms(2024, 6, 1, 8, 30, 0).unwrap()),
        );
        deliver.dcs = Dcs(0x08);
        deliver.ud = crate::ucs2::encode_str("Привет");
        let bytes = deliver.to_bytes().unwrap();
        let mut cursor = Cursor::new(bytes.as_ref());
        let decoded = Deliver::unmarshal(&mut cursor).unwrap();
        assert_eq!(decoded, deliver);
    }

    #[test]
    fn deliver_report_ack_round_trips() {
        let report = DeliverReport::default();
        let bytes = report.to_bytes().unwrap();
        assert_eq!(bytes.as_ref(), &[0x00, 0x00]);
        let mut cursor = Cursor::new(bytes.as_ref());
        assert_eq!(DeliverReport::unmarshal(&mut cursor).unwrap(), report);
    }

    #[test]
    fn deliver_report_error_round_trips() {
        // 0xD0: memory capacity exceeded
        let report = DeliverReport::error(0xD0);
        let bytes = report.to_bytes().unwrap();
        assert_eq!(bytes.as_ref(), &[0x00, 0xD0, 0x00]);
        let mut cursor = Cursor::new(bytes.as_ref());
        assert_eq!(DeliverReport::unmarshal(&mut cursor).unwrap(), report);
    }

    #[test]
    fn deliver_report_with_optional_fields() {
        let report = DeliverReport {
            pid: Some(0x40),
            dcs: Some(Dcs(0x04)),
            ud: vec![0x01, 0x02],
            ..DeliverReport::default()
        };
        let bytes = report.to_bytes().unwrap();
        assert_eq!(bytes[1], 0x07);
        let mut cursor = Cursor::new(bytes.as_ref());
        assert_eq!(DeliverReport::unmarshal(&mut cursor).unwrap(), report);
    }
}
