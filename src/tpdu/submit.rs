// ABOUTME: SMS-SUBMIT (TS 23.040 9.2.2.2) and SMS-SUBMIT-REPORT (9.2.2.2a)
// ABOUTME: SUBMIT travels mobile-originated; its report answers mobile-terminated

use crate::codec::{self, CodecError, Marshal, Unmarshal};
use crate::tpdu::dcs::Dcs;
use crate::tpdu::user_data::{UserDataHeader, marshal_user_data, unmarshal_user_data};
use crate::tpdu::validity_period::{ValidityPeriod, Vpf};
use crate::tpdu::{Address, MTI_SUBMIT, Timestamp, pi};
use bytes::{BufMut, BytesMut};
use std::io::Cursor;

/// A short message submitted by the mobile to the service centre
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Submit {
    /// Reject duplicates: ask the SC to refuse a message with the same MR
    /// and DA as one still pending
    pub rd: bool,
    /// Status report request
    pub srr: bool,
    /// Reply path
    pub rp: bool,
    /// Message reference
    pub mr: u8,
    /// Destination address
    pub da: Address,
    /// Protocol identifier
    pub pid: u8,
    /// Data coding scheme
    pub dcs: Dcs,
    pub vp: ValidityPeriod,
    pub udh: Option<UserDataHeader>,
    /// User data body: unpacked septets for GSM 7-bit, octets otherwise
    pub ud: Vec<u8>,
}

impl Submit {
    /// Concatenation parameters from the header, if any
    pub fn concat(&self) -> Option<crate::tpdu::Concat> {
        self.udh.as_ref().and_then(|h| h.concat())
    }

    fn first_octet(&self) -> u8 {
        let mut octet = MTI_SUBMIT;
        if self.rd {
            octet |= 0x04;
        }
        octet |= (self.vp.vpf() as u8) << 3;
        if self.srr {
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

impl Marshal for Submit {
    fn marshal(&self, buf: &mut BytesMut) -> Result<(), CodecError> {
        buf.put_u8(self.first_octet());
        buf.put_u8(self.mr);
        self.da.marshal(buf)?;
        buf.put_u8(self.pid);
        buf.put_u8(self.dcs.0);
        self.vp.marshal(buf)?;
        marshal_user_data(buf, self.udh.as_ref(), &self.ud, self.dcs)
    }
}

impl Unmarshal for Submit {
    fn unmarshal(buf: &mut Cursor<&[u8]>) -> Result<Self, CodecError> {
        let first = codec::get_u8(buf, "fo")?;
        let vpf = Vpf::try_from((first >> 3) & 0x03).expect("two bits cover the vpf domain");
        let udhi = first & 0x40 != 0;
        let mr = codec::get_u8(buf, "mr")?;
        let da = Address::unmarshal(buf)?;
        let pid = codec::get_u8(buf, "pid")?;
        let dcs = Dcs(codec::get_u8(buf, "dcs")?);
        let vp = ValidityPeriod::unmarshal(buf, vpf)?;
        let (udh, ud) = unmarshal_user_data(buf, udhi, dcs)?;
        Ok(Submit {
            rd: first & 0x04 != 0,
            srr: first & 0x20 != 0,
            rp: first & 0x80 != 0,
            mr,
            da,
            pid,
            dcs,
            vp,
            udh,
            ud,
        })
    }
}

/// The service centre's acknowledgement of a SUBMIT: RP-ACK, or RP-ERROR
/// when a failure cause is present
#[derive(Debug, Clone, PartialEq)]
pub struct SubmitReport {
    /// Failure cause; `Some` makes this the RP-ERROR form. All defined
    /// causes have bit 7 set.
    pub fcs: Option<u8>,
    pub scts: Timestamp,
    pub pid: Option<u8>,
    pub dcs: Option<Dcs>,
    pub udh: Option<UserDataHeader>,
    pub ud: Vec<u8>,
}

impl SubmitReport {
    /// A positive acknowledgement stamped with the service-centre time
    pub fn ack(scts: Timestamp) -> Self {
        SubmitReport { fcs: None, scts, pid: None, dcs: None, udh: None, ud: Vec::new() }
    }

    /// A negative acknowledgement carrying a failure cause
    pub fn error(scts: Timestamp, fcs: u8) -> Self {
        SubmitReport { fcs: Some(fcs), ..Self::ack(scts) }
    }

    fn has_ud(&self) -> bool {
        !self.ud.is_empty() || self.udh.is_some()
    }
}

impl Marshal for SubmitReport {
    fn marshal(&self, buf: &mut BytesMut) -> Result<(), CodecError> {
        let mut first = MTI_SUBMIT;
        if self.udh.is_some() {
            first |= 0x40;
        }
        buf.put_u8(first);
        if let Some(fcs) = self.fcs {
            buf.put_u8(fcs);
        }
        buf.put_u8(pi::octet(self.pid.is_some(), self.dcs.is_some(), self.has_ud()));
        self.scts.marshal(buf)?;
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

impl Unmarshal for SubmitReport {
    fn unmarshal(buf: &mut Cursor<&[u8]>) -> Result<Self, CodecError> {
        let first = codec::get_u8(buf, "fo")?;
        let udhi = first & 0x40 != 0;
        // defined failure causes occupy 0x80-0xFF, which disambiguates the
        // FCS octet from the parameter indicator that follows it
        let mut next = codec::get_u8(buf, "fcs")?;
        let fcs = if next & 0x80 != 0 {
            let cause = next;
            next = codec::get_u8(buf, "pi")?;
            Some(cause)
        } else {
            None
        };
        let (has_pid, has_dcs, has_ud) = pi::split(next);
        let scts = Timestamp::unmarshal(buf)?;
        let pid = has_pid
            .then(|| codec::get_u8(buf, "pid"))
            .transpose()?;
        let dcs = has_dcs
            .then(|| codec::get_u8(buf, "dcs"))
            .transpose()?
            .map(Dcs);
        let (udh, ud) = if has_ud {
            unmarshal_user_data(buf, udhi, dcs.unwrap_or_default())?
        } else {
            (None, Vec::new())
        };
        Ok(SubmitReport { fcs, scts, pid, dcs, udh, ud })
    }
}
