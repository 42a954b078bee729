// ABOUTME: SMS-STATUS-REPORT (TS 23.040 9.2.2.3): delivery outcome for a prior SUBMIT or COMMAND
// ABOUTME: Carries the original message reference, recipient, and a discharge time

use crate::codec::{self, CodecError, Marshal, Unmarshal};
use crate::tpdu::dcs::Dcs;
use crate::tpdu::user_data::{UserDataHeader, marshal_user_data, unmarshal_user_data};
use crate::tpdu::{Address, MTI_STATUS_REPORT, Timestamp, pi};
use bytes::{Buf, BufMut, BytesMut};
use std::io::Cursor;

/// A delivery report from the service centre for a previously submitted
/// message
#[derive(Debug, Clone, PartialEq)]
pub struct StatusReport {
    /// More messages to send (wire-inverted, as in DELIVER)
    pub mms: bool,
    /// Loop prevention
    pub lp: bool,
    /// Status report qualifier: set when this answers a COMMAND rather
    /// than a SUBMIT
    pub srq: bool,
    /// Reference of the message being reported on
    pub mr: u8,
    /// Recipient address of the original message
    pub ra: Address,
    /// Service centre timestamp of the original message
    pub scts: Timestamp,
    /// When the message reached its final state
    pub dt: Timestamp,
    /// Delivery status (TS 23.040 9.2.3.15); 0 means received by the SME
    pub st: u8,
    pub pid: Option<u8>,
    pub dcs: Option<Dcs>,
    pub udh: Option<UserDataHeader>,
    pub ud: Vec<u8>,
}

impl StatusReport {
    pub fn new(mr: u8, ra: Address, scts: Timestamp, dt: Timestamp, st: u8) -> Self {
        StatusReport {
            mms: false,
            lp: false,
            srq: false,
            mr,
            ra,
            scts,
            dt,
            st,
            pid: None,
            dcs: None,
            udh: None,
            ud: Vec::new(),
        }
    }

    /// Whether the original message reached the receiving entity
    pub fn delivered(&self) -> bool {
        self.st & 0x60 == 0
    }

    fn has_ud(&self) -> bool {
        !self.ud.is_empty() || self.udh.is_some()
    }

    fn has_trailer(&self) -> bool {
        self.pid.is_some() || self.dcs.is_some() || self.has_ud()
    }
}

impl Marshal for StatusReport {
    fn marshal(&self, buf: &mut BytesMut) -> Result<(), CodecError> {
        let mut first = MTI_STATUS_REPORT;
        if !self.mms {
            first |= 0x04;
        }
        if self.lp {
            first |= 0x08;
        }
        if self.srq {
            first |= 0x20;
        }
        if self.udh.is_some() {
            first |= 0x40;
        }
        buf.put_u8(first);
        buf.put_u8(self.mr);
        self.ra.marshal(buf)?;
        self.scts.marshal(buf)?;
        self.dt.marshal(buf)?;
        buf.put_u8(self.st);
        if self.has_trailer() {
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
        }
        Ok(())
    }
}

impl Unmarshal for StatusReport {
    fn unmarshal(buf: &mut Cursor<&[u8]>) -> Result<Self, CodecError> {
        let first = codec::get_u8(buf, "fo")?;
        let udhi = first & 0x40 != 0;
        let mr = codec::get_u8(buf, "mr")?;
        let ra = Address::unmarshal(buf)?;
        let scts = Timestamp::unmarshal(buf)?;
        let dt = Timestamp::unmarshal(buf)?;
        let st = codec::get_u8(buf, "st")?;
        // the parameter indicator and everything behind it are optional
        let (pid, dcs, udh, ud) = if buf.has_remaining() {
            let (has_pid, has_dcs, has_ud) = pi::split(codec::get_u8(buf, "pi")?);
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
            (pid, dcs, udh, ud)
        } else {
            (None, None, None, Vec::new())
        };
        Ok(StatusReport {
            mms: first & 0x04 == 0,
            lp: first & 0x08 != 0,
            srq: first & 0x20 != 0,
            mr,
            ra,
            scts,
            dt,
            st,
            pid,
            dcs,
            udh,
            ud,
        })
    }
}
