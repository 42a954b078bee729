// ABOUTME: The TPDU family: five message types plus acknowledgements behind one tagged enum
// ABOUTME: MTI bits and transfer direction together select the concrete decoder

mod address;
mod command;
mod dcs;
mod deliver;
mod status_report;
mod submit;
mod timestamp;
mod user_data;
mod validity_period;

pub use address::{Address, NumberingPlan, TypeOfNumber};
pub use command::{Command, command_type};
pub use dcs::{Alphabet, Dcs, MessageClass};
pub use deliver::{Deliver, DeliverReport};
pub use status_report::StatusReport;
pub use submit::{Submit, SubmitReport};
pub use timestamp::Timestamp;
pub use user_data::{
    ApplicationPort, Concat, InformationElement, UserDataHeader, ie,
};
pub use validity_period::{ValidityPeriod, Vpf, relative_duration, relative_octet};

use crate::codec::{self, CodecError, Direction, Marshal, Unmarshal};
use bytes::BytesMut;
use std::fmt;
use std::io::Cursor;

/// Message type indicator values (first-octet bits 1-0)
pub(crate) const MTI_DELIVER: u8 = 0b00;
pub(crate) const MTI_SUBMIT: u8 = 0b01;
pub(crate) const MTI_STATUS_REPORT: u8 = 0b10;
pub(crate) const MTI_COMMAND: u8 = 0b10;

/// Parameter indicator octet shared by the report types (TS 23.040 9.2.3.27)
pub(crate) mod pi {
    const PID: u8 = 0x01;
    const DCS: u8 = 0x02;
    const UDL: u8 = 0x04;

    pub(crate) fn octet(has_pid: bool, has_dcs: bool, has_ud: bool) -> u8 {
        let mut octet = 0;
        if has_pid {
            octet |= PID;
        }
        if has_dcs {
            octet |= DCS;
        }
        if has_ud {
            octet |= UDL;
        }
        octet
    }

    pub(crate) fn split(octet: u8) -> (bool, bool, bool) {
        (octet & PID != 0, octet & DCS != 0, octet & UDL != 0)
    }
}

/// Any TS 23.040 transfer protocol data unit
#[derive(Debug, Clone, PartialEq)]
pub enum Tpdu {
    Deliver(Deliver),
    DeliverReport(DeliverReport),
    Submit(Box<Submit>),
    SubmitReport(SubmitReport),
    StatusReport(Box<StatusReport>),
    Command(Command),
}

impl Tpdu {
    /// Decode a TPDU, selecting the concrete type from the MTI bits and the
    /// direction the octets travelled
    pub fn unmarshal(buf: &mut Cursor<&[u8]>, direction: Direction) -> Result<Self, CodecError> {
        let mti = codec::peek_u8(buf, "fo")? & 0x03;
        match (mti, direction) {
            (MTI_DELIVER, Direction::Mt) => Deliver::unmarshal(buf).map(Tpdu::Deliver),
            (MTI_DELIVER, Direction::Mo) => {
                DeliverReport::unmarshal(buf).map(Tpdu::DeliverReport)
            }
            (MTI_SUBMIT, Direction::Mo) => {
                Submit::unmarshal(buf).map(|s| Tpdu::Submit(Box::new(s)))
            }
            (MTI_SUBMIT, Direction::Mt) => SubmitReport::unmarshal(buf).map(Tpdu::SubmitReport),
            (MTI_STATUS_REPORT, Direction::Mt) => {
                StatusReport::unmarshal(buf).map(|s| Tpdu::StatusReport(Box::new(s)))
            }
            (MTI_COMMAND, Direction::Mo) => Command::unmarshal(buf).map(Tpdu::Command),
            _ => Err(CodecError::Invalid { field: "mti", offset: codec::offset(buf) }),
        }
    }

    /// Convenience wrapper over [`Tpdu::unmarshal`] for a plain byte slice.
    /// Returns the decoded TPDU and the octet count consumed.
    pub fn from_bytes(src: &[u8], direction: Direction) -> Result<(Self, usize), CodecError> {
        let mut cursor = Cursor::new(src);
        let tpdu = Self::unmarshal(&mut cursor, direction)?;
        Ok((tpdu, codec::offset(&cursor)))
    }
}

impl Marshal for Tpdu {
    fn marshal(&self, buf: &mut BytesMut) -> Result<(), CodecError> {
        match self {
            Tpdu::Deliver(t) => t.marshal(buf),
            Tpdu::DeliverReport(t) => t.marshal(buf),
            Tpdu::Submit(t) => t.marshal(buf),
            Tpdu::SubmitReport(t) => t.marshal(buf),
            Tpdu::StatusReport(t) => t.marshal(buf),
            Tpdu::Command(t) => t.marshal(buf),
        }
    }
}

impl fmt::Display for Tpdu {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tpdu::Deliver(t) => write!(f, "SMS-DELIVER from {}", t.oa),
            Tpdu::DeliverReport(t) => match t.fcs {
                Some(fcs) => write!(f, "SMS-DELIVER-REPORT error {fcs:#04x}"),
                None => write!(f, "SMS-DELIVER-REPORT ack"),
            },
            Tpdu::Submit(t) => write!(f, "SMS-SUBMIT to {}", t.da),
            Tpdu::SubmitReport(t) => match t.fcs {
                Some(fcs) => write!(f, "SMS-SUBMIT-REPORT error {fcs:#04x}"),
                None => write!(f, "SMS-SUBMIT-REPORT ack"),
            },
            Tpdu::StatusReport(t) => write!(f, "SMS-STATUS-REPORT for {}", t.ra),
            Tpdu::Command(t) => write!(f, "SMS-COMMAND {:#04x} to {}", t.ct, t.da),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_disambiguates_mti() {
        // SMS-DELIVER octets decode as a DELIVER when mobile-terminated
        let deliver: &[u8] = &[
            0x04, 0x0B, 0x91, 0x13, 0x46, 0x61, 0x00, 0x89, 0xF6, 0x00, 0x00, 0x20, 0x80, 0x62,
            0x91, 0x73, 0x14, 0x80, 0x00,
        ];
        let (tpdu, read) = Tpdu::from_bytes(deliver, Direction::Mt).unwrap();
        assert!(matches!(tpdu, Tpdu::Deliver(_)));
        assert_eq!(read, deliver.len());

        // the same leading bits on the MO side are a DELIVER-REPORT
        let report: &[u8] = &[0x00, 0x00];
        let (tpdu, _) = Tpdu::from_bytes(report, Direction::Mo).unwrap();
        assert!(matches!(tpdu, Tpdu::DeliverReport(_)));
    }

    #[test]
    fn reserved_mti_is_invalid() {
        let data: &[u8] = &[0x03];
        assert_eq!(
            Tpdu::from_bytes(data, Direction::Mt),
            Err(CodecError::Invalid { field: "mti", offset: 0 })
        );
        assert_eq!(
            Tpdu::from_bytes(data, Direction::Mo),
            Err(CodecError::Invalid { field: "mti", offset: 0 })
        );
    }

    #[test]
    fn status_report_mti_is_command_on_mo_side() {
        let command = Command::enquiry(1, 2, Address::international("123"));
        let bytes = command.to_bytes().unwrap();
        let (tpdu, _) = Tpdu::from_bytes(&bytes, Direction::Mo).unwrap();
        assert_eq!(tpdu, Tpdu::Command(command));
    }

    #[test]
    fn marshal_round_trips_through_the_enum() {
        let submit = Submit {
            mr: 9,
            da: Address::international("31641600986"),
            ud: crate::gsm7::encode("ping", crate::gsm7::Lang::Default.charset()).unwrap(),
            ..Submit::default()
        };
        let tpdu = Tpdu::Submit(Box::new(submit));
        let bytes = tpdu.to_bytes().unwrap();
        let (decoded, read) = Tpdu::from_bytes(&bytes, Direction::Mo).unwrap();
        assert_eq!(decoded, tpdu);
        assert_eq!(read, bytes.len());
    }
}
