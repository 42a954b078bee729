// ABOUTME: SMS-COMMAND (TS 23.040 9.2.2.4): mobile-originated operations on stored messages
// ABOUTME: Command data is an octet-counted blob; no DCS applies

use crate::codec::{self, CodecError, Marshal, Unmarshal};
use crate::tpdu::{Address, MTI_COMMAND};
use bytes::{BufMut, BytesMut};
use std::io::Cursor;

/// Command types from TS 23.040 9.2.3.19
pub mod command_type {
    /// Enquire about a previously submitted message
    pub const ENQUIRY: u8 = 0x00;
    /// Cancel a pending status report request
    pub const CANCEL_SRR: u8 = 0x01;
    /// Delete a previously submitted message
    pub const DELETE: u8 = 0x02;
    /// Enable a previously requested status report
    pub const ENABLE_SRR: u8 = 0x03;
}

/// An operation on a previously submitted message, addressed by message
/// number and destination
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Command {
    /// Status report request
    pub srr: bool,
    /// Message reference of this command
    pub mr: u8,
    pub pid: u8,
    /// Command type
    pub ct: u8,
    /// Message number of the message the command operates on
    pub mn: u8,
    /// Destination of the original message
    pub da: Address,
    /// Command data, raw octets
    pub cd: Vec<u8>,
    pub udh: Option<crate::tpdu::UserDataHeader>,
}

impl Command {
    pub fn enquiry(mr: u8, mn: u8, da: Address) -> Self {
        Command { mr, mn, da, ct: command_type::ENQUIRY, ..Command::default() }
    }
}

impl Marshal for Command {
    fn marshal(&self, buf: &mut BytesMut) -> Result<(), CodecError> {
        let mut first = MTI_COMMAND;
        if self.srr {
            first |= 0x20;
        }
        if self.udh.is_some() {
            first |= 0x40;
        }
        buf.put_u8(first);
        buf.put_u8(self.mr);
        buf.put_u8(self.pid);
        buf.put_u8(self.ct);
        buf.put_u8(self.mn);
        self.da.marshal(buf)?;
        match &self.udh {
            Some(udh) => {
                let header = udh.to_bytes()?;
                if header.len() + self.cd.len() > u8::MAX as usize {
                    return Err(CodecError::Overrun("cd"));
                }
                buf.put_u8((header.len() + self.cd.len()) as u8);
                buf.put_slice(&header);
                buf.put_slice(&self.cd);
                Ok(())
            }
            None => codec::put_counted(buf, &self.cd, "cd"),
        }
    }
}

impl Unmarshal for Command {
    fn unmarshal(buf: &mut Cursor<&[u8]>) -> Result<Self, CodecError> {
        let first = codec::get_u8(buf, "fo")?;
        let udhi = first & 0x40 != 0;
        let mr = codec::get_u8(buf, "mr")?;
        let pid = codec::get_u8(buf, "pid")?;
        let ct = codec::get_u8(buf, "ct")?;
        let mn = codec::get_u8(buf, "mn")?;
        let da = Address::unmarshal(buf)?;
        let cdl = codec::get_u8(buf, "cdl")? as usize;
        let (udh, cd) = if udhi {
            let before = codec::offset(buf);
            let udh = crate::tpdu::UserDataHeader::unmarshal(buf)?;
            let header_len = codec::offset(buf) - before;
            if cdl < header_len {
                return Err(CodecError::invalid_at("cdl", buf));
            }
            (Some(udh), codec::take(buf, cdl - header_len, "cd")?)
        } else {
            (None, codec::take(buf, cdl, "cd")?)
        };
        Ok(Command {
            srr: first & 0x20 != 0,
            mr,
            pid,
            ct,
            mn,
            da,
            cd,
            udh,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enquiry_round_trips() {
        let command = Command::enquiry(0x05, 0x01, Address::international("46708251358"));
        let bytes = command.to_bytes().unwrap();
        assert_eq!(bytes[0], 0x02);
        assert_eq!(&bytes[1..5], &[0x05, 0x00, 0x00, 0x01]);
        // empty command data
        assert_eq!(bytes[bytes.len() - 1], 0x00);
        let mut cursor = Cursor::new(bytes.as_ref());
        assert_eq!(Command::unmarshal(&mut cursor).unwrap(), command);
    }

    #[test]
    fn command_data_round_trips() {
        let command = Command {
            srr: true,
            ct: command_type::DELETE,
            cd: vec![0x01, 0x02, 0x03],
            da: Address::international("123"),
            ..Command::default()
        };
        let bytes = command.to_bytes().unwrap();
        assert_eq!(bytes[0], 0x22);
        let mut cursor = Cursor::new(bytes.as_ref());
        assert_eq!(Command::unmarshal(&mut cursor).unwrap(), command);
    }

    #[test]
    fn truncated_command_data_underflows() {
        let command = Command {
            cd: vec![0xAA; 10],
            ..Command::enquiry(1, 1, Address::international("123"))
        };
        let bytes = command.to_bytes().unwrap();
        let mut cursor = Cursor::new(&bytes.as_ref()[..bytes.len() - 2]);
        assert_eq!(
            Command::unmarshal(&mut cursor),
            Err(CodecError::Underflow("cd"))
        );
    }
}
