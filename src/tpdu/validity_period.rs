// ABOUTME: Validity period field (TS 23.040 9.2.3.12): relative, absolute and enhanced forms
// ABOUTME: Relative periods quantise through the piecewise scale table, rounding up

use crate::bcd;
use crate::codec::{self, CodecError, Marshal, Unmarshal};
use crate::tpdu::Timestamp;
use bytes::{BufMut, BytesMut};
use num_enum::TryFromPrimitive;
use std::io::Cursor;
use std::time::Duration;

/// Validity period format, bits 4-3 of the SUBMIT first octet
#[derive(TryFromPrimitive)]
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Vpf {
    NotPresent = 0b00,
    Enhanced = 0b01,
    Relative = 0b10,
    Absolute = 0b11,
}

/// Enhanced validity period format, bits 2-0 of the functionality indicator
const EVPF_NOT_PRESENT: u8 = 0;
const EVPF_RELATIVE: u8 = 1;
const EVPF_RELATIVE_SECONDS: u8 = 2;
const EVPF_RELATIVE_HHMMSS: u8 = 3;

/// How long a submitted message stays deliverable before the service centre
/// discards it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValidityPeriod {
    #[default]
    NotPresent,
    /// One scaled octet: 5 minutes up to 63 weeks
    Relative(Duration),
    /// An absolute expiry timestamp
    Absolute(Timestamp),
    /// Seven octets: functionality indicator plus a format-specific payload,
    /// zero-padded
    Enhanced { efi: u8, duration: Duration },
}

impl ValidityPeriod {
    /// The format this period marshals with
    pub fn vpf(&self) -> Vpf {
        match self {
            ValidityPeriod::NotPresent => Vpf::NotPresent,
            ValidityPeriod::Relative(_) => Vpf::Relative,
            ValidityPeriod::Absolute(_) => Vpf::Absolute,
            ValidityPeriod::Enhanced { .. } => Vpf::Enhanced,
        }
    }

    /// Marshalled size in octets: 0, 1 or 7
    pub fn wire_len(&self) -> usize {
        match self.vpf() {
            Vpf::NotPresent => 0,
            Vpf::Relative => 1,
            Vpf::Enhanced | Vpf::Absolute => 7,
        }
    }

    /// Decode a validity period gated by the given format
    pub fn unmarshal(buf: &mut Cursor<&[u8]>, vpf: Vpf) -> Result<Self, CodecError> {
        match vpf {
            Vpf::NotPresent => Ok(ValidityPeriod::NotPresent),
            Vpf::Relative => {
                let octet = codec::get_u8(buf, "vp")?;
                Ok(ValidityPeriod::Relative(relative_duration(octet)))
            }
            Vpf::Absolute => Timestamp::unmarshal(buf).map(ValidityPeriod::Absolute),
            Vpf::Enhanced => Self::unmarshal_enhanced(buf),
        }
    }

    fn unmarshal_enhanced(buf: &mut Cursor<&[u8]>) -> Result<Self, CodecError> {
        use bytes::Buf;
        if buf.remaining() < 7 {
            return Err(CodecError::Underflow("vp"));
        }
        let start = codec::offset(buf);
        let efi = codec::get_u8(buf, "vp")?;
        let duration = match efi & 0x07 {
            EVPF_NOT_PRESENT => Duration::ZERO,
            EVPF_RELATIVE => relative_duration(codec::get_u8(buf, "vp")?),
            EVPF_RELATIVE_SECONDS => Duration::from_secs(codec::get_u8(buf, "vp")? as u64),
            EVPF_RELATIVE_HHMMSS => {
                let octets = codec::take(buf, 3, "vp")?;
                let hh = bcd::from_swapped(octets[0])? as u64;
                let mm = bcd::from_swapped(octets[1])? as u64;
                let ss = bcd::from_swapped(octets[2])? as u64;
                Duration::from_secs(hh * 3600 + mm * 60 + ss)
            }
            _ => {
                // the remaining payload is consumed but carries no meaning
                buf.advance(6);
                return Err(CodecError::Invalid { field: "evpf", offset: start });
            }
        };
        while codec::offset(buf) < start + 7 {
            let at = codec::offset(buf);
            if codec::peek_u8(buf, "vp")? != 0 {
                return Err(CodecError::NonZero { field: "vp", offset: at });
            }
            codec::get_u8(buf, "vp")?;
        }
        Ok(ValidityPeriod::Enhanced { efi, duration })
    }
}

impl Marshal for ValidityPeriod {
    fn marshal(&self, buf: &mut BytesMut) -> Result<(), CodecError> {
        match self {
            ValidityPeriod::NotPresent => Ok(()),
            ValidityPeriod::Relative(d) => {
                buf.put_u8(relative_octet(*d));
                Ok(())
            }
            ValidityPeriod::Absolute(ts) => ts.marshal(buf),
            ValidityPeriod::Enhanced { efi, duration } => {
                if efi & 0x07 > EVPF_RELATIVE_HHMMSS {
                    return Err(CodecError::Invalid { field: "evpf", offset: 0 });
                }
                buf.put_u8(*efi);
                let payload_len = match efi & 0x07 {
                    EVPF_RELATIVE => {
                        buf.put_u8(relative_octet(*duration));
                        1
                    }
                    EVPF_RELATIVE_SECONDS => {
                        buf.put_u8(duration.as_secs().min(u8::MAX as u64) as u8);
                        1
                    }
                    EVPF_RELATIVE_HHMMSS => {
                        let total = duration.as_secs();
                        buf.put_u8(bcd::to_swapped(((total / 3600) % 100) as u8));
                        buf.put_u8(bcd::to_swapped(((total / 60) % 60) as u8));
                        buf.put_u8(bcd::to_swapped((total % 60) as u8));
                        3
                    }
                    _ => 0,
                };
                buf.put_bytes(0, 6 - payload_len);
                Ok(())
            }
        }
    }
}

/// Scale a duration to the one-octet relative form, rounding up to the next
/// representable step and saturating at 63 weeks
pub fn relative_octet(d: Duration) -> u8 {
    const MINUTE: u64 = 60;
    const HOUR: u64 = 60 * MINUTE;
    const DAY: u64 = 24 * HOUR;
    const WEEK: u64 = 7 * DAY;
    let secs = d.as_secs();
    if secs <= 12 * HOUR {
        let steps = secs.div_ceil(5 * MINUTE);
        steps.saturating_sub(1) as u8
    } else if secs <= 24 * HOUR {
        (143 + (secs - 12 * HOUR).div_ceil(30 * MINUTE)) as u8
    } else if secs <= 30 * DAY {
        (166 + secs.div_ceil(DAY)) as u8
    } else {
        (192 + secs.div_ceil(WEEK)).min(255) as u8
    }
}

/// Expand the one-octet relative form back into a duration
pub fn relative_duration(octet: u8) -> Duration {
    const MINUTE: u64 = 60;
    let n = octet as u64;
    let secs = match octet {
        0..=143 => (n + 1) * 5 * MINUTE,
        144..=167 => 12 * 3600 + (n - 143) * 30 * MINUTE,
        168..=196 => (n - 166) * 86400,
        197..=255 => (n - 192) * 7 * 86400,
    };
    Duration::from_secs(secs)
}
