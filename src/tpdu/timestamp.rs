// ABOUTME: Service-centre timestamps (TS 23.040 9.2.3.11): seven swapped-BCD octets
// ABOUTME: YY MM DD hh mm ss TZ, zone in signed quarter-hours

use crate::bcd;
use crate::codec::{self, CodecError, Marshal, Unmarshal};
use bytes::{BufMut, BytesMut};
use chrono::{DateTime, Datelike, FixedOffset, TimeZone, Timelike};
use std::fmt;
use std::io::Cursor;

/// Sign bit of the timezone octet: bit 3 of the tens semi-octet
const TZ_SIGN: u8 = 0x08;

const SECONDS_PER_QUARTER: i32 = 15 * 60;

/// A TS 23.040 timestamp. Years are two digits on the wire and decode into
/// 2000-2099.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timestamp(pub DateTime<FixedOffset>);

impl From<DateTime<FixedOffset>> for Timestamp {
    fn from(t: DateTime<FixedOffset>) -> Self {
        Timestamp(t)
    }
}

impl Marshal for Timestamp {
    fn marshal(&self, buf: &mut BytesMut) -> Result<(), CodecError> {
        let t = &self.0;
        for field in [
            (t.year() % 100) as u8,
            t.month() as u8,
            t.day() as u8,
            t.hour() as u8,
            t.minute() as u8,
            t.second() as u8,
        ] {
            buf.put_u8(bcd::to_swapped(field));
        }
        let offset_secs = t.offset().local_minus_utc();
        let quarters = (offset_secs.abs() / SECONDS_PER_QUARTER) as u8;
        let mut tz = bcd::to_swapped(quarters);
        if offset_secs < 0 {
            tz |= TZ_SIGN;
        }
        buf.put_u8(tz);
        Ok(())
    }
}

impl Unmarshal for Timestamp {
    fn unmarshal(buf: &mut Cursor<&[u8]>) -> Result<Self, CodecError> {
        let start = codec::offset(buf);
        let octets = codec::take(buf, 7, "scts")?;
        let mut fields = [0u8; 6];
        for (i, &octet) in octets[..6].iter().enumerate() {
            fields[i] = bcd::from_swapped(octet)?;
        }
        let negative = octets[6] & TZ_SIGN != 0;
        let quarters = bcd::from_swapped(octets[6] & !TZ_SIGN)? as i32;
        let mut offset_secs = quarters * SECONDS_PER_QUARTER;
        if negative {
            offset_secs = -offset_secs;
        }
        let zone = FixedOffset::east_opt(offset_secs)
            .ok_or(CodecError::Invalid { field: "scts-tz", offset: start + 6 })?;
        let [yy, mm, dd, hh, min, ss] = fields;
        zone.with_ymd_and_hms(
            2000 + yy as i32,
            mm as u32,
            dd as u32,
            hh as u32,
            min as u32,
            ss as u32,
        )
        .single()
        .map(Timestamp)
        .ok_or(CodecError::Invalid { field: "scts", offset: start })
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.to_rfc3339())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(
        y: i32,
        mo: u32,
        d: u32,
        h: u32,
        mi: u32,
        s: u32,
        offset_hours: i32,
    ) -> Timestamp {
        let zone = FixedOffset::east_opt(offset_hours * 3600).unwrap();
        Timestamp(zone.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap())
    }

    #[test]
    fn marshal_reference_vector() {
        let ts = at(2017, 8, 31, 11, 21, 54, 8);
        assert_eq!(
            ts.to_bytes().unwrap().as_ref(),
            &[0x71, 0x80, 0x13, 0x11, 0x12, 0x45, 0x23]
        );
    }

    #[test]
    fn unmarshal_reference_vector() {
        let data: &[u8] = &[0x71, 0x80, 0x13, 0x11, 0x12, 0x45, 0x23];
        let mut cursor = Cursor::new(data);
        let ts = Timestamp::unmarshal(&mut cursor).unwrap();
        assert_eq!(ts, at(2017, 8, 31, 11, 21, 54, 8));
        assert_eq!(codec::offset(&cursor), 7);
    }

    #[test]
    fn negative_zone_round_trips() {
        let ts = at(2024, 1, 5, 23, 59, 0, -5);
        let bytes = ts.to_bytes().unwrap();
        // -5h is 20 quarters with the sign bit on the tens semi-octet
        assert_eq!(bytes[6], 0x0A);
        let mut cursor = Cursor::new(bytes.as_ref());
        assert_eq!(Timestamp::unmarshal(&mut cursor).unwrap(), ts);
    }

    #[test]
    fn marshal_unmarshal_round_trip_preserves_octets() {
        let data: &[u8] = &[0x20, 0x80, 0x62, 0x91, 0x73, 0x14, 0x80];
        let mut cursor = Cursor::new(data);
        let ts = Timestamp::unmarshal(&mut cursor).unwrap();
        assert_eq!(ts.to_bytes().unwrap().as_ref(), data);
    }

    #[test]
    fn invalid_bcd_nibble_rejected() {
        let data: &[u8] = &[0x71, 0x80, 0x1A, 0x11, 0x12, 0x45, 0x23];
        let mut cursor = Cursor::new(data);
        assert_eq!(
            Timestamp::unmarshal(&mut cursor),
            Err(CodecError::InvalidOctet(0x1A))
        );
    }

    #[test]
    fn impossible_date_rejected() {
        // month 13
        let data: &[u8] = &[0x71, 0x31, 0x13, 0x11, 0x12, 0x45, 0x23];
        let mut cursor = Cursor::new(data);
        assert_eq!(
            Timestamp::unmarshal(&mut cursor),
            Err(CodecError::Invalid { field: "scts", offset: 0 })
        );
    }

    #[test]
    fn truncated_input_underflows() {
        let data: &[u8] = &[0x71, 0x80];
        let mut cursor = Cursor::new(data);
        assert_eq!(
            Timestamp::unmarshal(&mut cursor),
            Err(CodecError::Underflow("scts"))
        );
    }
}
