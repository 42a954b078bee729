// ABOUTME: Inbound reassembly: collects DELIVER segments keyed by (source, reference, total)
// ABOUTME: Callers drive the clock; reap() evicts stale entries and surfaces their partial payload

use crate::codec::CodecError;
use crate::gsm7::{self, Lang};
use crate::tpdu::{Address, Alphabet, Deliver, Timestamp};
use crate::ucs2;
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};
use thiserror::Error;

/// What to do with a segment whose slot is already filled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicatePolicy {
    /// Fail `accept` with [`CollectError::DuplicateSegment`]
    #[default]
    Reject,
    /// Silently discard the repeat
    Drop,
}

/// A reassembled (or never-fragmented) short message
#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub from: Address,
    /// Service-centre timestamp of the first segment to arrive
    pub scts: Timestamp,
    pub payload: Payload,
}

/// Message content after alphabet decoding
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Payload {
    Text(String),
    Data(Vec<u8>),
}

impl Payload {
    fn join(parts: impl IntoIterator<Item = Payload>) -> Payload {
        let mut parts = parts.into_iter().peekable();
        match parts.peek() {
            Some(Payload::Data(_)) => Payload::Data(
                parts
                    .flat_map(|p| match p {
                        Payload::Data(d) => d,
                        Payload::Text(t) => t.into_bytes(),
                    })
                    .collect(),
            ),
            _ => Payload::Text(
                parts
                    .map(|p| match p {
                        Payload::Text(t) => t,
                        Payload::Data(d) => String::from_utf8_lossy(&d).into_owned(),
                    })
                    .collect(),
            ),
        }
    }
}

/// A reassembly that outlived the caller's deadline, reported with whatever
/// arrived
#[derive(Debug, Clone, PartialEq)]
pub struct TimedOut {
    pub from: Address,
    pub reference: u16,
    pub total: u8,
    pub received: u8,
    /// In-order concatenation of the segments that did arrive
    pub partial: Payload,
}

/// Errors raised while accepting a segment
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CollectError {
    #[error("segment {sequence} of reference {reference} already received")]
    DuplicateSegment { reference: u16, sequence: u8 },

    #[error("segment index {sequence} outside 1..={total}")]
    SequenceOutOfRange { sequence: u8, total: u8 },

    #[error(transparent)]
    Codec(#[from] CodecError),
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct SegmentKey {
    from: Address,
    reference: u16,
    total: u8,
}

struct Pending {
    slots: Vec<Option<Payload>>,
    scts: Timestamp,
    first_seen: Instant,
}

impl Pending {
    fn received(&self) -> u8 {
        self.slots.iter().flatten().count() as u8
    }

    fn partial(&self) -> Payload {
        Payload::join(self.slots.iter().flatten().cloned())
    }
}

/// Collects concatenated DELIVER segments until a message completes.
///
/// The map is guarded by a single mutex; every operation is short. The
/// collector never spawns background work - expiry runs only when the
/// caller invokes [`Collector::reap`] with its own clock.
pub struct Collector {
    pending: Mutex<HashMap<SegmentKey, Pending>>,
    duplicates: DuplicatePolicy,
}

impl Default for Collector {
    fn default() -> Self {
        Self::new()
    }
}

impl Collector {
    pub fn new() -> Self {
        Collector {
            pending: Mutex::new(HashMap::new()),
            duplicates: DuplicatePolicy::default(),
        }
    }

    pub fn duplicate_policy(mut self, policy: DuplicatePolicy) -> Self {
        self.duplicates = policy;
        self
    }

    /// Number of messages still waiting for segments
    pub fn pending_count(&self) -> usize {
        self.pending.lock().expect("collector lock poisoned").len()
    }

    /// Feed one received DELIVER into the collector.
    ///
    /// Returns the completed message once every segment has arrived, `None`
    /// while segments are outstanding. A DELIVER with no concatenation IE
    /// completes immediately.
    pub fn accept(
        &self,
        deliver: &Deliver,
        now: Instant,
    ) -> Result<Option<Message>, CollectError> {
        let payload = decode_body(deliver)?;
        let Some(concat) = deliver.concat() else {
            return Ok(Some(Message {
                from: deliver.oa.clone(),
                scts: deliver.scts,
                payload,
            }));
        };
        if concat.sequence == 0 || concat.sequence > concat.total {
            return Err(CollectError::SequenceOutOfRange {
                sequence: concat.sequence,
                total: concat.total,
            });
        }
        let key = SegmentKey {
            from: deliver.oa.clone(),
            reference: concat.reference,
            total: concat.total,
        };
        let mut pending = self.pending.lock().expect("collector lock poisoned");
        let entry = pending.entry(key.clone()).or_insert_with(|| Pending {
            slots: vec![None; concat.total as usize],
            scts: deliver.scts,
            first_seen: now,
        });
        let slot = &mut entry.slots[concat.sequence as usize - 1];
        if slot.is_some() {
            return match self.duplicates {
                DuplicatePolicy::Reject => Err(CollectError::DuplicateSegment {
                    reference: concat.reference,
                    sequence: concat.sequence,
                }),
                DuplicatePolicy::Drop => {
                    tracing::debug!(
                        reference = concat.reference,
                        sequence = concat.sequence,
                        "dropping duplicate segment"
                    );
                    Ok(None)
                }
            };
        }
        *slot = Some(payload);
        if entry.slots.iter().all(Option::is_some) {
            let done = pending.remove(&key).expect("entry exists");
            return Ok(Some(Message {
                from: key.from,
                scts: done.scts,
                payload: Payload::join(done.slots.into_iter().flatten()),
            }));
        }
        Ok(None)
    }

    /// Evict reassemblies first seen before `now - ttl`, reporting each with
    /// its partial payload
    pub fn reap(&self, now: Instant, ttl: Duration) -> Vec<TimedOut> {
        let mut pending = self.pending.lock().expect("collector lock poisoned");
        let mut expired = Vec::new();
        pending.retain(|key, entry| {
            if now.duration_since(entry.first_seen) <= ttl {
                return true;
            }
            tracing::info!(
                from = %key.from,
                reference = key.reference,
                received = entry.received(),
                total = key.total,
                "reaping incomplete reassembly"
            );
            expired.push(TimedOut {
                from: key.from.clone(),
                reference: key.reference,
                total: key.total,
                received: entry.received(),
                partial: entry.partial(),
            });
            false
        });
        expired
    }
}

/// Decode one segment's body per its DCS alphabet, honouring any
/// national-language shift IEs in the header
fn decode_body(deliver: &Deliver) -> Result<Payload, CollectError> {
    match deliver.dcs.alphabet()? {
        Alphabet::Gsm7 | Alphabet::Reserved => {
            let lang = deliver
                .udh
                .as_ref()
                .and_then(|h| h.language())
                .unwrap_or(Lang::Default);
            Ok(Payload::Text(gsm7::decode(&deliver.ud, lang.charset())))
        }
        Alphabet::Ucs2 => {
            let chars = ucs2::decode(&deliver.ud).map_err(CodecError::from)?;
            Ok(Payload::Text(chars.into_iter().collect()))
        }
        Alphabet::Data8Bit => Ok(Payload::Data(deliver.ud.clone())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tpdu::{Dcs, UserDataHeader};
    use chrono::{FixedOffset, TimeZone};

    fn scts() -> Timestamp {
        let zone = FixedOffset::east_opt(3600).unwrap();
        Timestamp(zone.with_ymd_and_hms(2024, 2, 2, 12, 0, 0).unwrap())
    }

    fn oa() -> Address {
        Address::international("31641600986")
    }

    fn segment(text: &str, reference: u8, total: u8, sequence: u8) -> Deliver {
        let mut deliver = Deliver::new(oa(), scts());
        deliver.udh = Some(UserDataHeader::concat8(reference, total, sequence));
        deliver.ud = gsm7::encode(text, Lang::Default.charset()).unwrap();
        deliver
    }

    fn plain(text: &str) -> Deliver {
        let mut deliver = Deliver::new(oa(), scts());
        deliver.ud = gsm7::encode(text, Lang::Default.charset()).unwrap();
        deliver
    }

    #[test]
    fn unfragmented_message_completes_immediately() {
        let collector = Collector::new();
        let done = collector.accept(&plain("hi there"), Instant::now()).unwrap();
        assert_eq!(
            done.unwrap().payload,
            Payload::Text("hi there".to_owned())
        );
        assert_eq!(collector.pending_count(), 0);
    }

    #[test]
    fn segments_reassemble_in_either_order() {
        for flip in [false, true] {
            let collector = Collector::new();
            let now = Instant::now();
            let mut parts = vec![
                segment("front ", 0x42, 2, 1),
                segment("back", 0x42, 2, 2),
            ];
            if flip {
                parts.reverse();
            }
            assert_eq!(collector.accept(&parts[0], now).unwrap(), None);
            let done = collector.accept(&parts[1], now).unwrap().unwrap();
            assert_eq!(done.payload, Payload::Text("front back".to_owned()));
            assert_eq!(done.from, oa());
            assert_eq!(collector.pending_count(), 0);
        }
    }

    #[test]
    fn duplicate_segment_rejected_by_default() {
        let collector = Collector::new();
        let now = Instant::now();
        collector.accept(&segment("a", 0x42, 2, 1), now).unwrap();
        assert_eq!(
            collector.accept(&segment("a", 0x42, 2, 1), now),
            Err(CollectError::DuplicateSegment { reference: 0x42, sequence: 1 })
        );
    }

    #[test]
    fn duplicate_segment_dropped_when_configured() {
        let collector = Collector::new().duplicate_policy(DuplicatePolicy::Drop);
        let now = Instant::now();
        collector.accept(&segment("a", 7, 2, 1), now).unwrap();
        assert_eq!(collector.accept(&segment("a", 7, 2, 1), now).unwrap(), None);
        let done = collector.accept(&segment("b", 7, 2, 2), now).unwrap();
        assert_eq!(done.unwrap().payload, Payload::Text("ab".to_owned()));
    }

    #[test]
    fn sequence_bounds_are_validated() {
        let collector = Collector::new();
        let now = Instant::now();
        assert_eq!(
            collector.accept(&segment("x", 1, 2, 3), now),
            Err(CollectError::SequenceOutOfRange { sequence: 3, total: 2 })
        );
        assert_eq!(
            collector.accept(&segment("x", 1, 2, 0), now),
            Err(CollectError::SequenceOutOfRange { sequence: 0, total: 2 })
        );
    }

    #[test]
    fn differing_totals_are_distinct_messages() {
        let collector = Collector::new();
        let now = Instant::now();
        collector.accept(&segment("x", 1, 2, 1), now).unwrap();
        collector.accept(&segment("y", 1, 3, 1), now).unwrap();
        assert_eq!(collector.pending_count(), 2);
    }

    #[test]
    fn sources_do_not_cross_talk() {
        let collector = Collector::new();
        let now = Instant::now();
        let mut other = segment("y", 1, 2, 2);
        other.oa = Address::international("467999999");
        collector.accept(&segment("x", 1, 2, 1), now).unwrap();
        assert_eq!(collector.accept(&other, now).unwrap(), None);
        assert_eq!(collector.pending_count(), 2);
    }

    #[test]
    fn reap_reports_partial_payload() {
        let collector = Collector::new();
        let start = Instant::now();
        collector.accept(&segment("half ", 9, 2, 1), start).unwrap();
        // young entries survive
        assert!(collector.reap(start, Duration::from_secs(60)).is_empty());
        let later = start + Duration::from_secs(61);
        let expired = collector.reap(later, Duration::from_secs(60));
        assert_eq!(expired.len(), 1);
        assert_eq!(expired[0].reference, 9);
        assert_eq!(expired[0].received, 1);
        assert_eq!(expired[0].total, 2);
        assert_eq!(expired[0].partial, Payload::Text("half ".to_owned()));
        assert_eq!(collector.pending_count(), 0);
    }

    #[test]
    fn ucs2_segments_decode_before_joining() {
        let collector = Collector::new();
        let now = Instant::now();
        let mut first = Deliver::new(oa(), scts());
        first.dcs = Dcs(0x08);
        first.udh = Some(UserDataHeader::concat8(3, 2, 1));
        first.ud = ucs2::encode_str("по");
        let mut second = first.clone();
        second.udh = Some(UserDataHeader::concat8(3, 2, 2));
        second.ud = ucs2::encode_str("ка");
        collector.accept(&first, now).unwrap();
        let done = collector.accept(&second, now).unwrap().unwrap();
        assert_eq!(done.payload, Payload::Text("пока".to_owned()));
    }

    #[test]
    fn eight_bit_segments_join_as_data() {
        let collector = Collector::new();
        let now = Instant::now();
        let mut first = Deliver::new(oa(), scts());
        first.dcs = Dcs(0x04);
        first.udh = Some(UserDataHeader::concat8(4, 2, 1));
        first.ud = vec![0xDE, 0xAD];
        let mut second = first.clone();
        second.udh = Some(UserDataHeader::concat8(4, 2, 2));
        second.ud = vec![0xBE, 0xEF];
        collector.accept(&first, now).unwrap();
        let done = collector.accept(&second, now).unwrap().unwrap();
        assert_eq!(done.payload, Payload::Data(vec![0xDE, 0xAD, 0xBE, 0xEF]));
    }
}
