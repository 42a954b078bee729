// ABOUTME: Outbound message preparation: alphabet selection and segmentation into SUBMIT TPDUs
// ABOUTME: Payloads over the single-TPDU limit split into concatenated segments sharing a reference

use crate::codec::{CodecError, MAX_UD_OCTETS, MAX_UD_SEPTETS};
use crate::gsm7::{self, ESC, Lang};
use crate::tpdu::{Address, Dcs, InformationElement, Submit, UserDataHeader, ValidityPeriod, ie};
use crate::ucs2;
use std::sync::{Arc, OnceLock};
use std::sync::atomic::{AtomicU8, Ordering};

/// How the segmenter picks a character alphabet for a text payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AlphabetChoice {
    /// GSM 7-bit default first, then each configured locale in order, then
    /// UCS-2
    #[default]
    Auto,
    /// A specific GSM 7-bit locale; unencodable characters fail
    Gsm7(Lang),
    /// Force UCS-2
    Ucs2,
}

/// Source of concatenation reference bytes.
///
/// Injected so tests can pin references; the default is a process-wide
/// atomic counter with a random seed.
pub trait ReferenceSource: Send + Sync {
    fn next(&self) -> u8;
}

/// Monotonic reference counter; wraps at 256 by design
#[derive(Debug)]
pub struct CountingReference(AtomicU8);

impl CountingReference {
    pub fn new(seed: u8) -> Self {
        CountingReference(AtomicU8::new(seed))
    }

    pub fn random() -> Self {
        Self::new(rand::random())
    }
}

impl ReferenceSource for CountingReference {
    fn next(&self) -> u8 {
        self.0.fetch_add(1, Ordering::Relaxed)
    }
}

/// The process-wide counter segmenters share unless one is injected,
/// seeded once at first use
fn process_reference() -> Arc<CountingReference> {
    static SHARED: OnceLock<Arc<CountingReference>> = OnceLock::new();
    SHARED
        .get_or_init(|| Arc::new(CountingReference::random()))
        .clone()
}

/// Builds SUBMIT TPDUs from application payloads, splitting into
/// concatenated segments where the 140-octet user-data limit requires it
pub struct Segmenter {
    langs: Vec<Lang>,
    refs: Arc<dyn ReferenceSource>,
    vp: ValidityPeriod,
}

impl Default for Segmenter {
    fn default() -> Self {
        Self::new()
    }
}

impl Segmenter {
    pub fn new() -> Self {
        Segmenter {
            langs: Vec::new(),
            refs: process_reference(),
            vp: ValidityPeriod::NotPresent,
        }
    }

    /// Locales tried, in order, when auto selection finds the default
    /// alphabet insufficient
    pub fn langs(mut self, langs: &[Lang]) -> Self {
        self.langs = langs.to_vec();
        self
    }

    /// Replace the concatenation reference source
    pub fn reference_source(mut self, refs: Arc<dyn ReferenceSource>) -> Self {
        self.refs = refs;
        self
    }

    /// Validity period stamped on every produced SUBMIT
    pub fn validity_period(mut self, vp: ValidityPeriod) -> Self {
        self.vp = vp;
        self
    }

    /// Encode a text payload into one or more SUBMIT TPDUs addressed to `da`
    pub fn segment_text(
        &self,
        da: &Address,
        text: &str,
        choice: AlphabetChoice,
    ) -> Result<Vec<Submit>, CodecError> {
        match choice {
            AlphabetChoice::Gsm7(lang) => {
                let septets = gsm7::encode(text, lang.charset())?;
                self.build_gsm7(da, lang, septets)
            }
            AlphabetChoice::Ucs2 => self.build_ucs2(da, text),
            AlphabetChoice::Auto => {
                match gsm7::encode(text, Lang::Default.charset()) {
                    Ok(septets) => return self.build_gsm7(da, Lang::Default, septets),
                    Err(CodecError::Unencodable(_)) => {}
                    Err(e) => return Err(e),
                }
                for &lang in &self.langs {
                    match gsm7::encode(text, lang.charset()) {
                        Ok(septets) => return self.build_gsm7(da, lang, septets),
                        Err(CodecError::Unencodable(_)) => continue,
                        Err(e) => return Err(e),
                    }
                }
                self.build_ucs2(da, text)
            }
        }
    }

    /// Wrap an 8-bit binary payload into one or more SUBMIT TPDUs
    pub fn segment_data(&self, da: &Address, payload: &[u8]) -> Result<Vec<Submit>, CodecError> {
        let dcs = Dcs(0x04);
        if payload.len() <= MAX_UD_OCTETS {
            return Ok(vec![self.submit(da, dcs, None, payload.to_vec())]);
        }
        let capacity = MAX_UD_OCTETS - UserDataHeader::concat8(0, 1, 1).octet_len();
        let chunks: Vec<Vec<u8>> = payload.chunks(capacity).map(<[u8]>::to_vec).collect();
        self.concatenate(da, dcs, Vec::new(), chunks)
    }

    fn build_gsm7(
        &self,
        da: &Address,
        lang: Lang,
        septets: Vec<u8>,
    ) -> Result<Vec<Submit>, CodecError> {
        let dcs = Dcs(0x00);
        let lang_elements = language_elements(lang);
        let plain_header = header_from(lang_elements.clone(), None);
        let plain_capacity = MAX_UD_SEPTETS
            - plain_header.as_ref().map(|h| h.septet_len()).unwrap_or(0);
        if septets.len() <= plain_capacity {
            return Ok(vec![self.submit(da, dcs, plain_header, septets)]);
        }
        let concat_header = header_from(lang_elements.clone(), Some([0, 0, 0]))
            .expect("concat element is always present");
        let capacity = MAX_UD_SEPTETS - concat_header.septet_len();
        let chunks = split_septets(&septets, capacity);
        self.concatenate(da, dcs, lang_elements, chunks)
    }

    fn build_ucs2(&self, da: &Address, text: &str) -> Result<Vec<Submit>, CodecError> {
        let dcs = Dcs(0x08);
        let octets = ucs2::encode_str(text);
        if octets.len() <= MAX_UD_OCTETS {
            return Ok(vec![self.submit(da, dcs, None, octets)]);
        }
        let capacity = MAX_UD_OCTETS - UserDataHeader::concat8(0, 1, 1).octet_len();
        let chunks = split_ucs2(text, capacity);
        self.concatenate(da, dcs, Vec::new(), chunks)
    }

    /// Tag each chunk with a shared reference and a 1-based sequence index
    fn concatenate(
        &self,
        da: &Address,
        dcs: Dcs,
        extra_elements: Vec<InformationElement>,
        chunks: Vec<Vec<u8>>,
    ) -> Result<Vec<Submit>, CodecError> {
        if chunks.len() > u8::MAX as usize {
            return Err(CodecError::Overrun("ud"));
        }
        let reference = self.refs.next();
        let total = chunks.len() as u8;
        Ok(chunks
            .into_iter()
            .enumerate()
            .map(|(i, chunk)| {
                let mut elements = vec![InformationElement {
                    id: ie::CONCAT_8,
                    data: vec![reference, total, i as u8 + 1],
                }];
                elements.extend(extra_elements.iter().cloned());
                let udh = UserDataHeader { elements };
                self.submit(da, dcs, Some(udh), chunk)
            })
            .collect())
    }

    fn submit(&self, da: &Address, dcs: Dcs, udh: Option<UserDataHeader>, ud: Vec<u8>) -> Submit {
        Submit {
            da: da.clone(),
            dcs,
            vp: self.vp,
            udh,
            ud,
            ..Submit::default()
        }
    }
}

/// Shift-table information elements announcing a non-default locale
fn language_elements(lang: Lang) -> Vec<InformationElement> {
    if lang == Lang::Default {
        return Vec::new();
    }
    let id = lang.national_language_id();
    let mut elements = vec![InformationElement {
        id: ie::NAT_LANG_SINGLE_SHIFT,
        data: vec![id],
    }];
    if lang.has_locking_table() {
        elements.push(InformationElement {
            id: ie::NAT_LANG_LOCKING_SHIFT,
            data: vec![id],
        });
    }
    elements
}

fn header_from(
    mut elements: Vec<InformationElement>,
    concat: Option<[u8; 3]>,
) -> Option<UserDataHeader> {
    if let Some(data) = concat {
        elements.insert(
            0,
            InformationElement { id: ie::CONCAT_8, data: data.to_vec() },
        );
    }
    if elements.is_empty() {
        None
    } else {
        Some(UserDataHeader { elements })
    }
}

/// Split unpacked septets into chunks of at most `capacity`, never between
/// an escape and the septet it qualifies
fn split_septets(septets: &[u8], capacity: usize) -> Vec<Vec<u8>> {
    let mut chunks = Vec::new();
    let mut current = Vec::with_capacity(capacity);
    let mut iter = septets.iter().peekable();
    while let Some(&septet) = iter.next() {
        let width = if septet == ESC && iter.peek().is_some() { 2 } else { 1 };
        if current.len() + width > capacity {
            chunks.push(std::mem::take(&mut current));
        }
        current.push(septet);
        if width == 2 {
            current.push(*iter.next().expect("peeked"));
        }
    }
    if !current.is_empty() || chunks.is_empty() {
        chunks.push(current);
    }
    chunks
}

/// Split text into UCS-2 octet chunks of at most `capacity` octets, never
/// inside a code point's surrogate pair
fn split_ucs2(text: &str, capacity: usize) -> Vec<Vec<u8>> {
    let mut chunks = Vec::new();
    let mut current = Vec::with_capacity(capacity);
    let mut pair = [0u16; 2];
    for c in text.chars() {
        let units = c.encode_utf16(&mut pair);
        let width = units.len() * 2;
        if current.len() + width > capacity {
            chunks.push(std::mem::take(&mut current));
        }
        for unit in units.iter() {
            current.extend_from_slice(&unit.to_be_bytes());
        }
    }
    if !current.is_empty() || chunks.is_empty() {
        chunks.push(current);
    }
    chunks
}
