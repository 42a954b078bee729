// ABOUTME: GSM 7-bit default alphabet and national language tables (3GPP TS 23.038 v15)
// ABOUTME: Locked tables map every assigned septet; shift tables hold the escape-prefixed extensions

use std::collections::HashMap;
use std::sync::OnceLock;

mod bengali;
mod default;
mod gujarati;
mod hindi;
mod portuguese;
mod spanish;
mod turkish;
mod urdu;

/// Escape septet prefixing a shift-table character, self-mapped in every table
pub const ESC: u8 = 0x1B;

/// National language identity selecting a locked/shift table pair.
///
/// `Spanish` has no locking table of its own in TS 23.038, so it pairs the
/// default locked table with the Spanish single-shift table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Lang {
    Default,
    Turkish,
    Spanish,
    Portuguese,
    Bengali,
    Gujarati,
    Hindi,
    Urdu,
}

impl Lang {
    /// The national language identifier used by the shift-table information
    /// elements (TS 23.038 6.2.1.2.4)
    pub fn national_language_id(self) -> u8 {
        match self {
            Lang::Default => 0x00,
            Lang::Turkish => 0x01,
            Lang::Spanish => 0x02,
            Lang::Portuguese => 0x03,
            Lang::Bengali => 0x04,
            Lang::Gujarati => 0x05,
            Lang::Hindi => 0x06,
            Lang::Urdu => 0x0D,
        }
    }

    /// Inverse of [`Lang::national_language_id`]
    pub fn from_national_language_id(id: u8) -> Option<Lang> {
        match id {
            0x00 => Some(Lang::Default),
            0x01 => Some(Lang::Turkish),
            0x02 => Some(Lang::Spanish),
            0x03 => Some(Lang::Portuguese),
            0x04 => Some(Lang::Bengali),
            0x05 => Some(Lang::Gujarati),
            0x06 => Some(Lang::Hindi),
            0x0D => Some(Lang::Urdu),
            _ => None,
        }
    }

    /// Whether the locale defines a locking shift table of its own
    pub fn has_locking_table(self) -> bool {
        !matches!(self, Lang::Default | Lang::Spanish)
    }

    /// The locked + shift table pair for this locale
    pub fn charset(self) -> &'static Charset {
        match self {
            Lang::Default => &DEFAULT,
            Lang::Turkish => &TURKISH,
            Lang::Spanish => &SPANISH,
            Lang::Portuguese => &PORTUGUESE,
            Lang::Bengali => &BENGALI,
            Lang::Gujarati => &GUJARATI,
            Lang::Hindi => &HINDI,
            Lang::Urdu => &URDU,
        }
    }
}

static DEFAULT: Charset = Charset::new(default::LOCKED, default::SHIFT);
static TURKISH: Charset = Charset::new(turkish::LOCKED, turkish::SHIFT);
static SPANISH: Charset = Charset::new(default::LOCKED, spanish::SHIFT);
static PORTUGUESE: Charset = Charset::new(portuguese::LOCKED, portuguese::SHIFT);
static BENGALI: Charset = Charset::new(bengali::LOCKED, bengali::SHIFT);
static GUJARATI: Charset = Charset::new(gujarati::LOCKED, gujarati::SHIFT);
static HINDI: Charset = Charset::new(hindi::LOCKED, hindi::SHIFT);
static URDU: Charset = Charset::new(urdu::LOCKED, urdu::SHIFT);

/// A locked decode table and its shift extension, with the inverse encoder
/// maps built once on first use.
pub struct Charset {
    locked: &'static [(u8, char)],
    shift: &'static [(u8, char)],
    locked_by_char: OnceLock<HashMap<char, u8>>,
    shift_by_char: OnceLock<HashMap<char, u8>>,
}

impl Charset {
    const fn new(locked: &'static [(u8, char)], shift: &'static [(u8, char)]) -> Self {
        Charset {
            locked,
            shift,
            locked_by_char: OnceLock::new(),
            shift_by_char: OnceLock::new(),
        }
    }

    /// Decode a septet through the locked table
    pub fn decode(&self, septet: u8) -> Option<char> {
        lookup(self.locked, septet)
    }

    /// Decode the septet following an escape through the shift table
    pub fn decode_shift(&self, septet: u8) -> Option<char> {
        lookup(self.shift, septet)
    }

    /// Encode a character as a single locked septet
    pub fn encode(&self, c: char) -> Option<u8> {
        self.locked_by_char
            .get_or_init(|| invert(self.locked))
            .get(&c)
            .copied()
    }

    /// Encode a character as a shift septet (to be prefixed with [`ESC`])
    pub fn encode_shift(&self, c: char) -> Option<u8> {
        self.shift_by_char
            .get_or_init(|| invert(self.shift))
            .get(&c)
            .copied()
    }
}

fn lookup(table: &[(u8, char)], septet: u8) -> Option<char> {
    table
        .binary_search_by_key(&septet, |&(s, _)| s)
        .ok()
        .map(|i| table[i].1)
}

// Inversion skips the escape position, and where two positions decode to the
// same character (the Indic shift tables duplicate a few) the lowest wins.
fn invert(table: &[(u8, char)]) -> HashMap<char, u8> {
    let mut map = HashMap::with_capacity(table.len());
    for &(septet, c) in table {
        if septet == ESC {
            continue;
        }
        map.entry(c).or_insert(septet);
    }
    map
}
