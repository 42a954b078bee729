// ABOUTME: Data Coding Scheme octet (TS 23.038 4) with coding-group aware accessors
// ABOUTME: The high nibble selects a coding group that reinterprets the low nibble

use crate::codec::CodecError;
use num_enum::TryFromPrimitive;
use std::fmt;

/// Character alphabet selected by a DCS
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Alphabet {
    /// GSM 7-bit default alphabet; user-data length counts septets
    Gsm7 = 0b00,
    /// 8-bit data
    Data8Bit = 0b01,
    /// UCS-2 (UTF-16BE)
    Ucs2 = 0b10,
    /// Reserved; decodes as GSM 7-bit per TS 23.038
    Reserved = 0b11,
}

/// Message class, bits 1-0 where a class is present
#[derive(TryFromPrimitive)]
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MessageClass {
    /// Display immediately, do not store
    Class0 = 0b00,
    /// Mobile-equipment specific
    Class1 = 0b01,
    /// SIM specific
    Class2 = 0b10,
    /// Terminal-equipment specific
    Class3 = 0b11,
}

/// The one-octet Data Coding Scheme.
///
/// Accessors interpret the octet by coding group: the general groups
/// 0x0-0x7, the reserved groups 0x8-0xB (which fail `Invalid`), the
/// voicemail-indication groups 0xC-0xE, and the data-coding/message-class
/// group 0xF.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Dcs(pub u8);

impl Dcs {
    /// The alphabet encoded by this DCS
    pub fn alphabet(self) -> Result<Alphabet, CodecError> {
        match self.0 {
            0x00..=0x7F => match (self.0 >> 2) & 0x03 {
                0b01 => Ok(Alphabet::Data8Bit),
                0b10 => Ok(Alphabet::Ucs2),
                // reserved value decodes as the default alphabet
                _ => Ok(Alphabet::Gsm7),
            },
            0x80..=0xBF => Err(CodecError::Invalid { field: "dcs", offset: 0 }),
            0xC0..=0xDF => Ok(Alphabet::Gsm7),
            0xE0..=0xEF => Ok(Alphabet::Ucs2),
            0xF0..=0xFF => {
                if self.0 & 0x04 == 0x04 {
                    Ok(Alphabet::Data8Bit)
                } else {
                    Ok(Alphabet::Gsm7)
                }
            }
        }
    }

    /// Re-encode this DCS with a different alphabet, where the coding group
    /// can express it
    pub fn with_alphabet(self, alphabet: Alphabet) -> Result<Dcs, CodecError> {
        match self.0 {
            0x00..=0x7F => Ok(Dcs(self.0 & !0x0C | (alphabet as u8) << 2)),
            0xC0..=0xDF if alphabet == Alphabet::Gsm7 => Ok(self),
            0xE0..=0xEF if alphabet == Alphabet::Ucs2 => Ok(self),
            0xF0..=0xFF if matches!(alphabet, Alphabet::Gsm7 | Alphabet::Data8Bit) => {
                Ok(Dcs(self.0 & !0x0C | (alphabet as u8) << 2))
            }
            _ => Err(CodecError::Invalid { field: "dcs", offset: 0 }),
        }
    }

    /// The message class, if the coding group carries one.
    ///
    /// Groups 0x8-0xB fail `Invalid`; groups without a class (voicemail
    /// indications, general coding with bit 4 clear) return `None`.
    pub fn class(self) -> Result<Option<MessageClass>, CodecError> {
        match self.0 {
            0x00..=0x7F => {
                if self.0 & 0x10 == 0x10 {
                    Ok(MessageClass::try_from(self.0 & 0x03).ok())
                } else {
                    Ok(None)
                }
            }
            0x80..=0xBF => Err(CodecError::Invalid { field: "dcs", offset: 0 }),
            0xC0..=0xEF => Ok(None),
            0xF0..=0xFF => Ok(MessageClass::try_from(self.0 & 0x03).ok()),
        }
    }

    /// Re-encode this DCS with a message class, where the coding group can
    /// express one
    pub fn with_class(self, class: MessageClass) -> Result<Dcs, CodecError> {
        match self.0 {
            0x00..=0x7F => Ok(Dcs(self.0 & !0x03 | 0x10 | class as u8)),
            0xF0..=0xFF => Ok(Dcs(self.0 & !0x03 | class as u8)),
            _ => Err(CodecError::Invalid { field: "dcs", offset: 0 }),
        }
    }

    /// Whether the user data is compressed (general groups only)
    pub fn compressed(self) -> bool {
        self.0 < 0x80 && self.0 & 0x20 == 0x20
    }
}

impl From<u8> for Dcs {
    fn from(octet: u8) -> Dcs {
        Dcs(octet)
    }
}

impl From<Dcs> for u8 {
    fn from(dcs: Dcs) -> u8 {
        dcs.0
    }
}

impl fmt::Display for Dcs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.alphabet() {
            Ok(a) => write!(f, "{:#04x} ({a:?})", self.0),
            Err(_) => write!(f, "{:#04x} (reserved)", self.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alphabet_over_all_octets() {
        for i in 0u8..8 {
            let group = i << 4;
            assert_eq!(Dcs(group).alphabet().unwrap(), Alphabet::Gsm7);
            assert_eq!(Dcs(group | 0x04).alphabet().unwrap(), Alphabet::Data8Bit);
            assert_eq!(Dcs(group | 0x08).alphabet().unwrap(), Alphabet::Ucs2);
            assert_eq!(Dcs(group | 0x0C).alphabet().unwrap(), Alphabet::Gsm7);
        }
        for octet in 0x80..=0xBF {
            assert!(Dcs(octet).alphabet().is_err(), "{octet:#04x}");
        }
        for octet in 0xC0..=0xDF {
            assert_eq!(Dcs(octet).alphabet().unwrap(), Alphabet::Gsm7);
        }
        for octet in 0xE0..=0xEF {
            assert_eq!(Dcs(octet).alphabet().unwrap(), Alphabet::Ucs2);
        }
        for octet in 0xF0..=0xFF {
            let expected = if octet & 0x04 == 0x04 {
                Alphabet::Data8Bit
            } else {
                Alphabet::Gsm7
            };
            assert_eq!(Dcs(octet).alphabet().unwrap(), expected);
        }
    }

    #[test]
    fn with_alphabet_boundary_vectors() {
        assert_eq!(
            Dcs(0x40).with_alphabet(Alphabet::Data8Bit).unwrap(),
            Dcs(0x44)
        );
        assert_eq!(Dcs(0x44).alphabet().unwrap(), Alphabet::Data8Bit);
        assert!(Dcs(0x80).alphabet().is_err());
    }

    #[test]
    fn with_alphabet_rejects_inexpressible_groups() {
        assert!(Dcs(0xC0).with_alphabet(Alphabet::Ucs2).is_err());
        assert_eq!(Dcs(0xC0).with_alphabet(Alphabet::Gsm7).unwrap(), Dcs(0xC0));
        assert!(Dcs(0xE0).with_alphabet(Alphabet::Gsm7).is_err());
        assert!(Dcs(0xF0).with_alphabet(Alphabet::Ucs2).is_err());
        assert_eq!(
            Dcs(0xF0).with_alphabet(Alphabet::Data8Bit).unwrap(),
            Dcs(0xF4)
        );
        assert!(Dcs(0x90).with_alphabet(Alphabet::Gsm7).is_err());
    }

    #[test]
    fn with_alphabet_round_trips() {
        for octet in 0x00..=0x7F {
            for alphabet in [Alphabet::Gsm7, Alphabet::Data8Bit, Alphabet::Ucs2] {
                let dcs = Dcs(octet).with_alphabet(alphabet).unwrap();
                assert_eq!(dcs.alphabet().unwrap(), alphabet);
            }
        }
    }

    #[test]
    fn class_accessors() {
        assert_eq!(Dcs(0x00).class().unwrap(), None);
        assert_eq!(Dcs(0x11).class().unwrap(), Some(MessageClass::Class1));
        assert_eq!(Dcs(0xC4).class().unwrap(), None);
        assert_eq!(Dcs(0xF2).class().unwrap(), Some(MessageClass::Class2));
        assert!(Dcs(0x95).class().is_err());
    }

    #[test]
    fn with_class_sets_presence_bit() {
        assert_eq!(
            Dcs(0x00).with_class(MessageClass::Class3).unwrap(),
            Dcs(0x13)
        );
        assert_eq!(
            Dcs(0xF0).with_class(MessageClass::Class1).unwrap(),
            Dcs(0xF1)
        );
        assert!(Dcs(0xC0).with_class(MessageClass::Class0).is_err());
    }

    #[test]
    fn compressed_flag() {
        assert!(!Dcs(0x00).compressed());
        assert!(Dcs(0x20).compressed());
        assert!(Dcs(0x60).compressed());
        assert!(!Dcs(0xA0).compressed());
        assert!(!Dcs(0xE0).compressed());
    }
}
