// Hindi (Devanagari) national language tables, TS 23.038 A.3.6 / A.2.6

pub(super) const LOCKED: &[(u8, char)] = &[
    (0x00, '\u{0901}'),
    (0x01, '\u{0902}'),
    (0x02, '\u{0903}'),
    (0x03, 'अ'),
    (0x04, 'आ'),
    (0x05, 'इ'),
    (0x06, 'ई'),
    (0x07, 'उ'),
    (0x08, 'ऊ'),
    (0x09, 'ऋ'),
    (0x0A, '\n'),
    (0x0B, 'ऌ'),
    (0x0C, 'ऍ'),
    (0x0D, '\r'),
    (0x0E, 'ऎ'),
    (0x0F, 'ए'),
    (0x10, 'ऐ'),
    (0x11, 'ऑ'),
    (0x12, 'ऒ'),
    (0x13, 'ओ'),
    (0x14, 'औ'),
    (0x15, 'क'),
    (0x16, 'ख'),
    (0x17, 'ग'),
    (0x18, 'घ'),
    (0x19, 'ङ'),
    (0x1A, 'च'),
    (0x1B, '\u{1b}'),
    (0x1C, 'छ'),
    (0x1D, 'ज'),
    (0x1E, 'झ'),
    (0x1F, 'ञ'),
    (0x20, ' '),
    (0x21, '!'),
    (0x22, 'ट'),
    (0x23, 'ठ'),
    (0x24, 'ड'),
    (0x25, 'ढ'),
    (0x26, 'ण'),
    (0x27, 'त'),
    (0x28, ')'),
    (0x29, '('),
    (0x2A, 'थ'),
    (0x2B, 'द'),
    (0x2C, ','),
    (0x2D, 'ध'),
    (0x2E, '.'),
    (0x2F, 'न'),
    (0x30, '0'),
    (0x31, '1'),
    (0x32, '2'),
    (0x33, '3'),
    (0x34, '4'),
    (0x35, '5'),
    (0x36, '6'),
    (0x37, '7'),
    (0x38, '8'),
    (0x39, '9'),
    (0x3A, ':'),
    (0x3B, ';'),
    (0x3C, 'ऩ'),
    (0x3D, 'प'),
    (0x3E, 'फ'),
    (0x3F, '?'),
    (0x40, 'ब'),
    (0x41, 'भ'),
    (0x42, 'म'),
    (0x43, 'य'),
    (0x44, 'र'),
    (0x45, 'ऱ'),
    (0x46, 'ल'),
    (0x47, 'ळ'),
    (0x48, 'ऴ'),
    (0x49, 'व'),
    (0x4A, 'श'),
    (0x4B, 'ष'),
    (0x4C, 'स'),
    (0x4D, 'ह'),
    (0x4E, '\u{093c}'),
    (0x4F, 'ऽ'),
    (0x50, '\u{093e}'),
    (0x51, '\u{093f}'),
    (0x52, '\u{0940}'),
    (0x53, '\u{0941}'),
    (0x54, '\u{0942}'),
    (0x55, '\u{0943}'),
    (0x56, '\u{0944}'),
    (0x57, '\u{0945}'),
    (0x58, '\u{0946}'),
    (0x59, '\u{0947}'),
    (0x5A, '\u{0948}'),
    (0x5B, '\u{0949}'),
    (0x5C, '\u{094a}'),
    (0x5D, '\u{094b}'),
    (0x5E, '\u{094c}'),
    (0x5F, '\u{094d}'),
    (0x60, 'ॐ'),
    (0x61, 'a'),
    (0x62, 'b'),
    (0x63, 'c'),
    (0x64, 'd'),
    (0x65, 'e'),
    (0x66, 'f'),
    (0x67, 'g'),
    (0x68, 'h'),
    (0x69, 'i'),
    (0x6A, 'j'),
    (0x6B, 'k'),
    (0x6C, 'l'),
    (0x6D, 'm'),
    (0x6E, 'n'),
    (0x6F, 'o'),
    (0x70, 'p'),
    (0x71, 'q'),
    (0x72, 'r'),
    (0x73, 's'),
    (0x74, 't'),
    (0x75, 'u'),
    (0x76, 'v'),
    (0x77, 'w'),
    (0x78, 'x'),
    (0x79, 'y'),
    (0x7A, 'z'),
    (0x7B, 'ॲ'),
    (0x7C, 'ॻ'),
    (0x7D, 'ॼ'),
    (0x7E, 'ॾ'),
    (0x7F, 'ॿ'),
];

pub(super) const SHIFT: &[(u8, char)] = &[
    (0x00, '@'),
    (0x01, '£'),
    (0x02, '$'),
    (0x03, '¥'),
    (0x04, '¿'),
    (0x05, '"'),
    (0x06, '¤'),
    (0x07, '%'),
    (0x08, '&'),
    (0x09, '\''),
    (0x0A, '\u{c}'),
    (0x0B, '*'),
    (0x0C, '+'),
    (0x0D, '\r'),
    (0x0E, '-'),
    (0x0F, '/'),
    (0x10, '<'),
    (0x11, '='),
    (0x12, '>'),
    (0x13, '¡'),
    (0x14, '^'),
    (0x15, '¡'),
    (0x16, '_'),
    (0x17, '#'),
    (0x18, '*'),
    (0x19, '।'),
    (0x1A, '॥'),
    (0x1B, '\u{1b}'),
    (0x1C, '०'),
    (0x1D, '१'),
    (0x1E, '२'),
    (0x1F, '३'),
    (0x20, '४'),
    (0x21, '५'),
    (0x22, '६'),
    (0x23, '७'),
    (0x24, '८'),
    (0x25, '९'),
    (0x26, '\u{0951}'),
    (0x27, '\u{0952}'),
    (0x28, '{'),
    (0x29, '}'),
    (0x2A, '\u{0953}'),
    (0x2B, '\u{0954}'),
    (0x2C, 'क़'),
    (0x2D, 'ख़'),
    (0x2E, 'ग़'),
    (0x2F, '\\'),
    (0x30, 'ज़'),
    (0x31, 'ड़'),
    (0x32, 'ढ़'),
    (0x33, 'फ़'),
    (0x34, 'य़'),
    (0x35, 'ॠ'),
    (0x36, 'ॡ'),
    (0x37, '\u{0962}'),
    (0x38, '\u{0963}'),
    (0x39, '॰'),
    (0x3A, 'ॱ'),
    (0x3C, '['),
    (0x3D, '~'),
    (0x3E, ']'),
    (0x40, '|'),
    (0x41, 'A'),
    (0x42, 'B'),
    (0x43, 'C'),
    (0x44, 'D'),
    (0x45, 'E'),
    (0x46, 'F'),
    (0x47, 'G'),
    (0x48, 'H'),
    (0x49, 'I'),
    (0x4A, 'J'),
    (0x4B, 'K'),
    (0x4C, 'L'),
    (0x4D, 'M'),
    (0x4E, 'N'),
    (0x4F, 'O'),
    (0x50, 'P'),
    (0x51, 'Q'),
    (0x52, 'R'),
    (0x53, 'S'),
    (0x54, 'T'),
    (0x55, 'U'),
    (0x56, 'V'),
    (0x57, 'W'),
    (0x58, 'X'),
    (0x59, 'Y'),
    (0x5A, 'Z'),
    (0x65, '€'),
];
