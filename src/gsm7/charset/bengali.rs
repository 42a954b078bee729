// Bengali national language tables, TS 23.038 A.3.4 / A.2.4

pub(super) const LOCKED: &[(u8, char)] = &[
    (0x00, '\u{0981}'),
    (0x01, '\u{0982}'),
    (0x02, '\u{0983}'),
    (0x03, 'অ'),
    (0x04, 'আ'),
    (0x05, 'ই'),
    (0x06, 'ঈ'),
    (0x07, 'উ'),
    (0x08, 'ঊ'),
    (0x09, 'ঋ'),
    (0x0A, '\n'),
    (0x0B, 'ঌ'),
    (0x0D, '\r'),
    (0x0F, 'এ'),
    (0x10, 'ঐ'),
    (0x13, 'ও'),
    (0x14, 'ঔ'),
    (0x15, 'ক'),
    (0x16, 'খ'),
    (0x17, 'গ'),
    (0x18, 'ঘ'),
    (0x19, 'ঙ'),
    (0x1A, 'চ'),
    (0x1B, '\u{1b}'),
    (0x1C, 'ছ'),
    (0x1D, 'জ'),
    (0x1E, 'ঝ'),
    (0x1F, 'ঞ'),
    (0x20, ' '),
    (0x21, '!'),
    (0x22, 'ট'),
    (0x23, 'ঠ'),
    (0x24, 'ড'),
    (0x25, 'ঢ'),
    (0x26, 'ণ'),
    (0x27, 'ত'),
    (0x28, ')'),
    (0x29, '('),
    (0x2A, 'থ'),
    (0x2B, 'দ'),
    (0x2C, ','),
    (0x2D, 'ধ'),
    (0x2E, '.'),
    (0x2F, 'ন'),
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
    (0x3D, 'প'),
    (0x3E, 'ফ'),
    (0x3F, '?'),
    (0x40, 'ব'),
    (0x41, 'ভ'),
    (0x42, 'ম'),
    (0x43, 'য'),
    (0x44, 'র'),
    (0x46, 'ল'),
    (0x4A, 'শ'),
    (0x4B, 'ষ'),
    (0x4C, 'স'),
    (0x4D, 'হ'),
    (0x4E, '\u{09bc}'),
    (0x4F, 'ঽ'),
    (0x50, '\u{09be}'),
    (0x51, '\u{09bf}'),
    (0x52, '\u{09c0}'),
    (0x53, '\u{09c1}'),
    (0x54, '\u{09c2}'),
    (0x55, '\u{09c3}'),
    (0x56, '\u{09c4}'),
    (0x59, '\u{09c7}'),
    (0x5A, '\u{09c8}'),
    (0x5D, '\u{09cb}'),
    (0x5E, '\u{09cc}'),
    (0x5F, '\u{09cd}'),
    (0x60, 'ৎ'),
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
    (0x7B, '\u{09d7}'),
    (0x7C, 'ড়'),
    (0x7D, 'ঢ়'),
    (0x7E, 'য়'),
    (0x7F, 'ৠ'),
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
    (0x1C, '০'),
    (0x1D, '১'),
    (0x1E, '২'),
    (0x1F, '৩'),
    (0x20, '৪'),
    (0x21, '৫'),
    (0x22, '৬'),
    (0x23, '৭'),
    (0x24, '৮'),
    (0x25, '৯'),
    (0x26, '৲'),
    (0x27, '৳'),
    (0x28, '{'),
    (0x29, '}'),
    (0x2A, '৴'),
    (0x2B, '৵'),
    (0x2C, '৶'),
    (0x2D, '৷'),
    (0x2E, '৸'),
    (0x2F, '\\'),
    (0x30, '৹'),
    (0x31, '৺'),
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
