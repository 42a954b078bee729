// Gujarati national language tables, TS 23.038 A.3.5 / A.2.5

pub(super) const LOCKED: &[(u8, char)] = &[
    (0x00, '\u{0a81}'),
    (0x01, '\u{0a82}'),
    (0x02, '\u{0a83}'),
    (0x03, 'અ'),
    (0x04, 'આ'),
    (0x05, 'ઇ'),
    (0x06, 'ઈ'),
    (0x07, 'ઉ'),
    (0x08, 'ઊ'),
    (0x09, 'ઋ'),
    (0x0A, '\n'),
    (0x0B, 'ઌ'),
    (0x0C, 'ઍ'),
    (0x0D, '\r'),
    (0x0F, 'એ'),
    (0x10, 'ઐ'),
    (0x11, 'ઑ'),
    (0x13, 'ઓ'),
    (0x14, 'ઔ'),
    (0x15, 'ક'),
    (0x16, 'ખ'),
    (0x17, 'ગ'),
    (0x18, 'ઘ'),
    (0x19, 'ઙ'),
    (0x1A, 'ચ'),
    (0x1B, '\u{1b}'),
    (0x1C, 'છ'),
    (0x1D, 'જ'),
    (0x1E, 'ઝ'),
    (0x1F, 'ઞ'),
    (0x20, ' '),
    (0x21, '!'),
    (0x22, 'ટ'),
    (0x23, 'ઠ'),
    (0x24, 'ડ'),
    (0x25, 'ઢ'),
    (0x26, 'ણ'),
    (0x27, 'ત'),
    (0x28, ')'),
    (0x29, '('),
    (0x2A, 'થ'),
    (0x2B, 'દ'),
    (0x2C, ','),
    (0x2D, 'ધ'),
    (0x2E, '.'),
    (0x2F, 'ન'),
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
    (0x3D, 'પ'),
    (0x3E, 'ફ'),
    (0x3F, '?'),
    (0x40, 'બ'),
    (0x41, 'ભ'),
    (0x42, 'મ'),
    (0x43, 'ય'),
    (0x44, 'ર'),
    (0x46, 'લ'),
    (0x47, 'ળ'),
    (0x49, 'વ'),
    (0x4A, 'શ'),
    (0x4B, 'ષ'),
    (0x4C, 'સ'),
    (0x4D, 'હ'),
    (0x4E, '\u{0abc}'),
    (0x4F, 'ઽ'),
    (0x50, '\u{0abe}'),
    (0x51, '\u{0abf}'),
    (0x52, '\u{0ac0}'),
    (0x53, '\u{0ac1}'),
    (0x54, '\u{0ac2}'),
    (0x55, '\u{0ac3}'),
    (0x56, '\u{0ac4}'),
    (0x57, '\u{0ac5}'),
    (0x59, '\u{0ac7}'),
    (0x5A, '\u{0ac8}'),
    (0x5B, '\u{0ac9}'),
    (0x5D, '\u{0acb}'),
    (0x5E, '\u{0acc}'),
    (0x5F, '\u{0acd}'),
    (0x60, 'ૐ'),
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
    (0x7B, 'ૠ'),
    (0x7C, 'ૡ'),
    (0x7D, '\u{0ae2}'),
    (0x7E, '\u{0ae3}'),
    (0x7F, '૱'),
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
    (0x1C, '૦'),
    (0x1D, '૧'),
    (0x1E, '૨'),
    (0x1F, '૩'),
    (0x20, '૪'),
    (0x21, '૫'),
    (0x22, '૬'),
    (0x23, '૭'),
    (0x24, '૮'),
    (0x25, '૯'),
    (0x28, '{'),
    (0x29, '}'),
    (0x2F, '\\'),
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
