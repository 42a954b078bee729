// Urdu national language tables, TS 23.038 A.3.13 / A.2.13

pub(super) const LOCKED: &[(u8, char)] = &[
    (0x00, 'ا'),
    (0x01, 'آ'),
    (0x02, 'ب'),
    (0x03, 'ٻ'),
    (0x04, 'ڀ'),
    (0x05, 'پ'),
    (0x06, 'ڦ'),
    (0x07, 'ت'),
    (0x08, 'ۂ'),
    (0x09, 'ٿ'),
    (0x0A, '\n'),
    (0x0B, 'ٹ'),
    (0x0C, 'ٽ'),
    (0x0D, '\r'),
    (0x0E, 'ٺ'),
    (0x0F, 'ټ'),
    (0x10, 'ث'),
    (0x11, 'ج'),
    (0x12, 'ځ'),
    (0x13, 'ڄ'),
    (0x14, 'ڃ'),
    (0x15, 'څ'),
    (0x16, 'چ'),
    (0x17, 'ڇ'),
    (0x18, 'ح'),
    (0x19, 'خ'),
    (0x1A, 'د'),
    (0x1B, '\u{1b}'),
    (0x1C, 'ڌ'),
    (0x1D, 'ڈ'),
    (0x1E, 'ډ'),
    (0x1F, 'ڊ'),
    (0x20, ' '),
    (0x21, '!'),
    (0x22, 'ذ'),
    (0x23, 'ڏ'),
    (0x24, 'ڍ'),
    (0x25, 'ر'),
    (0x26, 'ڑ'),
    (0x27, 'ړ'),
    (0x28, ')'),
    (0x29, '('),
    (0x2A, 'ڙ'),
    (0x2B, 'ز'),
    (0x2C, ','),
    (0x2D, 'ږ'),
    (0x2E, '.'),
    (0x2F, 'ژ'),
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
    (0x3C, 'ښ'),
    (0x3D, 'س'),
    (0x3E, 'ش'),
    (0x3F, '?'),
    (0x40, 'ص'),
    (0x41, 'ض'),
    (0x42, 'ط'),
    (0x43, 'ظ'),
    (0x44, 'ع'),
    (0x45, 'غ'),
    (0x46, 'ف'),
    (0x47, 'ق'),
    (0x48, 'ک'),
    (0x49, 'ڪ'),
    (0x4A, 'ګ'),
    (0x4B, 'گ'),
    (0x4C, 'ڳ'),
    (0x4D, 'ڱ'),
    (0x4E, 'ل'),
    (0x4F, 'م'),
    (0x50, 'ن'),
    (0x51, 'ں'),
    (0x52, 'ڻ'),
    (0x53, 'ڼ'),
    (0x54, 'و'),
    (0x55, 'ؤ'),
    (0x56, 'ہ'),
    (0x57, 'ھ'),
    (0x58, 'ء'),
    (0x59, 'ی'),
    (0x5A, 'ې'),
    (0x5B, 'ے'),
    (0x5C, '\u{064b}'),
    (0x5D, '\u{064c}'),
    (0x5E, '\u{064d}'),
    (0x5F, '\u{0670}'),
    (0x60, '\u{0651}'),
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
    (0x7B, '\u{0655}'),
    (0x7C, '\u{0652}'),
    (0x7D, '\u{0658}'),
    (0x7E, '٪'),
    (0x7F, '؎'),
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
    (0x19, '؀'),
    (0x1A, '؁'),
    (0x1B, '\u{1b}'),
    (0x1C, '۰'),
    (0x1D, '۱'),
    (0x1E, '۲'),
    (0x1F, '۳'),
    (0x20, '۴'),
    (0x21, '۵'),
    (0x22, '۶'),
    (0x23, '۷'),
    (0x24, '۸'),
    (0x25, '۹'),
    (0x26, '،'),
    (0x27, '؍'),
    (0x28, '{'),
    (0x29, '}'),
    (0x2A, '؛'),
    (0x2B, '؟'),
    (0x2C, '\u{0654}'),
    (0x2D, '\u{0656}'),
    (0x2E, '\u{0657}'),
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
