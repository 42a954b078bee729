// Portuguese national language tables, TS 23.038 A.3.3 / A.2.3

pub(super) const LOCKED: &[(u8, char)] = &[
    (0x00, '@'),
    (0x01, '£'),
    (0x02, '$'),
    (0x03, '¥'),
    (0x04, 'ê'),
    (0x05, 'é'),
    (0x06, 'ú'),
    (0x07, 'í'),
    (0x08, 'ó'),
    (0x09, 'ç'),
    (0x0A, '\n'),
    (0x0B, 'Ô'),
    (0x0C, 'ô'),
    (0x0D, '\r'),
    (0x0E, 'Á'),
    (0x0F, 'á'),
    (0x10, 'Δ'),
    (0x11, '_'),
    (0x12, 'ª'),
    (0x13, 'Ç'),
    (0x14, 'À'),
    (0x15, '∞'),
    (0x16, '^'),
    (0x17, '\\'),
    (0x18, '€'),
    (0x19, 'Ó'),
    (0x1A, '|'),
    (0x1B, '\u{1b}'),
    (0x1C, 'Â'),
    (0x1D, 'â'),
    (0x1E, 'Ê'),
    (0x1F, 'É'),
    (0x20, ' '),
    (0x21, '!'),
    (0x22, '"'),
    (0x23, '#'),
    (0x24, 'º'),
    (0x25, '%'),
    (0x26, '&'),
    (0x27, '\''),
    (0x28, '('),
    (0x29, ')'),
    (0x2A, '*'),
    (0x2B, '+'),
    (0x2C, ','),
    (0x2D, '-'),
    (0x2E, '.'),
    (0x2F, '/'),
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
    (0x3C, '<'),
    (0x3D, '='),
    (0x3E, '>'),
    (0x3F, '?'),
    (0x40, 'Í'),
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
    (0x5B, 'Ã'),
    (0x5C, 'Õ'),
    (0x5D, 'Ú'),
    (0x5E, 'Ü'),
    (0x5F, '§'),
    (0x60, '~'),
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
    (0x7B, 'ã'),
    (0x7C, 'õ'),
    (0x7D, '`'),
    (0x7E, 'ü'),
    (0x7F, 'à'),
];

pub(super) const SHIFT: &[(u8, char)] = &[
    (0x05, 'ê'),
    (0x09, 'ç'),
    (0x0A, '\u{c}'),
    (0x0B, 'Ô'),
    (0x0C, 'ô'),
    (0x0E, 'Á'),
    (0x0F, 'á'),
    (0x12, 'Φ'),
    (0x13, 'Γ'),
    (0x14, '^'),
    (0x15, 'Ω'),
    (0x16, 'Π'),
    (0x17, 'Ψ'),
    (0x18, 'Σ'),
    (0x19, 'Θ'),
    (0x1B, '\u{1b}'),
    (0x1F, 'Ê'),
    (0x28, '{'),
    (0x29, '}'),
    (0x2F, '\\'),
    (0x3C, '['),
    (0x3D, '~'),
    (0x3E, ']'),
    (0x40, '|'),
    (0x41, 'À'),
    (0x49, 'Í'),
    (0x4F, 'Ó'),
    (0x55, 'Ú'),
    (0x5B, 'Ã'),
    (0x5C, 'Õ'),
    (0x61, 'Â'),
    (0x65, '€'),
    (0x69, 'í'),
    (0x6F, 'ó'),
    (0x75, 'ú'),
    (0x7B, 'ã'),
    (0x7C, 'õ'),
    (0x7F, 'â'),
];
