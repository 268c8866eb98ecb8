//! Bitmap and metrics for the resident 5x7 proportional typeface
//!
//! Derived from the classic public-domain 5x7 LCD font. Each glyph is
//! cropped to its ink box and packed row-major, MSB first, starting on a
//! fresh byte.

use super::Glyph;

/// Packed glyph bitmaps (376 bytes)
#[rustfmt::skip]
pub(super) static BITMAP: [u8; 376] = [
    0xFA, 0xB6, 0x80, 0x52, 0xBE, 0xAF, 0xA9, 0x40, 0x23, 0xE8, 0xE2, 0xF8,
    0x80, 0xC6, 0x44, 0x44, 0x4C, 0x60, 0x64, 0xA8, 0x8A, 0xC9, 0xA0, 0xE0,
    0x2A, 0x48, 0x88, 0x88, 0x92, 0xA0, 0x51, 0x3E, 0x45, 0x00, 0x21, 0x3E,
    0x42, 0x00, 0xD8, 0xF8, 0xF0, 0x08, 0x88, 0x88, 0x00, 0x74, 0x67, 0x5C,
    0xC5, 0xC0, 0x59, 0x24, 0xB8, 0x74, 0x42, 0x22, 0x23, 0xE0, 0xF8, 0x88,
    0x20, 0xC5, 0xC0, 0x11, 0x95, 0x2F, 0x88, 0x40, 0xFC, 0x3C, 0x10, 0xC5,
    0xC0, 0x32, 0x21, 0xE8, 0xC5, 0xC0, 0xF8, 0x44, 0x44, 0x21, 0x00, 0x74,
    0x62, 0xE8, 0xC5, 0xC0, 0x74, 0x62, 0xF0, 0x89, 0x80, 0xF3, 0xC0, 0xF3,
    0x60, 0x12, 0x48, 0x42, 0x10, 0xF8, 0x3E, 0x84, 0x21, 0x24, 0x80, 0x74,
    0x42, 0x22, 0x00, 0x80, 0x74, 0x42, 0xDA, 0xD5, 0xC0, 0x74, 0x63, 0x1F,
    0xC6, 0x20, 0xF4, 0x63, 0xE8, 0xC7, 0xC0, 0x74, 0x61, 0x08, 0x45, 0xC0,
    0xE4, 0xA3, 0x18, 0xCB, 0x80, 0xFC, 0x21, 0xE8, 0x43, 0xE0, 0xFC, 0x21,
    0xC8, 0x42, 0x00, 0x74, 0x61, 0x09, 0xC5, 0xC0, 0x8C, 0x63, 0xF8, 0xC6,
    0x20, 0xE9, 0x24, 0xB8, 0x38, 0x84, 0x21, 0x49, 0x80, 0x8C, 0xA9, 0x8A,
    0x4A, 0x20, 0x84, 0x21, 0x08, 0x43, 0xE0, 0x8E, 0xEB, 0x18, 0xC6, 0x20,
    0x8C, 0x73, 0x59, 0xC6, 0x20, 0x74, 0x63, 0x18, 0xC5, 0xC0, 0xF4, 0x63,
    0xE8, 0x42, 0x00, 0x74, 0x63, 0x1A, 0xC9, 0xA0, 0xF4, 0x63, 0xEA, 0x4A,
    0x20, 0x7C, 0x20, 0xE0, 0x87, 0xC0, 0xF9, 0x08, 0x42, 0x10, 0x80, 0x8C,
    0x63, 0x18, 0xC5, 0xC0, 0x8C, 0x63, 0x18, 0xA8, 0x80, 0x8C, 0x63, 0x5A,
    0xEE, 0x20, 0x8C, 0x54, 0x45, 0x46, 0x20, 0x8C, 0x54, 0x42, 0x10, 0x80,
    0xF8, 0x44, 0x44, 0x43, 0xE0, 0xF2, 0x49, 0x38, 0x82, 0x08, 0x20, 0x80,
    0xE4, 0x92, 0x78, 0x22, 0xA2, 0xF8, 0x88, 0x80, 0x70, 0x5F, 0x17, 0x80,
    0x84, 0x2D, 0x98, 0xC7, 0xC0, 0x74, 0x21, 0x17, 0x00, 0x08, 0x5B, 0x38,
    0xC5, 0xE0, 0x74, 0x7F, 0x07, 0x00, 0x32, 0x51, 0xC4, 0x21, 0x00, 0x7C,
    0x5E, 0x13, 0x00, 0x84, 0x2D, 0x98, 0xC6, 0x20, 0x43, 0x24, 0xB8, 0x10,
    0x31, 0x19, 0x60, 0x88, 0x9A, 0xCA, 0x90, 0xC9, 0x24, 0xB8, 0xD5, 0x6B,
    0x18, 0x80, 0xB6, 0x63, 0x18, 0x80, 0x74, 0x63, 0x17, 0x00, 0xF4, 0x7D,
    0x08, 0x00, 0x6C, 0xDE, 0x10, 0x80, 0xB6, 0x61, 0x08, 0x00, 0x74, 0x1C,
    0x1F, 0x00, 0x42, 0x38, 0x84, 0x24, 0xC0, 0x8C, 0x63, 0x36, 0x80, 0x8C,
    0x62, 0xA2, 0x00, 0x8C, 0x6B, 0x55, 0x00, 0x8A, 0x88, 0xA8, 0x80, 0x8C,
    0x5E, 0x17, 0x00, 0xF8, 0x88, 0x8F, 0x80, 0x29, 0x44, 0x88, 0xFE, 0x89,
    0x14, 0xA0, 0x45, 0x44,
];

/// Glyph table covering 0x20 ..= 0x7E
#[rustfmt::skip]
pub(super) static GLYPHS: [Glyph; 95] = [
    Glyph::new(  0, 0, 0, 3, 0,  0), // 0x20 ' '
    Glyph::new(  0, 1, 7, 4, 1, -7), // 0x21 '!'
    Glyph::new(  1, 3, 3, 4, 0, -7), // 0x22 '"'
    Glyph::new(  3, 5, 7, 6, 0, -7), // 0x23 '#'
    Glyph::new(  8, 5, 7, 6, 0, -7), // 0x24 '$'
    Glyph::new( 13, 5, 7, 6, 0, -7), // 0x25 '%'
    Glyph::new( 18, 5, 7, 6, 0, -7), // 0x26 '&'
    Glyph::new( 23, 1, 3, 4, 1, -7), // 0x27 '\''
    Glyph::new( 24, 3, 7, 4, 0, -7), // 0x28 '('
    Glyph::new( 27, 3, 7, 4, 0, -7), // 0x29 ')'
    Glyph::new( 30, 5, 5, 6, 0, -6), // 0x2A '*'
    Glyph::new( 34, 5, 5, 6, 0, -6), // 0x2B '+'
    Glyph::new( 38, 2, 3, 5, 1, -3), // 0x2C ','
    Glyph::new( 39, 5, 1, 6, 0, -4), // 0x2D '-'
    Glyph::new( 40, 2, 2, 5, 1, -2), // 0x2E '.'
    Glyph::new( 41, 5, 5, 6, 0, -6), // 0x2F '/'
    Glyph::new( 45, 5, 7, 6, 0, -7), // 0x30 '0'
    Glyph::new( 50, 3, 7, 4, 0, -7), // 0x31 '1'
    Glyph::new( 53, 5, 7, 6, 0, -7), // 0x32 '2'
    Glyph::new( 58, 5, 7, 6, 0, -7), // 0x33 '3'
    Glyph::new( 63, 5, 7, 6, 0, -7), // 0x34 '4'
    Glyph::new( 68, 5, 7, 6, 0, -7), // 0x35 '5'
    Glyph::new( 73, 5, 7, 6, 0, -7), // 0x36 '6'
    Glyph::new( 78, 5, 7, 6, 0, -7), // 0x37 '7'
    Glyph::new( 83, 5, 7, 6, 0, -7), // 0x38 '8'
    Glyph::new( 88, 5, 7, 6, 0, -7), // 0x39 '9'
    Glyph::new( 93, 2, 5, 5, 1, -6), // 0x3A ':'
    Glyph::new( 95, 2, 6, 5, 1, -6), // 0x3B ';'
    Glyph::new( 97, 4, 7, 5, 0, -7), // 0x3C '<'
    Glyph::new(101, 5, 3, 6, 0, -5), // 0x3D '='
    Glyph::new(103, 4, 7, 5, 0, -7), // 0x3E '>'
    Glyph::new(107, 5, 7, 6, 0, -7), // 0x3F '?'
    Glyph::new(112, 5, 7, 6, 0, -7), // 0x40 '@'
    Glyph::new(117, 5, 7, 6, 0, -7), // 0x41 'A'
    Glyph::new(122, 5, 7, 6, 0, -7), // 0x42 'B'
    Glyph::new(127, 5, 7, 6, 0, -7), // 0x43 'C'
    Glyph::new(132, 5, 7, 6, 0, -7), // 0x44 'D'
    Glyph::new(137, 5, 7, 6, 0, -7), // 0x45 'E'
    Glyph::new(142, 5, 7, 6, 0, -7), // 0x46 'F'
    Glyph::new(147, 5, 7, 6, 0, -7), // 0x47 'G'
    Glyph::new(152, 5, 7, 6, 0, -7), // 0x48 'H'
    Glyph::new(157, 3, 7, 4, 0, -7), // 0x49 'I'
    Glyph::new(160, 5, 7, 6, 0, -7), // 0x4A 'J'
    Glyph::new(165, 5, 7, 6, 0, -7), // 0x4B 'K'
    Glyph::new(170, 5, 7, 6, 0, -7), // 0x4C 'L'
    Glyph::new(175, 5, 7, 6, 0, -7), // 0x4D 'M'
    Glyph::new(180, 5, 7, 6, 0, -7), // 0x4E 'N'
    Glyph::new(185, 5, 7, 6, 0, -7), // 0x4F 'O'
    Glyph::new(190, 5, 7, 6, 0, -7), // 0x50 'P'
    Glyph::new(195, 5, 7, 6, 0, -7), // 0x51 'Q'
    Glyph::new(200, 5, 7, 6, 0, -7), // 0x52 'R'
    Glyph::new(205, 5, 7, 6, 0, -7), // 0x53 'S'
    Glyph::new(210, 5, 7, 6, 0, -7), // 0x54 'T'
    Glyph::new(215, 5, 7, 6, 0, -7), // 0x55 'U'
    Glyph::new(220, 5, 7, 6, 0, -7), // 0x56 'V'
    Glyph::new(225, 5, 7, 6, 0, -7), // 0x57 'W'
    Glyph::new(230, 5, 7, 6, 0, -7), // 0x58 'X'
    Glyph::new(235, 5, 7, 6, 0, -7), // 0x59 'Y'
    Glyph::new(240, 5, 7, 6, 0, -7), // 0x5A 'Z'
    Glyph::new(245, 3, 7, 4, 0, -7), // 0x5B '['
    Glyph::new(248, 5, 5, 6, 0, -6), // 0x5C '\\'
    Glyph::new(252, 3, 7, 4, 0, -7), // 0x5D ']'
    Glyph::new(255, 5, 3, 6, 0, -7), // 0x5E '^'
    Glyph::new(257, 5, 1, 6, 0, -1), // 0x5F '_'
    Glyph::new(258, 3, 3, 4, 0, -7), // 0x60 '`'
    Glyph::new(260, 5, 5, 6, 0, -5), // 0x61 'a'
    Glyph::new(264, 5, 7, 6, 0, -7), // 0x62 'b'
    Glyph::new(269, 5, 5, 6, 0, -5), // 0x63 'c'
    Glyph::new(273, 5, 7, 6, 0, -7), // 0x64 'd'
    Glyph::new(278, 5, 5, 6, 0, -5), // 0x65 'e'
    Glyph::new(282, 5, 7, 6, 0, -7), // 0x66 'f'
    Glyph::new(287, 5, 5, 6, 0, -5), // 0x67 'g'
    Glyph::new(291, 5, 7, 6, 0, -7), // 0x68 'h'
    Glyph::new(296, 3, 7, 4, 0, -7), // 0x69 'i'
    Glyph::new(299, 4, 7, 5, 0, -7), // 0x6A 'j'
    Glyph::new(303, 4, 7, 5, 0, -7), // 0x6B 'k'
    Glyph::new(307, 3, 7, 4, 0, -7), // 0x6C 'l'
    Glyph::new(310, 5, 5, 6, 0, -5), // 0x6D 'm'
    Glyph::new(314, 5, 5, 6, 0, -5), // 0x6E 'n'
    Glyph::new(318, 5, 5, 6, 0, -5), // 0x6F 'o'
    Glyph::new(322, 5, 5, 6, 0, -5), // 0x70 'p'
    Glyph::new(326, 5, 5, 6, 0, -5), // 0x71 'q'
    Glyph::new(330, 5, 5, 6, 0, -5), // 0x72 'r'
    Glyph::new(334, 5, 5, 6, 0, -5), // 0x73 's'
    Glyph::new(338, 5, 7, 6, 0, -7), // 0x74 't'
    Glyph::new(343, 5, 5, 6, 0, -5), // 0x75 'u'
    Glyph::new(347, 5, 5, 6, 0, -5), // 0x76 'v'
    Glyph::new(351, 5, 5, 6, 0, -5), // 0x77 'w'
    Glyph::new(355, 5, 5, 6, 0, -5), // 0x78 'x'
    Glyph::new(359, 5, 5, 6, 0, -5), // 0x79 'y'
    Glyph::new(363, 5, 5, 6, 0, -5), // 0x7A 'z'
    Glyph::new(367, 3, 7, 4, 0, -7), // 0x7B '{'
    Glyph::new(370, 1, 7, 4, 1, -7), // 0x7C '|'
    Glyph::new(371, 3, 7, 4, 0, -7), // 0x7D '}'
    Glyph::new(374, 5, 3, 6, 0, -5), // 0x7E '~'
];
