//! Bitmaps for every glyph the game draws: 1 bit per pixel, MSB first, rows
//! padded to whole bytes.

use super::Sprite;

pub const CLOCK: Sprite = Sprite::new(
    20,
    20,
    &[
        0b00000000, 0b00000000, 0b00000000,
        0b00000000, 0b00000000, 0b00000000,
        0b00000000, 0b11110000, 0b00000000,
        0b00000011, 0b11111100, 0b00000000,
        0b00000111, 0b00001110, 0b00000000,
        0b00001100, 0b00000011, 0b00000000,
        0b00011000, 0b01100001, 0b10000000,
        0b00011000, 0b01100001, 0b10000000,
        0b00110000, 0b01100000, 0b11000000,
        0b00110000, 0b01111110, 0b11000000,
        0b00110000, 0b01111110, 0b11000000,
        0b00110000, 0b00000000, 0b11000000,
        0b00011000, 0b00000001, 0b10000000,
        0b00011000, 0b00000001, 0b10000000,
        0b00001100, 0b00000011, 0b00000000,
        0b00000111, 0b00001110, 0b00000000,
        0b00000011, 0b11111100, 0b00000000,
        0b00111111, 0b11111111, 0b11000000,
        0b00111111, 0b11111111, 0b11000000,
        0b00000000, 0b00000000, 0b00000000,
    ],
);

pub const FLAG: Sprite = Sprite::new(
    20,
    20,
    &[
        0b00000000, 0b00000000, 0b00000000,
        0b00000000, 0b00000000, 0b00000000,
        0b00001100, 0b00000000, 0b00000000,
        0b00001111, 0b10000000, 0b00000000,
        0b00001111, 0b11111000, 0b00000000,
        0b00001111, 0b11111111, 0b00000000,
        0b00001111, 0b11111111, 0b11000000,
        0b00001111, 0b11111111, 0b11000000,
        0b00001111, 0b11111111, 0b00000000,
        0b00001111, 0b11110000, 0b00000000,
        0b00001111, 0b00000000, 0b00000000,
        0b00001100, 0b00000000, 0b00000000,
        0b00001100, 0b00000000, 0b00000000,
        0b00001100, 0b00000000, 0b00000000,
        0b00001100, 0b00000000, 0b00000000,
        0b00001100, 0b00000000, 0b00000000,
        0b00011110, 0b00000000, 0b00000000,
        0b00011110, 0b00000000, 0b00000000,
        0b00000000, 0b00000000, 0b00000000,
        0b00000000, 0b00000000, 0b00000000,
    ],
);

pub const MINE: Sprite = Sprite::new(
    20,
    20,
    &[
        0b00000000, 0b00000000, 0b00000000,
        0b00000000, 0b00000000, 0b00000000,
        0b00000000, 0b11110000, 0b00000000,
        0b00000011, 0b11111100, 0b00000000,
        0b00000111, 0b11111110, 0b00000000,
        0b00001111, 0b11111111, 0b00000000,
        0b00011111, 0b11111111, 0b10000000,
        0b00011111, 0b11111111, 0b10000000,
        0b00111111, 0b11111111, 0b11000000,
        0b00111111, 0b11111111, 0b11000000,
        0b00111111, 0b11111111, 0b11000000,
        0b00111111, 0b11111111, 0b11000000,
        0b00011111, 0b11111111, 0b10000000,
        0b00011111, 0b11111111, 0b10000000,
        0b00001111, 0b11111111, 0b00000000,
        0b00000111, 0b11111110, 0b00000000,
        0b00000011, 0b11111100, 0b00000000,
        0b00000000, 0b11110000, 0b00000000,
        0b00000000, 0b00000000, 0b00000000,
        0b00000000, 0b00000000, 0b00000000,
    ],
);

pub const TITLE: Sprite = Sprite::new(
    51,
    7,
    &[
        0b10001010, 0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000,
        0b11011000, 0b11100011, 0b00011010, 0b00100110, 0b00110011, 0b10001100, 0b10100000,
        0b10101010, 0b10010100, 0b10100010, 0b00101001, 0b01001010, 0b01010010, 0b11000000,
        0b10001010, 0b10010111, 0b10010010, 0b10101111, 0b01111010, 0b01011110, 0b10000000,
        0b10001010, 0b10010100, 0b00001010, 0b10101000, 0b01000011, 0b10010000, 0b10000000,
        0b10001010, 0b10010011, 0b00110001, 0b01000110, 0b00110010, 0b00001100, 0b10000000,
        0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000010, 0b00000000, 0b00000000,
    ],
);

pub const PLAY: Sprite = Sprite::new(
    16,
    7,
    &[
        0b11100100, 0b00000000,
        0b10010100, 0b11001001,
        0b10010100, 0b00101001,
        0b11100100, 0b11101001,
        0b10000101, 0b00100111,
        0b10000100, 0b11100001,
        0b00000000, 0b00000110,
    ],
);

pub const RESET_SCORE: Sprite = Sprite::new(
    48,
    7,
    &[
        0b11100000, 0b00000000, 0b00010000, 0b00000000, 0b00000000, 0b00000000,
        0b10010011, 0b00011001, 0b10011000, 0b00011001, 0b11001100, 0b10100110,
        0b10010100, 0b10100010, 0b01010000, 0b00100010, 0b00010010, 0b11001001,
        0b11100111, 0b10010011, 0b11010000, 0b00010010, 0b00010010, 0b10001111,
        0b10010100, 0b00001010, 0b00010000, 0b00001010, 0b00010010, 0b10001000,
        0b10010011, 0b00110001, 0b10001000, 0b00110001, 0b11001100, 0b10000110,
        0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000,
    ],
);

pub const QUIT: Sprite = Sprite::new(
    15,
    7,
    &[
        0b01110000, 0b00010100,
        0b10001010, 0b01000110,
        0b10001010, 0b01010100,
        0b10001010, 0b01010100,
        0b10001010, 0b01010100,
        0b01110001, 0b11010010,
        0b00011000, 0b00000000,
    ],
);

pub const ARROW: Sprite = Sprite::new(
    7,
    7,
    &[
        0b01000000,
        0b01100000,
        0b01110000,
        0b01111000,
        0b01110000,
        0b01100000,
        0b01000000,
    ],
);

pub const DIGITS: [Sprite; 10] = [
    Sprite::new(
        6,
        9,
        &[
            0b01111000,
            0b11001100,
            0b11001100,
            0b11001100,
            0b11001100,
            0b11001100,
            0b11001100,
            0b11001100,
            0b01111000,
        ],
    ),
    Sprite::new(
        6,
        9,
        &[
            0b11110000,
            0b00110000,
            0b00110000,
            0b00110000,
            0b00110000,
            0b00110000,
            0b00110000,
            0b00110000,
            0b11111100,
        ],
    ),
    Sprite::new(
        6,
        9,
        &[
            0b01111000,
            0b11001100,
            0b00001100,
            0b00001100,
            0b00011000,
            0b00110000,
            0b01100000,
            0b11000000,
            0b11111100,
        ],
    ),
    Sprite::new(
        6,
        9,
        &[
            0b01111000,
            0b11001100,
            0b00001100,
            0b00001100,
            0b00111000,
            0b00001100,
            0b00001100,
            0b11001100,
            0b01111000,
        ],
    ),
    Sprite::new(
        6,
        9,
        &[
            0b00111100,
            0b00101100,
            0b01101100,
            0b01001100,
            0b11001100,
            0b11111100,
            0b00001100,
            0b00001100,
            0b00001100,
        ],
    ),
    Sprite::new(
        6,
        9,
        &[
            0b11111100,
            0b11001100,
            0b11000000,
            0b11000000,
            0b11111000,
            0b00001100,
            0b00001100,
            0b11001100,
            0b01111000,
        ],
    ),
    Sprite::new(
        6,
        9,
        &[
            0b01111000,
            0b11001100,
            0b11000000,
            0b11000000,
            0b11111000,
            0b11001100,
            0b11001100,
            0b11001100,
            0b01111000,
        ],
    ),
    Sprite::new(
        6,
        9,
        &[
            0b11111100,
            0b11001100,
            0b00001100,
            0b00011000,
            0b00011000,
            0b00110000,
            0b00110000,
            0b01100000,
            0b01100000,
        ],
    ),
    Sprite::new(
        6,
        9,
        &[
            0b01111000,
            0b11001100,
            0b11001100,
            0b11001100,
            0b01111000,
            0b11001100,
            0b11001100,
            0b11001100,
            0b01111000,
        ],
    ),
    Sprite::new(
        6,
        9,
        &[
            0b01111000,
            0b11001100,
            0b11001100,
            0b11001100,
            0b01111100,
            0b00001100,
            0b00001100,
            0b11001100,
            0b01111000,
        ],
    ),
];
