//! Bitmap Text Rendering
//!
//! Procedural text rendering with a 5x7 bitmap font drawn as SDL2
//! rectangles. Covers Latin, Cyrillic, digits and the punctuation the
//! shell's strings use. Text is case-insensitive: everything is drawn
//! upper case.

use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::video::Window;

/// Glyph cell width in font pixels (5 pixels + 1 spacing)
pub const CHAR_WIDTH: u32 = 6;
/// Glyph height in font pixels
pub const CHAR_HEIGHT: u32 = 7;

/// Full block drawn for characters the font does not know
const UNKNOWN: &[u8; 7] = &[0b11111, 0b11111, 0b11111, 0b11111, 0b11111, 0b11111, 0b11111];

/// Returns the 5x7 pattern for `c` (1 = pixel on), upper-casing first
pub fn glyph(c: char) -> &'static [u8; 7] {
    let upper = c.to_uppercase().next().unwrap_or(c);
    match upper {
        // Latin, digits and punctuation
        'A' => &[0b01110, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001],
        'B' => &[0b11110, 0b10001, 0b10001, 0b11110, 0b10001, 0b10001, 0b11110],
        'C' => &[0b01110, 0b10001, 0b10000, 0b10000, 0b10000, 0b10001, 0b01110],
        'D' => &[0b11110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b11110],
        'E' => &[0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b11111],
        'F' => &[0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b10000],
        'G' => &[0b01110, 0b10001, 0b10000, 0b10111, 0b10001, 0b10001, 0b01110],
        'H' => &[0b10001, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001],
        'I' => &[0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b11111],
        'J' => &[0b00111, 0b00010, 0b00010, 0b00010, 0b00010, 0b10010, 0b01100],
        'K' => &[0b10001, 0b10010, 0b10100, 0b11000, 0b10100, 0b10010, 0b10001],
        'L' => &[0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b11111],
        'M' => &[0b10001, 0b11011, 0b10101, 0b10001, 0b10001, 0b10001, 0b10001],
        'N' => &[0b10001, 0b11001, 0b10101, 0b10011, 0b10001, 0b10001, 0b10001],
        'O' => &[0b01110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110],
        'P' => &[0b11110, 0b10001, 0b10001, 0b11110, 0b10000, 0b10000, 0b10000],
        'Q' => &[0b01110, 0b10001, 0b10001, 0b10001, 0b10101, 0b10010, 0b01101],
        'R' => &[0b11110, 0b10001, 0b10001, 0b11110, 0b10100, 0b10010, 0b10001],
        'S' => &[0b01110, 0b10001, 0b10000, 0b01110, 0b00001, 0b10001, 0b01110],
        'T' => &[0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100],
        'U' => &[0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110],
        'V' => &[0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01010, 0b00100],
        'W' => &[0b10001, 0b10001, 0b10001, 0b10001, 0b10101, 0b11011, 0b10001],
        'X' => &[0b10001, 0b10001, 0b01010, 0b00100, 0b01010, 0b10001, 0b10001],
        'Y' => &[0b10001, 0b10001, 0b01010, 0b00100, 0b00100, 0b00100, 0b00100],
        'Z' => &[0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b10000, 0b11111],
        '0' => &[0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110],
        '1' => &[0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
        '2' => &[0b01110, 0b10001, 0b00001, 0b00110, 0b01000, 0b10000, 0b11111],
        '3' => &[0b11111, 0b00010, 0b00100, 0b00010, 0b00001, 0b10001, 0b01110],
        '4' => &[0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010],
        '5' => &[0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110],
        '6' => &[0b00110, 0b01000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110],
        '7' => &[0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000],
        '8' => &[0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110],
        '9' => &[0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00010, 0b01100],
        ':' => &[0b00000, 0b00000, 0b00100, 0b00000, 0b00100, 0b00000, 0b00000],
        '/' => &[0b00001, 0b00010, 0b00010, 0b00100, 0b01000, 0b01000, 0b10000],
        '<' => &[0b00010, 0b00100, 0b01000, 0b10000, 0b01000, 0b00100, 0b00010],
        '>' => &[0b01000, 0b00100, 0b00010, 0b00001, 0b00010, 0b00100, 0b01000],
        '-' => &[0b00000, 0b00000, 0b00000, 0b11111, 0b00000, 0b00000, 0b00000],
        '+' => &[0b00000, 0b00100, 0b00100, 0b11111, 0b00100, 0b00100, 0b00000],
        '.' => &[0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b01100, 0b01100],
        '!' => &[0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00000, 0b00100],
        '(' => &[0b00010, 0b00100, 0b01000, 0b01000, 0b01000, 0b00100, 0b00010],
        ')' => &[0b01000, 0b00100, 0b00010, 0b00010, 0b00010, 0b00100, 0b01000],
        ' ' => &[0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000],
        // Cyrillic
        'А' => &[0b01110, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001],
        'Б' => &[0b11111, 0b10000, 0b10000, 0b11110, 0b10001, 0b10001, 0b11110],
        'В' => &[0b11110, 0b10001, 0b10001, 0b11110, 0b10001, 0b10001, 0b11110],
        'Г' => &[0b11111, 0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b10000],
        'Д' => &[0b00110, 0b01010, 0b01010, 0b01010, 0b01010, 0b11111, 0b10001],
        'Е' => &[0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b11111],
        'Ё' => &[0b01010, 0b00000, 0b11111, 0b10000, 0b11110, 0b10000, 0b11111],
        'Ж' => &[0b10101, 0b10101, 0b10101, 0b01110, 0b10101, 0b10101, 0b10101],
        'З' => &[0b01110, 0b10001, 0b00001, 0b00110, 0b00001, 0b10001, 0b01110],
        'И' => &[0b10001, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b10001],
        'Й' => &[0b01010, 0b00100, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001],
        'К' => &[0b10001, 0b10010, 0b10100, 0b11000, 0b10100, 0b10010, 0b10001],
        'Л' => &[0b00111, 0b01001, 0b01001, 0b01001, 0b01001, 0b01001, 0b10001],
        'М' => &[0b10001, 0b11011, 0b10101, 0b10001, 0b10001, 0b10001, 0b10001],
        'Н' => &[0b10001, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001],
        'О' => &[0b01110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110],
        'П' => &[0b11111, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001],
        'Р' => &[0b11110, 0b10001, 0b10001, 0b11110, 0b10000, 0b10000, 0b10000],
        'С' => &[0b01110, 0b10001, 0b10000, 0b10000, 0b10000, 0b10001, 0b01110],
        'Т' => &[0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100],
        'У' => &[0b10001, 0b10001, 0b10001, 0b01111, 0b00001, 0b10001, 0b01110],
        'Ф' => &[0b00100, 0b01110, 0b10101, 0b10101, 0b10101, 0b01110, 0b00100],
        'Х' => &[0b10001, 0b10001, 0b01010, 0b00100, 0b01010, 0b10001, 0b10001],
        'Ц' => &[0b10010, 0b10010, 0b10010, 0b10010, 0b10010, 0b11111, 0b00001],
        'Ч' => &[0b10001, 0b10001, 0b10001, 0b01111, 0b00001, 0b00001, 0b00001],
        'Ш' => &[0b10101, 0b10101, 0b10101, 0b10101, 0b10101, 0b10101, 0b11111],
        'Щ' => &[0b10101, 0b10101, 0b10101, 0b10101, 0b10101, 0b11111, 0b00001],
        'Ъ' => &[0b11000, 0b01000, 0b01000, 0b01110, 0b01001, 0b01001, 0b01110],
        'Ы' => &[0b10001, 0b10001, 0b10001, 0b11101, 0b10011, 0b10011, 0b11101],
        'Ь' => &[0b10000, 0b10000, 0b10000, 0b11110, 0b10001, 0b10001, 0b11110],
        'Э' => &[0b01110, 0b10001, 0b00001, 0b00111, 0b00001, 0b10001, 0b01110],
        'Ю' => &[0b10010, 0b10101, 0b10101, 0b11101, 0b10101, 0b10101, 0b10010],
        'Я' => &[0b01111, 0b10001, 0b10001, 0b01111, 0b00101, 0b01001, 0b10001],
        '%' => &[0b11001, 0b11010, 0b00010, 0b00100, 0b01000, 0b01011, 0b10011],
        ',' => &[0b00000, 0b00000, 0b00000, 0b00000, 0b01100, 0b00100, 0b01000],
        _ => UNKNOWN,
    }
}

/// Size in pixels of `text` drawn at `scale`
pub fn text_size(text: &str, scale: u32) -> (u32, u32) {
    let chars = text.chars().count() as u32;
    (chars * CHAR_WIDTH * scale, CHAR_HEIGHT * scale)
}

/// Renders bitmap text using procedural rectangles (5x7 font)
///
/// # Parameters
///
/// - `canvas`: SDL2 canvas to render to
/// - `text`: Text string to render (case-insensitive)
/// - `x`, `y`: Top-left position in pixels
/// - `color`: Text color, alpha included
/// - `scale`: Scaling factor (1 = 5x7 pixels, 2 = 10x14 pixels, etc.)
pub fn draw_simple_text(
    canvas: &mut Canvas<Window>,
    text: &str,
    x: i32,
    y: i32,
    color: Color,
    scale: u32,
) -> Result<(), String> {
    canvas.set_draw_color(color);

    let char_width = CHAR_WIDTH * scale;
    let pixel_size = scale as i32;

    for (i, c) in text.chars().enumerate() {
        let char_x = x + (i as i32 * char_width as i32);
        if c == ' ' {
            continue;
        }

        // Draw the character pixel by pixel
        for (row, &pattern_row) in glyph(c).iter().enumerate() {
            for col in 0..5 {
                if (pattern_row >> (4 - col)) & 1 == 1 {
                    canvas.fill_rect(Rect::new(
                        char_x + (col * pixel_size),
                        y + (row as i32 * pixel_size),
                        scale,
                        scale,
                    ))?;
                }
            }
        }
    }

    Ok(())
}
