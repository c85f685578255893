use crate::artifacts::geometry::{Path, Point};

pub const GLYPH_GRID_WIDTH: f64 = 10.0;
pub const GLYPH_GRID_HEIGHT: f64 = 14.0;

pub const CHAR_WIDTH: i32 = 25;
pub const CHAR_HEIGHT: i32 = 35;
pub const CHAR_SPACING: i32 = 6;

type Glyph = &'static [&'static [(i32, i32)]];

/// Single-stroke glyphs on a 10x14 grid, origin top-left.
pub const FONT: phf::Map<char, Glyph> = phf::phf_map! {
    'A' => &[&[(0, 14), (5, 0), (10, 14)], &[(2, 9), (8, 9)]],
    'B' => &[&[(0, 0), (0, 14), (7, 14), (10, 11), (10, 9), (7, 7), (0, 7), (7, 7), (10, 5), (10, 2), (7, 0), (0, 0)]],
    'C' => &[&[(10, 2), (7, 0), (3, 0), (0, 3), (0, 11), (3, 14), (7, 14), (10, 12)]],
    'D' => &[&[(0, 0), (0, 14), (6, 14), (10, 11), (10, 3), (6, 0), (0, 0)]],
    'E' => &[&[(10, 0), (0, 0), (0, 14), (10, 14)], &[(0, 7), (7, 7)]],
    'F' => &[&[(10, 0), (0, 0), (0, 14)], &[(0, 7), (7, 7)]],
    'G' => &[&[(10, 2), (7, 0), (3, 0), (0, 3), (0, 11), (3, 14), (7, 14), (10, 11), (10, 7), (5, 7)]],
    'H' => &[&[(0, 0), (0, 14)], &[(10, 0), (10, 14)], &[(0, 7), (10, 7)]],
    'I' => &[&[(2, 0), (8, 0)], &[(5, 0), (5, 14)], &[(2, 14), (8, 14)]],
    'J' => &[&[(10, 0), (10, 11), (7, 14), (3, 14), (0, 11)]],
    'K' => &[&[(0, 0), (0, 14)], &[(10, 0), (0, 7), (10, 14)]],
    'L' => &[&[(0, 0), (0, 14), (10, 14)]],
    'M' => &[&[(0, 14), (0, 0), (5, 7), (10, 0), (10, 14)]],
    'N' => &[&[(0, 14), (0, 0), (10, 14), (10, 0)]],
    'O' => &[&[(3, 0), (7, 0), (10, 3), (10, 11), (7, 14), (3, 14), (0, 11), (0, 3), (3, 0)]],
    'P' => &[&[(0, 14), (0, 0), (7, 0), (10, 2), (10, 5), (7, 7), (0, 7)]],
    'Q' => &[&[(3, 0), (7, 0), (10, 3), (10, 11), (7, 14), (3, 14), (0, 11), (0, 3), (3, 0)], &[(6, 10), (10, 14)]],
    'R' => &[&[(0, 14), (0, 0), (7, 0), (10, 2), (10, 5), (7, 7), (0, 7)], &[(5, 7), (10, 14)]],
    'S' => &[&[(10, 2), (7, 0), (3, 0), (0, 2), (0, 5), (3, 7), (7, 7), (10, 9), (10, 12), (7, 14), (3, 14), (0, 12)]],
    'T' => &[&[(0, 0), (10, 0)], &[(5, 0), (5, 14)]],
    'U' => &[&[(0, 0), (0, 11), (3, 14), (7, 14), (10, 11), (10, 0)]],
    'V' => &[&[(0, 0), (5, 14), (10, 0)]],
    'W' => &[&[(0, 0), (2, 14), (5, 7), (8, 14), (10, 0)]],
    'X' => &[&[(0, 0), (10, 14)], &[(10, 0), (0, 14)]],
    'Y' => &[&[(0, 0), (5, 7), (10, 0)], &[(5, 7), (5, 14)]],
    'Z' => &[&[(0, 0), (10, 0), (0, 14), (10, 14)]],
    ' ' => &[],
    '0' => &[&[(3, 0), (7, 0), (10, 3), (10, 11), (7, 14), (3, 14), (0, 11), (0, 3), (3, 0)]],
    '1' => &[&[(3, 3), (5, 0), (5, 14)]],
    '2' => &[&[(0, 3), (3, 0), (7, 0), (10, 3), (10, 5), (0, 14), (10, 14)]],
    '3' => &[&[(0, 2), (3, 0), (7, 0), (10, 3), (7, 7), (10, 11), (7, 14), (3, 14), (0, 12)]],
    '4' => &[&[(8, 14), (8, 0), (0, 10), (10, 10)]],
    '5' => &[&[(10, 0), (0, 0), (0, 6), (7, 6), (10, 9), (10, 12), (7, 14), (3, 14), (0, 12)]],
    '6' => &[&[(7, 0), (3, 0), (0, 3), (0, 11), (3, 14), (7, 14), (10, 11), (10, 9), (7, 6), (0, 6)]],
    '7' => &[&[(0, 0), (10, 0), (4, 14)]],
    '8' => &[&[(3, 7), (0, 5), (0, 2), (3, 0), (7, 0), (10, 2), (10, 5), (7, 7), (3, 7), (0, 9), (0, 12), (3, 14), (7, 14), (10, 12), (10, 9), (7, 7)]],
    '9' => &[&[(10, 6), (3, 6), (0, 3), (0, 2), (3, 0), (7, 0), (10, 3), (10, 11), (7, 14), (3, 14)]],
    '!' => &[&[(5, 0), (5, 10)], &[(5, 13), (5, 14)]],
    '?' => &[&[(0, 3), (3, 0), (7, 0), (10, 3), (10, 5), (5, 8), (5, 10)], &[(5, 13), (5, 14)]],
    '.' => &[&[(5, 13), (5, 14)]],
    '-' => &[&[(2, 7), (8, 7)]],
    '+' => &[&[(5, 3), (5, 11)], &[(1, 7), (9, 7)]],
    '*' => &[&[(5, 2), (5, 12)], &[(1, 4), (9, 10)], &[(9, 4), (1, 10)]],
    '/' => &[&[(10, 0), (0, 14)]],
    ':' => &[&[(5, 4), (5, 5)], &[(5, 9), (5, 10)]],
    '<' => &[&[(8, 2), (2, 7), (8, 12)]],
    '>' => &[&[(2, 2), (8, 7), (2, 12)]],
};

/// Glyph size on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextStyle {
    pub char_width: i32,
    pub char_height: i32,
    pub spacing: i32,
}

impl Default for TextStyle {
    fn default() -> Self {
        TextStyle {
            char_width: CHAR_WIDTH,
            char_height: CHAR_HEIGHT,
            spacing: CHAR_SPACING,
        }
    }
}

impl TextStyle {
    /// Horizontal distance from one glyph origin to the next.
    pub fn advance(&self) -> i32 {
        self.char_width + self.spacing
    }

    pub fn text_width(&self, text: &str) -> i32 {
        let len = text.chars().count() as i32;
        len * self.advance() - self.spacing
    }
}

/// Strokes of one character with its top-left corner at `origin`. Letters
/// are case-insensitive; characters without a glyph produce no strokes.
pub fn glyph_strokes(ch: char, origin: Point, style: &TextStyle) -> Vec<Path> {
    let Some(glyph) = FONT.get(&ch.to_ascii_uppercase()) else {
        return Vec::new();
    };

    let scale_x = f64::from(style.char_width) / GLYPH_GRID_WIDTH;
    let scale_y = f64::from(style.char_height) / GLYPH_GRID_HEIGHT;

    glyph
        .iter()
        .map(|stroke| {
            stroke
                .iter()
                .map(|&(gx, gy)| {
                    Point::from_f64(
                        f64::from(origin.x) + f64::from(gx) * scale_x,
                        f64::from(origin.y) + f64::from(gy) * scale_y,
                    )
                })
                .collect::<Path>()
        })
        .filter(|stroke| stroke.len() >= 2)
        .collect()
}

/// Strokes of a whole line of text, grouped per character. Unknown
/// characters still advance the pen.
pub fn text_strokes(text: &str, origin: Point, style: &TextStyle) -> Vec<Vec<Path>> {
    text.chars()
        .enumerate()
        .map(|(i, ch)| {
            let x = origin.x + i as i32 * style.advance();
            glyph_strokes(ch, Point::new(x, origin.y), style)
        })
        .collect()
}
