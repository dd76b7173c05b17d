//! Palette mapping from raw animation symbols to color indices.
//!
//! Animation source frames describe each pixel with a single ASCII symbol.
//! The codec operates on small integer color indices instead, so every
//! symbol is mapped through a fixed 14-color palette table. The table is
//! process-wide constant data; unrecognized symbols fall back to the
//! background color rather than failing.

/// Number of colors in the palette.
pub const PALETTE_SIZE: usize = 14;

/// Index of the background color (dark blue).
pub const BACKGROUND: u8 = 0;

/// Map a raw pixel symbol to its palette index.
///
/// Total over all of `char`: any symbol outside the table maps to
/// [`BACKGROUND`]. The table follows the upstream animation source:
///
/// | Symbol | Index | Color |
/// |--------|-------|-------|
/// | `,` | 0 | dark blue background |
/// | `.` | 1 | white (stars) |
/// | `'` | 2 | black (border) |
/// | `@` | 3 | tan (poptart) |
/// | `%` | 4 | pink (cheeks) |
/// | `$` | 5 | hot pink (poptart) |
/// | `-` `>` | 6 | red |
/// | `&` | 7 | orange |
/// | `+` | 8 | yellow |
/// | `#` | 9 | green |
/// | `=` | 10 | light blue |
/// | `;` | 11 | purple |
/// | `*` | 12 | gray (cat face) |
pub const fn palette_index(symbol: char) -> u8 {
    match symbol {
        ',' => 0,
        '.' => 1,
        '\'' => 2,
        '@' => 3,
        '%' => 4,
        '$' => 5,
        '-' | '>' => 6,
        '&' => 7,
        '+' => 8,
        '#' => 9,
        '=' => 10,
        ';' => 11,
        '*' => 12,
        _ => BACKGROUND,
    }
}

/// Map a slice of raw symbols to palette indices.
pub fn map_symbols(symbols: &[char]) -> Vec<u8> {
    symbols.iter().map(|&s| palette_index(s)).collect()
}
