//! Parsing and encoding of HD44780 character generator glyphs.
//!
//! A glyph is authored as a block of 8 rows, each 5 characters wide, where `X` marks a set pixel
//! and any other character marks a clear pixel:
//!
//! ```text
//! ...X.
//! ...XX
//! ...XX
//! ...X.
//! ...X.
//! .XXX.
//! XXXX.
//! .XX..
//! ```
//!
//! Each row packs into the low 5 bits of a byte, leftmost column first, which is the row format
//! the display's CGRAM expects (bit 4 is the leftmost dot, bits 5 through 7 are ignored).

use core::{error, fmt};

/// The number of pixel columns in a glyph row.
pub const GLYPH_WIDTH: usize = 5;
/// The number of rows in a glyph.
pub const GLYPH_HEIGHT: usize = 8;
/// The character that denotes a set pixel.
pub const SET_PIXEL: char = 'X';

/// Mask of the bits of an encoded row that carry pixel data.
pub const ROW_MASK: u8 = 0b1_1111;

/// A validated 5x8 glyph bitmap.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct GlyphSpec {
    /// The pixels of the glyph, top row first and leftmost column first.
    rows: [[bool; GLYPH_WIDTH]; GLYPH_HEIGHT],
}

impl GlyphSpec {
    /// Parses the textual glyph description `text`.
    ///
    /// Blank space around the block and around each row is ignored.
    ///
    /// # Errors
    ///
    /// - [`MalformedSpec::RowCount`]: Returned if `text` does not contain exactly
    ///   [`GLYPH_HEIGHT`] rows.
    /// - [`MalformedSpec::RowWidth`]: Returned if a row is not exactly [`GLYPH_WIDTH`] characters
    ///   wide.
    pub fn parse(text: &str) -> Result<Self, MalformedSpec> {
        let row_count = text.trim().lines().count();
        if row_count != GLYPH_HEIGHT {
            return Err(MalformedSpec::RowCount { actual: row_count });
        }

        let mut rows = [[false; GLYPH_WIDTH]; GLYPH_HEIGHT];
        for (index, (row, line)) in rows.iter_mut().zip(text.trim().lines()).enumerate() {
            let line = line.trim();

            let width = line.chars().count();
            if width != GLYPH_WIDTH {
                return Err(MalformedSpec::RowWidth {
                    row: index,
                    actual: width,
                });
            }

            for (pixel, c) in row.iter_mut().zip(line.chars()) {
                *pixel = c == SET_PIXEL;
            }
        }

        Ok(Self { rows })
    }

    /// Creates a [`GlyphSpec`] directly from a pixel grid.
    pub const fn from_pixels(rows: [[bool; GLYPH_WIDTH]; GLYPH_HEIGHT]) -> Self {
        Self { rows }
    }

    /// Returns the pixel grid of this [`GlyphSpec`].
    pub const fn pixels(&self) -> &[[bool; GLYPH_WIDTH]; GLYPH_HEIGHT] {
        &self.rows
    }

    /// Packs every row of this [`GlyphSpec`] into a byte.
    pub fn encode(&self) -> EncodedGlyph {
        let mut bytes = [0; GLYPH_HEIGHT];
        for (byte, row) in bytes.iter_mut().zip(self.rows.iter()) {
            *byte = encode_row(row);
        }

        EncodedGlyph(bytes)
    }
}

/// Parses and encodes `text` in one step.
///
/// # Errors
///
/// Returns [`MalformedSpec`] under the same conditions as [`GlyphSpec::parse`].
pub fn encode(text: &str) -> Result<EncodedGlyph, MalformedSpec> {
    GlyphSpec::parse(text).map(|spec| spec.encode())
}

fn encode_row(row: &[bool; GLYPH_WIDTH]) -> u8 {
    let mut byte = 0u8;
    for &pixel in row {
        byte <<= 1;
        if pixel {
            byte += 1;
        }
    }

    byte
}

/// The packed rows of a glyph, top row first.
///
/// Only the low 5 bits of each byte are ever set.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct EncodedGlyph([u8; GLYPH_HEIGHT]);

impl EncodedGlyph {
    /// Returns the packed rows.
    pub const fn bytes(&self) -> &[u8; GLYPH_HEIGHT] {
        &self.0
    }

    /// Consumes the [`EncodedGlyph`], returning the packed rows.
    pub const fn into_bytes(self) -> [u8; GLYPH_HEIGHT] {
        self.0
    }
}

impl AsRef<[u8]> for EncodedGlyph {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// The shape of a glyph description is wrong.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub enum MalformedSpec {
    /// The description does not have [`GLYPH_HEIGHT`] rows.
    RowCount {
        /// The number of rows found.
        actual: usize,
    },
    /// A row is not [`GLYPH_WIDTH`] characters wide.
    RowWidth {
        /// The zero-based index of the offending row.
        row: usize,
        /// The width of the offending row.
        actual: usize,
    },
}

impl fmt::Display for MalformedSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RowCount { actual } => {
                write!(f, "expected {GLYPH_HEIGHT} rows but got {actual} rows")
            }
            Self::RowWidth { row, actual } => write!(
                f,
                "row {row} is {actual} characters wide: expected {GLYPH_WIDTH} characters"
            ),
        }
    }
}

impl error::Error for MalformedSpec {}
