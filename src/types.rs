// this_file: src/types.rs

//! Core data types shared across layout and compositing.

/// A maximal contiguous text subrange mapped to one font resource.
///
/// Produced by the itemizer; runs are non-overlapping, in logical order,
/// and together cover the whole text buffer. Offsets are byte offsets into
/// the shared text buffer and always lie on `char` boundaries.
#[derive(Debug, Clone, PartialEq)]
pub struct Run<F> {
    /// Font resource backing this range, owned by the collection.
    pub font: F,
    /// Start byte offset (inclusive).
    pub start: usize,
    /// End byte offset (exclusive).
    pub end: usize,
}

/// Single shaped glyph as reported by the shaping engine.
///
/// All position fields are in the engine's fixed-point unit
/// (see [`crate::fixed`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShapedGlyph {
    /// Glyph ID in the font.
    pub glyph_id: u32,
    /// Horizontal advance.
    pub x_advance: i32,
    /// Vertical advance (typically 0 for horizontal layout).
    pub y_advance: i32,
    /// Horizontal offset from the pen position.
    pub x_offset: i32,
    /// Vertical offset from the baseline.
    pub y_offset: i32,
}

/// A glyph positioned in the layout's pixel coordinate space.
///
/// `font_ix` indexes the pass's font resource table. We could imagine
/// moving to a run-length representation for long strings, since per-glyph
/// font tagging is bloated; the index is only read after assembly, so both
/// representations satisfy the same contract.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PositionedGlyph {
    /// Index into the pass's font resource table.
    pub font_ix: u32,
    /// Glyph ID in that font.
    pub glyph_id: u32,
    /// Pen-relative horizontal position in pixels.
    pub x: f32,
    /// Pen-relative vertical position in pixels (positive up).
    pub y: f32,
}

/// Rasterized glyph coverage with bearing metadata.
///
/// `coverage` holds `width * height` bytes in row-major order. `left` is
/// the horizontal bearing from the glyph origin to the bitmap's left edge;
/// `top` is the vertical bearing from the baseline up to the bitmap's top
/// edge (positive up, FreeType convention).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphBitmap {
    pub width: u32,
    pub height: u32,
    pub left: i32,
    pub top: i32,
    pub coverage: Vec<u8>,
}

impl GlyphBitmap {
    /// Bitmap with no pixels (whitespace glyphs, empty outlines).
    pub fn empty() -> Self {
        Self {
            width: 0,
            height: 0,
            left: 0,
            top: 0,
            coverage: Vec::new(),
        }
    }

    /// Whether the bitmap contributes no pixels.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}
