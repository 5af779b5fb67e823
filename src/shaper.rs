// this_file: src/shaper.rs

//! Per-run shaping and pen accumulation.
//!
//! Drives the shaping engine for one run at a time, converts engine
//! fixed-point positions to float pixels, and carries the pen position
//! across runs within a pass.

use crate::fixed;
use crate::traits::FontEngine;
use crate::types::{PositionedGlyph, ShapedGlyph};

/// Pen-carrying run shaper.
///
/// Owns the shaping scratch buffer for the pass, so independent layout
/// engines never share request state.
#[derive(Debug)]
pub(crate) struct RunShaper {
    pen_x: f32,
    pen_y: f32,
    scratch: Vec<ShapedGlyph>,
}

impl RunShaper {
    pub fn new() -> Self {
        Self {
            pen_x: 0.0,
            pen_y: 0.0,
            scratch: Vec::new(),
        }
    }

    /// Reset the pen to the origin for a new pass. The scratch allocation
    /// is kept.
    pub fn reset(&mut self) {
        self.pen_x = 0.0;
        self.pen_y = 0.0;
    }

    /// Total horizontal advance accumulated so far.
    pub fn pen_x(&self) -> f32 {
        self.pen_x
    }

    /// Shape `text[start..end]` and append positioned glyphs to `out`.
    ///
    /// Glyphs are emitted in engine order (the engine may reorder for
    /// ligatures and clusters; we never re-sort). Each glyph lands at
    /// `pen + offset`, then the pen advances by the glyph's x-advance.
    /// The pen's y never moves in single-line horizontal layout.
    ///
    /// A shaping failure skips the run: zero glyphs, pen unchanged, and
    /// the pass goes on. One bad run must not invalidate the rest of the
    /// line.
    pub fn shape_run<E: FontEngine>(
        &mut self,
        engine: &mut E,
        handle: &E::ShapingHandle,
        text: &str,
        start: usize,
        end: usize,
        font_ix: u32,
        out: &mut Vec<PositionedGlyph>,
    ) {
        self.scratch.clear();
        if let Err(err) = engine.shape_into(handle, text, start, end, &mut self.scratch) {
            log::warn!("skipping run [{start}..{end}): {err}");
            return;
        }

        log::debug!(
            "run [{start}..{end}) font {font_ix}: {} glyphs",
            self.scratch.len()
        );

        for glyph in &self.scratch {
            out.push(PositionedGlyph {
                font_ix,
                glyph_id: glyph.glyph_id,
                x: self.pen_x + fixed::to_float(glyph.x_offset),
                y: self.pen_y + fixed::to_float(glyph.y_offset),
            });
            self.pen_x += fixed::to_float(glyph.x_advance);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{LayoutError, Result};
    use crate::style::HintFlags;
    use crate::types::{GlyphBitmap, ShapedGlyph};
    use approx::assert_relative_eq;

    /// One glyph per char, fixed advance, with optional offset on the
    /// first glyph and a poison substring that fails shaping.
    struct FixedAdvanceEngine {
        advance: i32,
        first_offset: (i32, i32),
    }

    impl FontEngine for FixedAdvanceEngine {
        type Font = &'static str;
        type ShapingHandle = ();

        fn configure(&mut self, _font: &&'static str, _pixel_size: f32) -> Result<()> {
            Ok(())
        }

        fn shape_into(
            &mut self,
            _handle: &(),
            text: &str,
            start: usize,
            end: usize,
            out: &mut Vec<ShapedGlyph>,
        ) -> Result<()> {
            let slice = &text[start..end];
            if slice.contains('\u{fffd}') {
                return Err(LayoutError::Shaping {
                    start,
                    end,
                    reason: "unsupported codepoint".to_string(),
                });
            }
            for (i, ch) in slice.chars().enumerate() {
                let (xo, yo) = if i == 0 { self.first_offset } else { (0, 0) };
                out.push(ShapedGlyph {
                    glyph_id: ch as u32,
                    x_advance: self.advance,
                    y_advance: 0,
                    x_offset: xo,
                    y_offset: yo,
                });
            }
            Ok(())
        }

        fn rasterize(
            &mut self,
            _font: &&'static str,
            _glyph_id: u32,
            _hints: HintFlags,
        ) -> Result<GlyphBitmap> {
            Ok(GlyphBitmap::empty())
        }
    }

    #[test]
    fn test_pen_advances_per_glyph() {
        let mut engine = FixedAdvanceEngine {
            advance: 2560, // 10 px
            first_offset: (0, 0),
        };
        let mut shaper = RunShaper::new();
        let mut out = Vec::new();

        shaper.shape_run(&mut engine, &(), "abc", 0, 3, 0, &mut out);

        assert_eq!(out.len(), 3);
        assert_relative_eq!(out[0].x, 0.0);
        assert_relative_eq!(out[1].x, 10.0);
        assert_relative_eq!(out[2].x, 20.0);
        assert_relative_eq!(shaper.pen_x(), 30.0);
    }

    #[test]
    fn test_offsets_do_not_move_the_pen() {
        let mut engine = FixedAdvanceEngine {
            advance: 2560,
            first_offset: (128, -64), // +0.5 px, -0.25 px
        };
        let mut shaper = RunShaper::new();
        let mut out = Vec::new();

        shaper.shape_run(&mut engine, &(), "ab", 0, 2, 0, &mut out);

        assert_relative_eq!(out[0].x, 0.5);
        assert_relative_eq!(out[0].y, -0.25);
        // Offset applied to position only; the next glyph starts at the
        // plain advance.
        assert_relative_eq!(out[1].x, 10.0);
        assert_relative_eq!(out[1].y, 0.0);
    }

    #[test]
    fn test_failed_run_leaves_pen_unchanged() {
        let mut engine = FixedAdvanceEngine {
            advance: 2560,
            first_offset: (0, 0),
        };
        let mut shaper = RunShaper::new();
        let mut out = Vec::new();

        let text = "ab\u{fffd}cd";
        shaper.shape_run(&mut engine, &(), text, 0, 2, 0, &mut out);
        let pen_before = shaper.pen_x();
        shaper.shape_run(&mut engine, &(), text, 2, 5, 0, &mut out);
        assert_relative_eq!(shaper.pen_x(), pen_before);
        assert_eq!(out.len(), 2);

        // The remaining run still shapes.
        shaper.shape_run(&mut engine, &(), text, 5, 7, 0, &mut out);
        assert_eq!(out.len(), 4);
        assert_relative_eq!(out[2].x, pen_before);
    }

    #[test]
    fn test_reset_returns_pen_to_origin() {
        let mut engine = FixedAdvanceEngine {
            advance: 2560,
            first_offset: (0, 0),
        };
        let mut shaper = RunShaper::new();
        let mut out = Vec::new();
        shaper.shape_run(&mut engine, &(), "ab", 0, 2, 0, &mut out);
        shaper.reset();
        assert_relative_eq!(shaper.pen_x(), 0.0);
    }
}
