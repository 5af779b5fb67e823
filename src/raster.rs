// this_file: src/raster.rs

//! Glyph-list compositing.
//!
//! Walks a positioned glyph list in drawing order, asks the engine for a
//! coverage bitmap per glyph, and blends each bitmap into the destination
//! surface at its bearing-adjusted position.

use crate::style::HintFlags;
use crate::surface::RasterSurface;
use crate::table::FontResourceTable;
use crate::traits::FontEngine;
use crate::types::PositionedGlyph;

/// Round half away from the origin-side: `floor(v + 0.5)`.
///
/// Pixel placement uses round-half-up, not round-to-even.
#[inline]
pub(crate) fn round_half_up(v: f32) -> i32 {
    (v + 0.5).floor() as i32
}

/// Blend every glyph in `glyphs` into `surface`, offset by `(x0, y0)`.
///
/// Each glyph's bitmap lands with its top-left corner at
/// `(x0 + round(x) + left, y0 - round(y) - top)`, bearings taken from the
/// rasterized bitmap. A rasterization failure drops that glyph and keeps
/// compositing the rest.
pub fn composite<E: FontEngine>(
    engine: &mut E,
    surface: &mut RasterSurface,
    glyphs: &[PositionedGlyph],
    table: &FontResourceTable<E::Font, E::ShapingHandle>,
    x0: i32,
    y0: i32,
    hints: HintFlags,
) {
    for glyph in glyphs {
        let font = table.font(glyph.font_ix as usize);
        let bitmap = match engine.rasterize(font, glyph.glyph_id, hints) {
            Ok(bitmap) => bitmap,
            Err(err) => {
                log::warn!("dropping glyph {}: {err}", glyph.glyph_id);
                continue;
            }
        };
        surface.draw_glyph(
            &bitmap,
            x0 + round_half_up(glyph.x) + bitmap.left,
            y0 - round_half_up(glyph.y) - bitmap.top,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{LayoutError, Result};
    use crate::types::{GlyphBitmap, ShapedGlyph};

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_half_up(0.0), 0);
        assert_eq!(round_half_up(0.49), 0);
        assert_eq!(round_half_up(0.5), 1);
        assert_eq!(round_half_up(1.5), 2);
        assert_eq!(round_half_up(2.5), 3);
        assert_eq!(round_half_up(-0.5), 0);
        assert_eq!(round_half_up(-0.51), -1);
        assert_eq!(round_half_up(-1.5), -1);
    }

    /// 1x1 bitmap of full coverage per glyph; odd glyph IDs fail.
    struct DotEngine;

    impl FontEngine for DotEngine {
        type Font = &'static str;
        type ShapingHandle = ();

        fn configure(&mut self, _font: &&'static str, _pixel_size: f32) -> Result<()> {
            Ok(())
        }

        fn shape_into(
            &mut self,
            _handle: &(),
            _text: &str,
            _start: usize,
            _end: usize,
            _out: &mut Vec<ShapedGlyph>,
        ) -> Result<()> {
            Ok(())
        }

        fn rasterize(
            &mut self,
            _font: &&'static str,
            glyph_id: u32,
            _hints: HintFlags,
        ) -> Result<GlyphBitmap> {
            if glyph_id % 2 == 1 {
                return Err(LayoutError::rendering(glyph_id, "no outline"));
            }
            Ok(GlyphBitmap {
                width: 1,
                height: 1,
                left: 0,
                top: 0,
                coverage: vec![255],
            })
        }
    }

    fn table_with_one_font() -> FontResourceTable<&'static str, ()> {
        let mut engine = DotEngine;
        let mut table = FontResourceTable::new();
        table.resolve(&mut engine, &"serif", 16.0).unwrap();
        table
    }

    #[test]
    fn test_glyphs_land_at_rounded_positions() {
        let mut engine = DotEngine;
        let table = table_with_one_font();
        let mut surface = RasterSurface::new(8, 8);
        let glyphs = [
            PositionedGlyph {
                font_ix: 0,
                glyph_id: 0,
                x: 1.4, // rounds to 1
                y: 0.0,
            },
            PositionedGlyph {
                font_ix: 0,
                glyph_id: 2,
                x: 2.5, // rounds to 3
                y: -1.0,
            },
        ];

        composite(&mut engine, &mut surface, &glyphs, &table, 0, 4, HintFlags::empty());

        assert_eq!(surface.pixel(1, 4), 255);
        assert_eq!(surface.pixel(3, 5), 255);
    }

    #[test]
    fn test_failed_glyph_is_dropped_and_rest_composited() {
        let mut engine = DotEngine;
        let table = table_with_one_font();
        let mut surface = RasterSurface::new(8, 8);
        let glyphs = [
            PositionedGlyph {
                font_ix: 0,
                glyph_id: 1, // fails
                x: 0.0,
                y: 0.0,
            },
            PositionedGlyph {
                font_ix: 0,
                glyph_id: 2,
                x: 2.0,
                y: 0.0,
            },
        ];

        composite(&mut engine, &mut surface, &glyphs, &table, 0, 0, HintFlags::empty());

        assert_eq!(surface.pixel(0, 0), 0);
        assert_eq!(surface.pixel(2, 0), 255);
    }
}
