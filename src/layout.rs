// this_file: src/layout.rs

//! Layout orchestration.
//!
//! [`LayoutEngine`] drives one full pass: itemization, per-run font
//! resolution and shaping, and glyph-list assembly. The resulting glyph
//! list and font table stay alive for compositing until the next pass
//! replaces them.

use crate::error::{LayoutError, Result};
use crate::raster;
use crate::shaper::RunShaper;
use crate::style::{HintFlags, StyleDescriptor};
use crate::surface::RasterSurface;
use crate::table::FontResourceTable;
use crate::traits::{FontCollection, FontEngine};
use crate::types::{PositionedGlyph, Run};

/// Text-layout engine over a font collection and a shaping/rendering
/// engine.
///
/// Layout is not incremental: every [`LayoutEngine::layout`] call
/// recomputes from scratch, clearing the previous pass's glyph list and
/// font table (which drops the cached shaping handles). Each instance owns
/// its pass state exclusively; share across threads only with external
/// synchronization.
pub struct LayoutEngine<C, E>
where
    C: FontCollection,
    E: FontEngine<Font = C::Font>,
{
    collection: C,
    engine: E,
    table: FontResourceTable<C::Font, E::ShapingHandle>,
    shaper: RunShaper,
    glyphs: Vec<PositionedGlyph>,
    advance: f32,
    hint_flags: HintFlags,
}

impl<C, E> LayoutEngine<C, E>
where
    C: FontCollection,
    E: FontEngine<Font = C::Font>,
{
    pub fn new(collection: C, engine: E) -> Self {
        Self {
            collection,
            engine,
            table: FontResourceTable::new(),
            shaper: RunShaper::new(),
            glyphs: Vec::new(),
            advance: 0.0,
            hint_flags: HintFlags::empty(),
        }
    }

    /// Replace the font collection. Pass state is untouched until the next
    /// [`LayoutEngine::layout`] call recomputes it.
    pub fn set_font_collection(&mut self, collection: C) {
        self.collection = collection;
    }

    /// Lay out `text` with `style`, returning the positioned glyph list in
    /// visual left-to-right drawing order.
    ///
    /// An empty buffer yields an empty list with the pen at the origin. A
    /// font configuration failure aborts the pass; runs the shaping engine
    /// rejects are skipped and the rest of the line survives.
    pub fn layout(&mut self, text: &str, style: &StyleDescriptor) -> Result<&[PositionedGlyph]> {
        if !(style.pixel_size > 0.0) {
            return Err(LayoutError::configuration(format!(
                "pixel size must be positive, got {}",
                style.pixel_size
            )));
        }

        self.glyphs.clear();
        self.table.clear();
        self.shaper.reset();
        self.hint_flags = style.hint_flags;

        let runs = self.collection.itemize(text, style.style_key());
        debug_assert!(
            runs_partition(text.len(), &runs),
            "itemizer runs must partition the text buffer"
        );

        for run in &runs {
            let font_ix = self.table.resolve(&mut self.engine, &run.font, style.pixel_size)?;
            let handle = self.table.handle(font_ix);
            self.shaper.shape_run(
                &mut self.engine,
                handle,
                text,
                run.start,
                run.end,
                font_ix as u32,
                &mut self.glyphs,
            );
        }

        self.advance = self.shaper.pen_x();
        log::debug!(
            "laid out {} chars into {} glyphs over {} fonts, advance {}",
            text.len(),
            self.glyphs.len(),
            self.table.len(),
            self.advance
        );
        Ok(&self.glyphs)
    }

    /// Glyph list of the most recent pass.
    pub fn glyphs(&self) -> &[PositionedGlyph] {
        &self.glyphs
    }

    /// Total horizontal pen advance of the most recent pass, in pixels.
    pub fn advance(&self) -> f32 {
        self.advance
    }

    /// Blend the current glyph list into `surface` with the layout origin
    /// at `(x0, y0)`, using the hint flags of the pass that produced it.
    ///
    /// Glyphs whose rasterization fails are dropped individually; pixels
    /// outside the surface are clipped.
    pub fn composite(&mut self, surface: &mut RasterSurface, x0: i32, y0: i32) {
        raster::composite(
            &mut self.engine,
            surface,
            &self.glyphs,
            &self.table,
            x0,
            y0,
            self.hint_flags,
        );
    }

    /// Log the current glyph list, one line per glyph. Debugging aid.
    pub fn dump(&self) {
        for glyph in &self.glyphs {
            log::debug!(
                "{}: {}, {} (font {})",
                glyph.glyph_id,
                glyph.x,
                glyph.y,
                glyph.font_ix
            );
        }
    }
}

/// Check that `runs` are contiguous, non-overlapping, and exactly cover
/// `[0, text_len)`.
pub(crate) fn runs_partition<F>(text_len: usize, runs: &[Run<F>]) -> bool {
    if runs.is_empty() {
        return text_len == 0;
    }
    let mut expected = 0;
    for run in runs {
        if run.start != expected || run.end < run.start {
            return false;
        }
        expected = run.end;
    }
    expected == text_len
}
