// this_file: src/traits.rs

//! Collaborator contracts the layout core is built against.
//!
//! Itemization, shaping, and rasterization are external concerns; the core
//! drives them through these two traits. [`crate::hb::HarfBuzzEngine`]
//! provides a ready-made [`FontEngine`], and applications supply their own
//! [`FontCollection`] over whatever font store they keep.

use crate::error::Result;
use crate::style::{FontStyleKey, HintFlags};
use crate::types::{GlyphBitmap, Run, ShapedGlyph};

/// Font store and itemizer.
///
/// `Font` handles are identity-comparable: equality must mean "the same
/// physical font resource", not structural equality. Implementations
/// wrapping shared data typically compare with `Arc::ptr_eq`. Resources are
/// owned by the collection for its lifetime; the core only references them.
pub trait FontCollection {
    type Font: Clone + PartialEq;

    /// Split `text` into maximal runs, each bound to one font resource.
    ///
    /// Returned runs must be contiguous, non-overlapping, in logical order,
    /// and cover `[0, text.len())` exhaustively; the collection is
    /// responsible for full coverage, including a last-resort fallback
    /// resource for characters no installed font maps.
    fn itemize(&self, text: &str, key: FontStyleKey) -> Vec<Run<Self::Font>>;
}

/// Shaping and rasterization engine.
///
/// A [`FontEngine::ShapingHandle`] is bound 1:1 to a (resource, pixel size)
/// pair and stays valid until dropped; the font resource table owns the
/// handles it creates and drops them when cleared.
pub trait FontEngine {
    type Font: Clone + PartialEq;
    type ShapingHandle;

    /// Bind `font` to `pixel_size` (both axes equal) for the current pass:
    /// configure the rasterization size and build a shaping handle whose
    /// internal scale matches, so positions come out in the fixed-point
    /// unit of [`crate::fixed`].
    fn configure(&mut self, font: &Self::Font, pixel_size: f32) -> Result<Self::ShapingHandle>;

    /// Shape `text[start..end]` left to right, appending engine-order
    /// glyphs to `out`. `out` is a caller-owned scratch buffer reused
    /// across runs; implementations must only append.
    fn shape_into(
        &mut self,
        handle: &Self::ShapingHandle,
        text: &str,
        start: usize,
        end: usize,
        out: &mut Vec<ShapedGlyph>,
    ) -> Result<()>;

    /// Rasterize one glyph at the size last configured for `font`,
    /// honoring `hints`.
    fn rasterize(
        &mut self,
        font: &Self::Font,
        glyph_id: u32,
        hints: HintFlags,
    ) -> Result<GlyphBitmap>;
}
