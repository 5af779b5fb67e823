// this_file: src/table.rs

//! Per-pass font resource table.
//!
//! Deduplicates the font resources encountered while laying out one text
//! buffer and caches a shaping handle per resource, sized for the pass's
//! style. Indices are stable for the lifetime of the pass and appear in
//! first-encounter order.

use crate::error::Result;
use crate::traits::FontEngine;

/// Font resources seen in the current pass, with their shaping handles.
///
/// Lookup is an identity linear scan, which is fine at per-pass fan-out;
/// if resource counts grow this becomes a hash map keyed by identity with
/// unchanged semantics. A single pass supports exactly one pixel size;
/// mixing sizes requires a fresh pass.
#[derive(Debug)]
pub struct FontResourceTable<F, H> {
    fonts: Vec<F>,
    handles: Vec<H>,
}

impl<F: Clone + PartialEq, H> FontResourceTable<F, H> {
    pub fn new() -> Self {
        Self {
            fonts: Vec::new(),
            handles: Vec::new(),
        }
    }

    /// Return the pass index for `font`, configuring it on first sight.
    ///
    /// A repeated resource returns its existing index without touching the
    /// engine. A configuration failure propagates and aborts the pass; the
    /// caller discards partial table state before the next one.
    pub fn resolve<E>(&mut self, engine: &mut E, font: &F, pixel_size: f32) -> Result<usize>
    where
        E: FontEngine<Font = F, ShapingHandle = H>,
    {
        if let Some(ix) = self.fonts.iter().position(|f| f == font) {
            return Ok(ix);
        }
        let handle = engine.configure(font, pixel_size)?;
        self.fonts.push(font.clone());
        self.handles.push(handle);
        Ok(self.fonts.len() - 1)
    }

    /// Shaping handle for a resolved index.
    pub fn handle(&self, ix: usize) -> &H {
        &self.handles[ix]
    }

    /// Font resource for a resolved index.
    pub fn font(&self, ix: usize) -> &F {
        &self.fonts[ix]
    }

    pub fn len(&self) -> usize {
        self.fonts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fonts.is_empty()
    }

    /// Drop all resources and their shaping handles.
    pub fn clear(&mut self) {
        self.fonts.clear();
        self.handles.clear();
    }
}

impl<F: Clone + PartialEq, H> Default for FontResourceTable<F, H> {
    fn default() -> Self {
        Self::new()
    }
}
