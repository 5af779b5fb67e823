// this_file: src/surface.rs

//! Caller-owned coverage surface.
//!
//! A fixed-size grayscale raster that glyph bitmaps are blended into.
//! Blending is saturating coverage accumulation: overlapping glyphs add up
//! to the 255 cap instead of overwriting. The surface is never resized.

use crate::error::Result;
use crate::types::GlyphBitmap;
use std::io::Write;

/// Grayscale coverage raster, row-major, one byte per pixel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterSurface {
    width: u32,
    height: u32,
    coverage: Vec<u8>,
}

impl RasterSurface {
    /// Create a blank surface of the given dimensions.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            coverage: vec![0; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw coverage bytes, row-major.
    pub fn coverage(&self) -> &[u8] {
        &self.coverage
    }

    /// Coverage at one pixel. Panics outside the surface bounds.
    pub fn pixel(&self, x: u32, y: u32) -> u8 {
        assert!(x < self.width && y < self.height);
        self.coverage[y as usize * self.width as usize + x as usize]
    }

    /// Blend a glyph bitmap with its top-left corner at `(x, y)`.
    ///
    /// Pixels falling outside the surface on any edge are silently
    /// clipped; `dst = min(255, dst + src)` inside.
    pub fn draw_glyph(&mut self, bitmap: &GlyphBitmap, x: i32, y: i32) {
        let bmw = bitmap.width as i32;
        let bmh = bitmap.height as i32;
        let x0 = x.max(0);
        let y0 = y.max(0);
        let x1 = (x + bmw).min(self.width as i32);
        let y1 = (y + bmh).min(self.height as i32);
        if x0 >= x1 || y0 >= y1 {
            return;
        }

        for yy in y0..y1 {
            let src_row = ((yy - y) * bmw) as usize;
            let dst_row = yy as usize * self.width as usize;
            for xx in x0..x1 {
                let src = bitmap.coverage[src_row + (xx - x) as usize];
                let dst = &mut self.coverage[dst_row + xx as usize];
                *dst = dst.saturating_add(src);
            }
        }
    }

    /// Write the surface as a binary PGM (P5) image.
    ///
    /// Debugging aid, not a contractual output format.
    pub fn write_pnm<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(out, "P5")?;
        writeln!(out, "{} {}", self.width, self.height)?;
        writeln!(out, "255")?;
        out.write_all(&self.coverage)?;
        Ok(())
    }
}
