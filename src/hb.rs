// this_file: src/hb.rs

//! Default [`FontEngine`] backed by HarfBuzz and ttf-parser.
//!
//! Shaping goes through `harfbuzz_rs` with the font scale set to the
//! fixed-point pixel size, so positions come back in the unit
//! [`crate::fixed`] expects. Rasterization extracts the glyph outline with
//! `ttf-parser` and fills it with `tiny-skia` into an alpha mask; bearings
//! are derived from the scaled outline bounds.

use crate::error::{LayoutError, Result};
use crate::fixed;
use crate::style::HintFlags;
use crate::traits::FontEngine;
use crate::types::{GlyphBitmap, ShapedGlyph};
use harfbuzz_rs::{Direction, Face as HbFace, Font as HbFont, Owned, UnicodeBuffer};
use std::fmt;
use std::path::Path;
use std::sync::Arc;
use tiny_skia::{Color, FillRule, Paint, PathBuilder, Pixmap, Transform};
use ttf_parser::{Face as TtfFace, GlyphId, OutlineBuilder};

/// Identity-comparable handle to a loaded font face.
///
/// Cheap to clone; equality means "the same loaded resource", never byte
/// equality, so two loads of the same file compare unequal.
#[derive(Clone)]
pub struct FaceHandle(Arc<FaceData>);

struct FaceData {
    bytes: Vec<u8>,
    index: u32,
}

impl FaceHandle {
    /// Parse and wrap raw font data.
    ///
    /// The data is validated up front; malformed input is a configuration
    /// error, surfaced before any layout pass starts.
    pub fn from_bytes(bytes: Vec<u8>, index: u32) -> Result<Self> {
        TtfFace::parse(&bytes, index).map_err(|err| {
            LayoutError::configuration(format!("invalid font data: {err}"))
        })?;
        Ok(Self(Arc::new(FaceData { bytes, index })))
    }

    /// Load a face from a font file.
    pub fn from_file(path: impl AsRef<Path>, index: u32) -> Result<Self> {
        let bytes = std::fs::read(path)?;
        Self::from_bytes(bytes, index)
    }

    fn parse(&self) -> Result<TtfFace<'_>> {
        // Validated in from_bytes; a failure here means the data changed
        // underneath us, which identity ownership rules out.
        TtfFace::parse(&self.0.bytes, self.0.index).map_err(|err| {
            LayoutError::configuration(format!("font face no longer parses: {err}"))
        })
    }
}

impl PartialEq for FaceHandle {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for FaceHandle {}

impl fmt::Debug for FaceHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FaceHandle")
            .field("bytes", &self.0.bytes.len())
            .field("index", &self.0.index)
            .finish()
    }
}

/// Shaping handle bound to one (face, pixel size) pair.
pub struct HbShapingHandle {
    font: Owned<HbFont<'static>>,
}

impl fmt::Debug for HbShapingHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HbShapingHandle").finish_non_exhaustive()
    }
}

/// HarfBuzz + ttf-parser engine.
///
/// Glyph mapping and advances come from HarfBuzz's built-in OpenType
/// table functions over the face data.
pub struct HarfBuzzEngine {
    // (resource, size) configured in the current pass; identity keyed.
    sizes: Vec<(FaceHandle, f32)>,
    // Leaked face data, one entry per resource for the engine's lifetime.
    // Reconfiguring a resource (including across passes) reuses its entry.
    faces: Vec<(FaceHandle, &'static [u8])>,
}

impl HarfBuzzEngine {
    pub fn new() -> Self {
        Self {
            sizes: Vec::new(),
            faces: Vec::new(),
        }
    }

    fn configured_size(&self, font: &FaceHandle) -> Option<f32> {
        self.sizes
            .iter()
            .find(|(face, _)| face == font)
            .map(|(_, size)| *size)
    }

    // HarfBuzz wants 'static data; leak one owned copy per resource and
    // hand the same slice to every later configuration.
    fn face_data(&mut self, font: &FaceHandle) -> &'static [u8] {
        if let Some((_, data)) = self.faces.iter().find(|(face, _)| face == font) {
            return data;
        }
        let data: &'static [u8] = Box::leak(font.0.bytes.clone().into_boxed_slice());
        self.faces.push((font.clone(), data));
        data
    }
}

impl Default for HarfBuzzEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl FontEngine for HarfBuzzEngine {
    type Font = FaceHandle;
    type ShapingHandle = HbShapingHandle;

    fn configure(&mut self, font: &FaceHandle, pixel_size: f32) -> Result<HbShapingHandle> {
        if !(pixel_size > 0.0) {
            return Err(LayoutError::configuration(format!(
                "pixel size must be positive, got {pixel_size}"
            )));
        }

        match self.sizes.iter_mut().find(|(face, _)| face == font) {
            Some(entry) => entry.1 = pixel_size,
            None => self.sizes.push((font.clone(), pixel_size)),
        }

        let face = HbFace::from_bytes(self.face_data(font), font.0.index);
        let mut hb_font = HbFont::new(face);
        let ppem = pixel_size as u32;
        hb_font.set_ppem(ppem, ppem);
        let scale = fixed::to_fixed(pixel_size);
        hb_font.set_scale(scale, scale);

        Ok(HbShapingHandle { font: hb_font })
    }

    fn shape_into(
        &mut self,
        handle: &HbShapingHandle,
        text: &str,
        start: usize,
        end: usize,
        out: &mut Vec<ShapedGlyph>,
    ) -> Result<()> {
        let slice = text.get(start..end).ok_or_else(|| LayoutError::Shaping {
            start,
            end,
            reason: "run range not on char boundaries".to_string(),
        })?;
        if slice.is_empty() {
            return Ok(());
        }

        let buffer = UnicodeBuffer::new()
            .add_str(slice)
            .set_direction(Direction::Ltr);
        let output = harfbuzz_rs::shape(&handle.font, buffer, &[]);

        let infos = output.get_glyph_infos();
        let positions = output.get_glyph_positions();
        for (info, pos) in infos.iter().zip(positions.iter()) {
            out.push(ShapedGlyph {
                glyph_id: info.codepoint,
                x_advance: pos.x_advance,
                y_advance: pos.y_advance,
                x_offset: pos.x_offset,
                y_offset: pos.y_offset,
            });
        }
        Ok(())
    }

    fn rasterize(
        &mut self,
        font: &FaceHandle,
        glyph_id: u32,
        _hints: HintFlags,
    ) -> Result<GlyphBitmap> {
        // Outline filling is unhinted, so both hint toggles are already
        // satisfied; engines with a hinter map them to load flags.
        let pixel_size = self.configured_size(font).ok_or_else(|| {
            LayoutError::configuration("font resource has no configured size")
        })?;
        let face = font.parse()?;
        let scale = pixel_size / face.units_per_em() as f32;

        let gid = u16::try_from(glyph_id)
            .map_err(|_| LayoutError::rendering(glyph_id, "glyph ID out of range"))?;
        let mut builder = MaskBuilder {
            path: PathBuilder::new(),
            scale,
        };
        if face.outline_glyph(GlyphId(gid), &mut builder).is_none() {
            // No outline: whitespace or an empty glyph.
            return Ok(GlyphBitmap::empty());
        }
        let Some(path) = builder.path.finish() else {
            return Ok(GlyphBitmap::empty());
        };

        let (left, top, width, height) = snap_bounds(path.bounds());
        if width == 0 || height == 0 {
            return Ok(GlyphBitmap::empty());
        }

        let mut pixmap = Pixmap::new(width, height)
            .ok_or_else(|| LayoutError::rendering(glyph_id, "pixmap allocation failed"))?;
        let mut paint = Paint::default();
        paint.set_color(Color::from_rgba8(255, 255, 255, 255));
        paint.anti_alias = true;
        let transform = Transform::from_translate(-(left as f32), -(top as f32));
        pixmap.fill_path(&path, &paint, FillRule::Winding, transform, None);

        let coverage: Vec<u8> = pixmap.pixels().iter().map(|px| px.alpha()).collect();
        Ok(GlyphBitmap {
            width,
            height,
            left,
            // Convert the y-down top edge to an upward bearing from the
            // baseline.
            top: -top,
            coverage,
        })
    }
}

// Snap y-down pixel bounds outward to whole pixels. Returns the snapped
// (left, top, width, height); `top` is still y-down here and is negated
// into an upward bearing when the bitmap is assembled.
fn snap_bounds(bounds: tiny_skia::Rect) -> (i32, i32, u32, u32) {
    let left = bounds.left().floor() as i32;
    let top = bounds.top().floor() as i32;
    let width = (bounds.right().ceil() as i32 - left).max(0) as u32;
    let height = (bounds.bottom().ceil() as i32 - top).max(0) as u32;
    (left, top, width, height)
}

/// Converts ttf-parser outlines to a tiny-skia path in scaled pixel
/// space, flipping to y-down graphics coordinates.
struct MaskBuilder {
    path: PathBuilder,
    scale: f32,
}

impl OutlineBuilder for MaskBuilder {
    fn move_to(&mut self, x: f32, y: f32) {
        self.path.move_to(x * self.scale, -y * self.scale);
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.path.line_to(x * self.scale, -y * self.scale);
    }

    fn quad_to(&mut self, x1: f32, y1: f32, x: f32, y: f32) {
        self.path.quad_to(
            x1 * self.scale,
            -y1 * self.scale,
            x * self.scale,
            -y * self.scale,
        );
    }

    fn curve_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x: f32, y: f32) {
        self.path.cubic_to(
            x1 * self.scale,
            -y1 * self.scale,
            x2 * self.scale,
            -y2 * self.scale,
            x * self.scale,
            -y * self.scale,
        );
    }

    fn close(&mut self) {
        self.path.close();
    }
}
