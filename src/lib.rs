// this_file: src/lib.rs

//! Glyphline: text-layout core with coverage compositing.
//!
//! Turns a text buffer plus a style into a positioned glyph list, then
//! blends rendered glyph bitmaps into a caller-owned raster surface.
//! Itemization, shaping, and rasterization are collaborator concerns
//! behind the [`FontCollection`] and [`FontEngine`] traits; a
//! HarfBuzz-backed engine ships in [`hb`].
//!
//! ## Architecture
//!
//! - **style**: style descriptor, hint flags, font-selection key
//! - **table**: per-pass font resource deduplication and handle caching
//! - **shaper**: per-run shaping and pen accumulation
//! - **layout**: pass orchestration and glyph-list assembly
//! - **raster** / **surface**: glyph compositing with saturating blend
//! - **hb**: HarfBuzz + ttf-parser engine implementation
//! - **fixed** / **types** / **error**: shared plumbing
//!
//! ## Example
//!
//! ```rust,no_run
//! use glyphline::hb::{FaceHandle, HarfBuzzEngine};
//! use glyphline::{FontCollection, FontStyleKey, LayoutEngine, RasterSurface, Run,
//!                 StyleDescriptor};
//!
//! // Minimal collection: one font backs everything.
//! struct SingleFont(FaceHandle);
//!
//! impl FontCollection for SingleFont {
//!     type Font = FaceHandle;
//!     fn itemize(&self, text: &str, _key: FontStyleKey) -> Vec<Run<FaceHandle>> {
//!         vec![Run { font: self.0.clone(), start: 0, end: text.len() }]
//!     }
//! }
//!
//! let face = FaceHandle::from_file("font.ttf", 0)?;
//! let mut layout = LayoutEngine::new(SingleFont(face), HarfBuzzEngine::new());
//! layout.layout("Hello", &StyleDescriptor::new(32.0))?;
//!
//! let mut surface = RasterSurface::new(256, 64);
//! layout.composite(&mut surface, 4, 48);
//! let mut pnm = Vec::new();
//! surface.write_pnm(&mut pnm)?;
//! # Ok::<(), glyphline::LayoutError>(())
//! ```

pub mod error;
pub mod fixed;
pub mod hb;
pub mod layout;
pub mod raster;
mod shaper;
pub mod style;
pub mod surface;
pub mod table;
pub mod traits;
pub mod types;

pub use error::{LayoutError, Result};
pub use layout::LayoutEngine;
pub use style::{FontStyleKey, HintFlags, StyleDescriptor};
pub use surface::RasterSurface;
pub use table::FontResourceTable;
pub use traits::{FontCollection, FontEngine};
pub use types::{GlyphBitmap, PositionedGlyph, Run, ShapedGlyph};
