// this_file: src/style.rs

//! Style description for a layout pass.
//!
//! A [`StyleDescriptor`] is resolved once per pass and immutable from then
//! on. The layout core reads only the pixel size and hint flags directly;
//! weight and italic are folded into a [`FontStyleKey`] and handed to the
//! itemizer for font selection.

use bitflags::bitflags;

bitflags! {
    /// Hint toggles forwarded to the rendering engine per glyph.
    ///
    /// Default (empty) leaves hinting enabled.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct HintFlags: u32 {
        /// Disable hinting entirely.
        const NO_HINTING = 1 << 0;
        /// Disable the auto-hinter, keep native hints.
        const NO_AUTOHINT = 1 << 1;
    }
}

/// Resolved style for one layout pass.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleDescriptor {
    /// Font size in pixels, both axes. Must be positive.
    pub pixel_size: f32,
    /// Font weight, 100-900.
    pub weight: u16,
    /// Italic selection flag.
    pub italic: bool,
    /// Hint toggles for rasterization.
    pub hint_flags: HintFlags,
}

impl StyleDescriptor {
    /// Create a style at the given pixel size with regular weight.
    pub fn new(pixel_size: f32) -> Self {
        Self {
            pixel_size,
            weight: 400,
            italic: false,
            hint_flags: HintFlags::empty(),
        }
    }

    pub fn with_weight(mut self, weight: u16) -> Self {
        self.weight = weight;
        self
    }

    pub fn with_italic(mut self, italic: bool) -> Self {
        self.italic = italic;
        self
    }

    pub fn with_hint_flags(mut self, hint_flags: HintFlags) -> Self {
        self.hint_flags = hint_flags;
        self
    }

    /// Derive the font-selection key the itemizer matches against.
    pub fn style_key(&self) -> FontStyleKey {
        FontStyleKey {
            weight_class: (self.weight / 100) as u8,
            italic: self.italic,
        }
    }
}

/// Font-selection key derived from a style: weight category (weight / 100)
/// plus the italic flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FontStyleKey {
    pub weight_class: u8,
    pub italic: bool,
}
