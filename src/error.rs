// this_file: src/error.rs

//! Error types for glyphline.
//!
//! Errors fall into three families: configuration errors abort the current
//! layout pass, while shaping and rendering errors are recovered locally
//! (the failed run or glyph is skipped and the pass continues).

use thiserror::Error;

/// Main error type for layout and compositing operations.
#[derive(Error, Debug)]
pub enum LayoutError {
    /// Font resource could not be bound to the requested size.
    ///
    /// Fatal to the current layout pass; partial table state is discarded
    /// by the next pass.
    #[error("font configuration failed: {reason}")]
    Configuration { reason: String },

    /// Shaping engine failed on a specific run.
    ///
    /// Recovered by the caller: the run contributes zero glyphs and the
    /// pass continues.
    #[error("failed to shape run [{start}..{end}): {reason}")]
    Shaping {
        start: usize,
        end: usize,
        reason: String,
    },

    /// Rasterization failed for a specific glyph during compositing.
    ///
    /// Recovered by the caller: the glyph contributes no pixels.
    #[error("failed to rasterize glyph {glyph_id}: {reason}")]
    Rendering { glyph_id: u32, reason: String },

    /// I/O error (surface dump plumbing).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl LayoutError {
    /// Build a configuration error from any displayable reason.
    pub fn configuration(reason: impl Into<String>) -> Self {
        LayoutError::Configuration {
            reason: reason.into(),
        }
    }

    /// Build a rendering error for one glyph.
    pub fn rendering(glyph_id: u32, reason: impl Into<String>) -> Self {
        LayoutError::Rendering {
            glyph_id,
            reason: reason.into(),
        }
    }
}

/// Specialized Result type for glyphline operations.
pub type Result<T> = std::result::Result<T, LayoutError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configuration_display() {
        let err = LayoutError::configuration("pixel size must be positive");
        assert!(err.to_string().contains("font configuration failed"));
        assert!(err.to_string().contains("pixel size must be positive"));
    }

    #[test]
    fn test_shaping_display_carries_range() {
        let err = LayoutError::Shaping {
            start: 3,
            end: 9,
            reason: "engine rejected buffer".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("[3..9)"));
        assert!(msg.contains("engine rejected buffer"));
    }

    #[test]
    fn test_rendering_display_carries_glyph() {
        let err = LayoutError::rendering(42, "no outline");
        assert!(err.to_string().contains("glyph 42"));
    }
}
