//! Window geometry and font settings

use crate::text;

/// Font family used by every widget.
pub const FONT_FAMILY: &str = "微软雅黑";

/// Font size in points.
pub const FONT_SIZE_PT: f32 = 12.0;

/// Width of the text input, in average characters.
pub const INPUT_WIDTH_CHARS: u16 = 25;

/// Fixed presentation settings for the greeter window
#[derive(Debug, Clone, PartialEq)]
pub struct WindowConfig {
    pub title: &'static str,
    pub width: f32,
    pub height: f32,
    pub resizable: bool,
    pub font_family: &'static str,
    pub font_size_pt: f32,
    pub input_width_chars: u16,
    /// Vertical gap between stacked widgets, in logical pixels
    pub spacing: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: text::WINDOW_TITLE,
            width: 400.0,
            height: 200.0,
            resizable: false,
            font_family: FONT_FAMILY,
            font_size_pt: FONT_SIZE_PT,
            input_width_chars: INPUT_WIDTH_CHARS,
            spacing: 10.0,
        }
    }
}

impl WindowConfig {
    /// Font size in logical pixels (points at 96 DPI).
    pub fn font_size_px(&self) -> f32 {
        self.font_size_pt * 96.0 / 72.0
    }

    /// Approximate text input width in logical pixels.
    ///
    /// Uses the average CJK-capable glyph advance of roughly 0.6 em.
    pub fn input_width_px(&self) -> f32 {
        (f32::from(self.input_width_chars) * self.font_size_px() * 0.6).round()
    }
}
