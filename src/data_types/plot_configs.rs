use gpui::{rgb, Hsla};
use serde::{Deserialize, Serialize};

/// Visual encoding of the bars. Colors are `0xRRGGBB`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BarStyle {
    pub fill: u32,
    pub rest_opacity: f32,
    pub hover_opacity: f32,
    pub outline: u32,
    pub outline_width: f32,
}

impl Default for BarStyle {
    fn default() -> Self {
        Self {
            fill: 0x05b6e7,
            rest_opacity: 0.5,
            hover_opacity: 1.0,
            outline: 0x000000,
            outline_width: 2.0,
        }
    }
}

impl BarStyle {
    pub fn fill_color(&self, hovered: bool) -> Hsla {
        let opacity = if hovered {
            self.hover_opacity
        } else {
            self.rest_opacity
        };
        Hsla::from(rgb(self.fill)).opacity(opacity)
    }

    /// Outline width for the current hover state; zero means no outline.
    pub fn outline_width(&self, hovered: bool) -> f32 {
        if hovered {
            self.outline_width
        } else {
            0.0
        }
    }

    pub fn outline_color(&self) -> Hsla {
        rgb(self.outline).into()
    }
}
