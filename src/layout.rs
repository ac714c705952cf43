use serde::{Deserialize, Serialize};

/// Fixed margins around the plot area, in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Margins {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Default for Margins {
    fn default() -> Self {
        Self {
            top: 50.0,
            right: 50.0,
            bottom: 100.0,
            left: 80.0,
        }
    }
}

/// Surface and plot sizes, computed once from the viewport at load time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChartLayout {
    pub margins: Margins,
    pub plot_width: f32,
    pub plot_height: f32,
}

impl ChartLayout {
    pub fn from_viewport(width: f32, height: f32, margins: Margins) -> Self {
        Self {
            margins,
            plot_width: (width - margins.left - margins.right).max(0.0),
            plot_height: (height - margins.top - margins.bottom).max(0.0),
        }
    }

    pub fn surface_size(&self) -> (f32, f32) {
        (
            self.plot_width + self.margins.left + self.margins.right,
            self.plot_height + self.margins.top + self.margins.bottom,
        )
    }

    /// Top-left corner of the plot area on the surface.
    pub fn plot_origin(&self) -> (f32, f32) {
        (self.margins.left, self.margins.top)
    }

    /// Surface point to plot-local point.
    pub fn to_plot(&self, x: f32, y: f32) -> (f32, f32) {
        (x - self.margins.left, y - self.margins.top)
    }

    pub fn baseline(&self) -> f32 {
        self.plot_height
    }
}
