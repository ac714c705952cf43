use crate::scales::{BandScale, ChartScale};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub enum TextAnchor {
    Start,
    Middle,
    #[default]
    End,
}

/// A category label under the horizontal axis.
#[derive(Clone, Debug, PartialEq)]
pub struct CategoryTick {
    pub label: String,
    /// Tick position along the axis (band center).
    pub position: f32,
    /// Where the text is anchored, relative to the tick.
    pub offset: (f32, f32),
    pub rotation_deg: f32,
    pub anchor: TextAnchor,
}

/// A numeric label beside the vertical axis.
#[derive(Clone, Debug, PartialEq)]
pub struct ValueTick {
    pub value: f64,
    pub position: f32,
    pub text: String,
}

/// Rotation applied to category labels so long names do not overlap.
pub const CATEGORY_LABEL_ROTATION_DEG: f32 = -45.0;
/// Offset of category labels from their tick before rotation.
pub const CATEGORY_LABEL_OFFSET: (f32, f32) = (-10.0, 0.0);

pub fn category_ticks(scale: &BandScale) -> Vec<CategoryTick> {
    scale
        .domain()
        .iter()
        .filter_map(|label| {
            scale.center(label).map(|position| CategoryTick {
                label: label.clone(),
                position,
                offset: CATEGORY_LABEL_OFFSET,
                rotation_deg: CATEGORY_LABEL_ROTATION_DEG,
                anchor: TextAnchor::End,
            })
        })
        .collect()
}

pub fn value_ticks(scale: &ChartScale, count: usize) -> Vec<ValueTick> {
    scale
        .ticks(count)
        .into_iter()
        .map(|value| ValueTick {
            value,
            position: scale.map(value),
            text: scale.format_tick(value),
        })
        .collect()
}

/// Lays out glyphs of a rotated label, given each glyph's advance width.
///
/// The label is anchored at `anchor` according to `anchor_mode` and runs
/// along `rotation_deg` (negative is counter-clockwise, y pointing down).
/// Returns the origin of every glyph.
pub fn rotated_glyph_origins(
    anchor: (f32, f32),
    advances: &[f32],
    rotation_deg: f32,
    anchor_mode: TextAnchor,
) -> Vec<(f32, f32)> {
    let (sin, cos) = rotation_deg.to_radians().sin_cos();
    let total: f32 = advances.iter().sum();
    let lead = match anchor_mode {
        TextAnchor::Start => 0.0,
        TextAnchor::Middle => total / 2.0,
        TextAnchor::End => total,
    };

    let mut distance = -lead;
    advances
        .iter()
        .map(|advance| {
            let origin = (anchor.0 + distance * cos, anchor.1 + distance * sin);
            distance += advance;
            origin
        })
        .collect()
}
