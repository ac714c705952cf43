use gpui::*;

#[derive(Clone, Debug)]
pub struct ChartTheme {
    pub background: Hsla,
    pub axis_line: Hsla,
    pub axis_label: Hsla,
    pub axis_label_size: Pixels,
    pub tick_size: Pixels,
    pub tooltip_background: Hsla,
    pub tooltip_text: Hsla,
    pub tooltip_border: Hsla,
    pub tooltip_radius: Pixels,
    pub tooltip_padding: Pixels,
    pub tooltip_text_size: Pixels,
}

impl Default for ChartTheme {
    fn default() -> Self {
        Self {
            background: gpui::white(),
            axis_line: gpui::black(),
            axis_label: gpui::black(),
            axis_label_size: px(10.0),
            tick_size: px(6.0),
            tooltip_background: gpui::white(),
            tooltip_text: gpui::black(),
            tooltip_border: gpui::black(),
            tooltip_radius: px(5.0),
            tooltip_padding: px(5.0),
            tooltip_text_size: px(12.0),
        }
    }
}
