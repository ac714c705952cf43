use crate::data_types::{rotated_glyph_origins, CategoryTick, ValueTick};
use crate::theme::ChartTheme;
use gpui::*;

pub struct AxisRenderer;

impl AxisRenderer {
    fn text_run(len: usize, color: Hsla) -> TextRun {
        TextRun {
            len,
            font: TextStyle::default().font(),
            color,
            background_color: None,
            underline: None,
            strikethrough: None,
        }
    }

    /// Shapes `text` and paints it with its left edge at `origin.x` minus
    /// the line width when `align_right` is set.
    fn paint_text(
        text: &str,
        origin: Point<Pixels>,
        align_right: bool,
        font_size: Pixels,
        color: Hsla,
        window: &mut Window,
        cx: &mut App,
    ) {
        let run = Self::text_run(text.len(), color);
        if let Ok(lines) = window.text_system().shape_text(
            text.to_string().into(),
            font_size,
            &[run],
            None,
            None,
        ) {
            for line in lines {
                let width = line.width();
                let x = if align_right { origin.x - width } else { origin.x };
                let _ = line.paint(point(x, origin.y), font_size, TextAlign::Left, None, window, cx);
            }
        }
    }

    fn stroke(from: Point<Pixels>, to: Point<Pixels>, color: Hsla, window: &mut Window) {
        let mut builder = PathBuilder::stroke(px(1.0));
        builder.move_to(from);
        builder.line_to(to);
        if let Ok(path) = builder.build() {
            window.paint_path(path, color);
        }
    }

    /// Bottom axis: domain line, one tick per band, labels rotated and
    /// right-aligned at their tick.
    pub fn paint_category_axis(
        ticks: &[CategoryTick],
        plot: Bounds<Pixels>,
        theme: &ChartTheme,
        window: &mut Window,
        cx: &mut App,
    ) {
        let y = plot.origin.y + plot.size.height;
        Self::stroke(
            point(plot.origin.x, y),
            point(plot.origin.x + plot.size.width, y),
            theme.axis_line,
            window,
        );

        let font_size = theme.axis_label_size;
        for tick in ticks {
            let x = plot.origin.x + px(tick.position);
            Self::stroke(point(x, y), point(x, y + theme.tick_size), theme.axis_line, window);

            let chars: Vec<String> = tick.label.chars().map(String::from).collect();
            let advances: Vec<f32> = chars
                .iter()
                .map(|c| {
                    let run = Self::text_run(c.len(), theme.axis_label);
                    window
                        .text_system()
                        .shape_text(c.clone().into(), font_size, &[run], None, None)
                        .ok()
                        .and_then(|lines| lines.first().map(|l| f32::from(l.width())))
                        .unwrap_or(0.0)
                })
                .collect();

            let anchor = (
                f32::from(x) + tick.offset.0,
                f32::from(y + theme.tick_size) + 3.0 + tick.offset.1,
            );
            let origins = rotated_glyph_origins(anchor, &advances, tick.rotation_deg, tick.anchor);
            for (glyph, (gx, gy)) in chars.iter().zip(origins) {
                Self::paint_text(
                    glyph,
                    point(px(gx), px(gy)),
                    false,
                    font_size,
                    theme.axis_label,
                    window,
                    cx,
                );
            }
        }
    }

    /// Left axis: domain line, ticks and right-aligned numeric labels.
    pub fn paint_value_axis(
        ticks: &[ValueTick],
        plot: Bounds<Pixels>,
        theme: &ChartTheme,
        window: &mut Window,
        cx: &mut App,
    ) {
        let x = plot.origin.x;
        Self::stroke(
            point(x, plot.origin.y),
            point(x, plot.origin.y + plot.size.height),
            theme.axis_line,
            window,
        );

        let font_size = theme.axis_label_size;
        for tick in ticks {
            let y = plot.origin.y + px(tick.position);
            Self::stroke(point(x - theme.tick_size, y), point(x, y), theme.axis_line, window);
            Self::paint_text(
                &tick.text,
                point(x - theme.tick_size - px(3.0), y - font_size / 2.0),
                true,
                font_size,
                theme.axis_label,
                window,
                cx,
            );
        }
    }
}
