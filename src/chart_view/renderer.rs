use crate::animation::BarGeometry;
use crate::axis_renderer::AxisRenderer;
use crate::chart::EpisodeChart;
use crate::data_types::{BarStyle, CategoryTick, ValueTick};
use crate::theme::ChartTheme;
use gpui::prelude::*;
use gpui::*;
use std::cell::RefCell;
use std::rc::Rc;

/// Paints the chart model: bars, both axes and the tooltip overlay.
#[derive(Clone)]
pub struct ChartRenderer {
    pub chart: Entity<EpisodeChart>,
    pub theme: ChartTheme,
    /// Bounds of the drawing surface from the last paint, shared with input.
    pub bounds: Rc<RefCell<Bounds<Pixels>>>,
}

/// Everything the paint closure needs, detached from the model.
struct PaintSnapshot {
    bars: Vec<(BarGeometry, bool)>,
    style: BarStyle,
    category_ticks: Vec<CategoryTick>,
    value_ticks: Vec<ValueTick>,
    plot_origin: (f32, f32),
    plot_size: (f32, f32),
}

impl ChartRenderer {
    pub fn new(chart: Entity<EpisodeChart>, bounds: Rc<RefCell<Bounds<Pixels>>>) -> Self {
        Self {
            chart,
            theme: ChartTheme::default(),
            bounds,
        }
    }

    fn snapshot(chart: &EpisodeChart) -> PaintSnapshot {
        PaintSnapshot {
            bars: chart
                .bar_geometries()
                .into_iter()
                .map(|(shape, geometry)| (geometry, shape.hovered))
                .collect(),
            style: chart.config.bar.clone(),
            category_ticks: chart.category_ticks(),
            value_ticks: chart.value_ticks(),
            plot_origin: chart.layout.plot_origin(),
            plot_size: (chart.layout.plot_width, chart.layout.plot_height),
        }
    }

    fn paint_bars(snapshot: &PaintSnapshot, plot: Bounds<Pixels>, window: &mut Window) {
        for (geometry, hovered) in &snapshot.bars {
            if geometry.width <= 0.0 {
                continue;
            }
            let rect = Bounds::new(
                point(plot.origin.x + px(geometry.x), plot.origin.y + px(geometry.y)),
                size(px(geometry.width), px(geometry.height)),
            );
            let outline = snapshot.style.outline_width(*hovered);
            let mut quad = fill(rect, snapshot.style.fill_color(*hovered));
            if outline > 0.0 {
                quad = quad
                    .border_widths(px(outline))
                    .border_color(snapshot.style.outline_color());
            }
            window.paint_quad(quad);
        }
    }

    pub fn render(&self, _window: &mut Window, cx: &mut App) -> Div {
        let chart = self.chart.read(cx);
        let snapshot = Self::snapshot(chart);
        let (surface_w, surface_h) = chart.layout.surface_size();
        let tooltip = chart.tooltip().clone();
        let theme = self.theme.clone();
        let bounds_rc = self.bounds.clone();

        let canvas_theme = theme.clone();
        let surface = canvas(
            |_, _, _| {},
            move |bounds, (), window, cx| {
                *bounds_rc.borrow_mut() = bounds;
                let plot = Bounds::new(
                    point(
                        bounds.origin.x + px(snapshot.plot_origin.0),
                        bounds.origin.y + px(snapshot.plot_origin.1),
                    ),
                    size(px(snapshot.plot_size.0), px(snapshot.plot_size.1)),
                );
                Self::paint_bars(&snapshot, plot, window);
                AxisRenderer::paint_value_axis(&snapshot.value_ticks, plot, &canvas_theme, window, cx);
                AxisRenderer::paint_category_axis(
                    &snapshot.category_ticks,
                    plot,
                    &canvas_theme,
                    window,
                    cx,
                );
            },
        )
        .size_full();

        div()
            .relative()
            .w(px(surface_w))
            .h(px(surface_h))
            .bg(theme.background)
            .child(surface)
            .children(tooltip.is_visible().then(|| {
                div()
                    .absolute()
                    .left(px(tooltip.position.0))
                    .top(px(tooltip.position.1))
                    .opacity(tooltip.opacity)
                    .bg(theme.tooltip_background)
                    .text_color(theme.tooltip_text)
                    .text_size(theme.tooltip_text_size)
                    .border_2()
                    .border_color(theme.tooltip_border)
                    .rounded(theme.tooltip_radius)
                    .p(theme.tooltip_padding)
                    .child(tooltip.text.clone())
            }))
    }
}
