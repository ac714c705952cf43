pub mod input;
pub mod renderer;

use crate::chart::EpisodeChart;
use crate::config::ChartConfig;
use crate::data_types::Episode;
use crate::layout::ChartLayout;
use crate::utils::PixelsExt;
use gpui::prelude::*;
use gpui::*;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;
use std::time::Instant;

use self::input::ChartInputHandler;
use self::renderer::ChartRenderer;

pub struct ChartView {
    pub chart: Entity<EpisodeChart>,

    // Components (Delegates)
    renderer: ChartRenderer,
    input: ChartInputHandler,

    last_frame: Option<Instant>,
    focus_handle: FocusHandle,
}

impl Focusable for ChartView {
    fn focus_handle(&self, _cx: &App) -> FocusHandle {
        self.focus_handle.clone()
    }
}

impl ChartView {
    pub fn new(chart: Entity<EpisodeChart>, cx: &mut Context<Self>) -> Self {
        cx.observe(&chart, |_, _, cx| cx.notify()).detach();

        let focus_handle = cx.focus_handle();
        let bounds = Rc::new(RefCell::new(Bounds::default()));

        let renderer = ChartRenderer::new(chart.clone(), bounds.clone());
        let input = ChartInputHandler::new(chart.clone(), focus_handle.clone(), bounds);

        Self {
            chart,
            renderer,
            input,
            last_frame: None,
            focus_handle,
        }
    }

    /// Creates the chart model sized from the window's current viewport.
    pub fn build(
        episodes: impl Into<Arc<[Episode]>>,
        config: ChartConfig,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> Self {
        let viewport = window.viewport_size();
        let layout = ChartLayout::from_viewport(
            viewport.width.as_f32(),
            viewport.height.as_f32(),
            config.margins,
        );
        let episodes = episodes.into();
        let chart = cx.new(|_| EpisodeChart::new(episodes, layout, config));
        Self::new(chart, cx)
    }

    /// Advances the animation clock by the time since the previous frame.
    fn tick(&mut self, cx: &mut Context<Self>) {
        let now = Instant::now();
        let dt = self
            .last_frame
            .map(|last| now.duration_since(last))
            .unwrap_or_default();
        self.last_frame = Some(now);
        self.chart.update(cx, |c, cx| {
            c.advance(dt);
            cx.notify();
        });
    }
}

impl Render for ChartView {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        if self.chart.read(cx).is_animating() {
            cx.on_next_frame(window, |this, _window, cx| this.tick(cx));
        } else {
            self.last_frame = None;
        }

        let element = self.renderer.render(window, cx);
        let input = self.input.clone();
        let entity_id = cx.entity_id();

        element
            .id(("episode-chart", entity_id))
            .track_focus(&self.focus_handle)
            .on_mouse_move({
                let input = input.clone();
                move |e, w, c| input.handle_mouse_move(e, w, c)
            })
            .on_mouse_down(MouseButton::Left, {
                let input = input.clone();
                move |e, w, c| input.handle_mouse_down(e, w, c)
            })
            .on_mouse_up(MouseButton::Left, {
                let input = input.clone();
                move |e, w, c| input.handle_mouse_up(e, w, c)
            })
            .on_hover({
                let input = input.clone();
                move |hovered, _w, c| input.handle_hover(*hovered, c)
            })
    }
}
