use crate::chart::EpisodeChart;
use crate::utils::relative_to;
use gpui::*;
use std::cell::RefCell;
use std::rc::Rc;

/// Turns window mouse events into chart hover and click operations.
#[derive(Clone)]
pub struct ChartInputHandler {
    pub chart: Entity<EpisodeChart>,
    pub focus_handle: FocusHandle,
    pub bounds: Rc<RefCell<Bounds<Pixels>>>,
    /// Bar under the pointer when the left button went down.
    pressed: Rc<RefCell<Option<String>>>,
}

impl ChartInputHandler {
    pub fn new(
        chart: Entity<EpisodeChart>,
        focus_handle: FocusHandle,
        bounds: Rc<RefCell<Bounds<Pixels>>>,
    ) -> Self {
        Self {
            chart,
            focus_handle,
            bounds,
            pressed: Rc::new(RefCell::new(None)),
        }
    }

    fn surface_point(&self, position: Point<Pixels>) -> Option<(f32, f32)> {
        let bounds = *self.bounds.borrow();
        if !bounds.contains(&position) {
            return None;
        }
        Some(relative_to(position, bounds.origin))
    }

    pub fn handle_mouse_move(&self, event: &MouseMoveEvent, _window: &mut Window, cx: &mut App) {
        let point = self.surface_point(event.position);
        self.chart.update(cx, |c, cx| {
            let changed = match point {
                Some(p) => c.pointer_moved(p),
                None => c.pointer_left(),
            };
            if changed {
                cx.notify();
            }
        });
    }

    pub fn handle_hover(&self, hovered: bool, cx: &mut App) {
        if hovered {
            return;
        }
        self.chart.update(cx, |c, cx| {
            if c.pointer_left() {
                cx.notify();
            }
        });
    }

    pub fn handle_mouse_down(&self, event: &MouseDownEvent, window: &mut Window, cx: &mut App) {
        window.focus(&self.focus_handle);
        let Some((x, y)) = self.surface_point(event.position) else {
            return;
        };
        let chart = self.chart.read(cx);
        let (px, py) = chart.layout.to_plot(x, y);
        *self.pressed.borrow_mut() = chart
            .bars()
            .hit_test(px, py, chart.elapsed())
            .map(|s| s.key.clone());
    }

    /// A click lands when the button goes up over the bar it went down on.
    pub fn handle_mouse_up(&self, event: &MouseUpEvent, _window: &mut Window, cx: &mut App) {
        let Some(pressed) = self.pressed.borrow_mut().take() else {
            return;
        };
        let Some((x, y)) = self.surface_point(event.position) else {
            return;
        };
        self.chart.update(cx, |c, cx| {
            let (px, py) = c.layout.to_plot(x, y);
            let released = c.bars().hit_test(px, py, c.elapsed()).map(|s| s.key.clone());
            if released.as_deref() == Some(pressed.as_str()) {
                c.click(&pressed);
                cx.notify();
            }
        });
    }
}
