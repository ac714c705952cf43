//! Chart Model
//!
//! This module defines the `EpisodeChart` model, the single source of truth
//! for what is on screen: the displayed aggregate, its scales, the retained
//! bar shapes and the tooltip. It owns the render/update cycle and the
//! interaction entry points (hover, click, drill).
//!
//! The model knows nothing about GPUI windows; `ChartView` wraps it in an
//! entity, feeds it pointer events and paints its state.

use crate::animation::{BarGeometry, DomainTransition, EntrancePlan};
use crate::config::ChartConfig;
use crate::data_types::{
    category_ticks, value_ticks, Aggregate, CategoryTick, ChartViewState, Episode, TooltipState,
    ValueTick,
};
use crate::layout::ChartLayout;
use crate::reconcile::{diff, BarLayer, BarShape};
use crate::scales::{BandScale, ChartScale};
use crate::view_controller::{ClickAction, ViewController};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

pub struct EpisodeChart {
    episodes: Arc<[Episode]>,
    pub config: ChartConfig,
    pub layout: ChartLayout,

    view: ChartViewState,
    aggregate: Aggregate,
    x_scale: BandScale,
    y_scale: ChartScale,
    y_domain: DomainTransition,
    bars: BarLayer,

    tooltip: TooltipState,
    hovered: Option<String>,

    /// Time since the last render started its transitions.
    elapsed: Duration,
}

impl EpisodeChart {
    /// Builds the chart and renders the overview.
    pub fn new(episodes: impl Into<Arc<[Episode]>>, layout: ChartLayout, config: ChartConfig) -> Self {
        let episodes = episodes.into();
        info!(rows = episodes.len(), "creating episode chart");

        let mut chart = Self {
            episodes,
            x_scale: BandScale::new(vec![], (0.0, layout.plot_width), config.band_padding),
            y_scale: ChartScale::value_axis(0.0, layout.plot_height),
            y_domain: DomainTransition::settled(0.0),
            config,
            layout,
            view: ChartViewState::Overview,
            aggregate: Aggregate::default(),
            bars: BarLayer::default(),
            tooltip: TooltipState::default(),
            hovered: None,
            elapsed: Duration::ZERO,
        };
        let overview = chart.aggregate_for(&ChartViewState::Overview);
        chart.render(overview, ChartViewState::Overview);
        chart
    }

    pub fn episodes(&self) -> &[Episode] {
        &self.episodes
    }

    pub fn view(&self) -> &ChartViewState {
        &self.view
    }

    /// The displayed aggregate, sorted by label.
    pub fn aggregate(&self) -> &Aggregate {
        &self.aggregate
    }

    pub fn x_scale(&self) -> &BandScale {
        &self.x_scale
    }

    /// Value scale at the end of the current axis transition.
    pub fn y_scale(&self) -> &ChartScale {
        &self.y_scale
    }

    pub fn bars(&self) -> &BarLayer {
        &self.bars
    }

    pub fn tooltip(&self) -> &TooltipState {
        &self.tooltip
    }

    pub fn hovered(&self) -> Option<&str> {
        self.hovered.as_deref()
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    pub fn aggregate_for(&self, view: &ChartViewState) -> Aggregate {
        ViewController::aggregate_for(view, &self.episodes, self.config.detail_reduce)
    }

    /// Reconciles the bars against `aggregate` and starts their transitions.
    ///
    /// Scales are fully rebuilt before any shape gets a new target.
    pub fn render(&mut self, aggregate: Aggregate, view: ChartViewState) {
        let aggregate = aggregate.sorted();
        let plot_width = self.layout.plot_width;
        let plot_height = self.layout.plot_height;

        let labels: Vec<String> = aggregate.labels().map(str::to_string).collect();
        let x_scale = BandScale::new(labels, (0.0, plot_width), self.config.band_padding);
        let max = aggregate.max_value();
        let y_scale = ChartScale::value_axis(max, plot_height);
        let y_domain = DomainTransition {
            from_max: self.y_domain.sample(self.elapsed),
            to_max: max,
            duration: self.config.axis_duration(),
        };

        let targets = aggregate.pairs.iter().map(|pair| {
            let x = x_scale.map(&pair.label).unwrap_or_default();
            let y = y_scale.map(pair.value);
            let target = BarGeometry {
                x,
                y,
                width: x_scale.bandwidth(),
                height: (plot_height - y).max(0.0),
            };
            (pair.label.clone(), target)
        });
        let plan = EntrancePlan::staggered(
            targets,
            self.config.entrance_duration(),
            self.config.stagger(),
        );

        let ops = diff(self.bars.keys(), aggregate.labels());
        self.bars
            .apply(&ops, &aggregate.pairs, &plan, self.layout.baseline(), self.elapsed);

        info!(
            bars = aggregate.len(),
            filtered = view.is_filtered(),
            max,
            "rendered aggregate"
        );

        self.x_scale = x_scale;
        self.y_scale = y_scale;
        self.y_domain = y_domain;
        self.aggregate = aggregate;
        self.view = view;
        self.hovered = None;
        self.elapsed = Duration::ZERO;
    }

    /// Moves the animation clock forward.
    pub fn advance(&mut self, dt: Duration) {
        self.elapsed += dt;
    }

    pub fn is_animating(&self) -> bool {
        self.bars.is_animating(self.elapsed) || !self.y_domain.is_finished(self.elapsed)
    }

    /// Current geometry of every bar, in display order.
    pub fn bar_geometries(&self) -> Vec<(&BarShape, BarGeometry)> {
        self.bars
            .shapes()
            .iter()
            .map(|s| (s, s.geometry_at(self.elapsed)))
            .collect()
    }

    /// Value scale at the current point of the axis transition.
    pub fn animated_y_scale(&self) -> ChartScale {
        ChartScale::value_axis(self.y_domain.sample(self.elapsed), self.layout.plot_height)
    }

    pub fn category_ticks(&self) -> Vec<CategoryTick> {
        category_ticks(&self.x_scale)
    }

    pub fn value_ticks(&self) -> Vec<ValueTick> {
        value_ticks(&self.animated_y_scale(), self.config.value_tick_count)
    }

    // --- Interaction ---

    pub fn hover_enter(&mut self, label: &str) {
        let Some(shape) = self.bars.get_mut(label) else {
            return;
        };
        shape.hovered = true;
        self.hovered = Some(label.to_string());
        self.tooltip.show();
    }

    /// `pointer` is in surface coordinates.
    pub fn hover_move(&mut self, label: &str, pointer: (f32, f32)) {
        let Some(shape) = self.bars.get(label) else {
            return;
        };
        let text = ViewController::tooltip_text(&self.config.tooltip_label, &shape.datum);
        let position = ViewController::tooltip_position(pointer, self.config.tooltip_offset_x);
        self.tooltip.move_to(position, text);
    }

    pub fn hover_leave(&mut self, label: &str) {
        if let Some(shape) = self.bars.get_mut(label) {
            shape.hovered = false;
        }
        if self.hovered.as_deref() == Some(label) {
            self.hovered = None;
        }
        self.tooltip.hide();
    }

    /// Routes a pointer position (surface coordinates) to enter/move/leave.
    /// Returns true when anything visible changed.
    pub fn pointer_moved(&mut self, pointer: (f32, f32)) -> bool {
        let (px, py) = self.layout.to_plot(pointer.0, pointer.1);
        let hit = self
            .bars
            .hit_test(px, py, self.elapsed)
            .map(|s| s.key.clone());

        let changed = hit.as_deref() != self.hovered.as_deref();
        if changed {
            if let Some(previous) = self.hovered.clone() {
                self.hover_leave(&previous);
            }
            if let Some(label) = &hit {
                self.hover_enter(label);
            }
        }
        match hit {
            Some(label) => {
                self.hover_move(&label, pointer);
                true
            }
            None => changed,
        }
    }

    /// Pointer left the chart surface.
    pub fn pointer_left(&mut self) -> bool {
        match self.hovered.clone() {
            Some(label) => {
                self.hover_leave(&label);
                true
            }
            None => false,
        }
    }

    /// Click on the bar labelled `label`.
    pub fn click(&mut self, label: &str) {
        if self.bars.get(label).is_none() {
            return;
        }
        let action = ViewController::click_action(&self.view, label);
        self.apply_click(&action);
    }

    fn apply_click(&mut self, action: &ClickAction) {
        match action {
            ClickAction::DrillInto(director) => {
                debug!(director = director.as_str(), "drilling into director")
            }
            ClickAction::DrillOut => debug!("drilling out to overview"),
        }
        let view = ViewController::transition(&self.view, action);
        let aggregate = self.aggregate_for(&view);
        self.tooltip.hide();
        self.render(aggregate, view);
    }

    /// Click at a surface position; returns true when a bar was hit.
    pub fn click_at(&mut self, pointer: (f32, f32)) -> bool {
        let (px, py) = self.layout.to_plot(pointer.0, pointer.1);
        let Some(label) = self
            .bars
            .hit_test(px, py, self.elapsed)
            .map(|s| s.key.clone())
        else {
            return false;
        };
        self.click(&label);
        true
    }

    pub fn drill_into(&mut self, director: &str) {
        self.apply_click(&ClickAction::DrillInto(director.to_string()));
    }

    pub fn drill_out(&mut self) {
        self.apply_click(&ClickAction::DrillOut);
    }
}
