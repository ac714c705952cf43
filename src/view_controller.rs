use crate::aggregation::{aggregate_by_director, aggregate_by_episode_for_director_with};
use crate::data_types::{Aggregate, AggregatePair, ChartViewState, Episode, Reduce};

/// What a click on a bar asks for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ClickAction {
    DrillInto(String),
    DrillOut,
}

/// ViewController handles the business logic of interactions (drill, tooltip)
/// independently of the GPUI infrastructure to facilitate testing.
pub struct ViewController;

impl ViewController {
    /// In the overview a click drills into the clicked director; in a detail
    /// view any bar drills back out.
    pub fn click_action(view: &ChartViewState, label: &str) -> ClickAction {
        match view {
            ChartViewState::Overview => ClickAction::DrillInto(label.to_string()),
            ChartViewState::Detail { .. } => ClickAction::DrillOut,
        }
    }

    /// Applies a click action to the current view.
    pub fn transition(view: &ChartViewState, action: &ClickAction) -> ChartViewState {
        match action {
            ClickAction::DrillInto(director) => view.drill_into(director.clone()),
            ClickAction::DrillOut => view.drill_out(),
        }
    }

    /// Recomputes the aggregate a view displays.
    pub fn aggregate_for(
        view: &ChartViewState,
        rows: &[Episode],
        detail_reduce: Reduce,
    ) -> Aggregate {
        match view {
            ChartViewState::Overview => aggregate_by_director(rows),
            ChartViewState::Detail { director } => {
                aggregate_by_episode_for_director_with(rows, director, detail_reduce)
            }
        }
    }

    pub fn tooltip_text(label: &str, pair: &AggregatePair) -> String {
        if pair.has_value() {
            format!("{}: {:.2}", label, pair.value)
        } else {
            format!("{}: n/a", label)
        }
    }

    /// Tooltip sits to the right of the pointer, at the same height.
    pub fn tooltip_position(pointer: (f32, f32), offset_x: f32) -> (f32, f32) {
        (pointer.0 + offset_x, pointer.1)
    }
}
