use serde::{Deserialize, Serialize};

/// Which aggregate population is on screen.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChartViewState {
    /// Mean rating per director.
    #[default]
    Overview,
    /// Rating per episode for one director.
    Detail { director: String },
}

impl ChartViewState {
    pub fn drill_into(&self, director: impl Into<String>) -> Self {
        Self::Detail {
            director: director.into(),
        }
    }

    pub fn drill_out(&self) -> Self {
        Self::Overview
    }

    /// The boolean "filtered" flag of the detail view.
    pub fn is_filtered(&self) -> bool {
        matches!(self, Self::Detail { .. })
    }

    pub fn selected_director(&self) -> Option<&str> {
        match self {
            Self::Overview => None,
            Self::Detail { director } => Some(director),
        }
    }
}

/// Floating tooltip overlay. Positions are window coordinates.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TooltipState {
    pub opacity: f32,
    pub position: (f32, f32),
    pub text: String,
}

impl TooltipState {
    pub fn is_visible(&self) -> bool {
        self.opacity > 0.0
    }

    pub fn show(&mut self) {
        self.opacity = 1.0;
    }

    pub fn hide(&mut self) {
        self.opacity = 0.0;
    }

    pub fn move_to(&mut self, position: (f32, f32), text: String) {
        self.position = position;
        self.text = text;
    }
}
