//! Keyed reconciliation of the retained bar shapes.
//!
//! [`diff`] compares the labels currently on screen with the labels of the
//! next aggregate and yields one operation per label. [`BarLayer::apply`]
//! turns those operations into created, moved and removed shapes.

use crate::animation::{BarGeometry, BarTransition, EntrancePlan};
use crate::data_types::AggregatePair;
use std::collections::HashSet;
use std::time::Duration;
use tracing::debug;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BarOp {
    /// New label: create a shape at `index`.
    Enter { key: String, index: usize },
    /// Label already on screen: keep the shape, move it to `index`.
    Update { key: String, index: usize },
    /// Label no longer present: remove its shape.
    Exit { key: String },
}

impl BarOp {
    pub fn key(&self) -> &str {
        match self {
            Self::Enter { key, .. } | Self::Update { key, .. } | Self::Exit { key } => key,
        }
    }
}

/// Exits first (in existing order), then enters/updates in the order of `next`.
pub fn diff<'a>(
    existing: impl IntoIterator<Item = &'a str>,
    next: impl IntoIterator<Item = &'a str>,
) -> Vec<BarOp> {
    let existing: Vec<&str> = existing.into_iter().collect();
    let next: Vec<&str> = next.into_iter().collect();
    let existing_set: HashSet<&str> = existing.iter().copied().collect();
    let next_set: HashSet<&str> = next.iter().copied().collect();

    let mut ops: Vec<BarOp> = existing
        .iter()
        .filter(|k| !next_set.contains(*k))
        .map(|k| BarOp::Exit { key: k.to_string() })
        .collect();

    ops.extend(next.iter().enumerate().map(|(index, k)| {
        let key = k.to_string();
        if existing_set.contains(k) {
            BarOp::Update { key, index }
        } else {
            BarOp::Enter { key, index }
        }
    }));
    ops
}

/// Smallest pointer target of a bar, in pixels.
pub const MIN_HIT_HEIGHT: f32 = 8.0;

/// A bar on screen.
#[derive(Clone, Debug, PartialEq)]
pub struct BarShape {
    pub key: String,
    pub datum: AggregatePair,
    pub transition: BarTransition,
    pub hovered: bool,
}

impl BarShape {
    pub fn geometry_at(&self, elapsed: Duration) -> BarGeometry {
        self.transition.sample(elapsed)
    }
}

/// Retained collection of bar shapes, kept in display order.
#[derive(Clone, Debug, Default)]
pub struct BarLayer {
    shapes: Vec<BarShape>,
}

impl BarLayer {
    pub fn shapes(&self) -> &[BarShape] {
        &self.shapes
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.shapes.iter().map(|s| s.key.as_str())
    }

    pub fn get(&self, key: &str) -> Option<&BarShape> {
        self.shapes.iter().find(|s| s.key == key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut BarShape> {
        self.shapes.iter_mut().find(|s| s.key == key)
    }

    /// Applies `ops` against `data` (same order as the plan).
    ///
    /// `elapsed` is the time spent in the previous transition; persisting
    /// shapes start moving from where they are at that instant. New shapes
    /// start collapsed on `baseline`. Every shape comes back un-hovered.
    pub fn apply(
        &mut self,
        ops: &[BarOp],
        data: &[AggregatePair],
        plan: &EntrancePlan,
        baseline: f32,
        elapsed: Duration,
    ) {
        let mut previous: Vec<BarShape> = std::mem::take(&mut self.shapes);
        let (mut entered, mut updated, mut exited) = (0usize, 0usize, 0usize);

        for op in ops {
            match op {
                BarOp::Exit { key } => {
                    previous.retain(|s| &s.key != key);
                    exited += 1;
                }
                BarOp::Enter { key, index } | BarOp::Update { key, index } => {
                    let (Some(step), Some(datum)) = (plan.steps.get(*index), data.get(*index))
                    else {
                        continue;
                    };
                    let from = match op {
                        BarOp::Update { .. } => {
                            updated += 1;
                            previous
                                .iter()
                                .find(|s| &s.key == key)
                                .map(|s| s.geometry_at(elapsed))
                                .unwrap_or_else(|| {
                                    BarGeometry::collapsed(step.target.x, step.target.width, baseline)
                                })
                        }
                        _ => {
                            entered += 1;
                            BarGeometry::collapsed(step.target.x, step.target.width, baseline)
                        }
                    };
                    self.shapes.push(BarShape {
                        key: key.clone(),
                        datum: datum.clone(),
                        transition: BarTransition {
                            from,
                            to: step.target,
                            delay: step.delay,
                            duration: plan.duration,
                        },
                        hovered: false,
                    });
                }
            }
        }

        debug!(entered, updated, exited, "reconciled bar layer");
    }

    /// Topmost bar under a plot-local point. Bars shorter than
    /// [`MIN_HIT_HEIGHT`] are hit within that height above their base.
    pub fn hit_test(&self, x: f32, y: f32, elapsed: Duration) -> Option<&BarShape> {
        self.shapes
            .iter()
            .rev()
            .find(|s| s.geometry_at(elapsed).hit_area(MIN_HIT_HEIGHT).contains(x, y))
    }

    pub fn is_animating(&self, elapsed: Duration) -> bool {
        self.shapes
            .iter()
            .any(|s| !s.transition.is_finished(elapsed))
    }
}
