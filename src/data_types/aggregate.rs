use serde::{Deserialize, Serialize};

/// How ratings of one group are reduced to a single value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Reduce {
    #[default]
    Mean,
    Sum,
}

/// One bar worth of data: a label and its reduced rating.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AggregatePair {
    pub label: String,
    pub value: f64,
    /// Ratings that contributed to `value`.
    pub samples: usize,
    /// Ratings skipped because they were missing or not numeric.
    pub excluded: usize,
}

impl AggregatePair {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
            samples: 1,
            excluded: 0,
        }
    }

    /// False when every rating of the group was excluded.
    pub fn has_value(&self) -> bool {
        self.samples > 0
    }

    pub fn is_partial(&self) -> bool {
        self.excluded > 0
    }
}

/// A sequence of pairs produced by one grouping query.
///
/// Grouping gives no ordering guarantee; call [`Aggregate::sorted`] before
/// binding to a band scale.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Aggregate {
    pub reduce: Reduce,
    pub pairs: Vec<AggregatePair>,
}

impl Aggregate {
    pub fn new(reduce: Reduce, pairs: Vec<AggregatePair>) -> Self {
        Self { reduce, pairs }
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn get(&self, label: &str) -> Option<&AggregatePair> {
        self.pairs.iter().find(|p| p.label == label)
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.pairs.iter().map(|p| p.label.as_str())
    }

    /// Ascending lexicographic order on the label.
    pub fn sort_by_label(&mut self) {
        self.pairs.sort_by(|a, b| a.label.cmp(&b.label));
    }

    pub fn sorted(mut self) -> Self {
        self.sort_by_label();
        self
    }

    /// Upper bound of the value scale. An empty aggregate yields 0.
    pub fn max_value(&self) -> f64 {
        self.pairs
            .iter()
            .map(|p| p.value)
            .filter(|v| v.is_finite())
            .fold(None, |acc: Option<f64>, v| Some(acc.map_or(v, |m| m.max(v))))
            .unwrap_or(0.0)
    }

    /// Order independent comparison of two aggregates.
    pub fn same_pairs(&self, other: &Aggregate) -> bool {
        if self.reduce != other.reduce || self.len() != other.len() {
            return false;
        }
        self.pairs
            .iter()
            .all(|p| other.get(&p.label).is_some_and(|o| o == p))
    }
}
