//! Grouping queries over the episode log.
//!
//! Ratings that are missing or not numeric never take part in a mean or a
//! sum. They are counted in [`AggregatePair::excluded`] so callers can tell a
//! partial group from a complete one.

use crate::data_types::{Aggregate, AggregatePair, Episode, Numeric, Reduce};
use std::collections::HashMap;

#[derive(Default)]
struct RatingAccumulator {
    sum: f64,
    samples: usize,
    excluded: usize,
}

impl RatingAccumulator {
    fn push(&mut self, rating: &Numeric) {
        match rating.value() {
            Some(v) => {
                self.sum += v;
                self.samples += 1;
            }
            None => self.excluded += 1,
        }
    }

    fn finish(self, label: String, reduce: Reduce) -> AggregatePair {
        let value = match reduce {
            Reduce::Sum => self.sum,
            Reduce::Mean if self.samples > 0 => self.sum / self.samples as f64,
            // No usable rating: keep the bar, at zero height.
            Reduce::Mean => 0.0,
        };
        AggregatePair {
            label,
            value,
            samples: self.samples,
            excluded: self.excluded,
        }
    }
}

/// Groups `rows` by `key` and reduces the Rotten Tomatoes rating of each group.
pub fn group_ratings<'a, I, K>(rows: I, key: K, reduce: Reduce) -> Aggregate
where
    I: IntoIterator<Item = &'a Episode>,
    K: Fn(&Episode) -> &str,
{
    let mut groups: HashMap<String, RatingAccumulator> = HashMap::new();
    for row in rows {
        groups
            .entry(key(row).to_string())
            .or_default()
            .push(&row.rotten_tomatoes_pct);
    }

    let pairs = groups
        .into_iter()
        .map(|(label, acc)| acc.finish(label, reduce))
        .collect();
    Aggregate::new(reduce, pairs)
}

/// Mean Rotten Tomatoes rating per director (exact, case-sensitive match).
pub fn aggregate_by_director(rows: &[Episode]) -> Aggregate {
    group_ratings(rows, |e| e.director.as_str(), Reduce::Mean)
}

/// Summed Rotten Tomatoes rating per episode title, for one director.
pub fn aggregate_by_episode_for_director(rows: &[Episode], director: &str) -> Aggregate {
    aggregate_by_episode_for_director_with(rows, director, Reduce::Sum)
}

/// Same as [`aggregate_by_episode_for_director`] with an explicit reduction.
pub fn aggregate_by_episode_for_director_with(
    rows: &[Episode],
    director: &str,
    reduce: Reduce,
) -> Aggregate {
    group_ratings(
        rows.iter().filter(|e| e.director == director),
        |e| e.title.as_str(),
        reduce,
    )
}
