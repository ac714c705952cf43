use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Column headers of the episode log, exactly as they appear in the file.
pub mod columns {
    pub const SEASON: &str = "Season";
    pub const EPISODE_IN_SEASON: &str = "No. of Episode (Season)";
    pub const EPISODE_OVERALL: &str = "No. of Episode (Overall)";
    pub const TITLE: &str = "Title of the Episode";
    pub const RUNNING_TIME: &str = "Running Time (Minutes)";
    pub const DIRECTOR: &str = "Directed by";
    pub const WRITERS: &str = "Written by";
    pub const AIR_DATE: &str = "Original Air Date";
    pub const US_VIEWERS: &str = "U.S. Viewers (Millions)";
    pub const MUSIC: &str = "Music by";
    pub const CINEMATOGRAPHY: &str = "Cinematography by";
    pub const EDITING: &str = "Editing by";
    pub const IMDB_RATING: &str = "IMDb Rating";
    pub const ROTTEN_TOMATOES: &str = "Rotten Tomatoes Rating (Percentage)";
    pub const METACRITIC: &str = "Metacritic Ratings";
    pub const ORDERED: &str = "Ordered";
    pub const FILMING_DURATION: &str = "Filming Duration";
    pub const NOVELS_ADAPTED: &str = "Novel(s) Adapted";
    pub const SYNOPSIS: &str = "Synopsis";

    pub const ALL: [&str; 19] = [
        SEASON,
        EPISODE_IN_SEASON,
        EPISODE_OVERALL,
        TITLE,
        RUNNING_TIME,
        DIRECTOR,
        WRITERS,
        AIR_DATE,
        US_VIEWERS,
        MUSIC,
        CINEMATOGRAPHY,
        EDITING,
        IMDB_RATING,
        ROTTEN_TOMATOES,
        METACRITIC,
        ORDERED,
        FILMING_DURATION,
        NOVELS_ADAPTED,
        SYNOPSIS,
    ];

    /// Columns the aggregations cannot do without.
    pub const REQUIRED: [&str; 3] = [DIRECTOR, TITLE, ROTTEN_TOMATOES];
}

/// Result of coercing one raw cell to a number.
#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
pub enum Numeric {
    Value(f64),
    /// Empty or blank cell.
    #[default]
    Missing,
    /// Text that is not a finite number. Keeps the raw cell for diagnostics.
    Invalid(String),
}

impl Numeric {
    /// Permissive coercion: trims whitespace, never fails.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Self::Missing;
        }
        match trimmed.parse::<f64>() {
            Ok(v) if v.is_finite() => Self::Value(v),
            _ => Self::Invalid(raw.to_string()),
        }
    }

    pub fn value(&self) -> Option<f64> {
        match self {
            Self::Value(v) => Some(*v),
            _ => None,
        }
    }

    pub fn is_invalid(&self) -> bool {
        matches!(self, Self::Invalid(_))
    }
}

impl From<f64> for Numeric {
    fn from(value: f64) -> Self {
        if value.is_finite() {
            Self::Value(value)
        } else {
            Self::Invalid(value.to_string())
        }
    }
}

/// One row of the episode log after typing. Never mutated once loaded.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Episode {
    pub season: Numeric,
    pub episode_in_season: Numeric,
    pub episode_overall: Numeric,
    pub title: String,
    pub running_time_minutes: Numeric,
    pub director: String,
    pub writers: String,
    pub air_date: String,
    pub us_viewers_millions: Numeric,
    pub music: String,
    pub cinematography: String,
    pub editing: String,
    pub imdb_rating: Numeric,
    pub rotten_tomatoes_pct: Numeric,
    pub metacritic: Numeric,
    pub ordered: String,
    pub filming_duration: String,
    pub novels_adapted: String,
    pub synopsis: String,
}

impl Episode {
    /// Types a raw row given a cell lookup. Absent columns read as "".
    pub fn from_lookup<'a, F>(get: F) -> Self
    where
        F: Fn(&str) -> Option<&'a str>,
    {
        let text = |name: &str| get(name).unwrap_or_default().to_string();
        let number = |name: &str| Numeric::parse(get(name).unwrap_or_default());

        Self {
            season: number(columns::SEASON),
            episode_in_season: number(columns::EPISODE_IN_SEASON),
            episode_overall: number(columns::EPISODE_OVERALL),
            title: text(columns::TITLE),
            running_time_minutes: number(columns::RUNNING_TIME),
            director: text(columns::DIRECTOR),
            writers: text(columns::WRITERS),
            air_date: text(columns::AIR_DATE),
            us_viewers_millions: number(columns::US_VIEWERS),
            music: text(columns::MUSIC),
            cinematography: text(columns::CINEMATOGRAPHY),
            editing: text(columns::EDITING),
            imdb_rating: number(columns::IMDB_RATING),
            rotten_tomatoes_pct: number(columns::ROTTEN_TOMATOES),
            metacritic: number(columns::METACRITIC),
            ordered: text(columns::ORDERED),
            filming_duration: text(columns::FILMING_DURATION),
            novels_adapted: text(columns::NOVELS_ADAPTED),
            synopsis: text(columns::SYNOPSIS),
        }
    }

    pub fn from_raw(row: &HashMap<String, String>) -> Self {
        Self::from_lookup(|name| row.get(name).map(String::as_str))
    }

    /// Convenience constructor used by tests and demos.
    pub fn rated(director: &str, title: &str, rotten_tomatoes_pct: f64) -> Self {
        Self {
            director: director.to_string(),
            title: title.to_string(),
            rotten_tomatoes_pct: rotten_tomatoes_pct.into(),
            ..Default::default()
        }
    }

    /// `(column, raw)` for every numeric cell that failed coercion.
    pub fn malformed_fields(&self) -> Vec<(&'static str, &str)> {
        let numeric = [
            (columns::SEASON, &self.season),
            (columns::EPISODE_IN_SEASON, &self.episode_in_season),
            (columns::EPISODE_OVERALL, &self.episode_overall),
            (columns::RUNNING_TIME, &self.running_time_minutes),
            (columns::US_VIEWERS, &self.us_viewers_millions),
            (columns::IMDB_RATING, &self.imdb_rating),
            (columns::ROTTEN_TOMATOES, &self.rotten_tomatoes_pct),
            (columns::METACRITIC, &self.metacritic),
        ];
        numeric
            .into_iter()
            .filter_map(|(name, value)| match value {
                Numeric::Invalid(raw) => Some((name, raw.as_str())),
                _ => None,
            })
            .collect()
    }

    /// Parses the air date text, e.g. "April 17, 2011" or "2011-04-17".
    pub fn air_date(&self) -> Option<NaiveDate> {
        const FORMATS: [&str; 3] = ["%B %d, %Y", "%Y-%m-%d", "%d-%b-%y"];
        let text = self.air_date.trim();
        FORMATS
            .iter()
            .find_map(|fmt| NaiveDate::parse_from_str(text, fmt).ok())
    }
}
