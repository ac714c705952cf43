use d3rs::scale::{LinearScale, Scale as D3Scale};

/// Linear value scale. A degenerate domain collapses every value onto the
/// start of the range instead of dividing by zero.
#[derive(Clone)]
pub enum ChartScale {
    Linear(LinearScale),
    Degenerate { domain: (f64, f64), range: (f32, f32) },
}

impl ChartScale {
    pub fn new_linear(domain: (f64, f64), range: (f32, f32)) -> Self {
        let (d_min, d_max) = domain;
        if !d_min.is_finite() || !d_max.is_finite() || (d_max - d_min).abs() < f64::EPSILON {
            return Self::Degenerate { domain, range };
        }
        let scale = LinearScale::new()
            .domain(d_min, d_max)
            .range(range.0 as f64, range.1 as f64);
        Self::Linear(scale)
    }

    /// `[0, max]` mapped onto `[height, 0]`, larger values nearer the top.
    pub fn value_axis(max: f64, plot_height: f32) -> Self {
        Self::new_linear((0.0, max), (plot_height, 0.0))
    }

    pub fn map(&self, value: f64) -> f32 {
        let res = match self {
            Self::Linear(s) => s.scale(value) as f32,
            Self::Degenerate { range, .. } => range.0,
        };
        if res.is_nan() || res.is_infinite() {
            0.0
        } else {
            res
        }
    }

    pub fn domain(&self) -> (f64, f64) {
        match self {
            Self::Linear(s) => (s.domain().0, s.domain().1),
            Self::Degenerate { domain, .. } => *domain,
        }
    }

    pub fn range(&self) -> (f32, f32) {
        match self {
            Self::Linear(s) => (s.range().0 as f32, s.range().1 as f32),
            Self::Degenerate { range, .. } => *range,
        }
    }

    pub fn ticks(&self, count: usize) -> Vec<f64> {
        match self {
            Self::Linear(s) => s.ticks(count),
            Self::Degenerate { domain, .. } => vec![domain.0],
        }
    }

    pub fn format_tick(&self, value: f64) -> String {
        if value.fract().abs() < f64::EPSILON {
            format!("{:.0}", value)
        } else {
            format!("{}", value)
        }
    }
}

/// Categorical scale: each label gets an equal-width band.
///
/// Follows d3's `scaleBand().padding(p)`: inner and outer padding are both
/// `p`, and the bands are centered in the range.
#[derive(Clone, Debug, PartialEq)]
pub struct BandScale {
    labels: Vec<String>,
    range: (f32, f32),
    padding: f32,
    step: f32,
    bandwidth: f32,
    start: f32,
}

impl BandScale {
    pub fn new(labels: Vec<String>, range: (f32, f32), padding: f32) -> Self {
        let padding = padding.clamp(0.0, 1.0);
        let n = labels.len() as f32;
        let (r0, r1) = range;
        let span = r1 - r0;
        let step = span / (n - padding + padding * 2.0).max(1.0);
        let start = r0 + (span - step * (n - padding)) * 0.5;
        Self {
            labels,
            range,
            padding,
            step,
            bandwidth: step * (1.0 - padding),
            start,
        }
    }

    /// Left edge of the band for `label`.
    pub fn map(&self, label: &str) -> Option<f32> {
        self.index_of(label)
            .map(|i| self.start + self.step * i as f32)
    }

    pub fn index_of(&self, label: &str) -> Option<usize> {
        self.labels.iter().position(|l| l == label)
    }

    pub fn bandwidth(&self) -> f32 {
        self.bandwidth
    }

    pub fn step(&self) -> f32 {
        self.step
    }

    pub fn padding(&self) -> f32 {
        self.padding
    }

    pub fn range(&self) -> (f32, f32) {
        self.range
    }

    pub fn domain(&self) -> &[String] {
        &self.labels
    }

    /// Center of the band, where the axis tick sits.
    pub fn center(&self, label: &str) -> Option<f32> {
        self.map(label).map(|x| x + self.bandwidth / 2.0)
    }
}
