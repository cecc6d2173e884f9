/// Number of bins used for the temperature histogram.
pub const HISTOGRAM_BINS: usize = 12;

/// Equal-width histogram over the range of the binned values.
///
/// Every bin is half-open `[left, right)` except the last one, which also
/// holds values equal to the upper edge.
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    edges: Vec<f64>,
    counts: Vec<usize>,
}

impl Histogram {
    /// Bins `values` into `bins` buckets spanning `[min, max]`.
    ///
    /// A single distinct value is centred in the range `[v - 0.5, v + 0.5]`;
    /// no values at all yields empty buckets over `[0, 1]`. Non-finite values
    /// are ignored.
    pub fn from_values(values: &[f64], bins: usize) -> Self {
        let bins = bins.max(1);
        let finite: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();

        let (mut lower, mut upper) = finite
            .iter()
            .fold(None, |range: Option<(f64, f64)>, &value| match range {
                Some((lo, hi)) => Some((lo.min(value), hi.max(value))),
                None => Some((value, value)),
            })
            .unwrap_or((0.0, 1.0));
        if lower == upper {
            lower -= 0.5;
            upper += 0.5;
        }

        let width = (upper - lower) / bins as f64;
        let mut edges: Vec<f64> = (0..=bins).map(|i| lower + width * i as f64).collect();
        edges[bins] = upper;

        let mut counts = vec![0; bins];
        for value in finite {
            let mut index = (((value - lower) / width) as usize).min(bins - 1);
            // Floating point division can land one bucket off near an edge.
            if value < edges[index] && index > 0 {
                index -= 1;
            } else if value >= edges[index + 1] && index + 1 < bins {
                index += 1;
            }
            counts[index] += 1;
        }

        Self { edges, counts }
    }

    /// Bin edges, one more than the number of bins.
    pub fn edges(&self) -> &[f64] {
        &self.edges
    }

    pub fn counts(&self) -> &[usize] {
        &self.counts
    }

    pub fn lower(&self) -> f64 {
        self.edges[0]
    }

    pub fn upper(&self) -> f64 {
        self.edges[self.edges.len() - 1]
    }

    pub fn max_count(&self) -> usize {
        self.counts.iter().copied().max().unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// `(left, right, count)` for each bin.
    pub fn bins(&self) -> impl Iterator<Item = (f64, f64, usize)> + '_ {
        self.edges
            .windows(2)
            .zip(self.counts.iter())
            .map(|(edge, &count)| (edge[0], edge[1], count))
    }
}
