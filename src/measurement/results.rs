// src/measurement/results.rs
use crate::core::StateVector;
use std::collections::BTreeMap;
use std::fmt;

/// Outcome of a single collapsing measurement.
#[derive(Debug, Clone, PartialEq)]
pub struct MeasurementOutcome {
    index: usize,
    label: String,
    probability: f64,
    collapsed: StateVector,
}

impl MeasurementOutcome {
    pub(crate) fn new(index: usize, label: String, probability: f64, collapsed: StateVector) -> Self {
        Self { index, label, probability, collapsed }
    }

    /// Basis index that was measured.
    pub fn index(&self) -> usize {
        self.index
    }

    /// MSB-first label of the measured basis state.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Probability the measured outcome had before collapse.
    pub fn probability(&self) -> f64 {
        self.probability
    }

    /// The post-measurement basis state.
    pub fn collapsed(&self) -> &StateVector {
        &self.collapsed
    }

    /// Splits into `(label, collapsed state)`.
    pub fn into_parts(self) -> (String, StateVector) {
        (self.label, self.collapsed)
    }
}

impl fmt::Display for MeasurementOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Measured |{}⟩ (p = {:.4})", self.label, self.probability)
    }
}

/// Histogram of repeated measurement shots.
///
/// Only labels observed at least once are stored, and the counts always sum
/// to `shots`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleCounts {
    /// Maps observed basis labels to their occurrence count.
    counts: BTreeMap<String, u64>,
    shots: u64,
}

impl SampleCounts {
    /// Creates a new, empty histogram. (Internal visibility)
    pub(crate) fn new() -> Self {
        Self { counts: BTreeMap::new(), shots: 0 }
    }

    /// Records one shot. (Internal visibility)
    pub(crate) fn record(&mut self, label: String) {
        *self.counts.entry(label).or_insert(0) += 1;
        self.shots += 1;
    }

    /// Count for `label`; zero if it never occurred.
    pub fn get(&self, label: &str) -> u64 {
        self.counts.get(label).copied().unwrap_or(0)
    }

    /// Total number of shots recorded.
    pub fn shots(&self) -> u64 {
        self.shots
    }

    /// Number of distinct labels observed.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// True when no shots were recorded.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Iterates `(label, count)` in label order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(label, &count)| (label.as_str(), count))
    }

    /// The label observed most often; ties go to the smaller label.
    pub fn most_frequent(&self) -> Option<(&str, u64)> {
        self.iter().fold(None, |best, (label, count)| match best {
            Some((_, best_count)) if best_count >= count => best,
            _ => Some((label, count)),
        })
    }

    /// Relative frequency of each observed label (`count / shots`).
    pub fn frequencies(&self) -> BTreeMap<String, f64> {
        self.counts
            .iter()
            .map(|(label, &count)| (label.clone(), count as f64 / self.shots as f64))
            .collect()
    }

    /// Returns a reference to the map containing all recorded counts.
    pub fn as_map(&self) -> &BTreeMap<String, u64> {
        &self.counts
    }

    /// Consumes the histogram, returning the label-to-count map.
    pub fn into_map(self) -> BTreeMap<String, u64> {
        self.counts
    }
}

impl fmt::Display for SampleCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Sample Counts ({} shots):", self.shots)?;
        if self.counts.is_empty() {
            writeln!(f, "  No shots were taken.")?;
        } else {
            for (label, count) in self.iter() {
                writeln!(f, "  {}: {}", label, count)?;
            }
        }
        Ok(())
    }
}
