use serde::{Deserialize, Serialize};

/// Per-(parameter, commodity) rollup of numeric observations.
///
/// `min` and `max` track unsafe observations only and stay `None` until the
/// first one arrives. `unsafe_count` never exceeds `total`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregateRecord {
    pub parameter: String,
    pub commodity: String,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub total: usize,
    pub unsafe_count: usize,
}

impl AggregateRecord {
    pub fn new(parameter: impl Into<String>, commodity: impl Into<String>) -> Self {
        Self {
            parameter: parameter.into(),
            commodity: commodity.into(),
            min: None,
            max: None,
            total: 0,
            unsafe_count: 0,
        }
    }

    /// Records one numeric observation.
    pub fn observe(&mut self, value: f64, is_unsafe: bool) {
        self.total += 1;
        if !is_unsafe {
            return;
        }
        self.unsafe_count += 1;
        self.min = Some(self.min.map_or(value, |current| current.min(value)));
        self.max = Some(self.max.map_or(value, |current| current.max(value)));
    }

    /// Share of unsafe observations in percent; 0 when nothing was observed.
    pub fn percent_unsafe(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.unsafe_count as f64 / self.total as f64 * 100.0
        }
    }

    pub fn has_residue(&self) -> bool {
        self.unsafe_count > 0
    }
}
