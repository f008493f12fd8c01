//! Multivariate, optionally stochastic time series.

use std::collections::HashSet;
use std::ops::Range;

use crate::error::{Result, SeriesError};

/// An ordered, timestamp-indexed sequence of numeric vectors.
///
/// Values are stored in a flat buffer laid out as `[time][component][sample]`.
/// A deterministic series has exactly one sample per cell; a stochastic
/// series carries several draws from a predictive distribution.
///
/// A `TimeSeries` is never empty and its time index is strictly increasing.
/// Missing observations are represented as `NaN`.
///
/// # Example
///
/// ```rust
/// use series_spi::TimeSeries;
///
/// let series = TimeSeries::from_times_and_values(vec![0, 60, 120], vec![1.0, 2.0, 3.0]).unwrap();
/// assert_eq!(series.len(), 3);
/// assert_eq!(series.time_step(), 60);
/// assert_eq!(series.value(1, 0), Some(2.0));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TimeSeries {
    times: Vec<i64>,
    components: Vec<String>,
    n_samples: usize,
    values: Vec<f64>,
}

impl TimeSeries {
    /// Build a series from a flat `[time][component][sample]` buffer.
    pub fn with_samples(
        times: Vec<i64>,
        components: Vec<String>,
        n_samples: usize,
        values: Vec<f64>,
    ) -> Result<Self> {
        if times.is_empty() {
            return Err(SeriesError::Empty("no time steps".to_string()));
        }
        if components.is_empty() {
            return Err(SeriesError::Empty("no components".to_string()));
        }
        if n_samples == 0 {
            return Err(SeriesError::InvalidParameter {
                name: "n_samples".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }
        if let Some(position) = times.windows(2).position(|w| w[1] <= w[0]) {
            return Err(SeriesError::NonMonotonicIndex {
                position: position + 1,
            });
        }

        let mut seen = HashSet::with_capacity(components.len());
        for name in &components {
            if !seen.insert(name.as_str()) {
                return Err(SeriesError::DuplicateComponent(name.clone()));
            }
        }

        let expected = times.len() * components.len() * n_samples;
        if values.len() != expected {
            return Err(SeriesError::ShapeMismatch {
                expected,
                got: values.len(),
            });
        }

        Ok(Self {
            times,
            components,
            n_samples,
            values,
        })
    }

    /// Build a deterministic series from one row of component values per time step.
    pub fn new(times: Vec<i64>, components: Vec<String>, rows: Vec<Vec<f64>>) -> Result<Self> {
        if rows.len() != times.len() {
            return Err(SeriesError::ShapeMismatch {
                expected: times.len(),
                got: rows.len(),
            });
        }

        let width = components.len();
        let mut values = Vec::with_capacity(times.len() * width);
        for row in rows {
            if row.len() != width {
                return Err(SeriesError::ShapeMismatch {
                    expected: width,
                    got: row.len(),
                });
            }
            values.extend(row);
        }

        Self::with_samples(times, components, 1, values)
    }

    /// Build a deterministic series from one value vector per component.
    pub fn from_columns(
        times: Vec<i64>,
        components: Vec<String>,
        columns: Vec<Vec<f64>>,
    ) -> Result<Self> {
        if columns.len() != components.len() {
            return Err(SeriesError::ShapeMismatch {
                expected: components.len(),
                got: columns.len(),
            });
        }
        if let Some(column) = columns.iter().find(|c| c.len() != times.len()) {
            return Err(SeriesError::ShapeMismatch {
                expected: times.len(),
                got: column.len(),
            });
        }

        let mut values = Vec::with_capacity(times.len() * columns.len());
        for t in 0..times.len() {
            values.extend(columns.iter().map(|column| column[t]));
        }

        Self::with_samples(times, components, 1, values)
    }

    /// Build a univariate series with component name `"0"`.
    pub fn from_times_and_values(times: Vec<i64>, values: Vec<f64>) -> Result<Self> {
        Self::with_samples(times, vec!["0".to_string()], 1, values)
    }

    /// Build a univariate series over the range index `0..n`.
    pub fn from_values(values: Vec<f64>) -> Result<Self> {
        let times = (0..values.len() as i64).collect();
        Self::from_times_and_values(times, values)
    }

    pub fn len(&self) -> usize {
        self.times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    pub fn n_components(&self) -> usize {
        self.components.len()
    }

    pub fn n_samples(&self) -> usize {
        self.n_samples
    }

    /// `(time steps, components, samples)`
    pub fn shape(&self) -> (usize, usize, usize) {
        (self.len(), self.n_components(), self.n_samples)
    }

    pub fn times(&self) -> &[i64] {
        &self.times
    }

    pub fn components(&self) -> &[String] {
        &self.components
    }

    /// Raw `[time][component][sample]` buffer.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn is_deterministic(&self) -> bool {
        self.n_samples == 1
    }

    fn offset(&self, t: usize, c: usize, s: usize) -> usize {
        (t * self.n_components() + c) * self.n_samples + s
    }

    pub fn sample(&self, t: usize, c: usize, s: usize) -> Option<f64> {
        if t < self.len() && c < self.n_components() && s < self.n_samples {
            Some(self.values[self.offset(t, c, s)])
        } else {
            None
        }
    }

    /// First sample at time step `t` for component `c`.
    pub fn value(&self, t: usize, c: usize) -> Option<f64> {
        self.sample(t, c, 0)
    }

    /// First-sample values of component `c` over the whole index.
    pub fn component_values(&self, c: usize) -> Option<Vec<f64>> {
        if c >= self.n_components() {
            return None;
        }
        Some(
            (0..self.len())
                .map(|t| self.values[self.offset(t, c, 0)])
                .collect(),
        )
    }

    /// First-sample values of every component, one vector per component.
    pub fn columns(&self) -> Vec<Vec<f64>> {
        (0..self.n_components())
            .filter_map(|c| self.component_values(c))
            .collect()
    }

    pub fn component_index(&self, name: &str) -> Result<usize> {
        self.components
            .iter()
            .position(|c| c == name)
            .ok_or_else(|| SeriesError::UnknownComponent(name.to_string()))
    }

    /// Extract a single component by name as a univariate series.
    pub fn component(&self, name: &str) -> Result<TimeSeries> {
        let index = self.component_index(name)?;
        self.component_at(index)
    }

    /// Extract a single component by position as a univariate series.
    pub fn component_at(&self, index: usize) -> Result<TimeSeries> {
        if index >= self.n_components() {
            return Err(SeriesError::UnknownComponent(format!("#{}", index)));
        }

        let mut values = Vec::with_capacity(self.len() * self.n_samples);
        for t in 0..self.len() {
            let start = self.offset(t, index, 0);
            values.extend_from_slice(&self.values[start..start + self.n_samples]);
        }

        Ok(Self {
            times: self.times.clone(),
            components: vec![self.components[index].clone()],
            n_samples: self.n_samples,
            values,
        })
    }

    /// Replace the component names, keeping the data untouched.
    pub fn with_components(self, components: Vec<String>) -> Result<Self> {
        if components.len() != self.n_components() {
            return Err(SeriesError::ShapeMismatch {
                expected: self.n_components(),
                got: components.len(),
            });
        }
        Self::with_samples(self.times, components, self.n_samples, self.values)
    }

    /// Move the data onto another time index of the same length.
    pub fn with_times(self, times: Vec<i64>) -> Result<Self> {
        if times.len() != self.len() {
            return Err(SeriesError::ShapeMismatch {
                expected: self.len(),
                got: times.len(),
            });
        }
        Self::with_samples(times, self.components, self.n_samples, self.values)
    }

    /// Join the components of several series sharing one time index.
    pub fn stack(parts: &[TimeSeries]) -> Result<TimeSeries> {
        let first = parts
            .first()
            .ok_or_else(|| SeriesError::Empty("nothing to stack".to_string()))?;

        for part in &parts[1..] {
            if part.times != first.times {
                return Err(SeriesError::Misaligned(
                    "stacked series must share a time index".to_string(),
                ));
            }
            if part.n_samples != first.n_samples {
                return Err(SeriesError::Misaligned(format!(
                    "sample count {} vs {}",
                    first.n_samples, part.n_samples
                )));
            }
        }

        let components: Vec<String> = parts
            .iter()
            .flat_map(|p| p.components.iter().cloned())
            .collect();

        let width: usize = parts.iter().map(|p| p.n_components() * p.n_samples).sum();
        let mut values = Vec::with_capacity(first.len() * width);
        for t in 0..first.len() {
            for part in parts {
                let row = part.n_components() * part.n_samples;
                values.extend_from_slice(&part.values[t * row..(t + 1) * row]);
            }
        }

        Self::with_samples(first.times.clone(), components, first.n_samples, values)
    }

    /// Fail unless both series share the time index and component count.
    pub fn check_aligned(&self, other: &TimeSeries) -> Result<()> {
        if self.len() != other.len() {
            return Err(SeriesError::Misaligned(format!(
                "length {} vs {}",
                self.len(),
                other.len()
            )));
        }
        if let Some(i) = self
            .times
            .iter()
            .zip(&other.times)
            .position(|(a, b)| a != b)
        {
            return Err(SeriesError::Misaligned(format!(
                "time index differs at position {} ({} vs {})",
                i, self.times[i], other.times[i]
            )));
        }
        if self.n_components() != other.n_components() {
            return Err(SeriesError::Misaligned(format!(
                "component count {} vs {}",
                self.n_components(),
                other.n_components()
            )));
        }
        Ok(())
    }

    /// Combine two aligned series elementwise.
    ///
    /// The result keeps the time index and component names of `self`.
    pub fn zip_with<F>(&self, other: &TimeSeries, f: F) -> Result<TimeSeries>
    where
        F: Fn(f64, f64) -> f64,
    {
        self.check_aligned(other)?;
        if self.n_samples != other.n_samples {
            return Err(SeriesError::Misaligned(format!(
                "sample count {} vs {}",
                self.n_samples, other.n_samples
            )));
        }

        let values = self
            .values
            .iter()
            .zip(&other.values)
            .map(|(&a, &b)| f(a, b))
            .collect();

        Ok(Self {
            times: self.times.clone(),
            components: self.components.clone(),
            n_samples: self.n_samples,
            values,
        })
    }

    /// Elementwise `self - other`.
    pub fn checked_sub(&self, other: &TimeSeries) -> Result<TimeSeries> {
        self.zip_with(other, |a, b| a - b)
    }

    /// Apply `f` to every value.
    pub fn map<F>(&self, f: F) -> TimeSeries
    where
        F: Fn(f64) -> f64,
    {
        Self {
            times: self.times.clone(),
            components: self.components.clone(),
            n_samples: self.n_samples,
            values: self.values.iter().map(|&v| f(v)).collect(),
        }
    }

    /// Reduce a stochastic series to its per-cell sample mean.
    pub fn mean_over_samples(&self) -> TimeSeries {
        if self.is_deterministic() {
            return self.clone();
        }

        let n = self.n_samples as f64;
        let values = self
            .values
            .chunks(self.n_samples)
            .map(|cell| cell.iter().sum::<f64>() / n)
            .collect();

        Self {
            times: self.times.clone(),
            components: self.components.clone(),
            n_samples: 1,
            values,
        }
    }

    /// Sub-series over the time steps in `range`.
    pub fn slice(&self, range: Range<usize>) -> Result<TimeSeries> {
        if range.start >= range.end || range.end > self.len() {
            return Err(SeriesError::InvalidParameter {
                name: "range".to_string(),
                reason: format!(
                    "{}..{} is empty or outside 0..{}",
                    range.start,
                    range.end,
                    self.len()
                ),
            });
        }

        let row = self.n_components() * self.n_samples;
        Ok(Self {
            times: self.times[range.clone()].to_vec(),
            components: self.components.clone(),
            n_samples: self.n_samples,
            values: self.values[range.start * row..range.end * row].to_vec(),
        })
    }

    /// Spacing between the first two time steps (1 for a single-step series).
    pub fn time_step(&self) -> i64 {
        match self.times.as_slice() {
            [first, second, ..] => second - first,
            _ => 1,
        }
    }

    /// Time index continuing this series by `horizon` steps.
    pub fn future_times(&self, horizon: usize) -> Vec<i64> {
        let step = self.time_step();
        let last = self.times[self.times.len() - 1];
        (1..=horizon as i64).map(|i| last + step * i).collect()
    }
}
