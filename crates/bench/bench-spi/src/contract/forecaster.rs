//! Forecaster trait definition.

use series_spi::TimeSeries;

use crate::error::Result;

/// A model that learns from a series and forecasts its continuation.
///
/// The benchmark driver treats forecasters as opaque: it only fits them on a
/// training series and asks for a prediction of the following steps.
///
/// # Example
///
/// ```rust,ignore
/// use bench_spi::Forecaster;
///
/// fn forecast<F: Forecaster>(model: &mut F, train: &TimeSeries, horizon: usize) -> bench_spi::Result<TimeSeries> {
///     model.fit(train)?;
///     model.predict(horizon)
/// }
/// ```
pub trait Forecaster: Send {
    /// Model name used in reports.
    fn name(&self) -> &str;

    /// Fit the model to a training series.
    fn fit(&mut self, series: &TimeSeries) -> Result<()>;

    /// Forecast `horizon` steps past the end of the training series.
    ///
    /// The returned series continues the training index by its time step and
    /// has the training series' components.
    fn predict(&self, horizon: usize) -> Result<TimeSeries>;

    /// Check if the model has been fitted.
    fn is_fitted(&self) -> bool;
}
