//! CSV reading and writing.

use std::fs::File;
use std::io::{BufReader, Read, Write};
use std::path::Path;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use series_spi::{Result, SeriesError, TimeSeries};
use tracing::debug;

/// Column selection for [`read_csv`].
#[derive(Debug, Clone, Default)]
pub struct CsvOptions {
    /// Column holding timestamps. Without one the rows get a range index.
    pub time_column: Option<String>,
    /// Value columns to keep. Defaults to every non-time column.
    pub columns: Option<Vec<String>>,
}

impl CsvOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn time_column(mut self, name: impl Into<String>) -> Self {
        self.time_column = Some(name.into());
        self
    }

    pub fn columns<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.columns = Some(names.into_iter().map(Into::into).collect());
        self
    }
}

fn csv_error(error: csv::Error) -> SeriesError {
    if error.is_io_error() {
        SeriesError::Io(error.to_string())
    } else {
        SeriesError::Parse(error.to_string())
    }
}

/// Load a time series from a CSV file with a header row.
pub fn read_csv<P: AsRef<Path>>(path: P, options: &CsvOptions) -> Result<TimeSeries> {
    let path = path.as_ref();
    let file = File::open(path)
        .map_err(|e| SeriesError::Io(format!("failed to open {}: {}", path.display(), e)))?;
    read_csv_from_reader(BufReader::new(file), options)
}

/// Load a time series from any CSV source with a header row.
///
/// Empty cells and `NaN`/`NA` markers become `NaN`.
pub fn read_csv_from_reader<R: Read>(reader: R, options: &CsvOptions) -> Result<TimeSeries> {
    let mut reader = csv::Reader::from_reader(reader);
    let headers = reader.headers().map_err(csv_error)?.clone();

    let find = |name: &str| -> Result<usize> {
        headers
            .iter()
            .position(|h| h.trim() == name)
            .ok_or_else(|| SeriesError::UnknownComponent(name.to_string()))
    };

    let time_index = options.time_column.as_deref().map(find).transpose()?;
    let value_indices: Vec<usize> = match &options.columns {
        Some(columns) => columns
            .iter()
            .map(|c| find(c))
            .collect::<Result<Vec<_>>>()?,
        None => (0..headers.len())
            .filter(|&i| Some(i) != time_index)
            .collect(),
    };
    if value_indices.is_empty() {
        return Err(SeriesError::Empty("no value columns".to_string()));
    }

    let components: Vec<String> = value_indices
        .iter()
        .map(|&i| headers[i].trim().to_string())
        .collect();

    let mut times = Vec::new();
    let mut rows = Vec::new();
    for (line, record) in reader.records().enumerate() {
        let record = record.map_err(csv_error)?;

        let time = match time_index {
            Some(i) => parse_time(record.get(i).unwrap_or_default())?,
            None => line as i64,
        };
        let row = value_indices
            .iter()
            .map(|&i| parse_value(record.get(i).unwrap_or_default()))
            .collect::<Result<Vec<_>>>()?;

        times.push(time);
        rows.push(row);
    }

    debug!(
        rows = times.len(),
        components = components.len(),
        "read csv series"
    );
    TimeSeries::new(times, components, rows)
}

fn parse_value(raw: &str) -> Result<f64> {
    let value = raw.trim();
    if value.is_empty() || value.eq_ignore_ascii_case("nan") || value.eq_ignore_ascii_case("na") {
        return Ok(f64::NAN);
    }
    value
        .parse::<f64>()
        .map_err(|_| SeriesError::Parse(format!("invalid number '{}'", value)))
}

/// Parse a timestamp cell into unix seconds.
///
/// Accepts plain integers, RFC 3339, `%Y-%m-%d %H:%M:%S`, `%Y-%m-%dT%H:%M:%S`,
/// `%Y-%m-%d %H:%M` and `%Y-%m-%d`. Naive timestamps are read as UTC.
pub fn parse_time(raw: &str) -> Result<i64> {
    let value = raw.trim();

    if let Ok(step) = value.parse::<i64>() {
        return Ok(step);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Ok(dt.timestamp());
    }
    for format in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, format) {
            return Ok(dt.and_utc().timestamp());
        }
    }
    if let Some(dt) = NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
    {
        return Ok(dt.and_utc().timestamp());
    }

    Err(SeriesError::Parse(format!("unrecognised timestamp '{}'", value)))
}

/// Write a series as CSV with a leading time column.
///
/// Stochastic series get one column per sample, named `<component>_s<j>`.
/// `NaN` is written as an empty cell.
pub fn write_csv<W: Write>(series: &TimeSeries, writer: W, time_header: &str) -> Result<()> {
    let mut writer = csv::Writer::from_writer(writer);

    let mut header = vec![time_header.to_string()];
    for component in series.components() {
        if series.is_deterministic() {
            header.push(component.clone());
        } else {
            header.extend((0..series.n_samples()).map(|s| format!("{}_s{}", component, s)));
        }
    }
    writer.write_record(&header).map_err(csv_error)?;

    for (t, time) in series.times().iter().enumerate() {
        let mut record = vec![time.to_string()];
        for c in 0..series.n_components() {
            for s in 0..series.n_samples() {
                let cell = match series.sample(t, c, s) {
                    Some(v) if !v.is_nan() => v.to_string(),
                    _ => String::new(),
                };
                record.push(cell);
            }
        }
        writer.write_record(&record).map_err(csv_error)?;
    }

    writer.flush().map_err(|e| SeriesError::Io(e.to_string()))
}
