use std::fs;

use chrono::{Duration, NaiveDate};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::{error::EnvError, types::Data};

/// A time-indexed table of numeric feature columns, one of which is the
/// tradable price. Rows are ordered oldest to newest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceSeries {
    timestamps: Vec<NaiveDate>,
    columns: Vec<(String, Data)>,
    price_column: usize,
}

impl PriceSeries {
    pub fn new(
        timestamps: Vec<NaiveDate>,
        columns: Vec<(String, Data)>,
        price_column: &str,
    ) -> Result<Self, EnvError> {
        if timestamps.is_empty() {
            return Err(EnvError::InvalidConfiguration(
                "price series is empty".to_string(),
            ));
        }

        for window in timestamps.windows(2) {
            if window[1] <= window[0] {
                return Err(EnvError::InvalidConfiguration(format!(
                    "timestamps must be strictly increasing, got {} after {}",
                    window[1], window[0]
                )));
            }
        }

        for (name, values) in columns.iter() {
            if values.len() != timestamps.len() {
                return Err(EnvError::InvalidConfiguration(format!(
                    "column {name} has {} values for {} timestamps",
                    values.len(),
                    timestamps.len()
                )));
            }
        }

        let Some(price_index) = columns
            .iter()
            .position(|(name, _)| name.as_str() == price_column)
        else {
            return Err(EnvError::InvalidConfiguration(format!(
                "price column {price_column} not found"
            )));
        };

        Ok(Self {
            timestamps,
            columns,
            price_column: price_index,
        })
    }

    /// Builds a single-column series named `Close` with synthetic daily dates
    pub fn from_closes(closes: Data) -> Result<Self, EnvError> {
        let start = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
        let timestamps = (0..closes.len())
            .map(|i| start + Duration::days(i as i64))
            .collect();

        Self::new(timestamps, vec![("Close".to_string(), closes)], "Close")
    }

    pub fn len(&self) -> usize {
        self.timestamps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timestamps.is_empty()
    }

    pub fn timestamps(&self) -> &[NaiveDate] {
        &self.timestamps
    }

    pub fn columns(&self) -> impl Iterator<Item = (&str, &Data)> {
        self.columns
            .iter()
            .map(|(name, values)| (name.as_str(), values))
    }

    pub fn prices(&self) -> &Data {
        &self.columns[self.price_column].1
    }

    /// The tradable price at `index`, clamped to the last row when the
    /// cursor has run past the end of the data
    pub fn price_at(&self, index: usize) -> f64 {
        let prices = self.prices();
        prices[index.min(prices.len() - 1)]
    }
}

// Cached series files, postcard-encoded like downloaded bar data

pub fn read_series_file(path: &str) -> Result<PriceSeries, EnvError> {
    let file = fs::read(path)
        .map_err(|err| EnvError::InvalidConfiguration(format!("cannot read {path}: {err}")))?;

    postcard::from_bytes(&file)
        .map_err(|err| EnvError::InvalidConfiguration(format!("cannot decode {path}: {err}")))
}

pub fn write_series_file(path: &str, series: &PriceSeries) -> Result<(), EnvError> {
    let encoded = postcard::to_allocvec(series)
        .map_err(|err| EnvError::InvalidConfiguration(format!("cannot encode series: {err}")))?;

    fs::write(path, encoded.as_slice())
        .map_err(|err| EnvError::InvalidConfiguration(format!("cannot write {path}: {err}")))
}

/// Generate a random-walk close series that tends to drift upward, for
/// demo runs without a data file
pub fn synthetic_closes(days: usize, starting_price: f64) -> Data {
    let mut rng = rand::thread_rng();
    let mut closes = vec![starting_price];

    for _ in 1..days {
        let change = rng.gen_range(-2.0..4.0);
        let new_price = (closes.last().copied().unwrap_or(starting_price) + change).max(1.0);
        closes.push(new_price);
    }

    closes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_series() {
        let result = PriceSeries::from_closes(vec![]);
        assert!(matches!(result, Err(EnvError::InvalidConfiguration(_))));
    }

    #[test]
    fn rejects_missing_price_column() {
        let start = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
        let timestamps = vec![start, start + Duration::days(1)];
        let columns = vec![("Volume".to_string(), vec![1.0, 2.0])];

        let result = PriceSeries::new(timestamps, columns, "Close");
        assert!(matches!(result, Err(EnvError::InvalidConfiguration(_))));
    }

    #[test]
    fn rejects_unsorted_timestamps() {
        let start = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
        let timestamps = vec![start + Duration::days(1), start];
        let columns = vec![("Close".to_string(), vec![1.0, 2.0])];

        let result = PriceSeries::new(timestamps, columns, "Close");
        assert!(matches!(result, Err(EnvError::InvalidConfiguration(_))));
    }

    #[test]
    fn rejects_ragged_columns() {
        let start = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
        let timestamps = vec![start, start + Duration::days(1)];
        let columns = vec![
            ("Close".to_string(), vec![1.0, 2.0]),
            ("Volume".to_string(), vec![10.0]),
        ];

        let result = PriceSeries::new(timestamps, columns, "Close");
        assert!(matches!(result, Err(EnvError::InvalidConfiguration(_))));
    }

    #[test]
    fn price_at_clamps_past_the_end() {
        let series = PriceSeries::from_closes(vec![10.0, 11.0, 12.0]).unwrap();

        assert_eq!(series.price_at(1), 11.0);
        assert_eq!(series.price_at(10), 12.0);
    }
}
