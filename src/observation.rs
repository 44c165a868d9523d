use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

use crate::{
    portfolio::Portfolio,
    series::PriceSeries,
    types::Data,
    window::{window, FillPolicy},
};

/// Which observation shape the environment hands back to the agent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObservationKind {
    /// One window per data column plus account scalars
    Table,
    /// Just the price window and the total account value
    Pair,
}

/// The agent-facing view of the environment, rebuilt wholesale on every step
/// and reset.
#[derive(Debug, Clone, PartialEq)]
pub enum Observation {
    Table {
        /// Column name -> window of the most recent `window_size` values
        features: HashMap<String, Data>,
        money_left_to_invest: f64,
        account_amount: f64,
    },
    Pair {
        window: Data,
        total_value: f64,
    },
}

impl Observation {
    pub fn build(
        kind: ObservationKind,
        series: &PriceSeries,
        portfolio: &Portfolio,
        index: usize,
        window_size: usize,
        fill: FillPolicy,
        today_price: f64,
    ) -> Self {
        match kind {
            ObservationKind::Table => {
                let mut features = HashMap::new();

                for (name, values) in series.columns() {
                    features.insert(name.to_string(), window(values, index, window_size, fill));
                }

                Self::Table {
                    features,
                    money_left_to_invest: portfolio.cash,
                    account_amount: portfolio.shares * today_price,
                }
            }
            ObservationKind::Pair => Self::Pair {
                window: window(series.prices(), index, window_size, fill),
                total_value: portfolio.total_value(today_price),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_observation_carries_every_column() {
        let series = PriceSeries::new(
            (0..4)
                .map(|i| {
                    chrono::NaiveDate::from_ymd_opt(2020, 1, 1).unwrap()
                        + chrono::Duration::days(i)
                })
                .collect(),
            vec![
                ("Close".to_string(), vec![10.0, 11.0, 12.0, 13.0]),
                ("Volume".to_string(), vec![1.0, 2.0, 3.0, 4.0]),
            ],
            "Close",
        )
        .unwrap();
        let portfolio = Portfolio::new(100.0);

        let observation = Observation::build(
            ObservationKind::Table,
            &series,
            &portfolio,
            1,
            3,
            FillPolicy::Zero,
            12.0,
        );

        let Observation::Table {
            features,
            money_left_to_invest,
            account_amount,
        } = observation
        else {
            panic!("expected a table observation");
        };

        assert_eq!(features["Close"], vec![11.0, 12.0, 13.0]);
        assert_eq!(features["Volume"], vec![2.0, 3.0, 4.0]);
        assert_eq!(money_left_to_invest, 100.0);
        assert_eq!(account_amount, 0.0);
    }

    #[test]
    fn pair_observation_is_window_and_value() {
        let series = PriceSeries::from_closes(vec![10.0, 11.0, 12.0]).unwrap();
        let mut portfolio = Portfolio::new(100.0);
        portfolio.buy_one_share(10.0);

        let observation = Observation::build(
            ObservationKind::Pair,
            &series,
            &portfolio,
            0,
            2,
            FillPolicy::Zero,
            11.0,
        );

        assert_eq!(
            observation,
            Observation::Pair {
                window: vec![10.0, 11.0],
                total_value: 101.0,
            }
        );
    }
}
