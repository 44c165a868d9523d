use serde::{Deserialize, Serialize};

/// Cash balance and share count for a single-ticker account. Share counts may
/// be fractional when they come from percentage sells.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Portfolio {
    pub cash: f64,
    pub shares: f64,
    pub starting_cash: f64,
}

impl Portfolio {
    pub fn new(starting_cash: f64) -> Self {
        Self {
            cash: starting_cash,
            shares: 0.0,
            starting_cash,
        }
    }

    /// Buys a single share if there is enough cash, otherwise does nothing.
    /// A rejected buy is not an error, so an untrained agent can explore
    /// freely. Returns whether the buy happened.
    pub fn buy_one_share(&mut self, price: f64) -> bool {
        if self.cash < price {
            return false;
        }

        self.shares += 1.0;
        self.cash -= price;
        true
    }

    /// Sells `n` shares at `price`. Does nothing when there are no holdings.
    /// Callers are responsible for passing an `n` no larger than the current
    /// holdings; percentage sells are computed upstream in action dispatch.
    pub fn sell_shares(&mut self, n: f64, price: f64) -> bool {
        if self.shares <= 0.0 {
            return false;
        }

        self.shares -= n;
        self.cash += price * n;
        true
    }

    pub fn total_value(&self, price: f64) -> f64 {
        self.shares * price + self.cash
    }

    pub fn reset(&mut self) {
        self.cash = self.starting_cash;
        self.shares = 0.0;
    }
}
