use serde::{Deserialize, Serialize};

use crate::{error::EnvError, portfolio::Portfolio};

/// The two discrete action spaces supported by the environment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionSpace {
    /// 0 = buy one share, 1 = hold, 2 = sell one share, 3/4/5 = sell
    /// 25/50/75% of holdings, 6 = sell everything
    SixAction,
    /// 0 = buy one share, 1 = sell one share, 2 = hold
    ThreeAction,
}

impl ActionSpace {
    pub fn action_count(&self) -> usize {
        match self {
            Self::SixAction => 7,
            Self::ThreeAction => 3,
        }
    }

    /// Maps a raw discrete action value to its trade semantics. Values
    /// outside the space are a caller bug and reported as `InvalidAction`.
    pub fn decode(&self, action: usize) -> Result<TradeAction, EnvError> {
        let decoded = match self {
            Self::SixAction => match action {
                0 => TradeAction::BuyOne,
                1 => TradeAction::Hold,
                2 => TradeAction::SellOne,
                3 => TradeAction::SellFraction(0.25),
                4 => TradeAction::SellFraction(0.5),
                5 => TradeAction::SellFraction(0.75),
                6 => TradeAction::SellAll,
                _ => {
                    return Err(EnvError::InvalidAction {
                        action,
                        action_count: self.action_count(),
                    })
                }
            },
            Self::ThreeAction => match action {
                0 => TradeAction::BuyOne,
                1 => TradeAction::SellOne,
                2 => TradeAction::Hold,
                _ => {
                    return Err(EnvError::InvalidAction {
                        action,
                        action_count: self.action_count(),
                    })
                }
            },
        };

        Ok(decoded)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TradeAction {
    BuyOne,
    Hold,
    SellOne,
    SellFraction(f64),
    SellAll,
}

impl TradeAction {
    /// Applies the trade to the portfolio at the current price and reports
    /// the fill that actually happened, if any. Rejected buys and empty
    /// sells resolve silently to no fill.
    pub fn apply(&self, portfolio: &mut Portfolio, price: f64) -> Fill {
        match self {
            Self::Hold => Fill::None,
            Self::BuyOne => {
                if portfolio.buy_one_share(price) {
                    Fill::Bought { price }
                } else {
                    Fill::None
                }
            }
            Self::SellOne => {
                // clamp so a fractional leftover cannot go negative
                let quantity = portfolio.shares.min(1.0);
                Self::sell(portfolio, quantity, price)
            }
            Self::SellFraction(fraction) => {
                let quantity = fraction * portfolio.shares;
                Self::sell(portfolio, quantity, price)
            }
            Self::SellAll => {
                let quantity = portfolio.shares;
                Self::sell(portfolio, quantity, price)
            }
        }
    }

    fn sell(portfolio: &mut Portfolio, quantity: f64, price: f64) -> Fill {
        if portfolio.sell_shares(quantity, price) {
            Fill::Sold { quantity, price }
        } else {
            Fill::None
        }
    }
}

/// What a dispatched action actually did to the portfolio
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Fill {
    Bought { price: f64 },
    Sold { quantity: f64, price: f64 },
    None,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn six_action_decode_table() {
        let space = ActionSpace::SixAction;

        assert_eq!(space.decode(0).unwrap(), TradeAction::BuyOne);
        assert_eq!(space.decode(1).unwrap(), TradeAction::Hold);
        assert_eq!(space.decode(2).unwrap(), TradeAction::SellOne);
        assert_eq!(space.decode(3).unwrap(), TradeAction::SellFraction(0.25));
        assert_eq!(space.decode(4).unwrap(), TradeAction::SellFraction(0.5));
        assert_eq!(space.decode(5).unwrap(), TradeAction::SellFraction(0.75));
        assert_eq!(space.decode(6).unwrap(), TradeAction::SellAll);
        assert!(space.decode(7).is_err());
    }

    #[test]
    fn three_action_decode_table() {
        let space = ActionSpace::ThreeAction;

        assert_eq!(space.decode(0).unwrap(), TradeAction::BuyOne);
        assert_eq!(space.decode(1).unwrap(), TradeAction::SellOne);
        assert_eq!(space.decode(2).unwrap(), TradeAction::Hold);
        assert!(space.decode(3).is_err());
        assert!(space.decode(99).is_err());
    }

    #[test]
    fn sell_fraction_uses_holdings_before_the_sell() {
        let mut portfolio = Portfolio::new(1000.0);
        portfolio.buy_one_share(100.0);
        portfolio.buy_one_share(100.0);

        let fill = TradeAction::SellFraction(0.5).apply(&mut portfolio, 100.0);

        assert_eq!(
            fill,
            Fill::Sold {
                quantity: 1.0,
                price: 100.0
            }
        );
        assert_eq!(portfolio.shares, 1.0);
    }

    #[test]
    fn sell_one_clamps_to_fractional_holdings() {
        let mut portfolio = Portfolio::new(1000.0);
        portfolio.buy_one_share(100.0);
        TradeAction::SellFraction(0.75).apply(&mut portfolio, 100.0);

        TradeAction::SellOne.apply(&mut portfolio, 100.0);

        assert_eq!(portfolio.shares, 0.0);
    }

    #[test]
    fn sell_all_with_nothing_held_is_a_noop() {
        let mut portfolio = Portfolio::new(1000.0);

        let fill = TradeAction::SellAll.apply(&mut portfolio, 100.0);

        assert_eq!(fill, Fill::None);
        assert_eq!(portfolio.cash, 1000.0);
    }
}
