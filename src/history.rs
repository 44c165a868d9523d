use hashbrown::HashMap;

use crate::{
    charts::{buy_sell_chart, simple_chart},
    types::Data,
    utils::create_folder_if_not_exists,
};

/// Per-step record of one episode, kept for rendering and inspection only.
/// The simulation itself never reads it back.
#[derive(Debug, Default)]
pub struct EpisodeHistory {
    /// Total account value after every step
    pub money: Data,
    pub rewards: Data,
    /// Time index -> (price, quantity) of executed buys
    pub buys: HashMap<usize, (f64, f64)>,
    /// Time index -> (price, quantity) of executed sells
    pub sells: HashMap<usize, (f64, f64)>,
}

impl EpisodeHistory {
    pub fn final_assets(&self) -> Option<f64> {
        self.money.last().copied()
    }

    /// Writes the episode's charts under `dir`
    pub fn record(&self, dir: &str, prices: &Data) -> Result<(), Box<dyn std::error::Error>> {
        create_folder_if_not_exists(dir);

        simple_chart(dir, "assets", &self.money)?;
        simple_chart(dir, "rewards", &self.rewards)?;
        buy_sell_chart(dir, prices, &self.buys, &self.sells)?;

        Ok(())
    }
}
