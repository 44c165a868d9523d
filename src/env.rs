use crate::{
    action::Fill,
    charts::simple_chart,
    config::{EnvConfig, RewardBaseline},
    error::EnvError,
    history::EpisodeHistory,
    observation::Observation,
    portfolio::Portfolio,
    series::PriceSeries,
    types::Data,
};

/// Anything that can drive a training loop: a reset/step/close capability,
/// no inheritance required.
pub trait Environment {
    fn reset(&mut self) -> Observation;
    fn step(&mut self, action: usize) -> Result<Step, EnvError>;
    fn close(&mut self);
}

/// What one call to `step` produced
#[derive(Debug, Clone, PartialEq)]
pub struct Step {
    pub observation: Observation,
    pub reward: f64,
    pub done: bool,
    pub info: StepInfo,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepInfo {
    pub total_value: f64,
    pub shares: f64,
    pub reward: f64,
    /// The time index after the step advanced
    pub current_time: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    /// Plot the running episode's value curve
    Regular,
    /// Plot the previous episode's value curve instead
    Dummy,
}

/// Writes value-curve charts for render calls. Owned by the environment and
/// released by `close`; simulation state never depends on it.
#[derive(Debug)]
pub struct Renderer {
    dir: String,
}

impl Renderer {
    pub fn new(dir: &str) -> Self {
        crate::utils::create_folder_if_not_exists(dir);
        Self {
            dir: dir.to_string(),
        }
    }

    fn render(&self, money: &Data) -> Result<(), Box<dyn std::error::Error>> {
        simple_chart(&self.dir, "money", money)
    }
}

/// A single-ticker trading environment over a historical price series.
///
/// Each step the agent sees a sliding window of the most recent
/// `window_size` rows and trades at the price of the last fully observed
/// row. The reward is the change in total account value.
#[derive(Debug)]
pub struct StockEnv {
    series: PriceSeries,
    config: EnvConfig,
    end_index: usize,
    index: usize,
    current_time: usize,
    portfolio: Portfolio,
    prev_total_value: f64,
    history: EpisodeHistory,
    /// Value curve of the finished episode, for dummy-mode rendering
    prev_money: Data,
    renderer: Option<Renderer>,
}

impl StockEnv {
    pub fn new(series: PriceSeries, config: EnvConfig) -> Result<Self, EnvError> {
        if config.window_size == 0 {
            return Err(EnvError::InvalidConfiguration(
                "window_size must be greater than zero".to_string(),
            ));
        }

        let end_index = config.end_index.unwrap_or(series.len());
        if end_index > series.len() {
            return Err(EnvError::InvalidConfiguration(format!(
                "end_index {end_index} is past the series length {}",
                series.len()
            )));
        }

        if config.start_index + config.window_size > end_index {
            return Err(EnvError::InvalidConfiguration(format!(
                "no room for a window of {} starting at {} before end_index {end_index}",
                config.window_size, config.start_index
            )));
        }

        let portfolio = Portfolio::new(config.starting_cash);
        let prev_total_value = match config.baseline {
            RewardBaseline::Zero => 0.0,
            RewardBaseline::StartingCash => config.starting_cash,
        };

        Ok(Self {
            index: config.start_index,
            current_time: config.start_index + config.window_size,
            end_index,
            portfolio,
            prev_total_value,
            history: EpisodeHistory::default(),
            prev_money: Vec::new(),
            renderer: None,
            series,
            config,
        })
    }

    pub fn with_renderer(mut self, dir: &str) -> Self {
        self.renderer = Some(Renderer::new(dir));
        self
    }

    pub fn series(&self) -> &PriceSeries {
        &self.series
    }

    pub fn portfolio(&self) -> &Portfolio {
        &self.portfolio
    }

    pub fn history(&self) -> &EpisodeHistory {
        &self.history
    }

    pub fn action_count(&self) -> usize {
        self.config.action_space.action_count()
    }

    /// The price trades execute at: the last element of the current window
    fn today_price(&self) -> f64 {
        self.series.price_at(self.current_time - 1)
    }

    fn observation(&self) -> Observation {
        Observation::build(
            self.config.observation,
            &self.series,
            &self.portfolio,
            self.index,
            self.config.window_size,
            self.config.fill,
            self.today_price(),
        )
    }

    pub fn reset(&mut self) -> Observation {
        self.index = self.config.start_index;
        self.current_time = self.index + self.config.window_size;
        self.portfolio.reset();
        self.prev_total_value = match self.config.baseline {
            RewardBaseline::Zero => 0.0,
            RewardBaseline::StartingCash => self.config.starting_cash,
        };

        let finished = std::mem::take(&mut self.history);
        self.prev_money = finished.money;

        self.observation()
    }

    pub fn step(&mut self, action: usize) -> Result<Step, EnvError> {
        // Decode first so an out-of-range action fails before any mutation
        let trade = self.config.action_space.decode(action)?;

        let today_price = self.today_price();
        match trade.apply(&mut self.portfolio, today_price) {
            Fill::Bought { price } => {
                self.history.buys.insert(self.current_time - 1, (price, 1.0));
            }
            Fill::Sold { quantity, price } => {
                self.history
                    .sells
                    .insert(self.current_time - 1, (price, quantity));
            }
            Fill::None => {}
        }

        let observation = self.observation();

        let total_value = self.portfolio.total_value(today_price);
        let reward = total_value - self.prev_total_value;
        self.prev_total_value = total_value;

        self.history.money.push(total_value);
        self.history.rewards.push(reward);

        // Evaluated before the cursor advances. Steps past this point are
        // not rejected; callers are expected to reset instead.
        let done = self.current_time == self.end_index;

        self.index += 1;
        self.current_time = self.index + self.config.window_size;

        Ok(Step {
            observation,
            reward,
            done,
            info: StepInfo {
                total_value,
                shares: self.portfolio.shares,
                reward,
                current_time: self.current_time,
            },
        })
    }

    pub fn close(&mut self) {
        self.renderer = None;
    }

    /// Plots the episode's cumulative value curve, if a renderer is attached
    pub fn render(&self, mode: RenderMode) -> Result<(), Box<dyn std::error::Error>> {
        let Some(renderer) = &self.renderer else {
            return Ok(());
        };

        let money = match mode {
            RenderMode::Regular => &self.history.money,
            RenderMode::Dummy => &self.prev_money,
        };

        renderer.render(money)
    }
}

impl Environment for StockEnv {
    fn reset(&mut self) -> Observation {
        StockEnv::reset(self)
    }

    fn step(&mut self, action: usize) -> Result<Step, EnvError> {
        StockEnv::step(self, action)
    }

    fn close(&mut self) {
        StockEnv::close(self)
    }
}
