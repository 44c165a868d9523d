pub mod action;
pub mod charts;
pub mod config;
pub mod env;
pub mod error;
pub mod history;
pub mod observation;
pub mod portfolio;
pub mod series;
pub mod types;
pub mod utils;
pub mod window;

pub use action::{ActionSpace, TradeAction};
pub use config::{EnvConfig, RewardBaseline};
pub use env::{Environment, RenderMode, Step, StepInfo, StockEnv};
pub use error::EnvError;
pub use observation::{Observation, ObservationKind};
pub use portfolio::Portfolio;
pub use series::PriceSeries;
pub use window::FillPolicy;
