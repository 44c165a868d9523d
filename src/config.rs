use serde::{Deserialize, Serialize};

use crate::{action::ActionSpace, observation::ObservationKind, window::FillPolicy};

/// What the first step's reward is measured against.
///
/// With `Zero`, the previous total value starts at zero after a reset, so
/// the first reward is roughly the whole starting cash. `StartingCash`
/// measures from the starting account value instead. Each preset keeps the
/// behavior of the variant it reproduces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RewardBaseline {
    Zero,
    StartingCash,
}

/// Construction parameters for a [`crate::env::StockEnv`]. The two source
/// variants are bundled as presets; every field can still be overridden.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnvConfig {
    /// How many recent rows each observation window covers
    pub window_size: usize,
    /// Offset of the first window into the series
    pub start_index: usize,
    /// Where the episode terminates; defaults to the series length
    pub end_index: Option<usize>,
    pub starting_cash: f64,
    pub action_space: ActionSpace,
    pub observation: ObservationKind,
    pub fill: FillPolicy,
    pub baseline: RewardBaseline,
}

impl EnvConfig {
    /// Dict-style observations, seven discrete actions, mean padding
    pub fn six_action() -> Self {
        Self {
            window_size: 30,
            start_index: 0,
            end_index: None,
            starting_cash: 1000.0,
            action_space: ActionSpace::SixAction,
            observation: ObservationKind::Table,
            fill: FillPolicy::MeanOfTail,
            baseline: RewardBaseline::Zero,
        }
    }

    /// Pair observations, three discrete actions, zero padding
    pub fn three_action() -> Self {
        Self {
            action_space: ActionSpace::ThreeAction,
            observation: ObservationKind::Pair,
            fill: FillPolicy::Zero,
            baseline: RewardBaseline::StartingCash,
            ..Self::six_action()
        }
    }
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self::six_action()
    }
}
