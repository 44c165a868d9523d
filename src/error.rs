use thiserror::Error;

#[derive(Debug, Error)]
pub enum EnvError {
    /// The agent picked an action value outside the configured discrete range.
    #[error("invalid action {action}, expected a value in [0, {action_count})")]
    InvalidAction { action: usize, action_count: usize },

    /// The series or construction parameters cannot form a valid environment.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}
