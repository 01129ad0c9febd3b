use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error(
        "rock paper scissors needs an odd number of rounds to produce a winner, got {rounds}"
    )]
    EvenRoundCount { rounds: u32 },
}

pub type Result<T> = std::result::Result<T, ConfigError>;
