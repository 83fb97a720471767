use thiserror::Error;

pub type Result<T> = std::result::Result<T, TournamentError>;

#[derive(Debug, Error)]
pub enum TournamentError {
    #[error("Cannot pair an odd number of players ({0})")]
    OddPlayerCount(usize),

    #[error("Invalid player id: {0:?}")]
    InvalidId(String),

    #[error("Player name is empty after sanitization")]
    InvalidName,

    #[error("Persistence unavailable: {0:#}")]
    PersistenceUnavailable(#[from] anyhow::Error),
}
