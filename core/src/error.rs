use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Coordinates outside the board")]
    OutOfBounds,
    #[error("Game already ended, no new moves are accepted")]
    AlreadyTerminal,
}

pub type Result<T> = core::result::Result<T, GameError>;
