use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("toggle states need exactly two entries, got {0}")]
    ToggleStates(usize),
}

pub type Result<T> = std::result::Result<T, Error>;
