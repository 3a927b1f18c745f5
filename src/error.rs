use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    #[error("minimum degree must be greater than 1, but was {0}")]
    MinDegreeTooSmall(i64),
    #[error("minimum degree {0} is too large to compute the node capacity")]
    MinDegreeTooLarge(u64),
}
