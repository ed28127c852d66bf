use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SearchError {
    #[error("Cannot search an empty set of numbers")]
    EmptyInput,
    #[error("Input value is not finite: {0}")]
    NonFiniteInput(f64),
}
