use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum NumericError {
    #[error("Value {0} cannot be expressed as a fraction")]
    OutOfRange(f64),
}
