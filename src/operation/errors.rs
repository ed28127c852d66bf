use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum OperationError {
    #[error("Division by zero")]
    DivisionByZero,
}

#[derive(Error, Debug, Clone, PartialEq)]
#[error("Unknown operation: {0}")]
pub struct ParseOperationError(pub String);
