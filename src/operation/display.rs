use std::fmt;
use std::str::FromStr;

use crate::operation::errors::ParseOperationError;
use crate::operation::kinds::Operation;

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for Operation {
    type Err = ParseOperationError;

    /// Accepts the board symbols plus their ASCII spellings.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "+" | "add" => Ok(Operation::Add),
            "-" | "sub" => Ok(Operation::Sub),
            "×" | "*" | "x" | "mul" => Ok(Operation::Mul),
            "÷" | "/" | "div" => Ok(Operation::Div),
            other => Err(ParseOperationError(other.to_string())),
        }
    }
}
