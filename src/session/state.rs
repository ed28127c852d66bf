use crate::operation::Operation;

/// One board position
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Slot {
    pub value: f64,
    pub consumed: bool,
}

impl Slot {
    pub fn fresh(value: u32) -> Self {
        Self {
            value: f64::from(value),
            consumed: false,
        }
    }
}

/// Where the session is in the select, operate, select cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    Idle,
    OperandSelected {
        slot: usize,
    },
    OperationPending {
        slot: usize,
        operation: Operation,
    },
    Solved,
}

impl SessionState {
    pub fn selected_slot(self) -> Option<usize> {
        match self {
            SessionState::OperandSelected { slot } | SessionState::OperationPending { slot, .. } => {
                Some(slot)
            }
            SessionState::Idle | SessionState::Solved => None,
        }
    }

    pub fn pending_operation(self) -> Option<Operation> {
        match self {
            SessionState::OperationPending { operation, .. } => Some(operation),
            _ => None,
        }
    }
}
