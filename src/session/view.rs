use std::time::Duration;

use serde::Serialize;

use crate::numeric::format_value;
use crate::operation::Operation;
use crate::session::core::Session;

/// What the display needs to draw one slot; `None` once consumed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SlotView {
    pub value: Option<f64>,
    pub display: Option<String>,
}

/// Snapshot of a session handed back after every move
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionView {
    pub puzzle_id: String,
    pub target: u32,
    pub slots: Vec<SlotView>,
    pub selected_slot: Option<usize>,
    pub pending_operation: Option<Operation>,
    pub solved: bool,
    pub elapsed_seconds: u64,
}

impl SessionView {
    pub(crate) fn of(session: &Session) -> Self {
        let slots = session
            .slots()
            .iter()
            .map(|slot| {
                if slot.consumed {
                    SlotView {
                        value: None,
                        display: None,
                    }
                } else {
                    SlotView {
                        value: Some(slot.value),
                        display: Some(format_value(slot.value)),
                    }
                }
            })
            .collect();
        let state = session.state();
        Self {
            puzzle_id: session.puzzle().id.clone(),
            target: session.puzzle().target,
            slots,
            selected_slot: state.selected_slot(),
            pending_operation: state.pending_operation(),
            solved: session.is_solved(),
            elapsed_seconds: session.elapsed().as_secs(),
        }
    }

    /// Live values in slot order.
    pub fn remaining(&self) -> Vec<f64> {
        self.slots.iter().filter_map(|slot| slot.value).collect()
    }
}

/// `M'SS"` as shown on the play timer.
pub fn format_elapsed(elapsed: Duration) -> String {
    let seconds = elapsed.as_secs();
    format!("{}'{:02}\"", seconds / 60, seconds % 60)
}
