//! Notifications a grid emits to its host
//!
//! The state machine never calls into the UI directly. Instead it appends
//! [`GridEvent`]s to the owning grid's queue, which the host drains after
//! each update.

use serde::Serialize;

use crate::model::{CellPosition, CellValue};

/// An outgoing grid notification
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum GridEvent {
    /// A cell gained focus and is now the selected cell
    Selection { position: CellPosition },
    /// A value was committed to a cell
    EditCommitted {
        position: CellPosition,
        old_value: CellValue,
        new_value: CellValue,
    },
    /// The host should write `value` into its backing data at `position`
    DataUpdateRequested {
        position: CellPosition,
        value: CellValue,
    },
}

impl GridEvent {
    pub fn position(&self) -> CellPosition {
        match self {
            GridEvent::Selection { position }
            | GridEvent::EditCommitted { position, .. }
            | GridEvent::DataUpdateRequested { position, .. } => *position,
        }
    }
}

/// FIFO queue of pending grid events
#[derive(Debug, Clone, Default)]
pub struct EventQueue {
    pending: Vec<GridEvent>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn emit(&mut self, event: GridEvent) {
        tracing::trace!(?event, "grid event");
        self.pending.push(event);
    }

    pub fn pending(&self) -> &[GridEvent] {
        &self.pending
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Take all pending events in emission order
    pub fn drain(&mut self) -> Vec<GridEvent> {
        std::mem::take(&mut self.pending)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drain_preserves_order_and_empties() {
        let mut queue = EventQueue::new();
        queue.emit(GridEvent::Selection {
            position: CellPosition::new(0, 0),
        });
        queue.emit(GridEvent::Selection {
            position: CellPosition::new(1, 0),
        });

        let events = queue.drain();
        assert_eq!(events.len(), 2);
        assert_eq!(events[1].position(), CellPosition::new(1, 0));
        assert!(queue.is_empty());
    }

    #[test]
    fn test_event_json_shape() {
        let event = GridEvent::EditCommitted {
            position: CellPosition::new(0, 1),
            old_value: CellValue::from("old"),
            new_value: CellValue::from("X"),
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["event"], "edit_committed");
        assert_eq!(json["old_value"], "old");
        assert_eq!(json["new_value"], "X");
        assert_eq!(json["position"]["col"], 1);
    }
}
