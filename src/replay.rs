//! Scripted input replay
//!
//! Drives a registered grid through [`update`] the way a host would:
//! focus lands on a cell, keystrokes go to whichever cell holds focus.

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::commands::Cmd;
use crate::events::GridEvent;
use crate::keymap::parse_key_string;
use crate::messages::{CellAddress, CellMsg, Msg};
use crate::model::{CellPosition, CellValue, GridId, GridRegistry};
use crate::update::update;

/// One scripted input
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    /// Focus the cell at `[row, col]`
    Focus(usize, usize),
    /// Key string in keymap syntax, e.g. `ctrl+left`
    Key(String),
    /// Commit a new value to the current cell
    Update(CellValue),
    DoubleClick,
    Blur,
}

/// What one step did
#[derive(Debug, Clone, Serialize)]
pub struct StepRecord {
    pub step: Step,
    /// Cell the step was delivered to
    pub target: CellPosition,
    /// Focused cell after the step
    pub focused: Option<CellPosition>,
    /// Cells to repaint; `None` when nothing changed, empty for a full redraw
    pub redraw: Option<Vec<CellPosition>>,
    pub events: Vec<GridEvent>,
}

/// Replays steps against one grid in a registry
pub struct Replayer<'a> {
    registry: &'a mut GridRegistry,
    grid: GridId,
    current: Option<CellPosition>,
}

impl<'a> Replayer<'a> {
    pub fn new(registry: &'a mut GridRegistry, grid: impl Into<GridId>) -> Self {
        Self {
            registry,
            grid: grid.into(),
            current: None,
        }
    }

    /// Cell that receives the next non-focus step
    pub fn current(&self) -> Option<CellPosition> {
        self.current
    }

    fn send(&mut self, position: CellPosition, msg: CellMsg) -> Option<Cmd> {
        let address = CellAddress {
            grid: self.grid.clone(),
            position,
        };
        update(self.registry, Msg::Cell(address, msg))
    }

    pub fn run(&mut self, steps: &[Step]) -> Result<Vec<StepRecord>> {
        steps
            .iter()
            .enumerate()
            .map(|(i, step)| self.step(step).with_context(|| format!("step {}", i + 1)))
            .collect()
    }

    pub fn step(&mut self, step: &Step) -> Result<StepRecord> {
        let target = match step {
            Step::Focus(row, col) => CellPosition::new(*row, *col),
            _ => match self.current {
                Some(position) => position,
                None => bail!("no cell has focus for {:?}", step),
            },
        };

        let msg = match step {
            Step::Focus(..) => CellMsg::Focus,
            Step::Key(key) => CellMsg::KeyDown(parse_key_string(key)?),
            Step::Update(value) => CellMsg::Update(value.clone()),
            Step::DoubleClick => CellMsg::DoubleClick,
            Step::Blur => CellMsg::Blur,
        };

        // A host blurs the previously focused cell before focusing another
        let mut blur_redraw = None;
        if let (Step::Focus(..), Some(previous)) = (step, self.current) {
            if previous != target {
                blur_redraw = self.send(previous, CellMsg::Blur);
            }
        }
        let cmd = self.send(target, msg);

        let grid = self
            .registry
            .get_mut(&self.grid)
            .with_context(|| format!("grid {} is not registered", self.grid))?;
        let focused = grid.focused_cell();
        let events = grid.drain_events();

        // Focus follows navigation; after a blur keep addressing the same cell
        match step {
            Step::Focus(..) => self.current = Some(target),
            _ => {
                if let Some(position) = focused {
                    self.current = Some(position);
                }
            }
        }

        let redraw = match (blur_redraw, cmd) {
            (None, None) => None,
            (blurred, cmd) => {
                let mut cells: Vec<CellPosition> = blurred
                    .into_iter()
                    .chain(cmd)
                    .flat_map(|c| c.damaged_cells().unwrap_or_default())
                    .collect();
                cells.sort();
                cells.dedup();
                Some(cells)
            }
        };

        tracing::debug!(?step, ?target, ?focused, events = events.len(), "replayed step");

        Ok(StepRecord {
            step: step.clone(),
            target,
            focused,
            redraw,
            events,
        })
    }
}
