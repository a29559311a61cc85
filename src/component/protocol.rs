//! Host Protocol
//!
//! Payloads exchanged between the grid component and its embedding host.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::grid::{Cell, CellColor, Position};

/// Render payload pushed by the host. Every field may be omitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderSnapshot {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grid: Option<Vec<Vec<String>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub colors: Option<Vec<Vec<String>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_row: Option<i64>,
}

/// One cell's state after a single user action
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeEvent {
    pub row: usize,
    pub col: usize,
    pub letter: String,
    pub color: CellColor,
}

impl ChangeEvent {
    pub fn new(pos: Position, cell: Cell) -> Self {
        Self {
            row: pos.row(),
            col: pos.col(),
            letter: cell.letter.to_string(),
            color: cell.color,
        }
    }
}

/// Lifecycle and value messages sent to the host runtime
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostMessage {
    Ready,
    FrameHeight(u16),
    Value(ChangeEvent),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("host is no longer listening")]
pub struct HostDisconnected(pub HostMessage);

/// Outbound channel to the host
pub trait HostBridge {
    fn send(&mut self, message: HostMessage) -> Result<(), HostDisconnected>;
}

impl<F: FnMut(HostMessage)> HostBridge for F {
    fn send(&mut self, message: HostMessage) -> Result<(), HostDisconnected> {
        self(message);
        Ok(())
    }
}
