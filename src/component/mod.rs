//! Grid Component
//!
//! One mounted instance of the guess board: owns the grid store, rebuilds it
//! from every host render payload and reports each edit back to the host.

pub mod controller;
pub mod protocol;

use std::sync::mpsc::Sender;

use ratatui::layout::Rect;
use tracing::{debug, info};

use crate::grid::{GridStore, Position};
use crate::ui::components::grid_view::{BoardGeometry, GridView, HitTarget, FRAME_HEIGHT};

pub use protocol::{ChangeEvent, HostBridge, HostDisconnected, HostMessage, RenderSnapshot};

/// Bridge that queues host messages on a channel for the host loop to drain
#[derive(Debug, Clone)]
pub struct ChannelBridge(Sender<HostMessage>);

impl ChannelBridge {
    pub fn new(tx: Sender<HostMessage>) -> Self {
        Self(tx)
    }
}

impl HostBridge for ChannelBridge {
    fn send(&mut self, message: HostMessage) -> Result<(), HostDisconnected> {
        self.0.send(message).map_err(|err| HostDisconnected(err.0))
    }
}

pub struct WordleGrid<B: HostBridge> {
    mount: Rect,
    store: GridStore,
    bridge: B,
    ready: bool,
}

impl<B: HostBridge> WordleGrid<B> {
    pub fn new(mount: Rect, bridge: B) -> Self {
        Self {
            mount,
            store: GridStore::new(),
            bridge,
            ready: false,
        }
    }

    /// Tear down and rebuild from a host payload.
    ///
    /// Nothing from the previous grid survives. The required frame height is
    /// reported after every rebuild and readiness once, after the first.
    pub fn render(&mut self, snapshot: &RenderSnapshot) {
        self.store = GridStore::initialize(
            snapshot.grid.as_deref(),
            snapshot.colors.as_deref(),
            snapshot.active_row,
        );
        debug!(active_row = ?self.store.active_row(), "grid rebuilt from host snapshot");

        self.notify(HostMessage::FrameHeight(FRAME_HEIGHT));
        if !self.ready {
            self.ready = true;
            info!("grid component ready");
            self.notify(HostMessage::Ready);
        }
    }

    /// Move the component, e.g. after a terminal resize. State is kept.
    pub fn set_mount(&mut self, mount: Rect) {
        self.mount = mount;
    }

    pub fn store(&self) -> &GridStore {
        &self.store
    }

    /// Raw text typed or pasted into a cell. Returns true if the host received
    /// an event; a rejected edit or a disconnected host both yield false.
    pub fn on_text_input(&mut self, pos: Position, raw: &str) -> bool {
        let event = controller::edit_letter(&mut self.store, pos, raw);
        self.emit(event)
    }

    /// Click on a cell's color indicator. Returns true if an event was sent.
    pub fn on_indicator_click(&mut self, pos: Position) -> bool {
        let event = controller::cycle_color(&mut self.store, pos);
        self.emit(event)
    }

    /// Resolve a click at terminal coordinates. Indicator hits cycle the
    /// color; the resolved target is returned either way so the caller can
    /// move focus.
    pub fn on_click(&mut self, x: u16, y: u16) -> Option<(Position, HitTarget)> {
        let (pos, target) = self.hit_test(x, y)?;
        if target == HitTarget::Indicator {
            self.on_indicator_click(pos);
        }
        Some((pos, target))
    }

    pub fn hit_test(&self, x: u16, y: u16) -> Option<(Position, HitTarget)> {
        BoardGeometry::new(self.mount).hit(x, y)
    }

    pub fn view(&self, focus: Option<Position>) -> GridView<'_> {
        GridView::new(&self.store).focus(focus)
    }

    fn emit(&mut self, event: Option<ChangeEvent>) -> bool {
        let Some(event) = event else { return false };
        debug!(row = event.row, col = event.col, letter = %event.letter, color = %event.color, "cell changed");
        self.notify(HostMessage::Value(event))
    }

    fn notify(&mut self, message: HostMessage) -> bool {
        match self.bridge.send(message) {
            Ok(()) => true,
            Err(err) => {
                debug!(dropped = ?err.0, "{err}");
                false
            }
        }
    }
}
