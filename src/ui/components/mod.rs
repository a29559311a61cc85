//! UI Components
//!
//! Widgets for the guess board and its surroundings.

pub mod dialogs;
pub mod grid_view;
pub mod guesses;
pub mod layout;
pub mod statusline;

// Re-exports
pub use dialogs::ConfirmDialog;
pub use grid_view::{GridView, HitTarget, FRAME_HEIGHT, FRAME_WIDTH};
pub use guesses::GuessList;
pub use statusline::{HelpBar, MessageType, StatusLine};
