//! Input Module
//!
//! Maps terminal key events onto board actions.

pub mod keymap;
pub mod modes;

// Re-exports
pub use keymap::Action;
pub use modes::InputMode;
