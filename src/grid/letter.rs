//! Letter sanitising
//!
//! A cell holds at most one uppercase ASCII letter. Raw input is filtered
//! down to that before it ever reaches the store.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Letter(Option<char>);

impl Letter {
    pub fn is_empty(&self) -> bool {
        self.0.is_none()
    }

    pub fn as_char(&self) -> Option<char> {
        self.0
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.as_char() {
            Some(c) => write!(f, "{c}"),
            None => Ok(()),
        }
    }
}

/// Strip everything outside `[A-Za-z]`, uppercase, and keep the first survivor.
pub fn sanitize(raw: &str) -> Letter {
    Letter(raw.chars().find(char::is_ascii_alphabetic).map(|c| c.to_ascii_uppercase()))
}
