//! Resolution diagnostics.
//!
//! The resolver reports declaration chases through an injected
//! [`Observer`]; nothing is written unless a sink asks for it.

use std::cell::RefCell;

/// Receives diagnostic events emitted during resolution.
///
/// Every event method has an empty default body, so sinks override only
/// what they need.
pub trait Observer {
    /// A named reference was chased to its declared type.
    fn alias_resolved(&self, ident: &str, resolved: &str) {
        let _ = (ident, resolved);
    }
}

/// Ignores every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct Discard;

impl Observer for Discard {}

/// Forwards events to `tracing` at debug level.
#[derive(Debug, Clone, Copy, Default)]
pub struct Trace;

impl Observer for Trace {
    fn alias_resolved(&self, ident: &str, resolved: &str) {
        tracing::debug!("resolved {} to {}", ident, resolved);
    }
}

/// Accumulates events for inspection in tests.
#[derive(Debug, Default)]
pub struct Recording {
    chases: RefCell<Vec<(String, String)>>,
}

impl Recording {
    /// Creates an empty recording observer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded (identifier, resolved name) pairs in order.
    #[must_use]
    pub fn chases(&self) -> Vec<(String, String)> {
        self.chases.borrow().clone()
    }
}

impl Observer for Recording {
    fn alias_resolved(&self, ident: &str, resolved: &str) {
        self.chases
            .borrow_mut()
            .push((ident.to_string(), resolved.to_string()));
    }
}
