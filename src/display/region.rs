//! Shared output region with request ordering.
//!
//! Every user action takes a [`Ticket`] before it starts fetching. When the
//! work finishes it presents its rendering with that ticket, and the region
//! only accepts it if no newer ticket has been issued in the meantime. A slow
//! response can therefore never overwrite the result of a later action.

use parking_lot::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};

use super::rendering::Rendering;

/// Position of a request in issue order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ticket(u64);

impl Ticket {
    #[must_use]
    pub fn sequence(self) -> u64 {
        self.0
    }
}

#[derive(Debug)]
pub struct OutputRegion {
    issued: AtomicU64,
    shown: Mutex<Shown>,
}

#[derive(Debug)]
struct Shown {
    /// Ticket of the rendering on screen, 0 before anything was presented
    ticket: u64,
    rendering: Rendering,
}

impl Default for OutputRegion {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputRegion {
    #[must_use]
    pub fn new() -> Self {
        Self {
            issued: AtomicU64::new(0),
            shown: Mutex::new(Shown {
                ticket: 0,
                rendering: Rendering::Idle,
            }),
        }
    }

    /// Issue a ticket for a new request
    pub fn begin(&self) -> Ticket {
        Ticket(self.issued.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Whether `ticket` is still the most recently issued one
    #[must_use]
    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.issued.load(Ordering::SeqCst) == ticket.0
    }

    /// Show `rendering` unless a newer request has started since `ticket`
    ///
    /// Returns whether the rendering was applied.
    pub fn present(&self, ticket: Ticket, rendering: Rendering) -> bool {
        let mut shown = self.shown.lock();
        if !self.is_current(ticket) || ticket.0 < shown.ticket {
            tracing::debug!(
                ticket = ticket.0,
                latest = self.issued.load(Ordering::SeqCst),
                "Dropping stale rendering"
            );
            return false;
        }
        shown.ticket = ticket.0;
        shown.rendering = rendering;
        true
    }

    #[must_use]
    pub fn current(&self) -> Rendering {
        self.shown.lock().rendering.clone()
    }

    #[must_use]
    pub fn current_html(&self) -> String {
        self.shown.lock().rendering.to_html()
    }
}
