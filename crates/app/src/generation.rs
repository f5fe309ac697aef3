//! Request generations: telling late responses apart from current ones.
//!
//! The router advances the [`Generation`] on every navigation. A request
//! takes a [`Ticket`] when it starts; when its response arrives the ticket
//! says whether the view that asked for it is still the active one.

use std::cell::Cell;
use std::rc::Rc;

/// Shared navigation counter.
#[derive(Debug, Clone, Default)]
pub struct Generation(Rc<Cell<u64>>);

impl Generation {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Invalidate every ticket issued so far.
    pub fn advance(&self) {
        self.0.set(self.0.get().wrapping_add(1));
    }

    /// Issue a ticket for the current generation.
    #[must_use]
    pub fn ticket(&self) -> Ticket {
        Ticket {
            generation: Rc::clone(&self.0),
            issued: self.0.get(),
        }
    }
}

/// Snapshot of a [`Generation`] taken when a request starts.
#[derive(Debug, Clone)]
pub struct Ticket {
    generation: Rc<Cell<u64>>,
    issued: u64,
}

impl Ticket {
    /// Whether no navigation happened since the ticket was issued.
    #[must_use]
    pub fn is_current(&self) -> bool {
        self.generation.get() == self.issued
    }
}
