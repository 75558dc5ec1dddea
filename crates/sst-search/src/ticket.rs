//! Generation tickets that let controllers drop superseded responses.
//!
//! Every request a controller issues is stamped with the controller's
//! generation at issue time. Issuing another request (or closing) bumps the
//! generation, so a response that arrives late no longer matches and is
//! discarded instead of overwriting newer state.

/// A request in flight, stamped with the generation it was issued under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket<R> {
    generation: u64,
    pub request: R,
}

impl<R> Ticket<R> {
    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }
}

/// Outcome of handing a response back to a controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// The response was current and the controller state now reflects it.
    Applied,
    /// A newer request was issued (or the controller closed); nothing changed.
    Stale,
}

/// Monotonic generation counter.
#[derive(Debug, Clone, Default)]
pub struct Generation {
    current: u64,
}

impl Generation {
    /// Invalidate every outstanding ticket and stamp a new one.
    pub const fn issue<R>(&mut self, request: R) -> Ticket<R> {
        self.current = self.current.wrapping_add(1);
        Ticket {
            generation: self.current,
            request,
        }
    }

    /// Invalidate every outstanding ticket without issuing a new one.
    pub const fn invalidate(&mut self) {
        self.current = self.current.wrapping_add(1);
    }

    #[must_use]
    pub const fn is_current<R>(&self, ticket: &Ticket<R>) -> bool {
        ticket.generation == self.current
    }
}
