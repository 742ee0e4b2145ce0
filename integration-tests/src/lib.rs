//! Shared fixtures for the Carton integration tests.

use std::cell::Cell;

/// Counts how many times the closures it hands out are called.
///
/// Used to verify that combinators call their closures exactly as often as
/// promised: never on the short-circuiting arm, at most once otherwise.
#[derive(Debug, Default)]
pub struct CallCounter {
    calls: Cell<usize>,
}

impl CallCounter {
    /// Creates a counter with no recorded calls.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of calls recorded so far.
    #[must_use]
    pub fn calls(&self) -> usize {
        self.calls.get()
    }

    /// Wraps a one-argument closure so each call is recorded.
    pub fn track<A, R>(&self, f: impl Fn(A) -> R) -> impl Fn(A) -> R {
        move |arg| {
            self.record();
            f(arg)
        }
    }

    /// Wraps a zero-argument closure so each call is recorded.
    pub fn track_thunk<R>(&self, f: impl Fn() -> R) -> impl Fn() -> R {
        move || {
            self.record();
            f()
        }
    }

    fn record(&self) {
        self.calls.set(self.calls.get() + 1);
    }
}
