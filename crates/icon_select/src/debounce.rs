//! Trailing-edge debouncing for high-frequency input callbacks.
//!
//! Every call arms a new ticket and schedules its payload after the quiescence window;
//! when the timer fires, the payload is applied only if no later call re-armed the gate
//! in the meantime.

use std::{cell::Cell, rc::Rc, time::Duration};

use leptos::{set_timeout, Callback};

#[derive(Debug, Clone, Default)]
/// Generation counter deciding which pending call survives a quiescence window.
pub struct DebounceGate {
    generation: Rc<Cell<u64>>,
}

impl DebounceGate {
    /// Supersedes every pending call and returns the ticket for a new one.
    pub fn arm(&self) -> u64 {
        let next = self.generation.get().wrapping_add(1);
        self.generation.set(next);
        next
    }

    /// Whether `ticket` belongs to the most recent call.
    pub fn is_current(&self, ticket: u64) -> bool {
        self.generation.get() == ticket
    }

    /// Drops every pending call.
    pub fn cancel(&self) {
        self.arm();
    }
}

/// Wraps `apply` so only the last call within `delay` of quiescence reaches it.
pub fn debounced<T: 'static>(delay: Duration, apply: impl Fn(T) + 'static) -> Callback<T> {
    debounce_with(move |task| set_timeout(task, delay), apply)
}

fn debounce_with<T: 'static>(
    schedule: impl Fn(Box<dyn FnOnce()>) + 'static,
    apply: impl Fn(T) + 'static,
) -> Callback<T> {
    let gate = DebounceGate::default();
    let apply = Rc::new(apply);
    Callback::new(move |payload: T| {
        let ticket = gate.arm();
        let gate = gate.clone();
        let apply = Rc::clone(&apply);
        schedule(Box::new(move || {
            if gate.is_current(ticket) {
                apply(payload);
            }
        }));
    })
}
