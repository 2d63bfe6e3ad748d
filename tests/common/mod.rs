//! Common test utilities for integration tests.

#![allow(dead_code)]

pub mod harness;

use slint_node_canvas::ContextMenuRequest;
use std::cell::RefCell;
use std::rc::Rc;

/// Tracks host-facing callback invocations for testing.
#[derive(Default, Clone)]
pub struct CallbackTracker {
    /// Every context menu request, in order.
    pub context_requests: Rc<RefCell<Vec<ContextMenuRequest>>>,
    /// Count of redraw notifications returned by event handling.
    pub redraws: Rc<RefCell<usize>>,
}

impl CallbackTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear all recorded callbacks.
    pub fn clear(&self) {
        self.context_requests.borrow_mut().clear();
        *self.redraws.borrow_mut() = 0;
    }

    pub fn last_context_request(&self) -> Option<ContextMenuRequest> {
        self.context_requests.borrow().last().copied()
    }
}
