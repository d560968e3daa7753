//! Cancellable throttled resynchronization task
//!
//! Owns the browser timer side of [`marquee_core::ThrottleGate`]: `schedule`
//! asks the gate and either emits immediately or arms a trailing timeout,
//! `flush` bypasses the gate for interaction-critical updates, and `cancel`
//! drops the pending timeout so nothing fires after the player unmounts.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use marquee_core::{ThrottleDecision, ThrottleGate};
use yew::Callback;

struct Inner {
    gate: ThrottleGate,
    timer: Option<Timeout>,
}

/// A throttled, cancellable invocation of a single callback
pub struct ResyncThrottle {
    inner: Rc<RefCell<Inner>>,
    emit: Callback<()>,
}

impl ResyncThrottle {
    pub fn new(window_ms: f64, emit: Callback<()>) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                gate: ThrottleGate::new(window_ms),
                timer: None,
            })),
            emit,
        }
    }

    /// Request an invocation; bursts inside the window coalesce into one
    /// trailing run
    pub fn schedule(&self) {
        let decision = self.inner.borrow_mut().gate.request(now_ms());
        match decision {
            ThrottleDecision::Run => self.emit.emit(()),
            ThrottleDecision::Schedule(delay_ms) => {
                let inner = Rc::clone(&self.inner);
                let emit = self.emit.clone();
                let timeout = Timeout::new(delay_ms.ceil() as u32, move || {
                    {
                        let mut inner = inner.borrow_mut();
                        inner.gate.fired(now_ms());
                        inner.timer = None;
                    }
                    emit.emit(());
                });
                self.inner.borrow_mut().timer = Some(timeout);
            }
            ThrottleDecision::Coalesced => {}
        }
    }

    /// Invoke immediately, bypassing the window; any pending trailing run
    /// is dropped and the window restarts here
    pub fn flush(&self) {
        {
            let mut inner = self.inner.borrow_mut();
            inner.timer = None;
            inner.gate.force(now_ms());
        }
        self.emit.emit(());
    }

    /// Drop the pending invocation without running it. Called on teardown
    /// so no state update lands on a destroyed player.
    pub fn cancel(&self) {
        let mut inner = self.inner.borrow_mut();
        inner.timer = None;
        inner.gate.cancel();
    }

    /// True while a trailing run is armed
    pub fn is_pending(&self) -> bool {
        self.inner.borrow().gate.is_pending()
    }
}

impl Drop for ResyncThrottle {
    fn drop(&mut self) {
        self.cancel();
    }
}

fn now_ms() -> f64 {
    js_sys::Date::now()
}
