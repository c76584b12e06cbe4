//! Timer-backed debounce and throttle wrappers.
//!
//! The gating decisions live in `page::timing`; these wrappers supply the
//! clock (`performance.now()`, falling back to `Date.now()`) and the deferred
//! calls. Dropping a held `Timeout` cancels it.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use js_sys::Date;
use page::timing::{Debounce, ThrottleStep, TrailingThrottle};

fn now_ms() -> f64 {
    web_sys::window().and_then(|w| w.performance()).map_or_else(Date::now, |p| p.now())
}

/// Wrap `f` so it runs once, `wait_ms` after the last call of a burst.
pub fn debounce<F>(wait_ms: u32, f: F) -> impl FnMut()
where
    F: Fn() + 'static,
{
    let f = Rc::new(f);
    let gate = Rc::new(RefCell::new(Debounce::new(wait_ms)));
    let mut pending: Option<Timeout> = None;
    move || {
        gate.borrow_mut().call(now_ms());
        let f = Rc::clone(&f);
        let gate = Rc::clone(&gate);
        let next = Timeout::new(wait_ms, move || {
            let due = gate.borrow_mut().due(now_ms());
            if due {
                f();
            }
        });
        drop(pending.replace(next));
    }
}

/// Wrap `f` so it runs on the first call, then at most once per `limit_ms`,
/// with the last suppressed call delivered when the window reopens.
pub fn throttle_trailing<F>(limit_ms: u32, f: F) -> impl FnMut()
where
    F: Fn() + 'static,
{
    let f = Rc::new(f);
    let gate = Rc::new(RefCell::new(TrailingThrottle::new(limit_ms)));
    let mut flush: Option<Timeout> = None;
    move || {
        let step = gate.borrow_mut().call(now_ms());
        match step {
            ThrottleStep::Run => f(),
            ThrottleStep::Schedule { after_ms } => {
                let f = Rc::clone(&f);
                let gate = Rc::clone(&gate);
                let next = Timeout::new(after_ms, move || {
                    let owed = gate.borrow_mut().flush(now_ms());
                    if owed {
                        f();
                    }
                });
                drop(flush.replace(next));
            }
            ThrottleStep::Wait => {}
        }
    }
}
