//! Periodic callback scheduling
//!
//! The session only needs "call this every P ms" and "stop calling it". In
//! the browser that is `setInterval`/`clearInterval`; on the host and in
//! tests it is a timer list fired by hand.

use std::cell::{Cell as StdCell, RefCell};
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

pub type Tick = Box<dyn FnMut()>;

pub trait Scheduler {
    type Handle;

    /// Register `tick` to run every `period_ms`. Each returned handle is one
    /// active periodic callback until passed to `cancel`.
    fn every(&mut self, period_ms: u32, tick: Tick) -> Result<Self::Handle, String>;

    fn cancel(&mut self, handle: Self::Handle);
}

// === Browser ===

pub struct IntervalHandle {
    id: i32,
    closure: Closure<dyn FnMut()>,
}

/// Closures cancelled while possibly still on the stack.
///
/// `in_flight` is raised for the duration of every tick. Parked values are
/// only freed once it is back to zero.
struct Retired<T> {
    parked: Vec<T>,
    in_flight: Rc<StdCell<u32>>,
}

impl<T> Default for Retired<T> {
    fn default() -> Self {
        Self {
            parked: Vec::new(),
            in_flight: Rc::new(StdCell::new(0)),
        }
    }
}

impl<T> Retired<T> {
    fn park(&mut self, item: T) {
        self.parked.push(item);
        self.purge();
    }

    fn purge(&mut self) {
        if self.in_flight.get() == 0 {
            self.parked.clear();
        }
    }

    /// Final release: frees what is idle and hands back whatever a running
    /// tick still needs, so the caller can leak it instead.
    fn take_busy(&mut self) -> Vec<T> {
        if self.in_flight.get() > 0 {
            std::mem::take(&mut self.parked)
        } else {
            self.parked.clear();
            Vec::new()
        }
    }
}

/// `window.setInterval` backed scheduler.
///
/// A cancelled closure may be the one currently running (stop called from
/// inside the tick listener), and freeing a running closure is fatal. Cancelled
/// closures are parked and only freed when no tick is in flight. If the
/// scheduler itself is dropped mid-tick (`free()` from inside `onTick`), the
/// parked closures are leaked with `Closure::forget`.
#[derive(Default)]
pub struct IntervalScheduler {
    retired: Retired<Closure<dyn FnMut()>>,
}

impl IntervalScheduler {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Drop for IntervalScheduler {
    fn drop(&mut self) {
        for closure in self.retired.take_busy() {
            closure.forget();
        }
    }
}

impl Scheduler for IntervalScheduler {
    type Handle = IntervalHandle;

    fn every(&mut self, period_ms: u32, mut tick: Tick) -> Result<IntervalHandle, String> {
        self.retired.purge();

        let window = web_sys::window().ok_or_else(|| "no global `window` exists".to_string())?;

        let in_flight = Rc::clone(&self.retired.in_flight);
        let closure = Closure::<dyn FnMut()>::new(move || {
            in_flight.set(in_flight.get() + 1);
            tick();
            in_flight.set(in_flight.get() - 1);
        });

        let id = window
            .set_interval_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                period_ms.min(i32::MAX as u32) as i32,
            )
            .map_err(|e| format!("setInterval failed: {:?}", e))?;

        Ok(IntervalHandle { id, closure })
    }

    fn cancel(&mut self, handle: IntervalHandle) {
        if let Some(window) = web_sys::window() {
            window.clear_interval_with_handle(handle.id);
        }
        self.retired.park(handle.closure);
    }
}

// === Host / tests ===

struct ManualTimer {
    id: u32,
    period_ms: u32,
    tick: Rc<RefCell<Tick>>,
}

#[derive(Default)]
struct ManualTimers {
    next_id: u32,
    active: Vec<ManualTimer>,
}

/// Deterministic scheduler: nothing runs until `fire` is called.
///
/// Clones share the same timer list, so a test can keep one clone and hand
/// the other to a `Session`.
#[derive(Clone, Default)]
pub struct ManualScheduler {
    timers: Rc<RefCell<ManualTimers>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of registered periodic callbacks
    pub fn active_count(&self) -> usize {
        self.timers.borrow().active.len()
    }

    pub fn periods(&self) -> Vec<u32> {
        self.timers.borrow().active.iter().map(|t| t.period_ms).collect()
    }

    /// Run every active callback once, as if one period elapsed. Returns the
    /// number of callbacks run.
    pub fn fire(&self) -> usize {
        // Snapshot first so callbacks may cancel/register without a borrow clash
        let ticks: Vec<Rc<RefCell<Tick>>> = self
            .timers
            .borrow()
            .active
            .iter()
            .map(|t| Rc::clone(&t.tick))
            .collect();

        for tick in &ticks {
            (&mut *tick.borrow_mut())();
        }
        ticks.len()
    }
}

impl Scheduler for ManualScheduler {
    type Handle = u32;

    fn every(&mut self, period_ms: u32, tick: Tick) -> Result<u32, String> {
        let mut timers = self.timers.borrow_mut();
        let id = timers.next_id;
        timers.next_id += 1;
        timers.active.push(ManualTimer {
            id,
            period_ms,
            tick: Rc::new(RefCell::new(tick)),
        });
        Ok(id)
    }

    fn cancel(&mut self, handle: u32) {
        self.timers.borrow_mut().active.retain(|t| t.id != handle);
    }
}
