//! Session - run state and the single evolution timer
//!
//! ```text
//! Unstarted ──start──▶ Running ──stop──▶ Stopped
//!                         ▲                 │
//!                         └──────start──────┘
//! clear: any state ──▶ Stopped (board reset)
//! ```
//!
//! At most one periodic callback is ever registered: `start` while running
//! and `stop` while not running are no-ops.

use std::cell::{Ref, RefCell, RefMut};
use std::rc::Rc;

use crate::domain::cell::Cell;
use crate::simulation::LifeCore;

pub mod scheduler;

pub use scheduler::{IntervalScheduler, ManualScheduler, Scheduler};

type Listener = Rc<RefCell<dyn FnMut()>>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunState {
    Unstarted,
    Stopped,
    Running,
}

pub struct Session<S: Scheduler> {
    core: Rc<RefCell<LifeCore>>,
    scheduler: S,
    timer: Option<S::Handle>,
    state: RunState,
    listener: Rc<RefCell<Option<Listener>>>,
}

impl<S: Scheduler> Session<S> {
    pub fn new(core: LifeCore, scheduler: S) -> Self {
        Self {
            core: Rc::new(RefCell::new(core)),
            scheduler,
            timer: None,
            state: RunState::Unstarted,
            listener: Rc::new(RefCell::new(None)),
        }
    }

    pub fn state(&self) -> RunState { self.state }

    pub fn is_running(&self) -> bool { self.state == RunState::Running }

    pub fn core(&self) -> Ref<'_, LifeCore> {
        self.core.borrow()
    }

    pub fn core_mut(&self) -> RefMut<'_, LifeCore> {
        self.core.borrow_mut()
    }

    pub fn toggle_cell(&mut self, row: u32, col: u32) -> Option<Cell> {
        self.core.borrow_mut().toggle(row, col)
    }

    /// Begin periodic evolution. Returns `Ok(false)` if already running.
    pub fn start(&mut self) -> Result<bool, String> {
        if self.timer.is_some() {
            return Ok(false);
        }

        let tick_ms = self.core.borrow().config().tick_ms;
        let core = Rc::clone(&self.core);
        let listener = Rc::clone(&self.listener);
        let handle = self
            .scheduler
            .every(tick_ms, Box::new(move || run_tick(&core, &listener)))?;

        self.timer = Some(handle);
        self.state = RunState::Running;
        engine_log!("life: started (tick {}ms)", tick_ms);
        Ok(true)
    }

    /// Cancel periodic evolution. Returns `false` if nothing was running.
    pub fn stop(&mut self) -> bool {
        let Some(handle) = self.timer.take() else {
            return false;
        };

        self.scheduler.cancel(handle);
        self.state = RunState::Stopped;
        engine_log!("life: stopped at generation {}", self.core.borrow().generation());
        true
    }

    /// Stop (if running) and reset the board and counters
    pub fn clear(&mut self) {
        self.stop();
        self.core.borrow_mut().reset();
        self.state = RunState::Stopped;
    }

    /// One generation plus listener notification, exactly what each timer
    /// callback does
    pub fn tick(&mut self) {
        self.ticker().tick();
    }

    /// Detached tick entry point. Holders of a shared session (the wasm
    /// facade) take one, release their borrow, then tick, so the listener can
    /// borrow the session again.
    pub fn ticker(&self) -> Ticker {
        Ticker {
            core: Rc::clone(&self.core),
            listener: Rc::clone(&self.listener),
        }
    }

    /// Called after every generation, once the core is no longer borrowed,
    /// so the listener may read it back
    pub fn set_listener(&mut self, listener: impl FnMut() + 'static) {
        let listener: Listener = Rc::new(RefCell::new(listener));
        *self.listener.borrow_mut() = Some(listener);
    }

    pub fn clear_listener(&mut self) {
        *self.listener.borrow_mut() = None;
    }
}

impl<S: Scheduler> Drop for Session<S> {
    fn drop(&mut self) {
        if let Some(handle) = self.timer.take() {
            self.scheduler.cancel(handle);
        }
    }
}

pub struct Ticker {
    core: Rc<RefCell<LifeCore>>,
    listener: Rc<RefCell<Option<Listener>>>,
}

impl Ticker {
    pub fn tick(&self) {
        run_tick(&self.core, &self.listener);
    }
}

fn run_tick(core: &RefCell<LifeCore>, listener: &RefCell<Option<Listener>>) {
    core.borrow_mut().step();

    // Clone out of the slot so the listener may replace itself while running
    let current = listener.borrow().clone();
    if let Some(current) = current {
        // A listener that re-enters `tick` is not notified recursively
        if let Ok(mut f) = current.try_borrow_mut() {
            (&mut *f)();
        }
    }
}
