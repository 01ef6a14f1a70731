//! Deterministic timer registry driving the simulation
//!
//! Mirrors the host timer contract the step functions are written against:
//! a callback is registered once, runs when due, and returns the delay in
//! seconds until it runs again. Dispatch is strictly sequential; each
//! callback gets exclusive `&mut` access to the shared context, so nothing
//! ever runs concurrently with it.
//!
//! The clock is simulated, not wall time: `run_next` jumps straight to the
//! earliest due callback no matter how long the previous one took. Equal
//! due times dispatch in registration order.

use crate::error::Result;

type Callback<Ctx> = Box<dyn FnMut(&mut Ctx) -> Result<f64>>;

struct Timer<Ctx> {
    callback: Callback<Ctx>,
    due: f64, // next dispatch time on the simulated clock
}

pub struct Timers<Ctx> {
    timers: Vec<Timer<Ctx>>,
    clock: f64, // simulated seconds since the registry started
}

impl<Ctx> Timers<Ctx> {
    pub fn new() -> Self {
        Self {
            timers: Vec::new(),
            clock: 0.0,
        }
    }

    /// Register a callback, due immediately
    ///
    /// The returned value is the delay until the next invocation; step
    /// callbacks always return `TICK`. A non-positive delay re-runs the
    /// callback at the same clock value.
    pub fn register(&mut self, callback: impl FnMut(&mut Ctx) -> Result<f64> + 'static) {
        self.timers.push(Timer {
            callback: Box::new(callback),
            due: self.clock,
        });
    }

    pub fn clock(&self) -> f64 {
        self.clock
    }

    pub fn len(&self) -> usize {
        self.timers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timers.is_empty()
    }

    /// Index and due time of the earliest timer, ties to the lowest index
    fn next_due(&self) -> Option<(usize, f64)> {
        let mut best: Option<(usize, f64)> = None;
        for (i, timer) in self.timers.iter().enumerate() {
            match best {
                Some((_, due)) if due <= timer.due => {}
                _ => best = Some((i, timer.due)),
            }
        }
        best
    }

    /// Dispatch the earliest due callback once, advancing the clock to it
    ///
    /// Returns false when nothing is registered. A callback error aborts
    /// immediately and propagates.
    pub fn run_next(&mut self, ctx: &mut Ctx) -> Result<bool> {
        let (i, due) = match self.next_due() {
            Some(next) => next,
            None => return Ok(false),
        };

        self.clock = due;
        let delay = (self.timers[i].callback)(ctx)?;
        self.timers[i].due = due + delay;

        Ok(true)
    }

    /// Run callbacks in due order until the next would pass `t_end`
    ///
    /// Returns the number of dispatches
    pub fn run_until(&mut self, ctx: &mut Ctx, t_end: f64) -> Result<u64> {
        let mut dispatched = 0;

        while let Some((_, due)) = self.next_due() {
            if due > t_end {
                break;
            }
            self.run_next(ctx)?;
            dispatched += 1;
        }

        Ok(dispatched)
    }
}
