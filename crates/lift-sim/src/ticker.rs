//! Background driver that calls [`Sim::tick`] on a fixed cadence.

use std::any::Any;
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use lift_core::LiftResult;
use lift_route::TargetSelector;
use tracing::{debug, error, info};

use crate::{NoopObserver, Sim, SimObserver};

/// Owns a thread that ticks a shared [`Sim`] every `interval`.
///
/// A tick that returns an error or panics is logged and skipped; the next
/// tick still runs.  Stopping takes effect between ticks, never in the
/// middle of one.  Dropping the ticker stops it.
pub struct Ticker<O: SimObserver + Send + 'static = NoopObserver> {
    stop:   Arc<AtomicBool>,
    ticks:  Arc<AtomicU64>,
    handle: Option<JoinHandle<O>>,
}

impl Ticker<NoopObserver> {
    /// Start ticking `sim` every `interval`.
    pub fn spawn<S>(sim: Arc<Sim<S>>, interval: Duration) -> LiftResult<Self>
    where
        S: TargetSelector + Clone + 'static,
    {
        Self::spawn_with(sim, interval, NoopObserver)
    }
}

impl<O: SimObserver + Send + 'static> Ticker<O> {
    /// Start ticking `sim` every `interval`, reporting to `observer`.  The
    /// observer is handed back by [`stop`][Self::stop].
    pub fn spawn_with<S>(sim: Arc<Sim<S>>, interval: Duration, mut observer: O) -> LiftResult<Self>
    where
        S: TargetSelector + Clone + 'static,
    {
        let stop  = Arc::new(AtomicBool::new(false));
        let ticks = Arc::new(AtomicU64::new(0));
        let (thread_stop, thread_ticks) = (Arc::clone(&stop), Arc::clone(&ticks));

        let handle = thread::Builder::new().name("lift-ticker".into()).spawn(move || {
            info!(interval_ms = interval.as_millis() as u64, "ticker started");
            let mut next = Instant::now() + interval;
            while !thread_stop.load(Ordering::Acquire) {
                match catch_unwind(AssertUnwindSafe(|| sim.tick_with(&mut observer))) {
                    Ok(Ok(report)) => {
                        thread_ticks.fetch_add(1, Ordering::Relaxed);
                        debug!(tick = %report.tick, moved = report.moved, serviced = report.serviced, "tick");
                    }
                    Ok(Err(e)) => error!(error = %e, "tick failed; continuing"),
                    Err(panic) => error!(panic = panic_message(&*panic), "tick panicked; continuing"),
                }
                sleep_until(next, &thread_stop);
                // An overrunning tick delays the schedule rather than bursting.
                next = (next + interval).max(Instant::now());
            }
            info!(ticks = thread_ticks.load(Ordering::Relaxed), "ticker stopped");
            observer
        })?;

        Ok(Self { stop, ticks, handle: Some(handle) })
    }

    /// Ticks completed successfully so far.
    pub fn ticks(&self) -> u64 {
        self.ticks.load(Ordering::Relaxed)
    }

    /// Stop after the current tick and return the observer.  `None` if the
    /// thread died outside a tick (an observer hook panicked in a way the
    /// tick boundary could not catch).
    pub fn stop(mut self) -> Option<O> {
        self.shutdown()
    }

    fn shutdown(&mut self) -> Option<O> {
        self.stop.store(true, Ordering::Release);
        let handle = self.handle.take()?;
        handle.thread().unpark();
        handle.join().ok()
    }
}

impl<O: SimObserver + Send + 'static> Drop for Ticker<O> {
    fn drop(&mut self) {
        self.shutdown();
    }
}

/// Park until `deadline` or until `stop` is raised.
fn sleep_until(deadline: Instant, stop: &AtomicBool) {
    loop {
        if stop.load(Ordering::Acquire) {
            return;
        }
        let now = Instant::now();
        if now >= deadline {
            return;
        }
        thread::park_timeout(deadline - now);
    }
}

fn panic_message(panic: &(dyn Any + Send)) -> &str {
    panic
        .downcast_ref::<&str>()
        .copied()
        .or_else(|| panic.downcast_ref::<String>().map(String::as_str))
        .unwrap_or("non-string panic payload")
}
