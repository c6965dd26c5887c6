//! Per-carrier periodic state-advancement task
//!
//! One background thread per carrier: a fixed initial delay, then a fixed
//! interval between ticks. Because the thread is the only executor, at most
//! one tick is ever in flight; a long tick delays the next, never overlaps
//! it. Shutdown is cooperative: a stop flag under its own small mutex plus
//! a condvar, so the sleeping thread wakes immediately and a tick already
//! holding the carrier lock finishes undisturbed.

use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use log::{debug, info, trace};
use parking_lot::{Condvar, Mutex};

use crate::carrier::{advance_assignments, CarrierState};
use crate::config::SchedulerConfig;

/// Handle to a running scheduler thread
pub(crate) struct Scheduler {
    signal: Arc<(Mutex<bool>, Condvar)>,
    handle: Option<JoinHandle<()>>,
}

impl Scheduler {
    /// Spawn the periodic task for `carrier` over the shared state
    pub(crate) fn start(
        carrier: String,
        state: Arc<Mutex<CarrierState>>,
        config: &SchedulerConfig,
    ) -> Self {
        let signal = Arc::new((Mutex::new(false), Condvar::new()));
        let thread_signal = Arc::clone(&signal);
        let initial_delay = Duration::from_millis(config.initial_delay_ms);
        let interval = Duration::from_millis(config.interval_ms);
        debug!(
            "carrier {carrier}: scheduler started (initial delay {initial_delay:?}, interval {interval:?})"
        );

        let handle = thread::spawn(move || {
            let (stop, condvar) = &*thread_signal;
            let mut wait = initial_delay;
            loop {
                {
                    let mut stopped = stop.lock();
                    if !*stopped {
                        let _ = condvar.wait_for(&mut stopped, wait);
                    }
                    if *stopped {
                        break;
                    }
                }
                // The stop lock is released before the tick takes the
                // carrier lock, so shutdown never waits on a tick.
                let advanced = {
                    let mut state = state.lock();
                    advance_assignments(&mut state)
                };
                trace!("carrier {carrier}: tick advanced {advanced} package(s)");
                wait = interval;
            }
            debug!("carrier {carrier}: scheduler stopped");
        });

        Self {
            signal,
            handle: Some(handle),
        }
    }

    /// Stop future ticks
    ///
    /// Idempotent; returns immediately without waiting for an in-flight
    /// tick to finish.
    pub(crate) fn shutdown(&self) {
        let (stop, condvar) = &*self.signal;
        let mut stopped = stop.lock();
        if !*stopped {
            *stopped = true;
            condvar.notify_all();
            info!("scheduler shutdown requested");
        }
    }
}

impl Drop for Scheduler {
    fn drop(&mut self) {
        self.shutdown();
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}
