//! Host side driving of a grid on a repeating timer.
//!
//! The grid knows nothing about time. A `Stepper` owns a timer thread that locks a shared grid
//! once per tick and calls `Grid::step` to completion before waiting for the next tick, so
//! generations never overlap.

use log::{debug, error, info};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::sync::{Arc, Mutex, MutexGuard, TryLockError};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crate::grid::Grid;
use crate::region::ChangeRegion;

// How often a tick waiting on a locked grid checks for a stop request.
const LOCK_RETRY_INTERVAL: Duration = Duration::from_millis(1);

struct RunningTimer {
    stop_sender: Sender<()>,
    handle: JoinHandle<()>,
}

/// A cancellable repeating timer that advances a shared grid one generation per tick.
pub struct Stepper {
    interval: Duration,
    timer: Option<RunningTimer>,
}

impl Stepper {
    pub fn new(interval: Duration) -> Stepper {
        Stepper {
            interval,
            timer: None,
        }
    }

    #[inline]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Takes effect the next time the stepper is started.
    pub fn set_interval(&mut self, interval: Duration) {
        self.interval = interval;
    }

    /// False once the timer has been stopped, or has ended by itself on a poisoned grid lock.
    #[inline]
    pub fn is_running(&self) -> bool {
        self.timer.as_ref().map_or(false, |timer| !timer.handle.is_finished())
    }

    /// Start stepping `grid` every interval, handing each generation's change region to
    /// `on_step` while the grid is still locked.
    ///
    /// A stepper that is already running is stopped first.
    pub fn start<F>(&mut self, grid: Arc<Mutex<Grid>>, mut on_step: F)
        where F: FnMut(&Grid, ChangeRegion) + Send + 'static
    {
        self.stop();

        let interval = self.interval;
        let (stop_sender, stop_receiver) = mpsc::channel::<()>();
        let handle = thread::spawn(move || {
            while !stop_requested(&stop_receiver, interval) {
                match wait_for_grid(&grid, &stop_receiver) {
                    Some(mut guard) => {
                        let region = guard.step();
                        on_step(&*guard, region);
                    }
                    None => break,
                }
            }
            debug!("Step timer finished");
        });

        info!("Started stepping every {:?}", interval);
        self.timer = Some(RunningTimer {
            stop_sender,
            handle,
        });
    }

    /// Cancel the timer and wait for any generation in progress to finish.
    /// Does nothing if the stepper is not running.
    pub fn stop(&mut self) {
        if let Some(timer) = self.timer.take() {
            // The receiver is gone if the timer already ended by itself.
            let _ = timer.stop_sender.send(());
            if timer.handle.join().is_err() {
                error!("Step timer thread panicked");
            }
            info!("Stopped stepping");
        }
    }
}

/// Waits up to `timeout` for a stop request. A dropped stepper counts as one.
fn stop_requested(stop_receiver: &Receiver<()>, timeout: Duration) -> bool {
    match stop_receiver.recv_timeout(timeout) {
        Err(RecvTimeoutError::Timeout) => false,
        Ok(()) | Err(RecvTimeoutError::Disconnected) => true,
    }
}

/// Lock the grid for one tick, giving up if a stop is requested while the host holds the lock
/// or if the lock is poisoned.
fn wait_for_grid<'a>(grid: &'a Mutex<Grid>,
                     stop_receiver: &Receiver<()>)
                     -> Option<MutexGuard<'a, Grid>> {
    loop {
        match grid.try_lock() {
            Ok(guard) => return Some(guard),
            Err(TryLockError::WouldBlock) => {
                if stop_requested(stop_receiver, LOCK_RETRY_INTERVAL) {
                    return None;
                }
            }
            Err(TryLockError::Poisoned(_)) => {
                error!("Grid lock poisoned, stopping the step timer");
                return None;
            }
        }
    }
}

impl Drop for Stepper {
    fn drop(&mut self) {
        self.stop();
    }
}
