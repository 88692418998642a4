//! Progress reporting for chunk counting.
//!
//! Workers add consumed bytes to a shared atomic counter. The reporter turns
//! the counter into a percentage and emits it through a callback whenever it
//! advances by at least one step. Emission is serialized by a lock that is
//! only tried, never waited on, from worker threads. Emitted values never
//! decrease, and 100% is emitted exactly once, by `finish`.

use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Mutex;

/// Smallest percentage change worth emitting, in tenths of a percent.
const STEP_PERMILLE: u64 = 1;

type Callback = Box<dyn Fn(f64) + Send + Sync>;

/// Thread-safe byte progress tracker.
pub struct ProgressReporter {
    /// Bytes consumed by all workers
    consumed: AtomicU64,
    /// Total input size in bytes
    total: u64,
    /// Last emitted value in tenths of a percent
    last_emitted: Mutex<u64>,
    /// Set once 100% has been emitted
    finished: AtomicBool,
    /// Receives percentage updates
    callback: Option<Callback>,
}

impl ProgressReporter {
    /// Create a silent reporter (tracks bytes, emits nothing).
    pub fn new(total: u64) -> Self {
        Self {
            consumed: AtomicU64::new(0),
            total,
            last_emitted: Mutex::new(0),
            finished: AtomicBool::new(false),
            callback: None,
        }
    }

    /// Create a reporter that calls `callback` with each new percentage.
    pub fn with_callback<F>(total: u64, callback: F) -> Self
    where
        F: Fn(f64) + Send + Sync + 'static,
    {
        Self {
            callback: Some(Box::new(callback)),
            ..Self::new(total)
        }
    }

    /// Create a reporter that prints `Progress: NN.N%` to stderr.
    pub fn stderr(total: u64) -> Self {
        Self::with_callback(total, |pct| {
            if pct >= 100.0 {
                eprintln!("\rProgress: {:.1}%", pct);
            } else {
                eprint!("\rProgress: {:.1}%", pct);
                let _ = io::stderr().flush();
            }
        })
    }

    /// Record `bytes` more input as consumed.
    pub fn advance(&self, bytes: u64) {
        let consumed = self.consumed.fetch_add(bytes, Ordering::Relaxed) + bytes;
        let permille = self.permille_of(consumed).min(999);

        // Another thread is emitting; its value or a later one will show.
        let Ok(mut last) = self.last_emitted.try_lock() else {
            return;
        };
        if permille >= *last + STEP_PERMILLE {
            *last = permille;
            self.emit(permille as f64 / 10.0);
        }
    }

    /// Emit 100%. Later calls do nothing.
    pub fn finish(&self) {
        if self
            .finished
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Relaxed)
            .is_ok()
        {
            let mut last = self
                .last_emitted
                .lock()
                .unwrap_or_else(|poisoned| poisoned.into_inner());
            *last = 1000;
            self.emit(100.0);
        }
    }

    /// Current (consumed, total) in bytes.
    pub fn get_progress(&self) -> (u64, u64) {
        (self.consumed.load(Ordering::Relaxed), self.total)
    }

    fn permille_of(&self, consumed: u64) -> u64 {
        if self.total == 0 {
            return 0;
        }
        (consumed.min(self.total) as u128 * 1000 / self.total as u128) as u64
    }

    fn emit(&self, pct: f64) {
        if let Some(ref callback) = self.callback {
            callback(pct);
        }
    }
}

impl std::fmt::Debug for ProgressReporter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProgressReporter")
            .field("consumed", &self.consumed.load(Ordering::Relaxed))
            .field("total", &self.total)
            .finish()
    }
}
