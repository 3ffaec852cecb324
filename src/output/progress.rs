//! Progress reporting for the leaf stage
//!
//! Purely observational: nothing the driver decides depends on it.

use std::time::{Duration, Instant};

/// Receives the leaf-stage work count and one tick per processed URL
pub trait Progress {
    /// Called once with the number of suburb-or-store URLs
    fn begin(&mut self, _total: usize) {}

    /// Called after each suburb-or-store URL, however many records it produced
    fn tick(&mut self) {}

    /// Called when the leaf stage is exhausted
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}

/// Logs progress through tracing every `interval` ticks
pub struct LogProgress {
    interval: usize,
    total: usize,
    done: usize,
    started: Option<Instant>,
}

impl LogProgress {
    pub fn new(interval: usize) -> Self {
        Self {
            interval: interval.max(1),
            total: 0,
            done: 0,
            started: None,
        }
    }

    /// Ticks processed so far
    #[cfg(test)]
    fn done(&self) -> usize {
        self.done
    }

    fn percent(&self) -> f64 {
        if self.total == 0 {
            return 100.0;
        }
        (self.done as f64 / self.total as f64) * 100.0
    }

    /// Time left at the current rate, None until the first tick
    fn eta(&self, elapsed: Duration) -> Option<Duration> {
        if self.done == 0 {
            return None;
        }
        let remaining = self.total.saturating_sub(self.done);
        let per_page = elapsed.as_secs_f64() / self.done as f64;
        Some(Duration::from_secs_f64(per_page * remaining as f64))
    }
}

impl Default for LogProgress {
    fn default() -> Self {
        Self::new(10)
    }
}

impl Progress for LogProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        self.done = 0;
        self.started = Some(Instant::now());
        tracing::info!("Scraping {} suburb or store URLs", total);
    }

    fn tick(&mut self) {
        self.done += 1;

        if self.done % self.interval == 0 || self.done == self.total {
            let elapsed = self.started.map(|s| s.elapsed()).unwrap_or_default();
            let rate = self.done as f64 / elapsed.as_secs_f64().max(f64::EPSILON);
            let eta = self.eta(elapsed).unwrap_or_default();
            tracing::info!(
                "Progress: {}/{} ({:.0}%), {:.2} pages/sec, ETA {}s",
                self.done,
                self.total,
                self.percent(),
                rate,
                eta.as_secs()
            );
        }
    }

    fn finish(&mut self) {
        let elapsed = self.started.map(|s| s.elapsed()).unwrap_or_default();
        tracing::info!("Scraped {} URLs in {:?}", self.done, elapsed);
    }
}
