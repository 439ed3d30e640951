use std::time::Instant;

/// Monotonic time source, injectable so report timing is testable.
pub trait Clock {
    /// Seconds since an arbitrary fixed origin. Only differences are
    /// meaningful.
    fn monotonic_secs(&self) -> f64;
}

/// Real clock backed by `Instant`.
#[derive(Debug, Clone)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn monotonic_secs(&self) -> f64 {
        self.origin.elapsed().as_secs_f64()
    }
}
