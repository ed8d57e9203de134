//! Scoped elapsed-time measurement
//!
//! Each measurement owns its own start instant; there is no shared timer.

use std::time::{Duration, Instant};

/// Run `f` and return its result with the wall-clock time it took.
///
/// # Examples
///
/// ```
/// use pargraph::util::timer::measure;
///
/// let (sum, elapsed) = measure(|| (0..100u64).sum::<u64>());
/// assert_eq!(sum, 4950);
/// assert!(elapsed.as_secs() < 60);
/// ```
pub fn measure<T, F>(f: F) -> (T, Duration)
where
    F: FnOnce() -> T,
{
    let stopwatch = Stopwatch::start();
    let value = f();
    (value, stopwatch.elapsed())
}

/// A started clock.
#[derive(Debug, Clone, Copy)]
pub struct Stopwatch {
    started: Instant,
}

impl Stopwatch {
    /// Start measuring now.
    #[inline]
    pub fn start() -> Self {
        Self {
            started: Instant::now(),
        }
    }

    /// Time since [`Stopwatch::start`].
    #[inline]
    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }
}

/// Whole milliseconds, the unit of the text report.
#[inline]
pub fn as_millis(duration: Duration) -> u128 {
    duration.as_millis()
}
