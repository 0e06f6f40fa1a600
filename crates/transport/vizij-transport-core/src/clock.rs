//! Clock capability for the transport.
//!
//! The integrator never reads ambient time directly; it asks a [`Clock`]. Native
//! callers use [`SystemClock`], tests drive a [`ManualClock`], and the wasm adapter
//! supplies its own JS-backed clock.

use std::cell::Cell;

use instant::Instant;
use once_cell::sync::Lazy;

/// Time representation in milliseconds.
pub type RawTime = f64;

/// Process-wide origin so every `SystemClock` shares one timebase.
static ORIGIN: Lazy<Instant> = Lazy::new(Instant::now);

/// A source of wall-clock milliseconds.
pub trait Clock {
    fn now(&self) -> RawTime;
}

impl<C: Clock + ?Sized> Clock for &C {
    #[inline]
    fn now(&self) -> RawTime {
        (**self).now()
    }
}

/// Monotonic milliseconds since the first clock read in this process.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    #[inline]
    fn now(&self) -> RawTime {
        ORIGIN.elapsed().as_secs_f64() * 1000.0
    }
}

/// Returns the current time in milliseconds.
#[inline]
pub fn now() -> RawTime {
    SystemClock.now()
}

/// Hand-driven clock for deterministic stepping.
#[derive(Debug, Default)]
pub struct ManualClock {
    ms: Cell<RawTime>,
}

impl ManualClock {
    pub fn new(start: RawTime) -> Self {
        Self {
            ms: Cell::new(start),
        }
    }

    /// Jump to an absolute time.
    pub fn set(&self, ms: RawTime) {
        self.ms.set(ms);
    }

    /// Move forward by `ms` (negative values move backward).
    pub fn advance(&self, ms: RawTime) {
        self.ms.set(self.ms.get() + ms);
    }
}

impl Clock for ManualClock {
    #[inline]
    fn now(&self) -> RawTime {
        self.ms.get()
    }
}
