use rand::Rng;

/// Uniform-draw capability the simulator pulls its noise from.
///
/// Injected rather than taken from a global so tests can substitute a
/// deterministic source, and so a concurrent server never shares one
/// generator's internal state across requests.
pub trait RandomSource {
    /// A uniform draw in `[lo, hi)`.
    fn uniform(&mut self, lo: f64, hi: f64) -> f64;
}

/// Production source backed by the thread-local generator.
#[derive(Debug, Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn uniform(&mut self, lo: f64, hi: f64) -> f64 {
        rand::thread_rng().gen_range(lo..hi)
    }
}

/// Deterministic source that always returns the midpoint of the requested
/// range. With this source the simulator is reproducible, which is what the
/// exact-value tests rely on.
#[derive(Debug, Default)]
pub struct Midpoint;

impl RandomSource for Midpoint {
    fn uniform(&mut self, lo: f64, hi: f64) -> f64 {
        (lo + hi) / 2.0
    }
}
