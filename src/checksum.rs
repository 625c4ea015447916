/// Running checksum that keeps every benchmark loop observable.
///
/// The same fold is applied at every level of the harness: first bytes inside
/// the timed loop, sink values after each trial, and measurement checksums
/// after each round. Because every printed number is data-dependent on every
/// iteration, the optimizer cannot eliminate the work under measurement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Checksum(i32);

impl Checksum {
    pub fn new() -> Self {
        Checksum(127)
    }

    /// Folds `v` into the checksum: `value %= v; value += 15`.
    ///
    /// `v` must be positive. The harness only ever folds first bytes of the
    /// non-empty ASCII corpus words or prior checksum values, which are at
    /// least 15 after any fold.
    pub fn fold(&mut self, v: i32) {
        debug_assert!(v > 0, "checksum fold requires a positive value");
        self.0 %= v;
        self.0 += 15;
    }

    pub fn value(&self) -> i32 {
        self.0
    }
}

impl Default for Checksum {
    fn default() -> Self {
        Checksum::new()
    }
}
