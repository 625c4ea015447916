use std::borrow::Cow;

use bytes::Bytes;

use crate::checksum::Checksum;

/// Stand-in for real work on string contents: read the first byte and fold
/// it into a running checksum.
///
/// One consume method exists per passing style under measurement. Their
/// bodies are identical; the parameter type is the point. They are
/// `inline(never)` so each call actually crosses a function boundary with
/// the declared calling convention.
pub struct Sink {
    checksum: Checksum,
}

impl Sink {
    pub fn new() -> Self {
        Sink {
            checksum: Checksum::new(),
        }
    }

    pub fn value(&self) -> i32 {
        self.checksum.value()
    }

    fn absorb(&mut self, byte: u8) {
        self.checksum.fold(i32::from(byte));
    }

    // `&String` rather than `&str` is the passing style under measurement.
    #[allow(clippy::ptr_arg)]
    #[inline(never)]
    pub fn consume_string_ref(&mut self, s: &String) {
        self.absorb(s.as_bytes()[0]);
    }

    #[inline(never)]
    pub fn consume_str(&mut self, s: &str) {
        self.absorb(s.as_bytes()[0]);
    }

    #[inline(never)]
    pub fn consume_cow(&mut self, s: Cow<'_, str>) {
        self.absorb(s.as_bytes()[0]);
    }

    #[inline(never)]
    pub fn consume_owned(&mut self, s: String) {
        self.absorb(s.as_bytes()[0]);
    }

    #[inline(never)]
    pub fn consume_shared(&mut self, s: Bytes) {
        self.absorb(s[0]);
    }
}

impl Default for Sink {
    fn default() -> Self {
        Sink::new()
    }
}
