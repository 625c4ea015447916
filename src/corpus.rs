use bytes::Bytes;

/// The words every benchmark loops over. Six short greetings, so successive
/// iterations touch different elements and the data stays out of the
/// optimizer's reach.
pub const WORDS: [&str; 6] = ["Hello", "World", "Guten", "Morgen", "Dobro", "jutro"];

/// The same six words held three ways: heap-owned strings, static slices,
/// and refcounted shared buffers.
pub struct Corpus {
    pub owned: [String; 6],
    pub slices: [&'static str; 6],
    pub shared: [Bytes; 6],
}

impl Corpus {
    pub fn greetings() -> Self {
        Corpus {
            owned: WORDS.map(String::from),
            slices: WORDS,
            shared: WORDS.map(|w| Bytes::from_static(w.as_bytes())),
        }
    }
}

/// Wraparound indexing used by every benchmark loop.
#[inline]
pub fn pick<T>(pool: &[T], i: usize) -> &T {
    &pool[i % pool.len()]
}
