//! Injectable randomness for response selection.
//!
//! The knowledge base picks greetings and fallback responses from fixed
//! pools. Routing that choice through a port keeps the matcher itself pure
//! and lets tests pin the outcome with a seeded source.

/// Capability for picking one entry out of a fixed pool.
pub trait ResponsePicker: Send + Sync {
    /// Picks an index in `0..len`.
    ///
    /// `len` is always at least 1; the pools are non-empty by construction.
    fn pick(&self, len: usize) -> usize;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedPicker(usize);

    impl ResponsePicker for FixedPicker {
        fn pick(&self, len: usize) -> usize {
            self.0 % len
        }
    }

    #[test]
    fn picker_is_object_safe() {
        let picker: Box<dyn ResponsePicker> = Box::new(FixedPicker(3));
        assert_eq!(picker.pick(2), 1);
    }
}
