//! Random response pickers.
//!
//! Production wiring uses the thread-local RNG; tests use the seeded picker
//! so randomized pools become deterministic.

use std::sync::Mutex;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::ports::ResponsePicker;

/// Picker backed by the thread-local RNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRngPicker;

impl ThreadRngPicker {
    pub fn new() -> Self {
        Self
    }
}

impl ResponsePicker for ThreadRngPicker {
    fn pick(&self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }
}

/// Picker backed by a seeded RNG; same seed, same pick sequence.
#[derive(Debug)]
pub struct SeededPicker {
    rng: Mutex<StdRng>,
}

impl SeededPicker {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl ResponsePicker for SeededPicker {
    fn pick(&self, len: usize) -> usize {
        self.rng.lock().expect("picker lock poisoned").gen_range(0..len)
    }
}
