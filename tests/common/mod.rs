#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// A value that counts how often it (or any of its clones) has been dropped.
#[derive(Debug, Clone)]
pub struct Tracked {
    pub value: f64,
    drops: Arc<AtomicUsize>,
}

impl Tracked {
    pub fn new(value: f64) -> (Self, DropCount) {
        let drops = Arc::new(AtomicUsize::new(0));
        (Self { value, drops: Arc::clone(&drops) }, DropCount(drops))
    }
}

impl Drop for Tracked {
    fn drop(&mut self) {
        self.drops.fetch_add(1, Ordering::SeqCst);
    }
}

/// The observing end of a [`Tracked`].
#[derive(Debug, Clone)]
pub struct DropCount(Arc<AtomicUsize>);

impl DropCount {
    pub fn get(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }
}

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
