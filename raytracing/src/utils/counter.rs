use std::{
    collections::HashMap,
    sync::{
        atomic::{AtomicU64, Ordering},
        Arc, Mutex, MutexGuard,
    },
};

pub struct Counter {
    atomic: AtomicU64,
}

impl Counter {
    pub const fn new() -> Self {
        Self {
            atomic: AtomicU64::new(0),
        }
    }
    pub fn inc(&self) {
        self.atomic.fetch_add(1, Ordering::Relaxed); // Adding one is associative and commutative
    }
    pub fn value(&self) -> u64 {
        self.atomic.load(Ordering::Acquire)
    }
}

impl Default for Counter {
    fn default() -> Self {
        Self::new()
    }
}

lazy_static::lazy_static! {
    pub static ref __COUNTERS: Mutex<HashMap<&'static str, Arc<Counter>>> = Mutex::new(HashMap::new());
}

/// A panic while holding the registry cannot leave it half-updated, so poisoning is ignored
pub fn counters() -> MutexGuard<'static, HashMap<&'static str, Arc<Counter>>> {
    __COUNTERS.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Register `descr` if needed and returns its counter
pub fn insert_counter(descr: &'static str) -> Arc<Counter> {
    counters().entry(descr).or_default().clone()
}

pub fn report_counters() {
    let counters = counters();
    let mut entries: Vec<_> = counters.iter().collect();
    entries.sort_by_key(|(name, _)| **name);
    for (counter_name, counter) in entries {
        log::log!(target: "counter_report", log::Level::Info, "{}: {} ", counter_name, counter.value())
    }
}

/// Count how many times this line is reached, when the `counter` feature is on
#[macro_export]
macro_rules! counter {
    ($descr:literal) => {
        if cfg!(feature = "counter") {
            lazy_static::lazy_static! {
                static ref COUNTER_REF: std::sync::Arc<$crate::utils::counter::Counter> =
                    $crate::utils::counter::insert_counter($descr);
            }
            COUNTER_REF.inc();
        }
    };
}

pub use crate::counter;
